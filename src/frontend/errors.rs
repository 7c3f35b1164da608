use super::token::{Token, TokenKind};

use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum FrontendError {
    #[error("LexicalError: unexpected character {ch:?} on line {line}")]
    Lexical { ch: char, line: usize },

    #[error("ScanError: unclosed string, no closing `{terminator}` for string opened on line {line}")]
    Scan { terminator: char, line: usize },

    #[error("SyntaxError: expected {expected}, but got {found} on line {line}")]
    Syntax {
        expected: TokenKind,
        found: String,
        line: usize,
    },

    #[error("SyntaxError: expected a statement, but got {found} on line {line}")]
    ExpectedStatement { found: String, line: usize },
}

impl FrontendError {
    pub fn syntax(expected: TokenKind, found: &Token) -> Self {
        FrontendError::Syntax {
            expected,
            found: found.to_string(),
            line: found.line,
        }
    }

    pub fn expected_statement(found: &Token) -> Self {
        FrontendError::ExpectedStatement {
            found: found.to_string(),
            line: found.line,
        }
    }
}

pub type FrontendResult<T> = Result<T, FrontendError>;
