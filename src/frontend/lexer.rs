use super::cursor::Cursor;
use super::errors::{FrontendError, FrontendResult};
use super::token::{keyword, Token, TokenKind};

use tracing::trace;

pub struct Lexer<'src> {
    source: &'src str,
    cursor: Cursor<'src>,
    line: usize,
    pending: Option<Token<'src>>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer from source.
    pub fn new(source: &'src str) -> Self {
        Lexer {
            source,
            cursor: Cursor::new(source),
            line: 1,
            pending: None,
        }
    }

    /// Line the cursor is currently on, starting at 1.
    pub fn current_line(&self) -> usize {
        self.line
    }

    /// Returns the next token, consuming a previously peeked one first.
    pub fn next_token(&mut self) -> FrontendResult<Token<'src>> {
        match self.pending.take() {
            Some(token) => Ok(token),
            None => self.lex_token(),
        }
    }

    /// Returns the next token without consuming it. Repeated peeks return
    /// the same token.
    pub fn peek_token(&mut self) -> FrontendResult<Token<'src>> {
        if let Some(token) = self.pending {
            return Ok(token);
        }

        let token = self.lex_token()?;
        self.pending = Some(token);
        Ok(token)
    }

    /// Scans raw source up to (not including) the next `terminator`,
    /// bypassing tokenization.
    pub fn scan_until(&mut self, terminator: char) -> FrontendResult<&'src str> {
        debug_assert!(self.pending.is_none(), "raw scan behind a peeked token");

        let start_line = self.line;
        let text = self.cursor.take_until(|ch| ch == terminator);

        if self.cursor.peek().is_none() {
            return Err(FrontendError::Scan {
                terminator,
                line: start_line,
            });
        }

        self.line += count_line_breaks(text);
        Ok(text)
    }

    fn lex_token(&mut self) -> FrontendResult<Token<'src>> {
        let line = self.line;
        let start_idx = self.cursor.position();

        let ch = match self.cursor.peek() {
            Some(ch) => ch,
            None => return Ok(Token::new(line, TokenKind::EndOfInput, "")),
        };

        let kind = match ch {
            // Single-character tokens.
            '$' => self.single(TokenKind::VarPrefix),
            '(' => self.single(TokenKind::LeftParen),
            ')' => self.single(TokenKind::RightParen),
            '=' => self.single(TokenKind::Equals),

            // Either `""` or the opening quote of a string body.
            '"' => {
                if self.cursor.peek_next() == Some('"') {
                    self.cursor.take();
                    self.single(TokenKind::EmptyString)
                } else {
                    self.single(TokenKind::Quote)
                }
            }

            _ if is_name_start(ch) => {
                let name = self.cursor.take_while(is_name_char);
                keyword(name).unwrap_or(TokenKind::Name)
            }

            _ if is_ignored_char(ch) => {
                let run = self.cursor.take_while(is_ignored_char);
                self.line += count_line_breaks(run);
                TokenKind::Ignored
            }

            _ => return Err(FrontendError::Lexical { ch, line }),
        };

        let lexeme = &self.source[start_idx..self.cursor.position()];
        trace!(line, ?kind, lexeme, "scanned token");

        Ok(Token::new(line, kind, lexeme))
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.take();
        kind
    }

    /// Returns an iterator version of lexer. It stops after yielding the
    /// end of input or the first error.
    pub fn iter(self) -> LexerIterator<'src> {
        LexerIterator {
            lexer: self,
            finished: false,
        }
    }
}

pub struct LexerIterator<'src> {
    lexer: Lexer<'src>,
    finished: bool,
}

impl<'src> Iterator for LexerIterator<'src> {
    type Item = FrontendResult<Token<'src>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.lexer.next_token();
        self.finished = match &result {
            Ok(token) => token.is(TokenKind::EndOfInput),
            Err(_) => true,
        };

        Some(result)
    }
}

/// Counts line breaks in `text`. `\r\n` and `\n\r` pairs count once, a lone
/// `\r` or `\n` counts once.
pub fn count_line_breaks(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut lines = 0;
    let mut idx = 0;

    while idx < bytes.len() {
        match (bytes[idx], bytes.get(idx + 1)) {
            (b'\r', Some(b'\n')) | (b'\n', Some(b'\r')) => {
                lines += 1;
                idx += 2;
            }
            (b'\r', _) | (b'\n', _) => {
                lines += 1;
                idx += 1;
            }
            _ => idx += 1,
        }
    }

    lines
}

fn is_name_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_name_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

fn is_ignored_char(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}
