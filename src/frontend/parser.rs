use super::errors::{FrontendError, FrontendResult};
use super::grammar::{Program, Stmt, VariableRef};
use super::lexer::Lexer;
use super::token::{Token, TokenKind};

use tracing::{debug, instrument};

const STRING_TERMINATOR: char = '"';

pub struct Parser<'src> {
    lexer: Lexer<'src>,
    consumed: Option<Vec<Token<'src>>>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Parser {
            lexer: Lexer::new(source),
            consumed: None,
        }
    }

    /// Parses the whole source into a program. Stops at the first error.
    pub fn parse(mut self) -> FrontendResult<Program> {
        self.parse_program()
    }

    /// Like `parse`, but also returns every token the grammar consumed, in
    /// order, up to and including the one an error was raised on. String
    /// bodies are scanned raw and so never show up as tokens.
    pub fn parse_with_tokens(mut self) -> (FrontendResult<Program>, Vec<Token<'src>>) {
        self.consumed = Some(vec![]);
        let result = self.parse_program();
        (result, self.consumed.unwrap_or_default())
    }

    #[instrument(level = "debug", skip_all)]
    fn parse_program(&mut self) -> FrontendResult<Program> {
        let line = self.lexer.current_line();
        let mut statements = vec![];

        // Blank lines before the first statement.
        self.skip_ignored()?;

        loop {
            let token = self.lexer.peek_token()?;

            let stmt = match token.kind {
                TokenKind::EndOfInput => {
                    self.expect(TokenKind::EndOfInput)?;
                    break;
                }
                TokenKind::Print => self.parse_print()?,
                TokenKind::VarPrefix => self.parse_assignment()?,
                _ => return Err(FrontendError::expected_statement(&token)),
            };

            debug!(line = stmt.line(), ?stmt, "parsed statement");
            statements.push(stmt);
        }

        Ok(Program { line, statements })
    }

    /// Consumes the next token, failing if it is not of the expected kind.
    fn expect(&mut self, expected: TokenKind) -> FrontendResult<Token<'src>> {
        let token = self.lexer.next_token()?;
        if let Some(consumed) = self.consumed.as_mut() {
            consumed.push(token);
        }

        if token.is(expected) {
            Ok(token)
        } else {
            Err(FrontendError::syntax(expected, &token))
        }
    }

    /// Consumes a whitespace run if there is one.
    fn skip_ignored(&mut self) -> FrontendResult<()> {
        if self.lexer.peek_token()?.is(TokenKind::Ignored) {
            self.expect(TokenKind::Ignored)?;
        }
        Ok(())
    }

    /// `print ( Ignored? Variable ) Ignored?`
    fn parse_print(&mut self) -> FrontendResult<Stmt> {
        let line = self.expect(TokenKind::Print)?.line;
        self.expect(TokenKind::LeftParen)?;
        self.skip_ignored()?;
        let target = self.parse_variable()?;
        self.expect(TokenKind::RightParen)?;
        self.skip_ignored()?;

        Ok(Stmt::Print { line, target })
    }

    /// `Variable = Ignored? StringLit Ignored?`
    fn parse_assignment(&mut self) -> FrontendResult<Stmt> {
        let target = self.parse_variable()?;
        self.expect(TokenKind::Equals)?;
        self.skip_ignored()?;
        let value = self.parse_string()?;
        self.skip_ignored()?;

        Ok(Stmt::Assignment {
            line: target.line,
            target,
            value,
        })
    }

    /// `$ Name Ignored?`
    fn parse_variable(&mut self) -> FrontendResult<VariableRef> {
        let line = self.expect(TokenKind::VarPrefix)?.line;
        let name = self.expect(TokenKind::Name)?.lexeme;
        self.skip_ignored()?;

        Ok(VariableRef::new(line, name))
    }

    /// Either `""` or a quote, the raw text up to the next quote, and the
    /// closing quote. The body is taken verbatim.
    fn parse_string(&mut self) -> FrontendResult<String> {
        if self.lexer.peek_token()?.is(TokenKind::EmptyString) {
            self.expect(TokenKind::EmptyString)?;
            return Ok(String::new());
        }

        self.expect(TokenKind::Quote)?;
        let body = self.lexer.scan_until(STRING_TERMINATOR)?;
        self.expect(TokenKind::Quote)?;

        Ok(body.to_owned())
    }
}
