use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    EndOfInput,

    // Single-character tokens.
    VarPrefix,
    LeftParen,
    RightParen,
    Equals,
    Quote,

    // Two adjacent quotes.
    EmptyString,

    // Literals.
    Name,

    // Keywords.
    Print,

    // A run of whitespace.
    Ignored,
}

/// Smallest lexical unit. `line` is the line the token starts on.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Token<'src> {
    pub line: usize,
    pub kind: TokenKind,
    pub lexeme: &'src str,
}

impl<'src> Token<'src> {
    pub fn new(line: usize, kind: TokenKind, lexeme: &'src str) -> Self {
        Token { line, kind, lexeme }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

/// Reserved words. `print` is the only one.
pub fn keyword(name: &str) -> Option<TokenKind> {
    match name {
        "print" => Some(TokenKind::Print),
        _ => None,
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            TokenKind::EndOfInput => "end of input",
            TokenKind::VarPrefix => "`$`",
            TokenKind::LeftParen => "`(`",
            TokenKind::RightParen => "`)`",
            TokenKind::Equals => "`=`",
            TokenKind::Quote => "`\"`",
            TokenKind::EmptyString => "`\"\"`",
            TokenKind::Name => "name",
            TokenKind::Print => "`print`",
            TokenKind::Ignored => "whitespace",
        };
        f.write_str(name)
    }
}

impl<'src> fmt::Display for Token<'src> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            TokenKind::Name => write!(f, "name `{}`", self.lexeme),
            kind => write!(f, "{}", kind),
        }
    }
}
