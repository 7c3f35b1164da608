use std::iter::Peekable;
use std::str::CharIndices;

#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    source: &'src str,
    char_iterator: Peekable<CharIndices<'src>>,
    byte_pos: usize,
}

impl<'src> Cursor<'src> {
    /// Creates a character stream for the source string.
    pub fn new(source: &'src str) -> Self {
        Cursor {
            source,
            char_iterator: source.char_indices().peekable(),
            byte_pos: 0,
        }
    }

    /// Byte offset of the next unconsumed character.
    pub fn position(&self) -> usize {
        self.byte_pos
    }

    /// Peeks the next character without consuming it.
    pub fn peek(&mut self) -> Option<char> {
        self.char_iterator.peek().map(|&(_, ch)| ch)
    }

    /// Peeks the next to next character without consuming it.
    pub fn peek_next(&self) -> Option<char> {
        let mut temp_cursor = self.clone();
        temp_cursor.take();
        temp_cursor.peek()
    }

    /// Consumes the next character.
    pub fn take(&mut self) -> Option<char> {
        let (_, ch) = self.char_iterator.next()?;

        self.byte_pos = match self.char_iterator.peek() {
            Some(&(idx, _)) => idx,
            None => self.source.len(),
        };

        Some(ch)
    }

    /// Consumes next characters as long as they meet condition and returns
    /// the consumed slice. At the end, the next character fails condition.
    pub fn take_while<F>(&mut self, condition: F) -> &'src str
    where
        F: Fn(char) -> bool,
    {
        let start = self.byte_pos;
        while let Some(ch) = self.peek() {
            if !condition(ch) {
                break;
            }
            self.take();
        }
        &self.source[start..self.byte_pos]
    }

    /// Consumes next characters as long as they do not meet condition.
    /// At the end, the next character meets condition.
    pub fn take_until<F>(&mut self, condition: F) -> &'src str
    where
        F: Fn(char) -> bool,
    {
        self.take_while(|ch| !condition(ch))
    }
}
