use crate::lexer::{Lexer, Token};
use crate::parser::{InnerParseError, Result};

/// One-token lookahead over the scanner.
///
/// Holds [`Token::Eof`] until the first [`bump`](Cursor::bump).
#[derive(Clone)]
pub struct Cursor<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            lexer: Lexer::new(source),
            current: Token::Eof,
        }
    }

    pub fn peek(&self) -> &Token {
        &self.current
    }

    pub fn get_line(&self) -> u64 {
        self.lexer.get_line()
    }

    pub fn at_end(&self) -> bool {
        self.current == Token::Eof
    }

    pub fn bump(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    pub fn bump_if(&mut self, t: &Token) -> Result<bool> {
        let condition = &self.current == t;
        if condition {
            self.bump()?;
        }
        Ok(condition)
    }

    pub fn expect(&mut self, t: &Token) -> Result<()> {
        if &self.current == t {
            self.bump()
        } else {
            let got = self.current.clone();
            let line = self.get_line();
            Err(InnerParseError::ExpectedButGot(t.clone(), got).set_line(line))
        }
    }
}
