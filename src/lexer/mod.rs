mod cursor;
mod lexer_error;
#[cfg(test)]
mod lexer_tests;
mod number;
mod token;

use cursor::Cursor;
pub use lexer_error::{InnerLexError, LexError};
pub use number::{parse_bounded, BoundsError};
pub use token::{LinedToken, Token};

pub type Result<T> = std::result::Result<T, LexError>;

/// On-demand scanner: hands out one token per call and tracks the current line.
#[derive(Clone)]
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
}

#[inline]
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

#[inline]
fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[inline]
fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '_'
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        let cursor = Cursor::new(source);
        Self { cursor }
    }

    pub fn get_line(&self) -> u64 {
        self.cursor.get_line()
    }

    pub fn next_token(&mut self) -> Result<Token> {
        self.lex_token()
            .map_err(|err| err.set_line(self.cursor.get_line()))
    }

    fn lex_token(&mut self) -> std::result::Result<Token, InnerLexError> {
        loop {
            self.cursor.skip_whitespaces();
            if self.cursor.skip_if(|c| c == '{') {
                self.skip_comment()?;
            } else {
                break;
            }
        }

        let Some(next) = self.cursor.peek() else {
            return Ok(Token::Eof);
        };

        match next {
            c if is_ident_start(c) => Ok(self.lex_identifier()),
            c if c.is_ascii_digit() => self.lex_number(),
            ':' => self.lex_assign(),
            c => {
                let token = Token::try_from(c)?;
                self.cursor.take();
                Ok(token)
            }
        }
    }

    fn skip_comment(&mut self) -> std::result::Result<(), InnerLexError> {
        loop {
            match self.cursor.take() {
                Some('}') => return Ok(()),
                Some(_) => (),
                None => return Err(InnerLexError::UnterminatedComment),
            }
        }
    }

    fn lex_identifier(&mut self) -> Token {
        let word = self.cursor.take_while(is_ident_char);
        Token::from(word.as_str())
    }

    fn lex_number(&mut self) -> std::result::Result<Token, InnerLexError> {
        let digits: String = self
            .cursor
            .take_while(is_number_char)
            .chars()
            .filter(char::is_ascii_digit)
            .collect();

        parse_bounded(&digits, 0, i64::MAX)
            .map(Token::Number)
            .map_err(|err| InnerLexError::InvalidNumber(digits, err))
    }

    fn lex_assign(&mut self) -> std::result::Result<Token, InnerLexError> {
        self.cursor.take();
        match self.cursor.take() {
            Some('=') => Ok(Token::Assign),
            Some(c) => Err(InnerLexError::BadAssign(c)),
            None => Err(InnerLexError::UnknownToken(':')),
        }
    }
}

/// Scans the whole input up to, but not including, [`Token::Eof`].
pub fn tokenize(source: &str) -> Result<Vec<LinedToken>> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        if token == Token::Eof {
            break;
        }
        tokens.push(LinedToken::new(token, lexer.get_line()));
    }
    Ok(tokens)
}
