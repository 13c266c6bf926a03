use crate::lexer::{InnerLexError, LexError, Token};
use crate::symtab::SymbolError;
use std::fmt::{Display, Formatter};

pub type Result<T> = std::result::Result<T, ParseError>;

#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum InnerParseError {
    #[error(transparent)]
    Lex(#[from] InnerLexError),
    #[error(transparent)]
    Symbol(#[from] SymbolError),
    #[error("syntax error: expected {0}, but got {1}")]
    ExpectedButGot(Token, Token),
    #[error("syntax error: expected identifier, but got {0}")]
    ExpectedIdentifierButGot(Token),
    #[error("syntax error: expected number, but got {0}")]
    ExpectedNumberButGot(Token),
    #[error("invalid conditional: {0}")]
    InvalidConditional(Token),
    #[error("invalid factor: {0}")]
    BadFactor(Token),
    #[error("nesting depth exceeded")]
    NestingDepthExceeded,
    #[error("nesting depth fell below 0")]
    DepthUnderflow,
    #[error("extra tokens at end of file")]
    TrailingTokens,
}

/// First fatal error of a compilation and the line it was detected on.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ParseError {
    pub inner: InnerParseError,
    pub ln: u64,
}

impl ParseError {
    pub fn get_ln(&self) -> u64 {
        self.ln
    }
}

impl InnerParseError {
    pub fn set_line(self, ln: u64) -> ParseError {
        ParseError { inner: self, ln }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        let ln = err.get_ln();
        InnerParseError::Lex(err.inner).set_line(ln)
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl std::error::Error for ParseError {}
