use super::number::BoundsError;
use std::fmt;

#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum InnerLexError {
    #[error("unterminated comment")]
    UnterminatedComment,
    #[error("unknown token: '{0}'")]
    UnknownToken(char),
    #[error("unknown token: ':{0}'")]
    BadAssign(char),
    #[error("invalid number: {0}")]
    InvalidNumber(String, #[source] BoundsError),
}

/// Scanner failure together with the line the scanner had reached.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LexError {
    pub inner: InnerLexError,
    ln: u64,
}

impl LexError {
    pub fn get_ln(&self) -> u64 {
        self.ln
    }
}

impl InnerLexError {
    pub(super) fn set_line(self, ln: u64) -> LexError {
        LexError { inner: self, ln }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl std::error::Error for LexError {}
