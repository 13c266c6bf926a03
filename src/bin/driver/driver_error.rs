use pl0c::lexer::LexError;
use pl0c::parser::ParseError;
use std::io;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("file must end in '.pl0'")]
    BadExtension,
    #[error("couldn't open {0}")]
    Open(String, #[source] io::Error),
    #[error("couldn't read {0}")]
    Read(String, #[source] io::Error),
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Compile(#[from] ParseError),
    #[error("{0:#}")]
    Output(#[from] anyhow::Error),
}

impl DriverError {
    /// Source line to report. Failures outside the source text report line 1,
    /// where scanning would have started.
    pub fn get_ln(&self) -> u64 {
        match self {
            Self::Lex(e) => e.get_ln(),
            Self::Compile(e) => e.get_ln(),
            _ => 1,
        }
    }
}
