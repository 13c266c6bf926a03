pub type Result<T> = std::result::Result<T, SymbolError>;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SymbolError {
    #[error("duplicate symbol: {0}")]
    DuplicateSymbol(String),
    #[error("undefined symbol: {0}")]
    UndefinedSymbol(String),
    #[error("must be a variable: {0}")]
    MustBeVariable(String),
    #[error("must not be a procedure: {0}")]
    MustNotBeProcedure(String),
    #[error("must be a procedure: {0}")]
    MustBeProcedure(String),
}
