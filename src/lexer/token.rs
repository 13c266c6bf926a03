use super::lexer_error::InnerLexError;
use std::fmt;
use std::ops::Deref;

/// Token with attached line number to it.
///
/// To get inner [Token] use [Token::from] to consume or [get_inner](LinedToken::get_inner) to borrow.
#[derive(Debug, Clone, PartialEq)]
pub struct LinedToken {
    pub(crate) inner: Token,
    ln: u64,
}

impl From<LinedToken> for Token {
    fn from(value: LinedToken) -> Self {
        value.inner
    }
}

/// Basic token type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// const keyword
    Const,
    /// var keyword
    Var,
    /// procedure keyword
    Procedure,
    /// call keyword
    Call,
    /// begin keyword
    Begin,
    /// end keyword
    End,
    /// if keyword
    If,
    /// then keyword
    Then,
    /// while keyword
    While,
    /// do keyword
    Do,
    /// odd keyword
    Odd,
    /// any name that is not a keyword
    Identifier(String),
    /// non-negative integer literal, separators already stripped
    Number(i64),
    /// .
    Dot,
    /// =
    Equal,
    /// ,
    Comma,
    /// ;
    Semicolon,
    /// :=
    Assign,
    /// #
    Hash,
    /// <
    LessThan,
    /// >
    GreaterThan,
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Multiply,
    /// /
    Divide,
    /// (
    LParen,
    /// )
    RParen,
    /// end of input
    Eof,
}

impl LinedToken {
    pub fn new(t: Token, ln: u64) -> Self {
        Self { inner: t, ln }
    }

    pub fn get_line(&self) -> u64 {
        self.ln
    }

    pub fn get_inner(&self) -> &Token {
        &self.inner
    }
}

impl Deref for LinedToken {
    type Target = Token;
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl fmt::Display for LinedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.ln, self.inner)
    }
}

impl Token {
    #[inline]
    pub fn is_relop(&self) -> bool {
        matches!(
            self,
            Self::Equal | Self::Hash | Self::LessThan | Self::GreaterThan
        )
    }

    #[inline]
    pub fn is_additive(&self) -> bool {
        matches!(self, Self::Plus | Self::Minus)
    }

    #[inline]
    pub fn is_multiplicative(&self) -> bool {
        matches!(self, Self::Multiply | Self::Divide)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Const => write!(f, "const"),
            Self::Var => write!(f, "var"),
            Self::Procedure => write!(f, "procedure"),
            Self::Call => write!(f, "call"),
            Self::Begin => write!(f, "begin"),
            Self::End => write!(f, "end"),
            Self::If => write!(f, "if"),
            Self::Then => write!(f, "then"),
            Self::While => write!(f, "while"),
            Self::Do => write!(f, "do"),
            Self::Odd => write!(f, "odd"),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::Number(n) => write!(f, "number {n}"),
            Self::Dot => write!(f, "'.'"),
            Self::Equal => write!(f, "'='"),
            Self::Comma => write!(f, "','"),
            Self::Semicolon => write!(f, "';'"),
            Self::Assign => write!(f, "':='"),
            Self::Hash => write!(f, "'#'"),
            Self::LessThan => write!(f, "'<'"),
            Self::GreaterThan => write!(f, "'>'"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Multiply => write!(f, "'*'"),
            Self::Divide => write!(f, "'/'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Eof => write!(f, "end of file"),
        }
    }
}

impl TryFrom<char> for Token {
    type Error = InnerLexError;
    fn try_from(c: char) -> std::result::Result<Self, InnerLexError> {
        match c {
            '.' => Ok(Self::Dot),
            '=' => Ok(Self::Equal),
            ',' => Ok(Self::Comma),
            ';' => Ok(Self::Semicolon),
            '#' => Ok(Self::Hash),
            '<' => Ok(Self::LessThan),
            '>' => Ok(Self::GreaterThan),
            '+' => Ok(Self::Plus),
            '-' => Ok(Self::Minus),
            '*' => Ok(Self::Multiply),
            '/' => Ok(Self::Divide),
            '(' => Ok(Self::LParen),
            ')' => Ok(Self::RParen),
            _ => Err(InnerLexError::UnknownToken(c)),
        }
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        match s {
            "const" => Self::Const,
            "var" => Self::Var,
            "procedure" => Self::Procedure,
            "call" => Self::Call,
            "begin" => Self::Begin,
            "end" => Self::End,
            "if" => Self::If,
            "then" => Self::Then,
            "while" => Self::While,
            "do" => Self::Do,
            "odd" => Self::Odd,
            _ => Self::Identifier(s.to_owned()),
        }
    }
}
