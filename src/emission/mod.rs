//! C code emission
//!
//! [Emitter] appends one C fragment per recognized PL/0 construct to an
//! in-memory buffer. It never looks back at what it already wrote; the parser
//! decides what to emit and when.

#[cfg(test)]
mod emission_tests;

use crate::lexer::Token;
use std::fmt;

/// Banner written at the very end of every translation unit.
pub const VERSION_COMMENT: &str = concat!("/* PL/0 compiler ", env!("CARGO_PKG_VERSION"), " */");

#[derive(Debug, Default)]
pub struct Emitter {
    out: String,
    in_procedure: bool,
}

/// Direct C spelling of a token that maps one-to-one.
fn c_operator(token: &Token) -> Option<&'static str> {
    let op = match token {
        Token::Begin => "{\n",
        Token::End => ";\n}\n",
        Token::If => "if(",
        Token::While => "while(",
        Token::Then | Token::Do => ")",
        Token::Odd | Token::LParen => "(",
        Token::RParen => ")",
        Token::Equal => "==",
        Token::Hash => "!=",
        Token::LessThan => "<",
        Token::GreaterThan => ">",
        Token::Assign => "=",
        Token::Comma => ",",
        Token::Plus => "+",
        Token::Minus => "-",
        Token::Multiply => "*",
        Token::Divide => "/",
        _ => return None,
    };
    Some(op)
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_procedure(&self) -> bool {
        self.in_procedure
    }

    pub fn set_in_procedure(&mut self, in_procedure: bool) {
        self.in_procedure = in_procedure;
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_output(self) -> String {
        self.out
    }

    fn push(&mut self, fragment: &str) {
        self.out.push_str(fragment);
    }

    /// Emits the C rendering of a single token: names, literals, operators and
    /// block keywords. Tokens without a C counterpart emit nothing.
    pub fn symbol(&mut self, token: &Token) {
        match token {
            Token::Identifier(name) => self.push(name),
            Token::Number(n) => self.push(&n.to_string()),
            t => {
                if let Some(op) = c_operator(t) {
                    self.push(op);
                }
            }
        }
    }

    /// Opens `const long NAME=`; the value follows through [`Emitter::symbol`].
    pub fn constant(&mut self, name: &str) {
        self.push(&format!("const long {name}="));
    }

    pub fn variable(&mut self, name: &str) {
        self.push(&format!("long {name};\n"));
    }

    pub fn crlf(&mut self) {
        self.push("\n");
    }

    pub fn semicolon(&mut self) {
        self.push(";\n");
    }

    /// Function header for a named procedure, or for the program entry point
    /// when `name` is `None`.
    pub fn procedure(&mut self, name: Option<&str>) {
        match name {
            Some(name) => self.push(&format!("void\n{name}(void)\n{{\n")),
            None => self.push("int\nmain(int argc, char *argv[])\n{\n"),
        }
    }

    pub fn epilogue(&mut self) {
        self.push(";");
        if !self.in_procedure {
            self.push("return 0;");
        }
        self.push("\n}\n\n");
    }

    pub fn call(&mut self, name: &str) {
        self.push(&format!("{name}();\n"));
    }

    /// Closes the parenthesis opened by `odd` and tests the low bit.
    pub fn odd(&mut self) {
        self.push(")&1");
    }

    pub fn end(&mut self) {
        self.push(VERSION_COMMENT);
        self.push("\n");
    }
}

impl fmt::Display for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.out)
    }
}
