#![deny(unused_must_use)]
#![warn(clippy::pedantic)]
#![allow(clippy::wildcard_imports)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[cfg(feature = "compiler")]
pub mod emission;
#[cfg(feature = "lexer")]
pub mod lexer;
#[cfg(feature = "compiler")]
pub mod parser;
#[cfg(feature = "compiler")]
pub mod symtab;

/// Compile a whole PL/0 program into C source text.
///
/// Nothing is returned unless the entire program scanned, parsed and resolved.
#[cfg(feature = "compiler")]
pub fn compile(source: &str) -> parser::Result<String> {
    parser::Compiler::new(source).compile()
}
