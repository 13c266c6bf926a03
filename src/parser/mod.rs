//! Single-pass PL/0 compiler
//!
//! The grammar is implemented as mutually recursive methods on [`Compiler`],
//! one per production, driven by a single token of lookahead. Every method
//! resolves names against the [`SymbolTable`] and emits C through the
//! [`Emitter`] as soon as the corresponding token is recognized; there is no
//! syntax tree.
//!
//! ```text
//! program    := block '.'
//! block      := [ 'const' ident '=' number {',' ident '=' number} ';' ]
//!               [ 'var' ident {',' ident} ';' ]
//!               { 'procedure' ident ';' block ';' }
//!               statement
//! statement  := [ ident ':=' expression
//!               | 'call' ident
//!               | 'begin' statement {';' statement} 'end'
//!               | 'if' condition 'then' statement
//!               | 'while' condition 'do' statement ]
//! condition  := 'odd' expression | expression ('='|'#'|'<'|'>') expression
//! expression := ['+'|'-'] term {('+'|'-') term}
//! term       := factor {('*'|'/') factor}
//! factor     := ident | number | '(' expression ')'
//! ```

mod cursor;
mod parse_error;

use crate::emission::Emitter;
use crate::lexer::Token;
use crate::symtab::{Role, SymbolTable, Usage};
use cursor::Cursor;
pub use parse_error::{InnerParseError, ParseError, Result};

/// Blocks allowed to be open at once: the program and one procedure level.
const MAX_DEPTH: usize = 2;

pub struct Compiler<'a> {
    cursor: Cursor<'a>,
    symbols: SymbolTable,
    emitter: Emitter,
    depth: usize,
}

impl<'a> Compiler<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            symbols: SymbolTable::new(),
            emitter: Emitter::new(),
            depth: 0,
        }
    }

    /// Compiles the whole program and returns the generated C source.
    pub fn compile(mut self) -> Result<String> {
        self.program()?;
        Ok(self.emitter.into_output())
    }

    fn program(&mut self) -> Result<()> {
        self.cursor.bump()?;
        self.block()?;
        self.cursor.expect(&Token::Dot)?;

        if !self.cursor.at_end() {
            return Err(self.error(InnerParseError::TrailingTokens));
        }

        self.emitter.end();
        Ok(())
    }

    fn error(&self, inner: InnerParseError) -> ParseError {
        inner.set_line(self.cursor.get_line())
    }

    fn check_role(&self, name: &str, usage: Usage) -> Result<()> {
        self.symbols
            .check_role(name, usage)
            .map_err(|err| self.error(err.into()))
    }

    fn current_identifier(&self) -> Result<String> {
        match self.cursor.peek() {
            Token::Identifier(name) => Ok(name.clone()),
            t => Err(self.error(InnerParseError::ExpectedIdentifierButGot(t.clone()))),
        }
    }

    /// Declares the current identifier in the innermost open block. The cursor
    /// stays on the identifier.
    fn declare_current(&mut self, role: Role) -> Result<String> {
        let name = self.current_identifier()?;
        let depth = self.depth.saturating_sub(1);
        self.symbols
            .declare(&name, role, depth)
            .map_err(|err| self.error(err.into()))?;
        Ok(name)
    }

    /// Emits the current token and moves past it.
    fn emit_bump(&mut self) -> Result<()> {
        self.emitter.symbol(self.cursor.peek());
        self.cursor.bump()
    }

    fn emit_expect(&mut self, t: &Token) -> Result<()> {
        if self.cursor.peek() == t {
            self.emitter.symbol(t);
        }
        self.cursor.expect(t)
    }

    fn const_declaration(&mut self) -> Result<()> {
        let name = self.declare_current(Role::Constant)?;
        self.emitter.constant(&name);
        self.cursor.bump()?;
        self.cursor.expect(&Token::Equal)?;

        match self.cursor.peek() {
            Token::Number(_) => {
                self.emitter.symbol(self.cursor.peek());
                self.emitter.semicolon();
                self.cursor.bump()
            }
            t => Err(self.error(InnerParseError::ExpectedNumberButGot(t.clone()))),
        }
    }

    fn var_declaration(&mut self) -> Result<()> {
        let name = self.declare_current(Role::Variable)?;
        self.emitter.variable(&name);
        self.cursor.bump()
    }

    fn procedure_declaration(&mut self) -> Result<()> {
        self.emitter.set_in_procedure(true);
        let name = self.declare_current(Role::Procedure)?;
        self.emitter.procedure(Some(&name));
        self.cursor.bump()?;
        self.cursor.expect(&Token::Semicolon)?;

        self.block()?;

        self.cursor.expect(&Token::Semicolon)?;
        self.emitter.set_in_procedure(false);
        self.symbols.close_local_scope();
        Ok(())
    }

    fn block(&mut self) -> Result<()> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error(InnerParseError::NestingDepthExceeded));
        }
        self.depth += 1;

        if self.cursor.bump_if(&Token::Const)? {
            self.const_declaration()?;
            while self.cursor.bump_if(&Token::Comma)? {
                self.const_declaration()?;
            }
            self.cursor.expect(&Token::Semicolon)?;
        }

        if self.cursor.bump_if(&Token::Var)? {
            self.var_declaration()?;
            while self.cursor.bump_if(&Token::Comma)? {
                self.var_declaration()?;
            }
            self.cursor.expect(&Token::Semicolon)?;
            self.emitter.crlf();
        }

        while self.cursor.bump_if(&Token::Procedure)? {
            self.procedure_declaration()?;
        }

        if !self.emitter.in_procedure() {
            self.emitter.procedure(None);
        }

        self.statement()?;
        self.emitter.epilogue();

        self.depth = self
            .depth
            .checked_sub(1)
            .ok_or_else(|| self.error(InnerParseError::DepthUnderflow))?;
        Ok(())
    }

    fn statement(&mut self) -> Result<()> {
        match self.cursor.peek() {
            Token::Identifier(name) => {
                self.check_role(name, Usage::Assign)?;
                self.emit_bump()?;
                self.emit_expect(&Token::Assign)?;
                self.expression()
            }
            Token::Call => {
                self.cursor.bump()?;
                let name = self.current_identifier()?;
                self.check_role(&name, Usage::Call)?;
                self.emitter.call(&name);
                self.cursor.bump()
            }
            Token::Begin => {
                self.emit_bump()?;
                self.statement()?;
                while self.cursor.peek() == &Token::Semicolon {
                    self.emitter.semicolon();
                    self.cursor.bump()?;
                    self.statement()?;
                }
                self.emit_expect(&Token::End)
            }
            Token::If => {
                self.emit_bump()?;
                self.condition()?;
                self.emit_expect(&Token::Then)?;
                self.statement()
            }
            Token::While => {
                self.emit_bump()?;
                self.condition()?;
                self.emit_expect(&Token::Do)?;
                self.statement()
            }
            _ => Ok(()),
        }
    }

    fn condition(&mut self) -> Result<()> {
        if self.cursor.peek() == &Token::Odd {
            self.emit_bump()?;
            self.expression()?;
            self.emitter.odd();
            return Ok(());
        }

        self.expression()?;
        if !self.cursor.peek().is_relop() {
            let got = self.cursor.peek().clone();
            return Err(self.error(InnerParseError::InvalidConditional(got)));
        }
        self.emit_bump()?;
        self.expression()
    }

    fn expression(&mut self) -> Result<()> {
        if self.cursor.peek().is_additive() {
            self.emit_bump()?;
        }

        self.term()?;
        while self.cursor.peek().is_additive() {
            self.emit_bump()?;
            self.term()?;
        }
        Ok(())
    }

    fn term(&mut self) -> Result<()> {
        self.factor()?;
        while self.cursor.peek().is_multiplicative() {
            self.emit_bump()?;
            self.factor()?;
        }
        Ok(())
    }

    fn factor(&mut self) -> Result<()> {
        match self.cursor.peek() {
            Token::Identifier(name) => {
                self.check_role(name, Usage::Operand)?;
                self.emit_bump()
            }
            Token::Number(_) => self.emit_bump(),
            Token::LParen => {
                self.emit_bump()?;
                self.expression()?;
                self.emit_expect(&Token::RParen)
            }
            t => Err(self.error(InnerParseError::BadFactor(t.clone()))),
        }
    }
}
