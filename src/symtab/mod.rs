//! Flat scope table shared by every open block.
//!
//! Symbols are kept in declaration order across nested scopes. Closing a
//! procedure's scope truncates the table back to the last procedure entry, so
//! procedures stay callable after their bodies while their locals disappear.

mod symtab_error;

pub use symtab_error::{Result, SymbolError};

/// Name of the implicit program unit, always present at depth 0.
pub const ENTRY_POINT: &str = "main";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Role {
    Constant,
    Variable,
    Procedure,
}

/// How a name is being used at the point it is looked up.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Usage {
    /// left-hand side of `:=`
    Assign,
    /// factor inside an expression
    Operand,
    /// target of `call`
    Call,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Symbol {
    pub depth: usize,
    pub role: Role,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    pub fn new() -> Self {
        let sentinel = Symbol {
            depth: 0,
            role: Role::Procedure,
            name: ENTRY_POINT.to_owned(),
        };
        Self {
            symbols: vec![sentinel],
        }
    }

    pub fn declare(&mut self, name: &str, role: Role, depth: usize) -> Result<()> {
        let duplicate = self
            .symbols
            .iter()
            .any(|sym| sym.depth == depth && sym.name == name);
        if duplicate {
            return Err(SymbolError::DuplicateSymbol(name.to_owned()));
        }

        self.symbols.push(Symbol {
            depth,
            role,
            name: name.to_owned(),
        });
        Ok(())
    }

    /// Latest declaration of `name`, wherever it was declared.
    pub fn resolve(&self, name: &str) -> Result<&Symbol> {
        self.symbols
            .iter()
            .rev()
            .find(|sym| sym.name == name)
            .ok_or_else(|| SymbolError::UndefinedSymbol(name.to_owned()))
    }

    pub fn check_role(&self, name: &str, usage: Usage) -> Result<()> {
        let symbol = self.resolve(name)?;
        let owned = || name.to_owned();
        match (usage, symbol.role) {
            (Usage::Assign, Role::Constant | Role::Procedure) => {
                Err(SymbolError::MustBeVariable(owned()))
            }
            (Usage::Operand, Role::Procedure) => Err(SymbolError::MustNotBeProcedure(owned())),
            (Usage::Call, Role::Constant | Role::Variable) => {
                Err(SymbolError::MustBeProcedure(owned()))
            }
            _ => Ok(()),
        }
    }

    pub fn close_local_scope(&mut self) {
        let keep = self
            .symbols
            .iter()
            .rposition(|sym| sym.role == Role::Procedure)
            .map_or(1, |pos| pos + 1);
        self.symbols.truncate(keep);
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }
}
