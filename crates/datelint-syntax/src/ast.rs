//! Resolved syntax tree.
//!
//! This module defines the tree structure handed to datelint rules:
//! - Compilation unit and declarations (classes, methods, fields)
//! - Statements (control flow, local variables, blocks)
//! - Expressions (literals, operators, invocations, object construction)
//!
//! Every node carries a `Span`. Nodes that refer to a declaration carry the
//! `SymbolId` the front end bound them to, or `None` when it could not.

use crate::interner::Symbol;
use crate::semantic::SymbolId;
use crate::span::Span;

pub mod expression;
pub mod statement;
pub mod visitor;

pub use expression::*;
pub use statement::*;
pub use visitor::*;

/// Root node: one source file.
#[derive(Debug, Clone, PartialEq)]
pub struct CompilationUnit {
    /// Top-level statements, normally class declarations.
    pub statements: Vec<Statement>,

    /// Span covering the whole file.
    pub span: Span,
}

impl CompilationUnit {
    /// Create a new compilation unit.
    pub fn new(statements: Vec<Statement>, span: Span) -> Self {
        Self { statements, span }
    }

    /// Check if the unit has no statements.
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Number of top-level statements.
    pub fn len(&self) -> usize {
        self.statements.len()
    }
}

/// A name occurrence, optionally bound to a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    /// Interned name as written.
    pub name: Symbol,
    /// Declaration the front end bound this name to.
    pub symbol: Option<SymbolId>,
    /// Source location.
    pub span: Span,
}

impl Identifier {
    /// An identifier the front end did not bind.
    pub fn new(name: Symbol, span: Span) -> Self {
        Self {
            name,
            symbol: None,
            span,
        }
    }

    /// An identifier bound to `symbol`.
    pub fn resolved(name: Symbol, symbol: SymbolId, span: Span) -> Self {
        Self {
            name,
            symbol: Some(symbol),
            span,
        }
    }
}
