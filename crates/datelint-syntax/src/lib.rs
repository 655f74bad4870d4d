//! Datelint Syntax
//!
//! The resolved syntax tree that datelint rules consume. A front end lowers
//! its own parse tree and type information into these structures:
//!
//! - [`ast`]: tree nodes with precise [`Span`]s and a [`Visitor`](ast::Visitor)
//! - [`interner`]: string interning for names and type names
//! - [`semantic`]: the symbol table binding invocations, constructions and
//!   member selections to their declarations
//! - [`builder`]: programmatic tree construction with synthetic spans
//!
//! Nothing here parses source text.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod ast;
pub mod builder;
pub mod interner;
pub mod semantic;
pub mod span;

pub use builder::{DateLibrary, TreeBuilder};
pub use interner::{Interner, Symbol};
pub use semantic::{SemanticModel, SymbolId, SymbolInfo, SymbolKind};
pub use span::Span;
