//! Symbol table for a resolved compilation unit
//!
//! The front end declares every type, method, constructor and field a unit
//! references, then stores the resulting [`SymbolId`]s on the tree nodes that
//! refer to them. Types are identified by their fully qualified name; two
//! types are the same type iff their names are the same symbol.

use rustc_hash::FxHashMap;

use crate::interner::Symbol;

/// Index of a symbol in a [`SemanticModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolId(u32);

/// What a symbol declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    /// A class or interface. Its name is fully qualified.
    Type,
    /// A method on its owning type.
    Method,
    /// A constructor of its owning type.
    Constructor,
    /// A field (including static constants) of its owning type.
    Field,
    /// A local variable or parameter.
    Variable,
}

/// A single declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolInfo {
    /// Simple name; fully qualified for types, `<init>` for constructors.
    pub name: Symbol,
    /// Declaration kind.
    pub kind: SymbolKind,
    /// Declaring type, for members.
    pub owner: Option<SymbolId>,
    /// Fully qualified declared type, for fields and variables.
    pub ty: Option<Symbol>,
    /// Fully qualified parameter types, for methods and constructors.
    pub params: Vec<Symbol>,
}

/// Arena of declarations with lookup of types by qualified name.
#[derive(Debug, Clone, Default)]
pub struct SemanticModel {
    symbols: Vec<SymbolInfo>,
    types: FxHashMap<Symbol, SymbolId>,
}

impl SemanticModel {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, info: SymbolInfo) -> SymbolId {
        let id = SymbolId(self.symbols.len() as u32);
        self.symbols.push(info);
        id
    }

    /// Declare a type by fully qualified name. Declaring the same name twice
    /// returns the original symbol.
    pub fn declare_type(&mut self, qualified_name: Symbol) -> SymbolId {
        if let Some(&id) = self.types.get(&qualified_name) {
            return id;
        }
        let id = self.push(SymbolInfo {
            name: qualified_name,
            kind: SymbolKind::Type,
            owner: None,
            ty: None,
            params: Vec::new(),
        });
        self.types.insert(qualified_name, id);
        id
    }

    /// Declare a method on `owner` with the given parameter types.
    pub fn declare_method(
        &mut self,
        owner: SymbolId,
        name: Symbol,
        params: Vec<Symbol>,
    ) -> SymbolId {
        self.push(SymbolInfo {
            name,
            kind: SymbolKind::Method,
            owner: Some(owner),
            ty: None,
            params,
        })
    }

    /// Declare a constructor of `owner`. `init` is the interned constructor
    /// name (conventionally `<init>`).
    pub fn declare_constructor(
        &mut self,
        owner: SymbolId,
        init: Symbol,
        params: Vec<Symbol>,
    ) -> SymbolId {
        self.push(SymbolInfo {
            name: init,
            kind: SymbolKind::Constructor,
            owner: Some(owner),
            ty: None,
            params,
        })
    }

    /// Declare a field of `owner` with declared type `ty`.
    pub fn declare_field(&mut self, owner: SymbolId, name: Symbol, ty: Symbol) -> SymbolId {
        self.push(SymbolInfo {
            name,
            kind: SymbolKind::Field,
            owner: Some(owner),
            ty: Some(ty),
            params: Vec::new(),
        })
    }

    /// Declare a local variable or parameter.
    pub fn declare_variable(&mut self, name: Symbol, ty: Symbol) -> SymbolId {
        self.push(SymbolInfo {
            name,
            kind: SymbolKind::Variable,
            owner: None,
            ty: Some(ty),
            params: Vec::new(),
        })
    }

    /// Look up a declaration.
    pub fn symbol(&self, id: SymbolId) -> Option<&SymbolInfo> {
        self.symbols.get(id.0 as usize)
    }

    /// Look up a type by fully qualified name.
    pub fn lookup_type(&self, qualified_name: Symbol) -> Option<SymbolId> {
        self.types.get(&qualified_name).copied()
    }

    /// Fully qualified name of the type that declares `id`.
    pub fn owner_type_name(&self, id: SymbolId) -> Option<Symbol> {
        let owner = self.symbol(id)?.owner?;
        let owner = self.symbol(owner)?;
        (owner.kind == SymbolKind::Type).then_some(owner.name)
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// True if nothing has been declared.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
