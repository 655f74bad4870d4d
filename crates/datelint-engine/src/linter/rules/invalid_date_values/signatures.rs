//! Call-sites of the JDK date API whose arguments or results carry a field
//! value.
//!
//! Matching is by the resolved member: its declaring type must be exactly
//! the listed type (a subclass does not match), its name must match, and
//! its declared parameter types must satisfy the listed constraints.

use datelint_syntax::ast::{MethodInvocation, NewClassExpression};
use datelint_syntax::{Interner, SemanticModel, SymbolId, SymbolInfo, SymbolKind};

pub const JAVA_UTIL_CALENDAR: &str = "java.util.Calendar";
pub const JAVA_UTIL_GREGORIAN_CALENDAR: &str = "java.util.GregorianCalendar";
pub const JAVA_UTIL_DATE: &str = "java.util.Date";
pub const JAVA_SQL_DATE: &str = "java.sql.Date";

/// How a matched call-site relates to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `date.getMonth()`: the method name names the field.
    Getter,
    /// `cal.get(Calendar.MONTH)`: the first argument names the field.
    IndexedGetter,
    /// `date.setMonth(v)`: the method name names the field.
    Setter,
    /// `cal.set(Calendar.MONTH, v)`: the first argument names the field.
    IndexedSetter,
    /// `new GregorianCalendar(y, m, d, ...)`: argument position names the
    /// field.
    Constructor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberName {
    Named(&'static str),
    AnyConstructor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    Any,
    Named(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Params {
    Exactly(&'static [ParamType]),
    Unconstrained,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub owner: &'static str,
    pub name: MemberName,
    pub params: Params,
    pub shape: Shape,
}

const NO_PARAMS: &[ParamType] = &[];
const INT: &[ParamType] = &[ParamType::Named("int")];
const INT_INT: &[ParamType] = &[ParamType::Named("int"), ParamType::Named("int")];

const fn getter(owner: &'static str, name: &'static str) -> Signature {
    Signature {
        owner,
        name: MemberName::Named(name),
        params: Params::Exactly(NO_PARAMS),
        shape: Shape::Getter,
    }
}

const fn setter(owner: &'static str, name: &'static str) -> Signature {
    Signature {
        owner,
        name: MemberName::Named(name),
        params: Params::Exactly(INT),
        shape: Shape::Setter,
    }
}

/// Calls whose result is a field value, checked when compared with `==`
/// or `!=`.
pub const COMPARISON_SIGNATURES: &[Signature] = &[
    Signature {
        owner: JAVA_UTIL_CALENDAR,
        name: MemberName::Named("get"),
        params: Params::Exactly(INT),
        shape: Shape::IndexedGetter,
    },
    getter(JAVA_UTIL_DATE, "getDate"),
    getter(JAVA_SQL_DATE, "getDate"),
    getter(JAVA_UTIL_DATE, "getMonth"),
    getter(JAVA_SQL_DATE, "getMonth"),
    getter(JAVA_UTIL_DATE, "getHours"),
    getter(JAVA_SQL_DATE, "getHours"),
    getter(JAVA_UTIL_DATE, "getMinutes"),
    getter(JAVA_SQL_DATE, "getMinutes"),
    getter(JAVA_UTIL_DATE, "getSeconds"),
    getter(JAVA_SQL_DATE, "getSeconds"),
];

/// Calls that take a field value as an argument.
pub const MUTATION_SIGNATURES: &[Signature] = &[
    setter(JAVA_UTIL_DATE, "setDate"),
    setter(JAVA_SQL_DATE, "setDate"),
    setter(JAVA_UTIL_DATE, "setMonth"),
    setter(JAVA_SQL_DATE, "setMonth"),
    setter(JAVA_UTIL_DATE, "setHours"),
    setter(JAVA_SQL_DATE, "setHours"),
    setter(JAVA_UTIL_DATE, "setMinutes"),
    setter(JAVA_SQL_DATE, "setMinutes"),
    setter(JAVA_UTIL_DATE, "setSeconds"),
    setter(JAVA_SQL_DATE, "setSeconds"),
    Signature {
        owner: JAVA_UTIL_CALENDAR,
        name: MemberName::Named("set"),
        params: Params::Exactly(INT_INT),
        shape: Shape::IndexedSetter,
    },
    Signature {
        owner: JAVA_UTIL_GREGORIAN_CALENDAR,
        name: MemberName::AnyConstructor,
        params: Params::Unconstrained,
        shape: Shape::Constructor,
    },
];

impl Signature {
    /// The method name, or `None` for constructors.
    pub fn method_name(&self) -> Option<&'static str> {
        match self.name {
            MemberName::Named(name) => Some(name),
            MemberName::AnyConstructor => None,
        }
    }

    /// Whether `member` (declared as `info` in `model`), invoked with
    /// `arg_count` arguments, is this signature.
    pub fn matches(
        &self,
        member: SymbolId,
        info: &SymbolInfo,
        arg_count: usize,
        model: &SemanticModel,
        interner: &Interner,
    ) -> bool {
        let Some(owner) = model.owner_type_name(member) else {
            return false;
        };
        if interner.resolve(owner) != self.owner {
            return false;
        }

        let name_ok = match self.name {
            MemberName::Named(name) => {
                info.kind == SymbolKind::Method && interner.resolve(info.name) == name
            }
            MemberName::AnyConstructor => info.kind == SymbolKind::Constructor,
        };
        if !name_ok {
            return false;
        }

        match self.params {
            Params::Unconstrained => true,
            Params::Exactly(expected) => {
                arg_count == expected.len()
                    && info.params.len() == expected.len()
                    && info
                        .params
                        .iter()
                        .zip(expected)
                        .all(|(&actual, constraint)| match constraint {
                            ParamType::Any => true,
                            ParamType::Named(ty) => interner.resolve(actual) == *ty,
                        })
            }
        }
    }
}

/// The two families of signatures, queried per call-site.
#[derive(Debug, Clone, Copy)]
pub struct SignatureCatalog {
    comparison: &'static [Signature],
    mutation: &'static [Signature],
}

impl SignatureCatalog {
    pub fn new() -> Self {
        Self {
            comparison: COMPARISON_SIGNATURES,
            mutation: MUTATION_SIGNATURES,
        }
    }

    /// Getter-family signature `call` resolves to, if any.
    pub fn match_getter(
        &self,
        call: &MethodInvocation,
        semantic: Option<&SemanticModel>,
        interner: &Interner,
    ) -> Option<&'static Signature> {
        find(self.comparison, call.method, call.arguments.len(), semantic, interner)
    }

    /// Setter-family signature `call` resolves to, if any.
    pub fn match_mutator(
        &self,
        call: &MethodInvocation,
        semantic: Option<&SemanticModel>,
        interner: &Interner,
    ) -> Option<&'static Signature> {
        find(self.mutation, call.method, call.arguments.len(), semantic, interner)
    }

    /// Constructor signature `new_class` resolves to, if any.
    pub fn match_constructor(
        &self,
        new_class: &NewClassExpression,
        semantic: Option<&SemanticModel>,
        interner: &Interner,
    ) -> Option<&'static Signature> {
        find(self.mutation, new_class.constructor, new_class.arguments.len(), semantic, interner)
    }
}

impl Default for SignatureCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn find(
    signatures: &'static [Signature],
    member: Option<SymbolId>,
    arg_count: usize,
    semantic: Option<&SemanticModel>,
    interner: &Interner,
) -> Option<&'static Signature> {
    let model = semantic?;
    let member = member?;
    let info = model.symbol(member)?;
    let found = signatures
        .iter()
        .find(|sig| sig.matches(member, info, arg_count, model, interner))?;
    tracing::trace!(owner = found.owner, shape = ?found.shape, "matched date API signature");
    Some(found)
}
