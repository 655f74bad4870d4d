//! Statement and declaration nodes

use super::{Expression, Identifier};
use crate::span::Span;

/// Statement (does not produce a value)
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Class declaration with its members
    ClassDecl(ClassDecl),

    /// Local variable: int m = 11;
    VariableDecl(VariableDecl),

    /// Expression statement: cal.set(Calendar.MONTH, 1);
    Expression(ExpressionStatement),

    /// if (test) then else otherwise
    If(IfStatement),

    /// while (test) body
    While(WhileStatement),

    /// return value;
    Return(ReturnStatement),

    /// { ... }
    Block(BlockStatement),

    /// ;
    Empty(Span),
}

impl Statement {
    /// Get the span of this statement
    pub fn span(&self) -> &Span {
        match self {
            Statement::ClassDecl(s) => &s.span,
            Statement::VariableDecl(s) => &s.span,
            Statement::Expression(s) => &s.span,
            Statement::If(s) => &s.span,
            Statement::While(s) => &s.span,
            Statement::Return(s) => &s.span,
            Statement::Block(s) => &s.span,
            Statement::Empty(span) => span,
        }
    }
}

/// Class declaration: class Dates { ... }
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    /// Class name.
    pub name: Identifier,
    /// Fields and methods in source order.
    pub members: Vec<ClassMember>,
    /// Source location.
    pub span: Span,
}

/// A member of a class body.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassMember {
    /// Field declaration
    Field(FieldDecl),
    /// Method declaration
    Method(MethodDecl),
}

impl ClassMember {
    /// Get the span of this member
    pub fn span(&self) -> &Span {
        match self {
            ClassMember::Field(f) => &f.span,
            ClassMember::Method(m) => &m.span,
        }
    }
}

/// Field declaration: Calendar cal = Calendar.getInstance();
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    /// Field name.
    pub name: Identifier,
    /// Initializer, if present.
    pub initializer: Option<Expression>,
    /// Source location.
    pub span: Span,
}

/// Method declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDecl {
    /// Method name.
    pub name: Identifier,
    /// Parameter names.
    pub params: Vec<Identifier>,
    /// None for abstract and interface methods
    pub body: Option<BlockStatement>,
    /// Source location.
    pub span: Span,
}

/// Local variable declaration: int m = 11;
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDecl {
    /// Variable name.
    pub name: Identifier,
    /// Initializer, if present.
    pub initializer: Option<Expression>,
    /// Source location.
    pub span: Span,
}

/// Expression statement: expr;
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    /// The evaluated expression.
    pub expression: Expression,
    /// Span including the semicolon.
    pub span: Span,
}

/// If statement: if (condition) then_branch else else_branch
#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    /// Condition.
    pub condition: Expression,
    /// Branch taken when the condition holds.
    pub then_branch: Box<Statement>,
    /// Optional else branch.
    pub else_branch: Option<Box<Statement>>,
    /// Source location.
    pub span: Span,
}

/// While loop: while (condition) body
#[derive(Debug, Clone, PartialEq)]
pub struct WhileStatement {
    /// Loop condition.
    pub condition: Expression,
    /// Loop body.
    pub body: Box<Statement>,
    /// Source location.
    pub span: Span,
}

/// Return statement: return value;
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    /// Returned value, if any.
    pub value: Option<Expression>,
    /// Source location.
    pub span: Span,
}

/// Block: { statements }
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    /// Statements in source order.
    pub statements: Vec<Statement>,
    /// Span including the braces.
    pub span: Span,
}
