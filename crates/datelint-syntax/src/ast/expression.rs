//! Expression nodes
//!
//! Literal, operator, member-selection, invocation and object-construction
//! expressions. Invocations and constructions record the member the front
//! end resolved them to.

use super::Identifier;
use crate::interner::Symbol;
use crate::semantic::SymbolId;
use crate::span::Span;

/// Expression (produces a value)
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Integer literal: 42. Never carries a sign; `-1` is a unary minus.
    IntLiteral(IntLiteral),

    /// String literal: "hello"
    StringLiteral(StringLiteral),

    /// Boolean literal: true, false
    BooleanLiteral(BooleanLiteral),

    /// Null literal
    NullLiteral(Span),

    /// Identifier: x, Calendar
    Identifier(Identifier),

    /// Member selection: cal.MONTH, Calendar.MONTH
    MemberSelect(MemberSelectExpression),

    /// Method invocation: cal.set(Calendar.MONTH, 1), setMonth(1)
    MethodInvocation(MethodInvocation),

    /// Object construction: new GregorianCalendar(2020, 1, 1)
    NewClass(NewClassExpression),

    /// Unary expression: -1, +x, !b
    Unary(UnaryExpression),

    /// Binary expression: a == b, x + 1
    Binary(BinaryExpression),

    /// Assignment: x = 1, x += 1
    Assignment(AssignmentExpression),

    /// Ternary: c ? a : b
    Conditional(ConditionalExpression),

    /// Parenthesized: (x)
    Parenthesized(ParenthesizedExpression),

    /// this
    This(Span),
}

impl Expression {
    /// Get the span of this expression
    pub fn span(&self) -> &Span {
        match self {
            Expression::IntLiteral(e) => &e.span,
            Expression::StringLiteral(e) => &e.span,
            Expression::BooleanLiteral(e) => &e.span,
            Expression::NullLiteral(span) => span,
            Expression::Identifier(e) => &e.span,
            Expression::MemberSelect(e) => &e.span,
            Expression::MethodInvocation(e) => &e.span,
            Expression::NewClass(e) => &e.span,
            Expression::Unary(e) => &e.span,
            Expression::Binary(e) => &e.span,
            Expression::Assignment(e) => &e.span,
            Expression::Conditional(e) => &e.span,
            Expression::Parenthesized(e) => &e.span,
            Expression::This(span) => span,
        }
    }

    /// Check if this expression is a literal
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Expression::IntLiteral(_)
                | Expression::StringLiteral(_)
                | Expression::BooleanLiteral(_)
                | Expression::NullLiteral(_)
        )
    }
}

/// Integer literal: 42
#[derive(Debug, Clone, PartialEq)]
pub struct IntLiteral {
    /// Magnitude as written (always non-negative).
    pub value: i64,
    /// Span of the digits.
    pub span: Span,
}

/// String literal: "hello"
#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    /// Interned contents, without quotes.
    pub value: Symbol,
    /// Span including the quotes.
    pub span: Span,
}

/// Boolean literal: true, false
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanLiteral {
    /// Literal value.
    pub value: bool,
    /// Source location.
    pub span: Span,
}

/// Member selection: object.identifier
///
/// The selected member's binding lives on `identifier.symbol`.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberSelectExpression {
    /// Qualifier left of the dot.
    pub object: Box<Expression>,
    /// Selected member name.
    pub identifier: Identifier,
    /// Source location.
    pub span: Span,
}

/// Method invocation.
///
/// `method_select` is either an [`Expression::Identifier`] for an
/// unqualified call or an [`Expression::MemberSelect`] for `recv.name(...)`.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodInvocation {
    /// Callee as written.
    pub method_select: Box<Expression>,
    /// Arguments in source order.
    pub arguments: Vec<Expression>,
    /// Resolved overload, if the front end bound the call.
    pub method: Option<SymbolId>,
    /// Source location.
    pub span: Span,
}

impl MethodInvocation {
    /// The invoked name as written, whether qualified or not.
    pub fn method_name(&self) -> Option<Symbol> {
        match self.method_select.as_ref() {
            Expression::Identifier(id) => Some(id.name),
            Expression::MemberSelect(select) => Some(select.identifier.name),
            _ => None,
        }
    }
}

/// Object construction: new T(args)
#[derive(Debug, Clone, PartialEq)]
pub struct NewClassExpression {
    /// Constructed type name as written.
    pub class_name: Identifier,
    /// Arguments in source order.
    pub arguments: Vec<Expression>,
    /// Resolved constructor overload, if any.
    pub constructor: Option<SymbolId>,
    /// Source location.
    pub span: Span,
}

/// Unary expression: -x, +x, !x, ~x
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpression {
    /// Operator.
    pub operator: UnaryOperator,
    /// Operand.
    pub operand: Box<Expression>,
    /// Source location.
    pub span: Span,
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `+x`
    Plus,
    /// `-x`
    Minus,
    /// `!x`
    Not,
    /// `~x`
    BitwiseNot,
    /// `++x`
    PrefixIncrement,
    /// `--x`
    PrefixDecrement,
    /// `x++`
    PostfixIncrement,
    /// `x--`
    PostfixDecrement,
}

/// Binary expression: x + y, a == b
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    /// Operator.
    pub operator: BinaryOperator,
    /// Left operand.
    pub left: Box<Expression>,
    /// Right operand.
    pub right: Box<Expression>,
    /// Source location.
    pub span: Span,
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Modulo,

    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    LessThan,
    /// `<=`
    LessEqual,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterEqual,

    /// `&&`
    And,
    /// `||`
    Or,

    /// `&`
    BitwiseAnd,
    /// `|`
    BitwiseOr,
    /// `^`
    BitwiseXor,
    /// `<<`
    LeftShift,
    /// `>>`
    RightShift,
    /// `>>>`
    UnsignedRightShift,
}

impl BinaryOperator {
    /// `==` or `!=`.
    pub fn is_equality(self) -> bool {
        matches!(self, BinaryOperator::Equal | BinaryOperator::NotEqual)
    }
}

/// Assignment: x = 42, y += 1
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpression {
    /// Operator.
    pub operator: AssignmentOperator,
    /// Assignment target.
    pub left: Box<Expression>,
    /// Assigned value.
    pub right: Box<Expression>,
    /// Source location.
    pub span: Span,
}

/// Assignment operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentOperator {
    /// `=`
    Assign,
    /// `+=`
    AddAssign,
    /// `-=`
    SubtractAssign,
    /// `*=`
    MultiplyAssign,
    /// `/=`
    DivideAssign,
}

/// Ternary: test ? consequent : alternate
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalExpression {
    /// Condition.
    pub test: Box<Expression>,
    /// Value when the condition holds.
    pub consequent: Box<Expression>,
    /// Value otherwise.
    pub alternate: Box<Expression>,
    /// Source location.
    pub span: Span,
}

/// Parenthesized expression: (x)
#[derive(Debug, Clone, PartialEq)]
pub struct ParenthesizedExpression {
    /// Inner expression.
    pub expression: Box<Expression>,
    /// Span including the parentheses.
    pub span: Span,
}
