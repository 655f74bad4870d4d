//! Programmatic construction of resolved trees
//!
//! Front ends that already own a parse tree lower into [`ast`](crate::ast)
//! directly. `TreeBuilder` is for everything else: embedding hosts that
//! synthesize code, benchmarks, and tests. It interns names, declares
//! symbols, binds every node it creates, and hands out synthetic spans that
//! grow monotonically so each node has a distinct location.
//!
//! All methods take `&self`, so nested construction reads naturally:
//!
//! ```ignore
//! let b = TreeBuilder::new();
//! let lib = DateLibrary::declare(&b);
//! let cal = b.local("cal", "java.util.Calendar");
//! let call = b.call(cal, lib.calendar_set, vec![b.constant(lib.month), b.int(12)]);
//! ```

use std::cell::{Cell, RefCell};

use crate::ast::*;
use crate::interner::{Interner, Symbol};
use crate::semantic::{SemanticModel, SymbolId, SymbolKind};
use crate::span::Span;

/// Name given to constructor symbols.
pub const CONSTRUCTOR_NAME: &str = "<init>";

/// Builds a [`CompilationUnit`] together with its [`Interner`] and
/// [`SemanticModel`].
#[derive(Debug, Default)]
pub struct TreeBuilder {
    interner: RefCell<Interner>,
    model: RefCell<SemanticModel>,
    offset: Cell<usize>,
}

impl TreeBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a name.
    pub fn intern(&self, s: &str) -> Symbol {
        self.interner.borrow_mut().intern(s)
    }

    /// Resolve an interned name.
    pub fn resolve(&self, sym: Symbol) -> String {
        self.interner.borrow().resolve(sym).to_string()
    }

    /// Consume the builder, returning the name table and symbol table.
    pub fn finish(self) -> (Interner, SemanticModel) {
        (self.interner.into_inner(), self.model.into_inner())
    }

    fn next_span(&self, width: usize) -> Span {
        let start = self.offset.get();
        let end = start + width.max(1);
        // One separator byte between nodes keeps spans disjoint.
        self.offset.set(end + 1);
        Span::new(start, end, 1, start as u32 + 1)
    }

    fn symbol_name(&self, id: SymbolId) -> Symbol {
        self.model
            .borrow()
            .symbol(id)
            .map(|info| info.name)
            .unwrap_or_else(|| self.intern("<unknown>"))
    }

    /// Simple (unqualified) name of the type declaring `member`, or of
    /// `member` itself if it is a type.
    fn simple_type_name(&self, member: SymbolId) -> String {
        let model = self.model.borrow();
        let type_sym = match model.symbol(member) {
            Some(info) if info.kind == SymbolKind::Type => Some(info.name),
            Some(_) => model.owner_type_name(member),
            None => None,
        };
        drop(model);
        match type_sym {
            Some(sym) => {
                let qualified = self.resolve(sym);
                qualified.rsplit('.').next().unwrap_or_default().to_string()
            }
            None => "<unknown>".to_string(),
        }
    }

    // ── Declarations ──────────────────────────────────────────────────────

    /// Declare a type by fully qualified name.
    pub fn declare_type(&self, qualified_name: &str) -> SymbolId {
        let name = self.intern(qualified_name);
        self.model.borrow_mut().declare_type(name)
    }

    /// Declare a method on `owner` taking the given parameter types.
    pub fn declare_method(&self, owner: SymbolId, name: &str, params: &[&str]) -> SymbolId {
        let name = self.intern(name);
        let params = params.iter().map(|p| self.intern(p)).collect();
        self.model.borrow_mut().declare_method(owner, name, params)
    }

    /// Declare a constructor of `owner` taking the given parameter types.
    pub fn declare_constructor(&self, owner: SymbolId, params: &[&str]) -> SymbolId {
        let init = self.intern(CONSTRUCTOR_NAME);
        let params = params.iter().map(|p| self.intern(p)).collect();
        self.model.borrow_mut().declare_constructor(owner, init, params)
    }

    /// Declare a field of `owner`.
    pub fn declare_field(&self, owner: SymbolId, name: &str, ty: &str) -> SymbolId {
        let name = self.intern(name);
        let ty = self.intern(ty);
        self.model.borrow_mut().declare_field(owner, name, ty)
    }

    // ── Expressions ───────────────────────────────────────────────────────

    /// Unsigned integer literal.
    pub fn int(&self, value: i64) -> Expression {
        let span = self.next_span(value.to_string().len());
        Expression::IntLiteral(IntLiteral { value, span })
    }

    /// String literal.
    pub fn string(&self, value: &str) -> Expression {
        let span = self.next_span(value.len() + 2);
        Expression::StringLiteral(StringLiteral {
            value: self.intern(value),
            span,
        })
    }

    /// Boolean literal.
    pub fn boolean(&self, value: bool) -> Expression {
        let span = self.next_span(if value { 4 } else { 5 });
        Expression::BooleanLiteral(BooleanLiteral { value, span })
    }

    /// `null`
    pub fn null(&self) -> Expression {
        Expression::NullLiteral(self.next_span(4))
    }

    /// Prefix unary expression.
    pub fn unary(&self, operator: UnaryOperator, operand: Expression) -> Expression {
        let op_span = self.next_span(1);
        let span = op_span.merge(operand.span());
        Expression::Unary(UnaryExpression {
            operator,
            operand: Box::new(operand),
            span,
        })
    }

    /// `-operand`
    pub fn neg(&self, operand: Expression) -> Expression {
        self.unary(UnaryOperator::Minus, operand)
    }

    /// `+operand`
    pub fn plus(&self, operand: Expression) -> Expression {
        self.unary(UnaryOperator::Plus, operand)
    }

    /// Identifier the front end could not bind.
    pub fn ident(&self, name: &str) -> Expression {
        let span = self.next_span(name.len());
        Expression::Identifier(Identifier::new(self.intern(name), span))
    }

    /// Declare a local variable of type `ty` and return a bound reference
    /// to it.
    pub fn local(&self, name: &str, ty: &str) -> Expression {
        let sym = self.intern(name);
        let ty = self.intern(ty);
        let id = self.model.borrow_mut().declare_variable(sym, ty);
        let span = self.next_span(name.len());
        Expression::Identifier(Identifier::resolved(sym, id, span))
    }

    /// `object.member`, bound to `member`.
    pub fn select(&self, object: Expression, member: SymbolId) -> Expression {
        let name = self.symbol_name(member);
        let id_span = self.next_span(self.resolve(name).len());
        let span = object.span().merge(&id_span);
        Expression::MemberSelect(MemberSelectExpression {
            object: Box::new(object),
            identifier: Identifier::resolved(name, member, id_span),
            span,
        })
    }

    /// Static member reference qualified by its declaring type's simple
    /// name, e.g. `Calendar.MONTH`.
    pub fn constant(&self, field: SymbolId) -> Expression {
        let type_name = self.simple_type_name(field);
        let owner = self.model.borrow().symbol(field).and_then(|info| info.owner);
        let qualifier = match owner {
            Some(owner) => {
                let span = self.next_span(type_name.len());
                Expression::Identifier(Identifier::resolved(self.intern(&type_name), owner, span))
            }
            None => self.ident(&type_name),
        };
        self.select(qualifier, field)
    }

    /// `receiver.method(arguments)`, resolved to `method`.
    pub fn call(
        &self,
        receiver: Expression,
        method: SymbolId,
        arguments: Vec<Expression>,
    ) -> Expression {
        let select = self.select(receiver, method);
        self.invocation(select, Some(method), arguments)
    }

    /// `method(arguments)` with an implicit receiver, resolved to `method`.
    pub fn call_unqualified(&self, method: SymbolId, arguments: Vec<Expression>) -> Expression {
        let name = self.symbol_name(method);
        let span = self.next_span(self.resolve(name).len());
        let select = Expression::Identifier(Identifier::resolved(name, method, span));
        self.invocation(select, Some(method), arguments)
    }

    /// `receiver.name(arguments)` that the front end could not resolve.
    pub fn call_unresolved(
        &self,
        receiver: Expression,
        name: &str,
        arguments: Vec<Expression>,
    ) -> Expression {
        let id_span = self.next_span(name.len());
        let span = receiver.span().merge(&id_span);
        let select = Expression::MemberSelect(MemberSelectExpression {
            object: Box::new(receiver),
            identifier: Identifier::new(self.intern(name), id_span),
            span,
        });
        self.invocation(select, None, arguments)
    }

    fn invocation(
        &self,
        method_select: Expression,
        method: Option<SymbolId>,
        arguments: Vec<Expression>,
    ) -> Expression {
        let close = self.next_span(1);
        let span = method_select.span().merge(&close);
        Expression::MethodInvocation(MethodInvocation {
            method_select: Box::new(method_select),
            arguments,
            method,
            span,
        })
    }

    /// `new T(arguments)` resolved to `constructor`; `T` is the simple name
    /// of the constructor's declaring type.
    pub fn new_object(&self, constructor: SymbolId, arguments: Vec<Expression>) -> Expression {
        let type_name = self.simple_type_name(constructor);
        let owner = self.model.borrow().symbol(constructor).and_then(|info| info.owner);
        let keyword = self.next_span(3);
        let name_span = self.next_span(type_name.len());
        let class_name = Identifier {
            name: self.intern(&type_name),
            symbol: owner,
            span: name_span,
        };
        let close = self.next_span(1);
        Expression::NewClass(NewClassExpression {
            class_name,
            arguments,
            constructor: Some(constructor),
            span: keyword.merge(&close),
        })
    }

    /// Binary expression.
    pub fn binary(
        &self,
        operator: BinaryOperator,
        left: Expression,
        right: Expression,
    ) -> Expression {
        let span = left.span().merge(right.span());
        Expression::Binary(BinaryExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
            span,
        })
    }

    /// `left == right`
    pub fn eq(&self, left: Expression, right: Expression) -> Expression {
        self.binary(BinaryOperator::Equal, left, right)
    }

    /// `left != right`
    pub fn ne(&self, left: Expression, right: Expression) -> Expression {
        self.binary(BinaryOperator::NotEqual, left, right)
    }

    /// `(expression)`
    pub fn paren(&self, expression: Expression) -> Expression {
        let open = self.next_span(1);
        let close = self.next_span(1);
        Expression::Parenthesized(ParenthesizedExpression {
            expression: Box::new(expression),
            span: open.merge(&close),
        })
    }

    /// `left = right`
    pub fn assign(&self, left: Expression, right: Expression) -> Expression {
        let span = left.span().merge(right.span());
        Expression::Assignment(AssignmentExpression {
            operator: AssignmentOperator::Assign,
            left: Box::new(left),
            right: Box::new(right),
            span,
        })
    }

    // ── Statements ────────────────────────────────────────────────────────

    /// `expression;`
    pub fn expr_stmt(&self, expression: Expression) -> Statement {
        let span = *expression.span();
        Statement::Expression(ExpressionStatement { expression, span })
    }

    /// `var name = initializer;`
    pub fn var_decl(&self, name: &str, initializer: Option<Expression>) -> Statement {
        let name_span = self.next_span(name.len());
        let span = match &initializer {
            Some(init) => name_span.merge(init.span()),
            None => name_span,
        };
        Statement::VariableDecl(VariableDecl {
            name: Identifier::new(self.intern(name), name_span),
            initializer,
            span,
        })
    }

    /// `if (condition) then_branch`
    pub fn if_stmt(
        &self,
        condition: Expression,
        then_branch: Statement,
        else_branch: Option<Statement>,
    ) -> Statement {
        let span = condition.span().merge(then_branch.span());
        Statement::If(IfStatement {
            condition,
            then_branch: Box::new(then_branch),
            else_branch: else_branch.map(Box::new),
            span,
        })
    }

    /// `return value;`
    pub fn return_stmt(&self, value: Option<Expression>) -> Statement {
        let keyword = self.next_span(6);
        let span = match &value {
            Some(v) => keyword.merge(v.span()),
            None => keyword,
        };
        Statement::Return(ReturnStatement { value, span })
    }

    /// `{ statements }`
    pub fn block(&self, statements: Vec<Statement>) -> BlockStatement {
        let open = self.next_span(1);
        let close = self.next_span(1);
        BlockStatement {
            statements,
            span: open.merge(&close),
        }
    }

    /// Method member with a body.
    pub fn method(&self, name: &str, statements: Vec<Statement>) -> ClassMember {
        let name_span = self.next_span(name.len());
        let body = self.block(statements);
        let span = name_span.merge(&body.span);
        ClassMember::Method(MethodDecl {
            name: Identifier::new(self.intern(name), name_span),
            params: Vec::new(),
            body: Some(body),
            span,
        })
    }

    /// Field member.
    pub fn field(&self, name: &str, initializer: Option<Expression>) -> ClassMember {
        let name_span = self.next_span(name.len());
        let span = match &initializer {
            Some(init) => name_span.merge(init.span()),
            None => name_span,
        };
        ClassMember::Field(FieldDecl {
            name: Identifier::new(self.intern(name), name_span),
            initializer,
            span,
        })
    }

    /// Class declaration.
    pub fn class(&self, name: &str, members: Vec<ClassMember>) -> Statement {
        let name_span = self.next_span(name.len());
        let span = members
            .iter()
            .fold(name_span, |acc, member| acc.merge(member.span()));
        Statement::ClassDecl(ClassDecl {
            name: Identifier::new(self.intern(name), name_span),
            members,
            span,
        })
    }

    /// Compilation unit holding `statements`.
    pub fn unit(&self, statements: Vec<Statement>) -> CompilationUnit {
        let end = self.offset.get();
        CompilationUnit::new(statements, Span::new(0, end, 1, 1))
    }

    /// Compilation unit with a single class whose single method body is
    /// `statements`.
    pub fn unit_in_method(
        &self,
        class_name: &str,
        method_name: &str,
        statements: Vec<Statement>,
    ) -> CompilationUnit {
        let method = self.method(method_name, statements);
        let class = self.class(class_name, vec![method]);
        self.unit(vec![class])
    }
}

/// Symbols of the JDK date and calendar API, declared into a builder.
///
/// Covers `java.util.Calendar` (field constants, `get(int)`,
/// `set(int, int)`), the deprecated getters/setters on `java.util.Date` and
/// `java.sql.Date`, and the `java.util.GregorianCalendar` constructors.
#[derive(Debug, Clone)]
pub struct DateLibrary {
    /// `java.util.Calendar`
    pub calendar: SymbolId,
    /// `java.util.GregorianCalendar`
    pub gregorian_calendar: SymbolId,
    /// `java.util.Date`
    pub util_date: SymbolId,
    /// `java.sql.Date`
    pub sql_date: SymbolId,

    /// `Calendar.get(int)`
    pub calendar_get: SymbolId,
    /// `Calendar.set(int, int)`
    pub calendar_set: SymbolId,

    /// `Calendar.YEAR`
    pub year: SymbolId,
    /// `Calendar.MONTH`
    pub month: SymbolId,
    /// `Calendar.DAY_OF_MONTH`
    pub day_of_month: SymbolId,
    /// `Calendar.HOUR_OF_DAY`
    pub hour_of_day: SymbolId,
    /// `Calendar.MINUTE`
    pub minute: SymbolId,
    /// `Calendar.SECOND`
    pub second: SymbolId,
    /// `Calendar.DAY_OF_WEEK`
    pub day_of_week: SymbolId,

    methods: Vec<(SymbolId, &'static str, SymbolId)>,
    gregorian_ctors: Vec<(usize, SymbolId)>,
    util_date_ctor: SymbolId,
}

const DATE_GETTERS: [&str; 5] = ["getDate", "getMonth", "getHours", "getMinutes", "getSeconds"];
const DATE_SETTERS: [&str; 5] = ["setDate", "setMonth", "setHours", "setMinutes", "setSeconds"];

impl DateLibrary {
    /// Declare the date API into `b`.
    pub fn declare(b: &TreeBuilder) -> Self {
        let calendar = b.declare_type("java.util.Calendar");
        let gregorian_calendar = b.declare_type("java.util.GregorianCalendar");
        let util_date = b.declare_type("java.util.Date");
        let sql_date = b.declare_type("java.sql.Date");

        let calendar_get = b.declare_method(calendar, "get", &["int"]);
        let calendar_set = b.declare_method(calendar, "set", &["int", "int"]);

        let constant = |name| b.declare_field(calendar, name, "int");
        let year = constant("YEAR");
        let month = constant("MONTH");
        let day_of_month = constant("DAY_OF_MONTH");
        let hour_of_day = constant("HOUR_OF_DAY");
        let minute = constant("MINUTE");
        let second = constant("SECOND");
        let day_of_week = constant("DAY_OF_WEEK");

        let mut methods = Vec::new();
        for owner in [util_date, sql_date] {
            for name in DATE_GETTERS {
                methods.push((owner, name, b.declare_method(owner, name, &[])));
            }
            for name in DATE_SETTERS {
                methods.push((owner, name, b.declare_method(owner, name, &["int"])));
            }
        }

        let gregorian_ctors = [0usize, 3, 5, 6]
            .into_iter()
            .map(|arity| {
                let params = vec!["int"; arity];
                (arity, b.declare_constructor(gregorian_calendar, &params))
            })
            .collect();
        let util_date_ctor = b.declare_constructor(util_date, &["int", "int", "int"]);

        Self {
            calendar,
            gregorian_calendar,
            util_date,
            sql_date,
            calendar_get,
            calendar_set,
            year,
            month,
            day_of_month,
            hour_of_day,
            minute,
            second,
            day_of_week,
            methods,
            gregorian_ctors,
            util_date_ctor,
        }
    }

    /// A `getX`/`setX` method declared on `owner` (`util_date` or
    /// `sql_date`), or `None` if `owner` does not declare `name`.
    pub fn method(&self, owner: SymbolId, name: &str) -> Option<SymbolId> {
        self.methods
            .iter()
            .find(|(o, n, _)| *o == owner && *n == name)
            .map(|(_, _, id)| *id)
    }

    /// The all-`int` `GregorianCalendar` constructor of the given arity.
    /// Only arities 0, 3, 5 and 6 are declared.
    pub fn gregorian_ctor(&self, arity: usize) -> Option<SymbolId> {
        self.gregorian_ctors
            .iter()
            .find(|(a, _)| *a == arity)
            .map(|(_, id)| *id)
    }

    /// The deprecated `java.util.Date(int, int, int)` constructor.
    pub fn util_date_ctor(&self) -> SymbolId {
        self.util_date_ctor
    }
}
