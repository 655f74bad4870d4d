//! Visitor for traversing the resolved tree
//!
//! Each `visit_*` method defaults to the matching `walk_*` function, so an
//! implementor overrides only the nodes it cares about and calls the walk
//! function to keep descending.
//!
//! # Example
//!
//! ```ignore
//! use datelint_syntax::ast::*;
//!
//! struct CountInvocations {
//!     count: usize,
//! }
//!
//! impl Visitor for CountInvocations {
//!     fn visit_method_invocation(&mut self, call: &MethodInvocation) {
//!         self.count += 1;
//!         walk_method_invocation(self, call);
//!     }
//! }
//! ```

use super::*;

/// Tree visitor trait
pub trait Visitor: Sized {
    /// Visit the root node.
    fn visit_compilation_unit(&mut self, unit: &CompilationUnit) {
        walk_compilation_unit(self, unit);
    }

    /// Visit any statement.
    fn visit_statement(&mut self, stmt: &Statement) {
        walk_statement(self, stmt);
    }

    /// Visit a class declaration.
    fn visit_class_decl(&mut self, decl: &ClassDecl) {
        walk_class_decl(self, decl);
    }

    /// Visit a method declaration.
    fn visit_method_decl(&mut self, decl: &MethodDecl) {
        walk_method_decl(self, decl);
    }

    /// Visit a local variable declaration.
    fn visit_variable_decl(&mut self, decl: &VariableDecl) {
        walk_variable_decl(self, decl);
    }

    /// Visit a block.
    fn visit_block_statement(&mut self, stmt: &BlockStatement) {
        walk_block_statement(self, stmt);
    }

    /// Visit any expression.
    fn visit_expression(&mut self, expr: &Expression) {
        walk_expression(self, expr);
    }

    /// Visit a method invocation.
    fn visit_method_invocation(&mut self, call: &MethodInvocation) {
        walk_method_invocation(self, call);
    }

    /// Visit an object construction.
    fn visit_new_class(&mut self, expr: &NewClassExpression) {
        walk_new_class(self, expr);
    }

    /// Visit a binary expression.
    fn visit_binary_expression(&mut self, expr: &BinaryExpression) {
        walk_binary_expression(self, expr);
    }

    /// Visit a name occurrence. Leaf node.
    fn visit_identifier(&mut self, _id: &Identifier) {}
}

// ============================================================================
// Walk Functions - Default Traversal Implementations
// ============================================================================

/// Visit every top-level statement.
pub fn walk_compilation_unit<V: Visitor>(visitor: &mut V, unit: &CompilationUnit) {
    for stmt in &unit.statements {
        visitor.visit_statement(stmt);
    }
}

/// Visit the children of a statement.
pub fn walk_statement<V: Visitor>(visitor: &mut V, stmt: &Statement) {
    match stmt {
        Statement::ClassDecl(decl) => visitor.visit_class_decl(decl),
        Statement::VariableDecl(decl) => visitor.visit_variable_decl(decl),
        Statement::Expression(stmt) => visitor.visit_expression(&stmt.expression),
        Statement::If(stmt) => {
            visitor.visit_expression(&stmt.condition);
            visitor.visit_statement(&stmt.then_branch);
            if let Some(else_branch) = &stmt.else_branch {
                visitor.visit_statement(else_branch);
            }
        }
        Statement::While(stmt) => {
            visitor.visit_expression(&stmt.condition);
            visitor.visit_statement(&stmt.body);
        }
        Statement::Return(stmt) => {
            if let Some(value) = &stmt.value {
                visitor.visit_expression(value);
            }
        }
        Statement::Block(stmt) => visitor.visit_block_statement(stmt),
        Statement::Empty(_) => {}
    }
}

/// Visit the name and members of a class, including field initializers.
pub fn walk_class_decl<V: Visitor>(visitor: &mut V, decl: &ClassDecl) {
    visitor.visit_identifier(&decl.name);
    for member in &decl.members {
        match member {
            ClassMember::Field(field) => {
                visitor.visit_identifier(&field.name);
                if let Some(init) = &field.initializer {
                    visitor.visit_expression(init);
                }
            }
            ClassMember::Method(method) => visitor.visit_method_decl(method),
        }
    }
}

/// Visit the name, parameters and body of a method.
pub fn walk_method_decl<V: Visitor>(visitor: &mut V, decl: &MethodDecl) {
    visitor.visit_identifier(&decl.name);
    for param in &decl.params {
        visitor.visit_identifier(param);
    }
    if let Some(body) = &decl.body {
        visitor.visit_block_statement(body);
    }
}

/// Visit the name and initializer of a local variable.
pub fn walk_variable_decl<V: Visitor>(visitor: &mut V, decl: &VariableDecl) {
    visitor.visit_identifier(&decl.name);
    if let Some(init) = &decl.initializer {
        visitor.visit_expression(init);
    }
}

/// Visit every statement of a block.
pub fn walk_block_statement<V: Visitor>(visitor: &mut V, stmt: &BlockStatement) {
    for statement in &stmt.statements {
        visitor.visit_statement(statement);
    }
}

/// Visit the children of an expression.
pub fn walk_expression<V: Visitor>(visitor: &mut V, expr: &Expression) {
    match expr {
        Expression::IntLiteral(_)
        | Expression::StringLiteral(_)
        | Expression::BooleanLiteral(_)
        | Expression::NullLiteral(_)
        | Expression::This(_) => {}
        Expression::Identifier(id) => visitor.visit_identifier(id),
        Expression::MemberSelect(select) => {
            visitor.visit_expression(&select.object);
            visitor.visit_identifier(&select.identifier);
        }
        Expression::MethodInvocation(call) => visitor.visit_method_invocation(call),
        Expression::NewClass(new) => visitor.visit_new_class(new),
        Expression::Unary(unary) => visitor.visit_expression(&unary.operand),
        Expression::Binary(binary) => visitor.visit_binary_expression(binary),
        Expression::Assignment(assign) => {
            visitor.visit_expression(&assign.left);
            visitor.visit_expression(&assign.right);
        }
        Expression::Conditional(cond) => {
            visitor.visit_expression(&cond.test);
            visitor.visit_expression(&cond.consequent);
            visitor.visit_expression(&cond.alternate);
        }
        Expression::Parenthesized(paren) => visitor.visit_expression(&paren.expression),
    }
}

/// Visit the callee, then the arguments in order.
pub fn walk_method_invocation<V: Visitor>(visitor: &mut V, call: &MethodInvocation) {
    visitor.visit_expression(&call.method_select);
    for arg in &call.arguments {
        visitor.visit_expression(arg);
    }
}

/// Visit the class name, then the arguments in order.
pub fn walk_new_class<V: Visitor>(visitor: &mut V, expr: &NewClassExpression) {
    visitor.visit_identifier(&expr.class_name);
    for arg in &expr.arguments {
        visitor.visit_expression(arg);
    }
}

/// Visit the left operand, then the right.
pub fn walk_binary_expression<V: Visitor>(visitor: &mut V, expr: &BinaryExpression) {
    visitor.visit_expression(&expr.left);
    visitor.visit_expression(&expr.right);
}
