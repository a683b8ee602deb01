//! The lossless syntax tree.
//!
//! Every node owns the trivia preceding its first token as a [`Space`];
//! separator and bracket trivia that belongs to no child lives in
//! [`RightPadded`]/[`LeftPadded`]/[`Container`] wrappers. Nodes are immutable
//! and shared behind `Rc`; updates go through generated `with_*` setters that
//! preserve the handle when nothing changed.

pub mod expression;
pub mod module;
pub mod op;
pub mod statement;
pub(crate) mod traits;
pub mod whitespace;

pub use expression::Expression;
pub use module::CompilationUnit;
pub use statement::{Statement, StatementKind};
pub use traits::{Container, LeftPadded, RefEq, RightPadded};
pub use whitespace::{Comment, Space};

use std::rc::Rc;

/// Any tree node a cursor frame can point at.
#[derive(Debug, Clone)]
pub enum Tree {
    Unit(Rc<CompilationUnit>),
    Statement(Statement),
    Expression(Expression),
}

impl Tree {
    /// Pointer identity across the whole node universe.
    pub fn ptr_eq(&self, other: &Tree) -> bool {
        match (self, other) {
            (Tree::Unit(a), Tree::Unit(b)) => Rc::ptr_eq(a, b),
            (Tree::Statement(a), Tree::Statement(b)) => a.ptr_eq(b),
            (Tree::Expression(a), Tree::Expression(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    pub fn as_statement(&self) -> Option<&Statement> {
        match self {
            Tree::Statement(statement) => Some(statement),
            _ => None,
        }
    }

    pub fn as_expression(&self) -> Option<&Expression> {
        match self {
            Tree::Expression(expression) => Some(expression),
            _ => None,
        }
    }

    pub fn as_unit(&self) -> Option<&Rc<CompilationUnit>> {
        match self {
            Tree::Unit(unit) => Some(unit),
            _ => None,
        }
    }
}

impl From<Rc<CompilationUnit>> for Tree {
    fn from(unit: Rc<CompilationUnit>) -> Self {
        Tree::Unit(unit)
    }
}

impl From<Statement> for Tree {
    fn from(statement: Statement) -> Self {
        Tree::Statement(statement)
    }
}

impl From<Expression> for Tree {
    fn from(expression: Expression) -> Self {
        Tree::Expression(expression)
    }
}
