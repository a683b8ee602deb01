//! Visitor framework for tree rewriting.
//!
//! A [`TreeVisitor`] has one method per node kind, each defaulting to the
//! matching `walk_*` free function in [`dispatch`], which recurses into the
//! children in fixed order and rebuilds a node only when a child changed by
//! identity. Override a `visit_*` method to rewrite that kind; call the
//! `walk_*` function from the override to keep descending.
//!
//! # Secondary hooks
//!
//! [`pre_statement`](TreeVisitor::pre_statement) and
//! [`pre_expression`](TreeVisitor::pre_expression) run before kind dispatch
//! for every statement and expression. A hook returning
//! [`HookResult::Final`] short-circuits: the replacement propagates outward
//! immediately, without kind-specific handling, even when it is no longer the
//! original concrete kind.
//!
//! # Stop-after
//!
//! A visitor reporting a [`stop_after`](TreeVisitor::stop_after) target is
//! bounded: once the target node has been visited, the dispatcher posts a
//! stop message on the cursor's root frame and every subsequent visit returns
//! its input untouched.

pub mod dispatch;

use std::rc::Rc;

use crate::cursor::Cursor;
use crate::nodes::expression::{
    ArrayAccess, Assignment, Binary, Expression, FieldAccess, Identifier, Lambda, Literal,
    MethodCall, Parentheses, Unary,
};
use crate::nodes::module::CompilationUnit;
use crate::nodes::statement::{
    Block, ClassDecl, Else, Empty, For, If, Import, MethodDecl, Package, Return, Statement,
    VariableDecl, While,
};
use crate::nodes::Tree;

/// What a secondary hook decided.
#[derive(Debug, Clone)]
pub enum HookResult<T> {
    /// Proceed with kind dispatch.
    Continue,
    /// Use this value as the result; skip kind dispatch entirely.
    Final(T),
}

macro_rules! visitor_methods {
    ( $( $(#[$meta:meta])* $visit:ident => $walk:ident ($ty:ty) ),* $(,)? ) => {
        $(
            $(#[$meta])*
            #[allow(unused_variables)]
            fn $visit(&mut self, node: &$ty, cursor: &mut Cursor) -> $ty {
                dispatch::$walk(self, node, cursor)
            }
        )*
    };
}

/// A tree-to-tree rewriting pass.
pub trait TreeVisitor {
    /// The node after which this visitor stops rewriting, if the run is
    /// bounded.
    fn stop_after(&self) -> Option<Tree> {
        None
    }

    /// Hook run for every statement before kind dispatch.
    #[allow(unused_variables)]
    fn pre_statement(&mut self, statement: &Statement, cursor: &mut Cursor) -> HookResult<Statement> {
        HookResult::Continue
    }

    /// Hook run for every expression before kind dispatch.
    #[allow(unused_variables)]
    fn pre_expression(
        &mut self,
        expression: &Expression,
        cursor: &mut Cursor,
    ) -> HookResult<Expression> {
        HookResult::Continue
    }

    /// Visit a whole unit. The entry point of a pass.
    fn visit_unit(
        &mut self,
        unit: &Rc<CompilationUnit>,
        cursor: &mut Cursor,
    ) -> Rc<CompilationUnit> {
        dispatch::walk_unit(self, unit, cursor)
    }

    /// Visit any statement: frame push, stop check, hook, kind dispatch.
    fn visit_statement(&mut self, statement: &Statement, cursor: &mut Cursor) -> Statement {
        dispatch::walk_statement(self, statement, cursor)
    }

    /// Visit any expression: frame push, stop check, hook, kind dispatch.
    fn visit_expression(&mut self, expression: &Expression, cursor: &mut Cursor) -> Expression {
        dispatch::walk_expression(self, expression, cursor)
    }

    visitor_methods! {
        visit_package => walk_package (Rc<Package>),
        visit_import => walk_import (Rc<Import>),
        visit_class_decl => walk_class_decl (Rc<ClassDecl>),
        visit_method_decl => walk_method_decl (Rc<MethodDecl>),
        visit_variable_decl => walk_variable_decl (Rc<VariableDecl>),
        visit_block => walk_block (Rc<Block>),
        visit_if => walk_if (Rc<If>),
        visit_else => walk_else (Rc<Else>),
        visit_while => walk_while (Rc<While>),
        visit_for => walk_for (Rc<For>),
        visit_return => walk_return (Rc<Return>),
        visit_empty => walk_empty (Rc<Empty>),
        visit_identifier => walk_identifier (Rc<Identifier>),
        visit_field_access => walk_field_access (Rc<FieldAccess>),
        visit_literal => walk_literal (Rc<Literal>),
        visit_binary => walk_binary (Rc<Binary>),
        visit_unary => walk_unary (Rc<Unary>),
        visit_assignment => walk_assignment (Rc<Assignment>),
        visit_method_call => walk_method_call (Rc<MethodCall>),
        visit_lambda => walk_lambda (Rc<Lambda>),
        visit_array_access => walk_array_access (Rc<ArrayAccess>),
        visit_parentheses => walk_parentheses (Rc<Parentheses>),
    }
}
