//! First spacing layer: keep adjacent word tokens from fusing.
//!
//! Guarantees exactly one space wherever two word-like tokens would otherwise
//! print with nothing between them (`package`/name, modifier chains,
//! `let`/name, `return`/value, `else` followed by a brace-less body). It runs
//! before every other pass so they can assume rendered text stays parseable.
//! Whitespace that is already non-empty, including comment-bearing trivia, is
//! left alone.

use std::rc::Rc;

use crate::cursor::Cursor;
use crate::markers::OmitBraces;
use crate::nodes::expression::Expression;
use crate::nodes::statement::{
    ClassDecl, Else, Import, MethodDecl, Modifier, Package, Return, Statement, VariableDecl,
};
use crate::nodes::whitespace::Space;
use crate::nodes::Tree;
use crate::visitor::{dispatch, TreeVisitor};

pub struct MinimumViableSpacingVisitor {
    stop_after: Option<Tree>,
}

impl MinimumViableSpacingVisitor {
    pub fn new() -> Self {
        Self { stop_after: None }
    }

    pub fn with_stop_after(mut self, stop_after: Option<Tree>) -> Self {
        self.stop_after = stop_after;
        self
    }
}

impl Default for MinimumViableSpacingVisitor {
    fn default() -> Self {
        Self::new()
    }
}

/// One space when the run is zero width, otherwise unchanged.
fn padded(space: &Space) -> Space {
    if space.is_empty() {
        Space::space()
    } else {
        space.clone()
    }
}

/// Whether the statement's first printed character is a word character, so a
/// preceding keyword needs a separator.
fn starts_with_word(statement: &Statement) -> bool {
    match statement {
        Statement::Block(block) => {
            block.markers.contains::<OmitBraces>()
                && block.statements.first().is_some_and(starts_with_word)
        }
        Statement::Empty(_) => false,
        Statement::Expression(expression) => expression_starts_with_word(expression),
        _ => true,
    }
}

fn expression_starts_with_word(expression: &Expression) -> bool {
    match expression {
        Expression::Identifier(_) => true,
        Expression::Literal(literal) => literal
            .source
            .chars()
            .next()
            .is_some_and(|c| c.is_alphanumeric() || c == '_'),
        Expression::FieldAccess(access) => expression_starts_with_word(&access.target),
        Expression::Binary(binary) => expression_starts_with_word(&binary.left),
        Expression::Assignment(assignment) => expression_starts_with_word(&assignment.target),
        Expression::Call(call) => match &call.select {
            Some(select) => expression_starts_with_word(&select.element),
            None => true,
        },
        Expression::ArrayAccess(access) => expression_starts_with_word(&access.indexed),
        Expression::Unary(_) | Expression::Lambda(_) | Expression::Parentheses(_) => false,
    }
}

/// Separate a modifier chain: every modifier after the first needs a prefix.
fn padded_modifiers(modifiers: &[Rc<Modifier>]) -> Vec<Rc<Modifier>> {
    modifiers
        .iter()
        .enumerate()
        .map(|(idx, modifier)| {
            if idx == 0 {
                Rc::clone(modifier)
            } else {
                modifier.with_prefix(padded(&modifier.prefix))
            }
        })
        .collect()
}

impl TreeVisitor for MinimumViableSpacingVisitor {
    fn stop_after(&self) -> Option<Tree> {
        self.stop_after.clone()
    }

    fn visit_package(&mut self, node: &Rc<Package>, cursor: &mut Cursor) -> Rc<Package> {
        let node = dispatch::walk_package(self, node, cursor);
        let name = node.name.with_prefix(padded(node.name.prefix()));
        node.with_name(name)
    }

    fn visit_import(&mut self, node: &Rc<Import>, cursor: &mut Cursor) -> Rc<Import> {
        let node = dispatch::walk_import(self, node, cursor);
        let qualid = node.qualid.with_prefix(padded(node.qualid.prefix()));
        node.with_qualid(qualid)
    }

    fn visit_class_decl(&mut self, node: &Rc<ClassDecl>, cursor: &mut Cursor) -> Rc<ClassDecl> {
        let node = dispatch::walk_class_decl(self, node, cursor);
        let mut node = node.with_modifiers(padded_modifiers(&node.modifiers));
        if !node.modifiers.is_empty() {
            node = node.with_keyword_prefix(padded(&node.keyword_prefix));
        }
        let name = node.name.with_prefix(padded(&node.name.prefix));
        node.with_name(name)
    }

    fn visit_method_decl(&mut self, node: &Rc<MethodDecl>, cursor: &mut Cursor) -> Rc<MethodDecl> {
        let node = dispatch::walk_method_decl(self, node, cursor);
        let mut node = node.with_modifiers(padded_modifiers(&node.modifiers));
        if !node.modifiers.is_empty() {
            node = node.with_keyword_prefix(padded(&node.keyword_prefix));
        }
        let name = node.name.with_prefix(padded(&node.name.prefix));
        node.with_name(name)
    }

    fn visit_variable_decl(
        &mut self,
        node: &Rc<VariableDecl>,
        cursor: &mut Cursor,
    ) -> Rc<VariableDecl> {
        let node = dispatch::walk_variable_decl(self, node, cursor);
        let mut node = node.with_modifiers(padded_modifiers(&node.modifiers));
        if node.let_keyword || !node.modifiers.is_empty() {
            let name = node.name.with_prefix(padded(&node.name.prefix));
            node = node.with_name(name);
        }
        node
    }

    fn visit_return(&mut self, node: &Rc<Return>, cursor: &mut Cursor) -> Rc<Return> {
        let node = dispatch::walk_return(self, node, cursor);
        let expression = node.expression.as_ref().map(|expression| {
            if expression_starts_with_word(expression) {
                expression.with_prefix(padded(expression.prefix()))
            } else {
                expression.clone()
            }
        });
        node.with_expression(expression)
    }

    fn visit_else(&mut self, node: &Rc<Else>, cursor: &mut Cursor) -> Rc<Else> {
        let node = dispatch::walk_else(self, node, cursor);
        if starts_with_word(&node.body) {
            let body = node.body.with_prefix(padded(node.body.prefix()));
            node.with_body(body)
        } else {
            node
        }
    }
}
