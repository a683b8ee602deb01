//! Printing trees back to source text.
//!
//! Each node prints its own trivia followed by its tokens and children, so a
//! freshly parsed tree prints back to the original input byte for byte. The
//! printer consults markers where they change surface syntax: a block carrying
//! [`OmitBraces`] prints without its braces.

use std::rc::Rc;

use crate::markers::OmitBraces;
use crate::nodes::expression::{
    ArrayAccess, Assignment, Binary, Expression, FieldAccess, Identifier, Lambda, Literal,
    MethodCall, Parentheses, Unary,
};
use crate::nodes::module::CompilationUnit;
use crate::nodes::statement::{
    Block, ClassDecl, ControlParens, Else, Empty, For, ForControl, If, Import, MethodDecl,
    Modifier, Package, Return, Statement, VariableDecl, While,
};
use crate::nodes::traits::Container;
use crate::nodes::whitespace::Space;

/// Accumulates printed source text.
#[derive(Debug, Default)]
pub struct CodegenState {
    tokens: String,
}

impl CodegenState {
    pub fn add_token(&mut self, token: &str) {
        self.tokens.push_str(token);
    }
}

impl std::fmt::Display for CodegenState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.tokens)
    }
}

pub trait Codegen {
    fn codegen(&self, state: &mut CodegenState);
}

/// Print a whole unit to source text.
pub fn print(unit: &CompilationUnit) -> String {
    let mut state = CodegenState::default();
    unit.codegen(&mut state);
    state.to_string()
}

impl<T: Codegen + ?Sized> Codegen for Rc<T> {
    fn codegen(&self, state: &mut CodegenState) {
        (**self).codegen(state)
    }
}

impl Codegen for Space {
    fn codegen(&self, state: &mut CodegenState) {
        state.add_token(&self.whitespace);
        for comment in &self.comments {
            state.add_token(&comment.text);
            state.add_token(&comment.suffix);
        }
    }
}

/// Comma-separated elements between the given brackets. Each element's
/// `after` space sits before the following comma, or before the closing
/// bracket for the last element.
fn container_codegen<T: Codegen>(
    container: &Container<T>,
    open: &str,
    close: &str,
    state: &mut CodegenState,
) {
    container.before.codegen(state);
    state.add_token(open);
    let last = container.elements.len().saturating_sub(1);
    for (idx, element) in container.elements.iter().enumerate() {
        element.element.codegen(state);
        element.after.codegen(state);
        if idx < last {
            state.add_token(",");
        }
    }
    state.add_token(close);
}

// ============================================================================
// Module
// ============================================================================

impl Codegen for CompilationUnit {
    fn codegen(&self, state: &mut CodegenState) {
        self.prefix.codegen(state);
        if let Some(package) = &self.package {
            package.codegen(state);
        }
        for import in &self.imports {
            import.codegen(state);
        }
        for statement in &self.statements {
            statement.codegen(state);
        }
        self.eof.codegen(state);
    }
}

// ============================================================================
// Statements
// ============================================================================

impl Codegen for Statement {
    fn codegen(&self, state: &mut CodegenState) {
        match self {
            Statement::Package(n) => n.codegen(state),
            Statement::Import(n) => n.codegen(state),
            Statement::Class(n) => n.codegen(state),
            Statement::Method(n) => n.codegen(state),
            Statement::VariableDecl(n) => n.codegen(state),
            Statement::Block(n) => n.codegen(state),
            Statement::If(n) => n.codegen(state),
            Statement::While(n) => n.codegen(state),
            Statement::For(n) => n.codegen(state),
            Statement::Return(n) => n.codegen(state),
            Statement::Empty(n) => n.codegen(state),
            Statement::Expression(e) => e.codegen(state),
        }
    }
}

impl Codegen for Package {
    fn codegen(&self, state: &mut CodegenState) {
        self.prefix.codegen(state);
        state.add_token("package");
        self.name.codegen(state);
    }
}

impl Codegen for Import {
    fn codegen(&self, state: &mut CodegenState) {
        self.prefix.codegen(state);
        state.add_token("import");
        self.qualid.codegen(state);
    }
}

impl Codegen for Modifier {
    fn codegen(&self, state: &mut CodegenState) {
        self.prefix.codegen(state);
        state.add_token(self.keyword.as_str());
    }
}

impl Codegen for ClassDecl {
    fn codegen(&self, state: &mut CodegenState) {
        self.prefix.codegen(state);
        for modifier in &self.modifiers {
            modifier.codegen(state);
        }
        self.keyword_prefix.codegen(state);
        state.add_token("class");
        self.name.codegen(state);
        self.body.codegen(state);
    }
}

impl Codegen for MethodDecl {
    fn codegen(&self, state: &mut CodegenState) {
        self.prefix.codegen(state);
        for modifier in &self.modifiers {
            modifier.codegen(state);
        }
        self.keyword_prefix.codegen(state);
        state.add_token("fun");
        self.name.codegen(state);
        container_codegen(&self.parameters, "(", ")", state);
        if let Some(return_type) = &self.return_type {
            return_type.before.codegen(state);
            state.add_token(":");
            return_type.element.codegen(state);
        }
        if let Some(body) = &self.body {
            body.codegen(state);
        }
    }
}

impl Codegen for VariableDecl {
    fn codegen(&self, state: &mut CodegenState) {
        self.prefix.codegen(state);
        for modifier in &self.modifiers {
            modifier.codegen(state);
        }
        if self.let_keyword {
            state.add_token("let");
        }
        self.name.codegen(state);
        if let Some(annotation) = &self.type_annotation {
            annotation.before.codegen(state);
            state.add_token(":");
            annotation.element.codegen(state);
        }
        if let Some(initializer) = &self.initializer {
            initializer.before.codegen(state);
            state.add_token("=");
            initializer.element.codegen(state);
        }
    }
}

impl Codegen for Block {
    fn codegen(&self, state: &mut CodegenState) {
        let braced = !self.markers.contains::<OmitBraces>();
        self.prefix.codegen(state);
        if braced {
            state.add_token("{");
        }
        for statement in &self.statements {
            statement.codegen(state);
        }
        self.end.codegen(state);
        if braced {
            state.add_token("}");
        }
    }
}

impl Codegen for ControlParens {
    fn codegen(&self, state: &mut CodegenState) {
        self.prefix.codegen(state);
        state.add_token("(");
        self.tree.element.codegen(state);
        self.tree.after.codegen(state);
        state.add_token(")");
    }
}

impl Codegen for If {
    fn codegen(&self, state: &mut CodegenState) {
        self.prefix.codegen(state);
        state.add_token("if");
        self.condition.codegen(state);
        self.then_part.codegen(state);
        if let Some(else_part) = &self.else_part {
            else_part.codegen(state);
        }
    }
}

impl Codegen for Else {
    fn codegen(&self, state: &mut CodegenState) {
        self.prefix.codegen(state);
        state.add_token("else");
        self.body.codegen(state);
    }
}

impl Codegen for While {
    fn codegen(&self, state: &mut CodegenState) {
        self.prefix.codegen(state);
        state.add_token("while");
        self.condition.codegen(state);
        self.body.codegen(state);
    }
}

impl Codegen for ForControl {
    fn codegen(&self, state: &mut CodegenState) {
        self.prefix.codegen(state);
        state.add_token("(");
        self.init.element.codegen(state);
        self.init.after.codegen(state);
        state.add_token(";");
        self.condition.element.codegen(state);
        self.condition.after.codegen(state);
        state.add_token(";");
        self.update.element.codegen(state);
        self.update.after.codegen(state);
        state.add_token(")");
    }
}

impl Codegen for For {
    fn codegen(&self, state: &mut CodegenState) {
        self.prefix.codegen(state);
        state.add_token("for");
        self.control.codegen(state);
        self.body.codegen(state);
    }
}

impl Codegen for Return {
    fn codegen(&self, state: &mut CodegenState) {
        self.prefix.codegen(state);
        state.add_token("return");
        if let Some(expression) = &self.expression {
            expression.codegen(state);
        }
    }
}

impl Codegen for Empty {
    fn codegen(&self, state: &mut CodegenState) {
        self.prefix.codegen(state);
        state.add_token(";");
    }
}

// ============================================================================
// Expressions
// ============================================================================

impl Codegen for Expression {
    fn codegen(&self, state: &mut CodegenState) {
        match self {
            Expression::Identifier(n) => n.codegen(state),
            Expression::FieldAccess(n) => n.codegen(state),
            Expression::Literal(n) => n.codegen(state),
            Expression::Binary(n) => n.codegen(state),
            Expression::Unary(n) => n.codegen(state),
            Expression::Assignment(n) => n.codegen(state),
            Expression::Call(n) => n.codegen(state),
            Expression::Lambda(n) => n.codegen(state),
            Expression::ArrayAccess(n) => n.codegen(state),
            Expression::Parentheses(n) => n.codegen(state),
        }
    }
}

impl Codegen for Identifier {
    fn codegen(&self, state: &mut CodegenState) {
        self.prefix.codegen(state);
        state.add_token(&self.name);
    }
}

impl Codegen for FieldAccess {
    fn codegen(&self, state: &mut CodegenState) {
        self.prefix.codegen(state);
        self.target.codegen(state);
        self.name.before.codegen(state);
        state.add_token(".");
        self.name.element.codegen(state);
    }
}

impl Codegen for Literal {
    fn codegen(&self, state: &mut CodegenState) {
        self.prefix.codegen(state);
        state.add_token(&self.source);
    }
}

impl Codegen for Binary {
    fn codegen(&self, state: &mut CodegenState) {
        self.prefix.codegen(state);
        self.left.codegen(state);
        self.operator.before.codegen(state);
        state.add_token(self.operator.element.as_str());
        self.right.codegen(state);
    }
}

impl Codegen for Unary {
    fn codegen(&self, state: &mut CodegenState) {
        self.prefix.codegen(state);
        state.add_token(self.operator.as_str());
        self.expression.codegen(state);
    }
}

impl Codegen for Assignment {
    fn codegen(&self, state: &mut CodegenState) {
        self.prefix.codegen(state);
        self.target.codegen(state);
        self.value.before.codegen(state);
        state.add_token("=");
        self.value.element.codegen(state);
    }
}

impl Codegen for MethodCall {
    fn codegen(&self, state: &mut CodegenState) {
        self.prefix.codegen(state);
        if let Some(select) = &self.select {
            select.element.codegen(state);
            select.after.codegen(state);
            state.add_token(".");
        }
        self.name.codegen(state);
        container_codegen(&self.arguments, "(", ")", state);
    }
}

impl Codegen for Lambda {
    fn codegen(&self, state: &mut CodegenState) {
        self.prefix.codegen(state);
        container_codegen(&self.parameters, "(", ")", state);
        self.arrow.codegen(state);
        state.add_token("->");
        self.body.codegen(state);
    }
}

impl Codegen for ArrayAccess {
    fn codegen(&self, state: &mut CodegenState) {
        self.prefix.codegen(state);
        self.indexed.codegen(state);
        self.bracket.codegen(state);
        state.add_token("[");
        self.index.element.codegen(state);
        self.index.after.codegen(state);
        state.add_token("]");
    }
}

impl Codegen for Parentheses {
    fn codegen(&self, state: &mut CodegenState) {
        self.prefix.codegen(state);
        state.add_token("(");
        self.tree.element.codegen(state);
        self.tree.after.codegen(state);
        state.add_token(")");
    }
}
