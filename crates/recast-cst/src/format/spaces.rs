//! Style-driven spacing.
//!
//! Applies the resolved [`SpacesStyle`] at the fixed catalogue of positions:
//! before control and call parentheses, just inside bracket pairs, around
//! operators by class, around list separators, lambda arrows, and
//! type-annotation colons. The contract shared by every position: a space run
//! carrying comments is never touched, a run containing a newline belongs to
//! the blank-line pass and is never touched, enabling normalizes the run to
//! exactly one space and disabling to zero width. The first element of a list
//! is exempt from after-comma spacing and the last from before-comma spacing;
//! their inner edges are the `within` positions instead.

use std::rc::Rc;

use recast_core::{text, SpacesStyle};

use crate::cursor::Cursor;
use crate::nodes::expression::{
    ArrayAccess, Assignment, Binary, Expression, Lambda, MethodCall, Parentheses, Unary,
};
use crate::nodes::op::OperatorClass;
use crate::nodes::statement::{ControlParens, For, If, MethodDecl, VariableDecl, While};
use crate::nodes::traits::{Container, LeftPadded, RefEq, RightPadded};
use crate::nodes::whitespace::Space;
use crate::nodes::Tree;
use crate::visitor::{dispatch, TreeVisitor};

pub struct SpacesVisitor {
    style: SpacesStyle,
    stop_after: Option<Tree>,
}

impl SpacesVisitor {
    pub fn new(style: SpacesStyle) -> Self {
        Self {
            style,
            stop_after: None,
        }
    }

    pub fn with_stop_after(mut self, stop_after: Option<Tree>) -> Self {
        self.stop_after = stop_after;
        self
    }

    fn operator_choice(&self, class: OperatorClass) -> bool {
        let ops = &self.style.around_operators;
        match class {
            OperatorClass::Additive => ops.additive(),
            OperatorClass::Multiplicative => ops.multiplicative(),
            OperatorClass::Equality => ops.equality(),
            OperatorClass::Relational => ops.relational(),
            OperatorClass::Logical => ops.logical(),
            OperatorClass::Bitwise => ops.bitwise(),
            OperatorClass::Shift => ops.shift(),
            OperatorClass::Range => ops.range(),
        }
    }

    /// Rewrite a comma-separated container: within-spacing at the inner
    /// edges, separator spacing everywhere else.
    fn respace_container<T: RefEq + Clone + HasPrefix>(
        &self,
        container: &Container<T>,
        within: bool,
    ) -> Container<T> {
        let last = container.elements.len().saturating_sub(1);
        let elements = container
            .elements
            .iter()
            .enumerate()
            .map(|(idx, element)| {
                let inner = if idx == 0 {
                    element.element.replace_prefix(spaced(element.element.prefix(), within))
                } else {
                    element
                        .element
                        .replace_prefix(spaced(element.element.prefix(), self.style.other.after_comma()))
                };
                let after = if idx == last {
                    spaced(&element.after, within)
                } else {
                    spaced(&element.after, self.style.other.before_comma())
                };
                RightPadded::new(inner, after)
            })
            .collect();
        container.with_elements(elements)
    }

    fn respace_control(&self, parens: &Rc<ControlParens>, before: bool) -> Rc<ControlParens> {
        let within = self.style.within.control_parens();
        let tree = parens
            .tree
            .with_element(parens.tree.element.with_prefix(spaced(parens.tree.element.prefix(), within)));
        let tree = tree.with_after(spaced(&tree.after, within));
        parens
            .with_prefix(spaced(&parens.prefix, before))
            .with_tree(tree)
    }

    fn respace_annotation(
        &self,
        annotation: &LeftPadded<Expression>,
    ) -> LeftPadded<Expression> {
        let before = spaced(&annotation.before, self.style.other.before_colon());
        let element = annotation
            .element
            .with_prefix(spaced(annotation.element.prefix(), self.style.other.after_colon()));
        annotation.with_before(before).with_element(element)
    }
}

/// Identity-preserving prefix replacement for list elements of either node
/// family.
trait HasPrefix: Sized {
    fn prefix(&self) -> &Space;
    fn replace_prefix(&self, prefix: Space) -> Self;
}

impl HasPrefix for Expression {
    fn prefix(&self) -> &Space {
        Expression::prefix(self)
    }

    fn replace_prefix(&self, prefix: Space) -> Self {
        self.with_prefix(prefix)
    }
}

impl HasPrefix for Rc<VariableDecl> {
    fn prefix(&self) -> &Space {
        &self.prefix
    }

    fn replace_prefix(&self, prefix: Space) -> Self {
        self.with_prefix(prefix)
    }
}

/// One space or zero width per the choice; untouchable runs pass through.
fn spaced(space: &Space, on: bool) -> Space {
    if space.has_comments() || !text::is_single_line(&space.whitespace) {
        return space.clone();
    }
    let want = if on { " " } else { "" };
    if space.whitespace == want {
        space.clone()
    } else {
        Space::new(want, Vec::new())
    }
}

impl TreeVisitor for SpacesVisitor {
    fn stop_after(&self) -> Option<Tree> {
        self.stop_after.clone()
    }

    fn visit_if(&mut self, node: &Rc<If>, cursor: &mut Cursor) -> Rc<If> {
        let node = dispatch::walk_if(self, node, cursor);
        node.with_condition(self.respace_control(&node.condition, self.style.before_parens.if_parens()))
    }

    fn visit_while(&mut self, node: &Rc<While>, cursor: &mut Cursor) -> Rc<While> {
        let node = dispatch::walk_while(self, node, cursor);
        node.with_condition(self.respace_control(&node.condition, self.style.before_parens.while_parens()))
    }

    fn visit_for(&mut self, node: &Rc<For>, cursor: &mut Cursor) -> Rc<For> {
        let node = dispatch::walk_for(self, node, cursor);
        let within = self.style.within.control_parens();
        let control = &node.control;
        let init = control.init.with_element(
            control
                .init
                .element
                .with_prefix(spaced(control.init.element.prefix(), within)),
        );
        let update = control.update.with_after(spaced(&control.update.after, within));
        let control = control
            .with_prefix(spaced(&control.prefix, self.style.before_parens.for_parens()))
            .with_init(init)
            .with_update(update);
        node.with_control(control)
    }

    fn visit_binary(&mut self, node: &Rc<Binary>, cursor: &mut Cursor) -> Rc<Binary> {
        let node = dispatch::walk_binary(self, node, cursor);
        let on = self.operator_choice(node.operator.element.class());
        let operator = node.operator.with_before(spaced(&node.operator.before, on));
        let right = node.right.with_prefix(spaced(node.right.prefix(), on));
        node.with_operator(operator).with_right(right)
    }

    fn visit_unary(&mut self, node: &Rc<Unary>, cursor: &mut Cursor) -> Rc<Unary> {
        let node = dispatch::walk_unary(self, node, cursor);
        let on = self.style.around_operators.unary();
        let expression = node.expression.with_prefix(spaced(node.expression.prefix(), on));
        node.with_expression(expression)
    }

    fn visit_assignment(&mut self, node: &Rc<Assignment>, cursor: &mut Cursor) -> Rc<Assignment> {
        let node = dispatch::walk_assignment(self, node, cursor);
        let on = self.style.around_operators.assignment();
        let value = node
            .value
            .with_before(spaced(&node.value.before, on))
            .with_element(node.value.element.with_prefix(spaced(node.value.element.prefix(), on)));
        node.with_value(value)
    }

    fn visit_variable_decl(
        &mut self,
        node: &Rc<VariableDecl>,
        cursor: &mut Cursor,
    ) -> Rc<VariableDecl> {
        let node = dispatch::walk_variable_decl(self, node, cursor);
        let type_annotation = node
            .type_annotation
            .as_ref()
            .map(|annotation| self.respace_annotation(annotation));
        let on = self.style.around_operators.assignment();
        let initializer = node.initializer.as_ref().map(|init| {
            init.with_before(spaced(&init.before, on))
                .with_element(init.element.with_prefix(spaced(init.element.prefix(), on)))
        });
        node.with_type_annotation(type_annotation)
            .with_initializer(initializer)
    }

    fn visit_method_decl(&mut self, node: &Rc<MethodDecl>, cursor: &mut Cursor) -> Rc<MethodDecl> {
        let node = dispatch::walk_method_decl(self, node, cursor);
        let parameters = self
            .respace_container(&node.parameters, self.style.within.method_declaration_parens())
            .with_before(spaced(
                &node.parameters.before,
                self.style.before_parens.method_declaration(),
            ));
        let return_type = node
            .return_type
            .as_ref()
            .map(|annotation| self.respace_annotation(annotation));
        node.with_parameters(parameters).with_return_type(return_type)
    }

    fn visit_method_call(&mut self, node: &Rc<MethodCall>, cursor: &mut Cursor) -> Rc<MethodCall> {
        let node = dispatch::walk_method_call(self, node, cursor);
        let arguments = self
            .respace_container(&node.arguments, self.style.within.method_call_parens())
            .with_before(spaced(&node.arguments.before, self.style.before_parens.method_call()));
        node.with_arguments(arguments)
    }

    fn visit_lambda(&mut self, node: &Rc<Lambda>, cursor: &mut Cursor) -> Rc<Lambda> {
        let node = dispatch::walk_lambda(self, node, cursor);
        let on = self.style.around_operators.lambda_arrow();
        let arrow = spaced(&node.arrow, on);
        let body = node.body.with_prefix(spaced(node.body.prefix(), on));
        node.with_arrow(arrow).with_body(body)
    }

    fn visit_array_access(&mut self, node: &Rc<ArrayAccess>, cursor: &mut Cursor) -> Rc<ArrayAccess> {
        let node = dispatch::walk_array_access(self, node, cursor);
        let within = self.style.within.brackets();
        let index = node
            .index
            .with_element(node.index.element.with_prefix(spaced(node.index.element.prefix(), within)))
            .with_after(spaced(&node.index.after, within));
        node.with_index(index)
    }

    fn visit_parentheses(&mut self, node: &Rc<Parentheses>, cursor: &mut Cursor) -> Rc<Parentheses> {
        let node = dispatch::walk_parentheses(self, node, cursor);
        let within = self.style.within.grouping_parens();
        let tree = node
            .tree
            .with_element(node.tree.element.with_prefix(spaced(node.tree.element.prefix(), within)))
            .with_after(spaced(&node.tree.after, within));
        node.with_tree(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recast_core::AroundOperators;

    use crate::codegen::{Codegen, CodegenState};
    use crate::nodes::expression::Identifier;
    use crate::nodes::op::{BinaryOp, UnaryOp};
    use crate::nodes::statement::{Block, Statement};

    fn print(statement: &Statement) -> String {
        let mut state = CodegenState::default();
        statement.codegen(&mut state);
        state.to_string()
    }

    fn if_statement(condition_prefix: &str) -> Statement {
        Statement::If(If::new(
            Space::empty(),
            ControlParens::new(
                Space::parse(condition_prefix),
                RightPadded::new(
                    Expression::Identifier(Identifier::new(Space::empty(), "x")),
                    Space::empty(),
                ),
            ),
            Statement::Block(Block::new(Space::space(), vec![], Space::empty())),
            None,
        ))
    }

    #[test]
    fn test_space_inserted_before_if_parens() {
        let statement = if_statement("");
        let mut cursor = Cursor::root();
        let result =
            SpacesVisitor::new(SpacesStyle::default()).visit_statement(&statement, &mut cursor);
        assert_eq!(print(&result), "if (x) {}");
    }

    #[test]
    fn test_comment_bearing_run_is_untouched() {
        let statement = if_statement("/*c*/");
        let mut cursor = Cursor::root();
        let result =
            SpacesVisitor::new(SpacesStyle::default()).visit_statement(&statement, &mut cursor);
        assert_eq!(print(&result), "if/*c*/(x) {}");
        assert!(statement.ptr_eq(&result));
    }

    #[test]
    fn test_operator_class_choice() {
        // Additive defaults to spaced, range to unspaced.
        let sum = Expression::Binary(Binary::new(
            Space::empty(),
            Expression::Identifier(Identifier::new(Space::empty(), "a")),
            LeftPadded::new(Space::empty(), BinaryOp::Add),
            Expression::Identifier(Identifier::new(Space::empty(), "b")),
        ));
        let range = Expression::Binary(Binary::new(
            Space::empty(),
            Expression::Identifier(Identifier::new(Space::empty(), "a")),
            LeftPadded::new(Space::space(), BinaryOp::Range),
            Expression::Identifier(Identifier::new(Space::space(), "b")),
        ));
        let mut visitor = SpacesVisitor::new(SpacesStyle::default());
        let mut cursor = Cursor::root();
        let sum = visitor.visit_expression(&sum, &mut cursor);
        let range = visitor.visit_expression(&range, &mut cursor);

        let mut state = CodegenState::default();
        sum.codegen(&mut state);
        assert_eq!(state.to_string(), "a + b");
        let mut state = CodegenState::default();
        range.codegen(&mut state);
        assert_eq!(state.to_string(), "a..b");
    }

    #[test]
    fn test_unary_operator_hugs_its_operand() {
        // Defaults: no space between the operator and the operand.
        let negated = Expression::Unary(Unary::new(
            Space::empty(),
            UnaryOp::Not,
            Expression::Identifier(Identifier::new(Space::space(), "flag")),
        ));
        let mut visitor = SpacesVisitor::new(SpacesStyle::default());
        let mut cursor = Cursor::root();
        let result = visitor.visit_expression(&negated, &mut cursor);
        let mut state = CodegenState::default();
        result.codegen(&mut state);
        assert_eq!(state.to_string(), "!flag");
    }

    #[test]
    fn test_unary_spacing_is_configurable() {
        let style = SpacesStyle {
            around_operators: AroundOperators {
                unary: Some(true),
                ..Default::default()
            },
            ..Default::default()
        };
        let negated = Expression::Unary(Unary::new(
            Space::empty(),
            UnaryOp::Negate,
            Expression::Identifier(Identifier::new(Space::empty(), "x")),
        ));
        let mut visitor = SpacesVisitor::new(style);
        let mut cursor = Cursor::root();
        let result = visitor.visit_expression(&negated, &mut cursor);
        let mut state = CodegenState::default();
        result.codegen(&mut state);
        assert_eq!(state.to_string(), "- x");
    }

    #[test]
    fn test_separator_spacing_exempts_list_edges() {
        let args = Container::new(
            Space::empty(),
            vec![
                RightPadded::new(
                    Expression::Identifier(Identifier::new(Space::space(), "a")),
                    Space::space(),
                ),
                RightPadded::new(
                    Expression::Identifier(Identifier::new(Space::empty(), "b")),
                    Space::space(),
                ),
            ],
        );
        let call = Expression::Call(MethodCall::new(
            Space::empty(),
            None,
            Identifier::new(Space::empty(), "f"),
            args,
        ));
        let mut cursor = Cursor::root();
        let result =
            SpacesVisitor::new(SpacesStyle::default()).visit_expression(&call, &mut cursor);
        let mut state = CodegenState::default();
        result.codegen(&mut state);
        // First prefix and last after collapse (within=false); the separator
        // gets no space before and one after.
        assert_eq!(state.to_string(), "f(a, b)");
    }

    #[test]
    fn test_newline_runs_left_to_blank_line_pass() {
        let statement = if_statement("\n");
        let mut cursor = Cursor::root();
        let result =
            SpacesVisitor::new(SpacesStyle::default()).visit_statement(&statement, &mut cursor);
        assert!(statement.ptr_eq(&result));
    }
}
