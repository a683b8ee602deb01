//! Default traversal: one `walk_*` function per node kind.
//!
//! Every walk rebuilds through the generated `with_*` setters, so a node
//! whose children all came back identity-equal is returned as the same
//! handle. `walk_statement` / `walk_expression` own the frame push, the
//! stop check, the secondary hook, and the stop-after bookkeeping; the
//! per-kind walks only recurse children.

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
use crate::visitor::{HookResult, TreeVisitor};

/// Visit a whole unit, dispatching the package and each import through the
/// statement layer so hooks and stop-after apply to them too.
pub fn walk_unit<V: TreeVisitor + ?Sized>(
    visitor: &mut V,
    unit: &Rc<CompilationUnit>,
    cursor: &mut Cursor,
) -> Rc<CompilationUnit> {
    cursor.push(Tree::Unit(Rc::clone(unit)));

    let package = unit.package.as_ref().map(|package| {
        match visitor.visit_statement(&Statement::Package(Rc::clone(package)), cursor) {
            Statement::Package(package) => package,
            other => panic!(
                "package visit produced a {:?} statement instead of a package",
                other.kind()
            ),
        }
    });
    let imports = unit
        .imports
        .iter()
        .map(|import| {
            match visitor.visit_statement(&Statement::Import(Rc::clone(import)), cursor) {
                Statement::Import(import) => import,
                other => panic!(
                    "import visit produced a {:?} statement instead of an import",
                    other.kind()
                ),
            }
        })
        .collect();
    let statements = unit
        .statements
        .iter()
        .map(|statement| visitor.visit_statement(statement, cursor))
        .collect();

    cursor.pop();
    let result = unit
        .with_package(package)
        .with_imports(imports)
        .with_statements(statements);
    if let Some(target) = visitor.stop_after() {
        if target.ptr_eq(&Tree::Unit(Rc::clone(unit))) {
            cursor.stop();
        }
    }
    result
}

/// Frame push, stop check, hook, kind dispatch for any statement.
pub fn walk_statement<V: TreeVisitor + ?Sized>(
    visitor: &mut V,
    statement: &Statement,
    cursor: &mut Cursor,
) -> Statement {
    if cursor.is_stopped() {
        return statement.clone();
    }
    cursor.push(Tree::Statement(statement.clone()));
    let result = match visitor.pre_statement(statement, cursor) {
        HookResult::Final(replacement) => replacement,
        HookResult::Continue => match statement {
            Statement::Package(n) => Statement::Package(visitor.visit_package(n, cursor)),
            Statement::Import(n) => Statement::Import(visitor.visit_import(n, cursor)),
            Statement::Class(n) => Statement::Class(visitor.visit_class_decl(n, cursor)),
            Statement::Method(n) => Statement::Method(visitor.visit_method_decl(n, cursor)),
            Statement::VariableDecl(n) => {
                Statement::VariableDecl(visitor.visit_variable_decl(n, cursor))
            }
            Statement::Block(n) => Statement::Block(visitor.visit_block(n, cursor)),
            Statement::If(n) => Statement::If(visitor.visit_if(n, cursor)),
            Statement::While(n) => Statement::While(visitor.visit_while(n, cursor)),
            Statement::For(n) => Statement::For(visitor.visit_for(n, cursor)),
            Statement::Return(n) => Statement::Return(visitor.visit_return(n, cursor)),
            Statement::Empty(n) => Statement::Empty(visitor.visit_empty(n, cursor)),
            Statement::Expression(e) => Statement::Expression(visitor.visit_expression(e, cursor)),
        },
    };
    cursor.pop();
    if let Some(target) = visitor.stop_after() {
        if target.ptr_eq(&Tree::Statement(statement.clone())) {
            cursor.stop();
        }
    }
    result
}

/// Frame push, stop check, hook, kind dispatch for any expression.
pub fn walk_expression<V: TreeVisitor + ?Sized>(
    visitor: &mut V,
    expression: &Expression,
    cursor: &mut Cursor,
) -> Expression {
    if cursor.is_stopped() {
        return expression.clone();
    }
    cursor.push(Tree::Expression(expression.clone()));
    let result = match visitor.pre_expression(expression, cursor) {
        HookResult::Final(replacement) => replacement,
        HookResult::Continue => match expression {
            Expression::Identifier(n) => Expression::Identifier(visitor.visit_identifier(n, cursor)),
            Expression::FieldAccess(n) => {
                Expression::FieldAccess(visitor.visit_field_access(n, cursor))
            }
            Expression::Literal(n) => Expression::Literal(visitor.visit_literal(n, cursor)),
            Expression::Binary(n) => Expression::Binary(visitor.visit_binary(n, cursor)),
            Expression::Unary(n) => Expression::Unary(visitor.visit_unary(n, cursor)),
            Expression::Assignment(n) => Expression::Assignment(visitor.visit_assignment(n, cursor)),
            Expression::Call(n) => Expression::Call(visitor.visit_method_call(n, cursor)),
            Expression::Lambda(n) => Expression::Lambda(visitor.visit_lambda(n, cursor)),
            Expression::ArrayAccess(n) => {
                Expression::ArrayAccess(visitor.visit_array_access(n, cursor))
            }
            Expression::Parentheses(n) => {
                Expression::Parentheses(visitor.visit_parentheses(n, cursor))
            }
        },
    };
    cursor.pop();
    if let Some(target) = visitor.stop_after() {
        if target.ptr_eq(&Tree::Expression(expression.clone())) {
            cursor.stop();
        }
    }
    result
}

pub fn walk_package<V: TreeVisitor + ?Sized>(
    visitor: &mut V,
    node: &Rc<Package>,
    cursor: &mut Cursor,
) -> Rc<Package> {
    node.with_name(visitor.visit_expression(&node.name, cursor))
}

pub fn walk_import<V: TreeVisitor + ?Sized>(
    visitor: &mut V,
    node: &Rc<Import>,
    cursor: &mut Cursor,
) -> Rc<Import> {
    node.with_qualid(visitor.visit_expression(&node.qualid, cursor))
}

pub fn walk_class_decl<V: TreeVisitor + ?Sized>(
    visitor: &mut V,
    node: &Rc<ClassDecl>,
    cursor: &mut Cursor,
) -> Rc<ClassDecl> {
    let name = visitor.visit_identifier(&node.name, cursor);
    let body = visitor.visit_block(&node.body, cursor);
    node.with_name(name).with_body(body)
}

pub fn walk_method_decl<V: TreeVisitor + ?Sized>(
    visitor: &mut V,
    node: &Rc<MethodDecl>,
    cursor: &mut Cursor,
) -> Rc<MethodDecl> {
    let name = visitor.visit_identifier(&node.name, cursor);
    let parameters = node.parameters.with_elements(
        node.parameters
            .elements
            .iter()
            .map(|param| param.with_element(visitor.visit_variable_decl(&param.element, cursor)))
            .collect(),
    );
    let return_type = node
        .return_type
        .as_ref()
        .map(|ty| ty.with_element(visitor.visit_expression(&ty.element, cursor)));
    let body = node
        .body
        .as_ref()
        .map(|body| visitor.visit_block(body, cursor));
    node.with_name(name)
        .with_parameters(parameters)
        .with_return_type(return_type)
        .with_body(body)
}

pub fn walk_variable_decl<V: TreeVisitor + ?Sized>(
    visitor: &mut V,
    node: &Rc<VariableDecl>,
    cursor: &mut Cursor,
) -> Rc<VariableDecl> {
    let name = visitor.visit_identifier(&node.name, cursor);
    let type_annotation = node
        .type_annotation
        .as_ref()
        .map(|ty| ty.with_element(visitor.visit_expression(&ty.element, cursor)));
    let initializer = node
        .initializer
        .as_ref()
        .map(|init| init.with_element(visitor.visit_expression(&init.element, cursor)));
    node.with_name(name)
        .with_type_annotation(type_annotation)
        .with_initializer(initializer)
}

pub fn walk_block<V: TreeVisitor + ?Sized>(
    visitor: &mut V,
    node: &Rc<Block>,
    cursor: &mut Cursor,
) -> Rc<Block> {
    let statements = node
        .statements
        .iter()
        .map(|statement| visitor.visit_statement(statement, cursor))
        .collect();
    node.with_statements(statements)
}

pub fn walk_if<V: TreeVisitor + ?Sized>(
    visitor: &mut V,
    node: &Rc<If>,
    cursor: &mut Cursor,
) -> Rc<If> {
    let condition = node.condition.with_tree(
        node.condition
            .tree
            .with_element(visitor.visit_expression(&node.condition.tree.element, cursor)),
    );
    let then_part = visitor.visit_statement(&node.then_part, cursor);
    let else_part = node
        .else_part
        .as_ref()
        .map(|else_part| visitor.visit_else(else_part, cursor));
    node.with_condition(condition)
        .with_then_part(then_part)
        .with_else_part(else_part)
}

pub fn walk_else<V: TreeVisitor + ?Sized>(
    visitor: &mut V,
    node: &Rc<Else>,
    cursor: &mut Cursor,
) -> Rc<Else> {
    node.with_body(visitor.visit_statement(&node.body, cursor))
}

pub fn walk_while<V: TreeVisitor + ?Sized>(
    visitor: &mut V,
    node: &Rc<While>,
    cursor: &mut Cursor,
) -> Rc<While> {
    let condition = node.condition.with_tree(
        node.condition
            .tree
            .with_element(visitor.visit_expression(&node.condition.tree.element, cursor)),
    );
    let body = visitor.visit_statement(&node.body, cursor);
    node.with_condition(condition).with_body(body)
}

pub fn walk_for<V: TreeVisitor + ?Sized>(
    visitor: &mut V,
    node: &Rc<For>,
    cursor: &mut Cursor,
) -> Rc<For> {
    let init = node
        .control
        .init
        .with_element(visitor.visit_statement(&node.control.init.element, cursor));
    let condition = node
        .control
        .condition
        .with_element(visitor.visit_expression(&node.control.condition.element, cursor));
    let update = node
        .control
        .update
        .with_element(visitor.visit_statement(&node.control.update.element, cursor));
    let control = node
        .control
        .with_init(init)
        .with_condition(condition)
        .with_update(update);
    let body = visitor.visit_statement(&node.body, cursor);
    node.with_control(control).with_body(body)
}

pub fn walk_return<V: TreeVisitor + ?Sized>(
    visitor: &mut V,
    node: &Rc<Return>,
    cursor: &mut Cursor,
) -> Rc<Return> {
    let expression = node
        .expression
        .as_ref()
        .map(|expression| visitor.visit_expression(expression, cursor));
    node.with_expression(expression)
}

pub fn walk_empty<V: TreeVisitor + ?Sized>(
    _visitor: &mut V,
    node: &Rc<Empty>,
    _cursor: &mut Cursor,
) -> Rc<Empty> {
    Rc::clone(node)
}

pub fn walk_identifier<V: TreeVisitor + ?Sized>(
    _visitor: &mut V,
    node: &Rc<Identifier>,
    _cursor: &mut Cursor,
) -> Rc<Identifier> {
    Rc::clone(node)
}

pub fn walk_field_access<V: TreeVisitor + ?Sized>(
    visitor: &mut V,
    node: &Rc<FieldAccess>,
    cursor: &mut Cursor,
) -> Rc<FieldAccess> {
    let target = visitor.visit_expression(&node.target, cursor);
    let name = node
        .name
        .with_element(visitor.visit_identifier(&node.name.element, cursor));
    node.with_target(target).with_name(name)
}

pub fn walk_literal<V: TreeVisitor + ?Sized>(
    _visitor: &mut V,
    node: &Rc<Literal>,
    _cursor: &mut Cursor,
) -> Rc<Literal> {
    Rc::clone(node)
}

pub fn walk_binary<V: TreeVisitor + ?Sized>(
    visitor: &mut V,
    node: &Rc<Binary>,
    cursor: &mut Cursor,
) -> Rc<Binary> {
    let left = visitor.visit_expression(&node.left, cursor);
    let right = visitor.visit_expression(&node.right, cursor);
    node.with_left(left).with_right(right)
}

pub fn walk_unary<V: TreeVisitor + ?Sized>(
    visitor: &mut V,
    node: &Rc<Unary>,
    cursor: &mut Cursor,
) -> Rc<Unary> {
    node.with_expression(visitor.visit_expression(&node.expression, cursor))
}

pub fn walk_assignment<V: TreeVisitor + ?Sized>(
    visitor: &mut V,
    node: &Rc<Assignment>,
    cursor: &mut Cursor,
) -> Rc<Assignment> {
    let target = visitor.visit_expression(&node.target, cursor);
    let value = node
        .value
        .with_element(visitor.visit_expression(&node.value.element, cursor));
    node.with_target(target).with_value(value)
}

pub fn walk_method_call<V: TreeVisitor + ?Sized>(
    visitor: &mut V,
    node: &Rc<MethodCall>,
    cursor: &mut Cursor,
) -> Rc<MethodCall> {
    let select = node
        .select
        .as_ref()
        .map(|select| select.with_element(visitor.visit_expression(&select.element, cursor)));
    let name = visitor.visit_identifier(&node.name, cursor);
    let arguments = node.arguments.with_elements(
        node.arguments
            .elements
            .iter()
            .map(|arg| arg.with_element(visitor.visit_expression(&arg.element, cursor)))
            .collect(),
    );
    node.with_select(select)
        .with_name(name)
        .with_arguments(arguments)
}

pub fn walk_lambda<V: TreeVisitor + ?Sized>(
    visitor: &mut V,
    node: &Rc<Lambda>,
    cursor: &mut Cursor,
) -> Rc<Lambda> {
    let parameters = node.parameters.with_elements(
        node.parameters
            .elements
            .iter()
            .map(|param| param.with_element(visitor.visit_variable_decl(&param.element, cursor)))
            .collect(),
    );
    let body = visitor.visit_statement(&node.body, cursor);
    node.with_parameters(parameters).with_body(body)
}

pub fn walk_array_access<V: TreeVisitor + ?Sized>(
    visitor: &mut V,
    node: &Rc<ArrayAccess>,
    cursor: &mut Cursor,
) -> Rc<ArrayAccess> {
    let indexed = visitor.visit_expression(&node.indexed, cursor);
    let index = node
        .index
        .with_element(visitor.visit_expression(&node.index.element, cursor));
    node.with_indexed(indexed).with_index(index)
}

pub fn walk_parentheses<V: TreeVisitor + ?Sized>(
    visitor: &mut V,
    node: &Rc<Parentheses>,
    cursor: &mut Cursor,
) -> Rc<Parentheses> {
    node.with_tree(
        node.tree
            .with_element(visitor.visit_expression(&node.tree.element, cursor)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::whitespace::Space;

    /// Leaves everything untouched.
    struct Identity;
    impl TreeVisitor for Identity {}

    /// Renames every identifier matching `from` to `to`.
    struct Rename {
        from: String,
        to: String,
    }

    impl TreeVisitor for Rename {
        fn visit_identifier(
            &mut self,
            node: &Rc<Identifier>,
            _cursor: &mut Cursor,
        ) -> Rc<Identifier> {
            if node.name == self.from {
                node.with_name(self.to.clone())
            } else {
                Rc::clone(node)
            }
        }
    }

    fn ident(name: &str) -> Expression {
        Expression::Identifier(Identifier::new(Space::empty(), name))
    }

    fn return_of(name: &str) -> Statement {
        Statement::Return(Return::new(Space::empty(), Some(ident(name))))
    }

    #[test]
    fn test_identity_walk_returns_same_handles() {
        let unit = CompilationUnit::new(
            Space::empty(),
            None,
            vec![],
            vec![return_of("x"), return_of("y")],
            Space::empty(),
        );
        let mut cursor = Cursor::root();
        let result = Identity.visit_unit(&unit, &mut cursor);
        assert!(Rc::ptr_eq(&unit, &result));
    }

    #[test]
    fn test_rename_rebuilds_only_affected_path() {
        let unit = CompilationUnit::new(
            Space::empty(),
            None,
            vec![],
            vec![return_of("x"), return_of("y")],
            Space::empty(),
        );
        let mut cursor = Cursor::root();
        let mut rename = Rename {
            from: "x".to_string(),
            to: "z".to_string(),
        };
        let result = rename.visit_unit(&unit, &mut cursor);
        assert!(!Rc::ptr_eq(&unit, &result));
        // The statement holding "y" is untouched by reference.
        assert!(unit.statements[1].ptr_eq(&result.statements[1]));
        assert!(!unit.statements[0].ptr_eq(&result.statements[0]));
        match &result.statements[0] {
            Statement::Return(ret) => match ret.expression.as_ref() {
                Some(Expression::Identifier(name)) => assert_eq!(name.name, "z"),
                other => panic!("unexpected expression {other:?}"),
            },
            other => panic!("unexpected statement {other:?}"),
        }
    }

    #[test]
    fn test_final_hook_skips_kind_dispatch() {
        /// Replaces every statement with an empty statement, from the hook.
        struct Erase;
        impl TreeVisitor for Erase {
            fn pre_statement(
                &mut self,
                _statement: &Statement,
                _cursor: &mut Cursor,
            ) -> HookResult<Statement> {
                HookResult::Final(Statement::Empty(crate::nodes::statement::Empty::new(
                    Space::empty(),
                )))
            }

            fn visit_return(&mut self, _node: &Rc<Return>, _cursor: &mut Cursor) -> Rc<Return> {
                panic!("kind dispatch must not run after a final hook");
            }
        }

        let mut cursor = Cursor::root();
        let result = Erase.visit_statement(&return_of("x"), &mut cursor);
        assert!(matches!(result, Statement::Empty(_)));
    }

    #[test]
    fn test_stop_after_bounds_rewriting() {
        let a = return_of("a");
        let b = return_of("b");
        let c = return_of("c");
        let unit = CompilationUnit::new(
            Space::empty(),
            None,
            vec![],
            vec![a.clone(), b.clone(), c.clone()],
            Space::empty(),
        );

        struct RenameAll {
            stop: Tree,
        }
        impl TreeVisitor for RenameAll {
            fn stop_after(&self) -> Option<Tree> {
                Some(self.stop.clone())
            }

            fn visit_identifier(
                &mut self,
                node: &Rc<Identifier>,
                _cursor: &mut Cursor,
            ) -> Rc<Identifier> {
                node.with_name(format!("{}_new", node.name))
            }
        }

        let mut cursor = Cursor::root();
        let mut pass = RenameAll {
            stop: Tree::Statement(b.clone()),
        };
        let result = pass.visit_unit(&unit, &mut cursor);

        // A and B are rewritten; C is reference-identical to the input.
        assert!(!unit.statements[0].ptr_eq(&result.statements[0]));
        assert!(!unit.statements[1].ptr_eq(&result.statements[1]));
        assert!(unit.statements[2].ptr_eq(&result.statements[2]));
        assert!(cursor.is_stopped());
    }

    #[test]
    fn test_cursor_sees_ancestors_during_visit() {
        struct DepthCheck {
            saw_parent_return: bool,
        }
        impl TreeVisitor for DepthCheck {
            fn visit_identifier(
                &mut self,
                node: &Rc<Identifier>,
                cursor: &mut Cursor,
            ) -> Rc<Identifier> {
                let parent_is_return = cursor
                    .nearest_ancestor(|tree| {
                        tree.as_statement()
                            .filter(|s| matches!(s, Statement::Return(_)))
                            .cloned()
                    })
                    .is_some();
                self.saw_parent_return |= parent_is_return;
                Rc::clone(node)
            }
        }

        let mut cursor = Cursor::root();
        let mut check = DepthCheck {
            saw_parent_return: false,
        };
        check.visit_statement(&return_of("x"), &mut cursor);
        assert!(check.saw_parent_return);
    }
}
