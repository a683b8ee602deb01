//! Tree-building helpers shared by the integration tests.
//!
//! These builders stand in for the external parser: they assemble trees the
//! way a parser would, with every byte of the notional source carried in a
//! node's trivia.

// Each integration test binary compiles its own copy; not every test uses
// every builder.
#![allow(dead_code)]

use std::rc::Rc;

use recast_cst::nodes::expression::{Expression, Identifier, Literal, MethodCall};
use recast_cst::nodes::module::CompilationUnit;
use recast_cst::nodes::statement::{
    Block, ClassDecl, ControlParens, If, Import, MethodDecl, Package, Statement, VariableDecl,
};
use recast_cst::nodes::whitespace::Space;
use recast_cst::nodes::{Container, LeftPadded, RightPadded};
use recast_core::NamedStyles;

pub fn space(raw: &str) -> Space {
    Space::parse(raw)
}

pub fn ident(prefix: &str, name: &str) -> Expression {
    Expression::Identifier(Identifier::new(space(prefix), name))
}

pub fn literal(prefix: &str, source: &str) -> Expression {
    Expression::Literal(Literal::new(space(prefix), source))
}

/// A dotted name expression: `a.b.C` as nested field accesses.
pub fn dotted(prefix: &str, path: &str) -> Expression {
    let mut segments = path.split('.');
    let first = segments.next().expect("empty path");
    let mut expr = Expression::Identifier(Identifier::new(Space::empty(), first));
    for segment in segments {
        expr = Expression::FieldAccess(recast_cst::nodes::expression::FieldAccess::new(
            Space::empty(),
            expr,
            LeftPadded::new(Space::empty(), Identifier::new(Space::empty(), segment)),
        ));
    }
    expr.with_prefix(space(prefix))
}

pub fn package(prefix: &str, path: &str) -> Rc<Package> {
    Package::new(space(prefix), dotted(" ", path))
}

pub fn import(prefix: &str, path: &str) -> Rc<Import> {
    Import::new(space(prefix), dotted(" ", path))
}

/// `let <name>: <ty> = <value>` with conventional single spaces.
pub fn field(prefix: &str, name: &str, ty: &str, value: &str) -> Statement {
    Statement::VariableDecl(VariableDecl::new(
        space(prefix),
        vec![],
        true,
        Identifier::new(Space::space(), name),
        Some(LeftPadded::new(
            Space::empty(),
            ident(" ", ty),
        )),
        Some(LeftPadded::new(Space::space(), literal(" ", value))),
    ))
}

/// A no-argument call statement: `<name>(<argument>)`.
pub fn call_statement(prefix: &str, name: &str, argument: &str) -> Statement {
    Statement::Expression(Expression::Call(MethodCall::new(
        space(prefix),
        None,
        Identifier::new(Space::empty(), name),
        Container::new(
            Space::empty(),
            vec![RightPadded::new(ident("", argument), Space::empty())],
        ),
    )))
}

/// `fun <name>() { <statements> }`.
pub fn method(prefix: &str, name: &str, statements: Vec<Statement>, end: &str) -> Statement {
    Statement::Method(MethodDecl::new(
        space(prefix),
        vec![],
        Space::empty(),
        Identifier::new(Space::space(), name),
        Container::new(Space::empty(), vec![]),
        None,
        Some(Block::new(Space::space(), statements, space(end))),
    ))
}

/// `class <name> { <members> }`.
pub fn class(prefix: &str, name: &str, members: Vec<Statement>, end: &str) -> Statement {
    Statement::Class(ClassDecl::new(
        space(prefix),
        vec![],
        Space::empty(),
        Identifier::new(Space::space(), name),
        Block::new(Space::space(), members, space(end)),
    ))
}

/// `if<condition_prefix>(<name>) {}`.
pub fn if_statement(prefix: &str, condition_prefix: &str, name: &str) -> Statement {
    Statement::If(If::new(
        space(prefix),
        ControlParens::new(
            space(condition_prefix),
            RightPadded::new(ident("", name), Space::empty()),
        ),
        Statement::Block(Block::new(Space::space(), vec![], Space::empty())),
        None,
    ))
}

pub fn unit(
    package: Option<Rc<Package>>,
    imports: Vec<Rc<Import>>,
    statements: Vec<Statement>,
    eof: &str,
) -> Rc<CompilationUnit> {
    CompilationUnit::new(Space::empty(), package, imports, statements, space(eof))
}

/// Attach a named style set to the unit root.
pub fn styled(unit: &Rc<CompilationUnit>, styles: NamedStyles) -> Rc<CompilationUnit> {
    unit.with_markers(unit.markers.with(styles))
}
