//! Statement node kinds.

use std::rc::Rc;

use super::expression::Expression;
use super::op::ModifierKind;
use super::traits::{node_fields, Container, LeftPadded, RefEq, RightPadded};
use super::whitespace::Space;
use crate::markers::Markers;

/// The statement union. As with [`Expression`], cloning clones handles.
#[derive(Debug, Clone)]
pub enum Statement {
    Package(Rc<Package>),
    Import(Rc<Import>),
    Class(Rc<ClassDecl>),
    Method(Rc<MethodDecl>),
    VariableDecl(Rc<VariableDecl>),
    Block(Rc<Block>),
    If(Rc<If>),
    While(Rc<While>),
    For(Rc<For>),
    Return(Rc<Return>),
    Empty(Rc<Empty>),
    Expression(Expression),
}

/// Statement kind tags, used by the blank-line pass to detect boundaries
/// between differently-kinded statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    Package,
    Import,
    Class,
    Method,
    VariableDecl,
    Block,
    If,
    While,
    For,
    Return,
    Empty,
    Expression,
}

impl Statement {
    pub fn kind(&self) -> StatementKind {
        match self {
            Statement::Package(_) => StatementKind::Package,
            Statement::Import(_) => StatementKind::Import,
            Statement::Class(_) => StatementKind::Class,
            Statement::Method(_) => StatementKind::Method,
            Statement::VariableDecl(_) => StatementKind::VariableDecl,
            Statement::Block(_) => StatementKind::Block,
            Statement::If(_) => StatementKind::If,
            Statement::While(_) => StatementKind::While,
            Statement::For(_) => StatementKind::For,
            Statement::Return(_) => StatementKind::Return,
            Statement::Empty(_) => StatementKind::Empty,
            Statement::Expression(_) => StatementKind::Expression,
        }
    }

    pub fn prefix(&self) -> &Space {
        match self {
            Statement::Package(n) => &n.prefix,
            Statement::Import(n) => &n.prefix,
            Statement::Class(n) => &n.prefix,
            Statement::Method(n) => &n.prefix,
            Statement::VariableDecl(n) => &n.prefix,
            Statement::Block(n) => &n.prefix,
            Statement::If(n) => &n.prefix,
            Statement::While(n) => &n.prefix,
            Statement::For(n) => &n.prefix,
            Statement::Return(n) => &n.prefix,
            Statement::Empty(n) => &n.prefix,
            Statement::Expression(e) => e.prefix(),
        }
    }

    /// Replace the leading space, sharing the node when the value is equal.
    pub fn with_prefix(&self, prefix: Space) -> Statement {
        match self {
            Statement::Package(n) => Statement::Package(n.with_prefix(prefix)),
            Statement::Import(n) => Statement::Import(n.with_prefix(prefix)),
            Statement::Class(n) => Statement::Class(n.with_prefix(prefix)),
            Statement::Method(n) => Statement::Method(n.with_prefix(prefix)),
            Statement::VariableDecl(n) => Statement::VariableDecl(n.with_prefix(prefix)),
            Statement::Block(n) => Statement::Block(n.with_prefix(prefix)),
            Statement::If(n) => Statement::If(n.with_prefix(prefix)),
            Statement::While(n) => Statement::While(n.with_prefix(prefix)),
            Statement::For(n) => Statement::For(n.with_prefix(prefix)),
            Statement::Return(n) => Statement::Return(n.with_prefix(prefix)),
            Statement::Empty(n) => Statement::Empty(n.with_prefix(prefix)),
            Statement::Expression(e) => Statement::Expression(e.with_prefix(prefix)),
        }
    }

    /// Pointer identity: true only for the same node handle in the same
    /// variant.
    pub fn ptr_eq(&self, other: &Statement) -> bool {
        match (self, other) {
            (Statement::Package(a), Statement::Package(b)) => Rc::ptr_eq(a, b),
            (Statement::Import(a), Statement::Import(b)) => Rc::ptr_eq(a, b),
            (Statement::Class(a), Statement::Class(b)) => Rc::ptr_eq(a, b),
            (Statement::Method(a), Statement::Method(b)) => Rc::ptr_eq(a, b),
            (Statement::VariableDecl(a), Statement::VariableDecl(b)) => Rc::ptr_eq(a, b),
            (Statement::Block(a), Statement::Block(b)) => Rc::ptr_eq(a, b),
            (Statement::If(a), Statement::If(b)) => Rc::ptr_eq(a, b),
            (Statement::While(a), Statement::While(b)) => Rc::ptr_eq(a, b),
            (Statement::For(a), Statement::For(b)) => Rc::ptr_eq(a, b),
            (Statement::Return(a), Statement::Return(b)) => Rc::ptr_eq(a, b),
            (Statement::Empty(a), Statement::Empty(b)) => Rc::ptr_eq(a, b),
            (Statement::Expression(a), Statement::Expression(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl RefEq for Statement {
    fn ref_eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

/// A package declaration: `package a.b.c`.
#[derive(Debug, Clone)]
pub struct Package {
    pub prefix: Space,
    pub markers: Markers,
    /// The dotted name, an identifier or field-access chain.
    pub name: Expression,
}

impl Package {
    pub fn new(prefix: Space, name: Expression) -> Rc<Self> {
        Rc::new(Self {
            prefix,
            markers: Markers::new(),
            name,
        })
    }
}

node_fields!(Package {
    prefix: Space,
    markers: Markers,
    name: Expression,
});

/// An import: `import a.b.C`.
#[derive(Debug, Clone)]
pub struct Import {
    pub prefix: Space,
    pub markers: Markers,
    /// The imported qualified name, an identifier or field-access chain.
    pub qualid: Expression,
}

impl Import {
    pub fn new(prefix: Space, qualid: Expression) -> Rc<Self> {
        Rc::new(Self {
            prefix,
            markers: Markers::new(),
            qualid,
        })
    }

    /// The dotted name with all trivia stripped, for layout matching.
    pub fn qualified_name(&self) -> String {
        fn collect(expr: &Expression, out: &mut String) {
            match expr {
                Expression::Identifier(ident) => out.push_str(&ident.name),
                Expression::FieldAccess(access) => {
                    collect(&access.target, out);
                    out.push('.');
                    out.push_str(&access.name.element.name);
                }
                // Imports are identifier chains by construction; anything
                // else contributes nothing to the name.
                _ => {}
            }
        }
        let mut out = String::new();
        collect(&self.qualid, &mut out);
        out
    }
}

node_fields!(Import {
    prefix: Space,
    markers: Markers,
    qualid: Expression,
});

/// A declaration modifier with its own leading space.
#[derive(Debug, Clone)]
pub struct Modifier {
    pub prefix: Space,
    pub markers: Markers,
    pub keyword: ModifierKind,
}

impl Modifier {
    pub fn new(prefix: Space, keyword: ModifierKind) -> Rc<Self> {
        Rc::new(Self {
            prefix,
            markers: Markers::new(),
            keyword,
        })
    }
}

node_fields!(Modifier {
    prefix: Space,
    markers: Markers,
    keyword: ModifierKind,
});

/// A class declaration: `modifiers class Name { ... }`.
#[derive(Debug, Clone)]
pub struct ClassDecl {
    pub prefix: Space,
    pub markers: Markers,
    pub modifiers: Vec<Rc<Modifier>>,
    /// Space before the `class` keyword; relevant when modifiers precede it.
    pub keyword_prefix: Space,
    pub name: Rc<super::expression::Identifier>,
    pub body: Rc<Block>,
}

impl ClassDecl {
    pub fn new(
        prefix: Space,
        modifiers: Vec<Rc<Modifier>>,
        keyword_prefix: Space,
        name: Rc<super::expression::Identifier>,
        body: Rc<Block>,
    ) -> Rc<Self> {
        Rc::new(Self {
            prefix,
            markers: Markers::new(),
            modifiers,
            keyword_prefix,
            name,
            body,
        })
    }
}

node_fields!(ClassDecl {
    prefix: Space,
    markers: Markers,
    modifiers: Vec<Rc<Modifier>>,
    keyword_prefix: Space,
    name: Rc<super::expression::Identifier>,
    body: Rc<Block>,
});

/// A method declaration: `modifiers fun name(params): ReturnType { ... }`.
#[derive(Debug, Clone)]
pub struct MethodDecl {
    pub prefix: Space,
    pub markers: Markers,
    pub modifiers: Vec<Rc<Modifier>>,
    /// Space before the `fun` keyword; relevant when modifiers precede it.
    pub keyword_prefix: Space,
    pub name: Rc<super::expression::Identifier>,
    pub parameters: Container<Rc<VariableDecl>>,
    /// Return type annotation; `before` is the space before the colon.
    pub return_type: Option<LeftPadded<Expression>>,
    pub body: Option<Rc<Block>>,
}

impl MethodDecl {
    pub fn new(
        prefix: Space,
        modifiers: Vec<Rc<Modifier>>,
        keyword_prefix: Space,
        name: Rc<super::expression::Identifier>,
        parameters: Container<Rc<VariableDecl>>,
        return_type: Option<LeftPadded<Expression>>,
        body: Option<Rc<Block>>,
    ) -> Rc<Self> {
        Rc::new(Self {
            prefix,
            markers: Markers::new(),
            modifiers,
            keyword_prefix,
            name,
            parameters,
            return_type,
            body,
        })
    }
}

node_fields!(MethodDecl {
    prefix: Space,
    markers: Markers,
    modifiers: Vec<Rc<Modifier>>,
    keyword_prefix: Space,
    name: Rc<super::expression::Identifier>,
    parameters: Container<Rc<VariableDecl>>,
    return_type: Option<LeftPadded<Expression>>,
    body: Option<Rc<Block>>,
});

/// A variable declaration or parameter:
/// `let name: Type = initializer` / `name: Type`.
#[derive(Debug, Clone)]
pub struct VariableDecl {
    pub prefix: Space,
    pub markers: Markers,
    pub modifiers: Vec<Rc<Modifier>>,
    /// Whether this declaration is introduced by the `let` keyword
    /// (false for parameters).
    pub let_keyword: bool,
    pub name: Rc<super::expression::Identifier>,
    /// Type annotation; `before` is the space before the colon, the type
    /// expression's prefix the space after it.
    pub type_annotation: Option<LeftPadded<Expression>>,
    /// Initializer; `before` is the space before the equals sign.
    pub initializer: Option<LeftPadded<Expression>>,
}

impl VariableDecl {
    pub fn new(
        prefix: Space,
        modifiers: Vec<Rc<Modifier>>,
        let_keyword: bool,
        name: Rc<super::expression::Identifier>,
        type_annotation: Option<LeftPadded<Expression>>,
        initializer: Option<LeftPadded<Expression>>,
    ) -> Rc<Self> {
        Rc::new(Self {
            prefix,
            markers: Markers::new(),
            modifiers,
            let_keyword,
            name,
            type_annotation,
            initializer,
        })
    }
}

node_fields!(VariableDecl {
    prefix: Space,
    markers: Markers,
    modifiers: Vec<Rc<Modifier>>,
    let_keyword: bool,
    name: Rc<super::expression::Identifier>,
    type_annotation: Option<LeftPadded<Expression>>,
    initializer: Option<LeftPadded<Expression>>,
});

/// A braced statement list. `prefix` is the space before the opening brace,
/// `end` the space before the closing one. A block carrying the
/// [`OmitBraces`](crate::markers::OmitBraces) marker prints without braces.
#[derive(Debug, Clone)]
pub struct Block {
    pub prefix: Space,
    pub markers: Markers,
    pub statements: Vec<Statement>,
    pub end: Space,
}

impl Block {
    pub fn new(prefix: Space, statements: Vec<Statement>, end: Space) -> Rc<Self> {
        Rc::new(Self {
            prefix,
            markers: Markers::new(),
            statements,
            end,
        })
    }
}

node_fields!(Block {
    prefix: Space,
    markers: Markers,
    statements: Vec<Statement>,
    end: Space,
});

/// The parenthesized condition of a control construct. `prefix` is the space
/// before the opening parenthesis, `tree.after` the space before the closing
/// one.
#[derive(Debug, Clone)]
pub struct ControlParens {
    pub prefix: Space,
    pub markers: Markers,
    pub tree: RightPadded<Expression>,
}

impl ControlParens {
    pub fn new(prefix: Space, tree: RightPadded<Expression>) -> Rc<Self> {
        Rc::new(Self {
            prefix,
            markers: Markers::new(),
            tree,
        })
    }
}

node_fields!(ControlParens {
    prefix: Space,
    markers: Markers,
    tree: RightPadded<Expression>,
});

/// An `if` statement with optional `else`.
#[derive(Debug, Clone)]
pub struct If {
    pub prefix: Space,
    pub markers: Markers,
    pub condition: Rc<ControlParens>,
    pub then_part: Statement,
    pub else_part: Option<Rc<Else>>,
}

impl If {
    pub fn new(
        prefix: Space,
        condition: Rc<ControlParens>,
        then_part: Statement,
        else_part: Option<Rc<Else>>,
    ) -> Rc<Self> {
        Rc::new(Self {
            prefix,
            markers: Markers::new(),
            condition,
            then_part,
            else_part,
        })
    }
}

node_fields!(If {
    prefix: Space,
    markers: Markers,
    condition: Rc<ControlParens>,
    then_part: Statement,
    else_part: Option<Rc<Else>>,
});

/// The `else` arm of an `if`.
#[derive(Debug, Clone)]
pub struct Else {
    pub prefix: Space,
    pub markers: Markers,
    pub body: Statement,
}

impl Else {
    pub fn new(prefix: Space, body: Statement) -> Rc<Self> {
        Rc::new(Self {
            prefix,
            markers: Markers::new(),
            body,
        })
    }
}

node_fields!(Else {
    prefix: Space,
    markers: Markers,
    body: Statement,
});

/// A `while` loop.
#[derive(Debug, Clone)]
pub struct While {
    pub prefix: Space,
    pub markers: Markers,
    pub condition: Rc<ControlParens>,
    pub body: Statement,
}

impl While {
    pub fn new(prefix: Space, condition: Rc<ControlParens>, body: Statement) -> Rc<Self> {
        Rc::new(Self {
            prefix,
            markers: Markers::new(),
            condition,
            body,
        })
    }
}

node_fields!(While {
    prefix: Space,
    markers: Markers,
    condition: Rc<ControlParens>,
    body: Statement,
});

/// The three-part control of a `for` loop. `prefix` is the space before the
/// opening parenthesis; `init.after` and `condition.after` sit before the
/// two semicolons, `update.after` before the closing parenthesis.
#[derive(Debug, Clone)]
pub struct ForControl {
    pub prefix: Space,
    pub markers: Markers,
    pub init: RightPadded<Statement>,
    pub condition: RightPadded<Expression>,
    pub update: RightPadded<Statement>,
}

impl ForControl {
    pub fn new(
        prefix: Space,
        init: RightPadded<Statement>,
        condition: RightPadded<Expression>,
        update: RightPadded<Statement>,
    ) -> Rc<Self> {
        Rc::new(Self {
            prefix,
            markers: Markers::new(),
            init,
            condition,
            update,
        })
    }
}

node_fields!(ForControl {
    prefix: Space,
    markers: Markers,
    init: RightPadded<Statement>,
    condition: RightPadded<Expression>,
    update: RightPadded<Statement>,
});

/// A C-style `for` loop.
#[derive(Debug, Clone)]
pub struct For {
    pub prefix: Space,
    pub markers: Markers,
    pub control: Rc<ForControl>,
    pub body: Statement,
}

impl For {
    pub fn new(prefix: Space, control: Rc<ForControl>, body: Statement) -> Rc<Self> {
        Rc::new(Self {
            prefix,
            markers: Markers::new(),
            control,
            body,
        })
    }
}

node_fields!(For {
    prefix: Space,
    markers: Markers,
    control: Rc<ForControl>,
    body: Statement,
});

/// A `return` statement with optional value.
#[derive(Debug, Clone)]
pub struct Return {
    pub prefix: Space,
    pub markers: Markers,
    pub expression: Option<Expression>,
}

impl Return {
    pub fn new(prefix: Space, expression: Option<Expression>) -> Rc<Self> {
        Rc::new(Self {
            prefix,
            markers: Markers::new(),
            expression,
        })
    }
}

node_fields!(Return {
    prefix: Space,
    markers: Markers,
    expression: Option<Expression>,
});

/// A stray semicolon.
#[derive(Debug, Clone)]
pub struct Empty {
    pub prefix: Space,
    pub markers: Markers,
}

impl Empty {
    pub fn new(prefix: Space) -> Rc<Self> {
        Rc::new(Self {
            prefix,
            markers: Markers::new(),
        })
    }
}

node_fields!(Empty {
    prefix: Space,
    markers: Markers,
});
