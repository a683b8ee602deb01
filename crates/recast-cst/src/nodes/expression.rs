//! Expression node kinds.

use std::rc::Rc;

use super::op::{BinaryOp, UnaryOp};
use super::statement::Statement;
use super::traits::{node_fields, Container, LeftPadded, RefEq, RightPadded};
use super::whitespace::Space;
use crate::markers::Markers;

/// The expression union. Each variant owns its node behind a shared handle;
/// cloning the enum clones a handle, never a subtree.
#[derive(Debug, Clone)]
pub enum Expression {
    Identifier(Rc<Identifier>),
    FieldAccess(Rc<FieldAccess>),
    Literal(Rc<Literal>),
    Binary(Rc<Binary>),
    Unary(Rc<Unary>),
    Assignment(Rc<Assignment>),
    Call(Rc<MethodCall>),
    Lambda(Rc<Lambda>),
    ArrayAccess(Rc<ArrayAccess>),
    Parentheses(Rc<Parentheses>),
}

impl Expression {
    pub fn prefix(&self) -> &Space {
        match self {
            Expression::Identifier(n) => &n.prefix,
            Expression::FieldAccess(n) => &n.prefix,
            Expression::Literal(n) => &n.prefix,
            Expression::Binary(n) => &n.prefix,
            Expression::Unary(n) => &n.prefix,
            Expression::Assignment(n) => &n.prefix,
            Expression::Call(n) => &n.prefix,
            Expression::Lambda(n) => &n.prefix,
            Expression::ArrayAccess(n) => &n.prefix,
            Expression::Parentheses(n) => &n.prefix,
        }
    }

    /// Replace the leading space, sharing the node when the value is equal.
    pub fn with_prefix(&self, prefix: Space) -> Expression {
        match self {
            Expression::Identifier(n) => Expression::Identifier(n.with_prefix(prefix)),
            Expression::FieldAccess(n) => Expression::FieldAccess(n.with_prefix(prefix)),
            Expression::Literal(n) => Expression::Literal(n.with_prefix(prefix)),
            Expression::Binary(n) => Expression::Binary(n.with_prefix(prefix)),
            Expression::Unary(n) => Expression::Unary(n.with_prefix(prefix)),
            Expression::Assignment(n) => Expression::Assignment(n.with_prefix(prefix)),
            Expression::Call(n) => Expression::Call(n.with_prefix(prefix)),
            Expression::Lambda(n) => Expression::Lambda(n.with_prefix(prefix)),
            Expression::ArrayAccess(n) => Expression::ArrayAccess(n.with_prefix(prefix)),
            Expression::Parentheses(n) => Expression::Parentheses(n.with_prefix(prefix)),
        }
    }

    /// Pointer identity: true only for the same node handle in the same
    /// variant.
    pub fn ptr_eq(&self, other: &Expression) -> bool {
        match (self, other) {
            (Expression::Identifier(a), Expression::Identifier(b)) => Rc::ptr_eq(a, b),
            (Expression::FieldAccess(a), Expression::FieldAccess(b)) => Rc::ptr_eq(a, b),
            (Expression::Literal(a), Expression::Literal(b)) => Rc::ptr_eq(a, b),
            (Expression::Binary(a), Expression::Binary(b)) => Rc::ptr_eq(a, b),
            (Expression::Unary(a), Expression::Unary(b)) => Rc::ptr_eq(a, b),
            (Expression::Assignment(a), Expression::Assignment(b)) => Rc::ptr_eq(a, b),
            (Expression::Call(a), Expression::Call(b)) => Rc::ptr_eq(a, b),
            (Expression::Lambda(a), Expression::Lambda(b)) => Rc::ptr_eq(a, b),
            (Expression::ArrayAccess(a), Expression::ArrayAccess(b)) => Rc::ptr_eq(a, b),
            (Expression::Parentheses(a), Expression::Parentheses(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl RefEq for Expression {
    fn ref_eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

/// A bare name.
#[derive(Debug, Clone)]
pub struct Identifier {
    pub prefix: Space,
    pub markers: Markers,
    pub name: String,
}

impl Identifier {
    pub fn new(prefix: Space, name: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            prefix,
            markers: Markers::new(),
            name: name.into(),
        })
    }
}

node_fields!(Identifier {
    prefix: Space,
    markers: Markers,
    name: String,
});

/// A dotted access: `target.name`. `name.before` is the space before the dot;
/// the identifier's own prefix is the space after it.
#[derive(Debug, Clone)]
pub struct FieldAccess {
    pub prefix: Space,
    pub markers: Markers,
    pub target: Expression,
    pub name: LeftPadded<Rc<Identifier>>,
}

impl FieldAccess {
    pub fn new(
        prefix: Space,
        target: Expression,
        name: LeftPadded<Rc<Identifier>>,
    ) -> Rc<Self> {
        Rc::new(Self {
            prefix,
            markers: Markers::new(),
            target,
            name,
        })
    }
}

node_fields!(FieldAccess {
    prefix: Space,
    markers: Markers,
    target: Expression,
    name: LeftPadded<Rc<Identifier>>,
});

/// A literal kept as its raw source text.
#[derive(Debug, Clone)]
pub struct Literal {
    pub prefix: Space,
    pub markers: Markers,
    pub source: String,
}

impl Literal {
    pub fn new(prefix: Space, source: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            prefix,
            markers: Markers::new(),
            source: source.into(),
        })
    }
}

node_fields!(Literal {
    prefix: Space,
    markers: Markers,
    source: String,
});

/// A binary operation. `operator.before` is the space before the operator;
/// the right operand's prefix is the space after it.
#[derive(Debug, Clone)]
pub struct Binary {
    pub prefix: Space,
    pub markers: Markers,
    pub left: Expression,
    pub operator: LeftPadded<BinaryOp>,
    pub right: Expression,
}

impl Binary {
    pub fn new(
        prefix: Space,
        left: Expression,
        operator: LeftPadded<BinaryOp>,
        right: Expression,
    ) -> Rc<Self> {
        Rc::new(Self {
            prefix,
            markers: Markers::new(),
            left,
            operator,
            right,
        })
    }
}

node_fields!(Binary {
    prefix: Space,
    markers: Markers,
    left: Expression,
    operator: LeftPadded<BinaryOp>,
    right: Expression,
});

/// A prefix unary operation.
#[derive(Debug, Clone)]
pub struct Unary {
    pub prefix: Space,
    pub markers: Markers,
    pub operator: UnaryOp,
    pub expression: Expression,
}

impl Unary {
    pub fn new(prefix: Space, operator: UnaryOp, expression: Expression) -> Rc<Self> {
        Rc::new(Self {
            prefix,
            markers: Markers::new(),
            operator,
            expression,
        })
    }
}

node_fields!(Unary {
    prefix: Space,
    markers: Markers,
    operator: UnaryOp,
    expression: Expression,
});

/// An assignment: `target = value`. `value.before` is the space before the
/// equals sign.
#[derive(Debug, Clone)]
pub struct Assignment {
    pub prefix: Space,
    pub markers: Markers,
    pub target: Expression,
    pub value: LeftPadded<Expression>,
}

impl Assignment {
    pub fn new(prefix: Space, target: Expression, value: LeftPadded<Expression>) -> Rc<Self> {
        Rc::new(Self {
            prefix,
            markers: Markers::new(),
            target,
            value,
        })
    }
}

node_fields!(Assignment {
    prefix: Space,
    markers: Markers,
    target: Expression,
    value: LeftPadded<Expression>,
});

/// A call: `select.name(arguments)`. `select.after` is the space before the
/// dot; `arguments.before` is the space before the opening parenthesis.
#[derive(Debug, Clone)]
pub struct MethodCall {
    pub prefix: Space,
    pub markers: Markers,
    pub select: Option<RightPadded<Expression>>,
    pub name: Rc<Identifier>,
    pub arguments: Container<Expression>,
}

impl MethodCall {
    pub fn new(
        prefix: Space,
        select: Option<RightPadded<Expression>>,
        name: Rc<Identifier>,
        arguments: Container<Expression>,
    ) -> Rc<Self> {
        Rc::new(Self {
            prefix,
            markers: Markers::new(),
            select,
            name,
            arguments,
        })
    }
}

node_fields!(MethodCall {
    prefix: Space,
    markers: Markers,
    select: Option<RightPadded<Expression>>,
    name: Rc<Identifier>,
    arguments: Container<Expression>,
});

/// A lambda: `(params) -> body`. `arrow` is the space before the arrow; the
/// body's prefix is the space after it.
#[derive(Debug, Clone)]
pub struct Lambda {
    pub prefix: Space,
    pub markers: Markers,
    pub parameters: Container<Rc<super::statement::VariableDecl>>,
    pub arrow: Space,
    pub body: Statement,
}

impl Lambda {
    pub fn new(
        prefix: Space,
        parameters: Container<Rc<super::statement::VariableDecl>>,
        arrow: Space,
        body: Statement,
    ) -> Rc<Self> {
        Rc::new(Self {
            prefix,
            markers: Markers::new(),
            parameters,
            arrow,
            body,
        })
    }
}

node_fields!(Lambda {
    prefix: Space,
    markers: Markers,
    parameters: Container<Rc<super::statement::VariableDecl>>,
    arrow: Space,
    body: Statement,
});

/// An index access: `indexed[index]`. `bracket` is the space before the
/// opening bracket; `index.after` the space before the closing one.
#[derive(Debug, Clone)]
pub struct ArrayAccess {
    pub prefix: Space,
    pub markers: Markers,
    pub indexed: Expression,
    pub bracket: Space,
    pub index: RightPadded<Expression>,
}

impl ArrayAccess {
    pub fn new(
        prefix: Space,
        indexed: Expression,
        bracket: Space,
        index: RightPadded<Expression>,
    ) -> Rc<Self> {
        Rc::new(Self {
            prefix,
            markers: Markers::new(),
            indexed,
            bracket,
            index,
        })
    }
}

node_fields!(ArrayAccess {
    prefix: Space,
    markers: Markers,
    indexed: Expression,
    bracket: Space,
    index: RightPadded<Expression>,
});

/// A grouping parenthesis pair around an expression.
#[derive(Debug, Clone)]
pub struct Parentheses {
    pub prefix: Space,
    pub markers: Markers,
    pub tree: RightPadded<Expression>,
}

impl Parentheses {
    pub fn new(prefix: Space, tree: RightPadded<Expression>) -> Rc<Self> {
        Rc::new(Self {
            prefix,
            markers: Markers::new(),
            tree,
        })
    }
}

node_fields!(Parentheses {
    prefix: Space,
    markers: Markers,
    tree: RightPadded<Expression>,
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_prefix_shares_when_unchanged() {
        let ident = Identifier::new(Space::space(), "x");
        let same = ident.with_prefix(Space::space());
        assert!(Rc::ptr_eq(&ident, &same));

        let changed = ident.with_prefix(Space::empty());
        assert!(!Rc::ptr_eq(&ident, &changed));
        assert_eq!(changed.name, "x");
    }

    #[test]
    fn test_expression_ptr_eq() {
        let a = Expression::Identifier(Identifier::new(Space::empty(), "a"));
        let b = a.clone();
        assert!(a.ptr_eq(&b));
        let c = Expression::Identifier(Identifier::new(Space::empty(), "a"));
        assert!(!a.ptr_eq(&c));
    }

    #[test]
    fn test_binary_with_child_shares_siblings() {
        let left = Expression::Identifier(Identifier::new(Space::empty(), "a"));
        let right = Expression::Identifier(Identifier::new(Space::space(), "b"));
        let binary = Binary::new(
            Space::empty(),
            left.clone(),
            LeftPadded::new(Space::space(), BinaryOp::Add),
            right,
        );
        let new_left = Expression::Identifier(Identifier::new(Space::empty(), "c"));
        let updated = binary.with_left(new_left);
        assert!(!Rc::ptr_eq(&binary, &updated));
        // The untouched right operand is shared by reference.
        assert!(binary.right.ptr_eq(&updated.right));
    }
}
