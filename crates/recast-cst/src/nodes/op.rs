//! Operator and modifier tags.

use super::traits::RefEq;

/// Binary operators, grouped into classes for the spacing catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    And,
    Or,
    BitAnd,
    BitOr,
    BitXor,
    ShiftLeft,
    ShiftRight,
    /// The language-specific range operator.
    Range,
}

/// The spacing class an operator belongs to. The spacing style configures a
/// single space/no-space choice per class, not per operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorClass {
    Additive,
    Multiplicative,
    Equality,
    Relational,
    Logical,
    Bitwise,
    Shift,
    Range,
}

impl BinaryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Modulo => "%",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::LessThan => "<",
            BinaryOp::LessThanOrEqual => "<=",
            BinaryOp::GreaterThan => ">",
            BinaryOp::GreaterThanOrEqual => ">=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
            BinaryOp::BitAnd => "&",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
            BinaryOp::ShiftLeft => "<<",
            BinaryOp::ShiftRight => ">>",
            BinaryOp::Range => "..",
        }
    }

    pub fn class(&self) -> OperatorClass {
        match self {
            BinaryOp::Add | BinaryOp::Subtract => OperatorClass::Additive,
            BinaryOp::Multiply | BinaryOp::Divide | BinaryOp::Modulo => {
                OperatorClass::Multiplicative
            }
            BinaryOp::Equal | BinaryOp::NotEqual => OperatorClass::Equality,
            BinaryOp::LessThan
            | BinaryOp::LessThanOrEqual
            | BinaryOp::GreaterThan
            | BinaryOp::GreaterThanOrEqual => OperatorClass::Relational,
            BinaryOp::And | BinaryOp::Or => OperatorClass::Logical,
            BinaryOp::BitAnd | BinaryOp::BitOr | BinaryOp::BitXor => OperatorClass::Bitwise,
            BinaryOp::ShiftLeft | BinaryOp::ShiftRight => OperatorClass::Shift,
            BinaryOp::Range => OperatorClass::Range,
        }
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl RefEq for BinaryOp {
    fn ref_eq(&self, other: &Self) -> bool {
        self == other
    }
}

/// Prefix unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Not,
    Negate,
}

impl UnaryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOp::Not => "!",
            UnaryOp::Negate => "-",
        }
    }
}

impl RefEq for UnaryOp {
    fn ref_eq(&self, other: &Self) -> bool {
        self == other
    }
}

/// Declaration modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierKind {
    Public,
    Private,
    Static,
    Final,
}

impl ModifierKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModifierKind::Public => "public",
            ModifierKind::Private => "private",
            ModifierKind::Static => "static",
            ModifierKind::Final => "final",
        }
    }
}

impl RefEq for ModifierKind {
    fn ref_eq(&self, other: &Self) -> bool {
        self == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_classes() {
        assert_eq!(BinaryOp::Add.class(), OperatorClass::Additive);
        assert_eq!(BinaryOp::Modulo.class(), OperatorClass::Multiplicative);
        assert_eq!(BinaryOp::NotEqual.class(), OperatorClass::Equality);
        assert_eq!(BinaryOp::ShiftRight.class(), OperatorClass::Shift);
        assert_eq!(BinaryOp::Range.class(), OperatorClass::Range);
    }

    #[test]
    fn test_operator_text() {
        assert_eq!(BinaryOp::LessThanOrEqual.as_str(), "<=");
        assert_eq!(BinaryOp::Range.as_str(), "..");
        assert_eq!(UnaryOp::Not.as_str(), "!");
        assert_eq!(ModifierKind::Static.as_str(), "static");
    }
}
