//! Spacing policy.
//!
//! Each field decides a single space/no-space choice at one position in the
//! catalogue: before the parentheses of control constructs and calls, around
//! an operator class, inside bracket pairs, or around separators and
//! type-annotation colons. The spacing pass maps every position it rewrites
//! to exactly one of these fields.

use serde::{Deserialize, Serialize};

style_fields! {
    /// Space before an opening parenthesis.
    pub struct BeforeParens {
        if_parens: bool = true,
        while_parens: bool = true,
        for_parens: bool = true,
        method_call: bool = false,
        method_declaration: bool = false,
    }
}

style_fields! {
    /// Space on both sides of an operator, by operator class.
    pub struct AroundOperators {
        assignment: bool = true,
        logical: bool = true,
        equality: bool = true,
        relational: bool = true,
        additive: bool = true,
        multiplicative: bool = true,
        bitwise: bool = true,
        shift: bool = true,
        /// The language-specific `..` range operator.
        range: bool = false,
        /// Prefix unary operators (`!`, `-`) and their operand.
        unary: bool = false,
        lambda_arrow: bool = true,
    }
}

style_fields! {
    /// Space just inside a bracket pair.
    pub struct WithinSpaces {
        grouping_parens: bool = false,
        control_parens: bool = false,
        method_call_parens: bool = false,
        method_declaration_parens: bool = false,
        brackets: bool = false,
    }
}

style_fields! {
    /// Separator and annotation spacing.
    pub struct OtherSpaces {
        before_comma: bool = false,
        after_comma: bool = true,
        before_colon: bool = false,
        after_colon: bool = true,
    }
}

/// The full spacing bundle, grouped the way the catalogue groups positions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SpacesStyle {
    pub before_parens: BeforeParens,
    pub around_operators: AroundOperators,
    pub within: WithinSpaces,
    pub other: OtherSpaces,
}

impl SpacesStyle {
    /// Field-wise merge, recursing into each group.
    pub fn merge(&self, later: &Self) -> Self {
        Self {
            before_parens: self.before_parens.merge(&later.before_parens),
            around_operators: self.around_operators.merge(&later.around_operators),
            within: self.within.merge(&later.within),
            other: self.other.merge(&later.other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let style = SpacesStyle::default();
        assert!(style.before_parens.if_parens());
        assert!(!style.before_parens.method_call());
        assert!(style.around_operators.additive());
        assert!(!style.around_operators.range());
        assert!(!style.around_operators.unary());
        assert!(!style.within.brackets());
        assert!(style.other.after_comma());
    }

    #[test]
    fn test_merge_recurses_into_groups() {
        let earlier = SpacesStyle {
            before_parens: BeforeParens {
                if_parens: Some(false),
                ..Default::default()
            },
            ..Default::default()
        };
        let later = SpacesStyle {
            before_parens: BeforeParens {
                while_parens: Some(false),
                ..Default::default()
            },
            ..Default::default()
        };
        let merged = earlier.merge(&later);
        // Both explicit choices survive; the groups are not replaced whole.
        assert!(!merged.before_parens.if_parens());
        assert!(!merged.before_parens.while_parens());
        assert!(merged.before_parens.for_parens());
    }
}
