//! Style bundles and style resolution.
//!
//! A style is an immutable, mergeable configuration value for one formatting
//! concern. Every field is optional; a field left unset by every merged
//! bundle falls back to a hard default supplied by its accessor method.
//!
//! ## Merging
//!
//! `merge(earlier, later)` is field-wise: the later bundle wins for each
//! field it sets explicitly, and inherits the earlier bundle's value (or the
//! default) everywhere else. Merging is associative and order-sensitive,
//! never a whole-object replace.
//!
//! ## Named style sets
//!
//! [`NamedStyles`] groups bundles under a name (an "editorconfig"-like set).
//! Resolution collects every named set attached to a compilation unit in
//! order, merges the bundles of one kind field-wise, and substitutes the
//! default bundle for any kind no set provides. An unknown or missing style
//! kind is never an error.

#[macro_use]
mod macros;

mod blank_lines;
mod import_layout;
mod spaces;

pub use blank_lines::BlankLinesStyle;
pub use import_layout::{ImportBlock, ImportLayoutStyle, ImportMatcher};
pub use spaces::{AroundOperators, BeforeParens, OtherSpaces, SpacesStyle, WithinSpaces};

use serde::{Deserialize, Serialize};

/// A single style bundle, tagged by the formatting concern it configures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Style {
    BlankLines(BlankLinesStyle),
    Spaces(SpacesStyle),
    ImportLayout(ImportLayoutStyle),
}

/// A named, ordered collection of style bundles.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NamedStyles {
    /// Display name for the set (e.g. `"corp-defaults"`).
    pub name: String,
    /// The bundles in this set, at most one per concern in practice.
    pub styles: Vec<Style>,
}

impl NamedStyles {
    pub fn new(name: impl Into<String>, styles: Vec<Style>) -> Self {
        Self {
            name: name.into(),
            styles,
        }
    }

    fn blank_lines(&self) -> impl Iterator<Item = &BlankLinesStyle> {
        self.styles.iter().filter_map(|s| match s {
            Style::BlankLines(b) => Some(b),
            _ => None,
        })
    }

    fn spaces(&self) -> impl Iterator<Item = &SpacesStyle> {
        self.styles.iter().filter_map(|s| match s {
            Style::Spaces(b) => Some(b),
            _ => None,
        })
    }

    fn import_layout(&self) -> impl Iterator<Item = &ImportLayoutStyle> {
        self.styles.iter().filter_map(|s| match s {
            Style::ImportLayout(b) => Some(b),
            _ => None,
        })
    }
}

/// Merge every blank-lines bundle found across `sets`, in order.
///
/// Later sets win per field. Returns the all-defaults bundle when no set
/// carries one.
pub fn merged_blank_lines(sets: &[NamedStyles]) -> BlankLinesStyle {
    sets.iter()
        .flat_map(NamedStyles::blank_lines)
        .fold(BlankLinesStyle::default(), |acc, s| acc.merge(s))
}

/// Merge every spacing bundle found across `sets`, in order.
pub fn merged_spaces(sets: &[NamedStyles]) -> SpacesStyle {
    sets.iter()
        .flat_map(NamedStyles::spaces)
        .fold(SpacesStyle::default(), |acc, s| acc.merge(s))
}

/// Merge every import-layout bundle found across `sets`, in order.
pub fn merged_import_layout(sets: &[NamedStyles]) -> ImportLayoutStyle {
    sets.iter()
        .flat_map(NamedStyles::import_layout)
        .fold(ImportLayoutStyle::default(), |acc, s| acc.merge(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_resolution_when_no_sets() {
        let merged = merged_blank_lines(&[]);
        assert_eq!(merged, BlankLinesStyle::default());
        // Accessors supply hard defaults.
        assert_eq!(merged.minimum_around_method(), 1);
    }

    #[test]
    fn test_user_bundle_overrides_default() {
        let user = NamedStyles::new(
            "user",
            vec![Style::BlankLines(BlankLinesStyle {
                minimum_around_method: Some(2),
                ..Default::default()
            })],
        );
        let merged = merged_blank_lines(&[user]);
        assert_eq!(merged.minimum_around_method(), 2);
        // Unset fields still come from defaults.
        assert_eq!(merged.keep_maximum_in_code(), 2);
    }

    #[test]
    fn test_second_bundle_wins_per_field_only() {
        let first = NamedStyles::new(
            "first",
            vec![Style::BlankLines(BlankLinesStyle {
                minimum_after_package: Some(3),
                minimum_around_method: Some(2),
                ..Default::default()
            })],
        );
        let second = NamedStyles::new(
            "second",
            vec![Style::BlankLines(BlankLinesStyle {
                minimum_around_method: Some(0),
                ..Default::default()
            })],
        );
        let merged = merged_blank_lines(&[first, second]);
        // Field set only by the second set: taken from the second.
        assert_eq!(merged.minimum_around_method(), 0);
        // Field set only by the first set: preserved.
        assert_eq!(merged.minimum_after_package(), 3);
    }

    #[test]
    fn test_styles_deserialize_from_json() {
        let json = r#"{
            "name": "corp",
            "styles": [
                { "kind": "blank-lines", "minimum-after-imports": 2 },
                { "kind": "spaces", "before-parens": { "if-parens": false } }
            ]
        }"#;
        let set: NamedStyles = serde_json::from_str(json).expect("deserialize error");
        assert_eq!(set.name, "corp");
        let blank = merged_blank_lines(std::slice::from_ref(&set));
        assert_eq!(blank.minimum_after_imports(), 2);
        let spaces = merged_spaces(std::slice::from_ref(&set));
        assert!(!spaces.before_parens.if_parens());
    }
}
