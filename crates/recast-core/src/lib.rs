//! Core infrastructure for recast.
//!
//! This crate provides the language-agnostic half of the engine:
//! - Style bundles (blank lines, spacing, import layout) and field-wise merging
//! - Named style sets and style resolution defaults
//! - Error types for the fallible configuration surface
//! - Text utilities for newline counting inside whitespace runs
//!
//! The lossless tree, visitor dispatch and the formatting passes themselves
//! live in `recast-cst`, which depends on this crate.

pub mod error;
pub mod style;
pub mod text;

pub use error::RecastError;
pub use style::{
    merged_blank_lines, merged_import_layout, merged_spaces, AroundOperators, BeforeParens,
    BlankLinesStyle, ImportBlock, ImportLayoutStyle, ImportMatcher, NamedStyles, OtherSpaces,
    SpacesStyle, Style, WithinSpaces,
};
