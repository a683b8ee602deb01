//! Lossless syntax trees and source-to-source formatting.
//!
//! This crate models source files as immutable trees in which every byte of
//! the input, including whitespace and comments, belongs to exactly one node
//! field, so an unmodified tree prints back byte for byte. Rewrites go
//! through [`visitor::TreeVisitor`] passes that rebuild only the paths they
//! touch; everything else stays reference-identical, which is what makes
//! "did this pass change anything" an O(1) question.
//!
//! The built-in passes in [`format`] normalize blank lines, token spacing,
//! and import order, driven by mergeable style bundles from `recast-core`
//! attached to the root node as markers. [`format::format`] runs them as a
//! pipeline, optionally bounded by a stop-after target node.
//!
//! ```
//! use std::rc::Rc;
//! use recast_cst::codegen;
//! use recast_cst::nodes::{CompilationUnit, Space};
//!
//! let unit = CompilationUnit::new(Space::empty(), None, vec![], vec![], Space::empty());
//! let formatted = recast_cst::format::format(&unit, None);
//! // Nothing to do: the very same handle comes back.
//! assert!(Rc::ptr_eq(&unit, &formatted));
//! assert_eq!(codegen::print(&formatted), "");
//! ```

pub mod codegen;
pub mod cursor;
pub mod format;
pub mod markers;
pub mod nodes;
pub mod visitor;

pub use codegen::{print, Codegen, CodegenState};
pub use cursor::Cursor;
pub use markers::{Marker, Markers, OmitBraces};
pub use nodes::{
    CompilationUnit, Comment, Container, Expression, LeftPadded, RightPadded, Space, Statement,
    StatementKind, Tree,
};
pub use visitor::{HookResult, TreeVisitor};
