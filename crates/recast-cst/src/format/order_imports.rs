//! Import reordering.
//!
//! Partitions the unit's imports into the configured layout blocks (first
//! matching glob wins, unmatched names fall into an implicit trailing block),
//! sorts each block lexicographically by qualified name, and rejoins the
//! blocks with the configured number of blank lines between non-empty ones.
//! An import's leading comments travel with it. When every position of the
//! result is reference-identical to the input, the original import list (and
//! therefore the original unit handle) is returned.

use std::rc::Rc;

use recast_core::{text, ImportLayoutStyle, ImportMatcher, RecastError};

use crate::cursor::Cursor;
use crate::nodes::module::CompilationUnit;
use crate::nodes::statement::Import;
use crate::nodes::Tree;
use crate::visitor::{dispatch, TreeVisitor};

pub struct OrderImportsVisitor {
    style: ImportLayoutStyle,
    matcher: ImportMatcher,
    stop_after: Option<Tree>,
}

impl OrderImportsVisitor {
    /// Build the pass, compiling the layout's glob patterns.
    ///
    /// # Errors
    ///
    /// Returns [`RecastError::InvalidPattern`] when a block pattern does not
    /// compile.
    pub fn new(style: ImportLayoutStyle) -> Result<Self, RecastError> {
        let matcher = style.matcher()?;
        Ok(Self {
            style,
            matcher,
            stop_after: None,
        })
    }

    pub fn with_stop_after(mut self, stop_after: Option<Tree>) -> Self {
        self.stop_after = stop_after;
        self
    }

    fn ordered(&self, imports: &[Rc<Import>]) -> Vec<Rc<Import>> {
        // One bucket per configured block plus the implicit trailing block.
        let mut blocks: Vec<Vec<Rc<Import>>> = vec![Vec::new(); self.matcher.block_count() + 1];
        for import in imports {
            blocks[self.matcher.block_of(&import.qualified_name())].push(Rc::clone(import));
        }
        for block in &mut blocks {
            block.sort_by_key(|import| import.qualified_name());
        }

        let separator = self.style.blank_lines_between_blocks() as usize;
        let mut result: Vec<Rc<Import>> = Vec::with_capacity(imports.len());
        for block in blocks {
            let block_start = !result.is_empty() && !block.is_empty();
            for (idx, import) in block.into_iter().enumerate() {
                let position = result.len();
                let import = if position == 0 {
                    // The first import keeps the lead-in whitespace of the
                    // original first import, wherever it came from.
                    reflow_whitespace(&import, &imports[0].prefix.whitespace)
                } else {
                    let newlines = if block_start && idx == 0 { separator + 1 } else { 1 };
                    reflow_newlines(&import, newlines)
                };
                result.push(import);
            }
        }
        result
    }
}

/// Replace the import's leading whitespace run, keeping its comments.
fn reflow_whitespace(import: &Rc<Import>, whitespace: &str) -> Rc<Import> {
    import.with_prefix(import.prefix.with_whitespace(whitespace))
}

/// Set the newline count of the import's leading whitespace run.
fn reflow_newlines(import: &Rc<Import>, newlines: usize) -> Rc<Import> {
    let whitespace = &import.prefix.whitespace;
    if text::count_newlines(whitespace) == newlines {
        Rc::clone(import)
    } else {
        reflow_whitespace(import, &text::with_newline_count(whitespace, newlines))
    }
}

impl TreeVisitor for OrderImportsVisitor {
    fn stop_after(&self) -> Option<Tree> {
        self.stop_after.clone()
    }

    fn visit_unit(
        &mut self,
        unit: &Rc<CompilationUnit>,
        cursor: &mut Cursor,
    ) -> Rc<CompilationUnit> {
        let unit = dispatch::walk_unit(self, unit, cursor);
        if cursor.is_stopped() || unit.imports.len() < 2 {
            return unit;
        }
        unit.with_imports(self.ordered(&unit.imports))
    }
}
