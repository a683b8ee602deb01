//! Import layout policy.
//!
//! Imports are partitioned into ordered blocks by matching each import's
//! qualified name against glob patterns, first match wins. An import that
//! matches no block lands in an implicit trailing block. Within a block the
//! sort is lexicographic; non-empty blocks are joined with a configured
//! number of blank lines.

use globset::{Glob, GlobMatcher};
use serde::{Deserialize, Serialize};

use crate::error::RecastError;

/// One configured block of the import layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportBlock {
    /// Glob pattern matched against the import's fully qualified name,
    /// e.g. `"java.*"` or `"*"`.
    pub pattern: String,
}

impl ImportBlock {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

style_fields! {
    /// Block layout and separator configuration for import reordering.
    pub struct ImportLayoutStyle {
        /// Ordered blocks; defaults to a single catch-all block.
        blocks: Vec<ImportBlock> = vec![ImportBlock::new("*")],
        /// Blank lines between consecutive non-empty blocks.
        blank_lines_between_blocks: u32 = 1,
    }
}

impl ImportLayoutStyle {
    /// Compile the block patterns into a matcher.
    ///
    /// # Errors
    ///
    /// Returns [`RecastError::InvalidPattern`] when a block pattern is not a
    /// valid glob.
    pub fn matcher(&self) -> Result<ImportMatcher, RecastError> {
        let mut matchers = Vec::new();
        for block in self.blocks() {
            let glob = Glob::new(&block.pattern)
                .map_err(|e| RecastError::invalid_pattern(&block.pattern, e))?;
            matchers.push(glob.compile_matcher());
        }
        Ok(ImportMatcher { matchers })
    }
}

/// Compiled glob matchers for the configured blocks.
#[derive(Debug, Clone)]
pub struct ImportMatcher {
    matchers: Vec<GlobMatcher>,
}

impl ImportMatcher {
    /// The block index for a qualified name; first match wins. Names that
    /// match no configured block fall into the implicit trailing block at
    /// index `block_count()`.
    pub fn block_of(&self, qualified_name: &str) -> usize {
        self.matchers
            .iter()
            .position(|m| m.is_match(qualified_name))
            .unwrap_or(self.matchers.len())
    }

    /// Number of configured blocks (the implicit trailing block excluded).
    pub fn block_count(&self) -> usize {
        self.matchers.len()
    }
}
