//! Blank-line policy.
//!
//! `keep_maximum_*` caps how many consecutive blank lines survive at a
//! boundary; `minimum_*` is the floor inserted when too few are present.
//! The blank-lines pass applies the cap everywhere and the floor everywhere
//! except the first statement of a file or block.

style_fields! {
    /// Minimum/maximum blank line counts at declaration and code boundaries.
    pub struct BlankLinesStyle {
        /// Cap between members of a class body.
        keep_maximum_in_declarations: u32 = 2,
        /// Cap between statements inside method bodies and other code blocks.
        keep_maximum_in_code: u32 = 2,
        /// Floor after the package statement.
        minimum_after_package: u32 = 1,
        /// Floor before the first import when a package statement precedes it.
        minimum_before_imports: u32 = 1,
        /// Floor after the last import.
        minimum_after_imports: u32 = 1,
        /// Floor around top-level class declarations.
        minimum_around_class: u32 = 1,
        /// Floor around method declarations in a class body.
        minimum_around_method: u32 = 1,
        /// Floor around field declarations in a class body.
        minimum_around_field: u32 = 0,
        /// Floor before a block's closing brace.
        minimum_before_block_end: u32 = 0,
        /// Floor between two adjacent statements of different kinds inside a
        /// code block.
        minimum_between_different_kinds: u32 = 0,
    }
}
