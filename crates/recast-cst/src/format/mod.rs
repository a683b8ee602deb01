//! Formatting passes and the pipeline that orders them.

pub mod blank_lines;
pub mod minimum_viable_spacing;
pub mod order_imports;
pub mod pipeline;
pub mod spaces;

pub use blank_lines::BlankLinesVisitor;
pub use minimum_viable_spacing::MinimumViableSpacingVisitor;
pub use order_imports::OrderImportsVisitor;
pub use pipeline::format;
pub use spaces::SpacesVisitor;
