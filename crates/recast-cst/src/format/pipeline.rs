//! The formatting pipeline.
//!
//! Runs the passes in a fixed order, each to completion over the whole tree
//! with its own fresh cursor: minimum-viable spacing, blank lines, spaces,
//! import reordering. Styles are resolved once from the `NamedStyles` markers
//! attached to the unit; an invalid import layout falls back to the default
//! layout rather than aborting the pipeline.

use std::rc::Rc;

use recast_core::{
    merged_blank_lines, merged_import_layout, merged_spaces, ImportLayoutStyle, NamedStyles,
};

use crate::cursor::Cursor;
use crate::format::blank_lines::BlankLinesVisitor;
use crate::format::minimum_viable_spacing::MinimumViableSpacingVisitor;
use crate::format::order_imports::OrderImportsVisitor;
use crate::format::spaces::SpacesVisitor;
use crate::nodes::module::CompilationUnit;
use crate::nodes::Tree;
use crate::visitor::TreeVisitor;

/// Format a unit with the styles attached to it, optionally bounded by a
/// stop-after target.
pub fn format(unit: &Rc<CompilationUnit>, stop_after: Option<Tree>) -> Rc<CompilationUnit> {
    let sets: Vec<NamedStyles> = unit.markers.find_all::<NamedStyles>().cloned().collect();
    let blank_lines = merged_blank_lines(&sets);
    let spaces = merged_spaces(&sets);
    let import_layout = merged_import_layout(&sets);

    let mut tree = Rc::clone(unit);

    tracing::debug!(pass = "minimum-viable-spacing", "formatting");
    tree = MinimumViableSpacingVisitor::new()
        .with_stop_after(stop_after.clone())
        .visit_unit(&tree, &mut Cursor::root());

    tracing::debug!(pass = "blank-lines", "formatting");
    tree = BlankLinesVisitor::new(blank_lines)
        .with_stop_after(stop_after.clone())
        .visit_unit(&tree, &mut Cursor::root());

    tracing::debug!(pass = "spaces", "formatting");
    tree = SpacesVisitor::new(spaces)
        .with_stop_after(stop_after.clone())
        .visit_unit(&tree, &mut Cursor::root());

    tracing::debug!(pass = "order-imports", "formatting");
    let order_imports = OrderImportsVisitor::new(import_layout).unwrap_or_else(|error| {
        tracing::warn!(%error, "invalid import layout; using the default layout");
        OrderImportsVisitor::new(ImportLayoutStyle::default())
            .unwrap_or_else(|_| unreachable!("the default import layout always compiles"))
    });
    tree = order_imports
        .with_stop_after(stop_after)
        .visit_unit(&tree, &mut Cursor::root());

    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::whitespace::Space;

    #[test]
    fn test_empty_unit_is_untouched() {
        let unit = CompilationUnit::new(Space::empty(), None, vec![], vec![], Space::empty());
        let result = format(&unit, None);
        assert!(Rc::ptr_eq(&unit, &result));
    }
}
