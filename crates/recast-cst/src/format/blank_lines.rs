//! Blank-line normalization.
//!
//! Applies the resolved [`BlankLinesStyle`] at every configured boundary: the
//! file header (package, imports, first declaration), class members, plain
//! code statements, and block closing braces. The cap (`keep_maximum_*`)
//! applies everywhere; the floor (`minimum_*`) applies everywhere except the
//! first statement of the file or of a block, so no spurious blank lines
//! appear at a file or block start.
//!
//! A boundary's blank lines live in the newline count of the target node's
//! leading whitespace: `n` newlines render as `n - 1` blank lines. When the
//! leading trivia begins with a same-line trailing comment (no newline before
//! a single-line, non-doc comment) the adjustment applies to that comment's
//! own trailing whitespace, so the comment is not pushed onto its own line.
//! Comments are never deleted; only whitespace is rewritten.

use std::rc::Rc;

use recast_core::{text, BlankLinesStyle};

use crate::cursor::Cursor;
use crate::markers::OmitBraces;
use crate::nodes::module::CompilationUnit;
use crate::nodes::statement::{Block, Statement, StatementKind};
use crate::nodes::whitespace::Space;
use crate::nodes::Tree;
use crate::visitor::TreeVisitor;

pub struct BlankLinesVisitor {
    style: BlankLinesStyle,
    stop_after: Option<Tree>,
}

impl BlankLinesVisitor {
    pub fn new(style: BlankLinesStyle) -> Self {
        Self {
            style,
            stop_after: None,
        }
    }

    pub fn with_stop_after(mut self, stop_after: Option<Tree>) -> Self {
        self.stop_after = stop_after;
        self
    }

    /// The floor a declaration kind asks for on both of its sides.
    fn declaration_minimum(&self, kind: StatementKind) -> Option<u32> {
        match kind {
            StatementKind::Class => Some(self.style.minimum_around_class()),
            StatementKind::Method => Some(self.style.minimum_around_method()),
            StatementKind::VariableDecl => Some(self.style.minimum_around_field()),
            _ => None,
        }
    }

    /// Boundary floor between two adjacent class members (or file-level
    /// declarations): the larger of what either side asks for.
    fn between_declarations(
        &self,
        previous: Option<StatementKind>,
        current: StatementKind,
    ) -> Option<u32> {
        let before = self.declaration_minimum(current);
        let after = previous.and_then(|kind| self.declaration_minimum(kind));
        match (before, after) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (value, None) | (None, value) => value,
        }
    }

    fn reflow(&self, statement: &Statement, minimum: Option<u32>, maximum: u32) -> Statement {
        statement.with_prefix(adjusted(statement.prefix(), minimum, maximum))
    }
}

/// The newline count a boundary settles on: cap always, floor when given.
/// A zero floor is vacuous: it demands no blank lines, so it never forces a
/// same-line statement onto its own line.
fn target(newlines: usize, minimum: Option<u32>, maximum: u32) -> usize {
    let mut want = newlines.min(maximum as usize + 1);
    if let Some(floor) = minimum {
        if floor > 0 {
            want = want.max(floor as usize + 1);
        }
    }
    want
}

/// Rewrite a leading space to the boundary's newline count.
fn adjusted(space: &Space, minimum: Option<u32>, maximum: u32) -> Space {
    if let Some(first) = space.comments.first() {
        let trailing = text::is_single_line(&space.whitespace) && !first.multiline && !first.is_doc();
        if trailing {
            if space.comments.len() > 1 {
                tracing::warn!(
                    comments = space.comments.len(),
                    "trailing comment chain at blank-line boundary; adjusting first comment only"
                );
            }
            let newlines = text::count_newlines(&first.suffix);
            let want = target(newlines, minimum, maximum);
            if want == newlines {
                return space.clone();
            }
            let mut comments = space.comments.clone();
            comments[0] = first.with_suffix(text::with_newline_count(&first.suffix, want));
            return Space::new(space.whitespace.clone(), comments);
        }
    }
    let newlines = space.newlines();
    let want = target(newlines, minimum, maximum);
    if want == newlines {
        space.clone()
    } else {
        space.with_whitespace(text::with_newline_count(&space.whitespace, want))
    }
}

impl TreeVisitor for BlankLinesVisitor {
    fn stop_after(&self) -> Option<Tree> {
        self.stop_after.clone()
    }

    /// File-level boundaries: package header, import section, declarations.
    fn visit_unit(
        &mut self,
        unit: &Rc<CompilationUnit>,
        cursor: &mut Cursor,
    ) -> Rc<CompilationUnit> {
        cursor.push(Tree::Unit(Rc::clone(unit)));
        let cap = self.style.keep_maximum_in_declarations();

        let package = unit.package.as_ref().map(|package| {
            let statement = Statement::Package(Rc::clone(package));
            let visited = self.visit_statement(&statement, cursor);
            // The package is the first element of the file: cap only.
            match self.reflow(&visited, None, cap) {
                Statement::Package(package) => package,
                other => panic!("package rewrite changed statement kind to {:?}", other.kind()),
            }
        });

        let mut imports = Vec::with_capacity(unit.imports.len());
        for (idx, import) in unit.imports.iter().enumerate() {
            let statement = Statement::Import(Rc::clone(import));
            if cursor.is_stopped() {
                imports.push(Rc::clone(import));
                continue;
            }
            let visited = self.visit_statement(&statement, cursor);
            let minimum = if idx > 0 {
                None
            } else if package.is_some() {
                Some(
                    self.style
                        .minimum_before_imports()
                        .max(self.style.minimum_after_package()),
                )
            } else {
                None
            };
            match self.reflow(&visited, minimum, cap) {
                Statement::Import(import) => imports.push(import),
                other => panic!("import rewrite changed statement kind to {:?}", other.kind()),
            }
        }

        let mut statements = Vec::with_capacity(unit.statements.len());
        let mut previous: Option<StatementKind> = None;
        for (idx, statement) in unit.statements.iter().enumerate() {
            if cursor.is_stopped() {
                statements.push(statement.clone());
                continue;
            }
            let visited = self.visit_statement(statement, cursor);
            let minimum = if idx == 0 {
                if !unit.imports.is_empty() {
                    Some(
                        self.style
                            .minimum_after_imports()
                            .max(self.declaration_minimum(statement.kind()).unwrap_or(0)),
                    )
                } else if unit.package.is_some() {
                    Some(
                        self.style
                            .minimum_after_package()
                            .max(self.declaration_minimum(statement.kind()).unwrap_or(0)),
                    )
                } else {
                    // First element of the file: cap only.
                    None
                }
            } else {
                self.between_declarations(previous, statement.kind())
            };
            previous = Some(statement.kind());
            statements.push(self.reflow(&visited, minimum, cap));
        }

        cursor.pop();
        unit.with_package(package)
            .with_imports(imports)
            .with_statements(statements)
    }

    /// Block boundaries. A class body uses the declaration rules; any other
    /// block uses the code rules.
    fn visit_block(&mut self, node: &Rc<Block>, cursor: &mut Cursor) -> Rc<Block> {
        let declarations = matches!(
            cursor.current(),
            Some(Tree::Statement(Statement::Class(_)))
        );
        let cap = if declarations {
            self.style.keep_maximum_in_declarations()
        } else {
            self.style.keep_maximum_in_code()
        };

        let mut statements = Vec::with_capacity(node.statements.len());
        let mut previous: Option<StatementKind> = None;
        for (idx, statement) in node.statements.iter().enumerate() {
            if cursor.is_stopped() {
                statements.push(statement.clone());
                continue;
            }
            let visited = self.visit_statement(statement, cursor);
            let minimum = if idx == 0 {
                // First statement of a block: cap only.
                None
            } else if declarations {
                self.between_declarations(previous, statement.kind())
            } else if previous.is_some_and(|kind| kind != statement.kind()) {
                Some(self.style.minimum_between_different_kinds())
            } else {
                None
            };
            previous = Some(statement.kind());
            statements.push(self.reflow(&visited, minimum, cap));
        }

        let mut node = node.with_statements(statements);
        let braced = !node.markers.contains::<OmitBraces>();
        if braced && !cursor.is_stopped() {
            let minimum = if node.statements.is_empty() {
                None
            } else {
                Some(self.style.minimum_before_block_end())
            };
            node = node.with_end(adjusted(&node.end, minimum, cap));
        }
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recast_core::BlankLinesStyle;

    #[test]
    fn test_target_applies_cap_and_floor() {
        // Cap 2 blanks => at most 3 newlines.
        assert_eq!(target(5, None, 2), 3);
        // Floor 1 blank => at least 2 newlines.
        assert_eq!(target(1, Some(1), 2), 2);
        // In range: untouched.
        assert_eq!(target(2, Some(1), 2), 2);
        // No floor: zero newlines stay zero.
        assert_eq!(target(0, None, 2), 0);
    }

    #[test]
    fn test_adjusted_trims_excess_blank_lines() {
        let space = Space::parse("\n\n\n\n    ");
        let result = adjusted(&space, None, 1);
        assert_eq!(result.whitespace, "\n\n    ");
    }

    #[test]
    fn test_adjusted_inserts_floor() {
        let space = Space::parse("\n    ");
        let result = adjusted(&space, Some(1), 2);
        assert_eq!(result.whitespace, "\n\n    ");
    }

    #[test]
    fn test_adjusted_keeps_comment_anchored() {
        // Comment on its own line: the whitespace before it is the boundary.
        let space = Space::parse("\n\n\n\n// note\n");
        let result = adjusted(&space, None, 1);
        assert_eq!(result.whitespace, "\n\n");
        assert_eq!(result.comments[0].text, "// note");
        assert_eq!(result.comments[0].suffix, "\n");
    }

    #[test]
    fn test_trailing_comment_rule_moves_adjustment_to_suffix() {
        // " // same line" has no newline before the comment: the comment must
        // stay on the previous statement's line, so the floor applies to its
        // suffix instead.
        let space = Space::parse(" // same line\n    ");
        let result = adjusted(&space, Some(1), 2);
        assert_eq!(result.whitespace, " ");
        assert_eq!(result.comments[0].suffix, "\n\n    ");
    }

    #[test]
    fn test_doc_comment_is_not_treated_as_trailing() {
        let space = Space::parse("/** doc */\n");
        let result = adjusted(&space, Some(1), 2);
        // The floor applies before the doc comment.
        assert_eq!(result.whitespace, "\n\n");
        assert_eq!(result.comments[0].suffix, "\n");
    }

    #[test]
    fn test_in_range_space_is_value_identical() {
        let space = Space::parse("\n\n    ");
        let result = adjusted(&space, Some(1), 2);
        assert_eq!(result, space);
    }

    #[test]
    fn test_style_defaults_round() {
        let style = BlankLinesStyle::default();
        let visitor = BlankLinesVisitor::new(style);
        assert_eq!(
            visitor.declaration_minimum(StatementKind::Method),
            Some(1)
        );
        assert_eq!(visitor.declaration_minimum(StatementKind::Return), None);
    }
}
