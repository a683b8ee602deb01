//! The root node of a parsed source file.

use std::rc::Rc;

use super::statement::{Import, Package, Statement};
use super::traits::node_fields;
use super::whitespace::Space;
use crate::markers::Markers;

/// A whole source file: optional package declaration, imports, top-level
/// statements, and the trivia after the last token.
///
/// Printing a freshly parsed unit reproduces the input byte for byte; every
/// span of the source lives in exactly one field of exactly one node.
#[derive(Debug, Clone)]
pub struct CompilationUnit {
    pub prefix: Space,
    pub markers: Markers,
    pub package: Option<Rc<Package>>,
    pub imports: Vec<Rc<Import>>,
    pub statements: Vec<Statement>,
    /// Trivia after the final token, up to end of file.
    pub eof: Space,
}

impl CompilationUnit {
    pub fn new(
        prefix: Space,
        package: Option<Rc<Package>>,
        imports: Vec<Rc<Import>>,
        statements: Vec<Statement>,
        eof: Space,
    ) -> Rc<Self> {
        Rc::new(Self {
            prefix,
            markers: Markers::new(),
            package,
            imports,
            statements,
            eof,
        })
    }
}

node_fields!(CompilationUnit {
    prefix: Space,
    markers: Markers,
    package: Option<Rc<Package>>,
    imports: Vec<Rc<Import>>,
    statements: Vec<Statement>,
    eof: Space,
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_imports_shares_when_unchanged() {
        let unit = CompilationUnit::new(Space::empty(), None, vec![], vec![], Space::empty());
        let same = unit.with_imports(vec![]);
        assert!(Rc::ptr_eq(&unit, &same));
    }
}
