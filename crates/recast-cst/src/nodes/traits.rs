//! Identity, padding, and field-update support shared by all node kinds.
//!
//! # Structural sharing
//!
//! Nodes live behind `Rc` handles; "did anything change" checks compare
//! handles with `Rc::ptr_eq`, which is O(1). Every generated `with_<field>`
//! setter returns the *same* handle when the new field value is identical to
//! the current one, so an untouched subtree is reference-identical to the
//! input, not merely equal.

use std::rc::Rc;

use super::whitespace::Space;
use crate::markers::Markers;

/// Identity-flavored equality used by the `with_*` setters.
///
/// For node handles this is pointer identity; for plain value fields
/// (`Space`, operator tags, strings) it is value equality, which is what
/// "identical to the old value" means for values that are copied rather than
/// shared.
pub trait RefEq {
    fn ref_eq(&self, other: &Self) -> bool;
}

impl<T: ?Sized> RefEq for Rc<T> {
    fn ref_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: RefEq> RefEq for Option<T> {
    fn ref_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (None, None) => true,
            (Some(a), Some(b)) => a.ref_eq(b),
            _ => false,
        }
    }
}

impl<T: RefEq> RefEq for Vec<T> {
    fn ref_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.ref_eq(b))
    }
}

impl RefEq for Space {
    fn ref_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl RefEq for String {
    fn ref_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl RefEq for bool {
    fn ref_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl RefEq for Markers {
    fn ref_eq(&self, other: &Self) -> bool {
        self.iter().len() == other.iter().len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| Rc::ptr_eq(a, b))
    }
}

// ============================================================================
// Padding
// ============================================================================

/// An element plus the space occurring *after* it, used wherever separator or
/// bracket whitespace does not belong to the element itself (before a comma,
/// before a closing bracket).
#[derive(Debug, Clone)]
pub struct RightPadded<T> {
    pub element: T,
    pub after: Space,
}

impl<T> RightPadded<T> {
    pub fn new(element: T, after: Space) -> Self {
        Self { element, after }
    }
}

impl<T: RefEq + Clone> RightPadded<T> {
    pub fn with_element(&self, element: T) -> Self {
        if self.element.ref_eq(&element) {
            self.clone()
        } else {
            Self {
                element,
                after: self.after.clone(),
            }
        }
    }

    pub fn with_after(&self, after: Space) -> Self {
        if self.after == after {
            self.clone()
        } else {
            Self {
                element: self.element.clone(),
                after,
            }
        }
    }
}

impl<T: RefEq> RefEq for RightPadded<T> {
    fn ref_eq(&self, other: &Self) -> bool {
        self.element.ref_eq(&other.element) && self.after == other.after
    }
}

/// An element plus the space occurring *before* it (an operator and the space
/// before it, a type annotation and the space before its colon).
#[derive(Debug, Clone)]
pub struct LeftPadded<T> {
    pub before: Space,
    pub element: T,
}

impl<T> LeftPadded<T> {
    pub fn new(before: Space, element: T) -> Self {
        Self { before, element }
    }
}

impl<T: RefEq + Clone> LeftPadded<T> {
    pub fn with_before(&self, before: Space) -> Self {
        if self.before == before {
            self.clone()
        } else {
            Self {
                before,
                element: self.element.clone(),
            }
        }
    }

    pub fn with_element(&self, element: T) -> Self {
        if self.element.ref_eq(&element) {
            self.clone()
        } else {
            Self {
                before: self.before.clone(),
                element,
            }
        }
    }
}

impl<T: RefEq> RefEq for LeftPadded<T> {
    fn ref_eq(&self, other: &Self) -> bool {
        self.before == other.before && self.element.ref_eq(&other.element)
    }
}

/// A bracketed, comma-delimited list: the space before the opening bracket
/// plus right-padded elements (each element's `after` is the space before the
/// following comma, or before the closing bracket for the last element).
#[derive(Debug, Clone)]
pub struct Container<T> {
    pub before: Space,
    pub elements: Vec<RightPadded<T>>,
}

impl<T> Container<T> {
    pub fn new(before: Space, elements: Vec<RightPadded<T>>) -> Self {
        Self { before, elements }
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }
}

impl<T: RefEq + Clone> Container<T> {
    pub fn with_before(&self, before: Space) -> Self {
        if self.before == before {
            self.clone()
        } else {
            Self {
                before,
                elements: self.elements.clone(),
            }
        }
    }

    pub fn with_elements(&self, elements: Vec<RightPadded<T>>) -> Self {
        if self.elements.ref_eq(&elements) {
            self.clone()
        } else {
            Self {
                before: self.before.clone(),
                elements,
            }
        }
    }
}

impl<T: RefEq> RefEq for Container<T> {
    fn ref_eq(&self, other: &Self) -> bool {
        self.before == other.before && self.elements.ref_eq(&other.elements)
    }
}

// ============================================================================
// Field-update setters
// ============================================================================

/// Generate `with_<field>` setters for a node struct.
///
/// Each setter takes the node by handle and returns the same handle when the
/// new value is identical per [`RefEq`], or a new handle sharing every other
/// field otherwise.
macro_rules! node_fields {
    ($ty:ident { $($field:ident : $fty:ty),* $(,)? }) => {
        paste::paste! {
            impl $ty {
                $(
                    pub fn [<with_ $field>](
                        self: &std::rc::Rc<Self>,
                        value: $fty,
                    ) -> std::rc::Rc<Self> {
                        if $crate::nodes::traits::RefEq::ref_eq(&self.$field, &value) {
                            std::rc::Rc::clone(self)
                        } else {
                            let mut node = (**self).clone();
                            node.$field = value;
                            std::rc::Rc::new(node)
                        }
                    }
                )*
            }
        }
    };
}

pub(crate) use node_fields;
