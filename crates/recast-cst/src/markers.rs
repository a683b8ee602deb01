//! Per-node markers: an open-ended, type-keyed set of metadata values.
//!
//! Markers express cross-cutting facts about a node ("braces omitted", "these
//! named styles apply to this file") without growing the node type itself.
//! Any `'static + Debug` type can be a marker; lookup is by concrete type.

use std::any::Any;
use std::fmt::Debug;
use std::rc::Rc;

use recast_core::NamedStyles;

/// A marker value. Implemented by any `'static + Debug` payload type.
pub trait Marker: Any + Debug {}

/// Braces were omitted in the source for this block (a single-statement
/// `if`/`else`/loop body). The printer honors it by skipping the braces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OmitBraces;

impl Marker for OmitBraces {}

// Named style sets attach to the root compilation unit as markers; the style
// resolver collects them in order.
impl Marker for NamedStyles {}

/// The type-keyed marker set carried by every node.
#[derive(Debug, Clone, Default)]
pub struct Markers {
    markers: Vec<Rc<dyn Marker>>,
}

impl Markers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a marker, returning the extended set.
    pub fn with<M: Marker>(&self, marker: M) -> Self {
        let mut markers = self.markers.clone();
        markers.push(Rc::new(marker));
        Self { markers }
    }

    /// The first marker of type `M`, if present.
    pub fn find<M: Marker>(&self) -> Option<&M> {
        self.find_all::<M>().next()
    }

    /// Every marker of type `M`, in insertion order.
    pub fn find_all<M: Marker>(&self) -> impl Iterator<Item = &M> {
        self.markers
            .iter()
            .filter_map(|m| (m.as_ref() as &dyn Any).downcast_ref::<M>())
    }

    pub fn contains<M: Marker>(&self) -> bool {
        self.find::<M>().is_some()
    }

    /// Remove every marker of type `M`, returning the reduced set.
    pub fn without<M: Marker>(&self) -> Self {
        let markers = self
            .markers
            .iter()
            .filter(|m| (m.as_ref() as &dyn Any).downcast_ref::<M>().is_none())
            .cloned()
            .collect();
        Self { markers }
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rc<dyn Marker>> {
        self.markers.iter()
    }
}
