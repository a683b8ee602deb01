//! Traversal position tracking and message passing.
//!
//! A [`Cursor`] is a stack of frames from an implicit root down to the node a
//! visitor is currently working on. Each frame carries the node handle plus a
//! message map; messages put on a frame are visible to any cursor holding that
//! frame, including forks made for sub-traversals, which is how passes
//! communicate across visitor boundaries.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::nodes::Tree;

/// Message key the dispatch layer uses to record that traversal is done.
pub(crate) const STOP_MESSAGE: &str = "stop";

type Messages = Rc<RefCell<HashMap<String, Rc<dyn Any>>>>;

#[derive(Debug, Clone)]
struct Frame {
    /// `None` only for the root frame, which exists before any node is
    /// entered and survives every pop.
    node: Option<Tree>,
    messages: Messages,
}

impl Frame {
    fn new(node: Option<Tree>) -> Self {
        Self {
            node,
            messages: Rc::new(RefCell::new(HashMap::new())),
        }
    }
}

/// The path from the root to the current node, with per-frame message maps.
///
/// Cloning a cursor (or calling [`fork`](Cursor::fork)) copies the frame
/// stack but shares the message maps, so messages posted through one copy are
/// seen by the other.
#[derive(Debug, Clone)]
pub struct Cursor {
    frames: Vec<Frame>,
}

impl Cursor {
    /// A cursor positioned above the root node, holding only the implicit
    /// root frame.
    pub fn root() -> Self {
        Self {
            frames: vec![Frame::new(None)],
        }
    }

    /// Enter a node: push a frame for it.
    pub fn push(&mut self, tree: Tree) {
        self.frames.push(Frame::new(Some(tree)));
    }

    /// Leave the current node. The root frame is never popped.
    pub fn pop(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    /// The node the cursor is currently on, if any node has been entered.
    pub fn current(&self) -> Option<&Tree> {
        self.frames.last().and_then(|frame| frame.node.as_ref())
    }

    /// The node of the enclosing frame.
    pub fn parent(&self) -> Option<&Tree> {
        self.frames
            .iter()
            .rev()
            .skip(1)
            .find_map(|frame| frame.node.as_ref())
    }

    /// Nodes on the path from the current frame up to the root, nearest
    /// first. The current node is included.
    pub fn ancestors(&self) -> impl Iterator<Item = &Tree> {
        self.frames.iter().rev().filter_map(|frame| frame.node.as_ref())
    }

    /// The nearest enclosing node (current included) the extractor accepts.
    pub fn nearest_ancestor<T>(&self, extract: impl Fn(&Tree) -> Option<T>) -> Option<T> {
        self.ancestors().find_map(|tree| extract(tree))
    }

    /// Like [`nearest_ancestor`](Cursor::nearest_ancestor), but the caller
    /// asserts the ancestor exists.
    ///
    /// # Panics
    ///
    /// Panics when no ancestor matches; a pass asking for an ancestor its own
    /// traversal guarantees is reporting a traversal bug, not a data error.
    pub fn required_ancestor<T>(&self, extract: impl Fn(&Tree) -> Option<T>) -> T {
        match self.nearest_ancestor(extract) {
            Some(found) => found,
            None => panic!("required ancestor missing from cursor path"),
        }
    }

    /// Post a message on the current frame.
    pub fn put_message<T: Any>(&self, key: impl Into<String>, value: T) {
        if let Some(frame) = self.frames.last() {
            frame
                .messages
                .borrow_mut()
                .insert(key.into(), Rc::new(value));
        }
    }

    /// Post a message on the root frame, where it outlives every pop.
    pub fn put_root_message<T: Any>(&self, key: impl Into<String>, value: T) {
        frame_put(&self.frames[0], key.into(), value);
    }

    /// The nearest message under `key` with type `T`, searching from the
    /// current frame toward the root.
    pub fn nearest_message<T: Any>(&self, key: &str) -> Option<Rc<T>> {
        self.frames.iter().rev().find_map(|frame| {
            frame
                .messages
                .borrow()
                .get(key)
                .cloned()
                .and_then(|value| value.downcast::<T>().ok())
        })
    }

    /// A copy for a sub-traversal. Frames are shared by message map, so
    /// messages posted in the fork are visible here and vice versa.
    pub fn fork(&self) -> Cursor {
        self.clone()
    }

    /// Whether the dispatch layer has recorded that traversal is done.
    pub fn is_stopped(&self) -> bool {
        self.nearest_message::<bool>(STOP_MESSAGE)
            .is_some_and(|stopped| *stopped)
    }

    pub(crate) fn stop(&self) {
        self.put_root_message(STOP_MESSAGE, true);
    }

    pub fn depth(&self) -> usize {
        self.frames.len() - 1
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::root()
    }
}

fn frame_put<T: Any>(frame: &Frame, key: String, value: T) {
    frame.messages.borrow_mut().insert(key, Rc::new(value));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::statement::{Return, Statement};
    use crate::nodes::whitespace::Space;

    fn sample_statement() -> Tree {
        Tree::Statement(Statement::Return(Return::new(Space::empty(), None)))
    }

    #[test]
    fn test_push_pop_tracks_path() {
        let mut cursor = Cursor::root();
        assert!(cursor.current().is_none());
        assert_eq!(cursor.depth(), 0);

        cursor.push(sample_statement());
        assert!(cursor.current().is_some());
        assert_eq!(cursor.depth(), 1);

        cursor.pop();
        assert!(cursor.current().is_none());
        // The root frame survives extra pops.
        cursor.pop();
        assert_eq!(cursor.depth(), 0);
    }

    #[test]
    fn test_messages_search_toward_root() {
        let mut cursor = Cursor::root();
        cursor.push(sample_statement());
        cursor.put_message("count", 1u32);
        cursor.push(sample_statement());

        // Visible from a deeper frame.
        assert_eq!(cursor.nearest_message::<u32>("count").as_deref(), Some(&1));
        // Shadowed by a nearer frame.
        cursor.put_message("count", 2u32);
        assert_eq!(cursor.nearest_message::<u32>("count").as_deref(), Some(&2));
        // Wrong type misses.
        assert!(cursor.nearest_message::<String>("count").is_none());
    }

    #[test]
    fn test_root_messages_survive_pops() {
        let mut cursor = Cursor::root();
        cursor.push(sample_statement());
        cursor.put_root_message("seen", true);
        cursor.pop();
        assert_eq!(cursor.nearest_message::<bool>("seen").as_deref(), Some(&true));
    }

    #[test]
    fn test_fork_shares_messages() {
        let mut cursor = Cursor::root();
        cursor.push(sample_statement());
        let fork = cursor.fork();
        fork.put_message("from-fork", 9i64);
        assert_eq!(
            cursor.nearest_message::<i64>("from-fork").as_deref(),
            Some(&9)
        );
    }

    #[test]
    fn test_stop_flag() {
        let mut cursor = Cursor::root();
        cursor.push(sample_statement());
        assert!(!cursor.is_stopped());
        cursor.stop();
        cursor.pop();
        assert!(cursor.is_stopped());
    }

    #[test]
    fn test_required_ancestor_panics_when_missing() {
        let cursor = Cursor::root();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            cursor.required_ancestor(|tree| tree.as_statement().cloned())
        }));
        assert!(result.is_err());
    }
}
