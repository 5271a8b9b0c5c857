//! The internal trie node shared between [`Errors`](crate::Errors) views.
//!
//! Views that were produced by navigation hold a [`SharedNode`] pointing into
//! the same graph as their parent, so writes through one are visible through
//! the other. Every operation that must *not* alias goes through
//! [`ErrorNode::deep_copy`] or [`into_node`], which produce a graph made of
//! fresh allocations only.

mod lock;

use alloc::vec::Vec;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use triomphe::Arc;

pub(crate) use self::lock::NodeLock;
use crate::{ErrorEntry, Key};

/// A reference-counted, lockable trie node.
pub(crate) type SharedNode = Arc<NodeLock<ErrorNode>>;

/// Child nodes, in the order their keys were first created.
pub(crate) type Children = IndexMap<Key, SharedNode, FxBuildHasher>;

#[derive(Default)]
pub(crate) struct ErrorNode {
    pub(crate) entries: Vec<ErrorEntry>,
    pub(crate) children: Children,
}

impl ErrorNode {
    pub(crate) fn into_shared(self) -> SharedNode {
        Arc::new(NodeLock::new(self))
    }

    /// Returns the child under `key`, creating an empty one if it is absent.
    pub(crate) fn child_or_insert(&mut self, key: Key) -> SharedNode {
        self.children
            .entry(key)
            .or_insert_with(|| ErrorNode::default().into_shared())
            .clone()
    }

    /// Copies this node and all of its descendants into fresh allocations.
    pub(crate) fn deep_copy(&self) -> ErrorNode {
        ErrorNode {
            entries: self.entries.clone(),
            children: self
                .children
                .iter()
                .map(|(key, child)| (key.clone(), child.read().deep_copy().into_shared()))
                .collect(),
        }
    }

    /// Unions `other` into this node: its entries are appended after ours and
    /// its children are unioned into ours key by key.
    ///
    /// `other` must not share any node with `self`.
    pub(crate) fn union_with(&mut self, other: ErrorNode) {
        self.entries.extend(other.entries);
        for (key, theirs) in other.children {
            match self.children.get(&key) {
                Some(ours) => ours.write().union_with(into_node(theirs)),
                None => {
                    self.children.insert(key, theirs);
                }
            }
        }
    }

    /// Number of entries in this node and all of its descendants.
    pub(crate) fn count(&self) -> usize {
        self.entries.len()
            + self
                .children
                .values()
                .map(|child| child.read().count())
                .sum::<usize>()
    }
}

/// Takes the node out of `shared` if this is the only handle to it, and
/// deep-copies it otherwise.
pub(crate) fn into_node(shared: SharedNode) -> ErrorNode {
    match Arc::try_unwrap(shared) {
        Ok(lock) => lock.into_inner(),
        Err(shared) => shared.read().deep_copy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node_with(kinds: &[&'static str]) -> ErrorNode {
        ErrorNode {
            entries: kinds.iter().map(|kind| ErrorEntry::new(*kind)).collect(),
            children: Children::default(),
        }
    }

    #[test]
    fn test_child_or_insert_is_lazy_and_stable() {
        let mut root = ErrorNode::default();
        let first = root.child_or_insert(Key::from("a"));
        let second = root.child_or_insert(Key::from("a"));
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(root.children.len(), 1);
    }

    #[test]
    fn test_deep_copy_does_not_alias() {
        let mut root = ErrorNode::default();
        root.child_or_insert(Key::from("a"))
            .write()
            .entries
            .push(ErrorEntry::new("x"));

        let copy = root.deep_copy();
        assert!(!Arc::ptr_eq(&root.children[0], &copy.children[0]));

        root.children[0].write().entries.push(ErrorEntry::new("y"));
        assert_eq!(root.count(), 2);
        assert_eq!(copy.count(), 1);
    }

    #[test]
    fn test_union_appends_and_merges_children() {
        let mut ours = node_with(&["a"]);
        ours.children
            .insert(Key::from("shared"), node_with(&["s1"]).into_shared());
        ours.children
            .insert(Key::from("mine"), node_with(&["m"]).into_shared());

        let mut theirs = node_with(&["b"]);
        theirs
            .children
            .insert(Key::from("theirs"), node_with(&["t"]).into_shared());
        theirs
            .children
            .insert(Key::from("shared"), node_with(&["s2"]).into_shared());

        ours.union_with(theirs);

        let kinds: Vec<_> = ours.entries.iter().map(|e| e.kind.as_str()).collect();
        assert_eq!(kinds, ["a", "b"]);
        let keys: Vec<_> = ours.children.keys().cloned().collect();
        assert_eq!(
            keys,
            [Key::from("shared"), Key::from("mine"), Key::from("theirs")]
        );
        let shared = ours.children[&Key::from("shared")].read();
        let shared_kinds: Vec<_> = shared.entries.iter().map(|e| e.kind.as_str()).collect();
        assert_eq!(shared_kinds, ["s1", "s2"]);
        drop(shared);
        assert_eq!(ours.count(), 6);
    }

    #[test]
    fn test_into_node_copies_when_aliased() {
        let shared = node_with(&["x"]).into_shared();
        let alias = shared.clone();
        let node = into_node(shared);
        alias.write().entries.push(ErrorEntry::new("y"));
        assert_eq!(node.count(), 1);
        assert_eq!(alias.read().count(), 2);
    }
}
