//! Plain, unshared trie payloads.

use alloc::vec::Vec;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::{ErrorEntry, Errors, Key, Params, Symbol, node::ErrorNode};

/// An owned nested error mapping that is not shared with anything.
///
/// This is the raw form of an [`Errors`] trie: the entries of one node plus
/// its children, in insertion order. It can be used to seed a new accumulator
/// with [`Errors::from_tree`], to install a subtree with [`Errors::set`], or to
/// snapshot a view with [`Errors::to_tree`].
///
/// # Examples
///
/// ```
/// use errata::{ErrorTree, Errors, params};
///
/// let tree = ErrorTree::new()
///     .entry("invalid", params! {})
///     .child("title", ErrorTree::new().entry("blank", params! {}));
///
/// let errors = Errors::from_tree(tree);
/// assert_eq!(errors.len(), 2);
/// assert!(errors.contains_key("title"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorTree {
    /// The entries local to this node.
    pub entries: Vec<ErrorEntry>,
    /// The child trees, keyed by normalized key.
    pub children: IndexMap<Key, ErrorTree, FxBuildHasher>,
}

impl ErrorTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a local entry.
    #[must_use]
    pub fn entry(mut self, kind: impl Into<Symbol>, params: Params) -> Self {
        self.entries.push(ErrorEntry::with_params(kind, params));
        self
    }

    /// Sets the child at `key`, replacing any previous child.
    #[must_use]
    pub fn child(mut self, key: impl Into<Key>, tree: ErrorTree) -> Self {
        self.children.insert(key.into(), tree);
        self
    }

    /// Returns `true` if neither this node nor any descendant has entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.children.values().all(ErrorTree::is_empty)
    }

    pub(crate) fn into_node(self) -> ErrorNode {
        ErrorNode {
            entries: self.entries,
            children: self
                .children
                .into_iter()
                .map(|(key, child)| (key, child.into_node().into_shared()))
                .collect(),
        }
    }

    pub(crate) fn from_node(node: &ErrorNode) -> Self {
        Self {
            entries: node.entries.clone(),
            children: node
                .children
                .iter()
                .map(|(key, child)| (key.clone(), Self::from_node(&child.read())))
                .collect(),
        }
    }
}

/// Anything that can be installed into or unioned with an [`Errors`] trie.
///
/// A view is deep-copied on the way in and a tree is moved, so the trie that
/// receives the input never shares a node with its source.
pub enum TrieInput<'a> {
    /// The subtree under an existing view.
    View(&'a Errors),
    /// A raw nested mapping.
    Tree(ErrorTree),
}

impl<'a> From<&'a Errors> for TrieInput<'a> {
    fn from(errors: &'a Errors) -> Self {
        TrieInput::View(errors)
    }
}

impl From<Errors> for TrieInput<'_> {
    fn from(errors: Errors) -> Self {
        TrieInput::Tree(errors.to_tree())
    }
}

impl From<ErrorTree> for TrieInput<'_> {
    fn from(tree: ErrorTree) -> Self {
        TrieInput::Tree(tree)
    }
}

/// Converts any trie input into a freshly allocated node graph.
pub(crate) fn to_node(input: TrieInput<'_>) -> ErrorNode {
    match input {
        TrieInput::View(errors) => errors.node.read().deep_copy(),
        TrieInput::Tree(tree) => tree.into_node(),
    }
}
