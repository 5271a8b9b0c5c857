//! The [`Errors`] accumulator and its views.

mod iter;
mod merge;
mod query;

use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use rustc_hash::FxBuildHasher;
use triomphe::Arc;

pub use self::{iter::ErrorsIter, query::Query};
use crate::{
    ErrorEntry, ErrorRecord, ErrorTree, Key, Params, Symbol,
    format::{ErrorsDisplay, ErrorsFormatter},
    node::{ErrorNode, SharedNode, into_node},
    tree::{TrieInput, to_node},
};

/// A nested, path-addressable accumulator of structured errors.
///
/// An `Errors` value is a *view*: an absolute path from the root of an error
/// trie together with a shared handle to the node that path resolves to.
/// Navigating with [`at`](Self::at) or [`dig`](Self::dig) returns a new view
/// into the **same** trie, so errors added deep down through a child view are
/// visible from every view above it:
///
/// ```
/// use errata::{ErrorRecord, Errors, path};
///
/// let errors = Errors::new();
/// errors.at("articles").at(0).at("title").add("too_short");
///
/// assert_eq!(errors.len(), 1);
/// assert_eq!(
///     errors.to_vec(),
///     [ErrorRecord::new("too_short", path!["articles", 0, "title"])]
/// );
/// assert!(errors.contains_key("articles"));
/// assert!(errors.at("articles").contains_key(0));
/// ```
///
/// Cloning an `Errors` clones the handle, not the trie. To get an
/// independent copy use [`dup`](Self::dup); [`delete`](Self::delete) and
/// [`merge`](Self::merge) also return views over fresh, unshared tries.
///
/// Equality compares the flattened `(kind, params, path)` records as a
/// multiset: insertion order does not matter, but duplicates do.
#[derive(Clone)]
pub struct Errors {
    path: Vec<Key>,
    pub(crate) node: SharedNode,
}

impl Errors {
    /// Creates an empty accumulator rooted at the empty path.
    ///
    /// # Examples
    ///
    /// ```
    /// use errata::Errors;
    ///
    /// let errors = Errors::new();
    /// assert!(errors.is_empty());
    /// assert!(errors.path().is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(core::iter::empty::<Key>(), ErrorTree::new())
    }

    /// Creates an empty accumulator whose records are reported under `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use errata::{Errors, path};
    ///
    /// let errors = Errors::with_path(path!["user", "address"]);
    /// errors.at("zip").add("invalid");
    ///
    /// assert_eq!(errors.to_vec()[0].path, path!["user", "address", "zip"]);
    /// ```
    #[must_use]
    pub fn with_path<I>(path: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Key>,
    {
        Self::from_parts(path, ErrorTree::new())
    }

    /// Creates an accumulator at the empty path seeded with `tree`.
    #[must_use]
    pub fn from_tree(tree: ErrorTree) -> Self {
        Self::from_parts(core::iter::empty::<Key>(), tree)
    }

    /// Creates an accumulator at `path` seeded with `tree`.
    #[must_use]
    pub fn from_parts<I>(path: I, tree: ErrorTree) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Key>,
    {
        Self {
            path: path.into_iter().map(Into::into).collect(),
            node: tree.into_node().into_shared(),
        }
    }

    fn detached(node: ErrorNode) -> Self {
        Self {
            path: Vec::new(),
            node: node.into_shared(),
        }
    }

    /// The absolute path of this view.
    #[must_use]
    pub fn path(&self) -> &[Key] {
        &self.path
    }

    /// Adds an entry of the given kind, without parameters, to this node.
    ///
    /// Returns `self` so calls can be chained.
    ///
    /// # Examples
    ///
    /// ```
    /// use errata::Errors;
    ///
    /// let errors = Errors::new();
    /// errors.at("name").add("blank").add("too_short");
    /// assert_eq!(errors.len(), 2);
    /// ```
    pub fn add(&self, kind: impl Into<Symbol>) -> &Self {
        self.add_with(kind, Params::new())
    }

    /// Adds an entry with parameters to this node.
    ///
    /// Returns `self` so calls can be chained.
    pub fn add_with(&self, kind: impl Into<Symbol>, params: Params) -> &Self {
        let entry = ErrorEntry::with_params(kind, params);
        trace_event!(path = ?self.path, kind = %entry.kind, "adding error entry");
        self.node.write().entries.push(entry);
        self
    }

    /// Returns a view of the child at `key`, creating an empty child if none
    /// exists yet.
    ///
    /// The returned view shares the trie with `self`.
    #[must_use]
    pub fn at(&self, key: impl Into<Key>) -> Errors {
        let key = key.into();
        let child = self.node.write().child_or_insert(key.clone());
        let mut path = self.path.clone();
        path.push(key);
        Errors { path, node: child }
    }

    /// Returns a view at the end of `keys`, creating every missing node along
    /// the way. Equivalent to chaining [`at`](Self::at).
    ///
    /// Use the [`path!`](crate::path) macro to mix named and positional keys.
    #[must_use]
    pub fn dig<I>(&self, keys: I) -> Errors
    where
        I: IntoIterator,
        I::Item: Into<Key>,
    {
        keys.into_iter()
            .fold(self.clone(), |view, key| view.at(key))
    }

    /// Installs a deep copy of `value` as the child at `key`, replacing any
    /// existing child.
    ///
    /// The installed subtree never aliases `value`: later writes to either
    /// side are not visible through the other. Views previously obtained for
    /// the replaced child keep pointing at the old, now detached, subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use errata::Errors;
    ///
    /// let errors = Errors::new();
    /// let address = Errors::new();
    /// address.at("zip").add("invalid");
    ///
    /// errors.set("address", &address);
    /// address.add("incomplete");
    ///
    /// assert_eq!(errors.len(), 1);
    /// assert_eq!(address.len(), 2);
    /// ```
    pub fn set<'a>(&self, key: impl Into<Key>, value: impl Into<TrieInput<'a>>) {
        let key = key.into();
        let node = to_node(value.into());
        trace_event!(path = ?self.path, key = ?key, entries = node.count(), "replacing subtree");
        self.node.write().children.insert(key, node.into_shared());
    }

    /// Removes the child at `key` and returns it as a detached view rooted at
    /// the empty path.
    ///
    /// Returns an empty view if there is no child at `key`. The remaining
    /// children keep their order.
    ///
    /// # Examples
    ///
    /// ```
    /// use errata::Errors;
    ///
    /// let errors = Errors::new();
    /// errors.at("title").add("blank");
    /// errors.add("invalid");
    ///
    /// let title = errors.delete("title");
    /// assert!(!errors.contains_key("title"));
    /// assert_eq!(errors.len(), 1);
    /// assert_eq!(title.len(), 1);
    /// assert!(title.path().is_empty());
    /// ```
    pub fn delete(&self, key: impl Into<Key>) -> Errors {
        let key = key.into();
        let removed = self.node.write().children.shift_remove(&key);
        trace_event!(path = ?self.path, key = ?key, found = removed.is_some(), "deleting subtree");
        match removed {
            Some(child) => Self::detached(into_node(child)),
            None => Self::new(),
        }
    }

    /// Returns a deep, unshared copy of this view's subtree, rooted at the
    /// empty path.
    #[must_use]
    pub fn dup(&self) -> Errors {
        Self::detached(self.node.read().deep_copy())
    }

    /// Returns an iterator over every entry in this subtree, annotated with
    /// its absolute path.
    ///
    /// Entries of a node come before those of its children, and children are
    /// visited in the order they were created. The iterator is lazy and each
    /// call starts over from the beginning.
    pub fn iter(&self) -> ErrorsIter {
        ErrorsIter::new(self.node.clone(), self.path.clone())
    }

    /// Collects [`iter`](Self::iter) into a vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<ErrorRecord> {
        self.iter().collect()
    }

    /// The entries local to this node, without those of its descendants.
    #[must_use]
    pub fn entries(&self) -> Vec<ErrorEntry> {
        self.node.read().entries.clone()
    }

    /// The total number of entries in this subtree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.node.read().count()
    }

    /// Alias for [`len`](Self::len).
    #[must_use]
    pub fn count(&self) -> usize {
        self.len()
    }

    /// Returns `true` if this subtree contains no entries.
    ///
    /// Nodes that were created by navigation but never written to do not
    /// count as entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The keys of the immediate children of this node, in creation order.
    #[must_use]
    pub fn keys(&self) -> Vec<Key> {
        self.node.read().children.keys().cloned().collect()
    }

    /// Returns `true` if this node has an immediate child at `key`.
    #[must_use]
    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.node.read().children.contains_key(&key.into())
    }

    /// Returns `true` if any record in this subtree matches `query`.
    ///
    /// A bare kind matches any record of that kind. See [`Query`] for
    /// matching on parameters and paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use errata::{Errors, Query, params, path};
    ///
    /// let errors = Errors::new();
    /// errors.at("title").add_with("too_short", params! { "min" => 3 });
    ///
    /// assert!(errors.contains("too_short"));
    /// assert!(errors.contains(Query::kind("too_short").path(path!["title"])));
    /// assert!(!errors.contains(Query::kind("too_short").params(params! {})));
    /// ```
    #[must_use]
    pub fn contains(&self, query: impl Into<Query>) -> bool {
        let query = query.into();
        self.iter().any(|record| query.matches(&record))
    }

    /// Returns a snapshot of this subtree as a plain [`ErrorTree`].
    #[must_use]
    pub fn to_tree(&self) -> ErrorTree {
        ErrorTree::from_node(&self.node.read())
    }

    /// Returns `Ok(())` if no errors were recorded, and `Err(self)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use errata::Errors;
    ///
    /// fn validate(name: &str) -> Result<(), Errors> {
    ///     let errors = Errors::new();
    ///     if name.is_empty() {
    ///         errors.at("name").add("blank");
    ///     }
    ///     errors.into_result()
    /// }
    ///
    /// assert!(validate("ada").is_ok());
    /// assert_eq!(validate("").unwrap_err().len(), 1);
    /// ```
    pub fn into_result(self) -> Result<(), Errors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Returns a value that renders this subtree with the given formatter.
    #[must_use]
    pub fn display_with(&self, formatter: ErrorsFormatter) -> ErrorsDisplay<'_> {
        ErrorsDisplay::new(self, formatter)
    }

    /// Returns `true` if both views point at the very same node.
    #[must_use]
    pub fn ptr_eq(&self, other: &Errors) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }
}

impl Default for Errors {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Errors {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) && self.path == other.path {
            return true;
        }
        let ours = self.to_vec();
        let theirs = other.to_vec();
        if ours.len() != theirs.len() {
            return false;
        }

        let mut balance: HashMap<&ErrorRecord, isize, FxBuildHasher> = HashMap::default();
        for record in &ours {
            *balance.entry(record).or_default() += 1;
        }
        for record in &theirs {
            match balance.get_mut(record) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return false,
            }
        }
        true
    }
}

impl Eq for Errors {}

impl<'a> IntoIterator for &'a Errors {
    type Item = ErrorRecord;
    type IntoIter = ErrorsIter;

    fn into_iter(self) -> ErrorsIter {
        self.iter()
    }
}

impl Extend<ErrorRecord> for Errors {
    /// Adds each record below this view, treating the record's path as
    /// relative to the view.
    fn extend<T: IntoIterator<Item = ErrorRecord>>(&mut self, iter: T) {
        for record in iter {
            let (entry, path) = record.into_parts();
            self.dig(path).add_with(entry.kind, entry.params);
        }
    }
}

impl FromIterator<ErrorRecord> for Errors {
    fn from_iter<T: IntoIterator<Item = ErrorRecord>>(iter: T) -> Self {
        let mut errors = Errors::new();
        errors.extend(iter);
        errors
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_with(ErrorsFormatter::DEFAULT), f)
    }
}

impl fmt::Debug for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Errors")
            .field("path", &self.path)
            .field("records", &self.to_vec())
            .finish()
    }
}

impl core::error::Error for Errors {}
