use super::Errors;
use crate::tree::{TrieInput, to_node};

impl Errors {
    /// Returns a new accumulator holding the union of `self` and `other`.
    ///
    /// Entries of a node are those of `self` followed by those of `other`;
    /// children present on both sides are unioned recursively. The result is
    /// reported under `self`'s path, but shares no node with either input,
    /// and neither input is modified.
    ///
    /// Both sides are treated as roots: `other`'s own path is not used to
    /// position its content.
    ///
    /// # Examples
    ///
    /// ```
    /// use errata::Errors;
    ///
    /// let a = Errors::new();
    /// a.add("x");
    /// let other = Errors::new();
    /// other.at("nested").add("y");
    ///
    /// let merged = a.merge(&other);
    /// assert_eq!(merged.len(), 2);
    /// assert_eq!(a.len(), 1);
    /// assert_eq!(other.len(), 1);
    /// ```
    #[must_use]
    pub fn merge<'a>(&self, other: impl Into<TrieInput<'a>>) -> Errors {
        let mut node = self.node.read().deep_copy();
        node.union_with(to_node(other.into()));
        trace_event!(path = ?self.path, entries = node.count(), "merged error tries");
        Errors {
            path: self.path.clone(),
            node: node.into_shared(),
        }
    }

    /// Unions `other` into `self` in place and returns `self`.
    ///
    /// The change is visible through every view that shares `self`'s trie.
    /// `other` is left untouched, and nothing taken from it is aliased, even
    /// when `other` is `self` or one of its descendants.
    ///
    /// # Examples
    ///
    /// ```
    /// use errata::Errors;
    ///
    /// let root = Errors::new();
    /// let title = root.at("title");
    /// title.add("blank");
    ///
    /// let extra = Errors::new();
    /// extra.add("too_short");
    /// title.update(&extra);
    ///
    /// assert_eq!(root.len(), 2);
    /// assert_eq!(extra.len(), 1);
    /// ```
    pub fn update<'a>(&self, other: impl Into<TrieInput<'a>>) -> &Self {
        let incoming = to_node(other.into());
        trace_event!(path = ?self.path, entries = incoming.count(), "updating error trie");
        self.node.write().union_with(incoming);
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::{ErrorRecord, ErrorTree, Errors, Query};

    #[test]
    fn test_merge_leaves_inputs_untouched() {
        let a = Errors::new();
        a.add("x");
        let other = Errors::new();
        other.at("nested").add("y");

        let merged = a.merge(&other);
        assert_eq!(merged.len(), 2);
        assert_eq!(a.len(), 1);
        assert_eq!(other.len(), 1);
        assert!(merged.contains(ErrorRecord::new("y", path!["nested"])));

        merged.at("nested").add("z");
        assert_eq!(other.len(), 1);
        assert!(!a.contains_key("nested"));
    }

    #[test]
    fn test_merge_unions_shared_keys() {
        let a = Errors::new();
        a.at("title").add("blank");
        a.at("items").at(0).add("a");
        let b = Errors::new();
        b.at("title").add("too_short");
        b.at("items").at(1).add("b");

        let merged = a.merge(&b);
        let title: alloc::vec::Vec<_> = merged
            .at("title")
            .entries()
            .into_iter()
            .map(|e| e.kind)
            .collect();
        assert_eq!(title, ["blank", "too_short"]);
        assert_eq!(merged.at("items").keys(), path![0, 1]);
        assert_eq!(merged.len(), 4);
    }

    #[test]
    fn test_merge_keeps_self_path() {
        let root = Errors::new();
        let nested = root.at("user");
        let extra = Errors::new();
        extra.add("invalid");

        let merged = nested.merge(&extra);
        assert_eq!(merged.path(), path!["user"]);
        assert!(merged.contains(Query::kind("invalid").path(path!["user"])));
        assert!(root.is_empty());
    }

    #[test]
    fn test_update_mutates_only_self() {
        let v = Errors::new();
        v.at("a").add("x");
        let other = Errors::new();
        other.at("a").add("y");
        other.at("b").add("z");

        let expected = v.merge(&other);
        let other_before = other.dup();
        v.update(&other);

        assert_eq!(v, expected);
        assert_eq!(other, other_before);

        v.at("b").add("w");
        assert_eq!(other.len(), 2);
    }

    #[test]
    fn test_update_visible_through_aliases() {
        let root = Errors::new();
        let alias = root.at("a");
        root.update(ErrorTree::new().child("a", ErrorTree::new().entry("x", params! {})));
        assert_eq!(alias.len(), 1);
    }

    #[test]
    fn test_update_with_self_does_not_deadlock() {
        let errors = Errors::new();
        errors.add("x");
        errors.at("n").add("y");

        errors.update(&errors);
        assert_eq!(errors.len(), 4);

        errors.update(&errors.at("n"));
        assert_eq!(errors.len(), 6);
    }
}
