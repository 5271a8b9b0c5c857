//! Error entries and the path-annotated records yielded by enumeration.

use alloc::vec::Vec;
use core::fmt;

use crate::{Key, Params, Symbol, value::fmt_params};

/// A single reported failure, local to one node of an [`Errors`] trie.
///
/// Entries are immutable once added.
///
/// [`Errors`]: crate::Errors
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ErrorEntry {
    /// The kind of failure, e.g. `too_short` or `taken`.
    pub kind: Symbol,
    /// Auxiliary data describing the failure.
    pub params: Params,
}

impl ErrorEntry {
    /// Creates an entry without parameters.
    #[must_use]
    pub fn new(kind: impl Into<Symbol>) -> Self {
        Self::with_params(kind, Params::new())
    }

    /// Creates an entry with the given parameters.
    #[must_use]
    pub fn with_params(kind: impl Into<Symbol>, params: Params) -> Self {
        Self {
            kind: kind.into(),
            params,
        }
    }

    pub(crate) fn at_path(&self, path: Vec<Key>) -> ErrorRecord {
        ErrorRecord {
            kind: self.kind.clone(),
            params: self.params.clone(),
            path,
        }
    }
}

impl fmt::Display for ErrorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if !self.params.is_empty() {
            f.write_str(" ")?;
            fmt_params(&self.params, f)?;
        }
        Ok(())
    }
}

/// An [`ErrorEntry`] together with the absolute path of the node that owns
/// it.
///
/// This is the item type of [`ErrorsIter`](crate::ErrorsIter), and the unit
/// that equality and membership tests are defined on.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ErrorRecord {
    /// The kind of failure.
    pub kind: Symbol,
    /// Auxiliary data describing the failure.
    pub params: Params,
    /// The absolute path from the trie root to the node owning the entry.
    pub path: Vec<Key>,
}

impl ErrorRecord {
    /// Creates a record at `path` without parameters.
    #[must_use]
    pub fn new<I>(kind: impl Into<Symbol>, path: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Key>,
    {
        Self {
            kind: kind.into(),
            params: Params::new(),
            path: path.into_iter().map(Into::into).collect(),
        }
    }

    /// Replaces the parameters of the record.
    #[must_use]
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Splits the record into its entry and path.
    #[must_use]
    pub fn into_parts(self) -> (ErrorEntry, Vec<Key>) {
        (
            ErrorEntry {
                kind: self.kind,
                params: self.params,
            },
            self.path,
        )
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{key}")?;
        }
        if !self.path.is_empty() {
            f.write_str(": ")?;
        }
        write!(f, "{}", self.kind)?;
        if !self.params.is_empty() {
            f.write_str(" ")?;
            fmt_params(&self.params, f)?;
        }
        Ok(())
    }
}
