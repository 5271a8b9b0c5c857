//! Symbolic atoms and the normalized keys used to address nodes.
//!
//! Every navigation entry point of [`Errors`](crate::Errors) accepts
//! `impl Into<Key>`, so the [`From`] conversions in this module are the single
//! place where keys get normalized. A string and a [`Symbol`] spelled the same
//! way always produce the same [`Key`].

use alloc::{
    borrow::Cow,
    string::{String, ToString},
};
use core::{fmt, ops::Deref};

/// A symbolic atom, such as an error kind or a field name.
///
/// Two symbols are equal when their text is equal, regardless of whether one
/// of them was built from a `&'static str` and the other from an owned
/// [`String`].
///
/// # Examples
///
/// ```
/// use errata::Symbol;
///
/// const TOO_SHORT: Symbol = Symbol::new_static("too_short");
///
/// assert_eq!(TOO_SHORT, Symbol::from(String::from("too_short")));
/// assert_eq!(TOO_SHORT.as_str(), "too_short");
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(Cow<'static, str>);

impl Symbol {
    /// Creates a symbol from a static string without allocating.
    ///
    /// The [`From`] conversions always copy the text; use this for kinds and
    /// keys that are known at compile time.
    #[must_use]
    pub const fn new_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Creates a symbol from a borrowed string of any lifetime.
    ///
    /// The text is copied into an owned allocation.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(Cow::Owned(name.to_string()))
    }

    /// Returns the text of the symbol.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Symbol {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Symbol {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl From<&String> for Symbol {
    fn from(name: &String) -> Self {
        Self::new(name)
    }
}

impl From<&Symbol> for Symbol {
    fn from(symbol: &Symbol) -> Self {
        symbol.clone()
    }
}

impl PartialEq<str> for Symbol {
    fn eq(&self, other: &str) -> bool {
        *self.0 == *other
    }
}

impl PartialEq<&str> for Symbol {
    fn eq(&self, other: &&str) -> bool {
        *self.0 == **other
    }
}

/// A normalized address component.
///
/// Keys are either symbolic atoms (field and association names) or integer
/// indices (the position of an item inside a collection). Strings are coerced
/// to [`Key::Atom`] on the way in; no other key type exists, so passing an
/// unsupported key is rejected by the compiler.
///
/// # Examples
///
/// ```
/// use errata::{Key, Symbol};
///
/// assert_eq!(Key::from("title"), Key::from(Symbol::from("title")));
/// assert_eq!(Key::from(String::from("title")), Key::from("title"));
/// assert_eq!(Key::from(0usize), Key::Index(0));
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    /// A named key such as `articles` or `title`.
    Atom(Symbol),
    /// A positional key such as the index of an item in a collection.
    Index(i64),
}

impl Key {
    /// Returns the symbol if this is an [`Key::Atom`].
    #[must_use]
    pub fn as_atom(&self) -> Option<&Symbol> {
        match self {
            Key::Atom(symbol) => Some(symbol),
            Key::Index(_) => None,
        }
    }

    /// Returns the index if this is an [`Key::Index`].
    #[must_use]
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Key::Atom(_) => None,
            Key::Index(index) => Some(*index),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Atom(symbol) => fmt::Display::fmt(symbol, f),
            Key::Index(index) => fmt::Display::fmt(index, f),
        }
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Atom(symbol) => fmt::Debug::fmt(symbol, f),
            Key::Index(index) => fmt::Debug::fmt(index, f),
        }
    }
}

impl From<Symbol> for Key {
    fn from(symbol: Symbol) -> Self {
        Key::Atom(symbol)
    }
}

impl From<&Symbol> for Key {
    fn from(symbol: &Symbol) -> Self {
        Key::Atom(symbol.clone())
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Atom(Symbol::new(name))
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Atom(Symbol::from(name))
    }
}

impl From<&String> for Key {
    fn from(name: &String) -> Self {
        Key::Atom(Symbol::new(name))
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

impl From<i32> for Key {
    fn from(index: i32) -> Self {
        Key::Index(i64::from(index))
    }
}

impl From<u32> for Key {
    fn from(index: u32) -> Self {
        Key::Index(i64::from(index))
    }
}

impl From<i64> for Key {
    fn from(index: i64) -> Self {
        Key::Index(index)
    }
}

impl From<usize> for Key {
    /// # Panics
    ///
    /// Panics if the index does not fit in an `i64`.
    fn from(index: usize) -> Self {
        Key::Index(i64::try_from(index).expect("index key does not fit in an i64"))
    }
}
