#![cfg_attr(not(doc), no_std)]
#![deny(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
// Make docs.rs generate better docs
#![cfg_attr(docsrs, feature(doc_cfg))]

//! A nested, path-addressable accumulator for structured errors.
//!
//! ## Overview
//!
//! Validation code rarely fails in just one place. A form has many fields, a
//! record has associations, and an association is a collection of records
//! with fields of their own. This crate provides [`Errors`], a trie of error
//! entries addressed by paths such as `articles.0.title`, that any layer can
//! write into without threading `&mut` references through every call.
//!
//! ## Quick Example
//!
//! ```
//! use errata::prelude::*;
//!
//! fn validate_title(errors: &Errors, title: &str) {
//!     if title.len() < 3 {
//!         errors.add_with("too_short", params! { "min" => 3 });
//!     }
//! }
//!
//! let errors = Errors::new();
//! validate_title(&errors.at("articles").at(0).at("title"), "ab");
//!
//! assert_eq!(errors.len(), 1);
//! assert!(errors.contains(Query::kind("too_short").path(path!["articles", 0, "title"])));
//! ```
//!
//! ## Core Concepts
//!
//! The trie is made of nodes. Each node holds:
//! - Any number of **entries**, each an [`ErrorEntry`] with a symbolic kind
//!   and a map of [`Params`].
//! - Any number of **children**, keyed by a normalized [`Key`]: either a
//!   symbolic atom or an integer index.
//!
//! An [`Errors`] value is a **view** onto one node of such a trie, together
//! with the absolute path leading to it.
//!
//! - Views obtained by navigation ([`Errors::at`], [`Errors::dig`]) or by
//!   [`Clone`] share the trie with the view they came from. Writes through
//!   any of them are visible through all of them.
//! - Views returned by [`Errors::dup`], [`Errors::delete`] and
//!   [`Errors::merge`] own a fresh copy that shares nothing with the source.
//! - [`Errors::set`] and [`Errors::update`] copy their argument in, so the
//!   argument stays independent of the trie it was copied into.
//!
//! Enumeration ([`Errors::iter`]) flattens a subtree into [`ErrorRecord`]s,
//! each carrying its absolute path. Equality, counting and
//! [`Errors::contains`] are all defined on these records.
//!
//! ## Features
//!
//! - `std` (default): back node locks with [`std::sync::RwLock`]. Without it
//!   the crate is `no_std` and uses [`spin`] locks.
//! - `tracing`: emit `trace`-level events with target `errata` for
//!   structural mutations (`add`, `set`, `delete`, `merge`, `update`).

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

mod entry;
mod errors;
pub mod format;
mod key;
mod node;
pub mod prelude;
mod tree;
mod value;

pub use self::{
    entry::{ErrorEntry, ErrorRecord},
    errors::{Errors, ErrorsIter, Query},
    key::{Key, Symbol},
    tree::{ErrorTree, TrieInput},
    value::{Params, Value},
};
