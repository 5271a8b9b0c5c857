//! Commonly used items for convenient importing.
//!
//! ```rust
//! use errata::prelude::*;
//!
//! let errors = Errors::new();
//! errors.dig(path!["user", "email"]).add("taken");
//! assert!(errors.contains(Query::kind("taken")));
//! ```

pub use crate::{ErrorRecord, ErrorTree, Errors, Key, Params, Query, Symbol, Value, params, path};
