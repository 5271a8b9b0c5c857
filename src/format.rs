//! Tree rendering for [`Errors`].
//!
//! [`ErrorsFormatter`] is a plain configuration struct of line prefixes. Two
//! presets are provided:
//! - [`ErrorsFormatter::UNICODE`] - box-drawing characters, the default
//! - [`ErrorsFormatter::ASCII`] - for log files and basic terminals
//!
//! ```
//! use errata::{Errors, format::ErrorsFormatter, params};
//!
//! let errors = Errors::new();
//! errors.add("invalid");
//! errors.at("title").add_with("too_short", params! { "min" => 3 });
//!
//! assert_eq!(
//!     errors.display_with(ErrorsFormatter::ASCII).to_string(),
//!     "o  errors (2)\n|- invalid\n`-- title\n    `- too_short {min: 3}\n"
//! );
//! ```

use alloc::string::String;
use core::fmt::{self, Write};

use crate::{ErrorTree, Errors};

/// Line prefixes used to render an error trie.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ErrorsFormatter {
    /// Prefix of the header line naming the rendered view.
    pub header: &'static str,
    /// Label used in the header for a view at the empty path.
    pub root_label: &'static str,
    /// Prefix of an entry that is followed by more items.
    pub entry_middle: &'static str,
    /// Prefix of the last item when it is an entry.
    pub entry_last: &'static str,
    /// Prefix of a child key that is followed by more items.
    pub child_middle: &'static str,
    /// Prefix of the last item when it is a child key.
    pub child_last: &'static str,
    /// Indentation under a child that is followed by more items.
    pub indent_middle: &'static str,
    /// Indentation under the last child.
    pub indent_last: &'static str,
}

impl ErrorsFormatter {
    /// Unicode box-drawing characters.
    pub const UNICODE: Self = Self {
        header: "● ",
        root_label: "errors",
        entry_middle: "├ ",
        entry_last: "╰ ",
        child_middle: "├─ ",
        child_last: "╰─ ",
        indent_middle: "│  ",
        indent_last: "   ",
    };

    /// ASCII-only characters.
    pub const ASCII: Self = Self {
        header: "o  ",
        root_label: "errors",
        entry_middle: "|- ",
        entry_last: "`- ",
        child_middle: "|-- ",
        child_last: "`-- ",
        indent_middle: "|   ",
        indent_last: "    ",
    };

    /// The formatter used by the [`Display`](fmt::Display) implementation of
    /// [`Errors`], an alias for [`UNICODE`](Self::UNICODE).
    pub const DEFAULT: Self = Self::UNICODE;

    fn render_node(
        &self,
        tree: &ErrorTree,
        prefix: &mut String,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let total = tree.entries.len() + tree.children.len();
        for (i, entry) in tree.entries.iter().enumerate() {
            let marker = if i + 1 == total {
                self.entry_last
            } else {
                self.entry_middle
            };
            writeln!(f, "{prefix}{marker}{entry}")?;
        }
        for (i, (key, child)) in tree.children.iter().enumerate() {
            let is_last = tree.entries.len() + i + 1 == total;
            let (marker, indent) = if is_last {
                (self.child_last, self.indent_last)
            } else {
                (self.child_middle, self.indent_middle)
            };
            writeln!(f, "{prefix}{marker}{key}")?;
            let depth = prefix.len();
            prefix.push_str(indent);
            self.render_node(child, prefix, f)?;
            prefix.truncate(depth);
        }
        Ok(())
    }
}

impl Default for ErrorsFormatter {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Renders an [`Errors`] view with a chosen [`ErrorsFormatter`].
///
/// Created by [`Errors::display_with`].
#[derive(Copy, Clone)]
#[must_use]
pub struct ErrorsDisplay<'a> {
    errors: &'a Errors,
    formatter: ErrorsFormatter,
}

impl<'a> ErrorsDisplay<'a> {
    pub(crate) fn new(errors: &'a Errors, formatter: ErrorsFormatter) -> Self {
        Self { errors, formatter }
    }
}

impl fmt::Display for ErrorsDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tree = self.errors.to_tree();
        f.write_str(self.formatter.header)?;
        let path = self.errors.path();
        if path.is_empty() {
            f.write_str(self.formatter.root_label)?;
        } else {
            for (i, key) in path.iter().enumerate() {
                if i > 0 {
                    f.write_char('.')?;
                }
                write!(f, "{key}")?;
            }
        }
        writeln!(f, " ({})", self.errors.len())?;
        self.formatter.render_node(&tree, &mut String::new(), f)
    }
}
