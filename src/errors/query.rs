use alloc::vec::Vec;

use crate::{ErrorRecord, Key, Params, Symbol};

/// A partial record used by [`Errors::contains`](crate::Errors::contains).
///
/// Every field that is set must be exactly equal to the corresponding field
/// of a record for the record to match; unset fields match anything. In
/// particular, parameters are compared as a whole, so a query for
/// `{min: 3}` does not match a record with `{min: 3, max: 10}`.
///
/// # Examples
///
/// ```
/// use errata::{ErrorRecord, Query, params, path};
///
/// let record = ErrorRecord::new("too_short", path!["title"]).with_params(params! { "min" => 3 });
///
/// assert!(Query::any().matches(&record));
/// assert!(Query::kind("too_short").path(path!["title"]).matches(&record));
/// assert!(!Query::any().path(path![]).matches(&record));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct Query {
    kind: Option<Symbol>,
    params: Option<Params>,
    path: Option<Vec<Key>>,
}

impl Query {
    /// A query that matches every record.
    pub fn any() -> Self {
        Self::default()
    }

    /// A query matching records of the given kind.
    pub fn kind(kind: impl Into<Symbol>) -> Self {
        Self {
            kind: Some(kind.into()),
            ..Self::default()
        }
    }

    /// Restricts the query to records with exactly these parameters.
    pub fn params(mut self, params: Params) -> Self {
        self.params = Some(params);
        self
    }

    /// Restricts the query to records at exactly this absolute path.
    pub fn path<I>(mut self, path: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Key>,
    {
        self.path = Some(path.into_iter().map(Into::into).collect());
        self
    }

    /// Returns `true` if `record` satisfies every field set on the query.
    #[must_use]
    pub fn matches(&self, record: &ErrorRecord) -> bool {
        self.kind.as_ref().is_none_or(|kind| *kind == record.kind)
            && self
                .params
                .as_ref()
                .is_none_or(|params| *params == record.params)
            && self
                .path
                .as_ref()
                .is_none_or(|path| *path == record.path)
    }
}

impl From<Symbol> for Query {
    fn from(kind: Symbol) -> Self {
        Query::kind(kind)
    }
}

impl From<&str> for Query {
    fn from(kind: &str) -> Self {
        Query::kind(kind)
    }
}

impl From<ErrorRecord> for Query {
    fn from(record: ErrorRecord) -> Self {
        Self {
            kind: Some(record.kind),
            params: Some(record.params),
            path: Some(record.path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Errors;

    fn sample() -> Errors {
        let errors = Errors::new();
        errors
            .at("title")
            .add_with("too_short", params! { "min" => 3, "max" => 10 });
        errors.at("body").add("blank");
        errors
    }

    #[test]
    fn test_bare_kind() {
        let errors = sample();
        assert!(errors.contains("blank"));
        assert!(errors.contains(Symbol::new("too_short")));
        assert!(!errors.contains("taken"));
    }

    #[test]
    fn test_params_require_exact_equality() {
        let errors = sample();
        assert!(errors.contains(
            Query::kind("too_short").params(params! { "max" => 10, "min" => 3 })
        ));
        assert!(!errors.contains(Query::kind("too_short").params(params! { "min" => 3 })));
    }

    #[test]
    fn test_path_and_full_record() {
        let errors = sample();
        assert!(errors.contains(Query::any().path(path!["body"])));
        assert!(!errors.contains(Query::kind("blank").path(path!["title"])));
        assert!(errors.contains(ErrorRecord::new("blank", path!["body"])));
    }

    #[test]
    fn test_nested_view_matches_absolute_paths() {
        let errors = sample();
        let title = errors.at("title");
        assert!(title.contains(Query::kind("too_short").path(path!["title"])));
        assert!(!title.contains("blank"));
    }

    #[test]
    fn test_empty_never_matches() {
        assert!(!Errors::new().contains(Query::any()));
    }
}
