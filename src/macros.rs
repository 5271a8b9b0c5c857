/// Builds a [`Params`](crate::Params) map.
///
/// Keys are converted with [`Symbol::from`](crate::Symbol) and values with
/// [`Value::from`](crate::Value).
///
/// # Examples
///
/// ```
/// use errata::{Errors, params};
///
/// let errors = Errors::new();
/// errors
///     .at("title")
///     .add_with("too_short", params! { "min" => 3, "actual" => 1 });
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::Params::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut params = $crate::Params::new();
        $(
            params.insert($crate::Symbol::from($key), $crate::Value::from($value));
        )+
        params
    }};
}

/// Builds an array of [`Key`](crate::Key)s from heterogeneous key
/// expressions, for use with [`Errors::dig`](crate::Errors::dig).
///
/// # Examples
///
/// ```
/// use errata::{Errors, path};
///
/// let errors = Errors::new();
/// errors.dig(path!["articles", 0, "title"]).add("too_short");
///
/// assert_eq!(errors.to_vec()[0].path, path!["articles", 0, "title"]);
/// ```
#[macro_export]
macro_rules! path {
    () => {{
        let keys: [$crate::Key; 0] = [];
        keys
    }};
    ($($key:expr),+ $(,)?) => {
        [$($crate::Key::from($key)),*]
    };
}

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($arg:tt)*) => {
        ::tracing::trace!(target: "errata", $($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($arg:tt)*) => {};
}
