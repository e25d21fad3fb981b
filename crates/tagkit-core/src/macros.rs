//! Convenience macros for writing builder calls.

/// Build a `Vec<Arg<_>>`, converting every element with `Arg::from`.
///
/// ```rust
/// use tagkit_core::{args, Arg};
///
/// let args: Vec<Arg<()>> = args!["total: ", 42, ["a", "b"]];
/// assert_eq!(args.len(), 3);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::Arg::from($arg)),+]
    };
}

/// Build an `Attrs` mapping from `name => value` pairs.
///
/// ```rust
/// use tagkit_core::{attrs, AttrValue};
///
/// let attrs = attrs! { "href" => "/", "hidden" => true };
/// assert_eq!(attrs.get("hidden"), Some(&AttrValue::Bool(true)));
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        $crate::Attrs::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {
        $crate::Attrs::new()$(.with($name, $value))+
    };
}
