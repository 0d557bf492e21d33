// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Formatting and context-literal macros.

/// Construct an [`Error`](crate::Error) with a formatted message.
///
/// Accepts the same arguments as [`format!`]. The origin is the macro call site
/// and also records the enclosing function.
///
/// # Examples
///
/// ```rust
/// use causeway::errorf;
///
/// let id = 42;
/// let err = errorf!("user {id} not found");
/// assert_eq!(err.to_string(), "user 42 not found");
/// ```
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => {
        $crate::Error::errorf_at(
            $crate::Origin::capture().with_function($crate::__function_name!()),
            ::std::format_args!($($arg)+),
        )
    };
}

/// Wrap an error in a new [`Error`](crate::Error) with a formatted message.
///
/// The first argument is the cause; the rest are the same as for [`format!`]. The
/// origin records the enclosing function, like [`errorf!`].
///
/// # Examples
///
/// ```rust
/// use causeway::wrapf;
///
/// let eof = std::io::Error::other("EOF");
/// let err = wrapf!(eof, "reading block {}", 7);
/// assert_eq!(err.to_string(), "reading block 7: EOF");
/// ```
#[macro_export]
macro_rules! wrapf {
    ($cause:expr, $($arg:tt)+) => {
        $crate::Error::wrapf_at(
            $crate::Origin::capture().with_function($crate::__function_name!()),
            $cause,
            ::std::format_args!($($arg)+),
        )
    };
}

/// Path of the function the macro is expanded in, without closure segments.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn here() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(here);
        let mut name = name.strip_suffix("::here").unwrap_or(name);
        while let ::std::option::Option::Some(outer) = name.strip_suffix("::{{closure}}") {
            name = outer;
        }
        name
    }};
}

/// Build a [`Context`](crate::Context) from `key => value` pairs.
///
/// # Examples
///
/// ```rust
/// use causeway::context;
///
/// let ctx = context! { "id" => 5, "tag" => "x" };
/// assert_eq!(ctx.len(), 2);
/// assert_eq!(ctx.values()[1].key(), "tag");
/// ```
#[macro_export]
macro_rules! context {
    () => {
        $crate::Context::default()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::Context::new([$($crate::KeyValue::new($key, $value)),+])
    };
}
