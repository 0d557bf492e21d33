// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use crate::{Cause, Error, Origin};

/// A single debug key-value pair attached to an error.
///
/// Keys are not required to be unique. The value can be anything that implements
/// [`Debug`](fmt::Debug) and is rendered with it.
#[derive(Clone)]
pub struct KeyValue {
    key: Cow<'static, str>,
    value: Arc<dyn fmt::Debug + Send + Sync>,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new<V>(key: impl Into<Cow<'static, str>>, value: V) -> Self
    where
        V: fmt::Debug + Send + Sync + 'static,
    {
        Self {
            key: key.into(),
            value: Arc::new(value),
        }
    }

    /// The key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The value, as a debug-printable trait object.
    #[must_use]
    pub fn value(&self) -> &(dyn fmt::Debug + Send + Sync) {
        self.value.as_ref()
    }
}

impl fmt::Debug for KeyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} = {:?}", self.key, self.value)
    }
}

/// An immutable bundle of debug values that can be attached to many errors.
///
/// Build a context once at the top of a function and use it to construct or wrap
/// every error the function returns; each of those errors then carries the same
/// values in its [`Trace`](crate::Trace) frame.
///
/// Cloning a `Context` is cheap and shares the underlying values.
///
/// # Examples
///
/// ```rust
/// use causeway::{Context, KeyValue};
///
/// let ctx = Context::new([KeyValue::new("id", 5)]);
/// let err = ctx.error("record is corrupt");
///
/// let trace = err.trace();
/// let frame = &trace.frames()[0];
/// assert_eq!(frame.context().values()[0].key(), "id");
/// ```
#[derive(Clone, Default)]
pub struct Context {
    values: Arc<[KeyValue]>,
}

impl Context {
    /// Creates a context holding exactly `values`, in the given order.
    pub fn new(values: impl IntoIterator<Item = KeyValue>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Creates a fresh context from `values`.
    ///
    /// The values of `self` are **not** carried over. To extend a context, chain
    /// `self.values()` with the new values and pass the result to [`Context::new`].
    #[must_use]
    #[expect(clippy::unused_self, reason = "a derived context replaces the receiver's values")]
    pub fn derive(&self, values: impl IntoIterator<Item = KeyValue>) -> Self {
        Self::new(values)
    }

    /// The values in insertion order.
    #[must_use]
    pub fn values(&self) -> &[KeyValue] {
        &self.values
    }

    /// Returns `true` if the context holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of values in the context.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Creates an error with no cause that carries this context.
    #[must_use]
    #[track_caller]
    pub fn error(&self, message: impl Into<Cow<'static, str>>) -> Error {
        Error::from_parts(message.into(), Origin::capture(), self.clone(), None)
    }

    /// Creates an error with a formatted message that carries this context.
    ///
    /// Usually called as `ctx.errorf(format_args!(...))`.
    #[must_use]
    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) -> Error {
        Error::from_parts(crate::error::format_message(args), Origin::capture(), self.clone(), None)
    }

    /// Wraps `cause` in a new error carrying this context.
    ///
    /// Returns `None` when `cause` is `None`, so the result of a fallible call can be
    /// wrapped without checking it first.
    #[track_caller]
    pub fn wrap<E>(&self, cause: Option<E>, message: impl Into<Cow<'static, str>>) -> Option<Error>
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        let origin = Origin::capture();
        cause.map(|cause| Error::from_parts(message.into(), origin, self.clone(), Some(Cause::from_boxed(cause.into()))))
    }

    /// Like [`Context::wrap`], with a formatted message.
    #[track_caller]
    pub fn wrapf<E>(&self, cause: Option<E>, args: fmt::Arguments<'_>) -> Option<Error>
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        let origin = Origin::capture();
        cause.map(|cause| {
            Error::from_parts(
                crate::error::format_message(args),
                origin,
                self.clone(),
                Some(Cause::from_boxed(cause.into())),
            )
        })
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.values.iter().map(|kv| (&kv.key, &kv.value))).finish()
    }
}

impl FromIterator<KeyValue> for Context {
    fn from_iter<I: IntoIterator<Item = KeyValue>>(iter: I) -> Self {
        Self::new(iter)
    }
}
