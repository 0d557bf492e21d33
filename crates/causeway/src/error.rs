// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use crate::{Cause, Context, Origin, Trace};

/// Immutable error data, shared between clones of an [`Error`].
struct Inner {
    message: Cow<'static, str>,
    origin: Origin,
    context: Context,
    cause: Option<Cause>,
    // Innermost error of the chain. `None` when `cause` is `None`: the error is its own root.
    root_cause: Option<Cause>,
}

impl Drop for Inner {
    // Unlinks the chain iteratively so that long chains do not recurse on drop.
    #[cfg_attr(test, mutants::skip)] // a missed mutation here overflows the stack rather than failing a test
    fn drop(&mut self) {
        let mut next = self.cause.take();
        while let Some(Cause::Chain(node)) = next {
            next = Arc::into_inner(node.data).and_then(|mut inner| inner.cause.take());
        }
    }
}

/// One link of an error chain.
///
/// Each `Error` carries a message, the [`Origin`] where it was constructed, an
/// optional [`Context`] of debug values, and optionally the [`Cause`] it wraps.
/// The innermost error of the chain is cached on every link, so
/// [`root_cause`](Error::root_cause) is O(1).
///
/// Errors are immutable. Wrapping creates a new outer link and never touches the
/// inner one. Cloning shares the data and is cheap, and the whole type is the
/// size of a single pointer.
///
/// Displaying an error yields a single line: the outermost message followed by
/// the root cause, skipping intermediate links. Use [`trace`](Error::trace) to
/// see every link.
///
/// # Examples
///
/// ```rust
/// use causeway::Error;
///
/// let eof = std::io::Error::from(std::io::ErrorKind::UnexpectedEof);
/// let err = Error::wrap(eof, "corrupt file");
/// let err = Error::wrap(err, "cannot load index");
///
/// assert_eq!(err.to_string(), "cannot load index: unexpected end of file");
/// assert!(err.root_cause().downcast_ref::<std::io::Error>().is_some());
/// assert_eq!(err.trace().len(), 3);
/// ```
#[derive(Clone)]
pub struct Error {
    data: Arc<Inner>,
}

impl Error {
    pub(crate) fn from_parts(message: Cow<'static, str>, origin: Origin, context: Context, cause: Option<Cause>) -> Self {
        let root_cause = cause.as_ref().map(Cause::root);
        Self {
            data: Arc::new(Inner {
                message,
                origin,
                context,
                cause,
                root_cause,
            }),
        }
    }

    /// Creates an error with no cause and no context.
    #[must_use]
    #[track_caller]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self::from_parts(message.into(), Origin::capture(), Context::default(), None)
    }

    /// Creates an error with a formatted message.
    ///
    /// The [`errorf!`](crate::errorf) macro is the usual way to call this.
    #[must_use]
    #[track_caller]
    pub fn errorf(args: fmt::Arguments<'_>) -> Self {
        Self::from_parts(format_message(args), Origin::capture(), Context::default(), None)
    }

    /// Wraps `cause` in a new outer error.
    ///
    /// `cause` may be another `Error`, any other error type, or a plain string.
    #[must_use]
    #[track_caller]
    pub fn wrap<E>(cause: E, message: impl Into<Cow<'static, str>>) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        Self::from_parts(
            message.into(),
            Origin::capture(),
            Context::default(),
            Some(Cause::from_boxed(cause.into())),
        )
    }

    /// Wraps `cause` in a new outer error with a formatted message.
    ///
    /// The [`wrapf!`](crate::wrapf) macro is the usual way to call this.
    #[must_use]
    #[track_caller]
    pub fn wrapf<E>(cause: E, args: fmt::Arguments<'_>) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        Self::from_parts(
            format_message(args),
            Origin::capture(),
            Context::default(),
            Some(Cause::from_boxed(cause.into())),
        )
    }

    #[doc(hidden)]
    #[must_use]
    pub fn errorf_at(origin: Origin, args: fmt::Arguments<'_>) -> Self {
        Self::from_parts(format_message(args), origin, Context::default(), None)
    }

    #[doc(hidden)]
    #[must_use]
    pub fn wrapf_at<E>(origin: Origin, cause: E, args: fmt::Arguments<'_>) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        Self::from_parts(
            format_message(args),
            origin,
            Context::default(),
            Some(Cause::from_boxed(cause.into())),
        )
    }

    /// The message of this link alone.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.data.message
    }

    /// Where this link was constructed.
    #[must_use]
    pub fn origin(&self) -> Origin {
        self.data.origin
    }

    /// The context attached when this link was constructed.
    #[must_use]
    pub fn context(&self) -> &Context {
        &self.data.context
    }

    /// The error wrapped by this link, if any.
    #[must_use]
    pub fn cause(&self) -> Option<&Cause> {
        self.data.cause.as_ref()
    }

    /// The innermost error of the chain, or `self` if this error has no cause.
    #[must_use]
    pub fn root_cause(&self) -> &(dyn StdError + Send + Sync + 'static) {
        match &self.data.root_cause {
            Some(root) => root.as_error(),
            None => self,
        }
    }

    pub(crate) fn message_cow(&self) -> &Cow<'static, str> {
        &self.data.message
    }

    pub(crate) fn root_cause_entry(&self) -> Option<&Cause> {
        self.data.root_cause.as_ref()
    }

    /// Iterates over this error and every cause it wraps, outermost first.
    pub fn chain(&self) -> impl Iterator<Item = &(dyn StdError + 'static)> {
        let first: &(dyn StdError + 'static) = self;
        std::iter::successors(Some(first), |err| (*err).source())
    }

    /// Collects the full trace of this error.
    #[must_use]
    pub fn trace(&self) -> Trace {
        Trace::builder().build(Some(self))
    }

    /// Returns `true` if both values are the same link.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data.root_cause {
            Some(root) => write!(f, "{}: {root}", self.data.message),
            None => f.write_str(&self.data.message),
        }
    }
}

impl fmt::Debug for Error {
    // Shows the whole trace, so `main` returning `Result<_, Error>` prints a useful report.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.trace(), f)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.data.cause.as_ref().map(|cause| {
            let source: &(dyn StdError + 'static) = cause.as_error();
            source
        })
    }
}

/// Avoids allocating when the format string has no arguments.
pub(crate) fn format_message(args: fmt::Arguments<'_>) -> Cow<'static, str> {
    match args.as_str() {
        Some(message) => Cow::Borrowed(message),
        None => Cow::Owned(args.to_string()),
    }
}

/// Wraps `cause` in a new error, or returns `None` if there is nothing to wrap.
///
/// This allows the outcome of a fallible call to be wrapped unconditionally.
///
/// # Examples
///
/// ```rust
/// use causeway::wrap;
///
/// let cause: Option<std::io::Error> = None;
/// assert!(wrap(cause, "never created").is_none());
///
/// let cause = Some(std::io::Error::other("EOF"));
/// assert_eq!(wrap(cause, "corrupt file").unwrap().to_string(), "corrupt file: EOF");
/// ```
#[track_caller]
pub fn wrap<E>(cause: Option<E>, message: impl Into<Cow<'static, str>>) -> Option<Error>
where
    E: Into<Box<dyn StdError + Send + Sync>>,
{
    Context::default().wrap(cause, message)
}

/// Like [`wrap`], with a formatted message.
#[track_caller]
pub fn wrapf<E>(cause: Option<E>, args: fmt::Arguments<'_>) -> Option<Error>
where
    E: Into<Box<dyn StdError + Send + Sync>>,
{
    Context::default().wrapf(cause, args)
}

/// Returns the innermost error of `err`'s chain.
///
/// For an [`Error`] this is the cached root cause. Any other error is its own root.
#[must_use]
pub fn root_cause<'a>(err: Option<&'a (dyn StdError + 'static)>) -> Option<&'a (dyn StdError + 'static)> {
    let err = err?;
    match err.downcast_ref::<Error>() {
        Some(node) => Some(node.root_cause()),
        None => Some(err),
    }
}
