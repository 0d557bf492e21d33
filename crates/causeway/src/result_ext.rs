// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::borrow::Cow;
use std::error::Error as StdError;

use crate::{Cause, Context, Error, Origin};

/// Wrapping for the error side of a [`Result`].
///
/// `Ok` values pass through untouched, so a fallible call can be wrapped without
/// inspecting its outcome first. The origin of the new link is the call site of
/// the wrapping method.
///
/// # Examples
///
/// ```rust
/// use causeway::{Context, KeyValue, ResultExt};
///
/// fn parse(input: &str) -> Result<u32, causeway::Error> {
///     let ctx = Context::new([KeyValue::new("input", input.to_owned())]);
///     input.parse::<u32>().wrap_err_in(&ctx, "invalid port")
/// }
///
/// assert_eq!(parse("80").unwrap(), 80);
/// let err = parse("http").unwrap_err();
/// assert_eq!(err.to_string(), "invalid port: invalid digit found in string");
/// ```
pub trait ResultExt<T> {
    /// Wraps the error in a new [`Error`] with `message`.
    ///
    /// # Errors
    ///
    /// Returns the wrapped error if `self` is `Err`.
    #[track_caller]
    fn wrap_err(self, message: impl Into<Cow<'static, str>>) -> Result<T, Error>;

    /// Wraps the error in a new [`Error`] with a lazily built message.
    ///
    /// # Errors
    ///
    /// Returns the wrapped error if `self` is `Err`.
    #[track_caller]
    fn wrap_err_with<F, M>(self, message: F) -> Result<T, Error>
    where
        F: FnOnce() -> M,
        M: Into<Cow<'static, str>>;

    /// Wraps the error in a new [`Error`] carrying `ctx`.
    ///
    /// # Errors
    ///
    /// Returns the wrapped error if `self` is `Err`.
    #[track_caller]
    fn wrap_err_in(self, ctx: &Context, message: impl Into<Cow<'static, str>>) -> Result<T, Error>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<Box<dyn StdError + Send + Sync>>,
{
    #[track_caller]
    fn wrap_err(self, message: impl Into<Cow<'static, str>>) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Error::wrap(err, message)),
        }
    }

    #[track_caller]
    fn wrap_err_with<F, M>(self, message: F) -> Result<T, Error>
    where
        F: FnOnce() -> M,
        M: Into<Cow<'static, str>>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Error::wrap(err, message())),
        }
    }

    #[track_caller]
    fn wrap_err_in(self, ctx: &Context, message: impl Into<Cow<'static, str>>) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Error::from_parts(
                message.into(),
                Origin::capture(),
                ctx.clone(),
                Some(Cause::from_boxed(err.into())),
            )),
        }
    }
}
