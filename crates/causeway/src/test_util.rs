// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Test utilities for the causeway crate.
//!
//! This module is only available when the `test-util` feature is enabled.

/// Assert that the trace of an error consists of the expected messages, outermost first.
///
/// Origins are ignored, which keeps assertions stable when code moves around.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "test-util")]
/// # {
/// use causeway::{Error, assert_trace_messages};
///
/// let err = Error::wrap(Error::new("disk full"), "cannot save");
/// assert_trace_messages!(err, ["cannot save", "disk full"]);
/// # }
/// ```
#[macro_export]
#[cfg_attr(coverage_nightly, coverage(off))] // coverage doesn't handle panics well
macro_rules! assert_trace_messages {
    ($error:expr, [$($expected:expr),* $(,)?]) => {{
        let trace = $crate::Error::trace(&$error);
        let actual: ::std::vec::Vec<&str> = trace.frames().iter().map($crate::Frame::message).collect();
        let expected: ::std::vec::Vec<&str> = ::std::vec![$($expected),*];

        if actual != expected {
            panic!("left : {expected:?}\nright: {actual:?}\ntrace:\n{trace}");
        }
    }};
}
