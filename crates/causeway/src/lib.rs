// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Chainable errors with call-site origins, debug context, and readable traces.
//!
//! Every [`Error`] is one link of a chain: a human-readable message, the [`Origin`]
//! where it was created, an optional [`Context`] of key-value debug pairs, and the
//! [`Cause`] it wraps. At the top of the program, a [`Trace`] walks the chain and
//! renders every link, outermost first.
//!
//! # Key Features
//!
//! - [**`Error`**](Error): Immutable, cheaply clonable error link with an O(1) [`root_cause`](Error::root_cause)
//! - [**`Context`**](Context): Reusable bundle of debug values attached to every error built from it
//! - [**`Trace`**](Trace): Bounded, layer-by-layer report of an error chain
//! - [**`ResultExt`**](ResultExt): Wrapping for the error side of a [`Result`]
//! - [**`errorf!`**](errorf), [**`wrapf!`**](wrapf), [**`context!`**](context): Formatting shortcuts
//!
//! # Quick Start
//!
//! ```rust
//! use causeway::{Error, ResultExt, context};
//!
//! fn read_header(path: &str) -> Result<Vec<u8>, Error> {
//!     let ctx = context! { "path" => path.to_owned() };
//!     std::fs::read(path).wrap_err_in(&ctx, "cannot read header")
//! }
//!
//! let err = read_header("/does/not/exist").unwrap_err();
//! assert!(err.to_string().starts_with("cannot read header: "));
//! assert_eq!(err.trace().len(), 2);
//! ```
//!
//! # Display and Trace
//!
//! Displaying an error yields one line: the outermost message and the root cause.
//! Intermediate messages are only visible in the trace.
//!
//! ```rust
//! use causeway::context;
//!
//! let eof = std::io::Error::other("EOF");
//! let ids = context! { "id" => 5 };
//! let err = ids.wrap(Some(eof), "layer1").unwrap();
//!
//! let tags = context! { "tag" => "x" };
//! let err = tags.wrap(Some(err), "layer2").unwrap();
//!
//! assert_eq!(err.to_string(), "layer2: EOF");
//!
//! let trace = err.trace();
//! let messages: Vec<_> = trace.frames().iter().map(|frame| frame.message()).collect();
//! assert_eq!(messages, ["layer2", "layer1", "EOF"]);
//! assert!(!trace.frames()[2].origin_known());
//! ```
//!
//! The rendered trace prints each frame's origin and message, followed by its
//! context values:
//!
//! ```text
//! src/main.rs:5:42 "layer2"
//! Where:
//!   "tag" = "x"
//! Cause:
//! src/main.rs:4:40 "layer1"
//! Where:
//!   "id" = 5
//! Cause:
//! ?:? "EOF"
//! ```
//!
//! # Wrapping Nothing
//!
//! [`wrap`], [`wrapf`], [`Context::wrap`], and [`Context::wrapf`] take the cause as an
//! `Option` and return `None` when there is nothing to wrap, so the outcome of a
//! fallible call can be wrapped without checking it first. [`ResultExt`] offers the
//! same for `Result`.
//!
//! # Contexts Replace, They Don't Merge
//!
//! [`Context::derive`] builds a brand-new context and ignores the values of the
//! receiver. To extend a context, concatenate the values explicitly.
//!
//! # Features
//!
//! - `logs`: emits a `tracing` event when a trace is truncated at its frame bound
//! - `test-util`: exports the `assert_trace_messages!` macro

mod cause;
mod context;
mod error;
mod macros;
mod origin;
mod result_ext;
mod trace;

#[cfg(any(feature = "test-util", test))]
pub mod test_util;

pub use cause::Cause;
pub use context::{Context, KeyValue};
pub use error::{Error, root_cause, wrap, wrapf};
pub use origin::Origin;
pub use result_ext::ResultExt;
pub use trace::{Frame, Trace, TraceBuilder, get_trace};
