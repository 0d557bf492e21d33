// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Layer-by-layer view of an error chain.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

use crate::{Cause, Context, Error, Origin};

/// One rendered link of a [`Trace`].
#[derive(Debug, Clone)]
pub struct Frame {
    message: Cow<'static, str>,
    origin: Option<Origin>,
    context: Context,
}

impl Frame {
    fn from_chain(node: &Error) -> Self {
        Self {
            message: node.message_cow().clone(),
            origin: Some(node.origin()),
            context: node.context().clone(),
        }
    }

    fn from_foreign(err: &(dyn StdError + 'static)) -> Self {
        Self {
            message: Cow::Owned(err.to_string()),
            origin: None,
            context: Context::default(),
        }
    }

    /// The message of the link. For a foreign error this is its display string.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Where the link was constructed; `None` for a foreign error.
    #[must_use]
    pub fn origin(&self) -> Option<Origin> {
        self.origin
    }

    /// Returns `true` if the origin of the link is known.
    #[must_use]
    pub fn origin_known(&self) -> bool {
        self.origin.is_some()
    }

    /// The context attached to the link. Always empty for a foreign error.
    #[must_use]
    pub fn context(&self) -> &Context {
        &self.context
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(origin) = self.origin else {
            return writeln!(f, "?:? {:?}", self.message);
        };

        writeln!(f, "{origin} {:?}", self.message)?;
        if !self.context.is_empty() {
            writeln!(f, "Where:")?;
            for kv in self.context.values() {
                writeln!(f, "  {kv:?}")?;
            }
        }
        Ok(())
    }
}

/// The frames of an error chain, outermost first.
///
/// A trace holds one frame per [`Error`] link. If the chain ends in a foreign
/// error, a final frame with an unknown origin represents it. Walking stops after
/// [`Trace::DEFAULT_MAX_FRAMES`] frames unless configured otherwise through
/// [`Trace::builder`]; a trace that hit the bound reports
/// [`is_truncated`](Trace::is_truncated).
///
/// Displaying a trace renders one block per frame, separated by `Cause:` lines:
///
/// ```text
/// src/main.rs:12:15 "layer2"
/// Where:
///   "tag" = "x"
/// Cause:
/// src/main.rs:8:19 "layer1"
/// Where:
///   "id" = 5
/// Cause:
/// ?:? "EOF"
/// ```
#[derive(Debug, Clone, Default)]
pub struct Trace {
    frames: Vec<Frame>,
    truncated: bool,
}

impl Trace {
    /// Frame bound applied when none is configured.
    pub const DEFAULT_MAX_FRAMES: usize = 10_000;

    /// Creates a [`TraceBuilder`] with the default settings.
    #[must_use]
    pub fn builder() -> TraceBuilder {
        TraceBuilder::new()
    }

    /// The frames, outermost first.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Number of frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` if the trace has no frames.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Returns `true` if the walk stopped at the frame bound with links left over.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, frame) in self.frames.iter().enumerate() {
            if index > 0 {
                writeln!(f, "Cause:")?;
            }
            fmt::Display::fmt(frame, f)?;
        }
        Ok(())
    }
}

impl IntoIterator for Trace {
    type Item = Frame;
    type IntoIter = std::vec::IntoIter<Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.into_iter()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

/// Builder for collecting a [`Trace`] with custom settings.
#[derive(Debug, Clone)]
pub struct TraceBuilder {
    max_frames: usize,
}

impl Default for TraceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TraceBuilder {
    /// Creates a builder with [`Trace::DEFAULT_MAX_FRAMES`] as the frame bound.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_frames: Trace::DEFAULT_MAX_FRAMES,
        }
    }

    /// Sets the maximum number of frames collected.
    #[must_use]
    pub fn max_frames(mut self, max_frames: usize) -> Self {
        self.max_frames = max_frames;
        self
    }

    /// Walks the chain of `err`, outermost first.
    ///
    /// Each [`Error`] link yields a frame and the walk moves on to its cause. The
    /// first error of any other type yields a final frame with an unknown origin.
    #[must_use]
    pub fn build(self, err: Option<&(dyn StdError + 'static)>) -> Trace {
        let mut trace = Trace::default();
        let mut current = err;

        while let Some(err) = current {
            if trace.frames.len() == self.max_frames {
                trace.truncated = true;
                self.emit_truncated();
                break;
            }

            let Some(node) = err.downcast_ref::<Error>() else {
                trace.frames.push(Frame::from_foreign(err));
                break;
            };

            trace.frames.push(Frame::from_chain(node));
            current = node.cause().map(|cause| {
                let next: &(dyn StdError + 'static) = cause.as_error();
                next
            });
        }

        trace
    }

    #[cfg_attr(
        not(any(feature = "logs", test)),
        expect(clippy::unused_self, reason = "unused when logs feature not used")
    )]
    fn emit_truncated(&self) {
        #[cfg(any(feature = "logs", test))]
        tracing::event!(
            name: "causeway.trace.truncated",
            tracing::Level::WARN,
            trace.max_frames = self.max_frames,
            "error trace truncated"
        );
    }
}

/// Collects the trace of `err` with the default settings.
///
/// `None` yields an empty trace.
#[must_use]
pub fn get_trace(err: Option<&(dyn StdError + 'static)>) -> Trace {
    TraceBuilder::new().build(err)
}

impl From<&Cause> for Trace {
    fn from(cause: &Cause) -> Self {
        let err: &(dyn StdError + 'static) = cause.as_error();
        get_trace(Some(err))
    }
}
