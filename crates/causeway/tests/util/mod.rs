// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Utilities for testing rendered traces.

use std::sync::LazyLock;

use regex::Regex;

static ORIGIN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"(?m)^[^\s"]+:\d+:\d+ ""#).unwrap());

/// Replaces every `file:line:column` origin at the start of a line with `<origin>`,
/// so rendered traces can be compared regardless of where the errors were built.
pub fn normalize_origins(rendered: &str) -> String {
    ORIGIN.replace_all(rendered, "<origin> \"").into_owned()
}

/// A stand-in for an end-of-stream signal from a foreign library.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("EOF")]
pub struct Eof;
