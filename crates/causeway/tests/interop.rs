// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Interaction with `std::error::Error` and foreign error types.

use std::error::Error as StdError;
use std::thread;

use causeway::{Cause, Error, ResultExt, get_trace};

#[derive(Debug, thiserror::Error)]
enum StoreError {
    #[error("store unavailable")]
    Unavailable(#[source] Error),
    #[error("disk error")]
    Disk(#[from] std::io::Error),
}

#[test]
fn source_chain_is_walkable_by_std() {
    let err = Error::wrap(Error::wrap(std::io::Error::other("EOF"), "inner"), "outer");

    let mut messages = Vec::new();
    let mut current: Option<&(dyn StdError + 'static)> = Some(&err);
    while let Some(e) = current {
        messages.push(e.to_string());
        current = e.source();
    }

    assert_eq!(messages, ["outer: EOF", "inner: EOF", "EOF"]);
}

#[test]
fn foreign_error_embedding_a_chain_stops_the_trace() {
    let inner = Error::wrap(std::io::Error::other("EOF"), "inner");
    let foreign = StoreError::Unavailable(inner);
    let err = Error::wrap(foreign, "request failed");

    let trace = err.trace();
    let messages: Vec<_> = trace.frames().iter().map(causeway::Frame::message).collect();
    assert_eq!(messages, ["request failed", "store unavailable"]);
    assert!(err.root_cause().downcast_ref::<StoreError>().is_some());
}

#[test]
fn from_conversions_keep_the_leaf() {
    fn read() -> Result<(), std::io::Error> {
        Err(std::io::Error::other("EOF"))
    }

    fn load() -> Result<(), StoreError> {
        read()?;
        Ok(())
    }

    let err = load().wrap_err("cannot load").unwrap_err();
    assert_eq!(err.to_string(), "cannot load: disk error");
    assert!(matches!(err.cause(), Some(Cause::Foreign(_))));
}

#[test]
fn string_causes_are_foreign_leaves() {
    let err = Error::wrap("socket closed", "send failed");
    assert_eq!(err.to_string(), "send failed: socket closed");
    let trace = get_trace(Some(&err));
    assert!(!trace.frames()[1].origin_known());
}

#[test]
fn boxed_chain_errors_are_unboxed() {
    let boxed: Box<dyn StdError + Send + Sync> = Box::new(Error::new("inner"));
    let err = Error::wrap(boxed, "outer");
    assert!(err.cause().and_then(Cause::as_chain).is_some());
    assert_eq!(err.trace().len(), 2);
}

#[test]
fn errors_cross_threads() {
    let err = Error::wrap(std::io::Error::other("EOF"), "worker failed");
    let shared = err.clone();

    let rendered = thread::spawn(move || shared.to_string()).join().unwrap();

    assert_eq!(rendered, err.to_string());
}

#[test]
fn debug_renders_the_trace() {
    let err = Error::wrap(std::io::Error::other("EOF"), "outer");
    let debug = format!("{err:?}");
    assert!(debug.contains("\"outer\"\nCause:\n?:? \"EOF\"\n"), "{debug}");
}
