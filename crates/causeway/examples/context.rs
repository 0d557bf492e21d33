// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Demonstrates reusing a context and replacing it with `derive`.

#![expect(clippy::unwrap_used, reason = "example code")]

use causeway::{Context, KeyValue, wrap};

fn main() {
    let request = Context::new([KeyValue::new("request_id", 7), KeyValue::new("user", "ada")]);

    // Both errors carry the same values.
    let first = request.error("quota exceeded");
    let second = request.errorf(format_args!("{} retries left", 0));
    println!("{first}\n{second}\n");

    // `derive` starts over; merge explicitly to keep the parent's values.
    let merged = Context::new(request.values().iter().cloned().chain([KeyValue::new("shard", 3)]));
    let replaced = request.derive([KeyValue::new("shard", 3)]);

    let err = merged.wrap(Some(first), "merged context").unwrap();
    let err = replaced.wrap(Some(err), "replaced context").unwrap();
    print!("{}", err.trace());

    // Wrapping nothing yields nothing.
    assert!(wrap(None::<std::io::Error>, "not an error").is_none());
}
