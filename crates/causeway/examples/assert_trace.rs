// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Demonstrates asserting on the messages of a trace with the `test-util` feature.

use causeway::{Error, assert_trace_messages, errorf, wrapf};

fn main() {
    let err = errorf!("checksum mismatch at offset {}", 512);
    let err = wrapf!(err, "segment {} is corrupt", 3);
    let err = Error::wrap(err, "recovery failed");

    assert_trace_messages!(err, ["recovery failed", "segment 3 is corrupt", "checksum mismatch at offset 512"]);
    println!("{err}");
}
