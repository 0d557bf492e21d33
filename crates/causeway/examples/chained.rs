// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Demonstrates a chain of errors built across three calls, each with its own context.

use std::io::{Error as IoError, ErrorKind};
use std::process::ExitCode;

use causeway::{Error, ResultExt, context};

fn a(a: i32) -> Result<(), Error> {
    let ctx = context! { "a" => a };
    b(a + 1).wrap_err_in(&ctx, "A failed")
}

fn b(b: i32) -> Result<(), Error> {
    let ctx = context! { "b" => b };
    c(b + 1).wrap_err_in(&ctx, "B failed")
}

fn c(c: i32) -> Result<(), Error> {
    let ctx = context! { "c" => c };
    Err(IoError::from(ErrorKind::UnexpectedEof)).wrap_err_in(&ctx, "C failed")
}

fn main() -> ExitCode {
    let Err(err) = a(4) else {
        return ExitCode::SUCCESS;
    };

    println!("{err}\n");
    println!("error trace:\n");
    print!("{}", err.trace());
    ExitCode::FAILURE
}
