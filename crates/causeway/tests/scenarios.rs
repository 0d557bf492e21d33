// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! End-to-end behavior of construction, display, root-cause lookup, and tracing.

use causeway::{Context, Error, KeyValue, Trace, context, get_trace, root_cause, wrap};
use util::{Eof, normalize_origins};

mod util;

#[test]
fn wrapped_leaf_displays_message_and_root() {
    let err = Error::wrap(Eof, "corrupt file");
    insta::assert_snapshot!(err.to_string(), @"corrupt file: EOF");
    assert_eq!(err.root_cause().downcast_ref::<Eof>(), Some(&Eof));
}

#[test]
fn layered_contexts_produce_three_frames() {
    let ctx = Context::new([KeyValue::new("id", 5)]);
    let err = ctx.wrap(Some(Eof), "layer1").unwrap();

    let ctx = ctx.derive([KeyValue::new("tag", "x")]);
    let err = ctx.wrap(Some(err), "layer2").unwrap();

    let trace = get_trace(Some(&err));
    assert_eq!(trace.len(), 3);

    let [layer2, layer1, leaf] = trace.frames() else {
        panic!("expected three frames, got {}", trace.len());
    };

    assert_eq!(layer2.message(), "layer2");
    assert_eq!(format!("{:?}", layer2.context()), r#"{"tag": "x"}"#);
    assert!(layer2.origin_known());

    assert_eq!(layer1.message(), "layer1");
    assert_eq!(format!("{:?}", layer1.context()), r#"{"id": 5}"#);
    assert!(layer1.origin_known());

    assert_eq!(leaf.message(), "EOF");
    assert!(leaf.context().is_empty());
    assert!(!leaf.origin_known());
}

#[test]
fn layered_contexts_render() {
    let ids = context! { "id" => 5 };
    let err = ids.wrap(Some(Eof), "layer1").unwrap();
    let tags = context! { "tag" => "x" };
    let err = tags.wrap(Some(err), "layer2").unwrap();

    insta::assert_snapshot!(normalize_origins(&err.trace().to_string()), @r#"
<origin> "layer2"
Where:
  "tag" = "x"
Cause:
<origin> "layer1"
Where:
  "id" = 5
Cause:
?:? "EOF"
"#);
}

#[test]
fn depth_n_chain_yields_n_plus_one_frames() {
    for depth in [1_usize, 2, 5, 40] {
        let mut err = Error::wrap(Eof, "link 0");
        for i in 1..depth {
            err = Error::wrapf(err, format_args!("link {i}"));
        }

        let trace = err.trace();
        assert_eq!(trace.len(), depth + 1);
        assert_eq!(trace.frames()[0].message(), format!("link {}", depth - 1));
        assert!(trace.frames()[..depth].iter().all(causeway::Frame::origin_known));
        assert!(!trace.frames()[depth].origin_known());
    }
}

#[test]
fn frames_without_context_are_empty() {
    let err = Error::wrap(Error::new("inner"), "outer");
    assert!(err.trace().frames().iter().all(|frame| frame.context().is_empty()));
}

#[test]
fn context_order_is_preserved_in_frame() {
    let ctx = Context::new([
        KeyValue::new("z", 1),
        KeyValue::new("a", 2),
        KeyValue::new("z", 3),
    ]);
    let err = ctx.error("ordered");
    let trace = err.trace();
    let keys: Vec<_> = trace.frames()[0].context().values().iter().map(KeyValue::key).collect();
    assert_eq!(keys, ["z", "a", "z"]);
}

#[test]
fn overlong_chain_is_truncated_at_bound() {
    let mut err = Error::wrap(Eof, "link 0");
    for i in 1..Trace::DEFAULT_MAX_FRAMES + 50 {
        err = Error::wrapf(err, format_args!("link {i}"));
    }

    let trace = err.trace();
    assert_eq!(trace.len(), Trace::DEFAULT_MAX_FRAMES);
    assert!(trace.is_truncated());
    assert!(trace.frames().iter().all(causeway::Frame::origin_known));
}

#[test]
fn chain_at_bound_is_not_truncated() {
    let mut err = Error::wrap(Eof, "link 0");
    for i in 1..Trace::DEFAULT_MAX_FRAMES - 1 {
        err = Error::wrapf(err, format_args!("link {i}"));
    }

    let trace = err.trace();
    assert_eq!(trace.len(), Trace::DEFAULT_MAX_FRAMES);
    assert!(!trace.is_truncated());
}

#[test]
fn wrap_nothing_is_nothing() {
    assert!(wrap(None::<Eof>, "m").is_none());
    let ctx = context! { "id" => 1 };
    assert!(ctx.wrap(None::<Error>, "m").is_none());
}

#[test]
fn display_of_wrap_matches_root_of_cause() {
    let causes = [
        Error::new("plain"),
        Error::wrap(Eof, "one"),
        Error::wrap(Error::wrap(Error::new("deep"), "mid"), "top"),
    ];

    for cause in causes {
        let expected = format!("outer: {}", root_cause(Some(&cause)).unwrap());
        let err = Error::wrap(cause, "outer");
        assert_eq!(err.to_string(), expected);
    }
}

#[test]
fn root_cause_is_idempotent() {
    let foreign = std::io::Error::other("disk full");
    let plain = Error::new("plain");
    let chained = Error::wrap(Error::wrap(Eof, "inner"), "outer");

    let errors: [&(dyn std::error::Error + 'static); 3] = [&foreign, &plain, &chained];
    for err in errors {
        let once = root_cause(Some(err)).unwrap();
        let twice = root_cause(Some(once)).unwrap();
        assert!(std::ptr::addr_eq(once, twice));
    }
}
