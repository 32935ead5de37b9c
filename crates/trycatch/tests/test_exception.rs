use std::io;

use pretty_assertions::assert_eq;
use trycatch::stack::INTERNAL_PREFIXES;
use trycatch::{CaptureConfig, ErrorKind, Exception};

fn assert_no_internal_frames(trace: &str) {
    for line in trace.lines() {
        let name = line
            .trim_start()
            .strip_prefix("at ")
            .unwrap_or_else(|| panic!("malformed frame line: {line}"));
        for prefix in INTERNAL_PREFIXES {
            assert!(
                !name.trim_start_matches('<').starts_with(&format!("{prefix}::")),
                "internal frame leaked: {line}"
            );
        }
    }
}

#[test]
fn new_populates_every_field() {
    let ex = Exception::new("something broke");

    assert_eq!(ex.message(), "something broke");
    assert!(ex.cause().is_none());
    assert!(!ex.stack_trace().is_empty());
    assert!(!ex.timestamp_rfc3339().is_empty());
}

#[test]
fn trace_starts_at_the_caller() {
    let ex = Exception::new("here");
    let first = ex.stack_trace().lines().next().expect("at least one frame");

    assert!(first.starts_with("    at "), "{first}");
    assert!(first.contains("trace_starts_at_the_caller"), "{first}");
    assert!(first.contains("test_exception.rs:"), "{first}");
    assert_no_internal_frames(ex.stack_trace());
}

#[test]
fn custom_prefix_hides_caller_frames() {
    let config = CaptureConfig::default().with_internal_prefix("test_exception");
    let ex = Exception::with_capture("hidden", &config);

    assert!(!ex.stack_trace().contains("at test_exception::"));
}

#[test]
fn from_error_keeps_the_wrapped_error() {
    let ex = Exception::from_error(io::Error::new(io::ErrorKind::AddrInUse, "port 8080 in use"));

    assert_eq!(ex.message(), "port 8080 in use");
    let cause = ex.cause().expect("cause");
    assert_eq!(
        cause.downcast_ref::<io::Error>().map(io::Error::kind),
        Some(io::ErrorKind::AddrInUse)
    );
    assert!(!ex.stack_trace().is_empty());
}

#[test]
fn full_report_layout() {
    let ex = Exception::new("disk full").with_cause(io::Error::other("write failed"));
    let expected = format!(
        "Timestamp: {}\nMessage: disk full\nInner Error: write failed\nStack Trace:\n{}\n",
        ex.timestamp_rfc3339(),
        ex.stack_trace()
    );

    assert_eq!(ex.full_report(), expected);
    assert_eq!(format!("{ex:?}"), expected);
}

#[test]
fn dump_to_file_writes_full_report() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("exception.txt");
    let ex = Exception::new("persist me");

    ex.dump_to_file(&path).expect("dump");

    let written = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(written, ex.full_report());
}

#[test]
fn dump_to_file_overwrites() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("exception.txt");
    std::fs::write(&path, "stale content that is longer than nothing").expect("seed");

    let ex = Exception::new("fresh");
    ex.dump_to_file(&path).expect("dump");

    assert_eq!(std::fs::read_to_string(&path).expect("read back"), ex.full_report());
}

#[test]
fn dump_to_missing_directory_returns_storage_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("missing").join("exception.txt");
    let ex = Exception::new("nowhere to go");

    let err = ex.dump_to_file(&path).expect_err("write must fail");

    assert_eq!(err.kind(), ErrorKind::FileNotFound);
    assert_eq!(err.operation(), "exception::dump_to_file");
    assert_eq!(err.context_value("path"), Some(path.display().to_string().as_str()));
    assert!(err.source_ref().is_some());
    assert!(!path.exists());
}

#[test]
fn dump_to_directory_path_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let ex = Exception::new("target is a directory");

    assert!(ex.dump_to_file(dir.path()).is_err());
}
