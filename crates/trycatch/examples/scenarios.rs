//! Walks through the common try/catch/finally patterns.
//!
//! ```text
//! RUST_LOG=trycatch=trace cargo run -p trycatch --example scenarios
//! ```

use trycatch::{Exception, throw, throw_if, try_catch, try_catch_finally};

fn divide(a: i32, b: i32) -> i32 {
    throw_if(b == 0, "Division by zero error");
    a / b
}

fn main() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    // Raised payloads are reported by the catch handlers below.
    std::panic::set_hook(Box::new(|_| {}));

    let (result, ok) = try_catch(
        || -> &'static str { throw("Fatal error occurred") },
        |ex| {
            println!("Caught exception:\n{}", ex.full_report());
            "Recovered"
        },
    );
    println!("Result: {result}, succeeded: {ok}\n");

    let (result, ok) = try_catch_finally(
        || Some(divide(100, 0)),
        |ex| {
            println!("Caught: {ex}");
            None
        },
        || println!("Cleanup: closing resources"),
    );
    println!("Result: {result:?}, succeeded: {ok}\n");

    let report = std::env::temp_dir().join("trycatch-report.txt");
    let ex = Exception::from_error(std::io::Error::other("upstream unavailable"));
    match ex.dump_to_file(&report) {
        Ok(()) => println!("Report written to {}", report.display()),
        Err(err) => eprintln!("Could not write report: {err}"),
    }
}
