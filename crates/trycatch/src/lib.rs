//! # trycatch
//!
//! Catchable exceptions with a captured stack trace, and try/catch/finally
//! helpers built on Rust's unwinding.
//!
//! ```rust
//! use trycatch::{throw, try_catch_finally};
//!
//! let (value, ok) = try_catch_finally(
//!     || -> &'static str { throw("Fatal error occurred") },
//!     |ex| {
//!         eprintln!("{}", ex.full_report());
//!         "Recovered"
//!     },
//!     || eprintln!("cleanup"),
//! );
//! assert_eq!((value, ok), ("Recovered", false));
//! ```
//!
//! Raising unwinds the stack, so none of this works in a binary built with
//! `panic = "abort"`.

pub mod exception;
pub mod flow;
pub mod raised;
pub mod stack;
pub mod throw;

pub type DynError = Box<dyn std::error::Error + Send + Sync>;

pub use exception::Exception;
pub use flow::{AnyValue, try_catch, try_catch_any, try_catch_finally, try_catch_finally_any};
pub use raised::Raised;
pub use stack::CaptureConfig;
pub use throw::{raise, throw, throw_error, throw_fmt, throw_if};
pub use trycatch_error::{Error, ErrorKind};
