//! # trycatch-error
//!
//! Storage failures surfaced by `trycatch`.
//!
//! Exceptions themselves travel through the unwind channel. The only thing
//! that is ever *returned* as an error is a failed attempt to persist an
//! exception report, and that is what this crate models.
//!
//! ## Usage
//!
//! ```rust
//! use trycatch_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::PermissionDenied, "cannot write report")
//!         .with_operation("exception::dump_to_file")
//!         .with_context("path", "/var/log/report.txt"))
//! }
//! ```
//!
//! ## Principles
//!
//! - Storage errors are returned, never raised
//! - The underlying `io::Error` is kept as the source
//! - Context pairs say *where*, the kind says *what*

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using the storage Error
pub type Result<T> = std::result::Result<T, Error>;
