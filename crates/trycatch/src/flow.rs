//! try/catch/finally on top of `catch_unwind`.
//!
//! The protected body runs inside [`std::panic::catch_unwind`]. When it
//! unwinds, the payload is normalized through [`Raised`] and handed to the
//! catch handler by value. Raises from inside the catch or finally handlers
//! are not intercepted by the same call and keep unwinding.
//!
//! Closures are wrapped in [`AssertUnwindSafe`]: the body's partial result is
//! discarded on unwind, so callers may capture `&mut` state freely.
//!
//! # Panic hook output
//!
//! No panic hook is installed. Every intercepted raise therefore still goes
//! through the process panic hook, which by default prints
//! `thread '...' panicked at ...` to stderr (plus a backtrace when
//! `RUST_BACKTRACE` is set). For exceptions and foreign errors the printed
//! payload reads `Box<dyn Any>` rather than the message, since the default
//! hook only knows how to print string payloads. Programs that want silent
//! interception install their own hook:
//!
//! ```rust
//! use trycatch::{throw, try_catch};
//!
//! let previous = std::panic::take_hook();
//! std::panic::set_hook(Box::new(|_| {}));
//! let (value, ok) = try_catch(|| -> u8 { throw("quiet") }, |_| 0);
//! std::panic::set_hook(previous);
//!
//! assert_eq!((value, ok), (0, false));
//! ```

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::{Exception, Raised};

/// Result type of the untyped variants. `None` stands for "no value".
pub type AnyValue = Option<Box<dyn Any>>;

/// Run `body`; if it raises, run `catch` with the normalized exception.
///
/// Returns the value of whichever ran, and `true` only if `body` completed
/// without raising.
pub fn try_catch<T, B, C>(body: B, catch: C) -> (T, bool)
where
    B: FnOnce() -> T,
    C: FnOnce(Exception) -> T,
{
    match panic::catch_unwind(AssertUnwindSafe(body)) {
        Ok(value) => (value, true),
        Err(payload) => {
            let raised = Raised::from_panic(payload);
            let kind = raised.kind();
            let exception = raised.into_exception();
            tracing::debug!("intercepted {} raise: {}", kind, exception.message());
            (catch(exception), false)
        }
    }
}

/// Like [`try_catch`], then run `finally` exactly once.
///
/// `finally` also runs when `catch` raises; the raise resumes afterwards.
pub fn try_catch_finally<T, B, C, F>(body: B, catch: C, finally: F) -> (T, bool)
where
    B: FnOnce() -> T,
    C: FnOnce(Exception) -> T,
    F: FnOnce(),
{
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| try_catch(body, catch)));
    tracing::trace!("running finally handler");
    finally();
    match outcome {
        Ok(result) => result,
        Err(payload) => panic::resume_unwind(payload),
    }
}

/// Untyped [`try_catch`].
pub fn try_catch_any<B, C>(body: B, catch: C) -> (AnyValue, bool)
where
    B: FnOnce() -> AnyValue,
    C: FnOnce(Exception) -> AnyValue,
{
    try_catch(body, catch)
}

/// Untyped [`try_catch_finally`].
pub fn try_catch_finally_any<B, C, F>(body: B, catch: C, finally: F) -> (AnyValue, bool)
where
    B: FnOnce() -> AnyValue,
    C: FnOnce(Exception) -> AnyValue,
    F: FnOnce(),
{
    try_catch_finally(body, catch, finally)
}
