//! Raise primitives.
//!
//! Every primitive unwinds with [`std::panic::panic_any`]; the payload is
//! picked up again by [`crate::try_catch`] and friends.

use std::fmt;
use std::panic;

use crate::raised::ForeignPayload;
use crate::{DynError, Exception, stack};

/// Raise an already-built exception.
pub fn raise(exception: Exception) -> ! {
    panic::panic_any(exception)
}

/// Raise a new exception with the given message.
pub fn throw(message: impl Into<String>) -> ! {
    raise(Exception::new(message))
}

/// Raise a new exception with a formatted message. See [`throwf!`].
///
/// [`throwf!`]: crate::throwf
pub fn throw_fmt(args: fmt::Arguments<'_>) -> ! {
    raise(Exception::new(fmt::format(args)))
}

/// Raise a new exception only if `condition` holds.
pub fn throw_if(condition: bool, message: impl Into<String>) {
    if condition {
        throw(message);
    }
}

/// Raise a foreign error unchanged. The catch side wraps it into an
/// exception with the error as its cause and the stack captured here.
pub fn throw_error<E>(err: E) -> !
where
    E: std::error::Error + Send + Sync + 'static,
{
    let error: DynError = Box::new(err);
    panic::panic_any(ForeignPayload {
        error,
        stack_trace: stack::capture(0),
    })
}

/// Raise a new exception with a `format!`-style message.
///
/// ```rust,should_panic
/// trycatch::throwf!("missing key '{}'", "name");
/// ```
#[macro_export]
macro_rules! throwf {
    ($($arg:tt)*) => {
        $crate::throw_fmt(::std::format_args!($($arg)*))
    };
}
