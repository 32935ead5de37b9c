//! Classification of intercepted unwind payloads.

use std::any::Any;

use strum_macros::IntoStaticStr;

use crate::{DynError, Exception};

/// Message used when a payload is neither an error nor a string.
pub const OPAQUE_PAYLOAD: &str = "Box<dyn Any>";

/// Unwind payload of [`crate::throw_error`]: the error and the stack at the
/// raise site, which is gone by the time the payload is caught.
pub(crate) struct ForeignPayload {
    pub(crate) error: DynError,
    pub(crate) stack_trace: String,
}

/// What an intercepted unwind was carrying.
#[derive(Debug, IntoStaticStr)]
pub enum Raised {
    /// Raised with one of the throw primitives.
    Exception(Exception),
    /// A foreign error raised as-is, see [`crate::throw_error`].
    ///
    /// `stack_trace` is `None` when the error was passed to `panic_any`
    /// directly; a trace is then taken when the exception is built.
    Foreign {
        error: DynError,
        stack_trace: Option<String>,
    },
    /// Anything else, reduced to its string form. Plain `panic!` messages and
    /// arithmetic panics end up here.
    Payload(String),
}

impl Raised {
    /// Classify a payload returned by [`std::panic::catch_unwind`].
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<Exception>() {
            Ok(exception) => return Raised::Exception(*exception),
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<ForeignPayload>() {
            Ok(foreign) => {
                let ForeignPayload { error, stack_trace } = *foreign;
                return Raised::Foreign {
                    error,
                    stack_trace: Some(stack_trace),
                };
            }
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<DynError>() {
            Ok(error) => {
                return Raised::Foreign {
                    error: *error,
                    stack_trace: None,
                };
            }
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<String>() {
            Ok(message) => return Raised::Payload(*message),
            Err(payload) => payload,
        };
        match payload.downcast::<&'static str>() {
            Ok(message) => Raised::Payload((*message).to_string()),
            Err(_) => Raised::Payload(OPAQUE_PAYLOAD.to_string()),
        }
    }

    /// Name of the variant, for logging.
    pub fn kind(&self) -> &'static str {
        self.into()
    }

    /// Normalize into an [`Exception`]. Foreign errors are kept as the cause.
    pub fn into_exception(self) -> Exception {
        match self {
            Raised::Exception(exception) => exception,
            Raised::Foreign {
                error,
                stack_trace: Some(stack_trace),
            } => Exception::from_boxed_with_trace(error, stack_trace),
            Raised::Foreign {
                error,
                stack_trace: None,
            } => Exception::from_boxed(error),
            Raised::Payload(message) => Exception::new(message),
        }
    }
}

impl From<Raised> for Exception {
    fn from(raised: Raised) -> Self {
        raised.into_exception()
    }
}
