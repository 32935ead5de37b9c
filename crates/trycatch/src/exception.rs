//! The exception record.

use std::fmt::{self, Write as _};
use std::path::Path;

use chrono::{DateTime, Local, SecondsFormat};

use crate::stack::{self, CaptureConfig};
use crate::DynError;

/// An error with a message, an optional cause, the call stack at the point
/// it was created, and a creation timestamp.
///
/// Everything except the cause is fixed at construction.
pub struct Exception {
    message: String,
    cause: Option<DynError>,
    stack_trace: String,
    timestamp: DateTime<Local>,
}

impl Exception {
    /// Create an exception, capturing the current time and stack.
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_capture(message, &CaptureConfig::default())
    }

    /// Create an exception using a custom stack capture configuration.
    pub fn with_capture(message: impl Into<String>, config: &CaptureConfig) -> Self {
        Self {
            message: message.into(),
            cause: None,
            stack_trace: stack::capture_with(config),
            timestamp: Local::now(),
        }
    }

    /// Wrap an existing error. The message is taken from the error's
    /// `Display` output and the error becomes the cause.
    pub fn from_error<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::from_boxed(Box::new(err))
    }

    /// Same as [`Exception::from_error`] for an error that is already boxed.
    pub fn from_boxed(err: DynError) -> Self {
        let mut exception = Self::new(err.to_string());
        exception.cause = Some(err);
        exception
    }

    /// Wrap an error using a trace captured earlier, at the raise site.
    pub(crate) fn from_boxed_with_trace(err: DynError, stack_trace: String) -> Self {
        Self {
            message: err.to_string(),
            cause: Some(err),
            stack_trace,
            timestamp: Local::now(),
        }
    }

    /// Attach a cause. A previously attached cause is replaced.
    pub fn with_cause<E>(mut self, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        if let Some(previous) = &self.cause {
            tracing::trace!("replacing cause '{}' of '{}'", previous, self.message);
        }
        self.cause = Some(Box::new(err));
        self
    }

    /// Get the exception message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the wrapped cause (if any).
    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// The formatted stack trace, one `    at ...` line per frame.
    pub fn stack_trace(&self) -> &str {
        &self.stack_trace
    }

    /// Get the creation time
    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// RFC3339 timestamp with second precision; UTC renders as `Z`.
    pub fn timestamp_rfc3339(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    /// One line: `[<timestamp>] <message>`, plus ` -- caused by: <cause>`.
    pub fn short_description(&self) -> String {
        self.to_string()
    }

    /// Timestamp, message, cause (if any) and the complete stack trace.
    pub fn full_report(&self) -> String {
        let mut report = String::new();
        let _ = writeln!(report, "Timestamp: {}", self.timestamp_rfc3339());
        let _ = writeln!(report, "Message: {}", self.message);
        if let Some(cause) = &self.cause {
            let _ = writeln!(report, "Inner Error: {}", cause);
        }
        let _ = writeln!(report, "Stack Trace:\n{}", self.stack_trace);
        report
    }

    /// Write the full report to `path`, creating or truncating the file.
    pub fn dump_to_file(&self, path: impl AsRef<Path>) -> trycatch_error::Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.full_report()).map_err(|err| {
            trycatch_error::Error::write_failed(path, err).with_operation("exception::dump_to_file")
        })?;
        tracing::debug!("dumped exception '{}' to {}", self.message, path.display());
        Ok(())
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.timestamp_rfc3339(), self.message)?;
        if let Some(cause) = &self.cause {
            write!(f, " -- caused by: {}", cause)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_report())
    }
}

impl std::error::Error for Exception {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}
