//! Call-stack capture.
//!
//! Frames are walked with [`backtrace::trace`] and resolved one by one. Frames
//! that belong to this crate (or to the walker itself) are dropped so a report
//! starts at the code that actually raised.

use std::fmt::Write as _;

/// Crates whose frames never show up in a captured trace.
pub const INTERNAL_PREFIXES: &[&str] = &["trycatch", "backtrace"];

/// Controls how a stack trace is captured.
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// Number of raw frames to drop before filtering starts.
    pub skip: usize,

    /// Leading path segments that mark a frame as internal.
    pub internal_prefixes: Vec<String>,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            skip: 0,
            internal_prefixes: INTERNAL_PREFIXES.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl CaptureConfig {
    /// Set the number of raw frames to drop.
    pub fn with_skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    /// Hide frames from another crate as well, e.g. a wrapper library.
    pub fn with_internal_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.internal_prefixes.push(prefix.into());
        self
    }

    /// Returns true if `name` belongs to one of the internal crates.
    pub fn is_internal(&self, name: &str) -> bool {
        let head = leading_segment(name);
        self.internal_prefixes.iter().any(|prefix| prefix == head)
    }
}

/// A single resolved frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub name: String,
    pub file: String,
    pub line: u32,
}

impl Frame {
    /// Render as `    at <name> (<file>:<line>)`, newline-terminated.
    pub fn render(&self, out: &mut String) {
        let _ = writeln!(out, "    at {} ({}:{})", self.name, self.file, self.line);
    }
}

/// Capture the current stack with the default configuration, dropping the
/// first `skip` raw frames.
pub fn capture(skip: usize) -> String {
    capture_with(&CaptureConfig::default().with_skip(skip))
}

/// Capture and format the current stack, nearest caller first.
pub fn capture_with(config: &CaptureConfig) -> String {
    let mut out = String::new();
    for frame in frames(config) {
        frame.render(&mut out);
    }
    out
}

/// Walk the stack and collect every frame that survives filtering.
pub fn frames(config: &CaptureConfig) -> Vec<Frame> {
    let mut frames = Vec::new();
    let mut index = 0usize;

    backtrace::trace(|raw| {
        index += 1;
        if index <= config.skip {
            return true;
        }

        backtrace::resolve_frame(raw, |symbol| {
            let Some(name) = symbol.name() else {
                return;
            };
            let (Some(file), Some(line)) = (symbol.filename(), symbol.lineno()) else {
                return;
            };
            // `{:#}` drops the trailing `::h<hash>` of legacy mangling.
            let name = format!("{:#}", name);
            if config.is_internal(&name) {
                return;
            }
            frames.push(Frame {
                name,
                file: file.display().to_string(),
                line,
            });
        });
        true
    });

    tracing::trace!("captured {} frames ({} walked)", frames.len(), index);
    frames
}

/// First path segment of a qualified name, ignoring the `<` that opens a
/// trait-impl path such as `<trycatch::Exception as core::fmt::Display>::fmt`.
fn leading_segment(name: &str) -> &str {
    let name = name.trim_start_matches('<');
    match name.find("::") {
        Some(end) => &name[..end],
        None => name,
    }
}
