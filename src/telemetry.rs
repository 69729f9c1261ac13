//! Error reporting boundary
//!
//! Failures are reported here before the process exits non-zero. The
//! transport is a structured log event; a real telemetry backend would
//! hang off the same call site.

use tracing::error;

/// Report a pipeline abort with the invocation that triggered it
pub fn report_error(argv: &[String], message: &str) {
    error!(argv = ?argv, "{}", message);
}
