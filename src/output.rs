//! Error reports for human and robot output modes.

use console::style;
use serde_json::Value;

use crate::error::BctlError;

/// Human-readable report for `error`, written to stderr by the driver.
///
/// Errors with operator guidance print the guidance verbatim and nothing
/// else; all other errors are a single `Error:` line with an optional hint.
pub fn human_error(error: &BctlError) -> String {
    if let Some(guidance) = error.guidance() {
        return guidance.to_string();
    }

    let label = style("Error").red().bold().for_stderr();
    match error.suggestion() {
        Some(hint) => format!("{label}: {error} (hint: {hint})"),
        None => format!("{label}: {error}"),
    }
}

/// Machine-readable report for `error`.
pub fn error_json(error: &BctlError) -> Value {
    serde_json::json!({
        "error": true,
        "kind": error.kind(),
        "message": error.to_string(),
        "suggestion": error.suggestion(),
        "guidance": error.guidance(),
        "recoverable": error.is_user_recoverable(),
    })
}
