//! Output formatting for human and JSON modes
//!
//! Every processed command produces one [`CommandReport`] that can be
//! rendered either as a plain human-readable line or as one compact JSON
//! record, so sessions can be piped to other tools.

use serde::Serialize;

/// Output mode for the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// One JSON object per command (machine-readable)
    Json,
}

/// Outcome of one processed command line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandReport {
    /// Whether the command succeeded
    pub success: bool,
    /// Human-readable message (confirmation or error text)
    pub message: String,
}

impl CommandReport {
    /// Report a successful command
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Report a failed command
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string(self).unwrap_or_default());
            },
        }
    }
}
