//! JSON error payload written to stderr on failure.

use super::CliError;
use anyhow::Result;
use serde::Serialize;
use std::fmt::Display;
use std::io::Write;

/// `{"error": ..., "details": ..., "status": ...}`; absent keys are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorPayload {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u32>,
}

impl ErrorPayload {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            status: None,
        }
    }

    pub fn with_details(mut self, details: impl Display) -> Self {
        self.details = Some(details.to_string());
        self
    }

    /// Argument parsing failure reported by clap (unexpected extra argument, unknown flag).
    pub fn usage(err: &clap::Error) -> Self {
        let rendered = err.to_string();
        let message = rendered
            .lines()
            .next()
            .unwrap_or("invalid arguments")
            .trim_start_matches("error:")
            .trim();
        Self::new(message)
    }

    /// Compact single-line JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn write_to<W: Write>(&self, mut w: W) -> Result<()> {
        writeln!(w, "{}", self.to_json()?)?;
        Ok(())
    }
}

impl From<&CliError> for ErrorPayload {
    fn from(err: &CliError) -> Self {
        match err {
            CliError::MissingArgument => ErrorPayload::new(err.to_string()),
            CliError::InvalidUrl(e) => ErrorPayload::new("Invalid URL").with_details(e),
            CliError::Fetch(e) => ErrorPayload {
                status: e.status(),
                ..ErrorPayload::new("Failed to fetch page").with_details(e)
            },
            CliError::Join(e) => ErrorPayload::new("Failed to fetch page").with_details(e),
        }
    }
}
