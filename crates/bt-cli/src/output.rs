//! Output formatting for CLI commands.
//!
//! Supports plain text (the panel's message line) and JSON output.

use std::io::Write;

use serde::Serialize;

use crate::cli::Format;
use crate::error::CliError;

/// Output formatter that handles both text and JSON output.
#[derive(Debug, Clone)]
pub struct OutputFormat {
    format: Format,
}

impl OutputFormat {
    /// Create a new output formatter.
    #[must_use]
    pub const fn new(format: Format) -> Self {
        Self { format }
    }

    /// Check if JSON format is selected.
    #[must_use]
    pub const fn is_json(&self) -> bool {
        matches!(self.format, Format::Json)
    }

    /// Write a value to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write<W, T>(&self, writer: &mut W, value: &T) -> Result<(), CliError>
    where
        W: Write,
        T: Serialize + TextDisplay,
    {
        match self.format {
            Format::Json => {
                serde_json::to_writer_pretty(&mut *writer, value)
                    .map_err(|e| CliError::Format(format!("JSON serialization failed: {e}")))?;
                writeln!(writer)?;
            }
            Format::Text => {
                value.write_text(writer)?;
            }
        }
        Ok(())
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::new(Format::Text)
    }
}

/// Trait for types that can be displayed as plain text.
pub trait TextDisplay {
    /// Write the value as plain text.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_text<W: Write>(&self, writer: &mut W) -> Result<(), CliError>;
}

/// Result of one project lifecycle operation.
#[derive(Debug, Clone, Serialize)]
pub struct OperationReport {
    /// Project the operation targeted.
    pub project: String,
    /// Action that was performed.
    pub action: String,
    /// Whether the panel reported success.
    pub status: bool,
    /// The panel's message field.
    pub message: String,
}

impl TextDisplay for OperationReport {
    fn write_text<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        writeln!(writer, "{}", self.message)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> OperationReport {
        OperationReport {
            project: "demo".into(),
            action: "start".into(),
            status: true,
            message: "ok".into(),
        }
    }

    #[test]
    fn text_mode_prints_the_message_line() {
        let format = OutputFormat::new(Format::Text);
        let mut buf = Vec::new();
        format.write(&mut buf, &report()).expect("should write");
        assert_eq!(String::from_utf8(buf).expect("valid utf8"), "ok\n");
    }

    #[test]
    fn json_mode_emits_the_full_report() {
        let format = OutputFormat::new(Format::Json);
        let mut buf = Vec::new();
        format.write(&mut buf, &report()).expect("should write");

        let output = String::from_utf8(buf).expect("valid utf8");
        assert!(output.contains("\"project\""));
        assert!(output.contains("\"demo\""));
        assert!(output.contains("\"status\""));
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn default_format_is_text() {
        assert!(!OutputFormat::default().is_json());
    }
}
