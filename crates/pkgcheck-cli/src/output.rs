//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output
//! in various formats (JSON, YAML, human-readable), with specialized
//! rendering for document reports and field errors.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use pkgcheck_schemas::{DocumentReport, FieldErrors};
use serde::Serialize;
use std::io::{self, Write};
use tracing::debug;

/// Trait for formatting output with specialized support for common types
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format a batch of document reports
    fn format_reports(&self, reports: &[DocumentReport], use_color: bool) -> Result<String>;

    /// Format a bare error list
    fn format_field_errors(&self, errors: &FieldErrors) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Human => Ok(serde_yaml::to_string(value)?),
        }
    }

    fn format_reports(&self, reports: &[DocumentReport], use_color: bool) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_reports_human(reports, use_color)),
            _ => self.format(&reports),
        }
    }

    fn format_field_errors(&self, errors: &FieldErrors) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_field_errors_human(errors, "  ")),
            _ => self.format(errors),
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self::with_writer(format, use_color, quiet, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        debug!("Output info: {}", message);

        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.yellow().to_string())
        } else {
            self.writeln(&format!("WARNING: {}", message))
        }
    }

    /// Write an error message
    pub fn error(&mut self, message: &str) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.red().to_string())
        } else {
            self.writeln(&format!("ERROR: {}", message))
        }
    }

    /// Write a section header
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        self.writeln("")?;
        if self.use_color {
            self.writeln(&format!("═══ {} ═══", title).bright_blue().to_string())
        } else {
            self.writeln(&format!("=== {} ===", title))
        }
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let formatted = self.format.format(value)?;
        self.writeln(formatted.trim_end())
    }

    /// Write document reports with specialized formatting
    ///
    /// Machine formats always print; human output is suppressed by `--quiet`
    /// except for rejected documents.
    pub fn reports(&mut self, reports: &[DocumentReport]) -> Result<()> {
        if self.format == OutputFormat::Human && self.quiet {
            let rejected: Vec<_> = reports.iter().filter(|r| !r.accepted).cloned().collect();
            let formatted = format_reports_human(&rejected, self.use_color);
            return self.write_block(&formatted);
        }

        let formatted = self.format.format_reports(reports, self.use_color)?;
        self.write_block(&formatted)
    }

    /// Write a bare error list
    pub fn field_errors(&mut self, errors: &FieldErrors) -> Result<()> {
        let formatted = self.format.format_field_errors(errors)?;
        self.write_block(&formatted)
    }

    fn write_block(&mut self, content: &str) -> Result<()> {
        if content.is_empty() {
            return Ok(());
        }
        self.writeln(content.trim_end())
    }
}

/// Label for a report: `source#index` when the source is known
fn report_label(report: &DocumentReport) -> String {
    match &report.source {
        Some(source) => format!("{}#{}", source, report.index),
        None => format!("#{}", report.index),
    }
}

/// Format document reports for human reading
fn format_reports_human(reports: &[DocumentReport], use_color: bool) -> String {
    let mut output = String::new();

    for report in reports {
        let name = if report.name.is_empty() {
            "<unnamed>"
        } else {
            report.name.as_str()
        };

        let status = match (report.accepted, use_color) {
            (true, true) => "✓".green().to_string(),
            (true, false) => "OK".to_string(),
            (false, true) => "✗".red().to_string(),
            (false, false) => "FAIL".to_string(),
        };

        output.push_str(&format!(
            "{} {} {} {}",
            status,
            report_label(report),
            report.kind,
            name
        ));
        if !report.accepted {
            output.push_str(&format!(" ({} error(s))", report.total_errors));
        }
        output.push('\n');

        output.push_str(&format_field_errors_human(&report.errors, "    "));
        if report.truncated() > 0 {
            output.push_str(&format!("    ... and {} more\n", report.truncated()));
        }
    }

    output
}

/// Format field errors one per line, e.g. `spec.version: Required value: cannot be empty`
fn format_field_errors_human(errors: &FieldErrors, indent: &str) -> String {
    errors
        .iter()
        .map(|error| format!("{}{}\n", indent, error))
        .collect()
}

#[cfg(test)]
mod tests {
    include!("output/tests.rs");
}
