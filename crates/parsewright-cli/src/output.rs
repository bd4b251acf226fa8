//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use parsewright_agent::RunReport;
use parsewright_gatekeeper::AccuracyReport;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Longest diagnostic shown in a table cell
const DIAGNOSTIC_WIDTH: usize = 60;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a run report.
    pub fn format_run(&self, report: &RunReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&report.summary())?),
            OutputFormat::Table => Ok(self.format_run_table(report)),
            OutputFormat::Quiet => Ok(report.state.as_str().to_string()),
        }
    }

    /// Format an accuracy report.
    pub fn format_accuracy(&self, report: &AccuracyReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Table => Ok(self.format_accuracy_table(report)),
            OutputFormat::Quiet => Ok(format!("{:.2}", report.percentage())),
        }
    }

    fn format_run_table(&self, report: &RunReport) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Attempt", "DPI", "Rows", "Result", "Mismatch", "Diagnostic"]);

        for attempt in &report.attempts {
            let result = if attempt.success { "PASS" } else { "FAIL" };
            let diagnostic = match &attempt.extraction_fault {
                Some(fault) => format!("extraction fault: {}", fault),
                None => attempt.diagnostic.clone(),
            };
            builder.push_record([
                attempt.attempt.to_string(),
                attempt.params.render_dpi().to_string(),
                attempt.candidate_rows().to_string(),
                result.to_string(),
                attempt.mismatch.map(|m| m.to_string()).unwrap_or_default(),
                truncate(&diagnostic, DIAGNOSTIC_WIDTH),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let mut lines = vec![
            self.info(&format!("Run {} for target '{}'", report.run_id, report.target)),
            table.to_string(),
        ];
        if let Some(accuracy) = &report.accuracy {
            lines.push(self.info(&accuracy.summary()));
        }
        lines.push(self.verdict(report));
        lines.join("\n")
    }

    fn format_accuracy_table(&self, report: &AccuracyReport) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Column", "Matched", "Total", "Accuracy"]);
        for column in &report.columns {
            builder.push_record([
                column.column.clone(),
                column.matched.to_string(),
                column.total.to_string(),
                format!("{:.2}%", column.percentage()),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let summary = report.summary();
        let headline = if report.total > 0 && report.matched == report.total {
            self.success(&summary)
        } else {
            self.warning(&summary)
        };
        format!("{}\n{}", table, headline)
    }

    /// Final success/failure line for a run.
    pub fn verdict(&self, report: &RunReport) -> String {
        if report.succeeded() {
            self.success(&report.verdict())
        } else {
            self.error(&report.verdict())
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let head: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}
