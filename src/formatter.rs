// Copyright 2024 OctoFHIR Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Rendering diagnostics for people and tools

use crate::diagnostic::{Diagnostic, Severity};
use crate::error::{Error, Result};
use std::str::FromStr;

/// Output format for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Format {
    /// Multi-line human-readable text
    #[default]
    Text,
    /// One line per diagnostic
    Compact,
    /// JSON (requires the `serde` feature)
    Json,
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Format::Text),
            "compact" => Ok(Format::Compact),
            "json" => Ok(Format::Json),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

/// Formatter settings
///
/// Deserializable (with the `serde` feature) so a host tool can keep them in
/// its own configuration file; missing keys fall back to [`Default`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormatterConfig {
    /// Output format
    pub format: Format,
    /// Print the include trace under each text diagnostic
    pub show_include_trace: bool,
    /// Colour severities (only honoured with the `terminal` feature)
    pub use_color: bool,
    /// Drop diagnostics less severe than this when formatting a batch
    pub min_severity: Option<Severity>,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            format: Format::Text,
            show_include_trace: false,
            use_color: false,
            min_severity: None,
        }
    }
}

/// Formatter for diagnostics
#[derive(Debug, Clone, Default)]
pub struct DiagnosticFormatter {
    config: FormatterConfig,
}

impl DiagnosticFormatter {
    /// Create a formatter with default settings for `format`
    pub fn new(format: Format) -> Self {
        Self::from_config(FormatterConfig {
            format,
            ..FormatterConfig::default()
        })
    }

    /// Create a formatter from explicit settings
    pub fn from_config(config: FormatterConfig) -> Self {
        Self { config }
    }

    /// Current settings
    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Set whether to print include traces
    pub fn with_include_trace(mut self, show: bool) -> Self {
        self.config.show_include_trace = show;
        self
    }

    /// Set whether to use color (terminal feature only)
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.config.use_color = use_color;
        self
    }

    /// Set the minimum severity kept by [`DiagnosticFormatter::format_all`]
    pub fn with_min_severity(mut self, severity: Severity) -> Self {
        self.config.min_severity = Some(severity);
        self
    }

    /// Format a diagnostic
    pub fn format(&self, diagnostic: &Diagnostic) -> Result<String> {
        match self.config.format {
            Format::Text => Ok(self.format_text(diagnostic)),
            Format::Compact => Ok(self.format_compact(diagnostic)),
            Format::Json => to_json(diagnostic),
        }
    }

    /// Format multiple diagnostics, honouring `min_severity`
    pub fn format_all(&self, diagnostics: &[Diagnostic]) -> Result<String> {
        let kept: Vec<&Diagnostic> = diagnostics
            .iter()
            .filter(|d| self.config.min_severity.is_none_or(|min| d.severity() >= min))
            .collect();

        match self.config.format {
            Format::Text => Ok(kept
                .iter()
                .map(|d| self.format_text(d))
                .collect::<Vec<_>>()
                .join("\n")),
            Format::Compact => Ok(kept
                .iter()
                .map(|d| self.format_compact(d))
                .collect::<Vec<_>>()
                .join("\n")),
            Format::Json => to_json(&kept),
        }
    }

    fn severity_label(&self, severity: Severity) -> String {
        #[cfg(feature = "terminal")]
        if self.config.use_color {
            use colored::Colorize;
            let label = severity.to_string();
            return match severity {
                Severity::Error => label.red().bold().to_string(),
                Severity::Warn => label.yellow().bold().to_string(),
                Severity::Info => label.blue().bold().to_string(),
            };
        }

        severity.to_string()
    }

    fn format_text(&self, diagnostic: &Diagnostic) -> String {
        let mut result = format!(
            "{}: {}\n",
            self.severity_label(diagnostic.severity()),
            diagnostic.message()
        );

        if let Some(span) = diagnostic.span() {
            result.push_str(&format!(" --> {span}\n"));
        }

        if self.config.show_include_trace {
            for frame in diagnostic.include_context() {
                result.push_str(&format!("  included from '{frame}'\n"));
            }
        }

        result
    }

    fn format_compact(&self, diagnostic: &Diagnostic) -> String {
        let label = self.severity_label(diagnostic.severity());
        match diagnostic.span() {
            Some(span) => format!("{}: {}: {}", span, label, diagnostic.message()),
            None => format!("{}: {}", label, diagnostic.message()),
        }
    }
}

#[cfg(feature = "serde")]
fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(not(feature = "serde"))]
fn to_json<T: ?Sized>(_value: &T) -> Result<String> {
    Err(Error::FormatUnavailable("serde"))
}

/// Extension trait for formatting diagnostics
pub trait DiagnosticFormat {
    /// Format as human-readable text
    fn to_text(&self) -> String;

    /// Format as compact single line
    fn to_compact(&self) -> String;

    /// Format as JSON
    fn to_json(&self) -> Result<String>;
}

impl DiagnosticFormat for Diagnostic {
    fn to_text(&self) -> String {
        DiagnosticFormatter::new(Format::Text).format_text(self)
    }

    fn to_compact(&self) -> String {
        DiagnosticFormatter::new(Format::Compact).format_compact(self)
    }

    fn to_json(&self) -> Result<String> {
        DiagnosticFormatter::new(Format::Json).format(self)
    }
}
