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

//! Collecting diagnostics from a validation pass
//!
//! The reporter gathers diagnostics as a validator emits them, stamping each
//! one with the include stack it surfaced under, and summarises the result.

use crate::aggregate;
use crate::diagnostic::{Diagnostic, Severity};
use crate::include::IncludeStack;
use std::collections::BTreeMap;

/// Diagnostics of a validation pass plus their summary
#[derive(Debug, Clone)]
pub struct DiagnosticReport {
    /// All diagnostics in arrival order
    pub diagnostics: Vec<Diagnostic>,
    /// Summary statistics
    pub summary: DiagnosticSummary,
}

impl DiagnosticReport {
    /// True when the report contains no errors
    pub fn is_valid(&self) -> bool {
        self.summary.error_count == 0
    }
}

/// Counts per severity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticSummary {
    /// Total number of diagnostics
    pub total_count: usize,
    /// Number of error diagnostics
    pub error_count: usize,
    /// Number of warning diagnostics
    pub warning_count: usize,
    /// Number of info diagnostics
    pub info_count: usize,
    /// Most severe level present
    pub overall_severity: Option<Severity>,
}

/// Accumulates diagnostics during validation
#[derive(Debug, Default)]
pub struct DiagnosticReporter {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticReporter {
    /// Create an empty reporter
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    /// Add a diagnostic as-is
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Add multiple diagnostics as-is
    pub fn add_diagnostics(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    /// Add diagnostics that surfaced under `stack`, snapshotting it onto each
    pub fn extend_with_context(
        &mut self,
        diagnostics: impl IntoIterator<Item = Diagnostic>,
        stack: &IncludeStack,
    ) {
        let trace = stack.snapshot();
        self.diagnostics.extend(
            diagnostics
                .into_iter()
                .map(|diagnostic| diagnostic.with_include_context(&trace)),
        );
    }

    /// Diagnostics collected so far
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Generate a complete report
    pub fn generate_report(&self) -> DiagnosticReport {
        DiagnosticReport {
            diagnostics: self.diagnostics.clone(),
            summary: self.generate_summary(),
        }
    }

    /// Consume the reporter into a report without cloning
    pub fn into_report(self) -> DiagnosticReport {
        let summary = self.generate_summary();
        DiagnosticReport {
            diagnostics: self.diagnostics,
            summary,
        }
    }

    fn generate_summary(&self) -> DiagnosticSummary {
        let summary = DiagnosticSummary {
            total_count: self.diagnostics.len(),
            error_count: aggregate::count_by_severity(Severity::Error, &self.diagnostics),
            warning_count: aggregate::count_by_severity(Severity::Warn, &self.diagnostics),
            info_count: aggregate::count_by_severity(Severity::Info, &self.diagnostics),
            overall_severity: aggregate::highest_severity(&self.diagnostics),
        };

        log::debug!(
            "diagnostic summary: {} total, {} errors, {} warnings, {} infos",
            summary.total_count,
            summary.error_count,
            summary.warning_count,
            summary.info_count
        );

        summary
    }

    /// All error diagnostics
    pub fn errors(&self) -> Vec<&Diagnostic> {
        aggregate::filter_by_severity(Severity::Error, &self.diagnostics)
    }

    /// All warning diagnostics
    pub fn warnings(&self) -> Vec<&Diagnostic> {
        aggregate::filter_by_severity(Severity::Warn, &self.diagnostics)
    }

    /// All info diagnostics
    pub fn infos(&self) -> Vec<&Diagnostic> {
        aggregate::filter_by_severity(Severity::Info, &self.diagnostics)
    }

    /// Diagnostics grouped by severity
    pub fn group_by_severity(&self) -> BTreeMap<Severity, Vec<&Diagnostic>> {
        let mut grouped = BTreeMap::new();

        for diagnostic in &self.diagnostics {
            grouped
                .entry(diagnostic.severity())
                .or_insert_with(Vec::new)
                .push(diagnostic);
        }

        grouped
    }

    /// Diagnostics grouped by innermost include; `None` is the top-level document
    pub fn group_by_include(&self) -> BTreeMap<Option<&str>, Vec<&Diagnostic>> {
        let mut grouped = BTreeMap::new();

        for diagnostic in &self.diagnostics {
            grouped
                .entry(diagnostic.include_name())
                .or_insert_with(Vec::new)
                .push(diagnostic);
        }

        grouped
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.is_valid()
    }

    /// True when no collected diagnostic is an error
    pub fn is_valid(&self) -> bool {
        aggregate::all_valid(&self.diagnostics)
    }

    /// Remove all collected diagnostics
    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }
}
