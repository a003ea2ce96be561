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

//! Pure helpers over sequences of diagnostics

use crate::diagnostic::{Diagnostic, Severity};

/// True when no diagnostic is an error
///
/// Stops at the first error. An empty sequence is valid.
pub fn all_valid(results: &[Diagnostic]) -> bool {
    results.iter().all(Diagnostic::is_valid)
}

/// Diagnostics with exactly `severity`, in their original order
pub fn filter_by_severity(severity: Severity, results: &[Diagnostic]) -> Vec<&Diagnostic> {
    results
        .iter()
        .filter(|d| d.severity() == severity)
        .collect()
}

/// Number of diagnostics with exactly `severity`
pub fn count_by_severity(severity: Severity, results: &[Diagnostic]) -> usize {
    results.iter().filter(|d| d.severity() == severity).count()
}

/// Most severe level present, `None` for an empty sequence
pub fn highest_severity(results: &[Diagnostic]) -> Option<Severity> {
    results.iter().map(Diagnostic::severity).max()
}
