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

//! Validation diagnostics for structured documents
//!
//! A [`Diagnostic`] is one finding from validating a document parsed from a
//! markup format: a severity, a message, an optional source span and the
//! trace of included documents it surfaced in. The [`aggregate`] helpers
//! answer collection-level questions (is everything valid, which findings
//! have a given severity), [`DiagnosticReporter`] collects findings during a
//! validation pass and [`DiagnosticFormatter`] renders them.
//!
//! ```
//! use validation_diagnostics::{Diagnostic, Position, Severity, aggregate};
//!
//! let missing = Diagnostic::error_at(
//!     "missing required field 'title'",
//!     Position::new(3, 5, 0),
//!     Position::new(3, 20, 0),
//! );
//! let deprecated = Diagnostic::create(Severity::Warn, "deprecated field used");
//! let results = vec![missing.clone(), deprecated];
//!
//! assert!(!aggregate::all_valid(&results));
//! assert_eq!(aggregate::filter_by_severity(Severity::Error, &results), vec![&missing]);
//! ```

#![warn(missing_docs)]

pub mod aggregate;
pub mod diagnostic;
pub mod error;
pub mod formatter;
pub mod include;
pub mod location;
pub mod reporter;

pub use aggregate::{all_valid, filter_by_severity};
pub use diagnostic::{Diagnostic, Severity};
pub use error::{Error, Result};
pub use formatter::{DiagnosticFormat, DiagnosticFormatter, Format, FormatterConfig};
pub use include::{IncludeFrame, IncludeStack};
pub use location::{Located, Position, Span};
pub use reporter::{DiagnosticReport, DiagnosticReporter, DiagnosticSummary};
