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

//! Core diagnostic types

use crate::error::{Error, Result};
use crate::include::IncludeFrame;
use crate::location::{Located, Position, Span};
use std::fmt;
use std::str::FromStr;

/// Diagnostic severity levels
///
/// Only [`Severity::Error`] invalidates a document. The derived ordering
/// (`Info < Warn < Error`) is used for summaries, never for validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    /// Information - does not affect validity
    Info,
    /// Warning - questionable but still valid
    Warn,
    /// Error - the document is invalid
    Error,
}

impl Severity {
    /// Every severity, most severe first
    pub const ALL: [Severity; 3] = [Severity::Error, Severity::Warn, Severity::Info];
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warn => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(Severity::Error),
            "warn" | "warning" => Ok(Severity::Warn),
            "info" => Ok(Severity::Info),
            _ => Err(Error::UnknownSeverity(s.to_string())),
        }
    }
}

/// A single finding produced while validating a document
///
/// Severity, message and span are fixed at construction. The include trace
/// starts empty and is replaced wholesale by [`Diagnostic::set_include_context`]
/// or [`Diagnostic::with_include_context`]; it is stored innermost-first.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostic {
    severity: Severity,
    message: String,
    span: Option<Span>,
    include_context: Vec<IncludeFrame>,
}

impl Diagnostic {
    fn new(severity: Severity, message: String, span: Option<Span>) -> Self {
        Self {
            severity,
            message,
            span,
            include_context: Vec::new(),
        }
    }

    /// Error located between two explicit positions
    pub fn error_at(message: impl Into<String>, start: Position, end: Position) -> Self {
        Self::new(Severity::Error, message.into(), Some(Span::new(start, end)))
    }

    /// Error located at a parsed node
    pub fn error_at_node(message: impl Into<String>, node: &impl Located) -> Self {
        Self::error_at(message, node.start_mark(), node.end_mark())
    }

    /// Document-level error with no location
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message.into(), None)
    }

    /// Diagnostic of any severity with no location
    pub fn create(severity: Severity, message: impl Into<String>) -> Self {
        Self::new(severity, message.into(), None)
    }

    /// True unless this is an error
    pub fn is_valid(&self) -> bool {
        self.severity != Severity::Error
    }

    /// Check if this is an error
    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }

    /// Check if this is a warning
    pub fn is_warning(&self) -> bool {
        matches!(self.severity, Severity::Warn)
    }

    /// Severity level
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Human-readable message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Source span, absent for document-level findings
    pub fn span(&self) -> Option<Span> {
        self.span
    }

    /// Start of the span, if one was supplied
    pub fn start_mark(&self) -> Option<Position> {
        self.span.map(|span| span.start)
    }

    /// End of the span, if one was supplied
    pub fn end_mark(&self) -> Option<Position> {
        self.span.map(|span| span.end)
    }

    /// Name of the innermost include this diagnostic surfaced in
    ///
    /// `None` for diagnostics from the top-level document, including those
    /// that never had an include context attached.
    pub fn include_name(&self) -> Option<&str> {
        self.include_context.first().map(IncludeFrame::name)
    }

    /// Include trace, innermost first
    pub fn include_context(&self) -> &[IncludeFrame] {
        &self.include_context
    }

    /// Replace the include trace with a copy of `trace`
    ///
    /// `trace` must be innermost-first. The caller keeps ownership of its
    /// stack; later pushes and pops there do not reach this diagnostic.
    pub fn set_include_context<'a, I>(&mut self, trace: I)
    where
        I: IntoIterator<Item = &'a IncludeFrame>,
    {
        self.include_context = trace.into_iter().cloned().collect();
        log::trace!(
            "attached include context of depth {} to '{}'",
            self.include_context.len(),
            self.message
        );
    }

    /// Consuming form of [`Diagnostic::set_include_context`]
    pub fn with_include_context<'a, I>(mut self, trace: I) -> Self
    where
        I: IntoIterator<Item = &'a IncludeFrame>,
    {
        self.set_include_context(trace);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}
