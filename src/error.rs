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

//! Error types for diagnostic parsing and rendering
//!
//! Constructing and querying diagnostics never fails. Errors only arise
//! when severities or output formats are parsed from text, or when a
//! diagnostic is rendered to JSON.

use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while parsing settings or rendering diagnostics
#[derive(Error, Debug)]
pub enum Error {
    /// A severity name that is not `error`, `warn`/`warning` or `info`
    #[error("Unknown severity '{0}'")]
    UnknownSeverity(String),

    /// An output format name that is not `text`, `compact` or `json`
    #[error("Unknown output format '{0}'")]
    UnknownFormat(String),

    /// The requested output format needs a cargo feature that is disabled
    #[error("Output format requires the '{0}' feature")]
    FormatUnavailable(&'static str),

    /// JSON serialization failed
    #[cfg(feature = "serde")]
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::UnknownSeverity("fatal".into()).to_string(),
            "Unknown severity 'fatal'"
        );
        assert_eq!(
            Error::FormatUnavailable("serde").to_string(),
            "Output format requires the 'serde' feature"
        );
    }
}
