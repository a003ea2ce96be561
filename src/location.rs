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

//! Source positions and spans reported by the document parser

use std::fmt;

/// A position in the source document (0-indexed)
///
/// Mirrors the marks a markup parser attaches to every node: the line and
/// column of the character plus its character offset from the start of the
/// document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Line number (0-indexed)
    pub line: usize,
    /// Column number (0-indexed, in characters)
    pub column: usize,
    /// Character offset from the start of the document
    pub offset: usize,
}

impl Position {
    /// Create a new position
    pub const fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// Create a position from a character offset in the source text
    ///
    /// Offsets past the end of the text resolve to the end of the text.
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let mut line = 0;
        let mut column = 0;
        let mut current = 0;

        for ch in source.chars() {
            if current >= offset {
                break;
            }

            if ch == '\n' {
                line += 1;
                column = 0;
            } else {
                column += 1;
            }

            current += 1;
        }

        Self {
            line,
            column,
            offset: current,
        }
    }

    /// Convert to 1-indexed `(line, column)` for display
    pub fn to_display(&self) -> (usize, usize) {
        (self.line + 1, self.column + 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (line, col) = self.to_display();
        write!(f, "{line}:{col}")
    }
}

/// A start/end pair locating a finding in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// Start position
    pub start: Position,
    /// End position (exclusive)
    pub end: Position,
}

impl Span {
    /// Create a new span
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Create a span from character offsets
    pub fn from_offsets(source: &str, start_offset: usize, end_offset: usize) -> Self {
        Self {
            start: Position::from_offset(source, start_offset),
            end: Position::from_offset(source, end_offset),
        }
    }

    /// Check if this span contains a position
    ///
    /// Ordering is by `(line, column)`; offsets are not consulted.
    pub fn contains(&self, pos: Position) -> bool {
        let key = |p: Position| (p.line, p.column);
        key(pos) >= key(self.start) && key(pos) < key(self.end)
    }

    /// Smallest span covering both spans, ordered by `(line, column)`
    pub fn merge(&self, other: &Span) -> Span {
        let key = |p: &Position| (p.line, p.column);
        let start = if key(&self.start) <= key(&other.start) {
            self.start
        } else {
            other.start
        };
        let end = if key(&self.end) >= key(&other.end) {
            self.end
        } else {
            other.end
        };

        Span { start, end }
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.line == self.end.line {
            write!(
                f,
                "{}:{}-{}",
                self.start.line + 1,
                self.start.column + 1,
                self.end.column + 1
            )
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// A parsed node that knows where it sits in the source document
///
/// Implemented by the upstream parser's node type so diagnostics can be
/// raised against a node without extracting its marks first.
pub trait Located {
    /// Position of the node's first character
    fn start_mark(&self) -> Position;

    /// Position just past the node's last character
    fn end_mark(&self) -> Position;

    /// The node's extent as a span
    fn span(&self) -> Span {
        Span::new(self.start_mark(), self.end_mark())
    }
}

impl Located for Span {
    fn start_mark(&self) -> Position {
        self.start
    }

    fn end_mark(&self) -> Position {
        self.end
    }
}

impl<T: Located + ?Sized> Located for &T {
    fn start_mark(&self) -> Position {
        (**self).start_mark()
    }

    fn end_mark(&self) -> Position {
        (**self).end_mark()
    }
}
