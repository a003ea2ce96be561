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

//! Include frames and the resolver-side include stack

use crate::location::Position;
use std::fmt;

/// One level of document inclusion
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IncludeFrame {
    /// Identifier of the included resource (path, URL or alias)
    pub name: String,
    /// Where the include directive sits in the including document
    pub location: Option<Position>,
}

impl IncludeFrame {
    /// Create a frame for an included resource
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: None,
        }
    }

    /// Create a frame recording where the include directive appeared
    pub fn at(name: impl Into<String>, location: Position) -> Self {
        Self {
            name: name.into(),
            location: Some(location),
        }
    }

    /// Identifier of the included resource
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for IncludeFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{} ({})", self.name, location),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Stack of includes the resolver is currently inside
///
/// Frames are kept in entry order internally; every read-side view is
/// innermost-first, which is the order diagnostics store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncludeStack {
    frames: Vec<IncludeFrame>,
}

impl IncludeStack {
    /// Create an empty stack (top-level document)
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Descend into an included document
    pub fn enter(&mut self, frame: IncludeFrame) {
        self.frames.push(frame);
    }

    /// Return from the innermost included document
    pub fn leave(&mut self) -> Option<IncludeFrame> {
        let frame = self.frames.pop();
        if frame.is_none() {
            log::warn!("left an include while already at the top-level document");
        }
        frame
    }

    /// Number of nested includes
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// True at the top-level document
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Innermost include, if any
    pub fn current(&self) -> Option<&IncludeFrame> {
        self.frames.last()
    }

    /// Frames, innermost first
    pub fn frames(&self) -> impl Iterator<Item = &IncludeFrame> {
        self.frames.iter().rev()
    }

    /// Owned, innermost-first copy of the current stack
    pub fn snapshot(&self) -> Vec<IncludeFrame> {
        self.frames().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_views_are_innermost_first() {
        let mut stack = IncludeStack::new();
        stack.enter(IncludeFrame::new("types.raml"));
        stack.enter(IncludeFrame::new("schemas/user.json"));

        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.current().map(IncludeFrame::name), Some("schemas/user.json"));

        let names: Vec<&str> = stack.frames().map(IncludeFrame::name).collect();
        assert_eq!(names, vec!["schemas/user.json", "types.raml"]);
        assert_eq!(stack.snapshot()[0].name, "schemas/user.json");
    }

    #[test]
    fn test_leave_unwinds() {
        let mut stack = IncludeStack::new();
        stack.enter(IncludeFrame::new("a.yaml"));

        assert_eq!(stack.leave(), Some(IncludeFrame::new("a.yaml")));
        assert!(stack.is_empty());
        assert_eq!(stack.leave(), None);
    }

    #[test]
    fn test_frame_display() {
        assert_eq!(IncludeFrame::new("a.yaml").to_string(), "a.yaml");
        assert_eq!(
            IncludeFrame::at("a.yaml", Position::new(4, 2, 40)).to_string(),
            "a.yaml (5:3)"
        );
    }
}
