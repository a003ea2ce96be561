//! Integration tests for diagnostics, include traces and aggregation
//!
//! Walks through a validation pass the way a document validator drives the
//! crate: raise findings, stamp include context, aggregate and report.

use pretty_assertions::assert_eq;
use rstest::rstest;
use validation_diagnostics::{
    Diagnostic, DiagnosticReporter, IncludeFrame, IncludeStack, Located, Position, Severity,
    Span, aggregate,
};

fn pos(line: usize, column: usize) -> Position {
    Position::new(line, column, 0)
}

#[test]
fn test_example_scenario() {
    let d1 = Diagnostic::error_at("missing required field 'title'", pos(3, 5), pos(3, 20));
    let d2 = Diagnostic::create(Severity::Warn, "deprecated field used");
    let results = vec![d1.clone(), d2];

    assert!(!aggregate::all_valid(&results));
    assert_eq!(aggregate::filter_by_severity(Severity::Error, &results), vec![&d1]);
    assert_eq!(d1.message(), "missing required field 'title'");
}

#[rstest]
#[case::error(Severity::Error, false)]
#[case::warn(Severity::Warn, true)]
#[case::info(Severity::Info, true)]
fn test_validity_follows_severity(#[case] severity: Severity, #[case] valid: bool) {
    let diagnostic = Diagnostic::create(severity, "finding");
    assert_eq!(diagnostic.is_valid(), valid);
    assert_eq!(aggregate::all_valid(&[diagnostic.clone()]), diagnostic.is_valid());
}

#[rstest]
#[case::first(0)]
#[case::middle(2)]
#[case::last(4)]
fn test_single_error_fails_regardless_of_position(#[case] index: usize) {
    let mut results: Vec<Diagnostic> = (0..5)
        .map(|i| Diagnostic::create(Severity::Info, format!("note {i}")))
        .collect();
    results[index] = Diagnostic::error("broken");

    assert!(!aggregate::all_valid(&results));
}

#[test]
fn test_empty_sequences() {
    assert!(aggregate::all_valid(&[]));
    for severity in Severity::ALL {
        assert!(aggregate::filter_by_severity(severity, &[]).is_empty());
    }
}

#[test]
fn test_filter_returns_exact_subsequence() {
    let results = vec![
        Diagnostic::create(Severity::Warn, "w1"),
        Diagnostic::error("e1"),
        Diagnostic::create(Severity::Info, "i1"),
        Diagnostic::create(Severity::Warn, "w2"),
        Diagnostic::error("e2"),
    ];

    for severity in Severity::ALL {
        let expected: Vec<&Diagnostic> =
            results.iter().filter(|d| d.severity() == severity).collect();
        assert_eq!(aggregate::filter_by_severity(severity, &results), expected);
    }

    let warnings: Vec<&str> = aggregate::filter_by_severity(Severity::Warn, &results)
        .into_iter()
        .map(Diagnostic::message)
        .collect();
    assert_eq!(warnings, vec!["w1", "w2"]);

    let only_errors = vec![Diagnostic::error("e")];
    assert!(aggregate::filter_by_severity(Severity::Info, &only_errors).is_empty());
}

#[test]
fn test_marks_round_trip() {
    let start = Position::new(10, 2, 120);
    let end = Position::new(12, 0, 160);

    let located = Diagnostic::error_at("bad", start, end);
    assert_eq!(located.start_mark(), Some(start));
    assert_eq!(located.end_mark(), Some(end));
    assert_eq!(located.span(), Some(Span::new(start, end)));

    let bare = Diagnostic::error("bad");
    assert_eq!(bare.start_mark(), None);
    assert_eq!(bare.end_mark(), None);
}

struct MappingNode {
    span: Span,
}

impl Located for MappingNode {
    fn start_mark(&self) -> Position {
        self.span.start
    }

    fn end_mark(&self) -> Position {
        self.span.end
    }
}

#[test]
fn test_error_at_node_matches_explicit_span() {
    let node = MappingNode {
        span: Span::new(pos(1, 0), pos(4, 0)),
    };

    assert_eq!(
        Diagnostic::error_at_node("unexpected key", &node),
        Diagnostic::error_at("unexpected key", pos(1, 0), pos(4, 0))
    );
}

#[test]
fn test_include_trace_isolation() {
    let mut stack = IncludeStack::new();
    stack.enter(IncludeFrame::at("libraries/types.raml", pos(6, 8)));
    stack.enter(IncludeFrame::new("schemas/user.json"));

    let mut diagnostic = Diagnostic::error("invalid schema");
    diagnostic.set_include_context(stack.frames());
    let captured = diagnostic.include_context().to_vec();

    stack.leave();
    stack.leave();
    stack.enter(IncludeFrame::new("other.raml"));

    assert_eq!(diagnostic.include_context(), captured.as_slice());
    assert_eq!(diagnostic.include_name(), Some("schemas/user.json"));
}

#[test]
fn test_include_trace_from_owned_vec_is_copied() {
    let mut trace = vec![IncludeFrame::new("inner.yaml"), IncludeFrame::new("outer.yaml")];
    let diagnostic = Diagnostic::create(Severity::Info, "note").with_include_context(&trace);

    trace.remove(0);
    trace.push(IncludeFrame::new("late.yaml"));

    assert_eq!(diagnostic.include_name(), Some("inner.yaml"));
    assert_eq!(diagnostic.include_context().len(), 2);
}

#[test]
fn test_include_name_without_context_is_none() {
    assert_eq!(Diagnostic::error("x").include_name(), None);
    assert_eq!(
        Diagnostic::error("x")
            .with_include_context(IncludeStack::new().frames())
            .include_name(),
        None
    );
}

#[test]
fn test_reporter_over_nested_includes() {
    let mut reporter = DiagnosticReporter::new();
    let mut stack = IncludeStack::new();

    reporter.add_diagnostic(Diagnostic::create(Severity::Info, "using default media type"));

    stack.enter(IncludeFrame::new("types.raml"));
    reporter.extend_with_context(
        vec![Diagnostic::create(Severity::Warn, "deprecated field used")],
        &stack,
    );

    stack.enter(IncludeFrame::new("user.json"));
    reporter.extend_with_context(vec![Diagnostic::error("missing 'id'")], &stack);
    stack.leave();
    stack.leave();

    let report = reporter.generate_report();
    assert_eq!(report.summary.total_count, 3);
    assert_eq!(report.summary.error_count, 1);
    assert_eq!(report.summary.overall_severity, Some(Severity::Error));
    assert!(!report.is_valid());

    let error = reporter.errors()[0];
    let names: Vec<&str> = error.include_context().iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["user.json", "types.raml"]);
}
