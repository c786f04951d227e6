//! End-to-end pipeline tests: source text in, tree + expression out.

use loopcost_core::report::{JsonReporter, TerminalReporter};
use loopcost_core::{
    CostAnalysisUseCase, CostReport, IterationFactor, LoopCostAnalyzer, LoopKind, LoopcostError,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn analyze(source: &str) -> CostReport {
    LoopCostAnalyzer::new().analyze(source).unwrap()
}

fn factor_of(report: &CostReport, index: usize) -> &IterationFactor {
    report.tree.children[index].factor.as_ref().unwrap()
}

#[test]
fn constant_range_loop() {
    let report = analyze("for i in range(5):\n    pass\n");
    assert_eq!(factor_of(&report, 0), &IterationFactor::Constant);
    assert_eq!(report.cost.to_string(), "1");
}

#[test]
fn range_with_identifier_stop() {
    let report = analyze("for i in range(1, n):\n    pass\n");
    assert_eq!(factor_of(&report, 0), &IterationFactor::Length("n".to_string()));
    assert_eq!(report.cost.to_string(), "len(n)");
}

#[test]
fn range_scan_stops_at_first_nonliteral_argument() {
    // n is the first non-literal argument; len(x) is never reached
    let report = analyze("for i in range(n, len(x)):\n    pass\n");
    assert_eq!(report.cost.to_string(), "len(n)");

    // reordering the non-literal arguments changes the result
    let report = analyze("for i in range(len(x), n):\n    pass\n");
    assert_eq!(report.cost.to_string(), "len(x)");
}

#[test]
fn range_over_len_call() {
    let report = analyze("for i in range(len(x)):\n    pass\n");
    assert_eq!(factor_of(&report, 0), &IterationFactor::Length("x".to_string()));
}

#[test]
fn two_top_level_loops_sum() {
    let source = "\
for i in range(1,n):
    for j in ['a', 'b', 'c']:
        print(i, j)
for i in num:
    print(1)
";
    let report = analyze(source);

    assert_eq!(report.tree.children.len(), 2);
    assert_eq!(report.tree.children[0].children.len(), 1);
    assert_eq!(
        report.tree.children[0].children[0].factor,
        Some(IterationFactor::Constant)
    );
    assert_eq!(report.cost.to_string(), "len(n) + len(num)");
}

#[test]
fn while_loops_degrade_to_unknown() {
    let report = analyze("while x < 10:\n    x += 1\n");
    assert_eq!(report.tree.children[0].kind, LoopKind::While);
    assert_eq!(report.cost.to_string(), "?");

    // a constant-iterable nested loop still collapses to bare `?`
    let report = analyze("while x < 10:\n    for i in range(3):\n        pass\n");
    assert_eq!(report.cost.to_string(), "?");

    // a nontrivial nested loop multiplies
    let report = analyze("while x < 10:\n    for i in xs:\n        pass\n");
    assert_eq!(report.cost.to_string(), "?*(len(xs))");
}

#[test]
fn loops_are_found_inside_function_bodies() {
    let source = "\
def process(rows):
    for row in rows:
        if row:
            for cell in row:
                print(cell)
";
    let report = analyze(source);
    assert_eq!(report.tree.depth(), 2);
    assert_eq!(report.cost.to_string(), "len(rows)*(len(row))");
}

#[test]
fn dynamic_iteration_sources_degrade_conservatively() {
    let report = analyze("for i in obj.items():\n    pass\n");
    assert_eq!(factor_of(&report, 0), &IterationFactor::UnresolvedLength);
    assert_eq!(report.cost.to_string(), "len(other)");
}

#[test]
fn no_loops_is_the_identity() {
    let report = analyze("x = 1\nprint(x)\n");
    assert!(report.tree.children.is_empty());
    assert_eq!(report.cost.to_string(), "1");
}

#[test]
fn analysis_is_idempotent() {
    let source = "for i in range(1, n):\n    while i:\n        pass\n";
    let first = analyze(source);
    let second = analyze(source);
    assert_eq!(first.tree, second.tree);
    assert_eq!(first.cost, second.cost);
}

#[test]
fn invalid_source_short_circuits_before_analysis() {
    let err = LoopCostAnalyzer::new()
        .analyze("def broken(:\n    pass\n")
        .unwrap_err();
    assert!(matches!(err, LoopcostError::Parse(_)));
}

#[test]
fn json_record_matches_the_nested_form() {
    let report = analyze("for i in num:\n    print(1)\n");
    assert_eq!(
        JsonReporter::render(&report),
        json!({
            "tree": {
                "node": "Global Root",
                "children": [
                    {"node": "For", "iterable": "len(num)", "children": []}
                ],
            },
            "complexity": "len(num)",
        })
    );
}

#[test]
fn terminal_tree_display() {
    let report = analyze("for i in range(1,n):\n    for j in ['a']:\n        pass\n");
    assert_eq!(
        TerminalReporter::render_tree(&report.tree),
        "Global Root\n    For (iterable: len(n))\n        For (iterable: c)\n"
    );
}
