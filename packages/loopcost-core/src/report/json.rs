//! JSON report generation

use crate::features::cost_analysis::application::CostReport;
use crate::features::cost_analysis::domain::{LoopKind, LoopNode};
use serde_json::{json, Value};

pub struct JsonReporter;

impl JsonReporter {
    /// Full report record: the nested tree plus the rendered expression.
    pub fn render(report: &CostReport) -> Value {
        json!({
            "tree": Self::tree_to_value(&report.tree),
            "complexity": report.cost.to_string(),
        })
    }

    /// Nested key/value form of the loop tree. For-nodes carry their
    /// iteration factor as a display string, While-nodes carry null.
    pub fn tree_to_value(node: &LoopNode) -> Value {
        let children: Vec<Value> = node.children.iter().map(Self::tree_to_value).collect();
        match node.kind {
            LoopKind::Root => json!({
                "node": "Global Root",
                "children": children,
            }),
            LoopKind::For => json!({
                "node": "For",
                "iterable": node.factor.as_ref().map(|f| f.to_string()),
                "children": children,
            }),
            LoopKind::While => json!({
                "node": "While",
                "iterable": Value::Null,
                "children": children,
            }),
        }
    }
}
