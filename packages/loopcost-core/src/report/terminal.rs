//! Terminal (pretty-print) report generation

use crate::features::cost_analysis::application::CostReport;
use crate::features::cost_analysis::domain::{LoopKind, LoopNode};
use std::fmt::Write;

pub struct TerminalReporter;

impl TerminalReporter {
    pub fn print(report: &CostReport) {
        println!("Tree structure:");
        print!("{}", Self::render_tree(&report.tree));
        println!();
        println!("Estimated Time Complexity Expression:");
        println!("{}", report.cost);
    }

    /// Indented text display of the loop tree, one node per line.
    pub fn render_tree(node: &LoopNode) -> String {
        let mut out = String::new();
        Self::render_node(node, 0, &mut out);
        out
    }

    fn render_node(node: &LoopNode, indent: usize, out: &mut String) {
        let spacing = " ".repeat(indent);
        match node.kind {
            LoopKind::Root => {
                let _ = writeln!(out, "{}Global Root", spacing);
            }
            LoopKind::For => {
                let factor = node
                    .factor
                    .as_ref()
                    .map(|f| f.to_string())
                    .unwrap_or_default();
                let _ = writeln!(out, "{}For (iterable: {})", spacing, factor);
            }
            LoopKind::While => {
                let _ = writeln!(out, "{}While", spacing);
            }
        }
        for child in &node.children {
            Self::render_node(child, indent + 4, out);
        }
    }
}
