//! Cost analysis use case
//!
//! Wires the pipeline: parse → lower → build loop tree → evaluate. Each
//! analysis is self-contained, so batches parallelize trivially over rayon.

use crate::errors::Result;
use crate::features::cost_analysis::domain::{CostExpr, LoopNode};
use crate::features::cost_analysis::infrastructure::{ComplexityEvaluator, LoopTreeBuilder};
use crate::features::parsing::PythonParser;
use rayon::prelude::*;

/// The two outputs of one analysis: the loop-nesting tree and the symbolic
/// cost derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct CostReport {
    pub tree: LoopNode,
    pub cost: CostExpr,
}

/// Cost analysis use case trait
pub trait CostAnalysisUseCase: Send + Sync {
    /// Analyze one module's source text.
    fn analyze(&self, source: &str) -> Result<CostReport>;

    /// Analyze a batch of independent sources in parallel. Per-source
    /// failures are reported per source, not batched into one error.
    fn analyze_many(&self, sources: &[String]) -> Vec<Result<CostReport>> {
        sources.par_iter().map(|s| self.analyze(s)).collect()
    }
}

/// Cost analysis use case implementation
#[derive(Debug, Default)]
pub struct LoopCostAnalyzer;

impl LoopCostAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl CostAnalysisUseCase for LoopCostAnalyzer {
    fn analyze(&self, source: &str) -> Result<CostReport> {
        let module = PythonParser::new()?.parse_module(source)?;
        let tree = LoopTreeBuilder::build(&module.body);
        let cost = ComplexityEvaluator::evaluate(&tree);
        tracing::debug!(
            "analysis complete: {} top-level loop(s), cost {}",
            tree.children.len(),
            cost
        );
        Ok(CostReport { tree, cost })
    }
}
