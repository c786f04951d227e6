//! Cost analysis application layer

pub mod analyze_usecase;

pub use analyze_usecase::{CostAnalysisUseCase, CostReport, LoopCostAnalyzer};
