//! Loopcost CLI
//!
//! Static loop-nesting complexity estimate for one Python source.
//!
//! # Usage
//!
//! ```bash
//! # Analyze a file
//! cargo run --bin loopcost -- script.py
//!
//! # Analyze stdin
//! cat script.py | cargo run --bin loopcost
//!
//! # Built-in sample, JSON output
//! cargo run --bin loopcost -- --sample --json
//! ```

use clap::Parser;
use loopcost_core::report::{JsonReporter, TerminalReporter};
use loopcost_core::{CostAnalysisUseCase, LoopCostAnalyzer};
use std::io::Read;
use std::path::PathBuf;

/// Demo snippet: two top-level loops, the first one nested.
const SAMPLE: &str = "\
for i in range(1,n):
    for j in ['a', 'b', 'c']:
        print(i, j)
for i in num:
    print(1)
";

#[derive(Parser)]
#[command(name = "loopcost")]
#[command(about = "Static loop-nesting complexity estimator for Python", long_about = None)]
struct Cli {
    /// Python source file (reads stdin when omitted)
    file: Option<PathBuf>,

    /// Analyze the built-in sample snippet instead of a file
    #[arg(long)]
    sample: bool,

    /// Emit a JSON record instead of the text report
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    let cli = Cli::parse();

    let source = if cli.sample {
        SAMPLE.to_string()
    } else if let Some(path) = &cli.file {
        std::fs::read_to_string(path)?
    } else {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    };

    let report = LoopCostAnalyzer::new().analyze(&source)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&JsonReporter::render(&report))?);
    } else {
        TerminalReporter::print(&report);
    }

    Ok(())
}
