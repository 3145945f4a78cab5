// src/report.rs
//! Console summary for a pipeline run.

use colored::Colorize;

use crate::analysis::Classification;
use crate::pipeline::AnalysisResult;

/// Prints the run summary: graph size, classification tally, and the
/// riskiest files.
pub fn print_summary(result: &AnalysisResult) {
    let (mut red, mut yellow, mut green) = (0usize, 0usize, 0usize);
    for entry in result.analysis.values() {
        match entry.classification {
            Classification::Red => red += 1,
            Classification::Yellow => yellow += 1,
            Classification::Green => green += 1,
        }
    }

    println!(
        "Analyzed {} files, {} dependency edges",
        result.graph.nodes.len(),
        result.graph.edges.len()
    );
    println!("  {} {red}", "RED (high risk):".red().bold());
    println!("  {} {yellow}", "YELLOW (medium risk):".yellow().bold());
    println!("  {} {green}", "GREEN (low risk):".green().bold());

    let cycles = result.graph.nodes.iter().filter(|n| n.in_cycle).count();
    if cycles > 0 {
        println!("  {} {cycles} files in dependency cycles", "!".red().bold());
    }

    for line in top_risks(result, 5) {
        println!("  {line}");
    }
}

/// The `limit` riskiest files, formatted one per line. Ties broken by
/// node id so output stays stable.
#[must_use]
pub fn top_risks(result: &AnalysisResult, limit: usize) -> Vec<String> {
    let mut entries: Vec<_> = result.analysis.values().collect();
    entries.sort_by(|a, b| {
        b.risk_score
            .cmp(&a.risk_score)
            .then_with(|| a.node_id.cmp(&b.node_id))
    });

    entries
        .iter()
        .take(limit)
        .filter(|entry| entry.risk_score > 0)
        .map(|entry| {
            format!(
                "{} risk={} blast={:.2}% [{}]",
                entry.file_path,
                entry.risk_score,
                entry.blast_radius.percentage,
                entry.classification.label()
            )
        })
        .collect()
}
