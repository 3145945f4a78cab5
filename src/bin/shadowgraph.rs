// src/bin/shadowgraph.rs
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use serde::Serialize;

use shadowgraph_core::record::AstDump;
use shadowgraph_core::{pipeline, report, workflow};

#[derive(Parser)]
#[command(name = "shadowgraph")]
#[command(about = "Dependency graph and migration risk analysis for Java source trees")]
struct Cli {
    /// Extractor output (ast.json with a top-level "files" array)
    input: PathBuf,

    /// Directory for graph.json, metrics.json, and analysis.json
    #[arg(long, short, default_value = "storage")]
    out: PathBuf,

    /// Also compute the fan-in closure for this node id
    #[arg(long)]
    workflow: Option<String>,

    /// Pretty-print the JSON artifacts
    #[arg(long)]
    pretty: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e:#}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let raw = fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    let dump: AstDump = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {}", cli.input.display()))?;

    let result = pipeline::analyze(dump.files)?;

    fs::create_dir_all(&cli.out)
        .with_context(|| format!("creating {}", cli.out.display()))?;
    write_json(&cli.out.join("graph.json"), &result.graph, cli.pretty)?;
    write_json(&cli.out.join("metrics.json"), &result.metrics, cli.pretty)?;
    write_json(&cli.out.join("analysis.json"), &result.analysis, cli.pretty)?;

    report::print_summary(&result);

    if let Some(target) = &cli.workflow {
        let closure = workflow::fan_in_closure(&result.graph, target)?;
        write_json(&cli.out.join("workflow.json"), &closure, cli.pretty)?;
        println!(
            "Workflow for {target}: {} nodes, {} edges",
            closure.metadata.total_nodes, closure.metadata.total_edges
        );
    }

    Ok(())
}

fn write_json<T: Serialize>(path: &Path, value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
