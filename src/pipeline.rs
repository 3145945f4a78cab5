// src/pipeline.rs
//! The engine front door: records in, graph + metrics + analysis out.
//!
//! Stateless by design. Callers that want a "last analyzed repo" cache
//! hold onto the returned result themselves.

use std::collections::BTreeMap;

use crate::analysis::{analyze_graph, AnalysisEntry, ClassifyConfig};
use crate::error::Result;
use crate::graph::{self, DependencyGraph, NodeMetrics};
use crate::record::{FileRecord, RecordSet};

/// Everything one pipeline run produces.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub graph: DependencyGraph,
    pub metrics: BTreeMap<String, NodeMetrics>,
    pub analysis: BTreeMap<String, AnalysisEntry>,
}

/// Runs the full pipeline over a record collection.
///
/// # Errors
///
/// Returns `InvalidInput` on duplicate file paths. Unresolvable imports
/// and missing optional fields are not errors.
pub fn analyze(records: Vec<FileRecord>) -> Result<AnalysisResult> {
    let records = RecordSet::new(records)?;
    let build = graph::build(&records);
    let analysis = analyze_graph(&build, &ClassifyConfig::default());

    Ok(AnalysisResult {
        graph: build.graph,
        metrics: build.metrics,
        analysis,
    })
}
