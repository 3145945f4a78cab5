// src/analysis/analyzer.rs
//! Per-node analysis over a fully-built graph.
//!
//! Nodes are scored in parallel; every worker reads the immutable graph
//! and writes one entry, so results are independent of scheduling. The
//! entries land in a `BTreeMap` keyed by node id for deterministic
//! serialization.

use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::blast::{blast_radius, BlastRadius};
use super::classify::{classify, Classification, ClassifyConfig};
use super::score::{complexity_score, convertibility_score, risk_score};
use crate::graph::builder::GraphBuild;
use crate::graph::types::NodeMetrics;

/// The analysis verdict for one node. Recomputed wholesale each run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisEntry {
    pub node_id: String,
    pub file_path: String,
    pub risk_score: u32,
    pub complexity_score: u32,
    pub convertibility_score: u32,
    pub blast_radius: BlastRadius,
    pub classification: Classification,
    pub metrics: NodeMetrics,
}

/// Scores every node in the build.
#[must_use]
pub fn analyze_graph(build: &GraphBuild, config: &ClassifyConfig) -> BTreeMap<String, AnalysisEntry> {
    let dependents = build.graph.dependents();
    let total_nodes = build.graph.nodes.len();

    build
        .graph
        .nodes
        .par_iter()
        .filter_map(|node| {
            let metrics = build.metrics.get(&node.id)?;
            let blast = blast_radius(&dependents, total_nodes, &node.id);
            let risk = risk_score(metrics);
            let entry = AnalysisEntry {
                node_id: node.id.clone(),
                file_path: node.file_path.clone(),
                risk_score: risk,
                complexity_score: complexity_score(metrics),
                convertibility_score: convertibility_score(metrics),
                classification: classify(risk, &blast, metrics.in_cycle, config),
                blast_radius: blast,
                metrics: metrics.clone(),
            };
            Some((node.id.clone(), entry))
        })
        .collect()
}
