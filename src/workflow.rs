// src/workflow.rs
//! Fan-in closure query: the subgraph of everything that transitively
//! depends on a target node, for scoped visualization and review.

use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::error::{AnalyzerError, Result};
use crate::graph::types::{DependencyGraph, GraphEdge, GraphNode};

/// A dependency-closure subgraph around one target node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workflow {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub metadata: WorkflowMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowMetadata {
    pub total_nodes: usize,
    pub total_edges: usize,
}

/// Computes the fan-in closure of `target`: the target plus every node
/// that imports it, directly or transitively. Edges are kept only when
/// both endpoints are inside the closure.
///
/// # Errors
///
/// Returns `NodeNotFound` if `target` is not a node id in the graph.
/// An empty closure is not conflated with a missing node.
pub fn fan_in_closure(graph: &DependencyGraph, target: &str) -> Result<Workflow> {
    if !graph.contains(target) {
        return Err(AnalyzerError::NodeNotFound(target.to_string()));
    }

    let dependents = graph.dependents();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<&str> = VecDeque::new();
    visited.insert(target);
    queue.push_back(target);

    while let Some(current) = queue.pop_front() {
        for &dependent in dependents.get(current).into_iter().flatten() {
            if visited.insert(dependent) {
                queue.push_back(dependent);
            }
        }
    }

    let nodes: Vec<GraphNode> = graph
        .nodes
        .iter()
        .filter(|node| visited.contains(node.id.as_str()))
        .cloned()
        .collect();
    let edges: Vec<GraphEdge> = graph
        .edges
        .iter()
        .filter(|edge| {
            visited.contains(edge.from.as_str()) && visited.contains(edge.to.as_str())
        })
        .cloned()
        .collect();

    let metadata = WorkflowMetadata {
        total_nodes: nodes.len(),
        total_edges: edges.len(),
    };

    Ok(Workflow { nodes, edges, metadata })
}
