// src/graph/types.rs
//! Wire-shaped graph types shared by the builder, the scorer, and
//! downstream JSON consumers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single file in the dependency graph.
///
/// Immutable once the build completes; `in_cycle` is the only field the
/// builder writes after node creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub file_path: String,
    pub package_name: String,
    pub class_names: Vec<String>,
    pub reads_from_db: bool,
    pub writes_to_db: bool,
    pub in_cycle: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    File,
}

/// A directed dependency: `from` imports something defined in `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    #[serde(rename = "type")]
    pub kind: EdgeKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EdgeKind {
    DependsOn,
}

/// The full graph, as exposed to consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DependencyGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl DependencyGraph {
    /// Reverse adjacency: to-id -> from-ids (the node's dependents).
    #[must_use]
    pub fn dependents(&self) -> HashMap<&str, Vec<&str>> {
        let mut dependents: HashMap<&str, Vec<&str>> = HashMap::new();
        for edge in &self.edges {
            dependents
                .entry(edge.to.as_str())
                .or_default()
                .push(edge.from.as_str());
        }
        dependents
    }

    #[must_use]
    pub fn contains(&self, node_id: &str) -> bool {
        self.nodes.iter().any(|node| node.id == node_id)
    }
}

/// Per-node coupling and structural metrics, derived during the build.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeMetrics {
    pub node_id: String,
    pub file_path: String,
    pub fan_in: u32,
    pub fan_out: u32,
    pub reads_from_db: bool,
    pub writes_to_db: bool,
    pub in_cycle: bool,

    pub line_count: u32,
    pub method_count: u32,
    pub class_count: u32,
    pub import_count: u32,
    pub field_count: u32,
    pub catch_block_count: u32,
    pub static_method_count: u32,
    pub has_inheritance: bool,
    pub implements_interfaces: bool,
    pub uses_annotations: bool,
    pub uses_reflection: bool,
    pub uses_threading: bool,
    pub uses_streams: bool,
    pub has_inner_classes: bool,
    pub throws_exceptions: bool,
    pub uses_generics: bool,

    /// fanIn + fanOut, kept for consumers that sort by coupling.
    pub coupling_score: u32,
}
