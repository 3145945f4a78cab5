// src/analysis/blast.rs
//! Blast radius: how much of the graph needs re-verification if a node
//! changes. Computed by reverse reachability over dependency edges.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};

/// Reverse-reachability measure for one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlastRadius {
    /// Nodes that transitively depend on this one. Excludes the node
    /// itself, even when it sits on a cycle.
    pub affected_nodes: u32,
    pub total_nodes: u32,
    /// affectedNodes / totalNodes * 100, rounded to two decimals.
    pub percentage: f64,
}

/// BFS over the reverse adjacency map (`to -> [from]`) starting at
/// `node_id`.
#[must_use]
pub fn blast_radius(
    dependents: &HashMap<&str, Vec<&str>>,
    total_nodes: usize,
    node_id: &str,
) -> BlastRadius {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<&str> = VecDeque::new();
    queue.push_back(node_id);

    while let Some(current) = queue.pop_front() {
        for &dependent in dependents.get(current).into_iter().flatten() {
            if dependent != node_id && visited.insert(dependent) {
                queue.push_back(dependent);
            }
        }
    }

    let affected = visited.len();
    let percentage = if total_nodes == 0 {
        0.0
    } else {
        round2(affected as f64 / total_nodes as f64 * 100.0)
    };

    BlastRadius {
        affected_nodes: affected as u32,
        total_nodes: total_nodes as u32,
        percentage,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
