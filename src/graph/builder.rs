// src/graph/builder.rs
//! Graph construction: node assignment, edge resolution, cycle marking,
//! and fan-in/fan-out counting.

use std::collections::{BTreeMap, HashSet};

use super::resolve::ResolutionIndex;
use super::scc;
use super::types::{DependencyGraph, EdgeKind, GraphEdge, GraphNode, NodeKind, NodeMetrics};
use crate::record::{FileRecord, RecordSet};

/// A fully-built graph plus its per-node metrics.
#[derive(Debug, Clone)]
pub struct GraphBuild {
    pub graph: DependencyGraph,
    pub metrics: BTreeMap<String, NodeMetrics>,
}

/// Node ids are a stable function of input position: `file_<index>`.
#[must_use]
pub fn node_id(index: usize) -> String {
    format!("file_{index}")
}

/// Builds the dependency graph for a record collection.
///
/// Deterministic: identical input yields identical node ids, edge order,
/// and metrics. Unresolvable imports are dropped, not errors; an empty
/// collection yields an empty graph.
#[must_use]
pub fn build(records: &RecordSet) -> GraphBuild {
    let records = records.records();
    let index = ResolutionIndex::build(records);

    let (edges, adjacency) = build_edges(records, &index);
    let in_cycle = scc::cycle_members(records.len(), &adjacency);
    let nodes = build_nodes(records, &in_cycle);
    let metrics = build_metrics(records, &edges, &in_cycle);

    GraphBuild {
        graph: DependencyGraph { nodes, edges },
        metrics,
    }
}

fn build_nodes(records: &[FileRecord], in_cycle: &[bool]) -> Vec<GraphNode> {
    records
        .iter()
        .enumerate()
        .map(|(idx, record)| GraphNode {
            id: node_id(idx),
            kind: NodeKind::File,
            file_path: record.file_path.clone(),
            package_name: record
                .package_name
                .clone()
                .unwrap_or_else(|| "default".to_string()),
            class_names: record.class_names.clone(),
            reads_from_db: record.reads_from_db,
            writes_to_db: record.writes_to_db,
            in_cycle: in_cycle[idx],
        })
        .collect()
}

/// Resolves imports to edges, de-duplicated per ordered (from, to) pair.
/// Self-edges are excluded. Also returns the index-based adjacency lists
/// used for cycle detection.
fn build_edges(
    records: &[FileRecord],
    index: &ResolutionIndex,
) -> (Vec<GraphEdge>, Vec<Vec<usize>>) {
    let mut edges = Vec::new();
    let mut adjacency = vec![Vec::new(); records.len()];

    for (from, record) in records.iter().enumerate() {
        let mut seen: HashSet<usize> = HashSet::new();
        for import in &record.imports {
            let Some(to) = index.resolve(import) else {
                continue;
            };
            if to == from || !seen.insert(to) {
                continue;
            }
            edges.push(GraphEdge {
                from: node_id(from),
                to: node_id(to),
                kind: EdgeKind::DependsOn,
            });
            adjacency[from].push(to);
        }
    }

    (edges, adjacency)
}

fn build_metrics(
    records: &[FileRecord],
    edges: &[GraphEdge],
    in_cycle: &[bool],
) -> BTreeMap<String, NodeMetrics> {
    let mut fan_in = vec![0u32; records.len()];
    let mut fan_out = vec![0u32; records.len()];
    for edge in edges {
        if let (Some(from), Some(to)) = (parse_id(&edge.from), parse_id(&edge.to)) {
            fan_out[from] += 1;
            fan_in[to] += 1;
        }
    }

    records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let metrics = NodeMetrics {
                node_id: node_id(idx),
                file_path: record.file_path.clone(),
                fan_in: fan_in[idx],
                fan_out: fan_out[idx],
                reads_from_db: record.reads_from_db,
                writes_to_db: record.writes_to_db,
                in_cycle: in_cycle[idx],
                line_count: record.line_count,
                method_count: record.method_count,
                class_count: record.class_count,
                import_count: record.import_count,
                field_count: record.field_count,
                catch_block_count: record.catch_block_count,
                static_method_count: record.static_method_count,
                has_inheritance: record.has_inheritance,
                implements_interfaces: record.implements_interfaces,
                uses_annotations: record.uses_annotations,
                uses_reflection: record.uses_reflection,
                uses_threading: record.uses_threading,
                uses_streams: record.uses_streams,
                has_inner_classes: record.has_inner_classes,
                throws_exceptions: record.throws_exceptions,
                uses_generics: record.uses_generics,
                coupling_score: fan_in[idx] + fan_out[idx],
            };
            (node_id(idx), metrics)
        })
        .collect()
}

fn parse_id(id: &str) -> Option<usize> {
    id.strip_prefix("file_")?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(path: &str, package: &str, classes: &[&str], imports: &[&str]) -> FileRecord {
        FileRecord {
            file_path: path.into(),
            package_name: (!package.is_empty()).then(|| package.to_string()),
            class_names: classes.iter().map(ToString::to_string).collect(),
            imports: imports.iter().map(ToString::to_string).collect(),
            ..Default::default()
        }
    }

    fn build_from(records: Vec<FileRecord>) -> GraphBuild {
        build(&RecordSet::new(records).unwrap())
    }

    #[test]
    fn test_empty_input_empty_graph() {
        let result = build_from(Vec::new());
        assert!(result.graph.nodes.is_empty());
        assert!(result.graph.edges.is_empty());
        assert!(result.metrics.is_empty());
    }

    #[test]
    fn test_stable_node_ids_in_input_order() {
        let result = build_from(vec![
            record("B.java", "com.b", &["B"], &[]),
            record("A.java", "com.a", &["A"], &[]),
        ]);
        assert_eq!(result.graph.nodes[0].id, "file_0");
        assert_eq!(result.graph.nodes[0].file_path, "B.java");
        assert_eq!(result.graph.nodes[1].id, "file_1");
    }

    #[test]
    fn test_edge_from_resolved_import() {
        let result = build_from(vec![
            record("Svc.java", "com.svc", &["Svc"], &["com.dao.Dao"]),
            record("Dao.java", "com.dao", &["Dao"], &[]),
        ]);
        assert_eq!(result.graph.edges.len(), 1);
        assert_eq!(result.graph.edges[0].from, "file_0");
        assert_eq!(result.graph.edges[0].to, "file_1");
    }

    #[test]
    fn test_unresolved_imports_dropped() {
        let result = build_from(vec![record(
            "Svc.java",
            "com.svc",
            &["Svc"],
            &["java.util.List", "java.io.IOException"],
        )]);
        assert!(result.graph.edges.is_empty());
    }

    #[test]
    fn test_self_imports_excluded() {
        let result = build_from(vec![record(
            "Svc.java",
            "com.svc",
            &["Svc", "SvcHelper"],
            &["com.svc.SvcHelper"],
        )]);
        assert!(result.graph.edges.is_empty());
    }

    #[test]
    fn test_edges_deduplicated_per_ordered_pair() {
        // Two imports resolving to the same target file produce one edge.
        let result = build_from(vec![
            record(
                "Svc.java",
                "com.svc",
                &["Svc"],
                &["com.dao.Dao", "com.dao.DaoHelper"],
            ),
            record("Dao.java", "com.dao", &["Dao", "DaoHelper"], &[]),
        ]);
        assert_eq!(result.graph.edges.len(), 1);
        let metrics = &result.metrics["file_1"];
        assert_eq!(metrics.fan_in, 1);
    }

    #[test]
    fn test_fan_counts_match_edges() {
        let result = build_from(vec![
            record("A.java", "com.x", &["A"], &["com.x.Hub"]),
            record("B.java", "com.x", &["B"], &["com.x.Hub"]),
            record("Hub.java", "com.x", &["Hub"], &["com.x.Types"]),
            record("Types.java", "com.x", &["Types"], &[]),
        ]);
        let hub = &result.metrics["file_2"];
        assert_eq!(hub.fan_in, 2);
        assert_eq!(hub.fan_out, 1);
        assert_eq!(hub.coupling_score, 3);

        for (id, metrics) in &result.metrics {
            let fan_in = result.graph.edges.iter().filter(|e| &e.to == id).count();
            let fan_out = result.graph.edges.iter().filter(|e| &e.from == id).count();
            assert_eq!(metrics.fan_in as usize, fan_in);
            assert_eq!(metrics.fan_out as usize, fan_out);
        }
    }

    #[test]
    fn test_three_node_cycle_marked() {
        let result = build_from(vec![
            record("A.java", "p", &["A"], &["p.B"]),
            record("B.java", "p", &["B"], &["p.C"]),
            record("C.java", "p", &["C"], &["p.A"]),
            record("D.java", "p", &["D"], &[]),
        ]);
        let cycle_flags: Vec<bool> = result.graph.nodes.iter().map(|n| n.in_cycle).collect();
        assert_eq!(cycle_flags, vec![true, true, true, false]);
        assert!(result.metrics["file_0"].in_cycle);
        assert!(!result.metrics["file_3"].in_cycle);
    }

    #[test]
    fn test_no_dangling_edges() {
        let result = build_from(vec![
            record("A.java", "p", &["A"], &["p.B", "ghost.Missing"]),
            record("B.java", "p", &["B"], &["p.A"]),
        ]);
        let ids: Vec<&str> = result.graph.nodes.iter().map(|n| n.id.as_str()).collect();
        for edge in &result.graph.edges {
            assert!(ids.contains(&edge.from.as_str()));
            assert!(ids.contains(&edge.to.as_str()));
        }
    }

    #[test]
    fn test_determinism() {
        let records = vec![
            record("A.java", "p", &["A"], &["p.B", "p.C"]),
            record("B.java", "p", &["B"], &["p.C"]),
            record("C.java", "p", &["C"], &["p.A"]),
        ];
        let first = build_from(records.clone());
        let second = build_from(records);
        assert_eq!(
            serde_json::to_string(&first.graph).unwrap(),
            serde_json::to_string(&second.graph).unwrap()
        );
        assert_eq!(
            serde_json::to_string(&first.metrics).unwrap(),
            serde_json::to_string(&second.metrics).unwrap()
        );
    }

    #[test]
    fn test_missing_package_defaults() {
        let result = build_from(vec![record("Main.java", "", &["Main"], &[])]);
        assert_eq!(result.graph.nodes[0].package_name, "default");
    }
}
