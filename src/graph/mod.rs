// src/graph/mod.rs
//! Dependency graph construction from per-file import lists.
//!
//! Imports are resolved textually against known package and class names;
//! nothing here performs compiler-accurate symbol binding.

pub mod builder;
pub mod resolve;
pub mod scc;
pub mod types;

pub use builder::{build, GraphBuild};
pub use resolve::ResolutionIndex;
pub use types::{DependencyGraph, EdgeKind, GraphEdge, GraphNode, NodeMetrics};
