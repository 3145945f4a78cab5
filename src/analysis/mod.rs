// src/analysis/mod.rs
//! Risk scoring: per-node risk, convertibility, complexity, blast radius,
//! and the GREEN/YELLOW/RED classification.

pub mod analyzer;
pub mod blast;
pub mod classify;
pub mod score;

pub use analyzer::{analyze_graph, AnalysisEntry};
pub use blast::BlastRadius;
pub use classify::{classify, Classification, ClassifyConfig};
