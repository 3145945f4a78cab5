// src/graph/resolve.rs
//! Textual import resolution.
//!
//! Maps an import string to a known node without symbol binding: keys are
//! fully-qualified class names, bare class names, and bare package names.
//! This is a heuristic with known false positives (two packages declaring
//! the same simple class name) and false negatives (imports of files the
//! extractor never saw). It is isolated here so the policy can change
//! without touching the builder or the scorer.

use std::collections::HashMap;

use crate::record::FileRecord;

/// Lookup table from name -> node index.
///
/// Built in node-id order; the first file declaring a name wins and later
/// declarations never overwrite it, which keeps ambiguous simple-name
/// matches deterministic.
#[derive(Debug, Default)]
pub struct ResolutionIndex {
    by_name: HashMap<String, usize>,
}

impl ResolutionIndex {
    #[must_use]
    pub fn build(records: &[FileRecord]) -> Self {
        let mut by_name: HashMap<String, usize> = HashMap::new();

        for (idx, record) in records.iter().enumerate() {
            let package = record.package_name.as_deref().unwrap_or_default();
            for class_name in &record.class_names {
                let qualified = if package.is_empty() {
                    class_name.clone()
                } else {
                    format!("{package}.{class_name}")
                };
                by_name.entry(qualified).or_insert(idx);
                by_name.entry(class_name.clone()).or_insert(idx);
            }
            if !package.is_empty() {
                by_name.entry(package.to_string()).or_insert(idx);
            }
        }

        Self { by_name }
    }

    /// Resolves an import string to a node index, or `None` if nothing
    /// in the collection matches.
    ///
    /// Precedence: exact match; then progressively dropping trailing
    /// dotted segments (covers wildcard and static-member imports); then
    /// the trailing simple name against any known class.
    #[must_use]
    pub fn resolve(&self, import_path: &str) -> Option<usize> {
        if let Some(&idx) = self.by_name.get(import_path) {
            return Some(idx);
        }

        let parts: Vec<&str> = import_path.split('.').collect();
        for end in (1..parts.len()).rev() {
            let candidate = parts[..end].join(".");
            if let Some(&idx) = self.by_name.get(candidate.as_str()) {
                return Some(idx);
            }
        }

        parts
            .last()
            .and_then(|simple| self.by_name.get(*simple))
            .copied()
    }
}
