// src/record.rs
//! The file record store: per-file structural facts emitted by the
//! AST extractor, held read-only for one pipeline run.
//!
//! Every field is optional in the extractor's JSON; missing fields
//! degrade to empty/false/zero rather than erroring.

use serde::{Deserialize, Serialize};

use crate::error::{AnalyzerError, Result};

/// Structural facts for a single Java source file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileRecord {
    /// Absolute path; unique across the collection.
    pub file_path: String,
    pub package_name: Option<String>,
    /// Fully-qualified import names, in declaration order.
    pub imports: Vec<String>,
    /// Declared type names; the first entry is the display label.
    pub class_names: Vec<String>,
    pub method_names: Vec<String>,
    pub method_calls: Vec<String>,

    pub line_count: u32,
    pub method_count: u32,
    pub class_count: u32,
    pub import_count: u32,
    pub field_count: u32,
    pub catch_block_count: u32,
    pub static_method_count: u32,

    pub reads_from_db: bool,
    pub writes_to_db: bool,
    pub has_inheritance: bool,
    pub implements_interfaces: bool,
    pub uses_annotations: bool,
    pub uses_reflection: bool,
    pub uses_threading: bool,
    pub uses_streams: bool,
    pub has_inner_classes: bool,
    pub throws_exceptions: bool,
    pub uses_generics: bool,
}

/// The extractor's on-disk envelope: `{"files": [...]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AstDump {
    pub files: Vec<FileRecord>,
}

/// A validated file record collection.
///
/// Records keep their input order; node ids are derived from that order,
/// so the set never reorders or deduplicates.
#[derive(Debug, Clone)]
pub struct RecordSet {
    records: Vec<FileRecord>,
}

impl RecordSet {
    /// Validates and wraps a record collection.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if two records share a `filePath`.
    pub fn new(records: Vec<FileRecord>) -> Result<Self> {
        let mut seen = std::collections::HashSet::new();
        for record in &records {
            if !seen.insert(record.file_path.as_str()) {
                return Err(AnalyzerError::InvalidInput(format!(
                    "duplicate file path: {}",
                    record.file_path
                )));
            }
        }
        Ok(Self { records })
    }

    #[must_use]
    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
