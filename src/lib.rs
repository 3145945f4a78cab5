pub mod analysis;
pub mod error;
pub mod graph;
pub mod pipeline;
pub mod record;
pub mod report;
pub mod workflow;

pub use error::{AnalyzerError, Result};
pub use pipeline::{analyze, AnalysisResult};
pub use record::{AstDump, FileRecord, RecordSet};
