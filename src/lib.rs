//! prreview - pull request review service
//!
//! The core is a single-unit static analyzer for Python: it parses source
//! text with tree-sitter, walks the lowered tree with independent issue
//! detectors, derives aggregate metrics, and assembles one structured
//! report per `(filename, source_text)` pair. Around it sit the boundary
//! collaborators: a GitHub API client, a canned feedback generator, and a
//! thin REST layer.

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod detectors;
pub mod feedback;
pub mod github;
pub mod metrics;
pub mod models;
pub mod parser;
pub mod server;

pub use analyzer::Analyzer;
pub use config::AnalyzerConfig;
pub use models::{AnalysisReport, Issue, IssueKind, Metrics, Severity};
