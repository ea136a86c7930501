//! Import bloat detector
//!
//! Counts plain and from-imports across the whole tree and emits a single
//! file-level issue when the total crosses the threshold.

use crate::config::AnalyzerConfig;
use crate::detectors::base::Detector;
use crate::models::{Issue, IssueKind, Severity};
use crate::parser::SyntaxTree;

pub struct ImportDetector {
    max_imports: usize,
}

impl ImportDetector {
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            max_imports: config.max_imports,
        }
    }
}

impl Detector for ImportDetector {
    fn name(&self) -> &'static str {
        "imports"
    }

    fn description(&self) -> &'static str {
        "Detects files with too many import statements"
    }

    fn detect(&self, tree: &SyntaxTree) -> Vec<Issue> {
        let count = tree.nodes().filter(|n| n.is_import()).count();

        if count > self.max_imports {
            vec![Issue::new(
                1,
                IssueKind::Imports,
                format!("Too many imports (>{})", self.max_imports),
                Severity::Medium,
            )]
        } else {
            Vec::new()
        }
    }
}
