//! Missing docstring detector
//!
//! A function is documented when its first body statement is a string
//! literal.

use crate::detectors::base::Detector;
use crate::models::{Issue, IssueKind, Severity};
use crate::parser::{NodeKind, SyntaxTree};

pub struct DocstringDetector;

impl DocstringDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DocstringDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for DocstringDetector {
    fn name(&self) -> &'static str {
        "documentation"
    }

    fn description(&self) -> &'static str {
        "Detects functions without docstrings"
    }

    fn detect(&self, tree: &SyntaxTree) -> Vec<Issue> {
        let mut issues = Vec::new();

        for node in tree.nodes().filter(|n| n.is_function()) {
            let documented = node
                .children
                .first()
                .is_some_and(|first| first.kind == NodeKind::StringLiteral);

            if !documented {
                issues.push(Issue::new(
                    node.line,
                    IssueKind::Documentation,
                    "Function missing docstring",
                    Severity::Low,
                ));
            }
        }

        issues
    }
}
