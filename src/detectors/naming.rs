//! Naming convention detector
//!
//! Functions are expected to be snake_case, classes PascalCase.

use crate::detectors::base::Detector;
use crate::models::{Issue, IssueKind, Severity};
use crate::parser::{NodeKind, SyntaxTree};
use regex::Regex;

pub struct NamingDetector {
    function_re: Regex,
    class_re: Regex,
}

impl NamingDetector {
    pub fn new() -> Self {
        Self {
            function_re: Regex::new(r"^[a-z_][a-z0-9_]*$").expect("valid regex"),
            class_re: Regex::new(r"^[A-Z][a-zA-Z0-9]*$").expect("valid regex"),
        }
    }
}

impl Default for NamingDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for NamingDetector {
    fn name(&self) -> &'static str {
        "naming"
    }

    fn description(&self) -> &'static str {
        "Detects function and class names that break Python conventions"
    }

    fn detect(&self, tree: &SyntaxTree) -> Vec<Issue> {
        let mut issues = Vec::new();

        for node in tree.nodes() {
            match &node.kind {
                NodeKind::FunctionDef { name } if !self.function_re.is_match(name) => {
                    issues.push(Issue::new(
                        node.line,
                        IssueKind::Naming,
                        "Function name should be lowercase with underscores",
                        Severity::Low,
                    ));
                }
                NodeKind::ClassDef { name } if !self.class_re.is_match(name) => {
                    issues.push(Issue::new(
                        node.line,
                        IssueKind::Naming,
                        "Class name should be PascalCase",
                        Severity::Low,
                    ));
                }
                _ => {}
            }
        }

        issues
    }
}
