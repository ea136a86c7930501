//! Complexity detector
//!
//! Flags functions with oversized statement bodies and functions whose
//! control flow nests too deeply.

use crate::config::AnalyzerConfig;
use crate::detectors::base::Detector;
use crate::models::{Issue, IssueKind, Severity};
use crate::parser::{SyntaxNode, SyntaxTree};

pub struct ComplexityDetector {
    max_statements: usize,
    max_depth: u32,
}

impl ComplexityDetector {
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            max_statements: config.max_function_statements,
            max_depth: config.max_nesting_depth,
        }
    }
}

/// Maximum nesting depth reached anywhere under `node`. Each nesting
/// construct contributes one level for its own subtree only, so depth falls
/// back on the way out of a construct instead of counting monotonically.
fn max_depth(node: &SyntaxNode) -> u32 {
    let here = node.is_nesting() as u32;
    here + node
        .children
        .iter()
        .map(max_depth)
        .max()
        .unwrap_or(0)
}

impl Detector for ComplexityDetector {
    fn name(&self) -> &'static str {
        "complexity"
    }

    fn description(&self) -> &'static str {
        "Detects overly long functions and excessive nesting depth"
    }

    fn detect(&self, tree: &SyntaxTree) -> Vec<Issue> {
        let mut issues = Vec::new();

        for node in tree.nodes().filter(|n| n.is_function()) {
            if node.children.len() > self.max_statements {
                issues.push(Issue::new(
                    node.line,
                    IssueKind::Complexity,
                    format!("Function is too long (>{} lines)", self.max_statements),
                    Severity::Medium,
                ));
            }

            let depth = node.children.iter().map(max_depth).max().unwrap_or(0);
            if depth > self.max_depth {
                issues.push(Issue::new(
                    node.line,
                    IssueKind::Complexity,
                    format!("Function has too many nested levels ({depth})"),
                    Severity::High,
                ));
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn detect(source: &str) -> Vec<Issue> {
        let tree = parse(source).expect("test source should parse");
        ComplexityDetector::new(&AnalyzerConfig::default()).detect(&tree)
    }

    fn long_function(statements: usize) -> String {
        let mut src = String::from("def long_function():\n");
        for i in 0..statements {
            src.push_str(&format!("    x{i} = {i}\n"));
        }
        src
    }

    #[test]
    fn test_body_at_threshold_is_clean() {
        assert!(detect(&long_function(50)).is_empty());
    }

    #[test]
    fn test_body_over_threshold_flagged_once() {
        let issues = detect(&long_function(51));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].line, 1);
        assert_eq!(issues[0].severity, Severity::Medium);
        assert_eq!(issues[0].message, "Function is too long (>50 lines)");
    }

    #[test]
    fn test_depth_at_threshold_is_clean() {
        let source = r#"
def ok():
    for a in x:
        for b in a:
            if b:
                pass
"#;
        assert!(detect(source).is_empty());
    }

    #[test]
    fn test_depth_over_threshold_is_high() {
        let source = r#"
def deep():
    for a in x:
        for b in a:
            if b:
                while True:
                    pass
"#;
        let issues = detect(source);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::High);
        assert_eq!(issues[0].message, "Function has too many nested levels (4)");
        assert_eq!(issues[0].line, 2);
    }

    #[test]
    fn test_depth_is_maximum_not_running_total() {
        // Four sibling conditionals: depth 1, not 4
        let source = r#"
def siblings(x):
    if x == 1:
        pass
    if x == 2:
        pass
    if x == 3:
        pass
    if x == 4:
        pass
"#;
        assert!(detect(source).is_empty());
    }

    #[test]
    fn test_with_and_try_count_as_nesting() {
        let source = r#"
def resourceful(path):
    with open(path) as f:
        try:
            for line in f:
                if line:
                    pass
        except ValueError:
            pass
"#;
        let issues = detect(source);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "Function has too many nested levels (4)");
    }

    #[test]
    fn test_custom_threshold() {
        let config = AnalyzerConfig {
            max_function_statements: 2,
            ..Default::default()
        };
        let tree = parse("def f():\n    a = 1\n    b = 2\n    c = 3\n").unwrap();
        let issues = ComplexityDetector::new(&config).detect(&tree);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "Function is too long (>2 lines)");
    }
}
