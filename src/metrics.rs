//! Metrics calculator
//!
//! Derives aggregate size/shape statistics from the raw text and the
//! lowered syntax tree.

use crate::models::Metrics;
use crate::parser::SyntaxTree;

/// Compute metrics for one source unit.
///
/// Line counts come from the raw text (split on `\n`, so a trailing newline
/// contributes an empty final line); definition counts come from the tree
/// and include nested definitions.
pub fn compute(source: &str, tree: &SyntaxTree) -> Metrics {
    let total_lines = source.split('\n').count();
    let non_empty_lines = source.split('\n').filter(|l| !l.trim().is_empty()).count();

    let function_count = tree.nodes().filter(|n| n.is_function()).count();
    let class_count = tree.nodes().filter(|n| n.is_class()).count();

    // max(count, 1) keeps the division defined for files with no functions
    let average_function_length = non_empty_lines as f64 / function_count.max(1) as f64;

    Metrics {
        total_lines,
        non_empty_lines,
        function_count,
        class_count,
        average_function_length,
    }
}
