//! Core data models for prreview
//!
//! These models are used throughout the codebase for representing
//! analysis issues, metrics, and the final report shape the REST
//! layer serializes for callers.

use serde::{Deserialize, Serialize};

/// Severity levels for issues
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
        }
    }
}

/// Category of a detected issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Complexity,
    Naming,
    Imports,
    Documentation,
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueKind::Complexity => write!(f, "complexity"),
            IssueKind::Naming => write!(f, "naming"),
            IssueKind::Imports => write!(f, "imports"),
            IssueKind::Documentation => write!(f, "documentation"),
        }
    }
}

/// A single issue found during analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// 1-based source line the issue is anchored to
    pub line: u32,
    pub kind: IssueKind,
    pub message: String,
    pub severity: Severity,
}

impl Issue {
    pub fn new(line: u32, kind: IssueKind, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            line,
            kind,
            message: message.into(),
            severity,
        }
    }
}

/// Aggregate size/shape statistics for one source unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub total_lines: usize,
    pub non_empty_lines: usize,
    pub function_count: usize,
    pub class_count: usize,
    /// non_empty_lines / max(function_count, 1); degenerates to
    /// non_empty_lines when the unit has no functions.
    pub average_function_length: f64,
}

/// Result of analyzing one `(filename, source_text)` unit.
///
/// Serializes untagged: a success carries issues and metrics, a failure
/// carries the error string with empty issues/metrics, matching the JSON
/// contract the hosting API forwards field for field.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AnalysisReport {
    Success(SuccessReport),
    Failure(FailureReport),
}

/// Report for a unit that parsed and was fully analyzed.
///
/// `total_issues` and `high_severity_issues` are derived from the issue
/// sequence at construction time and are not independently settable, so
/// they cannot drift from the data they summarize.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessReport {
    filename: String,
    issues: Vec<Issue>,
    metrics: Metrics,
    total_issues: usize,
    high_severity_issues: usize,
}

/// Report for a unit the parser rejected. No partial data is exposed.
#[derive(Debug, Clone, Serialize)]
pub struct FailureReport {
    filename: String,
    error: String,
    issues: Vec<Issue>,
    metrics: serde_json::Map<String, serde_json::Value>,
    total_issues: usize,
}

impl AnalysisReport {
    pub fn success(filename: impl Into<String>, issues: Vec<Issue>, metrics: Metrics) -> Self {
        let total_issues = issues.len();
        let high_severity_issues = issues
            .iter()
            .filter(|i| i.severity == Severity::High)
            .count();
        AnalysisReport::Success(SuccessReport {
            filename: filename.into(),
            issues,
            metrics,
            total_issues,
            high_severity_issues,
        })
    }

    pub fn failure(filename: impl Into<String>, error: impl Into<String>) -> Self {
        AnalysisReport::Failure(FailureReport {
            filename: filename.into(),
            error: error.into(),
            issues: Vec::new(),
            metrics: serde_json::Map::new(),
            total_issues: 0,
        })
    }

    pub fn filename(&self) -> &str {
        match self {
            AnalysisReport::Success(r) => &r.filename,
            AnalysisReport::Failure(r) => &r.filename,
        }
    }

    pub fn issues(&self) -> &[Issue] {
        match self {
            AnalysisReport::Success(r) => &r.issues,
            AnalysisReport::Failure(r) => &r.issues,
        }
    }

    pub fn metrics(&self) -> Option<&Metrics> {
        match self {
            AnalysisReport::Success(r) => Some(&r.metrics),
            AnalysisReport::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AnalysisReport::Success(_) => None,
            AnalysisReport::Failure(r) => Some(&r.error),
        }
    }

    pub fn total_issues(&self) -> usize {
        match self {
            AnalysisReport::Success(r) => r.total_issues,
            AnalysisReport::Failure(r) => r.total_issues,
        }
    }

    pub fn high_severity_issues(&self) -> usize {
        match self {
            AnalysisReport::Success(r) => r.high_severity_issues,
            AnalysisReport::Failure(_) => 0,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AnalysisReport::Success(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::High).unwrap(), "\"high\"");
        assert_eq!(
            serde_json::to_string(&IssueKind::Documentation).unwrap(),
            "\"documentation\""
        );
    }

    #[test]
    fn test_success_report_derives_counts() {
        let issues = vec![
            Issue::new(1, IssueKind::Naming, "bad name", Severity::Low),
            Issue::new(3, IssueKind::Complexity, "too deep", Severity::High),
            Issue::new(7, IssueKind::Complexity, "too deep", Severity::High),
        ];
        let metrics = Metrics {
            total_lines: 10,
            non_empty_lines: 8,
            function_count: 2,
            class_count: 0,
            average_function_length: 4.0,
        };
        let report = AnalysisReport::success("a.py", issues, metrics);
        assert_eq!(report.total_issues(), 3);
        assert_eq!(report.high_severity_issues(), 2);
        assert_eq!(report.total_issues(), report.issues().len());
    }

    #[test]
    fn test_failure_report_shape() {
        let report = AnalysisReport::failure("a.py", "Syntax error: bad");
        assert!(!report.is_success());
        assert!(report.issues().is_empty());
        assert!(report.metrics().is_none());
        assert_eq!(report.total_issues(), 0);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["filename"], "a.py");
        assert_eq!(json["error"], "Syntax error: bad");
        assert_eq!(json["issues"].as_array().unwrap().len(), 0);
        assert!(json["metrics"].as_object().unwrap().is_empty());
        assert_eq!(json["total_issues"], 0);
    }

    #[test]
    fn test_success_report_json_fields() {
        let report = AnalysisReport::success(
            "b.py",
            vec![Issue::new(1, IssueKind::Imports, "Too many imports (>20)", Severity::Medium)],
            Metrics {
                total_lines: 30,
                non_empty_lines: 25,
                function_count: 1,
                class_count: 1,
                average_function_length: 25.0,
            },
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["filename"], "b.py");
        assert_eq!(json["total_issues"], 1);
        assert_eq!(json["high_severity_issues"], 0);
        assert_eq!(json["issues"][0]["line"], 1);
        assert_eq!(json["issues"][0]["kind"], "imports");
        assert_eq!(json["issues"][0]["severity"], "medium");
        assert_eq!(json["metrics"]["function_count"], 1);
    }
}
