//! Canned feedback generator
//!
//! Stub collaborator: turns a report into review prose, suggestions, and a
//! score without any model inference. The text is fixed; only the score
//! reacts to the report so the service layer has something to return.

use crate::models::AnalysisReport;

pub struct FeedbackGenerator {
    model_name: String,
}

impl FeedbackGenerator {
    pub fn new() -> Self {
        Self {
            model_name: "canned".to_string(),
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// One-paragraph summary for the review payload
    pub fn generate_feedback(&self, report: &AnalysisReport) -> String {
        match report.error() {
            Some(error) => format!(
                "Could not analyze {}: {}",
                report.filename(),
                error
            ),
            None => format!(
                "Analyzed {}: {} issue(s) found, {} high severity. \
                 Consider adding more tests and documentation.",
                report.filename(),
                report.total_issues(),
                report.high_severity_issues()
            ),
        }
    }

    /// Fixed improvement suggestions
    pub fn suggest_improvements(&self, _report: &AnalysisReport) -> Vec<String> {
        vec![
            "Add error handling for edge cases".to_string(),
            "Consider using more descriptive variable names".to_string(),
            "Add type hints for better code clarity".to_string(),
        ]
    }

    /// Crude 0-10 quality score: small deduction per issue, larger for high
    /// severity. A unit that fails to parse scores 0.
    pub fn score(&self, report: &AnalysisReport) -> f64 {
        if report.error().is_some() {
            return 0.0;
        }
        let high = report.high_severity_issues() as f64;
        let rest = (report.total_issues() - report.high_severity_issues()) as f64;
        (10.0 - 1.5 * high - 0.5 * rest).max(0.0)
    }
}

impl Default for FeedbackGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::Analyzer;

    #[test]
    fn test_clean_report_scores_ten() {
        let report = Analyzer::new().analyze("clean.py", "x = 1\n");
        let feedback = FeedbackGenerator::new();
        assert_eq!(feedback.score(&report), 10.0);
        assert_eq!(feedback.suggest_improvements(&report).len(), 3);
    }

    #[test]
    fn test_failure_scores_zero() {
        let report = Analyzer::new().analyze("broken.py", "def broken(:\n");
        let feedback = FeedbackGenerator::new();
        assert_eq!(feedback.score(&report), 0.0);
        assert!(feedback.generate_feedback(&report).contains("Could not analyze"));
    }

    #[test]
    fn test_issues_reduce_score() {
        let report = Analyzer::new().analyze("bare.py", "def bare():\n    pass\n");
        let score = FeedbackGenerator::new().score(&report);
        assert!(score < 10.0);
        assert!(score >= 0.0);
    }
}
