//! Base detector trait
//!
//! A detector is a pure pass over the lowered syntax tree. Detectors do not
//! observe each other's output and hold no mutable state, so each run starts
//! from nothing; the assembler concatenates their results in a fixed order.

use crate::models::Issue;
use crate::parser::SyntaxTree;

/// Trait for all issue detectors
pub trait Detector: Send + Sync {
    /// Unique identifier for this detector
    fn name(&self) -> &'static str;

    /// Human-readable description of what this detector finds
    fn description(&self) -> &'static str;

    /// Run detection and return a fresh issue sequence.
    ///
    /// Infallible by contract: a panic here is a programming defect, not a
    /// reportable condition.
    fn detect(&self, tree: &SyntaxTree) -> Vec<Issue>;
}
