//! Issue detectors
//!
//! Each detector is an independent, stateless pass over the lowered syntax
//! tree. The assembler runs them in the fixed order returned by
//! [`default_detectors`] (complexity, naming, imports, documentation) and
//! concatenates their output, which keeps report contents deterministic.

mod base;

mod complexity;
mod docstrings;
mod imports;
mod naming;

pub use base::Detector;
pub use complexity::ComplexityDetector;
pub use docstrings::DocstringDetector;
pub use imports::ImportDetector;
pub use naming::NamingDetector;

use crate::config::AnalyzerConfig;

/// The full detector set in its documented run order
pub fn default_detectors(config: &AnalyzerConfig) -> Vec<Box<dyn Detector>> {
    vec![
        Box::new(ComplexityDetector::new(config)),
        Box::new(NamingDetector::new()),
        Box::new(ImportDetector::new(config)),
        Box::new(DocstringDetector::new()),
    ]
}
