// logsift-core/src/analysis.rs
//! One-shot analysis entry points and the run summary.

use std::path::Path;

use log::debug;

use crate::capture::LogCapture;
use crate::errors::AnalysisError;
use crate::extract::{extract_errors, ErrorRecord};

/// Summary of one analysis run: capture-wide totals plus the complete,
/// untruncated error sequence for programmatic reuse.
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    /// Every record in the capture, errors or not.
    pub total_records: usize,
    /// ERROR-severity records in capture order.
    pub error_records: Vec<ErrorRecord>,
}

impl Analysis {
    /// Number of extracted error records.
    pub fn error_count(&self) -> usize {
        self.error_records.len()
    }

    /// Error rate as a percentage of all records.
    ///
    /// An empty capture reports 0.0 rather than dividing by zero; report
    /// renderers format it as `0.00`.
    pub fn error_rate_pct(&self) -> f64 {
        if self.total_records > 0 {
            100.0 * self.error_records.len() as f64 / self.total_records as f64
        } else {
            0.0
        }
    }
}

/// Runs extraction over an already-loaded capture.
pub fn analyze(capture: &LogCapture) -> Analysis {
    let error_records = extract_errors(capture);
    debug!(
        "Extracted {} error records out of {} total.",
        error_records.len(),
        capture.records.len()
    );
    Analysis {
        total_records: capture.records.len(),
        error_records,
    }
}

/// Loads a capture file and analyzes it in one call.
pub fn analyze_file<P: AsRef<Path>>(path: P) -> Result<Analysis, AnalysisError> {
    let capture = LogCapture::load_from_file(path)?;
    Ok(analyze(&capture))
}
