// logsift-core/src/extract.rs
//! Error extraction: filtering a capture down to its ERROR-severity
//! records, normalized for downstream grouping and classification.

use serde::Serialize;

use crate::capture::{LogCapture, Timestamp, ERROR_LEVEL};

/// Normalized projection of an ERROR-severity record: the raw record's
/// fields minus the severity level.
///
/// Built once by [`extract_errors`] and never mutated afterwards. Grouping
/// and classification hold shared borrows into the extracted sequence, so
/// one record can sit in a tag group, a process group, and the critical
/// subset at the same time.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ErrorRecord {
    pub timestamp: Option<Timestamp>,
    pub tag: String,
    pub process_name: String,
    pub pid: String,
    pub application_id: String,
    pub message: String,
}

impl ErrorRecord {
    /// Timestamp in `seconds.nanos` form, or the literal `N/A` when the
    /// capture carried none.
    pub fn timestamp_display(&self) -> String {
        match self.timestamp {
            Some(ts) => ts.to_string(),
            None => "N/A".to_string(),
        }
    }
}

/// Filters `capture` down to its ERROR-severity records, preserving
/// capture order.
///
/// The level comparison is exact ([`ERROR_LEVEL`]); nothing is lower-cased
/// or trimmed. A record missing every header field still yields an
/// `ErrorRecord` with empty strings: extraction has no failure mode.
pub fn extract_errors(capture: &LogCapture) -> Vec<ErrorRecord> {
    capture
        .records
        .iter()
        .filter(|record| record.header.log_level == ERROR_LEVEL)
        .map(|record| ErrorRecord {
            timestamp: record.header.timestamp,
            tag: record.header.tag.clone(),
            process_name: record.header.process_name.clone(),
            pid: record.header.pid.clone(),
            application_id: record.header.application_id.clone(),
            message: record.message.clone(),
        })
        .collect()
}
