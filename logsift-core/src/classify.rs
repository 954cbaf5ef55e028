// logsift-core/src/classify.rs
//! Critical-error classification over a fixed diagnostic keyword set.

use core::fmt;

use anyhow::{anyhow, Result};
use daachorse::DoubleArrayAhoCorasick;

use crate::extract::ErrorRecord;

/// Diagnostic keywords that mark an error message as critical.
///
/// All entries are lowercase; matching lower-cases the message, making the
/// comparison case-insensitive. Substring semantics, not whole words:
/// "failure" and "nullable" both qualify.
pub const CRITICAL_KEYWORDS: [&str; 6] =
    ["fail", "error", "exception", "crash", "timeout", "null"];

/// Classifies error records as critical when their message contains at
/// least one keyword.
///
/// The keyword set is injected at construction, so alternative rulesets
/// can be exercised without touching extraction or grouping.
pub struct KeywordClassifier {
    automaton: DoubleArrayAhoCorasick<usize>,
}

impl fmt::Debug for KeywordClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeywordClassifier")
            .field("automaton", &"<DoubleArrayAhoCorasick>")
            .finish()
    }
}

impl KeywordClassifier {
    /// Builds a classifier over an explicit keyword set. Keywords are
    /// expected lowercase; matching does not normalize them.
    pub fn new<I, P>(keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        let automaton = DoubleArrayAhoCorasick::new(keywords)
            .map_err(|e| anyhow!("Failed to build keyword automaton: {e}"))?;
        Ok(Self { automaton })
    }

    /// True iff the lower-cased message contains at least one keyword.
    ///
    /// Pure: the same message always classifies the same way, independent
    /// of which groups the record belongs to.
    pub fn is_critical(&self, record: &ErrorRecord) -> bool {
        self.matches_message(&record.message)
    }

    /// Single automaton pass over one message body.
    pub fn matches_message(&self, message: &str) -> bool {
        let lowered = message.to_lowercase();
        self.automaton.find_iter(lowered.as_bytes()).next().is_some()
    }

    /// Borrows the critical subset of `records`, preserving capture order.
    pub fn criticals<'a>(&self, records: &'a [ErrorRecord]) -> Vec<&'a ErrorRecord> {
        records
            .iter()
            .filter(|record| self.is_critical(record))
            .collect()
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new(CRITICAL_KEYWORDS)
            .expect("Failed to build Aho-Corasick automaton for the default keyword set")
    }
}
