// logsift-core/src/lib.rs
//! # Logsift Core Library
//!
//! `logsift-core` provides the fundamental logic for analyzing a logcat
//! capture: decoding the JSON export into a typed document, extracting the
//! error-severity records, grouping them along reporting dimensions, and
//! flagging the critical ones by message content.
//!
//! The library is pure and stateless. It reads one input file and hands
//! the derived structures to the caller. There is no terminal I/O here,
//! and a capture is never mutated after loading.
//!
//! ## Modules
//!
//! * `capture`: Defines `LogCapture`, `LogRecord`, and the file loader.
//!   Every field of a record carries a declared default; absence is a valid
//!   state of the document, not an error.
//! * `extract`: Filters a capture down to its ERROR-severity records,
//!   normalized as `ErrorRecord`s.
//! * `group`: Buckets error records by tag or process name and ranks the
//!   buckets for reporting.
//! * `classify`: Flags error records as critical when their message
//!   contains one of a fixed set of diagnostic keywords.
//! * `analysis`: One-shot entry points tying the pipeline together, plus
//!   the run summary with its guarded error-rate calculation.
//! * `errors`: The typed error enum for load failures.
//!
//! ## Usage Example
//!
//! ```no_run
//! use logsift_core::{analyze_file, GroupStats, KeywordClassifier};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let analysis = analyze_file("capture.json")?;
//!     println!(
//!         "{} errors out of {} records ({:.2}%)",
//!         analysis.error_count(),
//!         analysis.total_records,
//!         analysis.error_rate_pct()
//!     );
//!
//!     let by_tag = GroupStats::by_tag(&analysis.error_records);
//!     for group in by_tag.ranked() {
//!         println!("{}: {} errors", group.key, group.len());
//!     }
//!
//!     let classifier = KeywordClassifier::default();
//!     let criticals = classifier.criticals(&analysis.error_records);
//!     println!("{} critical errors", criticals.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Load failures surface as [`AnalysisError`] variants. Extraction,
//! grouping, and classification have no failure modes: malformed or
//! incomplete individual records degrade to empty-field defaults at decode
//! time rather than aborting the run.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod analysis;
pub mod capture;
pub mod classify;
pub mod errors;
pub mod extract;
pub mod group;

/// Re-exports the capture document model and loader.
pub use capture::{LogCapture, LogHeader, LogRecord, Timestamp, ERROR_LEVEL};

/// Re-exports the typed error enum for load failures.
pub use errors::AnalysisError;

/// Re-exports the normalized error record and the extraction pass.
pub use extract::{extract_errors, ErrorRecord};

/// Re-exports grouping and ranking over error records.
pub use group::{Group, GroupStats};

/// Re-exports the critical-error classifier and its default keyword set.
pub use classify::{KeywordClassifier, CRITICAL_KEYWORDS};

/// Re-exports the one-shot analysis entry points and the run summary.
pub use analysis::{analyze, analyze_file, Analysis};
