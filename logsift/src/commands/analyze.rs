// logsift/src/commands/analyze.rs
//! Analyze command: the load, extract, group, classify, report pipeline.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};

use is_terminal::IsTerminal;
use logsift_core::{analyze, ErrorRecord, GroupStats, KeywordClassifier, LogCapture};

use crate::ui::report::{print_report, ReportContext};

/// Runs one analysis pass and renders the report to stdout.
///
/// The whole pipeline is a single synchronous sweep: the capture is loaded
/// once, each derived structure is built once and read thereafter. On
/// success the complete, untruncated error sequence is returned for
/// programmatic reuse; any load or render failure propagates to the entry
/// point, which turns it into a single logged line and an empty result.
pub fn run_analyze(input_file: &Path) -> Result<Vec<ErrorRecord>> {
    info!("Starting analysis of {}.", input_file.display());

    let capture = LogCapture::load_from_file(input_file)
        .with_context(|| format!("Failed to analyze capture {}", input_file.display()))?;
    let analysis = analyze(&capture);
    debug!(
        "Capture holds {} records, {} errors.",
        analysis.total_records,
        analysis.error_count()
    );

    let by_tag = GroupStats::by_tag(&analysis.error_records);
    let by_process = GroupStats::by_process(&analysis.error_records);
    let classifier = KeywordClassifier::default();
    let criticals = classifier.criticals(&analysis.error_records);

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();
    let ctx = ReportContext {
        analysis: &analysis,
        by_tag: &by_tag,
        by_process: &by_process,
        criticals: &criticals,
    };
    print_report(&mut writer, &ctx, supports_color).context("Failed to write report")?;

    info!("Analysis completed.");
    Ok(analysis.error_records)
}
