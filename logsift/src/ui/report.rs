// logsift/src/ui/report.rs
//! Renders the analysis report.
//!
//! Section order is fixed: run summary, tag-group table, process-group
//! table, capped error detail listing, capped critical listing. The caps
//! truncate the console view only; the full record sequence stays in the
//! command's return value.

use std::io::{self, Write};

use chrono::Local;
use comfy_table::{presets, Cell, Table};

use logsift_core::{Analysis, ErrorRecord, GroupStats};

use super::output_format::print_header;

/// Detail rows shown in the error listing.
pub const DETAIL_LIMIT: usize = 20;

/// Detail rows shown in the critical listing.
pub const CRITICAL_LIMIT: usize = 10;

/// Everything the renderer needs for one report, borrowed from the
/// analysis pass.
pub struct ReportContext<'a> {
    pub analysis: &'a Analysis,
    pub by_tag: &'a GroupStats<'a>,
    pub by_process: &'a GroupStats<'a>,
    pub criticals: &'a [&'a ErrorRecord],
}

/// Writes the full report to `writer` in the fixed section order.
pub fn print_report(
    writer: &mut dyn Write,
    ctx: &ReportContext<'_>,
    use_color: bool,
) -> io::Result<()> {
    let analysis = ctx.analysis;

    print_header(writer, "Log Error Analysis Report", use_color)?;
    writeln!(
        writer,
        "Generated at: {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(writer)?;

    writeln!(writer, "Total log records: {}", analysis.total_records)?;
    writeln!(writer, "Error records: {}", analysis.error_count())?;
    // 0.00 for an empty capture; the rate itself is guarded in core.
    writeln!(writer, "Error rate: {:.2}%", analysis.error_rate_pct())?;
    writeln!(writer)?;

    print_group_table(writer, "Errors by tag", "Tag", ctx.by_tag, use_color)?;
    print_group_table(writer, "Errors by process", "Process", ctx.by_process, use_color)?;

    print_detail_listing(writer, &analysis.error_records, use_color)?;
    print_critical_listing(writer, ctx.criticals, use_color)?;

    Ok(())
}

/// One ranked table of group keys and member counts.
fn print_group_table(
    writer: &mut dyn Write,
    title: &str,
    key_heading: &str,
    stats: &GroupStats<'_>,
    use_color: bool,
) -> io::Result<()> {
    print_header(writer, title, use_color)?;

    if stats.is_empty() {
        writeln!(writer, "(none)")?;
        writeln!(writer)?;
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_header(vec![key_heading, "Errors"]);
    for group in stats.ranked() {
        table.add_row(vec![Cell::new(group.key), Cell::new(group.len())]);
    }
    writeln!(writer, "{table}")?;
    writeln!(writer)?;
    Ok(())
}

/// Indexed listing of the first [`DETAIL_LIMIT`] error records in capture
/// order.
fn print_detail_listing(
    writer: &mut dyn Write,
    records: &[ErrorRecord],
    use_color: bool,
) -> io::Result<()> {
    print_header(
        writer,
        &format!("Error details (first {})", DETAIL_LIMIT),
        use_color,
    )?;

    for (i, record) in records.iter().take(DETAIL_LIMIT).enumerate() {
        writeln!(
            writer,
            "{}. [{}] {} ({}:{})",
            i + 1,
            record.timestamp_display(),
            record.tag,
            record.process_name,
            record.pid
        )?;
        writeln!(writer, "   Message: {}", record.message)?;
        writeln!(writer)?;
    }
    Ok(())
}

/// Critical count plus the first [`CRITICAL_LIMIT`] critical records in
/// capture order.
fn print_critical_listing(
    writer: &mut dyn Write,
    criticals: &[&ErrorRecord],
    use_color: bool,
) -> io::Result<()> {
    print_header(writer, "Critical error patterns", use_color)?;
    writeln!(writer, "Found {} critical errors:", criticals.len())?;

    for (i, record) in criticals.iter().take(CRITICAL_LIMIT).enumerate() {
        writeln!(
            writer,
            "{}. [{}] {} - {}",
            i + 1,
            record.timestamp_display(),
            record.tag,
            record.message
        )?;
    }
    Ok(())
}
