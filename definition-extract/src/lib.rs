use std::path::Path;

use dictionary::ConversionReport;
use tracing::{info, Level};

pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();
}

pub fn print_summary(report: &ConversionReport, output: &Path) {
    println!(
        "Extracted {} definitions to {}",
        report.record_count(),
        output.display()
    );
    if report.is_empty_input() {
        println!("The {} input was empty.", report.source);
        return;
    }
    info!(
        source = %report.source,
        read = report.entries_read,
        filtered = report.filtered_count(),
        failed = report.failures().count(),
        "skipped entries"
    );
}
