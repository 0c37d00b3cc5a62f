use crate::data_structures::{Report, ReportSummary};
use anyhow::{Context, Result};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const DEFAULT_REPORT_FILE: &str = "consumos.txt";

pub const REPORT_HEADER: &str = "--- Consumption Report ---";
pub const EMPTY_REPORT_MESSAGE: &str = "No appliances registered.";

impl fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", REPORT_HEADER)?;
        writeln!(
            f,
            "Generated: {}",
            self.generated_at().format("%Y-%m-%d %H:%M UTC")
        )?;

        for row in self.rows() {
            writeln!(f, "Appliance: {}", row.name())?;
            writeln!(f, "Monthly consumption: {:.2} kWh", row.monthly_kwh())?;
            writeln!(f, "Monthly cost: {:.2} $", row.monthly_cost())?;
            writeln!(f)?;
        }

        writeln!(f, "Total monthly consumption: {:.2} kWh", self.total_kwh())?;
        writeln!(f, "Total monthly cost: {:.2} $", self.total_cost())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Empty => writeln!(f, "{}", EMPTY_REPORT_MESSAGE),
            Report::Summary(summary) => write!(f, "{}", summary),
        }
    }
}

/// Where a rendered report goes.
pub enum ReportSink<'a> {
    Console(&'a mut dyn Write),
    File(PathBuf),
}

pub fn write_report(report: &Report, sink: ReportSink<'_>) -> Result<()> {
    match sink {
        ReportSink::Console(out) => {
            write!(out, "{}", report).context("Failed to write report")?;
            out.flush().context("Failed to flush report output")
        }
        ReportSink::File(path) => save_to_file(report, &path),
    }
}

fn save_to_file(report: &Report, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to open file for writing: {}", path.display()))?;

    let mut writer = BufWriter::new(file);
    let result = write!(writer, "{}", report)
        .and_then(|_| writer.flush())
        .with_context(|| format!("Failed to write report to {}", path.display()));

    match &result {
        Ok(()) => debug!(path = %path.display(), "report saved"),
        Err(e) => warn!(path = %path.display(), error = %e, "report write failed"),
    }

    result
}
