//! Statistics engine for h2load request logs.
//!
//! [`analyze`] runs the whole pipeline: one ingestion pass over the log
//! ([`ingest`]) followed by building the report rows ([`report`]).

use std::io::BufRead;

pub mod groups;
pub mod ingest;
pub mod record;
pub mod report;
pub mod stats;
pub mod throughput;

pub use h2stat_common::{H2StatError, Result};
pub use report::{write_report, ReportRow};

/// Ingest every line of `reader` and build the report rows.
///
/// Fails on the first malformed line; no rows are produced in that case.
pub fn analyze<R: BufRead>(reader: R) -> Result<Vec<ReportRow>> {
    let ingested = ingest::ingest(reader)?;
    Ok(report::build_report(&ingested))
}
