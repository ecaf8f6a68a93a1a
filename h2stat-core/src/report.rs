use crate::ingest::{Ingested, RequestGroup};
use crate::stats::{OneDecimal, Summary};
use h2stat_common::config::{is_success, REPORT_COLUMNS};
use h2stat_common::{H2StatError, Result};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RowType {
    /// Every request regardless of response code.
    #[serde(rename = "Aggregate")]
    Aggregate,
    #[serde(rename = "responseCode")]
    ResponseCode,
}

/// One CSV row. Field names (after renaming) match `REPORT_COLUMNS`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    #[serde(rename = "type")]
    pub row_type: RowType,
    /// Empty for the aggregate row, the response code otherwise.
    pub key: String,
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    pub ttlb_mean: Option<OneDecimal>,
    pub ttlb_median: Option<OneDecimal>,
    pub ttlb_stdev: Option<OneDecimal>,
    #[serde(rename = "ttlb5thPercentile")]
    pub ttlb_p5: Option<OneDecimal>,
    #[serde(rename = "ttlb95thPercentile")]
    pub ttlb_p95: Option<OneDecimal>,
    #[serde(rename = "aggregateTPS")]
    pub aggregate_tps: i64,
    #[serde(rename = "movingTPSMean")]
    pub moving_tps_mean: Option<OneDecimal>,
    #[serde(rename = "movingTPSMedian")]
    pub moving_tps_median: Option<OneDecimal>,
    #[serde(rename = "movingTPSStdev")]
    pub moving_tps_stdev: Option<OneDecimal>,
}

impl ReportRow {
    fn new(row_type: RowType, key: String, group: &RequestGroup, successful: u64, failed: u64) -> Self {
        let ttlb = Summary::of(group.ttlb_us());
        let percentiles = ttlb.and_then(|s| s.percentiles);
        let moving = group.throughput().moving_tps();

        ReportRow {
            row_type,
            key,
            total_requests: group.total_requests(),
            successful_requests: successful,
            failed_requests: failed,
            ttlb_mean: ttlb.map(|s| OneDecimal(s.mean)),
            ttlb_median: ttlb.map(|s| OneDecimal(s.median)),
            ttlb_stdev: ttlb.map(|s| OneDecimal(s.stdev)),
            ttlb_p5: percentiles.map(|p| OneDecimal(p.p5)),
            ttlb_p95: percentiles.map(|p| OneDecimal(p.p95)),
            aggregate_tps: group.throughput().aggregate_tps(),
            moving_tps_mean: moving.map(|s| OneDecimal(s.mean)),
            moving_tps_median: moving.map(|s| OneDecimal(s.median)),
            moving_tps_stdev: moving.map(|s| OneDecimal(s.stdev)),
        }
    }
}

/// The aggregate row, then one row per response code in first-seen order.
pub fn build_report(ingested: &Ingested) -> Vec<ReportRow> {
    let mut rows = Vec::with_capacity(ingested.code_count() + 1);
    rows.push(ReportRow::new(
        RowType::Aggregate,
        String::new(),
        ingested.global(),
        ingested.successful_requests(),
        ingested.failed_requests(),
    ));
    for (code, group) in ingested.by_code() {
        let total = group.total_requests();
        let successful = if is_success(code) { total } else { 0 };
        rows.push(ReportRow::new(
            RowType::ResponseCode,
            code.to_string(),
            group,
            successful,
            total - successful,
        ));
    }
    rows
}

/// Write the header and `rows` as `\n`-terminated CSV.
pub fn write_report<W: Write>(rows: &[ReportRow], sink: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(sink);
    writer.write_record(REPORT_COLUMNS).map_err(csv_error)?;
    for row in rows {
        writer.serialize(row).map_err(csv_error)?;
    }
    writer.flush()?;
    Ok(())
}

fn csv_error(err: csv::Error) -> H2StatError {
    H2StatError::Io(err.to_string())
}
