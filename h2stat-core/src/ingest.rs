use crate::groups::InsertionOrderedMap;
use crate::record::{parse_line, Record};
use crate::throughput::ThroughputTable;
use h2stat_common::config::is_success;
use h2stat_common::Result;
use std::io::BufRead;
use tracing::{debug, warn};

/// TTLB values and throughput buckets for one report row.
#[derive(Debug, Clone, Default)]
pub struct RequestGroup {
    /// TTLB per request, in input order.
    ttlb_us: Vec<u64>,
    throughput: ThroughputTable,
}

impl RequestGroup {
    fn add(&mut self, record: &Record, arrival_second: i64) {
        self.ttlb_us.push(record.ttlb_us);
        self.throughput.record(arrival_second);
    }

    pub fn ttlb_us(&self) -> &[u64] {
        &self.ttlb_us
    }

    pub fn throughput(&self) -> &ThroughputTable {
        &self.throughput
    }

    pub fn total_requests(&self) -> u64 {
        self.ttlb_us.len() as u64
    }
}

/// Everything one ingestion pass collects. Read-only once returned.
#[derive(Debug, Clone, Default)]
pub struct Ingested {
    global: RequestGroup,
    by_code: InsertionOrderedMap<i64, RequestGroup>,
}

impl Ingested {
    /// Fold one record into the global group and its response-code group.
    pub fn add(&mut self, record: &Record) {
        let second = record.arrival_second();
        self.global.add(record, second);
        self.by_code
            .get_or_insert_with(record.response_code, RequestGroup::default)
            .add(record, second);
    }

    pub fn global(&self) -> &RequestGroup {
        &self.global
    }

    /// Response-code groups in the order each code was first seen.
    pub fn by_code(&self) -> impl Iterator<Item = (i64, &RequestGroup)> {
        self.by_code.iter().map(|(&code, group)| (code, group))
    }

    pub fn code_count(&self) -> usize {
        self.by_code.len()
    }

    pub fn total_requests(&self) -> u64 {
        self.global.total_requests()
    }

    /// Requests with a 2xx code, summed per response-code group.
    pub fn successful_requests(&self) -> u64 {
        self.by_code()
            .filter(|(code, _)| is_success(*code))
            .map(|(_, group)| group.total_requests())
            .sum()
    }

    pub fn failed_requests(&self) -> u64 {
        self.total_requests() - self.successful_requests()
    }
}

/// Parse every `\n`-terminated line of `reader` in one pass.
///
/// Lines are handled as raw bytes, so non-UTF-8 input never fails to decode;
/// it just makes the line malformed. Stops at the first malformed line.
pub fn ingest<R: BufRead>(mut reader: R) -> Result<Ingested> {
    let mut ingested = Ingested::default();
    let mut line = Vec::new();
    let mut line_number = 0;

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        line_number += 1;
        let record = parse_line(&line, line_number)?;
        ingested.add(&record);
    }

    let throughput = ingested.global.throughput();
    debug!(
        records = ingested.total_requests(),
        response_codes = ingested.code_count(),
        first_second = ?throughput.first_second(),
        last_second = ?throughput.last_second(),
        "ingested h2load log"
    );
    if let (Some(first), Some(last)) = (throughput.first_second(), throughput.last_second()) {
        if last < first {
            warn!(first, last, "log is not in time order; aggregate TPS will be negative");
        }
    }

    Ok(ingested)
}
