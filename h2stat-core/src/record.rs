use h2stat_common::config::MICROS_PER_SECOND;
use h2stat_common::{H2StatError, Result};

/// One h2load log line: `<requestTimestamp> <responseCode> <timeToLastByte>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    pub start_us: u64,
    /// HTTP status, or `-1` when the stream failed before a status arrived.
    pub response_code: i64,
    pub ttlb_us: u64,
}

impl Record {
    /// Second (rounded to nearest, ties to even) at which the response completed.
    pub fn arrival_second(&self) -> i64 {
        let completed_us = self.start_us as u128 + self.ttlb_us as u128;
        (completed_us as f64 / MICROS_PER_SECOND).round_ties_even() as i64
    }
}

/// Parse one raw line. `line_number` is 1-based and only used for the error.
///
/// The line must hold exactly three whitespace-separated integer fields.
/// Surrounding whitespace (including a trailing `\r`) is ignored.
pub fn parse_line(line: &[u8], line_number: usize) -> Result<Record> {
    let malformed = || H2StatError::MalformedRecord { line_number };

    let mut fields = line
        .split(|&b| is_separator(b))
        .filter(|field| !field.is_empty());

    let start_us = fields.next().and_then(parse_unsigned).ok_or_else(malformed)?;
    let response_code = fields.next().and_then(parse_signed).ok_or_else(malformed)?;
    let ttlb_us = fields.next().and_then(parse_unsigned).ok_or_else(malformed)?;
    if fields.next().is_some() {
        return Err(malformed());
    }

    Ok(Record { start_us, response_code, ttlb_us })
}

/// Whitespace in the Latin-1 sense: ASCII whitespace plus vertical tab,
/// the information separators `\x1c`-`\x1f`, NEL (`\x85`) and NBSP (`\xa0`).
fn is_separator(b: u8) -> bool {
    b.is_ascii_whitespace() || matches!(b, 0x0b | 0x1c..=0x1f | 0x85 | 0xa0)
}

/// Digits only: no sign, no overflow.
fn parse_unsigned(field: &[u8]) -> Option<u64> {
    if field.is_empty() {
        return None;
    }
    field.iter().try_fold(0u64, |acc, &b| {
        if !b.is_ascii_digit() {
            return None;
        }
        acc.checked_mul(10)?.checked_add(u64::from(b - b'0'))
    })
}

/// Optional leading `-` followed by digits.
fn parse_signed(field: &[u8]) -> Option<i64> {
    match field.split_first() {
        Some((b'-', digits)) => {
            let magnitude = parse_unsigned(digits)?;
            0i64.checked_sub_unsigned(magnitude)
        }
        _ => i64::try_from(parse_unsigned(field)?).ok(),
    }
}
