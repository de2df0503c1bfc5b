use csv::StringRecord;
use time::Duration;

use super::error::CsvSourceError;

/// Locate a required column in the CSV header.
///
/// # Examples
/// This helper is part of an internal module, so the example is marked as
/// text example.
/// ```text
/// use csv::StringRecord;
///
/// let headers = StringRecord::from(vec!["Id", "Time[ns]"]);
/// assert_eq!(column_index(&headers, "Time[ns]").unwrap(), 1);
/// ```
pub fn column_index(headers: &StringRecord, column: &'static str) -> Result<usize, CsvSourceError> {
    headers
        .iter()
        .position(|name| name.trim() == column)
        .ok_or(CsvSourceError::MissingColumn { column })
}

/// Read a cell, treating a missing trailing cell as empty.
pub fn cell(record: &StringRecord, index: usize) -> &str {
    record.get(index).map(str::trim).unwrap_or("")
}

/// Parse a `Time[ns]` cell into a duration, truncating fractional
/// nanoseconds toward zero.
///
/// # Examples
/// ```text
/// let ts = parse_time_ns("1500.9", 1).unwrap();
/// assert_eq!(ts.whole_nanoseconds(), 1500);
/// ```
pub fn parse_time_ns(value: &str, row: u64) -> Result<Duration, CsvSourceError> {
    let invalid = || CsvSourceError::InvalidTime {
        row,
        value: value.to_string(),
    };
    let ns = value.trim().parse::<f64>().map_err(|_| invalid())?;
    if !ns.is_finite() {
        return Err(invalid());
    }
    Ok(Duration::nanoseconds(ns.trunc() as i64))
}

pub fn map_csv_error(context: &'static str, err: csv::Error) -> CsvSourceError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(io) => CsvSourceError::Io(io),
        _ => CsvSourceError::Csv { context, message },
    }
}
