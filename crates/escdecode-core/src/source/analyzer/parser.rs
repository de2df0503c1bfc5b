use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecordsIntoIter, Trim};

use crate::Sample;
use crate::source::{SampleSource, SourceError};

use super::error::CsvSourceError;
use super::layout;
use super::reader::{cell, column_index, map_csv_error, parse_time_ns};

/// Sample source reading a logic-analyzer CSV export row by row.
pub struct CsvSampleSource<R> {
    records: StringRecordsIntoIter<R>,
    columns: Columns,
    row: u64,
}

#[derive(Debug, Clone, Copy)]
struct Columns {
    time: usize,
    miso: usize,
    mosi: usize,
}

impl CsvSampleSource<File> {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path).map_err(SourceError::from)?;
        Self::from_reader(file)
    }
}

impl<R: Read> CsvSampleSource<R> {
    pub fn from_reader(input: R) -> Result<Self, SourceError> {
        create_source(input).map_err(SourceError::from)
    }
}

impl<R: Read> SampleSource for CsvSampleSource<R> {
    fn next_sample(&mut self) -> Result<Option<Sample>, SourceError> {
        next_sample(self).map_err(SourceError::from)
    }
}

fn create_source<R: Read>(input: R) -> Result<CsvSampleSource<R>, CsvSourceError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input);
    let headers = reader
        .headers()
        .map_err(|e| map_csv_error("csv header", e))?;
    let columns = Columns {
        time: column_index(headers, layout::TIME_COLUMN)?,
        miso: column_index(headers, layout::MISO_COLUMN)?,
        mosi: column_index(headers, layout::MOSI_COLUMN)?,
    };
    Ok(CsvSampleSource {
        records: reader.into_records(),
        columns,
        row: 0,
    })
}

fn next_sample<R: Read>(source: &mut CsvSampleSource<R>) -> Result<Option<Sample>, CsvSourceError> {
    let record = match source.records.next() {
        Some(record) => record.map_err(|e| map_csv_error("csv record", e))?,
        None => return Ok(None),
    };
    source.row += 1;
    let columns = source.columns;
    let timestamp = parse_time_ns(cell(&record, columns.time), source.row)?;
    Ok(Some(Sample {
        miso: cell(&record, columns.miso).to_string(),
        mosi: cell(&record, columns.mosi).to_string(),
        timestamp,
    }))
}
