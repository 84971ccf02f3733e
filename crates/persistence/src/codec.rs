// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV text encoding and the upsert merge.
//!
//! Columns are matched by header name, so stored files may list them in any
//! order. Values are written unquoted unless they contain a delimiter, quote
//! or newline; such values are quoted instead of corrupting the row.

use crate::error::PersistenceError;
use crate::record::{CsvRecord, CsvRow};
use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use race_schedule_domain::RaceType;
use std::collections::HashMap;
use tracing::warn;

/// Normalizes a CSV header cell for lookup.
fn normalize_header(header: &str) -> String {
    header.trim().trim_start_matches('\u{feff}').to_string()
}

fn header_map(headers: &StringRecord) -> HashMap<String, usize> {
    let mut header_map: HashMap<String, usize> = HashMap::new();
    for (idx, header) in headers.iter().enumerate() {
        header_map.entry(normalize_header(header)).or_insert(idx);
    }
    header_map
}

/// Parses CSV text into records.
///
/// A row that cannot be read or fails validation is logged and dropped;
/// it never aborts the batch. Empty text yields no records.
///
/// # Errors
///
/// Returns `PersistenceError::Csv` if the header line cannot be read.
pub fn decode_records<R: CsvRecord>(
    race_type: RaceType,
    text: &str,
) -> Result<Vec<R>, PersistenceError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());
    let header_map: HashMap<String, usize> = header_map(reader.headers()?);

    let mut records: Vec<R> = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let row_number: usize = idx + 1;
        let record: StringRecord = match result {
            Ok(record) => record,
            Err(e) => {
                warn!(
                    kind = R::KIND,
                    %race_type,
                    row_number,
                    error = %e,
                    "Skipping unreadable CSV row"
                );
                continue;
            }
        };
        match R::from_row(&CsvRow::new(race_type, &header_map, &record)) {
            Ok(parsed) => records.push(parsed),
            Err(e) => {
                warn!(
                    kind = R::KIND,
                    %race_type,
                    row_number,
                    error = %e,
                    "Skipping invalid CSV row"
                );
            }
        }
    }
    Ok(records)
}

/// Serializes records as CSV text with a header line.
///
/// # Errors
///
/// Returns an error if the CSV writer fails or produces invalid UTF-8.
pub fn encode_records<R: CsvRecord>(
    race_type: RaceType,
    records: &[R],
) -> Result<String, PersistenceError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(R::headers(race_type))?;
    for record in records {
        writer.write_record(record.to_row())?;
    }
    let bytes: Vec<u8> = writer
        .into_inner()
        .map_err(|e| PersistenceError::Encoding(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| PersistenceError::Encoding(e.to_string()))
}

/// Merges a batch into an existing record set by id.
///
/// A batch record whose id already exists overwrites that record in place;
/// any other batch record is appended. The result is sorted newest first,
/// keeping the previous relative order of records sharing a date.
#[must_use]
pub fn upsert_merge<R: CsvRecord>(existing: Vec<R>, batch: Vec<R>) -> Vec<R> {
    let mut merged: Vec<R> = existing;
    let mut index: HashMap<String, usize> = HashMap::new();
    for (idx, record) in merged.iter().enumerate() {
        index.entry(record.id().to_string()).or_insert(idx);
    }

    for record in batch {
        if let Some(&idx) = index.get(record.id()) {
            merged[idx] = record;
        } else {
            index.insert(record.id().to_string(), merged.len());
            merged.push(record);
        }
    }

    merged.sort_by(|a, b| b.sort_date().cmp(&a.sort_date()));
    merged
}
