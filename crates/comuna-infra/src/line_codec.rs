//! Line codec for the comuna store
//!
//! One record per physical line, six comma-separated fields:
//! `id,zone,population,name,code,YYYY-MM-DD`. No header. Fields holding a
//! comma or a double quote are written inside double quotes; everything else
//! is written bare. Line breaks inside a field cannot be stored. Each line is
//! decoded on its own, so a bad line never affects its neighbours. Blank
//! lines are ignored on read.

use std::io::{self, BufRead, Write};
use std::path::Path;

use chrono::NaiveDate;
use comuna_types::{Comuna, LoadPolicy, StoreError, DATE_FORMAT};

/// Number of fields per store line
pub const FIELD_COUNT: usize = 6;

/// Result of decoding a whole store
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub comunas: Vec<Comuna>,
    /// Lines skipped under `LoadPolicy::Skip`
    pub malformed: Vec<StoreError>,
}

/// Decode every record in `reader`
///
/// `path` only labels I/O errors. Under `LoadPolicy::Abort` the first bad
/// line is returned as `StoreError::MalformedRecord`.
pub fn read_comunas<R: BufRead>(
    reader: R,
    path: &Path,
    policy: LoadPolicy,
) -> Result<LoadOutcome, StoreError> {
    let mut outcome = LoadOutcome::default();

    for (idx, chunk) in reader.split(b'\n').enumerate() {
        let mut bytes = chunk.map_err(|source| StoreError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        if bytes.is_empty() {
            continue;
        }

        match decode_line(&bytes) {
            Ok(comuna) => outcome.comunas.push(comuna),
            Err(reason) => {
                let malformed = StoreError::MalformedRecord {
                    line: idx as u64 + 1,
                    reason,
                };
                match policy {
                    LoadPolicy::Abort => return Err(malformed),
                    LoadPolicy::Skip => outcome.malformed.push(malformed),
                }
            }
        }
    }

    Ok(outcome)
}

/// Check that a record fits on a single store line
pub fn check_storable(comuna: &Comuna) -> Result<(), String> {
    for (column, value) in [("zone", comuna.zone()), ("name", comuna.name())] {
        if value.contains(['\n', '\r']) {
            return Err(format!("{} contains a line break", column));
        }
    }
    Ok(())
}

/// Write every record to `writer`, one line each, then flush
pub fn write_comunas<W: Write>(writer: W, comunas: &[Comuna]) -> io::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    for comuna in comunas {
        check_storable(comuna).map_err(|reason| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("comuna {}: {}", comuna.id(), reason),
            )
        })?;
        writer.write_record(encode_fields(comuna))?;
    }
    writer.flush()
}

fn decode_line(bytes: &[u8]) -> Result<Comuna, String> {
    let text = std::str::from_utf8(bytes).map_err(|e| format!("invalid UTF-8: {}", e))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut records = reader.records();

    let record = match records.next() {
        Some(record) => record.map_err(|e| e.to_string())?,
        None => return Err("no fields".to_string()),
    };
    if records.next().is_some() {
        return Err("line holds more than one record".to_string());
    }

    parse_record(&record)
}

fn encode_fields(comuna: &Comuna) -> [String; FIELD_COUNT] {
    [
        comuna.id().to_string(),
        comuna.zone().to_string(),
        comuna.population().to_string(),
        comuna.name().to_string(),
        comuna.code().to_string(),
        comuna.registration_date().format(DATE_FORMAT).to_string(),
    ]
}

fn parse_record(record: &csv::StringRecord) -> Result<Comuna, String> {
    if record.len() != FIELD_COUNT {
        return Err(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            record.len()
        ));
    }

    let id = parse_i32(&record[0], "id")?;
    let zone = &record[1];
    let population = parse_i32(&record[2], "population")?;
    let name = &record[3];
    let code = parse_i32(&record[4], "code")?;
    let registration_date = NaiveDate::parse_from_str(&record[5], DATE_FORMAT)
        .map_err(|e| format!("invalid registration date `{}`: {}", &record[5], e))?;

    Ok(Comuna::new(id, zone, population, name, code, registration_date))
}

fn parse_i32(s: &str, column: &str) -> Result<i32, String> {
    s.parse()
        .map_err(|_| format!("invalid {} `{}`", column, s))
}
