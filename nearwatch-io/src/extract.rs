//! Loaders: flat files → unlinked record collections.
//!
//! `load_neos` reads the NASA small-body CSV (one row per body, named
//! columns, many of which we ignore). `load_approaches` reads the CAD
//! JSON document, whose records are positional arrays of strings.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use nearwatch_core::{CloseApproach, NearEarthObject};

use crate::error::{IoError, Result};
use crate::time;

/// The columns we pull out of the small-body CSV. Every other column
/// in the source file is ignored.
#[derive(Debug, Deserialize)]
struct NeoRow {
    pdes: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    diameter: String,
    #[serde(default)]
    pha: String,
}

/// Load near-Earth objects from a CSV file.
///
/// Field mapping: `pdes` → designation, `name` → name (empty → none),
/// `diameter` → diameter in km (empty → unknown), `pha` → hazardous
/// (`Y`, case-insensitive). The returned collection is unlinked.
///
/// # Errors
/// Fails on unreadable files, CSV structure errors, and non-empty
/// diameter fields that do not parse as a number.
pub fn load_neos<P: AsRef<Path>>(path: P) -> Result<Vec<NearEarthObject>> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;
    let mut neos = Vec::new();
    for (i, row) in reader.deserialize::<NeoRow>().enumerate() {
        let row = row?;
        let name = (!row.name.is_empty()).then_some(row.name);
        let diameter = parse_optional_f64(&row.diameter, i, "diameter")?;
        let hazardous = row.pha.trim().eq_ignore_ascii_case("y");
        neos.push(NearEarthObject::new(row.pdes, name, diameter, hazardous));
    }
    info!(count = neos.len(), path = %path.as_ref().display(), "loaded NEOs");
    Ok(neos)
}

/// Positions of the fields we use inside a CAD record.
const CAD_DESIGNATION: usize = 0;
const CAD_TIME: usize = 3;
const CAD_DISTANCE: usize = 4;
const CAD_VELOCITY: usize = 7;

/// The CAD document: a JSON object whose `data` member is an array of
/// positional records.
#[derive(Debug, Deserialize)]
struct CadDocument {
    #[serde(default)]
    data: Vec<Vec<Value>>,
}

/// Load close approaches from a CAD JSON file.
///
/// Field mapping per record: position 0 → designation, 3 → calendar
/// date, 4 → distance (au), 7 → velocity (km/s). The returned
/// collection is unlinked.
///
/// # Errors
/// Fails on unreadable files, JSON structure errors, and records whose
/// used positions are missing, non-string, or unparseable.
pub fn load_approaches<P: AsRef<Path>>(path: P) -> Result<Vec<CloseApproach>> {
    let file = File::open(path.as_ref())?;
    let doc: CadDocument = serde_json::from_reader(BufReader::new(file))?;

    let mut approaches = Vec::with_capacity(doc.data.len());
    for (i, record) in doc.data.iter().enumerate() {
        let designation = string_field(record, i, CAD_DESIGNATION, "designation")?;
        let cd = string_field(record, i, CAD_TIME, "calendar date")?;
        let time = time::parse_cd(cd).map_err(|e| IoError::MalformedRecord {
            index: i,
            reason: format!("calendar date {cd:?}: {e}"),
        })?;
        let distance = f64_field(record, i, CAD_DISTANCE, "distance")?;
        let velocity = f64_field(record, i, CAD_VELOCITY, "velocity")?;
        approaches.push(CloseApproach::new(designation, time, distance, velocity));
    }
    info!(
        count = approaches.len(),
        path = %path.as_ref().display(),
        "loaded close approaches"
    );
    Ok(approaches)
}

fn string_field<'a>(
    record: &'a [Value],
    index: usize,
    position: usize,
    field: &str,
) -> Result<&'a str> {
    record
        .get(position)
        .and_then(Value::as_str)
        .ok_or_else(|| IoError::MalformedRecord {
            index,
            reason: format!("missing or non-string {field} at position {position}"),
        })
}

fn f64_field(record: &[Value], index: usize, position: usize, field: &str) -> Result<f64> {
    let raw = string_field(record, index, position, field)?;
    raw.trim().parse().map_err(|_| IoError::MalformedRecord {
        index,
        reason: format!("{field} {raw:?} is not a number"),
    })
}

fn parse_optional_f64(raw: &str, index: usize, field: &str) -> Result<Option<f64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| IoError::MalformedRecord {
            index,
            reason: format!("{field} {raw:?} is not a number"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_f64_handles_empty_and_bad_input() {
        assert_eq!(parse_optional_f64("", 0, "diameter").expect("ok"), None);
        assert_eq!(parse_optional_f64(" ", 0, "diameter").expect("ok"), None);
        assert_eq!(
            parse_optional_f64("16.84", 0, "diameter").expect("ok"),
            Some(16.84)
        );
        assert!(parse_optional_f64("wide", 0, "diameter").is_err());
    }
}
