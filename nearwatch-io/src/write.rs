//! Writers: a filtered stream of linked approaches → CSV or JSON.
//!
//! Both writers take the query engine's output stream directly and
//! consume it once; the CSV writer emits row by row, the JSON writer
//! assembles the array before writing. Approaches the linker left
//! unresolved carry no NEO fields to emit, so they are skipped with a
//! warning.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use nearwatch_core::LinkedApproach;

use crate::error::Result;
use crate::time;

/// CSV header, fixed regardless of how many rows follow.
const CSV_FIELDS: [&str; 7] = [
    "datetime_utc",
    "distance_au",
    "velocity_km_s",
    "designation",
    "name",
    "diameter_km",
    "potentially_hazardous",
];

#[derive(Serialize)]
struct CsvRow<'a> {
    datetime_utc: String,
    distance_au: f64,
    velocity_km_s: f64,
    designation: &'a str,
    name: &'a str,
    // An unknown diameter serializes as an empty field.
    diameter_km: Option<f64>,
    potentially_hazardous: bool,
}

/// Write a stream of linked approaches to a CSV file.
///
/// The header row is always emitted, even for an empty stream. The
/// hazardous flag appears in literal textual form (`true` / `false`);
/// a missing name as the empty string.
///
/// # Errors
/// Fails on file creation and CSV serialization errors.
pub fn write_csv<'a, I, P>(results: I, path: P) -> Result<()>
where
    I: IntoIterator<Item = LinkedApproach<'a>>,
    P: AsRef<Path>,
{
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path.as_ref())?;
    writer.write_record(CSV_FIELDS)?;

    let mut rows = 0usize;
    for linked in results {
        let Some(neo) = linked.neo else {
            warn!(
                designation = %linked.approach.designation,
                "skipping unlinked approach in CSV output"
            );
            continue;
        };
        writer.serialize(CsvRow {
            datetime_utc: time::format_datetime(&linked.approach.time),
            distance_au: linked.approach.distance,
            velocity_km_s: linked.approach.velocity,
            designation: &neo.designation,
            name: neo.name.as_deref().unwrap_or(""),
            diameter_km: neo.diameter,
            potentially_hazardous: neo.hazardous,
        })?;
        rows += 1;
    }
    writer.flush()?;
    info!(rows, path = %path.as_ref().display(), "wrote close approaches to CSV");
    Ok(())
}

#[derive(Serialize)]
struct JsonApproach<'a> {
    datetime_utc: String,
    distance_au: f64,
    velocity_km_s: f64,
    neo: JsonNeo<'a>,
}

#[derive(Serialize)]
struct JsonNeo<'a> {
    designation: &'a str,
    name: &'a str,
    // `null` is this crate's not-a-number sentinel: JSON has no NaN
    // literal, and serde_json refuses non-finite floats.
    diameter_km: Option<f64>,
    potentially_hazardous: bool,
}

/// Write a stream of linked approaches to a JSON file as a top-level
/// array.
///
/// A missing name appears as the empty string; an unknown diameter as
/// `null`.
///
/// # Errors
/// Fails on file creation and JSON serialization errors.
pub fn write_json<'a, I, P>(results: I, path: P) -> Result<()>
where
    I: IntoIterator<Item = LinkedApproach<'a>>,
    P: AsRef<Path>,
{
    let entries: Vec<JsonApproach<'_>> = results
        .into_iter()
        .filter_map(|linked| {
            let Some(neo) = linked.neo else {
                warn!(
                    designation = %linked.approach.designation,
                    "skipping unlinked approach in JSON output"
                );
                return None;
            };
            Some(JsonApproach {
                datetime_utc: time::format_datetime(&linked.approach.time),
                distance_au: linked.approach.distance,
                velocity_km_s: linked.approach.velocity,
                neo: JsonNeo {
                    designation: &neo.designation,
                    name: neo.name.as_deref().unwrap_or(""),
                    diameter_km: neo.diameter,
                    potentially_hazardous: neo.hazardous,
                },
            })
        })
        .collect();

    let file = File::create(path.as_ref())?;
    serde_json::to_writer(BufWriter::new(file), &entries)?;
    info!(
        rows = entries.len(),
        path = %path.as_ref().display(),
        "wrote close approaches to JSON"
    );
    Ok(())
}
