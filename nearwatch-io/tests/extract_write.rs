//! Integration tests — extract, link, query, write.
//!
//! These run the full pipeline over small fixture files: load both
//! collections, build the store, filter, and check the serialized
//! output shape field by field.

use std::fs;
use std::io::Write as _;

use nearwatch_core::{NeoDatabase, Predicate};
use nearwatch_io::{load_approaches, load_neos, write_csv, write_json};

/// Small-body CSV with the real column set trimmed to what matters,
/// plus an extra column the loader must ignore.
const NEO_CSV: &str = "\
pdes,name,diameter,pha,orbit_id
433,Eros,16.84,N,JPL 1
2010 PK9,,,Y,JPL 2
1036,Ganymed,37.675,N,JPL 3
";

/// CAD JSON with the positional record layout: designation at 0,
/// calendar date at 3, distance at 4, velocity at 7.
const CAD_JSON: &str = r#"{
  "signature": {"source": "NASA/JPL SBDB Close Approach Data API", "version": "1.1"},
  "count": 3,
  "data": [
    ["433", "126", "2459000.5", "2020-Jan-01 00:00", "0.15", "0.14", "0.16", "5.0", "4.9", "00:21"],
    ["2010 PK9", "42", "2459030.5", "2020-Feb-01 12:00", "0.05", "0.04", "0.06", "19.3", "19.1", "00:07"],
    ["1036", "99", "2459100.5", "2020-Apr-15 09:00", "0.45", "0.44", "0.46", "8.9", "8.8", "00:55"]
  ]
}"#;

fn fixture(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = fs::File::create(&path).expect("create fixture");
    file.write_all(content.as_bytes()).expect("write fixture");
    path
}

// ---------------------------------------------------------------------------
// Loaders
// ---------------------------------------------------------------------------

#[test]
fn load_neos_maps_fields_and_empties() {
    let dir = tempfile::tempdir().expect("tempdir");
    let neos = load_neos(fixture(&dir, "neos.csv", NEO_CSV)).expect("load");

    assert_eq!(neos.len(), 3);

    let eros = &neos[0];
    assert_eq!(eros.designation, "433");
    assert_eq!(eros.name.as_deref(), Some("Eros"));
    assert_eq!(eros.diameter, Some(16.84));
    assert!(!eros.hazardous);
    assert!(eros.approaches.is_empty(), "loader output is unlinked");

    let pk9 = &neos[1];
    assert_eq!(pk9.name, None, "empty name column becomes no name");
    assert_eq!(pk9.diameter, None, "empty diameter column becomes unknown");
    assert!(pk9.hazardous, "pha Y flag");
}

#[test]
fn load_approaches_maps_positions() {
    let dir = tempfile::tempdir().expect("tempdir");
    let approaches = load_approaches(fixture(&dir, "cad.json", CAD_JSON)).expect("load");

    assert_eq!(approaches.len(), 3);
    let first = &approaches[0];
    assert_eq!(first.designation, "433");
    assert_eq!(first.time.format("%Y-%m-%d %H:%M").to_string(), "2020-01-01 00:00");
    assert_eq!(first.distance, 0.15);
    assert_eq!(first.velocity, 5.0);
    assert!(first.neo.is_none(), "loader output is unlinked");
}

#[test]
fn load_approaches_reports_malformed_records() {
    let dir = tempfile::tempdir().expect("tempdir");
    let bad = r#"{"data": [["433", "x", "y", "not a date", "0.1", "a", "b", "5.0"]]}"#;
    let err = load_approaches(fixture(&dir, "bad.json", bad)).expect_err("must fail");
    assert!(err.to_string().contains("malformed record #0"));
}

// ---------------------------------------------------------------------------
// Writers
// ---------------------------------------------------------------------------

#[test]
fn csv_output_has_header_and_field_shape() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db = NeoDatabase::new(
        load_neos(fixture(&dir, "neos.csv", NEO_CSV)).expect("neos"),
        load_approaches(fixture(&dir, "cad.json", CAD_JSON)).expect("approaches"),
    );

    let out = dir.path().join("out.csv");
    write_csv(db.query(&[]), &out).expect("write");

    let content = fs::read_to_string(&out).expect("read back");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines[0],
        "datetime_utc,distance_au,velocity_km_s,designation,name,diameter_km,potentially_hazardous"
    );
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1], "2020-01-01 00:00,0.15,5.0,433,Eros,16.84,false");
    // Unnamed body: empty name field; unknown diameter: empty field.
    assert_eq!(lines[2], "2020-02-01 12:00,0.05,19.3,2010 PK9,,,true");
}

#[test]
fn csv_header_survives_an_empty_stream() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db = NeoDatabase::new(
        load_neos(fixture(&dir, "neos.csv", NEO_CSV)).expect("neos"),
        load_approaches(fixture(&dir, "cad.json", CAD_JSON)).expect("approaches"),
    );

    let filters: Vec<Predicate> = vec![Box::new(|_| false)];
    let out = dir.path().join("empty.csv");
    write_csv(db.query(&filters), &out).expect("write");

    let content = fs::read_to_string(&out).expect("read back");
    assert_eq!(content.lines().count(), 1, "header only");
}

#[test]
fn json_output_nests_the_neo_and_uses_null_for_unknown_diameter() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db = NeoDatabase::new(
        load_neos(fixture(&dir, "neos.csv", NEO_CSV)).expect("neos"),
        load_approaches(fixture(&dir, "cad.json", CAD_JSON)).expect("approaches"),
    );

    let out = dir.path().join("out.json");
    write_json(db.query(&[]), &out).expect("write");

    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("read back")).expect("parse");
    let array = parsed.as_array().expect("top-level array");
    assert_eq!(array.len(), 3);

    let first = &array[0];
    assert_eq!(first["datetime_utc"], "2020-01-01 00:00");
    assert_eq!(first["distance_au"], 0.15);
    assert_eq!(first["velocity_km_s"], 5.0);
    assert_eq!(first["neo"]["designation"], "433");
    assert_eq!(first["neo"]["name"], "Eros");
    assert_eq!(first["neo"]["diameter_km"], 16.84);
    assert_eq!(first["neo"]["potentially_hazardous"], false);

    let second = &array[1];
    assert_eq!(second["neo"]["name"], "", "missing name is the empty string");
    assert!(second["neo"]["diameter_km"].is_null(), "unknown diameter is null");
    assert_eq!(second["neo"]["potentially_hazardous"], true);
}

#[test]
fn filtered_query_flows_through_to_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db = NeoDatabase::new(
        load_neos(fixture(&dir, "neos.csv", NEO_CSV)).expect("neos"),
        load_approaches(fixture(&dir, "cad.json", CAD_JSON)).expect("approaches"),
    );

    let filters: Vec<Predicate> = vec![
        Box::new(|la| la.approach.distance < 0.2),
        Box::new(|la| la.neo.is_some_and(|neo| neo.hazardous)),
    ];
    let out = dir.path().join("filtered.json");
    write_json(db.query(&filters), &out).expect("write");

    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("read back")).expect("parse");
    let array = parsed.as_array().expect("array");
    assert_eq!(array.len(), 1);
    assert_eq!(array[0]["neo"]["designation"], "2010 PK9");
}
