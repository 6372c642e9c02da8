//! CSV loading for the volcano table.
//!
//! Columns are located by header name so the source column order does not
//! matter. Records whose coordinates cannot be parsed are dropped here
//! (they could never be drawn or selected); records that are merely missing
//! an elevation are kept so they still contribute to the lat/lon ranges.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::data::dataset::{Dataset, DatasetError};
use crate::data::record::Record;

const COL_LATITUDE: &str = "Latitude";
const COL_LONGITUDE: &str = "Longitude";
const COL_ELEVATION: &str = "Elevation (m)";
const COL_STATUS: &str = "Status";
const COL_CATEGORY: &str = "TypeCategory";
const COL_NAME: &str = "Volcano Name";
const COL_COUNTRY: &str = "Country";
const COL_TYPE: &str = "Type";
const COL_ERUPTION: &str = "Last Known Eruption";

/// Column indices resolved once from the header row.
struct Columns {
    latitude: usize,
    longitude: usize,
    elevation: usize,
    status: usize,
    category: usize,
    name: usize,
    country: usize,
    volcano_type: usize,
    eruption: usize,
}

impl Columns {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, DatasetError> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or(DatasetError::MissingColumn(name))
        };
        Ok(Self {
            latitude: find(COL_LATITUDE)?,
            longitude: find(COL_LONGITUDE)?,
            elevation: find(COL_ELEVATION)?,
            status: find(COL_STATUS)?,
            category: find(COL_CATEGORY)?,
            name: find(COL_NAME)?,
            country: find(COL_COUNTRY)?,
            volcano_type: find(COL_TYPE)?,
            eruption: find(COL_ERUPTION)?,
        })
    }
}

/// Parse a coordinate field; unparseable input becomes NaN so the record's
/// own validity rules decide its fate.
fn parse_coord(field: &str) -> f64 {
    field.trim().parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_elevation(field: &str) -> Option<f64> {
    field.trim().parse::<f64>().ok().filter(|e| e.is_finite())
}

/// Load a dataset from any CSV reader.
///
/// Geographically invalid rows are skipped with a debug log each and a
/// single warning summary; all other per-row anomalies degrade the record
/// (missing elevation) rather than dropping it.
pub fn load_csv<R: Read>(reader: R) -> Result<Dataset, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let columns = Columns::resolve(csv_reader.headers()?)?;

    let mut records = Vec::new();
    let mut skipped = 0usize;
    let mut total_rows = 0usize;

    for row in csv_reader.records() {
        let row = row?;
        total_rows += 1;

        let field = |idx: usize| row.get(idx).unwrap_or("").to_string();
        let record = Record {
            name: field(columns.name),
            country: field(columns.country),
            volcano_type: field(columns.volcano_type),
            status: field(columns.status),
            category: field(columns.category),
            last_eruption: field(columns.eruption),
            latitude: parse_coord(row.get(columns.latitude).unwrap_or("")),
            longitude: parse_coord(row.get(columns.longitude).unwrap_or("")),
            elevation: parse_elevation(row.get(columns.elevation).unwrap_or("")),
        };

        if !record.is_geo_valid() {
            log::debug!(
                "skipping row {} ({:?}): unparseable coordinates",
                total_rows,
                record.name
            );
            skipped += 1;
            continue;
        }
        records.push(record);
    }

    if skipped > 0 {
        log::warn!(
            "skipped {skipped} of {total_rows} rows with invalid coordinates"
        );
    }
    log::info!("loaded {} of {} rows", records.len(), total_rows);

    Dataset::from_records(records)
}

/// Load a dataset from a CSV file on disk.
pub fn load_csv_path<P: AsRef<Path>>(path: P) -> Result<Dataset, DatasetError> {
    let file = File::open(path.as_ref())?;
    load_csv(file)
}
