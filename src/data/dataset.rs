//! Dataset: owned records plus the summary statistics derived from them.

use std::collections::HashMap;

use crate::data::record::Record;

/// Errors surfaced by dataset construction and loading.
///
/// Per-record anomalies are never errors (they are skipped and logged);
/// only dataset-wide problems reach the caller.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("dataset contains no geographically valid records")]
    Empty,
    #[error("dataset contains no records with a finite elevation")]
    NoElevationData,
    #[error("missing required column {0:?} in CSV header")]
    MissingColumn(&'static str),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Global min/max bounds used for linear interpolation into screen space.
///
/// Latitude/longitude bounds are computed over geographically valid records,
/// elevation bounds over elevation-valid records. `min <= max` holds on
/// every axis by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSet {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_elev: f64,
    pub max_elev: f64,
}

/// Parsed records plus the statistics the viewer needs every frame.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// All records, in source order. May include records that are not
    /// drawable (missing elevation); the projection pass skips those.
    pub records: Vec<Record>,
    pub ranges: RangeSet,
    /// Category → number of geographically valid records carrying it.
    /// Empty and "Unknown" categories are not counted.
    pub category_counts: HashMap<String, usize>,
    /// Total number of geographically valid records; this is the count the
    /// "All" filter option advertises.
    pub geo_valid_count: usize,
}

impl Dataset {
    /// Build a dataset from parsed records, computing ranges and category
    /// counts in one pass.
    ///
    /// Fails fast when the ranges would be undefined: [`DatasetError::Empty`]
    /// if no record is geographically valid, [`DatasetError::NoElevationData`]
    /// if none carries a finite elevation. The linear screen mapping divides
    /// by range widths, so proceeding would poison every frame with NaN.
    pub fn from_records(records: Vec<Record>) -> Result<Self, DatasetError> {
        let mut geo_valid_count = 0usize;
        let mut category_counts: HashMap<String, usize> = HashMap::new();

        let mut min_lat = f64::INFINITY;
        let mut max_lat = f64::NEG_INFINITY;
        let mut min_lon = f64::INFINITY;
        let mut max_lon = f64::NEG_INFINITY;
        let mut min_elev = f64::INFINITY;
        let mut max_elev = f64::NEG_INFINITY;
        let mut elevation_valid = 0usize;

        for record in &records {
            if !record.is_geo_valid() {
                continue;
            }
            geo_valid_count += 1;
            min_lat = min_lat.min(record.latitude);
            max_lat = max_lat.max(record.latitude);
            min_lon = min_lon.min(record.longitude);
            max_lon = max_lon.max(record.longitude);

            if let Some(elev) = record.elevation.filter(|e| e.is_finite()) {
                elevation_valid += 1;
                min_elev = min_elev.min(elev);
                max_elev = max_elev.max(elev);
            }

            if !record.category.is_empty() && record.category != "Unknown" {
                *category_counts.entry(record.category.clone()).or_insert(0) += 1;
            }
        }

        if geo_valid_count == 0 {
            return Err(DatasetError::Empty);
        }
        if elevation_valid == 0 {
            return Err(DatasetError::NoElevationData);
        }

        Ok(Self {
            records,
            ranges: RangeSet {
                min_lat,
                max_lat,
                min_lon,
                max_lon,
                min_elev,
                max_elev,
            },
            category_counts,
            geo_valid_count,
        })
    }
}
