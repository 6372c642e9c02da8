//! Projection engine: geographic coordinates and elevation → screen space.
//!
//! All mapping is linear against the dataset-wide [`RangeSet`]. Longitude
//! increases left → right; latitude is inverted (higher latitude nearer the
//! top of the viewport); elevation scales the marker edge length between
//! [`MIN_POINT_SIZE`] and [`MAX_POINT_SIZE`].

use egui::{Pos2, Rect};

use crate::data::dataset::{Dataset, RangeSet};
use crate::data::record::{ActivityClass, Record};
use crate::filter::FilterState;

/// Marker edge length for the lowest elevation in the dataset.
pub const MIN_POINT_SIZE: f32 = 4.0;
/// Marker edge length for the highest elevation in the dataset.
pub const MAX_POINT_SIZE: f32 = 20.0;

/// One record projected into the current frame's viewport.
///
/// Ephemeral: the set of projected points is rebuilt from scratch every
/// frame and never outlives it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    /// Index into [`Dataset::records`].
    pub index: usize,
    pub pos: Pos2,
    /// Marker edge length in pixels; also drives the hover hit radius.
    pub size: f32,
    pub class: ActivityClass,
}

/// Linear remap of `value` from `[in_min, in_max]` to `[out_min, out_max]`.
///
/// A degenerate input range (`in_max == in_min`) would divide by zero, so
/// it maps to the midpoint of the output range instead of producing NaN.
/// No clamping: values outside the input range extrapolate, matching the
/// source data always lying within the dataset-wide ranges.
pub fn remap(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    if in_max == in_min {
        return 0.5 * (out_min + out_max);
    }
    out_min + (value - in_min) * (out_max - out_min) / (in_max - in_min)
}

/// Project one record into `viewport`.
///
/// Contract: `record` must be elevation-valid (see
/// [`Record::is_elevation_valid`]). Callers iterate through
/// [`project_visible`], which enforces the precondition; invoking this
/// directly on an invalid record is a caller bug.
pub fn project(record: &Record, ranges: &RangeSet, viewport: Rect) -> ProjectedPoint {
    debug_assert!(
        record.is_elevation_valid(),
        "project() requires an elevation-valid record"
    );
    let elevation = record.elevation.unwrap_or_default();

    let x = remap(
        record.longitude,
        ranges.min_lon,
        ranges.max_lon,
        f64::from(viewport.left()),
        f64::from(viewport.right()),
    );
    // Inverted: higher latitude lands nearer the top (smaller y).
    let y = remap(
        record.latitude,
        ranges.min_lat,
        ranges.max_lat,
        f64::from(viewport.bottom()),
        f64::from(viewport.top()),
    );
    let size = remap(
        elevation,
        ranges.min_elev,
        ranges.max_elev,
        f64::from(MIN_POINT_SIZE),
        f64::from(MAX_POINT_SIZE),
    );

    ProjectedPoint {
        // Placeholder; project_visible assigns the record's index.
        index: 0,
        pos: Pos2::new(x as f32, y as f32),
        size: size as f32,
        class: record.activity(),
    }
}

/// Project every drawable record that passes the current filter.
///
/// Records are visited in source order, which fixes the iteration order the
/// selection resolver uses for tie-breaking. Recomputed from scratch each
/// frame; nothing is cached across frames.
pub fn project_visible(
    dataset: &Dataset,
    filter: &FilterState,
    viewport: Rect,
) -> Vec<ProjectedPoint> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.is_elevation_valid() && filter.is_eligible(record))
        .map(|(index, record)| ProjectedPoint {
            index,
            ..project(record, &dataset.ranges, viewport)
        })
        .collect()
}
