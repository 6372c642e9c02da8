//! Volcano records and their validity rules.

/// One volcano entry as parsed from the input table.
///
/// Coordinates are stored as-parsed: a field that failed to parse becomes
/// `f64::NAN` (latitude/longitude) or `None` (elevation), so validity is a
/// property of the record rather than of the loader.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    pub name: String,
    pub country: String,
    /// Full type string shown in the detail bar (e.g. "Stratovolcano").
    pub volcano_type: String,
    /// Activity status string driving the color classification.
    pub status: String,
    /// Coarse type category driving the filter buttons.
    pub category: String,
    /// Opaque display string; never parsed as a date.
    pub last_eruption: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Elevation in meters, absent when the source field was missing or
    /// unparseable.
    pub elevation: Option<f64>,
}

impl Record {
    /// A record can be placed on the map iff both coordinates are finite.
    pub fn is_geo_valid(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// A record can be *drawn* iff it is geographically valid and carries a
    /// finite elevation (elevation determines the marker size).
    pub fn is_elevation_valid(&self) -> bool {
        self.is_geo_valid() && self.elevation.is_some_and(f64::is_finite)
    }

    /// Activity classification of this record's status string.
    pub fn activity(&self) -> ActivityClass {
        ActivityClass::classify(&self.status)
    }
}

/// Coarse activity classification derived from the `Status` column.
///
/// The mapping follows the Smithsonian-style status vocabulary: "Historical"
/// and dated statuses (`D1`..`D7`) are treated as active, "Holocene" and
/// "U" (undated) as dormant, everything else (including the empty string)
/// as other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityClass {
    Active,
    Dormant,
    Other,
}

impl ActivityClass {
    /// Classify a status string. Total over all inputs and side-effect free.
    pub fn classify(status: &str) -> Self {
        if status.contains("Historical") || status.starts_with('D') {
            ActivityClass::Active
        } else if status.contains("Holocene") || status == "U" {
            ActivityClass::Dormant
        } else {
            ActivityClass::Other
        }
    }

    /// Human-readable label used by the legend.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityClass::Active => "Active / Historical (D)",
            ActivityClass::Dormant => "Dormant / Holocene (U)",
            ActivityClass::Other => "Other / Unknown",
        }
    }
}
