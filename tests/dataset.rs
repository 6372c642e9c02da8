use egui::{pos2, Rect};
use volcanoscope::{load_csv, project_visible, Dataset, DatasetError, FilterState, Record};

fn record(lat: f64, lon: f64, elev: Option<f64>, category: &str) -> Record {
    Record {
        latitude: lat,
        longitude: lon,
        elevation: elev,
        category: category.to_string(),
        ..Record::default()
    }
}

const CSV: &str = "\
Volcano Name,Country,Type,Latitude,Longitude,Elevation (m),Status,TypeCategory,Last Known Eruption
Etna,Italy,Stratovolcano,37.734,15.004,3350,Historical,Stratovolcano,2021
Bad Row,Nowhere,Unknown,not-a-number,15.0,100,Holocene,Shield,Unknown
Mauna Loa,United States,Shield volcano,19.475,-155.608,4170,Historical,Shield,1984
No Elev,Chile,Stratovolcano,-33.4,-70.6,,Holocene,Stratovolcano,Unknown
";

#[test]
fn ranges_cover_only_valid_records() {
    let records = vec![
        record(10.0, -20.0, Some(100.0), "A"),
        record(f64::NAN, 500.0, Some(9000.0), "A"),
        record(-30.0, 40.0, None, "A"),
    ];
    let dataset = Dataset::from_records(records).expect("two geo-valid records");

    assert_eq!(dataset.geo_valid_count, 2);
    let r = dataset.ranges;
    assert_eq!((r.min_lat, r.max_lat), (-30.0, 10.0));
    assert_eq!(
        (r.min_lon, r.max_lon),
        (-20.0, 40.0),
        "the NaN-latitude record must not contribute its longitude"
    );
    assert_eq!(
        (r.min_elev, r.max_elev),
        (100.0, 100.0),
        "elevation bounds come from elevation-valid records only"
    );
    assert!(r.min_lat <= r.max_lat && r.min_lon <= r.max_lon && r.min_elev <= r.max_elev);
}

#[test]
fn empty_dataset_fails_fast() {
    let err = Dataset::from_records(vec![]).unwrap_err();
    assert!(matches!(err, DatasetError::Empty), "got {err:?}");

    let all_invalid = vec![record(f64::NAN, 0.0, Some(1.0), "")];
    assert!(matches!(
        Dataset::from_records(all_invalid).unwrap_err(),
        DatasetError::Empty
    ));
}

#[test]
fn missing_all_elevations_fails_fast() {
    let records = vec![record(1.0, 2.0, None, ""), record(3.0, 4.0, Some(f64::NAN), "")];
    assert!(matches!(
        Dataset::from_records(records).unwrap_err(),
        DatasetError::NoElevationData
    ));
}

#[test]
fn category_counts_skip_empty_and_unknown() {
    let records = vec![
        record(0.0, 0.0, Some(1.0), "Caldera"),
        record(1.0, 1.0, Some(2.0), "Caldera"),
        record(2.0, 2.0, Some(3.0), "Unknown"),
        record(3.0, 3.0, Some(4.0), ""),
    ];
    let dataset = Dataset::from_records(records).expect("valid dataset");
    assert_eq!(dataset.category_counts.len(), 1);
    assert_eq!(dataset.category_counts.get("Caldera"), Some(&2));
    assert_eq!(dataset.geo_valid_count, 4);
}

#[test]
fn loader_skips_invalid_rows_and_keeps_order() {
    let dataset = load_csv(CSV.as_bytes()).expect("sample CSV must load");

    let names: Vec<&str> = dataset.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        ["Etna", "Mauna Loa", "No Elev"],
        "unparseable coordinates drop the row; source order is preserved"
    );

    let etna = &dataset.records[0];
    assert_eq!(etna.country, "Italy");
    assert_eq!(etna.status, "Historical");
    assert_eq!(etna.category, "Stratovolcano");
    assert_eq!(etna.last_eruption, "2021");
    assert_eq!(etna.elevation, Some(3350.0));

    let no_elev = &dataset.records[2];
    assert!(no_elev.is_geo_valid());
    assert!(!no_elev.is_elevation_valid(), "blank elevation stays absent");

    assert_eq!(dataset.geo_valid_count, 3);
    assert_eq!((dataset.ranges.min_elev, dataset.ranges.max_elev), (3350.0, 4170.0));
}

#[test]
fn loader_rejects_missing_columns() {
    let csv = "Volcano Name,Latitude,Longitude\nEtna,37.7,15.0\n";
    let err = load_csv(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, DatasetError::MissingColumn(_)), "got {err:?}");
}

#[test]
fn visible_projection_gates_on_filter_and_elevation() {
    let dataset = load_csv(CSV.as_bytes()).expect("sample CSV must load");
    let viewport = Rect::from_min_max(pos2(0.0, 0.0), pos2(200.0, 100.0));

    let all = project_visible(&dataset, &FilterState::All, viewport);
    assert_eq!(
        all.len(),
        2,
        "the elevation-less record is never projected"
    );
    assert!(all[0].index < all[1].index, "iteration order follows source order");

    let shields = project_visible(
        &dataset,
        &FilterState::Category("Shield".to_string()),
        viewport,
    );
    assert_eq!(shields.len(), 1);
    assert_eq!(dataset.records[shields[0].index].name, "Mauna Loa");
}
