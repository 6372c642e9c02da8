use egui::{pos2, Rect};
use volcanoscope::{project, remap, ActivityClass, RangeSet, Record};

fn ranges() -> RangeSet {
    RangeSet {
        min_lat: 0.0,
        max_lat: 10.0,
        min_lon: 0.0,
        max_lon: 10.0,
        min_elev: 0.0,
        max_elev: 5000.0,
    }
}

fn viewport() -> Rect {
    Rect::from_min_max(pos2(0.0, 0.0), pos2(100.0, 100.0))
}

fn record(lat: f64, lon: f64, elev: f64, status: &str) -> Record {
    Record {
        latitude: lat,
        longitude: lon,
        elevation: Some(elev),
        status: status.to_string(),
        ..Record::default()
    }
}

#[test]
fn corner_records_project_to_viewport_corners() {
    let low = project(&record(0.0, 0.0, 0.0, "Historical"), &ranges(), viewport());
    assert_eq!(low.pos, pos2(0.0, 100.0), "min lat/lon maps to bottom-left");
    assert_eq!(low.size, 4.0, "min elevation maps to the smallest marker");
    assert_eq!(low.class, ActivityClass::Active);

    let high = project(&record(10.0, 10.0, 5000.0, "U"), &ranges(), viewport());
    assert_eq!(high.pos, pos2(100.0, 0.0), "max lat/lon maps to top-right");
    assert_eq!(high.size, 20.0, "max elevation maps to the largest marker");
    assert_eq!(high.class, ActivityClass::Dormant);
}

#[test]
fn projection_stays_within_viewport_and_size_range() {
    let vp = viewport();
    let rs = ranges();
    for i in 0..=20 {
        let t = f64::from(i) / 20.0;
        let p = project(
            &record(t * 10.0, (1.0 - t) * 10.0, t * 5000.0, "Holocene"),
            &rs,
            vp,
        );
        assert!(
            (vp.left()..=vp.right()).contains(&p.pos.x),
            "x {} outside viewport",
            p.pos.x
        );
        assert!(
            (vp.top()..=vp.bottom()).contains(&p.pos.y),
            "y {} outside viewport",
            p.pos.y
        );
        assert!((4.0..=20.0).contains(&p.size), "size {} out of range", p.size);
    }
}

#[test]
fn size_is_monotonic_in_elevation() {
    let rs = ranges();
    let vp = viewport();
    let mut last = f32::NEG_INFINITY;
    for elev in [0.0, 100.0, 2500.0, 4999.0, 5000.0] {
        let p = project(&record(5.0, 5.0, elev, ""), &rs, vp);
        assert!(
            p.size >= last,
            "size must not decrease with elevation ({elev} m → {})",
            p.size
        );
        last = p.size;
    }
}

#[test]
fn higher_latitude_is_nearer_the_top() {
    let rs = ranges();
    let vp = viewport();
    let south = project(&record(2.0, 5.0, 100.0, ""), &rs, vp);
    let north = project(&record(8.0, 5.0, 100.0, ""), &rs, vp);
    assert!(
        south.pos.y >= north.pos.y,
        "latitude must be inverted: south y {} < north y {}",
        south.pos.y,
        north.pos.y
    );
}

#[test]
fn degenerate_range_maps_to_output_midpoint() {
    assert_eq!(remap(7.0, 7.0, 7.0, 0.0, 100.0), 50.0);
    assert_eq!(remap(0.0, 3.0, 3.0, 4.0, 20.0), 12.0);

    // Whole-axis degeneracy: a single-location dataset still renders.
    let rs = RangeSet {
        min_lat: 5.0,
        max_lat: 5.0,
        min_lon: 5.0,
        max_lon: 5.0,
        min_elev: 1000.0,
        max_elev: 1000.0,
    };
    let p = project(&record(5.0, 5.0, 1000.0, ""), &rs, viewport());
    assert!(p.pos.x.is_finite() && p.pos.y.is_finite() && p.size.is_finite());
    assert_eq!(p.pos, pos2(50.0, 50.0), "degenerate axes land on the midpoint");
    assert_eq!(p.size, 12.0);
}

#[test]
fn classification_covers_all_status_strings() {
    assert_eq!(ActivityClass::classify("Historical"), ActivityClass::Active);
    assert_eq!(ActivityClass::classify("D1"), ActivityClass::Active);
    assert_eq!(ActivityClass::classify("Dated"), ActivityClass::Active);
    assert_eq!(ActivityClass::classify("Holocene"), ActivityClass::Dormant);
    assert_eq!(ActivityClass::classify("U"), ActivityClass::Dormant);
    // "U" must match exactly; other U-prefixed strings fall through.
    assert_eq!(ActivityClass::classify("Uncertain"), ActivityClass::Other);
    assert_eq!(ActivityClass::classify(""), ActivityClass::Other);
    assert_eq!(ActivityClass::classify("Fumarolic"), ActivityClass::Other);
}
