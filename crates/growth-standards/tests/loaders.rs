use growth_model::{AxisValue, Indicator, Sex};
use growth_standards::{default_who_path, load_default_reference_store, verify_and_load};

#[test]
fn loads_default_reference_store() {
    let store = load_default_reference_store().expect("load reference store");
    assert_eq!(store.len(), 6);
    for (_, indicator, table) in store.tables() {
        if indicator.is_age_keyed() {
            assert_eq!(table.len(), 25, "age tables cover 0-24 months");
            assert_eq!(table.axis_min(), 0.0);
            assert_eq!(table.axis_max(), 24.0);
        } else {
            assert_eq!(table.len(), 131, "wfl tables cover 45.0-110.0 cm");
            assert_eq!(table.axis_min(), 45.0);
            assert_eq!(table.axis_max(), 110.0);
        }
    }
}

#[test]
fn lookup_returns_published_coefficients() {
    let store = load_default_reference_store().expect("load reference store");

    // Boys weight-for-age at birth, as published in the 2006 tables.
    let lms = store
        .lookup(Sex::Male, Indicator::WeightForAge, AxisValue::AgeMonths(0))
        .expect("birth row");
    assert_eq!(lms.l, 0.3487);
    assert_eq!(lms.m, 3.3464);
    assert_eq!(lms.s, 0.14602);

    // Girls length-for-age at birth.
    let lms = store
        .lookup(Sex::Female, Indicator::LengthForAge, AxisValue::AgeMonths(0))
        .expect("birth row");
    assert_eq!(lms.l, 1.0);
    assert_eq!(lms.m, 49.1477);
    assert_eq!(lms.s, 0.0379);
}

#[test]
fn length_lookup_rounds_to_half_centimeter_grid() {
    let store = load_default_reference_store().expect("load reference store");

    let on_grid = store
        .lookup(
            Sex::Male,
            Indicator::WeightForLength,
            AxisValue::LengthCm(85.5),
        )
        .expect("85.5 cm row");
    let rounded = store
        .lookup(
            Sex::Male,
            Indicator::WeightForLength,
            AxisValue::LengthCm(85.3),
        )
        .expect("85.3 cm rounds onto the grid");
    assert_eq!(on_grid, rounded);
}

#[test]
fn out_of_coverage_lookups_miss() {
    let store = load_default_reference_store().expect("load reference store");

    // Age beyond the 0-2 year tables.
    assert!(
        store
            .lookup(Sex::Male, Indicator::WeightForAge, AxisValue::AgeMonths(36))
            .is_none()
    );
    // Lengths outside 45.0-110.0 cm.
    assert!(
        store
            .lookup(
                Sex::Female,
                Indicator::WeightForLength,
                AxisValue::LengthCm(44.0),
            )
            .is_none()
    );
    assert!(
        store
            .lookup(
                Sex::Female,
                Indicator::WeightForLength,
                AxisValue::LengthCm(120.0),
            )
            .is_none()
    );
}

#[test]
fn verify_summary_reports_pins_and_counts() {
    let (_, summary) = verify_and_load(&default_who_path()).expect("verify standards");
    assert_eq!(summary.pins.who, "2006");
    assert_eq!(summary.file_count, 6);
    assert_eq!(summary.tables.len(), 6);
}
