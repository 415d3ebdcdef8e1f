use chrono::NaiveDate;
use yieldcurve::{Tenor, YieldNormalizer, YieldRecord};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 16).unwrap()
}

#[test]
fn test_single_tenor() {
    let record = YieldRecord::empty(date()).with_yield(Tenor::Y5, 3.2);
    let points = YieldNormalizer::normalize(&record);

    assert_eq!(points.len(), 1);
    assert_eq!(points[0].maturity.label(), "5Y");
    assert_eq!(points[0].yield_pct, 3.2);
}

#[test]
fn test_full_curve_in_fixed_order() {
    let record = YieldRecord::from_pairs(
        date(),
        Tenor::ALL.iter().rev().enumerate().map(|(i, t)| (*t, i as f64)),
    );

    let labels: Vec<&str> = YieldNormalizer::normalize(&record)
        .iter()
        .map(|p| p.maturity.label())
        .collect();

    assert_eq!(
        labels,
        vec!["1M", "2M", "3M", "6M", "1Y", "2Y", "3Y", "5Y", "7Y", "10Y", "20Y", "30Y"]
    );
}

#[test]
fn test_length_matches_present_tenors() {
    // Every subset of the 12 tenors
    for mask in 0u32..(1 << Tenor::COUNT) {
        let pairs = Tenor::ALL
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(i, t)| (*t, 1.0 + i as f64 / 10.0));
        let record = YieldRecord::from_pairs(date(), pairs);

        let points = YieldNormalizer::normalize(&record);
        assert_eq!(points.len(), mask.count_ones() as usize);
        assert_eq!(points.len(), record.present_count());

        // Strictly increasing tenor positions: fixed order, no duplicates
        assert!(points
            .windows(2)
            .all(|w| w[0].maturity.index() < w[1].maturity.index()));
    }
}

#[test]
fn test_zero_yield_is_kept() {
    let record = YieldRecord::empty(date()).with_yield(Tenor::M1, 0.0);
    let points = YieldNormalizer::normalize(&record);

    assert_eq!(points.len(), 1);
    assert_eq!(points[0].yield_pct, 0.0);
}

#[test]
fn test_plot_coordinates_follow_tenor_position() {
    let record = YieldRecord::from_pairs(date(), vec![(Tenor::M1, 5.5), (Tenor::Y30, 4.1)]);
    let coords: Vec<[f64; 2]> = YieldNormalizer::normalize(&record)
        .iter()
        .map(|p| p.as_plot_point())
        .collect();

    assert_eq!(coords, vec![[0.0, 5.5], [11.0, 4.1]]);
}
