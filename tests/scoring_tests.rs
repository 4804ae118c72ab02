//! Scorer properties.

use card_balance::cards::CardRecord;
use card_balance::scoring::{score, LinearScorer, Scorer, UNSTABLE_LEGEND_ID};
use proptest::prelude::*;

const RANGES: [&str; 12] = [
    "mêlée", "melee", "courte", "moyenne", "medium", "longue", "très_longue", "global",
    "mixte", "aucune", "MOYENNE", "laser",
];

fn card_with(id: &str, health: f64, dps: f64, range: &str, abilities: usize) -> CardRecord {
    let mut card = CardRecord::new(id)
        .with_cost(3.0)
        .with_health(health)
        .with_dps(dps)
        .with_range(range);
    for i in 0..abilities {
        card = card.with_ability(format!("ability_{i}"));
    }
    card
}

// =============================================================================
// Range Bonus
// =============================================================================

#[test]
fn test_absent_range_has_no_bonus() {
    let card = CardRecord::new("plain").with_health(100.0);
    assert_eq!(score(&card).unwrap(), 40.0);
}

#[test]
fn test_melee_spellings_score_alike() {
    let french = card_with("a", 300.0, 80.0, "mêlée", 1);
    let english = card_with("a", 300.0, 80.0, "melee", 1);
    assert_eq!(score(&french).unwrap(), score(&english).unwrap());
}

#[test]
fn test_medium_spellings_score_alike() {
    let french = card_with("a", 300.0, 80.0, "moyenne", 1);
    let english = card_with("a", 300.0, 80.0, "Medium", 1);
    assert_eq!(score(&french).unwrap(), score(&english).unwrap());
}

#[test]
fn test_unknown_range_has_no_bonus() {
    let unknown = card_with("a", 0.0, 0.0, "orbital", 0);
    assert_eq!(score(&unknown).unwrap(), 0.0);
}

#[test]
fn test_range_bonus_per_category() {
    let expected = [
        ("mêlée", 0.0),
        ("courte", 20.0),
        ("moyenne", 40.0),
        ("longue", 60.0),
        ("très_longue", 80.0),
        ("global", 100.0),
        ("mixte", 30.0),
        ("aucune", 0.0),
    ];
    for (label, bonus) in expected {
        let card = card_with("r", 0.0, 0.0, label, 0);
        assert_eq!(score(&card).unwrap(), bonus, "range {label}");
    }
}

// =============================================================================
// End-to-end Examples
// =============================================================================

#[test]
fn test_stat_defaults() {
    let card = CardRecord::new("spell").with_cost(4.0).with_range("global");
    assert_eq!(score(&card).unwrap(), 100.0);
}

#[test]
fn test_unstable_legend_penalty() {
    let jacques = card_with(UNSTABLE_LEGEND_ID, 100.0, 50.0, "global", 2);
    let twin = card_with("jacques_stable_twin", 100.0, 50.0, "global", 2);

    assert_eq!(score(&twin).unwrap(), 300.0);
    assert_eq!(score(&jacques).unwrap(), 200.0);
}

#[test]
fn test_penalty_only_fires_for_exact_id() {
    for id in ["JACQUES_UNSTABLE_LEGEND", " jacques_unstable_legend", "jacques_unstable"] {
        let card = card_with(id, 100.0, 50.0, "global", 2);
        assert_eq!(score(&card).unwrap(), 300.0, "id {id:?}");
    }
}

#[test]
fn test_missing_id_is_an_error() {
    let card = CardRecord::default().with_cost(2.0).with_health(10.0);
    assert!(score(&card).is_err());
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn score_monotonic_in_health(
        a in 0.0..5000.0f64,
        b in 0.0..5000.0f64,
        dps in 0.0..1000.0f64,
        range in 0..RANGES.len(),
        abilities in 0..5usize,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let low = score(&card_with("p", lo, dps, RANGES[range], abilities)).unwrap();
        let high = score(&card_with("p", hi, dps, RANGES[range], abilities)).unwrap();
        prop_assert!(low <= high);
    }

    #[test]
    fn score_monotonic_in_dps(
        health in 0.0..5000.0f64,
        a in 0.0..1000.0f64,
        b in 0.0..1000.0f64,
        range in 0..RANGES.len(),
        abilities in 0..5usize,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let low = score(&card_with("p", health, lo, RANGES[range], abilities)).unwrap();
        let high = score(&card_with("p", health, hi, RANGES[range], abilities)).unwrap();
        prop_assert!(low <= high);
    }

    #[test]
    fn score_monotonic_in_abilities(
        health in 0.0..5000.0f64,
        dps in 0.0..1000.0f64,
        range in 0..RANGES.len(),
        count in 0..6usize,
    ) {
        let fewer = score(&card_with("p", health, dps, RANGES[range], count)).unwrap();
        let more = score(&card_with("p", health, dps, RANGES[range], count + 1)).unwrap();
        prop_assert!(fewer <= more);
    }

    #[test]
    fn override_subtracts_exactly_the_penalty(
        health in 0.0..5000.0f64,
        dps in 0.0..1000.0f64,
        range in 0..RANGES.len(),
        abilities in 0..5usize,
    ) {
        let card = card_with(UNSTABLE_LEGEND_ID, health, dps, RANGES[range], abilities);
        let breakdown = LinearScorer::default().breakdown(&card).unwrap();
        let expected = breakdown.total_without_override() - 100.0;
        prop_assert!((breakdown.total() - expected).abs() < 1e-9);

        let ordinary = card_with("ordinary", health, dps, RANGES[range], abilities);
        let plain = score(&ordinary).unwrap();
        prop_assert!((breakdown.total_without_override() - plain).abs() < 1e-9);
    }
}
