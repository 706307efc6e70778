//! Tests for scoring and ranking

use super::*;
use crate::app::services::record_processor::scoring::{
    compare_scores_descending, is_ranked_descending, rank_descending, score_records, score_value,
};
use std::cmp::Ordering;

#[test]
fn test_score_value_squares() {
    assert_eq!(score_value(Numeric::Int(3)), Numeric::Int(9));
    assert_eq!(score_value(Numeric::Int(-4)), Numeric::Int(16));
    assert_eq!(score_value(Numeric::Int(0)), Numeric::Int(0));
    assert_eq!(score_value(Numeric::Float(0.5)), Numeric::Float(0.25));
}

#[test]
fn test_score_value_integer_stays_integer() {
    assert!(score_value(Numeric::Int(7)).is_int());
    assert!(!score_value(Numeric::Float(7.0)).is_int());
}

#[test]
fn test_score_value_exact_for_large_integers() {
    assert_eq!(
        score_value(Numeric::Int(100_000_001)),
        Numeric::Int(10_000_000_200_000_001)
    );
    assert_eq!(
        score_value(Numeric::Int(3_037_000_499)),
        Numeric::Int(9_223_372_030_926_249_001)
    );
}

#[test]
fn test_score_records_skips_missing_values() {
    let records = vec![valued(1, 0, 2), unvalued(2, 100), valued(3, 200, -1)];

    let scored = score_records(indexed(&records));

    assert_eq!(scored, vec![ScoredRecord::new(1, 4), ScoredRecord::new(3, 1)]);
}

#[test]
fn test_rank_descending_orders_by_score() {
    let mut entries = vec![
        ScoredRecord::new(1, 4),
        ScoredRecord::new(2, 25),
        ScoredRecord::new(3, 0),
        ScoredRecord::new(4, 9),
    ];

    rank_descending(&mut entries);

    assert_eq!(ids(&entries), vec![2, 4, 1, 3]);
    assert!(is_ranked_descending(&entries));
}

#[test]
fn test_rank_descending_mixed_integer_and_float_scores() {
    let mut entries = vec![
        ScoredRecord::new(1, 2.25),
        ScoredRecord::new(2, 4),
        ScoredRecord::new(3, 2),
        ScoredRecord::new(4, 6.25),
    ];

    rank_descending(&mut entries);

    assert_eq!(ids(&entries), vec![4, 2, 1, 3]);
    assert!(is_ranked_descending(&entries));
}

#[test]
fn test_rank_descending_separates_scores_beyond_float_precision() {
    let mut entries = vec![
        ScoredRecord::new("low", Numeric::Int(10_000_000_200_000_000)),
        ScoredRecord::new("high", Numeric::Int(10_000_000_200_000_001)),
    ];

    rank_descending(&mut entries);

    assert_eq!(ids(&entries), vec!["high", "low"]);
}

#[test]
fn test_rank_descending_is_stable_for_ties() {
    let mut entries = vec![
        ScoredRecord::new("first", 9),
        ScoredRecord::new("low", 1),
        ScoredRecord::new("second", 9.0),
        ScoredRecord::new("third", 9),
    ];

    rank_descending(&mut entries);

    assert_eq!(ids(&entries), vec!["first", "second", "third", "low"]);
}

#[test]
fn test_compare_scores_descending() {
    let (five, one) = (Numeric::Int(5), Numeric::Int(1));
    assert_eq!(compare_scores_descending(&five, &one), Ordering::Less);
    assert_eq!(compare_scores_descending(&one, &five), Ordering::Greater);
    assert_eq!(
        compare_scores_descending(&Numeric::Int(2), &Numeric::Float(2.0)),
        Ordering::Equal
    );
}

#[test]
fn test_is_ranked_descending_detects_disorder() {
    let entries = vec![ScoredRecord::new(1, 1), ScoredRecord::new(2, 2)];
    assert!(!is_ranked_descending(&entries));

    let empty: Vec<ScoredRecord<u32>> = Vec::new();
    assert!(is_ranked_descending(&empty));
}
