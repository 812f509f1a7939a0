//! Tests for the query codec: elision, tolerance, and the round-trip law.

use super::codec::*;
use super::state::{FilterState, RangeSide};

// ==================== Test Helpers ====================

fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
    raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

/// A handful of states reachable through the mutation operations,
/// covering empty sets, partial ranges, and absent bounds.
fn reachable_states() -> Vec<FilterState> {
    let base = FilterState::default();
    vec![
        base.clone(),
        base.with_types(&["1BR"]),
        base.with_types(&["1BR", "Studio"]).toggle_feature("Gym"),
        base.with_price_range(500, 4000),
        base.with_price_range(100, 4000),
        base.with_price_range(500, 10_000),
        base.with_size_bound(RangeSide::Min, "300").expect("valid"),
        base.with_size_bound(RangeSide::Max, "900").expect("valid"),
        base.with_size_bound(RangeSide::Min, "300")
            .and_then(|s| s.with_size_bound(RangeSide::Max, "900"))
            .expect("valid"),
        base.with_types(&["Loft"])
            .with_price_range(250, 8000)
            .with_features(&["Pool", "Gym"])
            .with_size_bound(RangeSide::Min, "450")
            .expect("valid"),
    ]
}

// ==================== Encoding ====================

#[test]
fn default_state_encodes_to_the_empty_mapping() {
    assert!(encode(&FilterState::default()).is_empty());
}

#[test]
fn each_field_is_elided_exactly_at_its_default() {
    let state = FilterState::default().with_price_range(100, 4000);
    let encoded = encode(&state);
    assert_eq!(encoded, pairs(&[("priceMax", "4000")]));

    let state = FilterState::default().with_price_range(500, 10_000);
    assert_eq!(encode(&state), pairs(&[("priceMin", "500")]));

    let state = FilterState::default()
        .with_size_bound(RangeSide::Max, "900")
        .expect("valid");
    assert_eq!(encode(&state), pairs(&[("sizeMax", "900")]));
}

#[test]
fn multi_valued_fields_join_in_selection_order() {
    let state = FilterState::default()
        .toggle_type("1BR")
        .toggle_type("Studio")
        .toggle_feature("Pool")
        .toggle_feature("Gym");
    let encoded = encode(&state);
    assert_eq!(
        encoded,
        pairs(&[("types", "1BR,Studio"), ("features", "Pool,Gym")])
    );
}

// ==================== Decoding ====================

#[test]
fn empty_encoding_decodes_to_the_exact_default_tuple() {
    assert_eq!(decode(&[]), FilterState::default());
}

#[test]
fn all_marker_dominates_mixed_type_values() {
    let decoded = decode(&pairs(&[("types", "All,Studio")]));
    assert!(decoded.selected_types.is_empty());

    let decoded = decode(&pairs(&[("types", "All")]));
    assert!(decoded.selected_types.is_empty());
}

#[test]
fn unknown_keys_are_ignored() {
    let decoded = decode(&pairs(&[("page", "3"), ("sort", "price"), ("types", "1BR")]));
    assert_eq!(decoded.selected_types, vec!["1BR"]);
    assert_eq!(decoded.price_min, 100);
}

#[test]
fn malformed_price_values_fall_back_to_defaults() {
    let decoded = decode(&pairs(&[("priceMin", "cheap"), ("priceMax", "4000")]));
    assert_eq!((decoded.price_min, decoded.price_max), (100, 4000));

    let decoded = decode(&pairs(&[("priceMax", "")]));
    assert_eq!(decoded.price_max, 10_000);
}

#[test]
fn malformed_size_values_decode_to_absent() {
    let decoded = decode(&pairs(&[("sizeMin", "big"), ("sizeMax", "900")]));
    assert_eq!((decoded.size_min, decoded.size_max), (None, Some(900)));
}

#[test]
fn inconsistent_incoming_size_pair_drops_the_max_side() {
    let decoded = decode(&pairs(&[("sizeMin", "700"), ("sizeMax", "100")]));
    assert_eq!((decoded.size_min, decoded.size_max), (Some(700), None));
}

#[test]
fn out_of_order_incoming_price_pair_is_reclamped() {
    let decoded = decode(&pairs(&[("priceMin", "9000"), ("priceMax", "500")]));
    assert!(decoded.price_min <= decoded.price_max);
    assert_eq!((decoded.price_min, decoded.price_max), (500, 500));
}

#[test]
fn incoming_price_pair_above_the_ceiling_is_clamped_coherently() {
    let decoded = decode(&pairs(&[("priceMin", "12000"), ("priceMax", "11000")]));
    assert_eq!((decoded.price_min, decoded.price_max), (10_000, 10_000));
    // the re-published encoding elides neither side inconsistently
    assert_eq!(encode(&decoded), pairs(&[("priceMin", "10000")]));
}

#[test]
fn duplicate_labels_are_deduplicated_order_preserved() {
    let decoded = decode(&pairs(&[("types", "1BR,Studio,1BR"), ("features", "Gym,Gym,Pool")]));
    assert_eq!(decoded.selected_types, vec!["1BR", "Studio"]);
    assert_eq!(decoded.selected_features, vec!["Gym", "Pool"]);
}

#[test]
fn first_occurrence_wins_for_duplicate_keys() {
    let decoded = decode(&pairs(&[("priceMax", "4000"), ("priceMax", "9000")]));
    assert_eq!(decoded.price_max, 4000);
}

// ==================== Round Trips ====================

#[test]
fn decode_encode_round_trips_every_reachable_state() {
    for state in reachable_states() {
        assert_eq!(decode(&encode(&state)), state, "round trip failed for {state:?}");
    }
}

#[test]
fn decoding_normalizes_in_one_step() {
    // a noisy incoming encoding stabilizes after a single decode
    let noisy = pairs(&[
        ("types", "All,Studio"),
        ("priceMin", "100"),
        ("priceMax", "abc"),
        ("utm_source", "share"),
    ]);
    let once = decode(&noisy);
    let again = decode(&encode(&once));
    assert_eq!(once, again);
    assert_eq!(once, FilterState::default());
}

// ==================== Query Strings ====================

#[test]
fn format_query_renders_ordered_pairs() {
    let state = FilterState::default().with_types(&["1BR"]).with_price_range(100, 4000);
    assert_eq!(format_query(&encode(&state)), "types=1BR&priceMax=4000");
    assert_eq!(format_query(&encode(&FilterState::default())), "");
}

#[test]
fn parse_query_is_tolerant() {
    assert_eq!(
        parse_query("?types=1BR,Studio&priceMax=4000"),
        pairs(&[("types", "1BR,Studio"), ("priceMax", "4000")])
    );
    assert_eq!(parse_query(""), vec![]);
    assert_eq!(parse_query("&&"), vec![]);
    assert_eq!(parse_query("flag"), pairs(&[("flag", "")]));
}

#[test]
fn query_string_form_round_trips_through_the_codec() {
    let state = FilterState::default()
        .with_types(&["1BR", "Studio"])
        .with_price_range(500, 4000)
        .toggle_feature("Gym");
    let query = format_query(&encode(&state));
    assert_eq!(decode(&parse_query(&query)), state);
}
