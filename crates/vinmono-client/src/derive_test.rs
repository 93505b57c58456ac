use serde_json::json;
use vinmono_core::{TimeOfDay, Volume};

use super::*;

fn vol(value: f64, unit: &str) -> Volume {
    Volume {
        value,
        formatted_value: format!("{value} {unit}"),
        unit: unit.to_owned(),
    }
}

// -----------------------------------------------------------------------
// volume_unit
// -----------------------------------------------------------------------

#[test]
fn volume_unit_lowercases_second_token() {
    assert_eq!(volume_unit("50 cl").as_deref(), Some("cl"));
    assert_eq!(volume_unit("0.75 L").as_deref(), Some("l"));
}

#[test]
fn volume_unit_requires_exactly_two_tokens() {
    assert_eq!(volume_unit("50cl"), None);
    assert_eq!(volume_unit("50 cl flaske"), None);
    assert_eq!(volume_unit(""), None);
}

// -----------------------------------------------------------------------
// price_per_liter
// -----------------------------------------------------------------------

#[test]
fn price_per_liter_centiliters() {
    // 104.1 kr for 50 cl = 208.2 kr/l.
    let v = vol(50.0, "cl");
    assert!((price_per_liter(Some(104.1), Some(&v)) - 208.2).abs() < 1e-9);
}

#[test]
fn price_per_liter_deciliters() {
    let v = vol(5.0, "dl");
    assert!((price_per_liter(Some(100.0), Some(&v)) - 2.0).abs() < 1e-9);
}

#[test]
fn price_per_liter_liters() {
    let v = vol(0.75, "l");
    assert!((price_per_liter(Some(150.0), Some(&v)) - 200.0).abs() < 1e-9);
}

#[test]
fn price_per_liter_missing_inputs_are_zero() {
    let v = vol(50.0, "cl");
    assert_eq!(price_per_liter(None, Some(&v)), 0.0);
    assert_eq!(price_per_liter(Some(35.0), None), 0.0);
}

#[test]
fn price_per_liter_zero_volume_is_zero() {
    let v = vol(0.0, "cl");
    assert_eq!(price_per_liter(Some(35.0), Some(&v)), 0.0);
}

#[test]
fn price_per_liter_unknown_unit_is_zero() {
    let v = vol(3.0, "fat");
    assert_eq!(price_per_liter(Some(1000.0), Some(&v)), 0.0);
}

// -----------------------------------------------------------------------
// traits
// -----------------------------------------------------------------------

fn beer_traits() -> serde_json::Value {
    json!([
        { "name": "Alkohol", "formattedValue": "8%" },
        { "name": "Sukker", "formattedValue": "Ukjent 5 gram per liter" },
        { "name": "Syre", "formattedValue": "4,5 gram per liter" },
    ])
}

#[test]
fn abv_from_alcohol_trait() {
    assert_eq!(abv_from_traits(Some(&beer_traits())), 8.0);
}

#[test]
fn abv_matches_name_case_insensitively() {
    let traits = json!([{ "name": "alkohol", "formattedValue": "4,7%" }]);
    assert!((abv_from_traits(Some(&traits)) - 4.7).abs() < 1e-9);
}

#[test]
fn abv_missing_trait_defaults_to_zero() {
    assert_eq!(abv_from_traits(None), 0.0);
    assert_eq!(abv_from_traits(Some(&json!([]))), 0.0);
}

#[test]
fn abv_malformed_value_defaults_to_zero() {
    let traits = json!([{ "name": "Alkohol", "formattedValue": "8 prosent" }]);
    assert_eq!(abv_from_traits(Some(&traits)), 0.0);
    let traits = json!([{ "name": "Alkohol", "formattedValue": "8%%" }]);
    assert_eq!(abv_from_traits(Some(&traits)), 0.0);
}

#[test]
fn grams_per_liter_first_token_wins() {
    let value = grams_per_liter_from_traits(Some(&beer_traits()), "syre");
    assert_eq!(value, Some(4.5));
}

#[test]
fn grams_per_liter_falls_back_to_second_token() {
    // First token is not numeric; the second is.
    let value = grams_per_liter_from_traits(Some(&beer_traits()), "sukker");
    assert_eq!(value, Some(5.0));
}

#[test]
fn grams_per_liter_missing_trait_is_none() {
    assert_eq!(grams_per_liter_from_traits(Some(&beer_traits()), "tannin"), None);
    assert_eq!(grams_per_liter_from_traits(None, "sukker"), None);
}

// -----------------------------------------------------------------------
// characteristics
// -----------------------------------------------------------------------

#[test]
fn characteristic_percentage_from_readable_value() {
    let chars = json!([
        { "name": "Bitterhet", "readableValue": "Bitterhet, 7 av 12" },
        { "name": "Fylde", "readableValue": "Fylde, 8 av 12" },
    ]);
    assert_eq!(percentage_from_characteristics(Some(&chars), "Bitterhet"), Some(58));
    assert_eq!(percentage_from_characteristics(Some(&chars), "Fylde"), Some(67));
}

#[test]
fn characteristic_missing_label_is_none() {
    let chars = json!([{ "name": "Fylde", "readableValue": "Fylde, 8 av 12" }]);
    assert_eq!(percentage_from_characteristics(Some(&chars), "Garvestoffer"), None);
    assert_eq!(percentage_from_characteristics(None, "Fylde"), None);
}

#[test]
fn characteristic_malformed_readable_value_is_none() {
    let chars = json!([
        { "name": "Fylde", "readableValue": "Fylde" },
        { "name": "Friskhet", "readableValue": "Friskhet, mye av alt" },
    ]);
    assert_eq!(percentage_from_characteristics(Some(&chars), "Fylde"), None);
    assert_eq!(percentage_from_characteristics(Some(&chars), "Friskhet"), None);
}

// -----------------------------------------------------------------------
// formatted addresses
// -----------------------------------------------------------------------

#[test]
fn zip_and_city_from_formatted_address() {
    let (zip, city) = zip_and_city("Briskebyveien 48, 0258, Oslo").expect("address");
    assert_eq!(zip, "0258");
    assert_eq!(city, "Oslo");
}

#[test]
fn zip_and_city_without_both_segments_is_none() {
    assert_eq!(zip_and_city("Briskebyveien 48"), None);
    assert_eq!(zip_and_city(""), None);
    assert_eq!(zip_and_city(", Oslo"), None);
}

// -----------------------------------------------------------------------
// opening hours
// -----------------------------------------------------------------------

fn opening_times() -> serde_json::Value {
    json!([
        {
            "weekDay": "Mandag",
            "openingTime": { "hour": 10, "minute": 0 },
            "closingTime": { "hour": 18, "minute": 0 },
        },
        { "weekDay": "Søndag", "closed": true },
    ])
}

#[test]
fn opening_hours_list_keeps_closed_days() {
    let hours = opening_hours_from_list(&opening_times());
    assert_eq!(hours.len(), 2);
    assert_eq!(hours[0].week_day, "Mandag");
    assert_eq!(hours[0].opens, Some(TimeOfDay { hour: 10, minute: 0 }));
    assert!(hours[1].is_closed());
}

#[test]
fn opening_hours_for_day_is_case_insensitive() {
    let monday = opening_hours_for_day(&opening_times(), "mandag").expect("monday");
    assert_eq!(monday.closes, Some(TimeOfDay { hour: 18, minute: 0 }));
}

#[test]
fn opening_hours_for_closed_or_unknown_day_is_none() {
    assert!(opening_hours_for_day(&opening_times(), "Søndag").is_none());
    assert!(opening_hours_for_day(&opening_times(), "Fredag").is_none());
}

// -----------------------------------------------------------------------
// legacy hour strings
// -----------------------------------------------------------------------

#[test]
fn hours_string_parses_range() {
    let (opens, closes) = parse_hours_string("10:00-18:00").expect("open day");
    assert_eq!(opens, TimeOfDay { hour: 10, minute: 0 });
    assert_eq!(closes, TimeOfDay { hour: 18, minute: 0 });
}

#[test]
fn hours_string_stengt_is_closed() {
    assert!(parse_hours_string("Stengt").is_none());
    assert!(parse_hours_string("stengt").is_none());
    assert!(parse_hours_string("").is_none());
}

#[test]
fn hours_string_malformed_is_none() {
    assert!(parse_hours_string("10:00").is_none());
    assert!(parse_hours_string("ti-atten").is_none());
    assert!(parse_hours_string("25:00-26:00").is_none());
}
