use serde_json::{json, Map, Value};
use vinmono_core::{ProductStatus, TimeOfDay};

use super::*;

fn obj(value: Value) -> Map<String, Value> {
    value.as_object().expect("object fixture").clone()
}

/// Detail payload for a beer, trimmed to the fields the mapper reads.
fn beer_detail() -> Map<String, Value> {
    obj(json!({
        "code": "7746702",
        "name": "Lervig Supersonic",
        "url": "/Land/Norge/Lervig-Supersonic/p/7746702",
        "price": { "value": 104.1, "formattedValue": "Kr. 104,10" },
        "volume": { "value": 50, "formattedValue": "50 cl" },
        "images": [
            {
                "format": "product",
                "imageType": "PRIMARY",
                "altText": "Lervig Supersonic",
                "url": "https://bilder.example.no/cache/515x515-0/7746702-1.jpg",
            },
        ],
        "main_category": { "code": "øl", "name": "Øl", "url": "/search?q=:relevance:mainCategory:øl" },
        "main_sub_category": { "code": "øl_india_pale_ale", "name": "India pale ale" },
        "main_country": { "code": "norge", "name": "Norge" },
        "district": { "code": "rogaland", "name": "Rogaland" },
        "product_selection": "Basisutvalget",
        "buyable": true,
        "status": "aktiv",
        "expired": false,
        "smell": "Tropisk frukt, sitrus og furu.",
        "taste": "Humlepreget, frisk og bitter.",
        "color": "Gyllen.",
        "allergens": "Gluten",
        "packageType": "Boks",
        "ageLimit": "18",
        "distributor": "Lervig AS",
        "distributorId": 30716,
        "wholeSaler": "Lervig Aktiebryggeri",
        "content": {
            "traits": [
                { "name": "Alkohol", "formattedValue": "8%" },
                { "name": "Sukker", "formattedValue": "5 gram per liter" },
                { "name": "Syre", "formattedValue": "4,5 gram per liter" },
            ],
            "characteristics": [
                { "name": "Bitterhet", "readableValue": "Bitterhet, 7 av 12" },
                { "name": "Friskhet", "readableValue": "Friskhet, 5 av 12" },
                { "name": "Fylde", "readableValue": "Fylde, 8 av 12" },
            ],
            "ingredients": [
                { "code": "999", "readableValue": "Vann, malt (bygg, hvete), havre, humle, gjær" },
            ],
            "isGoodFor": [ { "code": "A", "name": "Aperitiff/avec" } ],
            "storagePotential": { "formattedValue": "Drikkeklar nå, ikke egnet for lagring" },
        },
    }))
}

/// Detail payload for a gift article: no volume, no alcohol, expired.
fn gift_detail() -> Map<String, Value> {
    obj(json!({
        "code": "407",
        "name": "Gavekartong 3 flasker",
        "url": "/Gaveartikler-og-tilbehor/p/407",
        "price": { "value": 35.0 },
        "volume": {},
        "images": [],
        "product_selection": "Uavhengig sortiment",
        "buyable": false,
        "status": "utgatt",
        "expired": true,
        "ageLimit": "0",
        "content": {},
    }))
}

// -----------------------------------------------------------------------
// populated product
// -----------------------------------------------------------------------

#[test]
fn beer_base_fields() {
    let product = map_to_populated_product(&beer_detail());
    assert_eq!(product.base.code, "7746702");
    assert_eq!(product.base.name, "Lervig Supersonic");
    assert_eq!(product.base.price, 104.1);
    assert!(product.base.buyable);
    assert_eq!(product.base.status, Some(ProductStatus::Active));
    assert_eq!(product.base.product_selection, "Basisutvalget");
    let country = product.base.main_country.expect("country");
    assert_eq!(country.code.as_deref(), Some("norge"));
    assert!(product.base.sub_district.is_none());
}

#[test]
fn beer_price_per_liter_is_derived() {
    let product = map_to_populated_product(&beer_detail());
    assert!((product.base.price_per_liter - 208.2).abs() < 1e-9);
}

#[test]
fn beer_volume_and_image_are_resolved() {
    let product = map_to_populated_product(&beer_detail());
    let volume = product.base.volume.expect("volume");
    assert_eq!(volume.value, 50.0);
    assert_eq!(volume.unit, "cl");
    assert_eq!(product.base.images.len(), 1);
    let size = product.base.images[0].size.expect("sniffed size");
    assert_eq!(size.max_width, 515);
}

#[test]
fn beer_derived_content_values() {
    let product = map_to_populated_product(&beer_detail());
    assert_eq!(product.abv, 8.0);
    assert_eq!(product.sugar, Some(5.0));
    assert_eq!(product.acid, Some(4.5));
    assert_eq!(product.bitterness, Some(58));
    assert_eq!(product.freshness, Some(42));
    assert_eq!(product.fullness, Some(67));
    assert_eq!(product.tannins, None);
}

#[test]
fn beer_ingredient_without_share_is_whole_blend() {
    let product = map_to_populated_product(&beer_detail());
    assert_eq!(product.raw_material.len(), 1);
    assert_eq!(product.raw_material[0].id, "999");
    assert_eq!(product.raw_material[0].percentage, Some(100.0));
}

#[test]
fn beer_food_pairing_is_resolved() {
    let product = map_to_populated_product(&beer_detail());
    assert_eq!(product.food_pairing.len(), 1);
    assert_eq!(product.food_pairing[0].code, "A");
    assert_eq!(product.food_pairing[0].identifier, "aperitif");
}

#[test]
fn beer_renamed_scalars() {
    let product = map_to_populated_product(&beer_detail());
    assert_eq!(product.aroma.as_deref(), Some("Tropisk frukt, sitrus og furu."));
    assert_eq!(product.container_type.as_deref(), Some("Boks"));
    assert_eq!(product.wholesaler.as_deref(), Some("Lervig Aktiebryggeri"));
    assert_eq!(product.distributor_id.as_deref(), Some("30716"));
    assert_eq!(product.age_limit, 18);
    assert_eq!(
        product.storable.as_deref(),
        Some("Drikkeklar nå, ikke egnet for lagring")
    );
}

#[test]
fn gift_article_takes_model_defaults() {
    let product = map_to_populated_product(&gift_detail());
    assert_eq!(product.base.price, 35.0);
    assert_eq!(product.base.price_per_liter, 0.0);
    assert!(product.base.volume.is_none());
    assert_eq!(product.base.status, Some(ProductStatus::Expired));
    assert!(!product.base.buyable);
    assert!(product.expired);
    assert_eq!(product.abv, 0.0);
    assert_eq!(product.sugar, None);
    assert_eq!(product.age_limit, 0);
    assert!(product.food_pairing.is_empty());
    assert!(product.raw_material.is_empty());
}

#[test]
fn detail_payload_litre_price_is_ignored() {
    // Some payloads carry a server-computed litrePrice; the mapped value
    // always comes from price and volume.
    let mut raw = beer_detail();
    raw.insert(
        "litrePrice".to_owned(),
        json!({ "value": 999.0, "formattedValue": "Kr. 999,00" }),
    );
    let product = map_to_populated_product(&raw);
    assert!((product.base.price_per_liter - 208.2).abs() < 1e-9);
}

#[test]
fn base_product_from_search_hit() {
    let product = map_to_base_product(&obj(json!({
        "code": "7746702",
        "name": "Lervig Supersonic",
        "price": { "value": 104.1 },
        "volume": { "value": 50, "formattedValue": "50 cl" },
        "status": "utsolgt",
    })));
    assert_eq!(product.code, "7746702");
    assert_eq!(product.status, Some(ProductStatus::OutOfStock));
    assert!((product.price_per_liter - 208.2).abs() < 1e-9);
    // Absent from the hit entirely, so the model default applies.
    assert!(product.buyable);
}

// -----------------------------------------------------------------------
// stores
// -----------------------------------------------------------------------

#[test]
fn store_detail_payload() {
    let store = map_to_store(&json!({
        "name": "160",
        "displayName": "Oslo, Briskeby",
        "address": {
            "line1": "Briskebyveien 48",
            "postalCode": "0258",
            "town": "Oslo",
        },
        "geoPoint": { "latitude": 59.920_86, "longitude": 10.716_54 },
        "assortment": "Kategori 4",
        "openingTimes": [
            {
                "weekDay": "Mandag",
                "openingTime": { "hour": 10, "minute": 0 },
                "closingTime": { "hour": 18, "minute": 0 },
            },
            { "weekDay": "Søndag", "closed": true },
        ],
    }));
    assert_eq!(store.base.store_number, "160");
    assert_eq!(store.base.name, "Oslo, Briskeby");
    assert_eq!(store.base.zip.as_deref(), Some("0258"));
    assert_eq!(store.base.gps_coordinates, [59.920_86, 10.716_54]);
    assert_eq!(store.category, "Kategori 4");
    assert_eq!(store.opening_hours.len(), 2);
    assert!(!store.opening_hours[0].is_closed());
    assert!(store.opening_hours[1].is_closed());
}

#[test]
fn base_store_from_search_hit() {
    let store = map_to_base_store(&json!({
        "id": "160",
        "name": "Briskeby vinmonopol",
        "displayName": "Oslo, Briskeby",
        "address": {
            "line1": "Briskebyveien 48",
            "formattedAddress": "Briskebyveien 48, 0258, Oslo",
        },
        "geoPoint": { "latitude": 59.920_86, "longitude": 10.716_54 },
    }));
    // Search hits identify the store by id, not name.
    assert_eq!(store.store_number, "160");
    assert_eq!(store.name, "Oslo, Briskeby");
    assert_eq!(store.street_address, "Briskebyveien 48");
    assert_eq!(store.zip.as_deref(), Some("0258"));
    assert_eq!(store.city.as_deref(), Some("Oslo"));
    assert_eq!(store.gps_coordinates, [59.920_86, 10.716_54]);
}

#[test]
fn base_store_with_malformed_address_drops_zip_and_city() {
    let store = map_to_base_store(&json!({
        "id": "160",
        "displayName": "Oslo, Briskeby",
        "address": { "line1": "Briskebyveien 48", "formattedAddress": "Briskebyveien 48" },
    }));
    assert_eq!(store.zip, None);
    assert_eq!(store.city, None);
    assert_eq!(store.gps_coordinates, [0.0, 0.0]);
}

// -----------------------------------------------------------------------
// CSV stream rows
// -----------------------------------------------------------------------

#[test]
fn product_stream_row() {
    let row = obj(json!({
        "Varenummer": "7746702",
        "Varenavn": "Lervig Supersonic",
        "Volum": "50 cl",
        "Pris": "104,10",
        "Literpris": "208,20",
        "Varetype": "India pale ale",
        "Fylde": "8",
        "Friskhet": "5",
        "Bitterhet": "7",
        "Farge": " Gyllen. ",
        "Passertil01": "Skalldyr",
        "Passertil02": "Ost",
        "Land": "Norge",
        "Alkohol": "8,00",
        "Sukker": "Ukjent",
        "Syre": "4,5",
        "Argang": "Uoppgitt",
        "Distributør": "Lervig AS",
    }));
    let product = map_product_stream_row(&row);
    assert_eq!(product.code, "7746702");
    assert_eq!(product.container_size, Some(0.5));
    assert_eq!(product.price, Some(104.1));
    assert_eq!(product.price_per_liter, Some(208.2));
    assert_eq!(product.fullness, Some(100));
    assert_eq!(product.freshness, Some(63));
    assert_eq!(product.bitterness, Some(88));
    assert_eq!(product.color.as_deref(), Some("Gyllen."));
    assert_eq!(product.abv, Some(8.0));
    assert_eq!(product.sugar, None);
    assert_eq!(product.acid, Some(4.5));
    assert_eq!(product.vintage, None);
    assert_eq!(product.distributor.as_deref(), Some("Lervig AS"));
    let pairings: Vec<&str> = product
        .food_pairing
        .iter()
        .map(|p| p.identifier.as_str())
        .collect();
    assert_eq!(pairings, ["shellfish", "cheese"]);
}

#[test]
fn store_stream_row_parses_weekday_hours() {
    let row = obj(json!({
        "Butikknummer": "160",
        "Butikknavn": "Oslo, Briskeby",
        "Gateadresse": "Briskebyveien 48",
        "Postnr": "0258",
        "Poststed": "Oslo",
        "GPS_breddegrad": "59.92086",
        "GPS_lengdegrad": "10.71654",
        "Apn_mandag": "10:00-18:00",
        "Apn_lordag": "10:00-16:00",
        "Apn_sondag": "Stengt",
    }));
    let store = map_store_stream_row(&row);
    assert_eq!(store.store_number, "160");
    assert_eq!(store.gps_coordinates, [59.920_86, 10.716_54]);

    // Tuesday..Friday columns are absent, so only three entries survive.
    assert_eq!(store.opening_hours.len(), 3);
    let monday = &store.opening_hours[0];
    assert_eq!(monday.week_day, "Mandag");
    assert_eq!(monday.opens, Some(TimeOfDay { hour: 10, minute: 0 }));
    let sunday = &store.opening_hours[2];
    assert_eq!(sunday.week_day, "Søndag");
    assert!(sunday.is_closed());
}

// -----------------------------------------------------------------------
// facets
// -----------------------------------------------------------------------

fn facet_payload(name: &str, value_name: &str) -> Value {
    json!({
        "name": name,
        "category": false,
        "multiSelect": true,
        "values": [
            {
                "name": value_name,
                "count": 42,
                "query": {
                    "query": {
                        "value": format!(":relevance:visibleInSearch:true:{name}:{value_name}"),
                    },
                },
            },
        ],
    })
}

#[test]
fn facet_resolves_title_and_display_name() {
    let facet = map_to_facet(&facet_payload("isGoodfor", "A"));
    assert_eq!(facet.title, "foodPairing");
    assert_eq!(facet.name, "isGoodfor");
    assert_eq!(facet.display_name, "Passer til");
    assert!(facet.multi_select);
}

#[test]
fn facet_pairing_values_become_identifiers() {
    let facet = map_to_facet(&facet_payload("isGoodfor", "A"));
    assert_eq!(facet.values[0].name, "aperitif");
    assert_eq!(facet.values[0].count, Some(42));
    // Boilerplate prefix is stripped from the stored query.
    assert_eq!(facet.values[0].query, "isGoodfor:A");
}

#[test]
fn facet_clock_range_values_become_percentages() {
    let facet = map_to_facet(&facet_payload("Fylde", "0-2"));
    assert_eq!(facet.title, "fullness");
    assert_eq!(facet.values[0].name, "0-25");
}

#[test]
fn facet_unknown_code_falls_back_to_raw_name() {
    let facet = map_to_facet(&facet_payload("volumeRanges", "0,5 l - 0,7 l"));
    assert_eq!(facet.title, "volumeRanges");
    assert_eq!(facet.display_name, "Volum");
    assert_eq!(facet.values[0].name, "0,5 l - 0,7 l");
}

#[test]
fn facet_title_resolves_from_code_not_name() {
    // Real payloads carry both, and they differ in case; the title and
    // value transform key off the code.
    let facet = map_to_facet(&json!({
        "code": "Fylde",
        "name": "fylde",
        "values": [
            { "name": "6-8", "query": { "query": { "value": ":relevance:Fylde:6-8" } } },
        ],
    }));
    assert_eq!(facet.title, "fullness");
    assert_eq!(facet.name, "fylde");
    assert_eq!(facet.values[0].name, "75-100");
}

#[test]
fn sugar_facet_values_are_numeric() {
    let facet = map_to_facet(&json!({
        "code": "Sukker",
        "name": "Sukker",
        "values": [
            { "name": "7,5", "query": { "query": { "value": ":relevance:Sukker:7,5" } } },
            { "name": "Ukjent", "query": { "query": { "value": ":relevance:Sukker:Ukjent" } } },
        ],
    }));
    assert_eq!(facet.title, "sugar");
    assert_eq!(facet.values[0].name, "7.5");
    // Unparseable value names stay as sent.
    assert_eq!(facet.values[1].name, "Ukjent");
}

#[test]
fn stock_facet_values_are_booleans() {
    let facet = map_to_facet(&json!({
        "code": "inStockFlag",
        "name": "inStockFlag",
        "values": [
            { "name": "true", "query": { "query": { "value": ":relevance:inStockFlag:true" } } },
            { "name": "Nei", "query": { "query": { "value": ":relevance:inStockFlag:Nei" } } },
        ],
    }));
    assert_eq!(facet.title, "inStock");
    assert_eq!(facet.values[0].name, "true");
    assert_eq!(facet.values[1].name, "false");
}
