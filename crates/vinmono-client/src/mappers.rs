//! Mappers from raw upstream payloads to the domain models.
//!
//! The engine handles renaming and scalar coercion via the tables in
//! [`crate::maps`]; the mappers resolve sub-documents ([`crate::resolve`]),
//! compute derived values ([`crate::derive`]), and assemble the typed
//! models. Absent fields take the model defaults, never an error.

use serde_json::{Map, Value};
use vinmono_core::{
    display_name, facet_title, BaseProduct, BaseStore, Category, Facet, FacetValue,
    FacetValueTransform, FoodPairing, OpeningHours, PopulatedProduct, PopulatedStore,
    ProductImage, ProductStatus, RawMaterial, StreamProduct, StreamStore,
};

use crate::derive;
use crate::engine::{self, MappedRecord};
use crate::filters;
use crate::maps;
use crate::resolve;

fn images(record: &MappedRecord) -> Vec<ProductImage> {
    record
        .get("images")
        .and_then(Value::as_array)
        .map(|list| list.iter().filter_map(resolve::product_image).collect())
        .unwrap_or_default()
}

fn category(record: &MappedRecord, target: &str) -> Option<Category> {
    record.get(target).and_then(resolve::category)
}

fn status(record: &MappedRecord) -> Option<ProductStatus> {
    record
        .get("status")
        .and_then(|v| serde_json::from_value(v.clone()).ok())
}

/// Stringifies an identifier that the upstream sends as either a string or
/// a bare number.
fn id_string(record: &MappedRecord, target: &str) -> Option<String> {
    match record.get(target)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn base_from_record(record: &MappedRecord) -> BaseProduct {
    let volume = record.get("volume").and_then(resolve::volume);
    let price = record.f64("price");
    BaseProduct {
        code: record.string_or_default("code"),
        name: record.string_or_default("name"),
        url: record.string_or_default("url"),
        price: price.unwrap_or(0.0),
        price_per_liter: derive::price_per_liter(price, volume.as_ref()),
        images: images(record),
        volume,
        main_category: category(record, "mainCategory"),
        main_sub_category: category(record, "mainSubCategory"),
        main_country: category(record, "mainCountry"),
        district: category(record, "district"),
        sub_district: category(record, "subDistrict"),
        product_selection: record.string_or_default("productSelection"),
        buyable: record.bool_or("buyable", true),
        status: status(record),
    }
}

/// Maps a search-hit payload to a [`BaseProduct`].
#[must_use]
pub fn map_to_base_product(raw: &Map<String, Value>) -> BaseProduct {
    base_from_record(&engine::map(raw, maps::PRODUCT_SEARCH_MAP))
}

/// Maps a detail-fetch payload to a [`PopulatedProduct`], including the
/// values derived from the `content` sub-document.
#[must_use]
pub fn map_to_populated_product(raw: &Map<String, Value>) -> PopulatedProduct {
    let record = engine::map(raw, maps::PRODUCT_DETAIL_MAP);
    let content = record.get("content");
    let traits = content.and_then(|c| c.get("traits"));
    let characteristics = content.and_then(|c| c.get("characteristics"));

    let characteristic =
        |label| derive::percentage_from_characteristics(characteristics, label);

    PopulatedProduct {
        base: base_from_record(&record),

        abv: derive::abv_from_traits(traits),
        sugar: derive::grams_per_liter_from_traits(traits, "Sukker"),
        acid: derive::grams_per_liter_from_traits(traits, "Syre"),
        tannins: characteristic("Garvestoffer"),
        bitterness: characteristic("Bitterhet"),
        freshness: characteristic("Friskhet"),
        fullness: characteristic("Fylde"),
        color: record.string("color"),
        aroma: record.string("aroma"),
        taste: record.string("taste"),

        bio_dynamic: record.bool_or("bioDynamic", false),
        eco: record.bool_or("eco", false),
        fair_trade: record.bool_or("fairTrade", false),
        gluten: record.bool_or("gluten", false),
        kosher: record.bool_or("kosher", false),
        environmental_packaging: record.bool_or("environmentalPackaging", false),
        expired: record.bool_or("expired", false),

        allergens: record.string("allergens"),
        food_pairing: food_pairing_from_content(content),
        raw_material: raw_material_from_content(content),
        storable: storable_from_content(content),
        container_type: record.string("containerType"),
        age_limit: record.u8("ageLimit").unwrap_or(18),
        description: record.string("description"),
        summary: record.string("summary"),
        method: record.string("method"),
        distributor: record.string("distributor"),
        distributor_id: id_string(&record, "distributorId"),
        wholesaler: record.string("wholesaler"),
        vintage: record.u16("vintage"),
    }
}

fn food_pairing_from_content(content: Option<&Value>) -> Vec<FoodPairing> {
    let resolved = content
        .and_then(|c| c.get("isGoodFor"))
        .map_or(Value::Array(Vec::new()), |v| filters::food_pairing(v));
    serde_json::from_value(resolved).unwrap_or_default()
}

fn raw_material_from_content(content: Option<&Value>) -> Vec<RawMaterial> {
    content
        .and_then(|c| c.get("ingredients"))
        .and_then(Value::as_array)
        .map(|list| {
            list.iter()
                .filter_map(resolve::raw_material)
                // An ingredient record without an explicit share is the
                // whole blend.
                .map(|mut material| {
                    if material.percentage.is_none() {
                        material.percentage = Some(100.0);
                    }
                    material
                })
                .collect()
        })
        .unwrap_or_default()
}

fn storable_from_content(content: Option<&Value>) -> Option<String> {
    content?
        .get("storagePotential")?
        .get("formattedValue")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

fn opt_text(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

fn geo_coordinates(raw: &Value) -> [f64; 2] {
    let coord = |key| {
        raw.get("geoPoint")
            .and_then(|g| g.get(key))
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
    };
    [coord("latitude"), coord("longitude")]
}

/// Maps a store-detail payload to a [`PopulatedStore`]. The shape is nested
/// rather than flat, so this one reads paths directly instead of going
/// through a field-map table.
#[must_use]
pub fn map_to_store(raw: &Value) -> PopulatedStore {
    let address = raw.get("address");

    PopulatedStore {
        base: BaseStore {
            store_number: opt_text(raw.get("name")).unwrap_or_default(),
            name: opt_text(raw.get("displayName")).unwrap_or_default(),
            street_address: opt_text(address.and_then(|a| a.get("line1"))).unwrap_or_default(),
            zip: opt_text(address.and_then(|a| a.get("postalCode"))),
            city: opt_text(address.and_then(|a| a.get("town"))),
            gps_coordinates: geo_coordinates(raw),
        },
        category: opt_text(raw.get("assortment")).unwrap_or_default(),
        opening_hours: raw
            .get("openingTimes")
            .map(derive::opening_hours_from_list)
            .unwrap_or_default(),
    }
}

/// Maps a store search hit to a [`BaseStore`]. Hits identify the store by
/// `id` rather than `name`, and carry zip and city only inside the
/// address's `formattedAddress` string.
#[must_use]
pub fn map_to_base_store(raw: &Value) -> BaseStore {
    let address = raw.get("address");
    let (zip, city) = opt_text(address.and_then(|a| a.get("formattedAddress")))
        .and_then(|formatted| derive::zip_and_city(&formatted))
        .map_or((None, None), |(zip, city)| (Some(zip), Some(city)));

    BaseStore {
        store_number: opt_text(raw.get("id")).unwrap_or_default(),
        name: opt_text(raw.get("displayName")).unwrap_or_default(),
        street_address: opt_text(address.and_then(|a| a.get("line1"))).unwrap_or_default(),
        zip,
        city,
        gps_coordinates: geo_coordinates(raw),
    }
}

/// Maps one row of the product CSV export to a [`StreamProduct`].
#[must_use]
pub fn map_product_stream_row(raw: &Map<String, Value>) -> StreamProduct {
    let record = engine::map(raw, maps::PRODUCT_STREAM_MAP);
    let clock = |target| record.u8(target);

    StreamProduct {
        code: record.string_or_default("code"),
        name: record.string_or_default("name"),
        url: record.string("url"),
        price: record.f64("price"),
        price_per_liter: record.f64("pricePerLiter"),
        container_size: record.f64("containerSize"),
        product_type: record.string("productType"),
        product_selection: record.string("productSelection"),
        store_category: record.string("storeCategory"),

        fullness: clock("fullness"),
        freshness: clock("freshness"),
        tannins: clock("tannins"),
        bitterness: clock("bitterness"),
        sweetness: clock("sweetness"),
        color: record.string("color"),
        aroma: record.string("aroma"),
        taste: record.string("taste"),
        food_pairing: record
            .get("foodPairing")
            .cloned()
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default(),

        main_country: record.string("mainCountry"),
        district: record.string("district"),
        sub_district: record.string("subDistrict"),
        vintage: record.u16("vintage"),
        raw_material: record.string("rawMaterial"),
        method: record.string("method"),

        abv: record.f64("abv"),
        sugar: record.f64("sugar"),
        acid: record.f64("acid"),
        storable: record.string("storable"),

        main_producer: record.string("mainProducer"),
        wholesaler: record.string("wholesaler"),
        distributor: record.string("distributor"),
        container_type: record.string("containerType"),
        cork: record.string("cork"),
    }
}

/// Maps one row of the store CSV export to a [`StreamStore`]. Weekday
/// columns carry `"HH:MM-HH:MM"` or `"Stengt"`; present columns always
/// yield an entry, closed days with no times.
#[must_use]
pub fn map_store_stream_row(raw: &Map<String, Value>) -> StreamStore {
    let record = engine::map(raw, maps::STORE_STREAM_MAP);

    let mut opening_hours = Vec::with_capacity(maps::STORE_STREAM_WEEKDAYS.len());
    for (target, week_day) in maps::STORE_STREAM_WEEKDAYS {
        let Some(hours) = record.string(target) else {
            continue;
        };
        let parsed = derive::parse_hours_string(&hours);
        opening_hours.push(OpeningHours {
            week_day: (*week_day).to_owned(),
            opens: parsed.map(|(opens, _)| opens),
            closes: parsed.map(|(_, closes)| closes),
        });
    }

    StreamStore {
        store_number: id_string(&record, "storeNumber").unwrap_or_default(),
        name: record.string_or_default("name"),
        street_address: record.string_or_default("streetAddress"),
        zip: record.string("zip"),
        city: record.string("city"),
        gps_coordinates: [
            record.f64_or("latitude", 0.0),
            record.f64_or("longitude", 0.0),
        ],
        opening_hours,
    }
}

/// Maps one facet payload to a [`Facet`]. The title and value transform
/// resolve from the facet's `code`; the display name resolves from its
/// `name` — the two differ in real payloads.
#[must_use]
pub fn map_to_facet(raw: &Value) -> Facet {
    let name = raw
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned();
    let code = raw.get("code").and_then(Value::as_str).unwrap_or(&name);
    let (title, transform) = facet_title(code)
        .map_or_else(|| (code.to_owned(), FacetValueTransform::None), |(t, tr)| (t.to_owned(), tr));

    let values = raw
        .get("values")
        .and_then(Value::as_array)
        .map(|list| {
            list.iter()
                .map(|value| facet_value(value, transform))
                .collect()
        })
        .unwrap_or_default();

    Facet {
        title,
        display_name: display_name(&name).map_or_else(|| name.clone(), str::to_owned),
        name,
        category: raw.get("category").and_then(Value::as_bool).unwrap_or(false),
        multi_select: raw
            .get("multiSelect")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        values,
    }
}

fn facet_value(raw: &Value, transform: FacetValueTransform) -> FacetValue {
    let name = raw
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned();
    let name = match transform {
        FacetValueTransform::None => name,
        FacetValueTransform::ClockRange => filters::clock_range(&Value::String(name.clone()))
            .as_str()
            .map_or(name, str::to_owned),
        FacetValueTransform::PairingIdentifier => FoodPairing::by_code(&name)
            .or_else(|| FoodPairing::by_name(&name))
            .map_or(name, |pairing| pairing.identifier.clone()),
        FacetValueTransform::Number => match filters::number(&Value::String(name.clone())) {
            Value::Number(n) => n.to_string(),
            _ => name,
        },
        FacetValueTransform::Boolean => filters::boolean(&Value::String(name.clone())).to_string(),
    };
    let query = raw
        .get("query")
        .and_then(|q| q.get("query"))
        .and_then(|q| q.get("value"))
        .and_then(Value::as_str)
        .unwrap_or_default();
    FacetValue::new(name, raw.get("count").and_then(Value::as_u64), query)
}

#[cfg(test)]
#[path = "mappers_test.rs"]
mod tests;
