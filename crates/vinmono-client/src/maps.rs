//! Static field-map tables, one per upstream shape.
//!
//! Tables are plain data: `(upstream key, target field, transform chain)`.
//! A new upstream field means a new row here, never an engine change. The
//! JSON tables mostly rename; scalar coercion happens in the chains and
//! sub-document resolution in [`crate::mappers`].

use crate::engine::FieldMapping;
use crate::filters::{self, Filter};

const TEXT: &[Filter] = &[Filter::Apply(filters::text)];
const TRIM: &[Filter] = &[Filter::Apply(filters::trim)];
const NUMBER: &[Filter] = &[Filter::Apply(filters::number)];
const NUMBER_GREEDY: &[Filter] = &[Filter::Apply(filters::number_greedy)];
const PRICE: &[Filter] = &[Filter::Apply(filters::price)];
const VOLUME: &[Filter] = &[Filter::Apply(filters::volume)];
const BOOLEAN: &[Filter] = &[Filter::Apply(filters::boolean)];
const STATUS: &[Filter] = &[Filter::Apply(filters::status)];
const CLOCK: &[Filter] = &[Filter::Apply(filters::clock_to_percentage)];
const YEAR: &[Filter] = &[Filter::Apply(filters::year)];
const NULLIFY_UNKNOWN_NUMBER: &[Filter] = &[Filter::Nullify {
    tokens: &["Ukjent"],
    inner: filters::number,
}];
const PASSES_THROUGH: &[Filter] = &[];

const fn row(
    source: &'static str,
    target: &'static str,
    filters: &'static [Filter],
) -> FieldMapping {
    FieldMapping {
        source,
        target,
        filters,
    }
}

/// Product-detail JSON shape. Sub-documents (`price`, `volume`, `images`,
/// categories, `content`) are renamed here and resolved by the mappers.
pub static PRODUCT_DETAIL_MAP: &[FieldMapping] = &[
    row("code", "code", PASSES_THROUGH),
    row("name", "name", PASSES_THROUGH),
    row("url", "url", PASSES_THROUGH),
    row("price", "price", PRICE),
    // No litrePrice row: the per-liter price is derived from price and
    // volume, never taken from the payload.
    row("volume", "volume", PASSES_THROUGH),
    row("images", "images", PASSES_THROUGH),
    row("main_category", "mainCategory", PASSES_THROUGH),
    row("main_sub_category", "mainSubCategory", PASSES_THROUGH),
    row("main_country", "mainCountry", PASSES_THROUGH),
    row("district", "district", PASSES_THROUGH),
    row("sub_District", "subDistrict", PASSES_THROUGH),
    row("product_selection", "productSelection", TEXT),
    row("buyable", "buyable", BOOLEAN),
    row("status", "status", STATUS),
    row("content", "content", PASSES_THROUGH),
    row("allergens", "allergens", TEXT),
    row("bioDynamic", "bioDynamic", BOOLEAN),
    row("eco", "eco", BOOLEAN),
    row("environmentalPackaging", "environmentalPackaging", BOOLEAN),
    row("expired", "expired", BOOLEAN),
    row("fairTrade", "fairTrade", BOOLEAN),
    row("gluten", "gluten", BOOLEAN),
    row("kosher", "kosher", BOOLEAN),
    row("color", "color", TEXT),
    row("smell", "aroma", TEXT),
    row("taste", "taste", TEXT),
    row("packageType", "containerType", TEXT),
    row("ageLimit", "ageLimit", NUMBER),
    row("description", "description", TEXT),
    row("summary", "summary", TEXT),
    row("method", "method", TEXT),
    row("distributor", "distributor", TEXT),
    row("distributorId", "distributorId", PASSES_THROUGH),
    row("wholeSaler", "wholesaler", TEXT),
    row("year", "vintage", YEAR),
];

/// Search-result JSON shape: the subset of detail fields the search API
/// returns per hit.
pub static PRODUCT_SEARCH_MAP: &[FieldMapping] = &[
    row("code", "code", PASSES_THROUGH),
    row("name", "name", PASSES_THROUGH),
    row("url", "url", PASSES_THROUGH),
    row("price", "price", PRICE),
    row("volume", "volume", PASSES_THROUGH),
    row("images", "images", PASSES_THROUGH),
    row("main_category", "mainCategory", PASSES_THROUGH),
    row("main_sub_category", "mainSubCategory", PASSES_THROUGH),
    row("main_country", "mainCountry", PASSES_THROUGH),
    row("district", "district", PASSES_THROUGH),
    row("sub_District", "subDistrict", PASSES_THROUGH),
    row("product_selection", "productSelection", TEXT),
    row("buyable", "buyable", BOOLEAN),
    row("status", "status", STATUS),
    row("expired", "expired", BOOLEAN),
];

/// Flat semicolon-CSV product export. Column names are the export's own;
/// the duplicated `Rastoff`/`Råstoff` and `Distributor`/`Distributør` rows
/// cover both spellings seen across export vintages.
pub static PRODUCT_STREAM_MAP: &[FieldMapping] = &[
    row("Varenummer", "code", PASSES_THROUGH),
    row("Varenavn", "name", TEXT),
    row("Vareurl", "url", TEXT),
    row("Volum", "containerSize", VOLUME),
    row("Pris", "price", PRICE),
    row("Literpris", "pricePerLiter", PRICE),
    row("Varetype", "productType", TEXT),
    row("Produktutvalg", "productSelection", TEXT),
    row("Butikkategori", "storeCategory", TEXT),
    row("Fylde", "fullness", CLOCK),
    row("Friskhet", "freshness", CLOCK),
    row("Garvestoffer", "tannins", CLOCK),
    row("Bitterhet", "bitterness", CLOCK),
    row("Sodme", "sweetness", CLOCK),
    row("Farge", "color", TRIM),
    row("Lukt", "aroma", TEXT),
    row("Smak", "taste", TEXT),
    row(
        "Passertil01",
        "foodPairing",
        &[
            Filter::Join {
                keys: &["Passertil01", "Passertil02", "Passertil03"],
                inner: None,
            },
            Filter::Apply(filters::food_pairing),
        ],
    ),
    row("Land", "mainCountry", TEXT),
    row("Distrikt", "district", TEXT),
    row("Underdistrikt", "subDistrict", TEXT),
    row("Argang", "vintage", YEAR),
    row("Rastoff", "rawMaterial", TEXT),
    row("Råstoff", "rawMaterial", TEXT),
    row("Metode", "method", TEXT),
    row("Alkohol", "abv", NUMBER_GREEDY),
    row("Sukker", "sugar", NULLIFY_UNKNOWN_NUMBER),
    row("Syre", "acid", NULLIFY_UNKNOWN_NUMBER),
    row("Lagringsgrad", "storable", TEXT),
    row("Produsent", "mainProducer", TEXT),
    row("Grossist", "wholesaler", TEXT),
    row("Distributor", "distributor", TEXT),
    row("Distributør", "distributor", TEXT),
    row("Emballasjetype", "containerType", TEXT),
    row("Korktype", "cork", TEXT),
];

/// Flat semicolon-CSV store export. Weekday columns carry the legacy
/// `"HH:MM-HH:MM"` / `"Stengt"` strings, parsed by the store mapper.
pub static STORE_STREAM_MAP: &[FieldMapping] = &[
    row("Butikknummer", "storeNumber", PASSES_THROUGH),
    row("Butikknavn", "name", TEXT),
    row("Gateadresse", "streetAddress", TEXT),
    row("Postnr", "zip", TEXT),
    row("Poststed", "city", TEXT),
    row("GPS_breddegrad", "latitude", NUMBER),
    row("GPS_lengdegrad", "longitude", NUMBER),
    row("Apn_mandag", "hoursMonday", TEXT),
    row("Apn_tirsdag", "hoursTuesday", TEXT),
    row("Apn_onsdag", "hoursWednesday", TEXT),
    row("Apn_torsdag", "hoursThursday", TEXT),
    row("Apn_fredag", "hoursFriday", TEXT),
    row("Apn_lordag", "hoursSaturday", TEXT),
    row("Apn_sondag", "hoursSunday", TEXT),
];

/// Weekday column targets paired with the localized weekday names used in
/// the resulting [`vinmono_core::OpeningHours`] entries.
pub static STORE_STREAM_WEEKDAYS: &[(&str, &str)] = &[
    ("hoursMonday", "Mandag"),
    ("hoursTuesday", "Tirsdag"),
    ("hoursWednesday", "Onsdag"),
    ("hoursThursday", "Torsdag"),
    ("hoursFriday", "Fredag"),
    ("hoursSaturday", "Lørdag"),
    ("hoursSunday", "Søndag"),
];
