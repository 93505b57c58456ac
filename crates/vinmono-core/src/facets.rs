//! Facet models and the fixed facet vocabulary tables.
//!
//! A facet is a searchable property dimension (country, category, ...) whose
//! values carry canonical query fragments used to build follow-up searches.
//! The tables here are plain data; resolving a raw facet payload against
//! them happens in `vinmono-client`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Boilerplate prefix the search API prepends to facet queries. Stripped on
/// construction so `FacetValue::query` round-trips into new searches.
pub const BASE_QUERY_PREFIX: &str = ":relevance:visibleInSearch:true:";

/// How a facet's value names must be transformed for display.
///
/// Declared per table row so the mapping layer never inspects value names to
/// guess; an unknown facet gets `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetValueTransform {
    /// Value names pass through unchanged.
    None,
    /// Value names are `lo-hi` ranges on the 0-8 clock scale; both endpoints
    /// are converted to 0-100 percentages.
    ClockRange,
    /// Value names are food-pairing codes resolved to their identifiers.
    PairingIdentifier,
    /// Value names are numeric strings, normalized through the number
    /// filter.
    Number,
    /// Value names are truthiness tokens, normalized to `true`/`false`.
    Boolean,
}

/// Facet code → (semantic title, value-name transform).
pub const FACET_TITLES: &[(&str, &str, FacetValueTransform)] = &[
    ("Butikker", "stores", FacetValueTransform::None),
    ("Pris", "price", FacetValueTransform::None),
    ("isGoodfor", "foodPairing", FacetValueTransform::PairingIdentifier),
    ("Fylde", "fullness", FacetValueTransform::ClockRange),
    ("Friskhet", "freshness", FacetValueTransform::ClockRange),
    ("Bitterhet", "bitterness", FacetValueTransform::ClockRange),
    ("Soedme", "sweetness", FacetValueTransform::ClockRange),
    ("Tannin(Sulfates)", "tannins", FacetValueTransform::ClockRange),
    ("Sukker", "sugar", FacetValueTransform::Number),
    ("Raastoff", "rawMaterial", FacetValueTransform::None),
    ("Emballasjetype", "containerType", FacetValueTransform::None),
    ("Lagringsgrad", "storable", FacetValueTransform::None),
    ("Biodynamic", "bioDynamic", FacetValueTransform::None),
    ("Eco", "eco", FacetValueTransform::None),
    ("Fairtrade", "fairtrade", FacetValueTransform::None),
    ("Gluten", "gluten", FacetValueTransform::None),
    ("Kosher", "kosher", FacetValueTransform::None),
    ("inStockFlag", "inStock", FacetValueTransform::Boolean),
];

/// Facet name → localized display name. Names missing here display as-is.
pub const DISPLAY_NAMES: &[(&str, &str)] = &[
    ("mainCategory", "Kategori"),
    ("mainSubCategory", "Underkategori"),
    ("mainSubSubCategory", "Varetype"),
    ("mainCountry", "Land"),
    ("volumeRanges", "Volum"),
    ("isGoodfor", "Passer til"),
    ("Soedme", "Sødme"),
    ("Tannin(Sulfates)", "Garvestoffer"),
    ("Raastoff", "Råstoff"),
    ("Biodynamic", "Biodynamisk"),
    ("Eco", "Økologisk"),
    ("Gluten", "Glutenfri"),
    ("inStockFlag", "På lager"),
];

/// The fixed main-category vocabulary: (query code, display name).
pub const MAIN_CATEGORIES: &[(&str, &str)] = &[
    ("alkoholfritt", "Alkoholfritt"),
    ("rødvin", "Rødvin"),
    ("rosévin", "Rosévin"),
    ("hvitvin", "Hvitvin"),
    ("perlende_vin", "Perlende vin"),
    ("aromatisert_vin", "Aromatisert vin"),
    ("musserende_vin", "Musserende vin"),
    ("sterkvin", "Sterkvin"),
    ("fruktvin", "Fruktvin"),
    ("brennevin", "Brennevin"),
    ("sider", "Sider"),
    ("øl", "Øl"),
    ("Sake", "Sake"),
    ("mjød", "Mjød"),
];

/// Resolves a facet code against [`FACET_TITLES`].
#[must_use]
pub fn facet_title(code: &str) -> Option<(&'static str, FacetValueTransform)> {
    FACET_TITLES
        .iter()
        .find(|&&(c, _, _)| c == code)
        .map(|&(_, title, transform)| (title, transform))
}

/// Resolves a facet name against [`DISPLAY_NAMES`].
#[must_use]
pub fn display_name(name: &str) -> Option<&'static str> {
    DISPLAY_NAMES
        .iter()
        .find(|&&(n, _)| n == name)
        .map(|&(_, display)| display)
}

/// One selectable value of a [`Facet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetValue {
    pub name: String,
    /// Occurrence count within the current result set, when reported.
    pub count: Option<u64>,
    /// Canonical query fragment, boilerplate prefix stripped.
    pub query: String,
}

impl FacetValue {
    /// Builds a value, stripping [`BASE_QUERY_PREFIX`] from the raw query so
    /// the stored form is stable for round-tripping.
    #[must_use]
    pub fn new(name: impl Into<String>, count: Option<u64>, raw_query: &str) -> Self {
        let query = raw_query
            .strip_prefix(BASE_QUERY_PREFIX)
            .unwrap_or(raw_query)
            .to_owned();
        Self {
            name: name.into(),
            count,
            query,
        }
    }

    /// Ready-made facet value for one of the fixed main categories.
    #[must_use]
    pub fn main_category(code: &str) -> Option<Self> {
        MAIN_CATEGORIES
            .iter()
            .find(|&&(c, _)| c == code)
            .map(|&(code, name)| Self {
                name: name.to_owned(),
                count: None,
                query: format!("mainCategory:{code}"),
            })
    }
}

impl fmt::Display for FacetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.query)
    }
}

impl FromStr for FacetValue {
    type Err = CoreError;

    /// Accepts a raw `<facet>:<value>` fragment, e.g. `"mainCategory:øl"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let valid = s.split_once(':').is_some_and(|(facet, value)| {
            !facet.is_empty()
                && !value.is_empty()
                && facet.chars().all(|c| c.is_alphanumeric() || c == '_')
        });
        if !valid {
            return Err(CoreError::InvalidFacetQuery(s.to_owned()));
        }
        Ok(Self::new(String::new(), None, s))
    }
}

/// A group of [`FacetValue`]s under a semantic title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facet {
    /// Semantic title from [`FACET_TITLES`], or the raw code when unmapped.
    pub title: String,
    /// Raw upstream facet name.
    pub name: String,
    /// Localized display name from [`DISPLAY_NAMES`], or the raw name.
    pub display_name: String,
    pub category: bool,
    pub multi_select: bool,
    pub values: Vec<FacetValue>,
}
