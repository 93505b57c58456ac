//! The fixed food-pairing vocabulary.
//!
//! Twelve entries, keyed both by the upstream single-letter code and by the
//! localized display name. The lookup maps are built once and never mutated.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// One entry of the pairing vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodPairing {
    /// Upstream single-letter code, e.g. `"A"`.
    pub code: String,
    /// Stable snake_case slug, e.g. `"aperitif"`.
    pub identifier: String,
    /// Localized display name, e.g. `"Aperitiff/avec"`.
    pub name: String,
}

impl fmt::Display for FoodPairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// The name for code C carries a leading space upstream; kept verbatim so
// by-name lookups match the API's own strings.
const ENTRIES: &[(&str, &str, &str)] = &[
    ("A", "aperitif", "Aperitiff/avec"),
    ("B", "shellfish", "Skalldyr"),
    ("C", "fish", " Fisk"),
    ("D", "light_meat", "Lyst kjøtt"),
    ("E", "beef", "Storfe"),
    ("F", "mutton", "Lam og sau"),
    ("G", "small_game", "Småvilt og fugl"),
    ("H", "large_game", "Storvilt"),
    ("L", "cheese", "Ost"),
    ("N", "dessert", "Dessert, kake, frukt"),
    ("Q", "pork", "Svinekjøtt"),
    ("R", "vegetables", "Grønnsaker"),
];

static ALL: LazyLock<Vec<FoodPairing>> = LazyLock::new(|| {
    ENTRIES
        .iter()
        .map(|&(code, identifier, name)| FoodPairing {
            code: code.to_owned(),
            identifier: identifier.to_owned(),
            name: name.to_owned(),
        })
        .collect()
});

static BY_CODE: LazyLock<HashMap<&'static str, &'static FoodPairing>> =
    LazyLock::new(|| ALL.iter().map(|p| (p.code.as_str(), p)).collect());

static BY_NAME: LazyLock<HashMap<&'static str, &'static FoodPairing>> =
    LazyLock::new(|| ALL.iter().map(|p| (p.name.as_str(), p)).collect());

impl FoodPairing {
    /// All vocabulary entries in upstream order.
    #[must_use]
    pub fn all() -> &'static [FoodPairing] {
        &ALL
    }

    /// Looks up a pairing by its single-letter code.
    #[must_use]
    pub fn by_code(code: &str) -> Option<&'static FoodPairing> {
        BY_CODE.get(code).copied()
    }

    /// Looks up a pairing by its localized display name.
    #[must_use]
    pub fn by_name(name: &str) -> Option<&'static FoodPairing> {
        BY_NAME.get(name).copied()
    }
}
