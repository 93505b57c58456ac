pub mod facets;
pub mod food_pairing;
pub mod products;
pub mod stores;

pub use facets::{display_name, facet_title, Facet, FacetValue, FacetValueTransform};
pub use food_pairing::FoodPairing;
pub use products::{
    BaseProduct, Category, ImageSize, PopulatedProduct, ProductImage, ProductStatus, RawMaterial,
    StreamProduct, Volume,
};
pub use stores::{BaseStore, OpeningHours, PopulatedStore, StreamStore, TimeOfDay};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("facet value string must be in <facet>:<value> format, got {0:?}")]
    InvalidFacetQuery(String),
}
