pub mod client;
pub mod derive;
pub mod engine;
pub mod error;
pub mod filters;
pub mod mappers;
pub mod maps;
pub mod pagination;
pub mod resolve;
pub mod search;
pub mod stream;

pub use client::VinmonoClient;
pub use error::ClientError;
pub use pagination::{Pagination, ProductQueryOptions, SortField, SortOrder, StoreSearchOptions};
pub use search::{ProductSearchResponse, StoreSearchResponse};
