//! Search response types.

use vinmono_core::{BaseProduct, BaseStore, Facet};

use crate::pagination::Pagination;

/// One page of product search results with the facet vocabulary the API
/// reported for the current query.
#[derive(Debug, Clone, Default)]
pub struct ProductSearchResponse {
    pub products: Vec<BaseProduct>,
    pub facets: Vec<Facet>,
    pub pagination: Pagination,
}

/// One page of store search results. The autocomplete path reports no
/// pagination block, so it is absent there.
#[derive(Debug, Clone, Default)]
pub struct StoreSearchResponse {
    pub stores: Vec<BaseStore>,
    pub pagination: Option<Pagination>,
}
