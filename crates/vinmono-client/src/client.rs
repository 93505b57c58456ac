//! HTTP client for the retailer's public product and store APIs.
//!
//! Wraps `reqwest` with typed error handling and runs every payload through
//! the mapping layer, so callers only ever see the domain models.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use vinmono_core::{
    BaseStore, Facet, PopulatedProduct, PopulatedStore, StreamProduct, StreamStore,
};

use crate::error::ClientError;
use crate::mappers;
use crate::pagination::{Pagination, ProductQueryOptions, StoreSearchOptions};
use crate::search::{ProductSearchResponse, StoreSearchResponse};
use crate::stream;

const DEFAULT_BASE_URL: &str = "https://www.vinmonopolet.no";

/// Client for the retailer's public APIs.
///
/// Use [`VinmonoClient::new`] for production or
/// [`VinmonoClient::with_base_url`] to point at a mock server in tests.
pub struct VinmonoClient {
    client: Client,
    base_url: String,
}

impl VinmonoClient {
    /// Creates a client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, ClientError> {
        Self::with_base_url(timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(timeout_secs: u64, base_url: &str) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("vinmono/0.1")
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Searches products. Options carry the free-text query, active facets,
    /// sorting, and the 1-based page number.
    ///
    /// # Errors
    ///
    /// - [`ClientError::UnexpectedStatus`] on a non-2xx response.
    /// - [`ClientError::UnexpectedShape`] when the payload has no
    ///   `productSearchResult`.
    /// - [`ClientError::Http`] / [`ClientError::Deserialize`] on transport
    ///   or JSON failures.
    pub async fn get_products(
        &self,
        options: &ProductQueryOptions,
    ) -> Result<ProductSearchResponse, ClientError> {
        let url = format!("{}/api/products/search", self.base_url);
        let body = self
            .get_json(
                &url,
                &[
                    ("searchType", "product"),
                    ("fields", "FULL"),
                    ("pageSize", &options.page_size().to_string()),
                    ("currentPage", &wire_page(options.page).to_string()),
                    ("q", &options.query_fragment()),
                ],
            )
            .await?;

        let result = body
            .get("productSearchResult")
            .ok_or_else(|| ClientError::UnexpectedShape {
                context: "search response without productSearchResult".to_owned(),
            })?;

        let products = result
            .get("products")
            .and_then(Value::as_array)
            .map(|list| {
                list.iter()
                    .filter_map(Value::as_object)
                    .map(mappers::map_to_base_product)
                    .collect()
            })
            .unwrap_or_default();
        let facets = map_facets(result);
        let pagination = result
            .get("pagination")
            .map(Pagination::from_raw)
            .unwrap_or_default();

        Ok(ProductSearchResponse {
            products,
            facets,
            pagination,
        })
    }

    /// Fetches one product's full detail payload by code.
    ///
    /// # Errors
    ///
    /// - [`ClientError::UnexpectedStatus`] on a non-2xx response (the API
    ///   answers 404 for unknown codes).
    /// - [`ClientError::UnexpectedShape`] when the payload is not an object.
    pub async fn get_product(&self, code: &str) -> Result<PopulatedProduct, ClientError> {
        let url = format!("{}/api/products/{code}", self.base_url);
        let body = self.get_json(&url, &[("fields", "FULL")]).await?;
        let raw = body.as_object().ok_or_else(|| ClientError::UnexpectedShape {
            context: format!("product {code} payload is not an object"),
        })?;
        Ok(mappers::map_to_populated_product(raw))
    }

    /// Fetches one store by its store number.
    ///
    /// # Errors
    ///
    /// - [`ClientError::UnexpectedStatus`] on a non-2xx response.
    pub async fn get_store(&self, store_number: &str) -> Result<PopulatedStore, ClientError> {
        let url = format!("{}/api/stores/{store_number}", self.base_url);
        let body = self.get_json(&url, &[("fields", "FULL")]).await?;
        Ok(mappers::map_to_store(&body))
    }

    /// Searches stores. With a free-text query this hits the autocomplete
    /// endpoint; without one it pages stores by distance from the options'
    /// coordinates (central Oslo by default).
    ///
    /// # Errors
    ///
    /// - [`ClientError::UnexpectedStatus`] on a non-2xx response.
    /// - [`ClientError::Http`] / [`ClientError::Deserialize`] on transport
    ///   or JSON failures.
    pub async fn search_stores(
        &self,
        options: &StoreSearchOptions,
    ) -> Result<StoreSearchResponse, ClientError> {
        if let Some(query) = options.query.as_deref() {
            let url = format!("{}/api/stores/autocomplete", self.base_url);
            let body = self.get_json(&url, &[("query", query)]).await?;
            return Ok(StoreSearchResponse {
                stores: map_stores(&body),
                pagination: None,
            });
        }

        let (latitude, longitude) = options.coordinates();
        let url = format!("{}/api/stores", self.base_url);
        let body = self
            .get_json(
                &url,
                &[
                    ("fields", "BASIC"),
                    ("pageSize", &options.page_size().to_string()),
                    ("currentPage", &wire_page(options.page).to_string()),
                    ("latitude", &latitude.to_string()),
                    ("longitude", &longitude.to_string()),
                ],
            )
            .await?;
        Ok(StoreSearchResponse {
            stores: map_stores(&body),
            pagination: body.get("pagination").map(Pagination::from_raw),
        })
    }

    /// Fetches the facet vocabulary via an empty zero-result search.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::get_products`].
    pub async fn get_facets(&self) -> Result<Vec<Facet>, ClientError> {
        let url = format!("{}/api/products/search", self.base_url);
        let body = self
            .get_json(
                &url,
                &[
                    ("searchType", "product"),
                    ("fields", "FULL"),
                    ("pageSize", "0"),
                    ("currentPage", "0"),
                    ("q", ":relevance"),
                ],
            )
            .await?;
        let result = body
            .get("productSearchResult")
            .ok_or_else(|| ClientError::UnexpectedShape {
                context: "search response without productSearchResult".to_owned(),
            })?;
        Ok(map_facets(result))
    }

    /// Downloads and parses a semicolon-separated product CSV export.
    ///
    /// # Errors
    ///
    /// - [`ClientError::UnexpectedStatus`] on a non-2xx response.
    /// - [`ClientError::Csv`] when a row cannot be read.
    pub async fn fetch_product_stream(&self, url: &str) -> Result<Vec<StreamProduct>, ClientError> {
        let body = self.get_text(url).await?;
        stream::read_products(body.as_bytes())
    }

    /// Downloads and parses a semicolon-separated store CSV export.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::fetch_product_stream`].
    pub async fn fetch_store_stream(&self, url: &str) -> Result<Vec<StreamStore>, ClientError> {
        let body = self.get_text(url).await?;
        stream::read_stores(body.as_bytes())
    }

    async fn get_json(&self, url: &str, params: &[(&str, &str)]) -> Result<Value, ClientError> {
        let response = self.client.get(url).query(params).send().await?;
        let status = response.status();
        let final_url = response.url().to_string();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url: final_url,
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
            context: final_url,
            source: e,
        })
    }

    async fn get_text(&self, url: &str) -> Result<String, ClientError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let final_url = response.url().to_string();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url: final_url,
                body,
            });
        }
        Ok(body)
    }
}

/// Converts the 1-based caller-facing page number to the API's 0-based one.
fn wire_page(page: u32) -> u32 {
    page.saturating_sub(1)
}

fn map_stores(body: &Value) -> Vec<BaseStore> {
    body.get("stores")
        .and_then(Value::as_array)
        .map(|list| list.iter().map(mappers::map_to_base_store).collect())
        .unwrap_or_default()
}

fn map_facets(result: &Value) -> Vec<Facet> {
    result
        .get("facets")
        .and_then(Value::as_array)
        .map(|list| list.iter().map(mappers::map_to_facet).collect())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
