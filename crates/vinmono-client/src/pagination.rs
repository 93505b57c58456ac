//! Search pagination state and product query options.

use serde_json::Value;
use vinmono_core::FacetValue;

/// Default page size when the caller does not set one.
pub const DEFAULT_PAGE_SIZE: u32 = 24;

/// Sortable search fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Relevance,
    Name,
    Price,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortField {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::Name => "name",
            Self::Price => "price",
        }
    }
}

impl SortOrder {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// Options for a product search. Pages are 1-based here; the wire protocol
/// is 0-based and the client converts on request.
#[derive(Debug, Clone, Default)]
pub struct ProductQueryOptions {
    /// Free-text query, may be empty for pure facet browsing.
    pub query: String,
    /// Page size; [`DEFAULT_PAGE_SIZE`] when unset.
    pub limit: Option<u32>,
    pub page: u32,
    pub sort: SortField,
    pub order: SortOrder,
    /// Active facet selections, appended to the query fragment.
    pub facets: Vec<FacetValue>,
}

impl ProductQueryOptions {
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: 1,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_facet(mut self, facet: FacetValue) -> Self {
        self.facets.push(facet);
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort: SortField, order: SortOrder) -> Self {
        self.sort = sort;
        self.order = order;
        self
    }

    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// The colon-joined `q` parameter value:
    /// `<text>:<sort>:<facet query>:<facet query>...`. The sort segment is
    /// always colon-terminated, facets or not — the API expects the shape
    /// that way. Relevance sorting carries no order suffix; the other
    /// fields do.
    #[must_use]
    pub fn query_fragment(&self) -> String {
        let sort = match self.sort {
            SortField::Relevance => self.sort.as_str().to_owned(),
            field => format!("{}-{}", field.as_str(), self.order.as_str()),
        };
        let facets: Vec<&str> = self.facets.iter().map(|f| f.query.as_str()).collect();
        format!("{}:{sort}:{}", self.query, facets.join(":"))
    }

    /// Options for the following page.
    #[must_use]
    pub fn next_page(&self) -> Self {
        Self {
            page: self.page + 1,
            ..self.clone()
        }
    }

    /// Options for the preceding page, if there is one.
    #[must_use]
    pub fn previous_page(&self) -> Option<Self> {
        (self.page > 1).then(|| Self {
            page: self.page - 1,
            ..self.clone()
        })
    }
}

/// Default page size for location-based store search.
pub const DEFAULT_STORE_PAGE_SIZE: u32 = 10;

/// Fallback search origin for location-based store search: central Oslo.
pub const DEFAULT_LATITUDE: f64 = 59.912_605_4;
pub const DEFAULT_LONGITUDE: f64 = 10.751_533_4;

/// Options for a store search. A free-text query hits the autocomplete
/// endpoint; without one the search pages stores by distance from the
/// given coordinates, defaulting to central Oslo.
#[derive(Debug, Clone, Default)]
pub struct StoreSearchOptions {
    pub query: Option<String>,
    /// `(latitude, longitude)` to search around.
    pub near: Option<(f64, f64)>,
    /// 1-based page number; ignored on the autocomplete path.
    pub page: u32,
    /// Page size; [`DEFAULT_STORE_PAGE_SIZE`] when unset.
    pub limit: Option<u32>,
}

impl StoreSearchOptions {
    #[must_use]
    pub fn new() -> Self {
        Self {
            page: 1,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn by_query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::new()
        }
    }

    #[must_use]
    pub fn near_location(latitude: f64, longitude: f64) -> Self {
        Self {
            near: Some((latitude, longitude)),
            ..Self::new()
        }
    }

    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_STORE_PAGE_SIZE)
    }

    /// The coordinates to search around, falling back to central Oslo.
    #[must_use]
    pub fn coordinates(&self) -> (f64, f64) {
        self.near.unwrap_or((DEFAULT_LATITUDE, DEFAULT_LONGITUDE))
    }
}

/// Pagination state as reported by the search API. `current_page` keeps the
/// wire's 0-based convention.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pagination {
    pub current_page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub total_results: u64,
    pub sort: Option<String>,
}

impl Pagination {
    #[must_use]
    pub fn from_raw(raw: &Value) -> Self {
        let u32_field = |key| {
            raw.get(key)
                .and_then(Value::as_u64)
                .and_then(|v| u32::try_from(v).ok())
                .unwrap_or(0)
        };
        Self {
            current_page: u32_field("currentPage"),
            page_size: u32_field("pageSize"),
            total_pages: u32_field("totalPages"),
            total_results: raw
                .get("totalResults")
                .and_then(Value::as_u64)
                .unwrap_or(0),
            sort: raw
                .get("sort")
                .and_then(Value::as_str)
                .map(str::to_owned),
        }
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_page + 1 < self.total_pages
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current_page > 0
    }
}
