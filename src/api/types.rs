use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single catalog product.
///
/// Unknown fields from the service are ignored; absent optional fields
/// fall back to empty values so a sparse record still renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub category: String,
    /// Image URLs, in display order. Feeds the gallery item sequence.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

/// Envelope of the product-list endpoint: `{ "products": [...] }`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("invalid sort order '{}', expected asc or desc", other)),
        }
    }
}

/// Parameters for the product-list endpoint.
///
/// `page` and `limit` are always sent; the rest only when set.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductQuery {
    pub page: u32,
    pub limit: u32,
    pub sort_by: Option<String>,
    pub order: Option<SortOrder>,
    pub category: Option<String>,
    pub search: Option<String>,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 20,
            sort_by: None,
            order: None,
            category: None,
            search: None,
        }
    }
}

impl ProductQuery {
    /// Query parameters in canonical order.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(category) = &self.category {
            params.push(("category", category.clone()));
        }
        if let Some(search) = &self.search {
            params.push(("search", search.clone()));
        }
        if let Some(sort_by) = &self.sort_by {
            params.push(("sortBy", sort_by.clone()));
        }
        if let Some(order) = &self.order {
            params.push(("order", order.as_str().to_string()));
        }
        params
    }

    /// Canonical cache key for this query.
    ///
    /// Defaults are already materialized in `page`/`limit`, so two
    /// queries that differ only in how defaults were spelled produce
    /// the same key.
    pub fn cache_key(&self) -> String {
        let params = self.to_params();
        let mut key = String::new();
        for (i, (name, value)) in params.iter().enumerate() {
            if i > 0 {
                key.push('&');
            }
            key.push_str(name);
            key.push('=');
            key.push_str(value);
        }
        key
    }
}
