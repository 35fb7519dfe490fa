use std::time::Duration;

use reqwest::Client;

use crate::api::error::ApiError;
use crate::api::types::{Product, ProductPage, ProductQuery};
use crate::config::ApiConfig;

/// Async client for the three catalog endpoints.
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .timeout(Duration::from_secs(u64::from(config.request_timeout_seconds)))
            .build()
            .expect("Failed to build API client");

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch one page of products with filtering and sorting.
    pub async fn fetch_products(&self, query: &ProductQuery) -> Result<Vec<Product>, ApiError> {
        let url = format!("{}/api/products", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&query.to_params())
            .send()
            .await
            .map_err(|e| ApiError::Transport {
                url: url.clone(),
                source: e,
            })?;

        if !response.status().is_success() {
            return Err(ApiError::Status {
                status: response.status().as_u16(),
                url,
            });
        }

        let page: ProductPage = response
            .json()
            .await
            .map_err(|e| ApiError::Decode { url, source: e })?;
        Ok(page.products)
    }

    /// Fetch a single product by id.
    pub async fn fetch_product(&self, id: u64) -> Result<Product, ApiError> {
        let url = format!("{}/api/products/{}", self.base_url, id);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport {
                url: url.clone(),
                source: e,
            })?;

        if !response.status().is_success() {
            return Err(ApiError::Status {
                status: response.status().as_u16(),
                url,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode { url, source: e })
    }

    /// Fetch the category index.
    pub async fn fetch_categories(&self) -> Result<Vec<String>, ApiError> {
        let url = format!("{}/api/categories", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport {
                url: url.clone(),
                source: e,
            })?;

        if !response.status().is_success() {
            return Err(ApiError::Status {
                status: response.status().as_u16(),
                url,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode { url, source: e })
    }
}
