use std::fmt;
use std::time::Duration;

use crate::api::cache::TtlCache;
use crate::api::client::ApiClient;
use crate::api::types::{Product, ProductQuery};
use crate::config::CacheConfig;

/// A fetch requested by the UI.
#[derive(Debug, Clone)]
pub enum FetchCommand {
    Products(ProductQuery),
    Product(u64),
    Categories,
}

/// Which endpoint a fetch targeted. Used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    Products,
    Product,
    Categories,
}

impl fmt::Display for FetchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FetchKind::Products => "product list",
            FetchKind::Product => "product",
            FetchKind::Categories => "categories",
        };
        f.write_str(name)
    }
}

/// Result of a fetch, delivered to the event loop.
#[derive(Debug)]
pub enum FetchOutcome {
    Products {
        query: ProductQuery,
        products: Vec<Product>,
    },
    Product(Product),
    Categories(Vec<String>),
    Failed {
        kind: FetchKind,
        message: String,
    },
}

const CATEGORIES_KEY: &str = "categories";

/// Serves [`FetchCommand`]s against the client, through the TTL caches.
///
/// Successful responses are cached; failures are reported and never
/// cached. All three endpoints propagate failure uniformly.
pub struct FetchWorker {
    client: ApiClient,
    lists: TtlCache<Vec<Product>>,
    items: TtlCache<Product>,
    categories: TtlCache<Vec<String>>,
}

impl FetchWorker {
    pub fn new(client: ApiClient, cache: &CacheConfig) -> Self {
        let list_ttl = Duration::from_secs(cache.list_ttl_seconds);
        let item_ttl = Duration::from_secs(cache.item_ttl_seconds);
        Self {
            client,
            lists: TtlCache::new(list_ttl),
            items: TtlCache::new(item_ttl),
            categories: TtlCache::new(list_ttl),
        }
    }

    pub async fn handle(&self, command: FetchCommand) -> FetchOutcome {
        match command {
            FetchCommand::Products(query) => self.products(query).await,
            FetchCommand::Product(id) => self.product(id).await,
            FetchCommand::Categories => self.category_index().await,
        }
    }

    async fn products(&self, query: ProductQuery) -> FetchOutcome {
        let key = query.cache_key();
        if let Some(products) = self.lists.get(&key) {
            tracing::debug!(key = %key, "product list served from cache");
            return FetchOutcome::Products { query, products };
        }

        match self.client.fetch_products(&query).await {
            Ok(products) => {
                tracing::info!(key = %key, count = products.len(), "fetched product list");
                self.lists.insert(key, products.clone());
                FetchOutcome::Products { query, products }
            }
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "product list fetch failed");
                FetchOutcome::Failed {
                    kind: FetchKind::Products,
                    message: err.to_string(),
                }
            }
        }
    }

    async fn product(&self, id: u64) -> FetchOutcome {
        let key = id.to_string();
        if let Some(product) = self.items.get(&key) {
            tracing::debug!(id, "product served from cache");
            return FetchOutcome::Product(product);
        }

        match self.client.fetch_product(id).await {
            Ok(product) => {
                tracing::info!(id, "fetched product");
                self.items.insert(key, product.clone());
                FetchOutcome::Product(product)
            }
            Err(err) => {
                tracing::warn!(id, error = %err, "product fetch failed");
                FetchOutcome::Failed {
                    kind: FetchKind::Product,
                    message: err.to_string(),
                }
            }
        }
    }

    async fn category_index(&self) -> FetchOutcome {
        if let Some(categories) = self.categories.get(CATEGORIES_KEY) {
            tracing::debug!("categories served from cache");
            return FetchOutcome::Categories(categories);
        }

        match self.client.fetch_categories().await {
            Ok(categories) => {
                tracing::info!(count = categories.len(), "fetched categories");
                self.categories.insert(CATEGORIES_KEY, categories.clone());
                FetchOutcome::Categories(categories)
            }
            Err(err) => {
                tracing::warn!(error = %err, "categories fetch failed");
                FetchOutcome::Failed {
                    kind: FetchKind::Categories,
                    message: err.to_string(),
                }
            }
        }
    }
}
