//! Client for the FluxMarket catalog service.
//!
//! Three read-only endpoints: paged product lists, single products, and
//! the category index. Responses are cached process-wide with a TTL per
//! endpoint class; the fetch worker consults the cache before touching
//! the network.

mod cache;
mod client;
mod error;
mod types;
mod worker;

pub use cache::TtlCache;
pub use client::ApiClient;
pub use error::ApiError;
pub use types::{Product, ProductPage, ProductQuery, SortOrder};
pub use worker::{FetchCommand, FetchKind, FetchOutcome, FetchWorker};
