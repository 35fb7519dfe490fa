use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fluxmart::api::{ProductQuery, SortOrder};
use fluxmart::config::Config;
use fluxmart::ui;

/// Terminal storefront browser for the FluxMarket catalog API.
#[derive(Debug, Parser)]
#[command(name = "fluxmart", version, about)]
struct Cli {
    /// Path to an alternate config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the API base URL from the config.
    #[arg(long)]
    base_url: Option<String>,

    /// Catalog page to open with.
    #[arg(long)]
    page: Option<u32>,

    /// Products per page.
    #[arg(long)]
    limit: Option<u32>,

    /// Filter the catalog to one category.
    #[arg(long)]
    category: Option<String>,

    /// Filter products by title.
    #[arg(long)]
    search: Option<String>,

    /// Field to sort the catalog by.
    #[arg(long)]
    sort_by: Option<String>,

    /// Sort order: asc or desc.
    #[arg(long)]
    order: Option<SortOrder>,
}

impl Cli {
    fn initial_query(&self, config: &Config) -> ProductQuery {
        ProductQuery {
            page: self.page.unwrap_or(1),
            limit: self.limit.unwrap_or(config.ui.page_limit),
            sort_by: self.sort_by.clone(),
            order: self.order.clone(),
            category: self.category.clone(),
            search: self.search.clone(),
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };

    if let Some(base_url) = cli.base_url.clone() {
        config.api.base_url = base_url;
        config.validate().context("validating overridden config")?;
    }

    let query = cli.initial_query(&config);
    tracing::info!(base_url = %config.api.base_url, "starting fluxmart");

    ui::runtime::run(config, query)
}
