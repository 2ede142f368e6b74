pub mod cli;
pub mod core;
pub mod exchange;
pub mod providers;
pub mod store;

use crate::core::Direction;
use crate::core::config::AppConfig;
use crate::exchange::{Conversion, Exchange};
use crate::providers::CurrencyApiProvider;
use crate::store::DiskStore;
use anyhow::Result;
use tracing::{debug, info};

pub async fn run(config: &AppConfig, direction: Direction, amount: f64) -> Result<Conversion> {
    info!("Exchange starting...");
    debug!("Loaded config: {config:#?}");

    let fetcher = CurrencyApiProvider::new(&config.base_url, &config.api_key_path);
    let store = DiskStore::new(&config.cache_path);

    Exchange::new(fetcher, store).convert(direction, amount).await
}
