//! Keeps the cached rate current and converts amounts with it.

use crate::core::{Direction, RateFetcher, RateSnapshot};
use crate::store::SnapshotStore;
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use std::fmt::Display;
use tracing::{debug, info, warn};

/// Outcome of one conversion, along with the snapshot that priced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub direction: Direction,
    pub amount: f64,
    pub converted: f64,
    pub snapshot: RateSnapshot,
}

impl Display for Conversion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} is {:.4} {}",
            self.amount,
            self.direction.from_currency().symbol(),
            self.converted,
            self.direction.to_currency().symbol()
        )
    }
}

pub struct Exchange<F: RateFetcher, S: SnapshotStore> {
    fetcher: F,
    store: S,
}

impl<F: RateFetcher, S: SnapshotStore> Exchange<F, S> {
    pub fn new(fetcher: F, store: S) -> Self {
        Self { fetcher, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn convert(&self, direction: Direction, amount: f64) -> Result<Conversion> {
        self.convert_on(direction, amount, Local::now().date_naive())
            .await
    }

    pub async fn convert_on(
        &self,
        direction: Direction,
        amount: f64,
        today: NaiveDate,
    ) -> Result<Conversion> {
        if !amount.is_finite() {
            anyhow::bail!("Amount to convert must be a finite number, got {amount}");
        }

        let snapshot = self.current_snapshot_on(today).await?;
        let converted = direction.apply(amount, snapshot.rate);
        debug!(?direction, amount, rate = snapshot.rate, converted, "Converted amount");

        Ok(Conversion {
            direction,
            amount,
            converted,
            snapshot,
        })
    }

    /// Returns a usable snapshot, fetching and caching a new one when the cached body is
    /// missing, unreadable as a quote, or not yesterday's publication.
    pub async fn current_snapshot_on(&self, today: NaiveDate) -> Result<RateSnapshot> {
        let Some(cached) = self.store.read()? else {
            info!("Cache file not found. Loading rate from API");
            return self.refresh().await;
        };

        let snapshot = match RateSnapshot::from_json(&cached) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %format!("{e:#}"), "Cached rate is unusable. Refreshing");
                return self.refresh().await;
            }
        };

        if snapshot.is_fresh_on(today) {
            debug!(fetched_at = %snapshot.fetched_at, "Using cached rate");
            Ok(snapshot)
        } else {
            info!(fetched_at = %snapshot.fetched_at, "Cache out of date. Updating");
            self.refresh().await
        }
    }

    async fn refresh(&self) -> Result<RateSnapshot> {
        let body = self.fetcher.fetch_latest().await?;
        // Parse before writing so a bad response never replaces the cache
        let snapshot =
            RateSnapshot::from_json(body.as_bytes()).context("Fetched rate is unusable")?;
        self.store.write(body.as_bytes())?;
        info!(fetched_at = %snapshot.fetched_at, rate = snapshot.rate, "Cached new rate");
        Ok(snapshot)
    }
}
