//! Cached rate snapshot and its daily freshness rule

use crate::core::currency::QUOTE_CURRENCY;
use anyhow::{Context, Result, anyhow};
use chrono::{Datelike, Days, Local, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, warn};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Deserialize)]
struct LatestResponse {
    meta: LatestMeta,
    data: HashMap<String, LatestQuote>,
}

#[derive(Debug, Deserialize)]
struct LatestMeta {
    last_updated_at: String,
}

#[derive(Debug, Deserialize)]
struct LatestQuote {
    code: String,
    value: f64,
}

/// The last published GBP/EUR quote.
#[derive(Debug, Clone, PartialEq)]
pub struct RateSnapshot {
    /// Publication time reported by the service, not the local fetch time.
    pub fetched_at: String,
    /// EUR per one GBP.
    pub rate: f64,
    pub currency_code: String,
}

impl RateSnapshot {
    /// Parses a `v3/latest` response body. Fails unless it carries a positive, finite EUR rate.
    pub fn from_json(body: &[u8]) -> Result<Self> {
        let response: LatestResponse =
            serde_json::from_slice(body).context("Failed to parse rate response")?;

        let quote = response
            .data
            .get(QUOTE_CURRENCY.code())
            .ok_or_else(|| anyhow!("No {} quote in rate response", QUOTE_CURRENCY))?;

        if !quote.value.is_finite() || quote.value <= 0.0 {
            anyhow::bail!("Unusable {} rate: {}", QUOTE_CURRENCY, quote.value);
        }

        Ok(Self {
            fetched_at: response.meta.last_updated_at,
            rate: quote.value,
            currency_code: quote.code.clone(),
        })
    }

    pub fn is_fresh_on(&self, today: NaiveDate) -> bool {
        is_fresh_on(&self.fetched_at, today)
    }
}

/// Freshness against the local calendar date.
pub fn is_fresh(fetched_at: &str) -> bool {
    is_fresh_on(fetched_at, Local::now().date_naive())
}

/// A snapshot is fresh when it was published yesterday: the service stamps one update per
/// day at day's end, so yesterday is always the newest publication available today.
///
/// Only month and day are compared. An unparsable timestamp is never fresh.
pub fn is_fresh_on(fetched_at: &str, today: NaiveDate) -> bool {
    let normalized = fetched_at.replace('T', " ").replace('Z', "");
    let published = match NaiveDateTime::parse_from_str(&normalized, TIMESTAMP_FORMAT) {
        Ok(ts) => ts.date(),
        Err(e) => {
            warn!(fetched_at, error = %e, "Could not parse snapshot timestamp");
            return false;
        }
    };

    let Some(yesterday) = today.checked_sub_days(Days::new(1)) else {
        return false;
    };

    let fresh = (published.month(), published.day()) == (yesterday.month(), yesterday.day());
    debug!(%published, %yesterday, fresh, "Evaluated snapshot freshness");
    fresh
}
