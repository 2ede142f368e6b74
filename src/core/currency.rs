//! Currency pair, conversion direction and rate source abstractions

use anyhow::Result;
use async_trait::async_trait;
use std::fmt::Display;

/// Base currency of every fetched rate.
pub const BASE_CURRENCY: Currency = Currency::Gbp;
/// Quote currency; the cached rate is EUR per one GBP.
pub const QUOTE_CURRENCY: Currency = Currency::Eur;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    Gbp,
    Eur,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Gbp => "GBP",
            Currency::Eur => "EUR",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Gbp => "£",
            Currency::Eur => "€",
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// GBP amount expressed in EUR
    PoundsToEuros,
    /// EUR amount expressed in GBP
    EurosToPounds,
}

impl Direction {
    pub fn from_currency(&self) -> Currency {
        match self {
            Direction::PoundsToEuros => Currency::Gbp,
            Direction::EurosToPounds => Currency::Eur,
        }
    }

    pub fn to_currency(&self) -> Currency {
        match self {
            Direction::PoundsToEuros => Currency::Eur,
            Direction::EurosToPounds => Currency::Gbp,
        }
    }

    /// Applies a GBP→EUR `rate` to `amount` in this direction.
    pub fn apply(&self, amount: f64, rate: f64) -> f64 {
        match self {
            Direction::PoundsToEuros => amount * rate,
            Direction::EurosToPounds => amount / rate,
        }
    }
}

#[async_trait]
pub trait RateFetcher: Send + Sync {
    /// Returns the raw body of the latest GBP/EUR quote.
    async fn fetch_latest(&self) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_pounds_to_euros() {
        let result = Direction::PoundsToEuros.apply(10.0, 1.17);
        assert!((result - 11.7).abs() < EPSILON);
    }

    #[test]
    fn test_euros_to_pounds() {
        let result = Direction::EurosToPounds.apply(11.7, 1.17);
        assert!((result - 10.0).abs() < EPSILON);
    }

    #[test]
    fn test_round_trip_returns_original_amount() {
        for rate in [0.85, 1.0, 1.1734, 2.5] {
            for amount in [0.01, 1.0, 42.5, 1_000_000.0] {
                let euros = Direction::PoundsToEuros.apply(amount, rate);
                let pounds = Direction::EurosToPounds.apply(euros, rate);
                assert!(
                    ((pounds - amount) / amount).abs() < EPSILON,
                    "round trip of {amount} at {rate} gave {pounds}"
                );
            }
        }
    }

    #[test]
    fn test_direction_currencies() {
        assert_eq!(Direction::PoundsToEuros.from_currency().symbol(), "£");
        assert_eq!(Direction::PoundsToEuros.to_currency().symbol(), "€");
        assert_eq!(Direction::EurosToPounds.from_currency(), QUOTE_CURRENCY);
        assert_eq!(Direction::EurosToPounds.to_currency(), BASE_CURRENCY);
        assert_eq!(Currency::Eur.to_string(), "EUR");
    }
}
