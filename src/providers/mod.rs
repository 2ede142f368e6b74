pub mod currencyapi;

pub use currencyapi::CurrencyApiProvider;
