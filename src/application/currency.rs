//! # Currency Conversion
//!
//! Converts an amount between two currency codes using a rates table
//! anchored at the source currency. The table comes from a [`RateProvider`]
//! collaborator; when both codes are equal no fetch happens at all.

use crate::domain::error::BotError;
use crate::domain::traits::RateProvider;
use crate::strings::messages;

/// Converts `amount` from `from` to `to`.
///
/// The fetched table maps currency codes to rates relative to `from`; the
/// anchor itself is `1.0` by the source's convention, so a table that omits
/// it is still usable. A missing target code is a distinct error from an
/// unreachable or malformed source.
pub async fn convert(
    rates: &dyn RateProvider,
    amount: f64,
    from: &str,
    to: &str,
) -> Result<f64, BotError> {
    if amount <= 0.0 {
        return Err(BotError::validation(messages::INVALID_AMOUNT));
    }
    if from == to {
        return Ok(amount);
    }

    let table = rates.rates(from).await?;
    let rate_from = table
        .get(from)
        .copied()
        // Anchor convention: rate[from] == 1.0.
        .unwrap_or(1.0);
    let rate_to = *table
        .get(to)
        .ok_or_else(|| BotError::UnknownCurrency(to.to_string()))?;

    Ok(amount * (rate_to / rate_from))
}

/// Parses a user-supplied amount, accepting a comma as decimal separator.
pub fn parse_amount(raw: &str) -> Result<f64, BotError> {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| BotError::validation(messages::INVALID_AMOUNT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Rate source stub that counts fetches.
    struct FixedRates {
        table: HashMap<String, f64>,
        calls: AtomicUsize,
    }

    impl FixedRates {
        fn new(entries: &[(&str, f64)]) -> Self {
            Self {
                table: entries
                    .iter()
                    .map(|(code, rate)| (code.to_string(), *rate))
                    .collect(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl RateProvider for FixedRates {
        async fn rates(&self, _base: &str) -> Result<HashMap<String, f64>, BotError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.table.clone())
        }
    }

    struct UnreachableRates;

    #[async_trait]
    impl RateProvider for UnreachableRates {
        async fn rates(&self, _base: &str) -> Result<HashMap<String, f64>, BotError> {
            Err(BotError::RateSource("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_same_currency_makes_no_external_call() {
        let rates = FixedRates::new(&[("USD", 1.0)]);
        let converted = convert(&rates, 10.0, "USD", "USD").await.unwrap();
        assert_eq!(converted, 10.0);
        assert_eq!(rates.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_conversion_uses_anchor_relative_rates() {
        let rates = FixedRates::new(&[("USD", 1.0), ("EUR", 0.9)]);
        let converted = convert(&rates, 10.0, "USD", "EUR").await.unwrap();
        assert!((converted - 9.0).abs() < 1e-9);
        assert_eq!(rates.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_anchor_missing_from_table_defaults_to_one() {
        // Some sources omit the base currency from the returned table.
        let rates = FixedRates::new(&[("EUR", 0.9)]);
        let converted = convert(&rates, 10.0, "USD", "EUR").await.unwrap();
        assert!((converted - 9.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_unknown_target_code() {
        let rates = FixedRates::new(&[("USD", 1.0)]);
        let err = convert(&rates, 10.0, "USD", "XXX").await.unwrap_err();
        assert!(matches!(err, BotError::UnknownCurrency(code) if code == "XXX"));
    }

    #[tokio::test]
    async fn test_unreachable_source_is_a_rate_source_error() {
        let err = convert(&UnreachableRates, 10.0, "USD", "EUR")
            .await
            .unwrap_err();
        assert!(matches!(err, BotError::RateSource(_)));
    }

    #[tokio::test]
    async fn test_non_positive_amount_is_rejected() {
        let rates = FixedRates::new(&[("USD", 1.0), ("EUR", 0.9)]);
        let err = convert(&rates, 0.0, "USD", "EUR").await.unwrap_err();
        assert!(matches!(err, BotError::Validation(_)));
        assert_eq!(rates.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_parse_amount_accepts_comma_decimals() {
        assert_eq!(parse_amount("12,5").unwrap(), 12.5);
        assert_eq!(parse_amount("100").unwrap(), 100.0);
        assert!(parse_amount("lots").is_err());
    }
}
