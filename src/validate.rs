use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ValidationError;

/// Checks that `currency` looks like an ISO 4217 code. `entry` names the
/// registry entry for the error message.
pub fn check_currency(entry: &str, currency: &str) -> Result<(), ValidationError> {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"^[A-Z]{3}$").unwrap();
    }
    if RE.is_match(currency) {
        Ok(())
    } else {
        Err(ValidationError::BadCurrency {
            entry: entry.to_string(),
            currency: currency.to_string(),
        })
    }
}
