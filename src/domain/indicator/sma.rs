//! Simple Moving Average indicator.
//!
//! Output is 0.0 for the first (window - 1) indices, then the full
//! fixed-width mean of the trailing `window` closes. A window longer than
//! the series yields the all-zero series rather than an error.

use crate::domain::error::TrendsimError;

pub fn calculate_sma(prices: &[f64], window: usize) -> Result<Vec<f64>, TrendsimError> {
    if prices.is_empty() {
        return Err(TrendsimError::InvalidInput {
            reason: "empty price series".into(),
        });
    }
    if window == 0 {
        return Err(TrendsimError::NumericDegeneracy {
            reason: "SMA window must be at least 1".into(),
        });
    }

    let mut values = vec![0.0; prices.len()];

    for i in (window - 1)..prices.len() {
        let sum: f64 = prices[i + 1 - window..=i].iter().sum();
        values[i] = sum / window as f64;
    }

    Ok(values)
}
