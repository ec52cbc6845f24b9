//! Exponential Moving Average indicator.
//!
//! Seeded with the first close, then EMA[i] = alpha*C[i] + (1-alpha)*EMA[i-1].
//! No warm-up gap: defined from the first index.

use crate::domain::error::TrendsimError;

pub fn calculate_ema(prices: &[f64], alpha: f64) -> Result<Vec<f64>, TrendsimError> {
    if prices.is_empty() {
        return Err(TrendsimError::InvalidInput {
            reason: "empty price series".into(),
        });
    }
    if alpha <= 0.0 || alpha > 1.0 {
        return Err(TrendsimError::NumericDegeneracy {
            reason: format!("EMA alpha {} outside (0, 1]", alpha),
        });
    }

    let mut values = Vec::with_capacity(prices.len());
    let mut ema = prices[0];
    values.push(ema);

    for &price in &prices[1..] {
        ema = alpha * price + (1.0 - alpha) * ema;
        values.push(ema);
    }

    Ok(values)
}

/// EMA with alpha derived from a period via the standard 2/(n+1) equivalence.
pub fn ema_from_period(prices: &[f64], period: usize) -> Result<Vec<f64>, TrendsimError> {
    if period == 0 {
        return Err(TrendsimError::NumericDegeneracy {
            reason: "EMA period must be at least 1".into(),
        });
    }
    calculate_ema(prices, 2.0 / (period as f64 + 1.0))
}
