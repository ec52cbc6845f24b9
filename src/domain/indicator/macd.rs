//! MACD (Moving Average Convergence Divergence) indicator.
//!
//! MACD Line = EMA(fast) - EMA(slow)
//! Signal Line = EMA(signal) of MACD Line, seeded with the first MACD value
//! Histogram = MACD Line - Signal Line
//!
//! Default parameters: fast=12, slow=26, signal=9. Component EMAs use the
//! price-seeded recurrence with alpha = 2/(period+1), so every series is
//! defined from the first index.

use crate::domain::error::TrendsimError;

use super::ema::ema_from_period;

pub const DEFAULT_FAST: usize = 12;
pub const DEFAULT_SLOW: usize = 26;
pub const DEFAULT_SIGNAL: usize = 9;

#[derive(Debug, Clone, PartialEq)]
pub struct MacdSeries {
    pub line: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
}

impl MacdSeries {
    pub fn len(&self) -> usize {
        self.line.len()
    }

    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }
}

pub fn calculate_macd(
    prices: &[f64],
    fast: usize,
    slow: usize,
    signal_period: usize,
) -> Result<MacdSeries, TrendsimError> {
    if prices.is_empty() {
        return Err(TrendsimError::InvalidInput {
            reason: "empty price series".into(),
        });
    }
    if fast == 0 || slow == 0 || signal_period == 0 {
        return Err(TrendsimError::NumericDegeneracy {
            reason: format!(
                "MACD periods must be at least 1 (fast={}, slow={}, signal={})",
                fast, slow, signal_period
            ),
        });
    }

    let ema_fast = ema_from_period(prices, fast)?;
    let ema_slow = ema_from_period(prices, slow)?;

    let line: Vec<f64> = ema_fast
        .iter()
        .zip(&ema_slow)
        .map(|(f, s)| f - s)
        .collect();

    // Signal line is the same recurrence applied to the MACD line itself.
    let signal = ema_from_period(&line, signal_period)?;

    let histogram: Vec<f64> = line.iter().zip(&signal).map(|(l, s)| l - s).collect();

    Ok(MacdSeries {
        line,
        signal,
        histogram,
    })
}

pub fn calculate_macd_default(prices: &[f64]) -> Result<MacdSeries, TrendsimError> {
    calculate_macd(prices, DEFAULT_FAST, DEFAULT_SLOW, DEFAULT_SIGNAL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macd_line_is_ema_fast_minus_ema_slow() {
        let prices: Vec<f64> = (1..=20).map(|i| 10.0 * i as f64).collect();
        let macd = calculate_macd(&prices, 3, 5, 2).unwrap();

        let ema_fast = ema_from_period(&prices, 3).unwrap();
        let ema_slow = ema_from_period(&prices, 5).unwrap();

        for i in 0..prices.len() {
            let expected = ema_fast[i] - ema_slow[i];
            assert!(
                (macd.line[i] - expected).abs() < f64::EPSILON,
                "MACD line mismatch at index {}",
                i
            );
        }
    }

    #[test]
    fn macd_signal_seeded_with_first_line_value() {
        let prices: Vec<f64> = (1..=20).map(|i| 100.0 + (i as f64).sin() * 10.0).collect();
        let macd = calculate_macd_default(&prices).unwrap();

        assert!((macd.signal[0] - macd.line[0]).abs() < f64::EPSILON);
    }

    #[test]
    fn macd_histogram_equals_line_minus_signal() {
        let prices: Vec<f64> = (0..40).map(|i| 100.0 + i as f64).collect();
        let macd = calculate_macd_default(&prices).unwrap();

        for i in 0..prices.len() {
            assert!((macd.histogram[i] - (macd.line[i] - macd.signal[i])).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn macd_constant_series_is_all_zero() {
        let prices = vec![10.0; 30];
        let macd = calculate_macd_default(&prices).unwrap();

        for i in 0..prices.len() {
            assert!((macd.line[i]).abs() < 1e-12);
            assert!((macd.signal[i]).abs() < 1e-12);
            assert!((macd.histogram[i]).abs() < 1e-12);
        }
    }

    #[test]
    fn macd_series_length_matches_input() {
        let prices: Vec<f64> = (0..13).map(|i| 50.0 + i as f64).collect();
        let macd = calculate_macd_default(&prices).unwrap();

        assert_eq!(macd.len(), 13);
        assert_eq!(macd.signal.len(), 13);
        assert_eq!(macd.histogram.len(), 13);
    }

    #[test]
    fn macd_empty_prices_fails() {
        assert!(matches!(
            calculate_macd_default(&[]),
            Err(TrendsimError::InvalidInput { .. })
        ));
    }

    #[test]
    fn macd_zero_period_fails() {
        let prices = [100.0, 101.0, 102.0];

        assert!(calculate_macd(&prices, 0, 26, 9).is_err());
        assert!(calculate_macd(&prices, 12, 0, 9).is_err());
        assert!(calculate_macd(&prices, 12, 26, 0).is_err());
    }

    #[test]
    fn macd_default_constants() {
        assert_eq!(DEFAULT_FAST, 12);
        assert_eq!(DEFAULT_SLOW, 26);
        assert_eq!(DEFAULT_SIGNAL, 9);
    }
}
