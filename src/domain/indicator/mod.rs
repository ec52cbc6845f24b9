//! Trend indicator calculations.
//!
//! Each indicator returns a `Vec<f64>` aligned 1:1 by index with the input
//! prices. SMA zero-fills indices before its warm-up point; EMA and MACD are
//! defined from the first index. All calculations are pure functions of
//! their inputs.

pub mod sma;
pub mod ema;
pub mod macd;

pub use ema::{calculate_ema, ema_from_period};
pub use macd::{calculate_macd, MacdSeries};
pub use sma::calculate_sma;

use super::error::TrendsimError;

/// Parameters for the per-symbol indicator pass.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorConfig {
    pub sma_window: usize,
    /// Smoothing factor for the primary trend EMA. The default 0.1 is
    /// roughly a 19-day window, comparable to the default 20-day SMA.
    pub ema_alpha: f64,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        IndicatorConfig {
            sma_window: 20,
            ema_alpha: 0.1,
            macd_fast: macd::DEFAULT_FAST,
            macd_slow: macd::DEFAULT_SLOW,
            macd_signal: macd::DEFAULT_SIGNAL,
        }
    }
}

/// All indicator series for one symbol, aligned with the input prices.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSet {
    pub sma: Vec<f64>,
    pub ema: Vec<f64>,
    pub macd: MacdSeries,
}

pub fn compute_indicators(
    prices: &[f64],
    config: &IndicatorConfig,
) -> Result<IndicatorSet, TrendsimError> {
    Ok(IndicatorSet {
        sma: calculate_sma(prices, config.sma_window)?,
        ema: calculate_ema(prices, config.ema_alpha)?,
        macd: calculate_macd(
            prices,
            config.macd_fast,
            config.macd_slow,
            config.macd_signal,
        )?,
    })
}
