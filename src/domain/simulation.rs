//! Day-by-day trading simulation over a trailing window.
//!
//! The decision rule is recomputed independently each day from the two most
//! recent days' values; the only state carried across days is the portfolio
//! itself. Buy is checked strictly before sell, so a day produces at most
//! one trade.

use chrono::NaiveDate;

use super::error::TrendsimError;
use super::portfolio::{PortfolioState, TradeEvent, TradeSide};

/// Simulation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub initial_cash: f64,
    pub buy_fraction: f64,
    pub sell_fraction: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            initial_cash: 10_000.0,
            buy_fraction: 0.2,
            sell_fraction: 0.2,
        }
    }
}

/// Everything the decision rule reads for one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DaySignals {
    pub price: f64,
    pub macd: f64,
    pub signal: f64,
    pub ema: f64,
    pub sma: f64,
}

/// Outcome of the per-day decision rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Hold,
    Buy { fraction: f64 },
    Sell { fraction: f64 },
}

/// Aligned trailing-window slices for one symbol. `dates` carries the
/// absolute calendar dates so trade events can be labeled; everything else
/// is indexed relative to the window start.
#[derive(Debug, Clone, Copy)]
pub struct SimulationInputs<'a> {
    pub symbol: &'a str,
    pub dates: &'a [NaiveDate],
    pub prices: &'a [f64],
    pub macd_line: &'a [f64],
    pub signal_line: &'a [f64],
    pub ema: &'a [f64],
    pub sma: &'a [f64],
}

impl SimulationInputs<'_> {
    fn signals_at(&self, i: usize) -> DaySignals {
        DaySignals {
            price: self.prices[i],
            macd: self.macd_line[i],
            signal: self.signal_line[i],
            ema: self.ema[i],
            sma: self.sma[i],
        }
    }

    fn validate(&self) -> Result<(), TrendsimError> {
        if self.prices.is_empty() {
            return Err(TrendsimError::InvalidInput {
                reason: format!("{}: empty simulation window", self.symbol),
            });
        }
        let len = self.prices.len();
        if self.dates.len() != len
            || self.macd_line.len() != len
            || self.signal_line.len() != len
            || self.ema.len() != len
            || self.sma.len() != len
        {
            return Err(TrendsimError::InvalidInput {
                reason: format!("{}: misaligned simulation inputs", self.symbol),
            });
        }
        Ok(())
    }
}

/// Result of one simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub symbol: String,
    pub initial_cash: f64,
    pub trades: Vec<TradeEvent>,
    /// One value per simulated day. Index 0 stays 0.0: the decision loop
    /// starts on the second day and the first gets no recorded value.
    pub portfolio_values: Vec<f64>,
    pub final_net_worth: f64,
}

/// Decide the day's action from the previous and current signals. A bullish
/// MACD crossover confirmed by price above both trend lines buys; a bearish
/// crossover confirmed below both sells. Buy wins if both are claimed.
pub fn decide(prev: &DaySignals, curr: &DaySignals, config: &SimulationConfig) -> Action {
    if prev.macd < prev.signal
        && curr.macd > curr.signal
        && curr.price > curr.ema
        && curr.price > curr.sma
    {
        Action::Buy {
            fraction: config.buy_fraction,
        }
    } else if prev.macd > prev.signal
        && curr.macd < curr.signal
        && curr.price < curr.ema
        && curr.price < curr.sma
    {
        Action::Sell {
            fraction: config.sell_fraction,
        }
    } else {
        Action::Hold
    }
}

/// Replay the decision rule over the window, mutating one portfolio from
/// the configured starting cash. Final net worth is recomputed from the
/// terminal state and the last close rather than read off the value series.
pub fn run_simulation(
    inputs: &SimulationInputs<'_>,
    config: &SimulationConfig,
) -> Result<SimulationResult, TrendsimError> {
    inputs.validate()?;

    let len = inputs.prices.len();
    let mut state = PortfolioState::new(config.initial_cash);
    let mut trades = Vec::new();
    let mut portfolio_values = vec![0.0; len];

    for t in 1..len {
        let prev = inputs.signals_at(t - 1);
        let curr = inputs.signals_at(t);

        match decide(&prev, &curr, config) {
            Action::Buy { fraction } => {
                let fill = state.apply_buy(fraction, curr.price);
                trades.push(TradeEvent {
                    day_index: t,
                    date: inputs.dates[t],
                    symbol: inputs.symbol.to_string(),
                    side: TradeSide::Buy,
                    amount: fill.amount,
                    shares_delta: fill.shares_delta,
                    price: curr.price,
                });
            }
            Action::Sell { fraction } => {
                let fill = state.apply_sell(fraction, curr.price);
                trades.push(TradeEvent {
                    day_index: t,
                    date: inputs.dates[t],
                    symbol: inputs.symbol.to_string(),
                    side: TradeSide::Sell,
                    amount: fill.amount,
                    shares_delta: fill.shares_delta,
                    price: curr.price,
                });
            }
            Action::Hold => {}
        }

        portfolio_values[t] = state.value(curr.price);
    }

    let final_net_worth = state.cash + state.shares * inputs.prices[len - 1];

    Ok(SimulationResult {
        symbol: inputs.symbol.to_string(),
        initial_cash: config.initial_cash,
        trades,
        portfolio_values,
        final_net_worth,
    })
}
