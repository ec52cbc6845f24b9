//! Summary statistics for a simulation run.

use super::portfolio::TradeSide;
use super::simulation::SimulationResult;

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryMetrics {
    pub total_return: f64,
    pub max_drawdown: f64,
    pub buy_count: usize,
    pub sell_count: usize,
}

impl SummaryMetrics {
    pub fn compute(result: &SimulationResult) -> Self {
        let total_return = if result.initial_cash > 0.0 {
            (result.final_net_worth - result.initial_cash) / result.initial_cash
        } else {
            0.0
        };

        // Index 0 carries no recorded value; drawdown starts from day 1.
        let recorded = result
            .portfolio_values
            .get(1..)
            .unwrap_or(&[]);
        let max_drawdown = compute_drawdown(recorded);

        let buy_count = result
            .trades
            .iter()
            .filter(|t| t.side == TradeSide::Buy)
            .count();
        let sell_count = result.trades.len() - buy_count;

        SummaryMetrics {
            total_return,
            max_drawdown,
            buy_count,
            sell_count,
        }
    }
}

fn compute_drawdown(values: &[f64]) -> f64 {
    let mut peak = f64::NEG_INFINITY;
    let mut max_dd = 0.0_f64;

    for &value in values {
        if value > peak {
            peak = value;
        } else if peak > 0.0 {
            let dd = (peak - value) / peak;
            if dd > max_dd {
                max_dd = dd;
            }
        }
    }

    max_dd
}
