//! Plain-text trade log report adapter.
//!
//! One line per trade in day order with the event fields, followed by a
//! summary block. Rendering is a pure function; file I/O sits at the edge.

use std::fs;
use std::path::Path;

use crate::domain::error::TrendsimError;
use crate::domain::metrics::SummaryMetrics;
use crate::domain::simulation::SimulationResult;
use crate::ports::report_port::ReportPort;

pub struct TextReportAdapter;

impl TextReportAdapter {
    pub fn new() -> Self {
        TextReportAdapter
    }

    pub fn render(result: &SimulationResult, metrics: &SummaryMetrics) -> String {
        let mut out = String::new();

        out.push_str(&format!("Trade log for {}\n", result.symbol));

        if result.trades.is_empty() {
            out.push_str("  (no trades)\n");
        }
        for trade in &result.trades {
            out.push_str(&format!(
                "  day {:>4}  {}  {:<4}  ${:>12.2}  {:>+12.4} shares @ {:.2}\n",
                trade.day_index,
                trade.date,
                trade.side,
                trade.amount,
                trade.shares_delta,
                trade.price,
            ));
        }

        out.push('\n');
        out.push_str(&format!(
            "Initial cash:     ${:.2}\n",
            result.initial_cash
        ));
        out.push_str(&format!(
            "Final net worth:  ${:.2}\n",
            result.final_net_worth
        ));
        out.push_str(&format!(
            "Total return:     {:.2}%\n",
            metrics.total_return * 100.0
        ));
        out.push_str(&format!(
            "Max drawdown:     -{:.1}%\n",
            metrics.max_drawdown * 100.0
        ));
        out.push_str(&format!(
            "Trades:           {} buys, {} sells\n",
            metrics.buy_count, metrics.sell_count
        ));

        out
    }
}

impl Default for TextReportAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportPort for TextReportAdapter {
    fn write(
        &self,
        result: &SimulationResult,
        metrics: &SummaryMetrics,
        output_path: &Path,
    ) -> Result<(), TrendsimError> {
        let content = Self::render(result, metrics);
        fs::write(output_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::portfolio::{TradeEvent, TradeSide};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample_result() -> SimulationResult {
        SimulationResult {
            symbol: "AAPL".into(),
            initial_cash: 10_000.0,
            trades: vec![
                TradeEvent {
                    day_index: 17,
                    date: NaiveDate::from_ymd_opt(2024, 1, 18).unwrap(),
                    symbol: "AAPL".into(),
                    side: TradeSide::Buy,
                    amount: 2000.0,
                    shares_delta: 13.245,
                    price: 151.0,
                },
                TradeEvent {
                    day_index: 42,
                    date: NaiveDate::from_ymd_opt(2024, 2, 12).unwrap(),
                    symbol: "AAPL".into(),
                    side: TradeSide::Sell,
                    amount: 400.0,
                    shares_delta: -2.649,
                    price: 151.0,
                },
            ],
            portfolio_values: vec![0.0, 10_000.0, 10_200.0],
            final_net_worth: 10_234.56,
        }
    }

    #[test]
    fn render_includes_all_trade_fields() {
        let result = sample_result();
        let metrics = SummaryMetrics::compute(&result);
        let text = TextReportAdapter::render(&result, &metrics);

        assert!(text.contains("Trade log for AAPL"));
        assert!(text.contains("day   17"));
        assert!(text.contains("2024-01-18"));
        assert!(text.contains("BUY"));
        assert!(text.contains("2000.00"));
        assert!(text.contains("+13.2450 shares @ 151.00"));
        assert!(text.contains("SELL"));
        assert!(text.contains("-2.6490 shares"));
    }

    #[test]
    fn render_trades_appear_in_day_order() {
        let result = sample_result();
        let metrics = SummaryMetrics::compute(&result);
        let text = TextReportAdapter::render(&result, &metrics);

        let buy_pos = text.find("BUY").unwrap();
        let sell_pos = text.find("SELL").unwrap();
        assert!(buy_pos < sell_pos);
    }

    #[test]
    fn render_summary_block() {
        let result = sample_result();
        let metrics = SummaryMetrics::compute(&result);
        let text = TextReportAdapter::render(&result, &metrics);

        assert!(text.contains("Final net worth:  $10234.56"));
        assert!(text.contains("Total return:     2.35%"));
        assert!(text.contains("1 buys, 1 sells"));
    }

    #[test]
    fn render_no_trades_placeholder() {
        let mut result = sample_result();
        result.trades.clear();
        let metrics = SummaryMetrics::compute(&result);
        let text = TextReportAdapter::render(&result, &metrics);

        assert!(text.contains("(no trades)"));
    }

    #[test]
    fn write_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("AAPL.txt");

        let result = sample_result();
        let metrics = SummaryMetrics::compute(&result);
        TextReportAdapter::new()
            .write(&result, &metrics, &path)
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Trade log for AAPL"));
    }
}
