#![allow(dead_code)]

use chrono::NaiveDate;
use std::collections::HashMap;
use trendsim::domain::error::TrendsimError;
use trendsim::domain::series::{PricePoint, PriceSeries};
use trendsim::ports::data_port::DataPort;

pub struct MockDataPort {
    pub data: HashMap<String, PriceSeries>,
    pub errors: HashMap<String, String>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_series(mut self, series: PriceSeries) -> Self {
        self.data.insert(series.symbol.clone(), series);
        self
    }

    pub fn with_error(mut self, symbol: &str, reason: &str) -> Self {
        self.errors.insert(symbol.to_string(), reason.to_string());
        self
    }
}

impl DataPort for MockDataPort {
    fn fetch_series(&self, symbol: &str) -> Result<PriceSeries, TrendsimError> {
        if let Some(reason) = self.errors.get(symbol) {
            return Err(TrendsimError::Data {
                reason: reason.clone(),
            });
        }
        self.data
            .get(symbol)
            .cloned()
            .ok_or_else(|| TrendsimError::NoData {
                symbol: symbol.to_string(),
            })
    }

    fn list_symbols(&self) -> Result<Vec<String>, TrendsimError> {
        let mut symbols: Vec<String> = self.data.keys().cloned().collect();
        symbols.sort();
        Ok(symbols)
    }

    fn data_range(
        &self,
        symbol: &str,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, TrendsimError> {
        if let Some(reason) = self.errors.get(symbol) {
            return Err(TrendsimError::Data {
                reason: reason.clone(),
            });
        }
        match self.data.get(symbol) {
            Some(series) if !series.is_empty() => Ok(Some((
                series.points[0].date,
                series.points[series.len() - 1].date,
                series.len(),
            ))),
            _ => Ok(None),
        }
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn make_series(symbol: &str, closes: &[f64]) -> PriceSeries {
    let start = date(2024, 1, 1);
    let points = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PricePoint {
            date: start + chrono::Duration::days(i as i64),
            close,
        })
        .collect();
    PriceSeries::new(symbol.to_string(), points)
}

/// Linear decline then a sharp jump up: produces exactly one bullish MACD
/// crossover, on the jump day, with price above both trend lines.
pub fn step_up_closes() -> Vec<f64> {
    let mut closes: Vec<f64> = (0..20).map(|i| 120.0 - i as f64).collect();
    closes.extend(std::iter::repeat(160.0).take(6));
    closes
}

/// Linear rise then a crash: one bearish crossover on the crash day, with
/// price below both trend lines.
pub fn crash_closes() -> Vec<f64> {
    let mut closes: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
    closes.extend(std::iter::repeat(60.0).take(6));
    closes
}
