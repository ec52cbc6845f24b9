//! CSV file data adapter.
//!
//! Reads one `{SYMBOL}.csv` per symbol from a base directory, columns
//! `date,close` with dates formatted `%Y-%m-%d`. Rows are sorted by date
//! on load regardless of file order.

use crate::domain::error::TrendsimError;
use crate::domain::series::{PricePoint, PriceSeries};
use crate::ports::data_port::DataPort;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

pub struct CsvAdapter {
    base_path: PathBuf,
}

impl CsvAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, symbol: &str) -> PathBuf {
        self.base_path.join(format!("{}.csv", symbol))
    }
}

impl DataPort for CsvAdapter {
    fn fetch_series(&self, symbol: &str) -> Result<PriceSeries, TrendsimError> {
        let path = self.csv_path(symbol);
        let content = fs::read_to_string(&path).map_err(|e| TrendsimError::Data {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut points = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| TrendsimError::Data {
                reason: format!("CSV parse error: {}", e),
            })?;

            let date_str = record.get(0).ok_or_else(|| TrendsimError::Data {
                reason: "missing date column".into(),
            })?;
            let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
                TrendsimError::Data {
                    reason: format!("invalid date format: {}", e),
                }
            })?;

            let close: f64 = record
                .get(1)
                .ok_or_else(|| TrendsimError::Data {
                    reason: "missing close column".into(),
                })?
                .parse()
                .map_err(|e| TrendsimError::Data {
                    reason: format!("invalid close value: {}", e),
                })?;

            points.push(PricePoint { date, close });
        }

        points.sort_by_key(|p| p.date);
        Ok(PriceSeries::new(symbol.to_string(), points))
    }

    fn list_symbols(&self) -> Result<Vec<String>, TrendsimError> {
        let entries = fs::read_dir(&self.base_path).map_err(|e| TrendsimError::Data {
            reason: format!(
                "failed to read directory {}: {}",
                self.base_path.display(),
                e
            ),
        })?;

        let mut symbols = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|e| TrendsimError::Data {
                reason: format!("directory entry error: {}", e),
            })?;

            let name = entry.file_name();
            let name_str = name.to_string_lossy();

            if let Some(symbol) = name_str.strip_suffix(".csv") {
                symbols.push(symbol.to_string());
            }
        }

        symbols.sort();
        Ok(symbols)
    }

    fn data_range(
        &self,
        symbol: &str,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, TrendsimError> {
        if !self.csv_path(symbol).exists() {
            return Ok(None);
        }
        let series = self.fetch_series(symbol)?;
        match (series.points.first(), series.points.last()) {
            (Some(first), Some(last)) => Ok(Some((first.date, last.date, series.len()))),
            _ => Ok(None),
        }
    }
}
