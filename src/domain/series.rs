//! Daily price series representation.

use chrono::NaiveDate;

use super::error::TrendsimError;

/// One trading day's close.
#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// Chronologically ordered daily closes for one symbol. Immutable once
/// loaded; the indicator engine and simulator only borrow it.
#[derive(Debug, Clone)]
pub struct PriceSeries {
    pub symbol: String,
    pub points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new(symbol: String, points: Vec<PricePoint>) -> Self {
        Self { symbol, points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    /// Index where a trailing window of `window` days starts. A window
    /// longer than the series clamps to the full series.
    pub fn tail_start(&self, window: usize) -> usize {
        self.points.len().saturating_sub(window)
    }

    /// Reject series the pipeline cannot price: empty, or containing a
    /// non-positive close (the simulator divides by the close when sizing).
    pub fn validate(&self) -> Result<(), TrendsimError> {
        if self.points.is_empty() {
            return Err(TrendsimError::InvalidInput {
                reason: format!("{}: empty price series", self.symbol),
            });
        }
        for point in &self.points {
            if point.close <= 0.0 {
                return Err(TrendsimError::InvalidInput {
                    reason: format!(
                        "{}: non-positive close {} on {}",
                        self.symbol, point.close, point.date
                    ),
                });
            }
        }
        Ok(())
    }
}
