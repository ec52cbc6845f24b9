//! Price data access port trait.

use crate::domain::error::TrendsimError;
use crate::domain::series::PriceSeries;
use chrono::NaiveDate;

pub trait DataPort {
    fn fetch_series(&self, symbol: &str) -> Result<PriceSeries, TrendsimError>;

    fn list_symbols(&self) -> Result<Vec<String>, TrendsimError>;

    fn data_range(
        &self,
        symbol: &str,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, TrendsimError>;
}
