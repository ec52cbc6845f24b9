//! Report generation port trait.

use std::path::Path;

use crate::domain::error::TrendsimError;
use crate::domain::metrics::SummaryMetrics;
use crate::domain::simulation::SimulationResult;

/// Port for writing per-symbol trade logs and summaries. Trade events are
/// rendered in day order, one record per trade.
pub trait ReportPort {
    fn write(
        &self,
        result: &SimulationResult,
        metrics: &SummaryMetrics,
        output_path: &Path,
    ) -> Result<(), TrendsimError>;
}
