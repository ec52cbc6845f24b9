//! Configuration validation.
//!
//! Validates all config fields before the pipeline touches data files.

use crate::domain::error::TrendsimError;
use crate::ports::config_port::ConfigPort;

pub fn validate_data_config(config: &dyn ConfigPort) -> Result<(), TrendsimError> {
    match config.get_string("data", "path") {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(TrendsimError::ConfigMissing {
            section: "data".to_string(),
            key: "path".to_string(),
        }),
    }
}

pub fn validate_simulation_config(config: &dyn ConfigPort) -> Result<(), TrendsimError> {
    validate_symbols(config)?;
    validate_initial_cash(config)?;
    validate_window(config)?;
    validate_fraction(config, "buy_fraction")?;
    validate_fraction(config, "sell_fraction")?;
    Ok(())
}

pub fn validate_indicator_config(config: &dyn ConfigPort) -> Result<(), TrendsimError> {
    validate_period(config, "sma_window")?;
    validate_ema_alpha(config)?;
    validate_period(config, "macd_fast")?;
    validate_period(config, "macd_slow")?;
    validate_period(config, "macd_signal")?;
    Ok(())
}

pub fn validate_chart_config(config: &dyn ConfigPort) -> Result<(), TrendsimError> {
    let value = config.get_int("chart", "window", 1000);
    if value < 1 {
        return Err(TrendsimError::ConfigInvalid {
            section: "chart".to_string(),
            key: "window".to_string(),
            reason: "chart window must be at least 1".to_string(),
        });
    }
    Ok(())
}

fn validate_symbols(config: &dyn ConfigPort) -> Result<(), TrendsimError> {
    match config.get_string("simulation", "symbols") {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(TrendsimError::ConfigMissing {
            section: "simulation".to_string(),
            key: "symbols".to_string(),
        }),
    }
}

fn validate_initial_cash(config: &dyn ConfigPort) -> Result<(), TrendsimError> {
    let value = config.get_double("simulation", "initial_cash", 10_000.0);
    if value <= 0.0 {
        return Err(TrendsimError::ConfigInvalid {
            section: "simulation".to_string(),
            key: "initial_cash".to_string(),
            reason: "initial_cash must be positive".to_string(),
        });
    }
    Ok(())
}

fn validate_window(config: &dyn ConfigPort) -> Result<(), TrendsimError> {
    let value = config.get_int("simulation", "window", 365);
    if value < 2 {
        return Err(TrendsimError::ConfigInvalid {
            section: "simulation".to_string(),
            key: "window".to_string(),
            reason: "window must be at least 2 days".to_string(),
        });
    }
    Ok(())
}

fn validate_fraction(config: &dyn ConfigPort, key: &str) -> Result<(), TrendsimError> {
    let value = config.get_double("simulation", key, 0.2);
    if value <= 0.0 || value > 1.0 {
        return Err(TrendsimError::ConfigInvalid {
            section: "simulation".to_string(),
            key: key.to_string(),
            reason: format!("{} must be between 0 and 1", key),
        });
    }
    Ok(())
}

fn validate_period(config: &dyn ConfigPort, key: &str) -> Result<(), TrendsimError> {
    let value = config.get_int("indicators", key, 1);
    if value < 1 {
        return Err(TrendsimError::ConfigInvalid {
            section: "indicators".to_string(),
            key: key.to_string(),
            reason: format!("{} must be at least 1", key),
        });
    }
    Ok(())
}

fn validate_ema_alpha(config: &dyn ConfigPort) -> Result<(), TrendsimError> {
    let value = config.get_double("indicators", "ema_alpha", 0.1);
    if value <= 0.0 || value > 1.0 {
        return Err(TrendsimError::ConfigInvalid {
            section: "indicators".to_string(),
            key: "ema_alpha".to_string(),
            reason: "ema_alpha must be between 0 and 1".to_string(),
        });
    }
    Ok(())
}
