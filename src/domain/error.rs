//! Domain error types.

/// Top-level error type for trendsim.
#[derive(Debug, thiserror::Error)]
pub enum TrendsimError {
    #[error("data error: {reason}")]
    Data { reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("numeric degeneracy: {reason}")]
    NumericDegeneracy { reason: String },

    #[error("no data for {symbol}")]
    NoData { symbol: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&TrendsimError> for std::process::ExitCode {
    fn from(err: &TrendsimError) -> Self {
        let code: u8 = match err {
            TrendsimError::Io(_) => 1,
            TrendsimError::ConfigParse { .. }
            | TrendsimError::ConfigMissing { .. }
            | TrendsimError::ConfigInvalid { .. } => 2,
            TrendsimError::Data { .. } => 3,
            TrendsimError::InvalidInput { .. }
            | TrendsimError::NumericDegeneracy { .. }
            | TrendsimError::NoData { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
