//! Domain error types.

/// Top-level error type for smacross.
#[derive(Debug, thiserror::Error)]
pub enum SmacrossError {
    #[error("dataset is missing required columns: {missing}")]
    Schema { missing: String },

    #[error("no data in price range {min}-{max}")]
    EmptyRange { min: f64, max: f64 },

    #[error("metric undefined: {reason}")]
    UndefinedMetric { reason: String },

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

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&SmacrossError> for std::process::ExitCode {
    fn from(err: &SmacrossError) -> Self {
        let code: u8 = match err {
            SmacrossError::Io(_) => 1,
            SmacrossError::ConfigParse { .. }
            | SmacrossError::ConfigMissing { .. }
            | SmacrossError::ConfigInvalid { .. } => 2,
            SmacrossError::Schema { .. } | SmacrossError::Data { .. } => 3,
            SmacrossError::EmptyRange { .. } => 4,
            SmacrossError::UndefinedMetric { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
