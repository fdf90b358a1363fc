use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Invalid range: min={min}, max={max}, step={step}")]
    InvalidRange { min: f64, max: f64, step: f64 },

    #[error("Unknown field: {name}")]
    UnknownField { name: String },

    #[error("Invalid share URL '{url}': {reason}")]
    InvalidShareUrl { url: String, reason: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
