//! Error types for produksi-form

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

/// Machine registry integrity errors
///
/// These can only occur while the registry is being built; once a
/// registry exists, lookups never fail this way.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("No machine profiles defined")]
    Empty,

    #[error("Duplicate machine id: {0}")]
    DuplicateId(String),

    #[error("Barcode {barcode} is assigned to both {first} and {second}")]
    DuplicateBarcode {
        barcode: String,
        first: String,
        second: String,
    },

    #[error("Machine {0} has no materials")]
    NoMaterials(String),

    #[error("Machine {machine} has invalid tray weight: {kg_per_tray}")]
    InvalidTrayWeight { machine: String, kg_per_tray: f64 },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Machine registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Unknown machine: {0}")]
    UnknownMachine(String),

    #[error("Unknown barcode: {0}")]
    UnknownBarcode(String),

    #[error("Machine {machine} has no material named {material}")]
    UnknownMaterial { machine: String, material: String },

    #[error("Machine {machine} has no waste category named {waste}")]
    UnknownWaste { machine: String, waste: String },

    #[error("Form not found: {0}")]
    FormNotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, Error>;
