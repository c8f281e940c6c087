use thiserror::Error;

/// Errors from the accessory surface
#[derive(Error, Debug)]
pub enum AccessoryError {
    /// No factory registered under the requested accessory name
    #[error("No accessory registered under \"{0}\"")]
    NotRegistered(String),

    /// The raw accessory config could not be deserialized
    #[error("Invalid accessory config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

/// Result type for accessory operations
pub type Result<T> = std::result::Result<T, AccessoryError>;
