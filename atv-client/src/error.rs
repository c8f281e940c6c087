use thiserror::Error;

/// Errors from parsing a credential string
///
/// The credential blob is produced by an external pairing flow; beyond the
/// leading device identifier its contents are opaque to this crate.
// No Eq here: hex::FromHexError in InvalidHex is only PartialEq.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CredentialsError {
    /// The string did not have the expected number of colon-separated fields
    #[error("Expected 5 credential fields, found {0}")]
    FieldCount(usize),

    /// The device identifier field was empty
    #[error("Credential string has an empty device identifier")]
    EmptyIdentifier,

    /// One of the opaque fields was not valid hex
    #[error("Credential field {field} is not valid hex: {source}")]
    InvalidHex {
        field: &'static str,
        #[source]
        source: hex::FromHexError,
    },
}

/// Errors that can occur talking to an Apple TV
#[derive(Error, Debug)]
pub enum ClientError {
    /// Credential string could not be parsed
    #[error("Invalid credentials: {0}")]
    Credentials(#[from] CredentialsError),

    /// Device scan failed
    #[error("Device scan failed: {0}")]
    ScanFailed(String),

    /// No device matched the requested identifier
    #[error("No device found for identifier {0}")]
    NoDeviceFound(String),

    /// Opening the control connection failed
    #[error("Failed to open connection to {device}: {reason}")]
    ConnectionFailed { device: String, reason: String },

    /// The connection's event stream was already taken
    #[error("Device connection already opened")]
    AlreadyConnected,
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
