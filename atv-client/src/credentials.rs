//! Pairing credential parsing

use std::fmt;

use crate::error::CredentialsError;

/// Pairing credentials for a single Apple TV
///
/// Parsed from the colon-separated string produced by the external pairing
/// flow. Only `unique_identifier` is interpreted by this workspace; the four
/// trailing fields are opaque key material carried through to the control
/// connection unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    unique_identifier: String,
    identifier: Vec<u8>,
    pairing_id: Vec<u8>,
    public_key: Vec<u8>,
    encryption_key: Vec<u8>,
}

impl Credentials {
    /// Parse a credential string
    ///
    /// The expected form is five colon-separated fields:
    /// `unique_identifier:identifier:pairing_id:public_key:encryption_key`,
    /// where every field after the first is hex-encoded.
    pub fn parse(text: &str) -> Result<Self, CredentialsError> {
        let parts: Vec<&str> = text.split(':').collect();
        if parts.len() != 5 {
            return Err(CredentialsError::FieldCount(parts.len()));
        }
        if parts[0].is_empty() {
            return Err(CredentialsError::EmptyIdentifier);
        }

        let decode = |field: &'static str, value: &str| {
            hex::decode(value).map_err(|source| CredentialsError::InvalidHex { field, source })
        };

        Ok(Self {
            unique_identifier: parts[0].to_string(),
            identifier: decode("identifier", parts[1])?,
            pairing_id: decode("pairing_id", parts[2])?,
            public_key: decode("public_key", parts[3])?,
            encryption_key: decode("encryption_key", parts[4])?,
        })
    }

    /// The unique identifier of the paired device
    ///
    /// Used to scope discovery scans to the one device these credentials
    /// belong to.
    pub fn unique_identifier(&self) -> &str {
        &self.unique_identifier
    }
}

impl fmt::Display for Credentials {
    /// Re-encode to the same colon-separated wire form `parse` accepts
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}:{}",
            self.unique_identifier,
            hex::encode(&self.identifier),
            hex::encode(&self.pairing_id),
            hex::encode(&self.public_key),
            hex::encode(&self.encryption_key),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "8D6B9E1C2F4A:a1b2c3:64656d6f:0011223344:deadbeef";

    #[test]
    fn test_parse_valid() {
        let credentials = Credentials::parse(SAMPLE).unwrap();
        assert_eq!(credentials.unique_identifier(), "8D6B9E1C2F4A");
    }

    #[test]
    fn test_display_round_trips() {
        let credentials = Credentials::parse(SAMPLE).unwrap();
        assert_eq!(credentials.to_string(), SAMPLE);
        assert_eq!(Credentials::parse(&credentials.to_string()).unwrap(), credentials);
    }

    #[test]
    fn test_parse_wrong_field_count() {
        assert_eq!(
            Credentials::parse("only:three:fields"),
            Err(CredentialsError::FieldCount(3))
        );
    }

    #[test]
    fn test_parse_empty_identifier() {
        assert_eq!(
            Credentials::parse(":a1:b2:c3:d4"),
            Err(CredentialsError::EmptyIdentifier)
        );
    }

    #[test]
    fn test_parse_invalid_hex() {
        let err = Credentials::parse("ID:zz:b2:c3:d4").unwrap_err();
        assert!(matches!(err, CredentialsError::InvalidHex { field: "identifier", .. }));
    }

    #[test]
    fn test_invalid_hex_errors_compare_equal() {
        // InvalidHex carries the hex error as its source, which supports
        // equality comparison but not full Eq.
        let first = Credentials::parse("ID:zz:b2:c3:d4").unwrap_err();
        let second = Credentials::parse("ID:zz:b2:c3:d4").unwrap_err();
        assert_eq!(first, second);
        assert_ne!(first, CredentialsError::EmptyIdentifier);
    }
}
