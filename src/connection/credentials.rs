//! Credential artifact loading
//!
//! The connection target can come from a JSON credential file instead of
//! the command line, keeping URIs with embedded passwords out of shell
//! history:
//!
//! ```json
//! { "uri": "mongodb://admin:secret@db:27017", "database": "production" }
//! ```
//!
//! A missing or malformed file is a connection error: it is reported as a
//! fatal diagnostic before any collection is enumerated.

use serde::Deserialize;
use std::path::Path;

use crate::error::{ConnectionError, Result};

/// Contents of the credential file
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    /// Connection URI, possibly carrying username and password
    pub uri: String,

    /// Tenant database to purge
    #[serde(default)]
    pub database: Option<String>,
}

impl Credentials {
    /// Load and parse a credential file
    ///
    /// # Arguments
    /// * `path` - Path to the JSON credential file
    ///
    /// # Returns
    /// * `Result<Self>` - Parsed credentials or connection error
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ConnectionError::CredentialsUnreadable(format!("{}: {}", path.display(), e))
        })?;

        let credentials: Credentials = serde_json::from_str(&contents)
            .map_err(|e| ConnectionError::CredentialsInvalid(e.to_string()))?;

        if credentials.uri.is_empty() {
            return Err(
                ConnectionError::CredentialsInvalid("'uri' must not be empty".to_string()).into(),
            );
        }

        Ok(credentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_valid_credentials() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "uri": "mongodb://admin:secret@db:27017", "database": "production" }}"#
        )
        .unwrap();

        let credentials = Credentials::load(file.path()).unwrap();
        assert_eq!(credentials.uri, "mongodb://admin:secret@db:27017");
        assert_eq!(credentials.database.as_deref(), Some("production"));
    }

    #[test]
    fn test_database_is_optional() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "uri": "mongodb://db:27017" }}"#).unwrap();

        let credentials = Credentials::load(file.path()).unwrap();
        assert!(credentials.database.is_none());
    }

    #[test]
    fn test_missing_file_is_a_connection_error() {
        let err = Credentials::load(Path::new("/no/such/credentials.json")).unwrap_err();
        assert!(err.to_string().contains("Credential file not readable"));
    }

    #[test]
    fn test_malformed_json_is_a_connection_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = Credentials::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Credential file not valid"));
    }

    #[test]
    fn test_empty_uri_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "uri": "" }}"#).unwrap();

        let err = Credentials::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }
}
