use std::{fmt, io};

use crate::error::mongo::format_mongodb_error;

/// Crate-wide `Result` type using [`PurgeError`] as the error.
///
/// This alias is re-exported by the parent `error` module and is intended
/// to be used throughout the crate for fallible operations.
pub type Result<T> = std::result::Result<T, PurgeError>;

/// Top-level error type for purge operations.
///
/// This type wraps more specific error kinds and provides a single
/// error type that can be used throughout the crate.
#[derive(Debug)]
pub enum PurgeError {
    /// Connection-related errors. Fatal: nothing is deleted after one.
    Connection(ConnectionError),

    /// Fetch or batch-commit errors during a drain.
    Operation(OperationError),

    /// Configuration errors.
    Config(ConfigError),

    /// I/O errors.
    Io(io::Error),

    /// MongoDB driver errors.
    MongoDb(mongodb::error::Error),

    /// Generic error with a free-form message.
    Generic(String),
}

/// Connection-specific errors.
///
/// Every variant here is raised before any collection is touched, and is
/// treated as unrecoverable by `main`.
#[derive(Debug)]
pub enum ConnectionError {
    /// Credential file could not be read.
    CredentialsUnreadable(String),

    /// Credential file exists but does not parse.
    CredentialsInvalid(String),

    /// Invalid connection URI.
    InvalidUri(String),

    /// Failed to establish a connection.
    ConnectionFailed(String),

    /// Connection timeout.
    Timeout,

    /// Ping command failed after the client was built.
    PingFailed(String),

    /// No connection has been established yet.
    NotConnected,
}

/// Errors raised while draining a collection.
///
/// These are not caught anywhere below `main`: the first one aborts the
/// whole run, leaving later collections unprocessed and the current one
/// possibly partially deleted.
#[derive(Debug)]
pub enum OperationError {
    /// A fetch or commit could not reach the backing store.
    StoreUnavailable(String),

    /// The store rejected a commit for exceeding its batch limits.
    QuotaExceeded { requested: usize, max: usize },
}

/// Configuration-specific errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file not found.
    FileNotFound(String),

    /// Invalid config format.
    InvalidFormat(String),

    /// Missing required field.
    MissingField(String),

    /// Invalid field value.
    InvalidValue { field: String, value: String },
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for PurgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PurgeError::Connection(e) => write!(f, "Connection error: {e}"),
            PurgeError::Operation(e) => write!(f, "Operation error: {e}"),
            PurgeError::Config(e) => write!(f, "Configuration error: {e}"),
            PurgeError::Io(e) => write!(f, "I/O error: {e}"),
            PurgeError::MongoDb(e) => format_mongodb_error(f, e),
            PurgeError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for ConnectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionError::CredentialsUnreadable(msg) => {
                write!(f, "Credential file not readable: {msg}")
            }
            ConnectionError::CredentialsInvalid(msg) => {
                write!(f, "Credential file not valid: {msg}")
            }
            ConnectionError::InvalidUri(uri) => write!(f, "Invalid connection URI: {uri}"),
            ConnectionError::ConnectionFailed(msg) => write!(f, "Failed to connect: {msg}"),
            ConnectionError::Timeout => write!(f, "Connection timeout"),
            ConnectionError::PingFailed(msg) => write!(f, "Ping failed: {msg}"),
            ConnectionError::NotConnected => write!(f, "Not connected to MongoDB"),
        }
    }
}

impl fmt::Display for OperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationError::StoreUnavailable(msg) => {
                write!(f, "Store unavailable: {msg}")
            }
            OperationError::QuotaExceeded { requested, max } => {
                write!(f, "Batch of {requested} exceeds the store limit of {max}")
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {path}"),
            ConfigError::InvalidFormat(msg) => write!(f, "Invalid config format: {msg}"),
            ConfigError::MissingField(field) => write!(f, "Missing required field: {field}"),
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value '{value}' for field '{field}'")
            }
        }
    }
}

impl std::error::Error for PurgeError {}
impl std::error::Error for ConnectionError {}
impl std::error::Error for OperationError {}
impl std::error::Error for ConfigError {}

/* ========================= Conversions to PurgeError ========================= */

impl From<io::Error> for PurgeError {
    fn from(err: io::Error) -> Self {
        PurgeError::Io(err)
    }
}

impl From<mongodb::error::Error> for PurgeError {
    fn from(err: mongodb::error::Error) -> Self {
        PurgeError::MongoDb(err)
    }
}

impl From<ConnectionError> for PurgeError {
    fn from(err: ConnectionError) -> Self {
        PurgeError::Connection(err)
    }
}

impl From<OperationError> for PurgeError {
    fn from(err: OperationError) -> Self {
        PurgeError::Operation(err)
    }
}

impl From<ConfigError> for PurgeError {
    fn from(err: ConfigError) -> Self {
        PurgeError::Config(err)
    }
}

impl From<String> for PurgeError {
    fn from(msg: String) -> Self {
        PurgeError::Generic(msg)
    }
}

impl From<&str> for PurgeError {
    fn from(msg: &str) -> Self {
        PurgeError::Generic(msg.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_error_display() {
        let err = ConnectionError::CredentialsUnreadable("no such file".to_string());
        assert_eq!(
            err.to_string(),
            "Credential file not readable: no such file"
        );

        let err = ConnectionError::InvalidUri("not-a-uri".to_string());
        assert_eq!(err.to_string(), "Invalid connection URI: not-a-uri");
    }

    #[test]
    fn test_operation_error_display() {
        let err = OperationError::QuotaExceeded {
            requested: 900,
            max: 500,
        };
        assert_eq!(
            err.to_string(),
            "Batch of 900 exceeds the store limit of 500"
        );

        let err = OperationError::StoreUnavailable("server selection timed out".to_string());
        assert_eq!(
            err.to_string(),
            "Store unavailable: server selection timed out"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidValue {
            field: "purge.batch_size".to_string(),
            value: "0".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value '0' for field 'purge.batch_size'");
    }

    #[test]
    fn test_conversion_to_purge_error() {
        let err: PurgeError = ConnectionError::NotConnected.into();
        assert!(matches!(err, PurgeError::Connection(_)));

        let err: PurgeError = OperationError::StoreUnavailable("down".to_string()).into();
        assert!(matches!(err, PurgeError::Operation(_)));

        let err: PurgeError = "boom".into();
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_purge_error_wraps_kind_display() {
        let err: PurgeError = ConnectionError::Timeout.into();
        assert_eq!(err.to_string(), "Connection error: Connection timeout");
    }
}
