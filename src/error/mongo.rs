use std::fmt;

/// Format a MongoDB driver error as a single human-readable line.
///
/// Intended to be used by the parent module's `Display` implementation for
/// `PurgeError::MongoDb`. The console contract of this tool is plain text
/// lines, so the driver's typed error structures are flattened into one
/// concise message instead of a JSON dump.
pub fn format_mongodb_error(
    f: &mut fmt::Formatter<'_>,
    error: &mongodb::error::Error,
) -> fmt::Result {
    use mongodb::error::{ErrorKind, WriteFailure};

    match error.kind.as_ref() {
        ErrorKind::Command(command_error) => {
            write!(
                f,
                "MongoDB command error {}: {}",
                command_error.code, command_error.message
            )
        }
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write!(
                f,
                "MongoDB write error {}: {}",
                write_error.code, write_error.message
            )
        }
        ErrorKind::Write(WriteFailure::WriteConcernError(wc_error)) => {
            write!(
                f,
                "MongoDB write concern error {}: {}",
                wc_error.code, wc_error.message
            )
        }
        ErrorKind::Authentication { message, .. } => {
            write!(f, "MongoDB authentication error: {message}")
        }
        ErrorKind::ServerSelection { message, .. } => {
            write!(f, "MongoDB server selection error: {message}")
        }
        ErrorKind::Io(io_error) => {
            write!(f, "MongoDB I/O error: {io_error}")
        }
        ErrorKind::InvalidArgument { message, .. } => {
            write!(f, "MongoDB invalid argument: {message}")
        }
        _ => write!(f, "MongoDB error: {error}"),
    }
}
