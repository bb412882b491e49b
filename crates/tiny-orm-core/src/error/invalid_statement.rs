use super::Error;

/// Error when a statement can not be built from the values it was given.
///
/// This occurs when:
/// - A subtable is stored from a value that is not a list (or map, for a
///   pivoted subtable)
/// - A record is missing a value for one of its model's columns
#[derive(Debug)]
pub(super) struct InvalidStatement {
    pub(super) message: Box<str>,
}

impl std::error::Error for InvalidStatement {}

impl core::fmt::Display for InvalidStatement {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid statement: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid statement error.
    pub fn invalid_statement(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidStatement(InvalidStatement {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid statement error.
    pub fn is_invalid_statement(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidStatement(_))
    }
}
