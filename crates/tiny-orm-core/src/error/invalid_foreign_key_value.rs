use super::Error;

/// Error when a predicate gives a foreign-key column something other than a
/// record of the referenced type (or a list of them, or null).
#[derive(Debug)]
pub(super) struct InvalidForeignKeyValue {
    column: Box<str>,
    message: Box<str>,
}

impl std::error::Error for InvalidForeignKeyValue {}

impl core::fmt::Display for InvalidForeignKeyValue {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid foreign key value for `{}`: {}",
            self.column, self.message
        )
    }
}

impl Error {
    /// Creates an invalid foreign key value error.
    pub fn invalid_foreign_key_value(
        column: impl Into<String>,
        message: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::InvalidForeignKeyValue(
            InvalidForeignKeyValue {
                column: column.into().into(),
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an invalid foreign key value error.
    pub fn is_invalid_foreign_key_value(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidForeignKeyValue(_))
    }
}
