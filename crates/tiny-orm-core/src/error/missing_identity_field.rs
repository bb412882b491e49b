use super::Error;

/// Error when a record type declares no `<table>_id` field.
#[derive(Debug)]
pub(super) struct MissingIdentityField {
    table: Box<str>,
    field: Box<str>,
}

impl std::error::Error for MissingIdentityField {}

impl core::fmt::Display for MissingIdentityField {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "identity field `{}` missing in `{}`",
            self.field, self.table
        )
    }
}

impl Error {
    /// Creates a missing identity field error.
    pub fn missing_identity_field(table: impl Into<String>, field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingIdentityField(
            MissingIdentityField {
                table: table.into().into(),
                field: field.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is a missing identity field error.
    pub fn is_missing_identity_field(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingIdentityField(_))
    }
}
