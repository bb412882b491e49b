use super::Error;

/// Error when a model is requested for a declared type that is not a record.
#[derive(Debug)]
pub(super) struct NotARecordType {
    ty: Box<str>,
}

impl std::error::Error for NotARecordType {}

impl core::fmt::Display for NotARecordType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "data models can only be made from record types, not {}", self.ty)
    }
}

impl Error {
    /// Creates a not a record type error.
    pub fn not_a_record_type(ty: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NotARecordType(NotARecordType {
            ty: ty.into().into(),
        }))
    }

    /// Returns `true` if this error is a not a record type error.
    pub fn is_not_a_record_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NotARecordType(_))
    }
}
