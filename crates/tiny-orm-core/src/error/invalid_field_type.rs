use super::Error;

/// Error when a declared field decomposes to a type that can not be stored in
/// a column (unions of several types, `Null`, unknown types, or a collection
/// that no subtable claims).
#[derive(Debug)]
pub(super) struct InvalidFieldType {
    table: Box<str>,
    field: Box<str>,
    ty: Box<str>,
}

impl std::error::Error for InvalidFieldType {}

impl core::fmt::Display for InvalidFieldType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid field type: `{}::{}` has type {}",
            self.table, self.field, self.ty
        )
    }
}

impl Error {
    /// Creates an invalid field type error.
    pub fn invalid_field_type(
        table: impl Into<String>,
        field: impl Into<String>,
        ty: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::InvalidFieldType(InvalidFieldType {
            table: table.into().into(),
            field: field.into().into(),
            ty: ty.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid field type error.
    pub fn is_invalid_field_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidFieldType(_))
    }
}
