use super::Error;

/// Error when a subtable is wired to fields that do not line up.
///
/// This occurs when:
/// - The value, pivot, selector or connector field is not a child column
/// - The parent does not declare the subtable field
/// - The parent declares the subtable field with a type other than the one
///   the subtable produces
/// - One child column is given two roles, e.g. pivot and value
#[derive(Debug)]
pub(super) struct InvalidSubtableField {
    message: Box<str>,
}

impl std::error::Error for InvalidSubtableField {}

impl core::fmt::Display for InvalidSubtableField {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error {
    /// Creates an error for a subtable field missing from `table`.
    ///
    /// `role` names what the field is used for: "value", "pivot", "selector",
    /// "connector" or "parent".
    pub fn invalid_subtable_field(
        role: &str,
        field: impl AsRef<str>,
        table: impl AsRef<str>,
    ) -> Error {
        let message = format!(
            "{} field `{}` not present in `{}`",
            role,
            field.as_ref(),
            table.as_ref()
        );
        Error::from(super::ErrorKind::InvalidSubtableField(
            InvalidSubtableField {
                message: message.into(),
            },
        ))
    }

    /// Creates an error for a parent field whose declared type does not match
    /// what its subtable produces.
    pub fn invalid_subtable_field_type(
        table: impl AsRef<str>,
        field: impl AsRef<str>,
        expected: impl core::fmt::Display,
        declared: impl core::fmt::Display,
    ) -> Error {
        let message = format!(
            "`{}::{}` is declared as {}, but its subtable produces {}",
            table.as_ref(),
            field.as_ref(),
            declared,
            expected
        );
        Error::from(super::ErrorKind::InvalidSubtableField(
            InvalidSubtableField {
                message: message.into(),
            },
        ))
    }

    /// Creates an error for a child column used in two roles of the same
    /// subtable.
    pub fn overlapping_subtable_field(
        table: impl AsRef<str>,
        field: impl AsRef<str>,
        first: &str,
        second: &str,
    ) -> Error {
        let message = format!(
            "field `{}` of `{}` is used as both {} and {}",
            field.as_ref(),
            table.as_ref(),
            first,
            second
        );
        Error::from(super::ErrorKind::InvalidSubtableField(
            InvalidSubtableField {
                message: message.into(),
            },
        ))
    }

    /// Returns `true` if this error is an invalid subtable field error.
    pub fn is_invalid_subtable_field(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidSubtableField(_))
    }
}
