use super::Error;

/// Error when a subtable is used before being connected to a parent model.
#[derive(Debug)]
pub(super) struct SubtableNotAttached {
    table: Box<str>,
}

impl std::error::Error for SubtableNotAttached {}

impl core::fmt::Display for SubtableNotAttached {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "`{}` has not been attached to a model", self.table)
    }
}

impl Error {
    /// Creates a subtable not attached error.
    pub fn subtable_not_attached(table: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::SubtableNotAttached(SubtableNotAttached {
            table: table.into().into(),
        }))
    }

    /// Returns `true` if this error is a subtable not attached error.
    pub fn is_subtable_not_attached(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::SubtableNotAttached(_))
    }
}
