use super::Error;

/// Error when a child model is used as a subtable of a parent it does not
/// reference.
#[derive(Debug)]
pub(super) struct NoForeignKeyPath {
    child: Box<str>,
    parent: Box<str>,
    column: Box<str>,
}

impl std::error::Error for NoForeignKeyPath {}

impl core::fmt::Display for NoForeignKeyPath {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "can not use `{}` as a subtable of `{}`, as it has no foreign key column `{}`",
            self.child, self.parent, self.column
        )
    }
}

impl Error {
    /// Creates a no foreign key path error.
    pub fn no_foreign_key_path(
        child: impl Into<String>,
        parent: impl Into<String>,
        column: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::NoForeignKeyPath(NoForeignKeyPath {
            child: child.into().into(),
            parent: parent.into().into(),
            column: column.into().into(),
        }))
    }

    /// Returns `true` if this error is a no foreign key path error.
    pub fn is_no_foreign_key_path(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NoForeignKeyPath(_))
    }
}
