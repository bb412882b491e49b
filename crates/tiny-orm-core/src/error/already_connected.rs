use super::Error;

/// Error when a subtable is connected to a parent model a second time.
///
/// A subtable declaration fixes its connector column exactly once, when the
/// owning parent model is compiled.
#[derive(Debug)]
pub(super) struct AlreadyConnected {
    table: Box<str>,
    connector: Box<str>,
}

impl std::error::Error for AlreadyConnected {}

impl core::fmt::Display for AlreadyConnected {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "subtable `{}` is already connected through `{}`",
            self.table, self.connector
        )
    }
}

impl Error {
    /// Creates an already connected error.
    pub fn already_connected(table: impl Into<String>, connector: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::AlreadyConnected(AlreadyConnected {
            table: table.into().into(),
            connector: connector.into().into(),
        }))
    }

    /// Returns `true` if this error is an already connected error.
    pub fn is_already_connected(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::AlreadyConnected(_))
    }
}
