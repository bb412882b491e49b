use std::fmt;

/// How a column is stored by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    Integer,
    Text,
    Real,
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StorageType::Integer => "INTEGER",
            StorageType::Text => "TEXT",
            StorageType::Real => "REAL",
        })
    }
}
