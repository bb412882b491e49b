use super::{FieldType, ModelId, StorageType};

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// The name of the column in the database, the same as the field name.
    pub name: String,

    /// The field type as declared by the record.
    pub ty: FieldType,

    /// What kind of value the column holds.
    pub kind: ColumnKind,

    /// The database storage type of the column.
    pub storage_ty: StorageType,

    /// Whether a value is required (`NOT NULL`).
    pub required: bool,

    /// True for the identity column, the table's sole primary key.
    pub primary_key: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Text,
    Boolean,
    Float,

    /// The identity of a record of the given model
    Record(ModelId),
}

impl Column {
    /// The column's type and constraints as written in `CREATE TABLE`, e.g.
    /// `INTEGER NOT NULL PRIMARY KEY` or `TEXT NOT NULL`.
    pub fn definition(&self) -> String {
        let mut def = self.storage_ty.to_string();
        if self.required || self.primary_key {
            def.push_str(" NOT NULL");
        }
        if self.primary_key {
            def.push_str(" PRIMARY KEY");
        }
        def
    }
}

impl ColumnKind {
    pub fn storage_ty(self) -> StorageType {
        match self {
            ColumnKind::Integer | ColumnKind::Boolean | ColumnKind::Record(_) => {
                StorageType::Integer
            }
            ColumnKind::Text => StorageType::Text,
            ColumnKind::Float => StorageType::Real,
        }
    }
}
