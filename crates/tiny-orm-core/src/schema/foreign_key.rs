use super::ModelId;

/// A column of one table that holds the identity of a record in another.
///
/// Foreign keys come from nested-record fields, where the column is the
/// field itself, and from subtable connections, where the column is the
/// connector named after the parent's identity column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    /// Column name emitted into SQL.
    pub column: String,

    /// Identity column of the referenced table.
    pub references: String,

    /// Name of the referenced table.
    pub table: String,

    /// The referenced model.
    pub target: ModelId,
}
