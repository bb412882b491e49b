use tiny_orm_core::schema::TableModel;

/// A `CREATE TABLE IF NOT EXISTS` statement.
#[derive(Debug, Clone)]
pub struct CreateTable {
    /// Name of the table
    pub name: String,

    /// Column definitions
    pub columns: Vec<ColumnDef>,

    pub foreign_keys: Vec<ForeignKeyDef>,

    /// Uniqueness constraints, one column list each
    pub unique: Vec<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct ColumnDef {
    /// Name of the column
    pub name: String,

    /// Type and constraints, e.g. `TEXT NOT NULL`
    pub definition: String,
}

#[derive(Debug, Clone)]
pub struct ForeignKeyDef {
    pub column: String,
    pub table: String,
    pub references: String,
}

impl CreateTable {
    pub fn from_model(model: &TableModel) -> CreateTable {
        let columns = model
            .table_fields()
            .into_iter()
            .map(|(name, definition)| ColumnDef { name, definition })
            .collect();

        let foreign_keys = model
            .foreign_keys()
            .into_values()
            .map(|foreign_key| ForeignKeyDef {
                column: foreign_key.column,
                table: foreign_key.table,
                references: foreign_key.references,
            })
            .collect();

        CreateTable {
            name: model.table_name.clone(),
            columns,
            foreign_keys,
            unique: model.uniqueness_constraints.clone(),
        }
    }
}
