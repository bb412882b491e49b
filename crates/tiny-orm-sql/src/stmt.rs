mod create_table;
pub use create_table::{ColumnDef, CreateTable, ForeignKeyDef};

mod delete;
pub use delete::Delete;

mod insert;
pub use insert::Insert;

mod select;
pub use select::Select;

mod transaction;
pub use transaction::Transaction;

#[derive(Debug, Clone)]
pub enum Statement {
    CreateTable(CreateTable),
    Delete(Delete),
    Insert(Insert),
    Select(Select),
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}
