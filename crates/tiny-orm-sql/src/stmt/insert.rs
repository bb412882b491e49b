use tiny_orm_core::stmt::Value;

/// Inserts a single row.
#[derive(Debug, Clone)]
pub struct Insert {
    pub table: String,

    /// Columns paired with the values to store in them
    pub values: Vec<(String, Value)>,

    /// When set, a row with the same value in this column is updated
    /// instead of failing the insert.
    pub on_conflict: Option<String>,
}

impl Insert {
    pub fn new(table: impl Into<String>) -> Insert {
        Insert {
            table: table.into(),
            values: vec![],
            on_conflict: None,
        }
    }

    pub fn value(mut self, column: impl Into<String>, value: impl Into<Value>) -> Insert {
        self.values.push((column.into(), value.into()));
        self
    }

    /// Turns the insert into an upsert keyed on `column`.
    pub fn on_conflict(mut self, column: impl Into<String>) -> Insert {
        self.on_conflict = Some(column.into());
        self
    }
}
