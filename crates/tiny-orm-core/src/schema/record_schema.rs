use super::{FieldType, Subtable};
use indexmap::IndexMap;

/// The declared shape of a record type.
///
/// ```
/// use tiny_orm_core::schema::{FieldType, RecordSchema};
///
/// let schema = RecordSchema::new("User")
///     .field("user_id", FieldType::optional(FieldType::Integer))
///     .field("username", FieldType::Text)
///     .field("email", FieldType::Text)
///     .unique(["username"])
///     .unique(["email"]);
///
/// assert_eq!(schema.fields.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct RecordSchema {
    /// Record name, also the table name.
    pub name: String,

    /// Declared fields in declaration order.
    pub fields: IndexMap<String, FieldType>,

    /// Sets of columns that must be unique together.
    pub unique: Vec<Vec<String>>,

    /// Fields populated from subtables.
    pub subtables: Vec<Subtable>,

    /// Fields declared more than once, reported when the record is compiled.
    pub(crate) duplicates: Vec<String>,
}

impl RecordSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: IndexMap::new(),
            unique: vec![],
            subtables: vec![],
            duplicates: vec![],
        }
    }

    pub fn field(mut self, name: impl Into<String>, ty: FieldType) -> Self {
        let name = name.into();
        if self.fields.contains_key(&name) {
            self.duplicates.push(name.clone());
        }
        self.fields.insert(name, ty);
        self
    }

    pub fn unique<I>(mut self, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.unique
            .push(columns.into_iter().map(Into::into).collect());
        self
    }

    pub fn subtable(mut self, subtable: Subtable) -> Self {
        self.subtables.push(subtable);
        self
    }

    pub(crate) fn is_subtable_field(&self, field: &str) -> bool {
        self.subtables.iter().any(|subtable| subtable.field == field)
    }
}
