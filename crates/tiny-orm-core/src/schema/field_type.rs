use super::{ModelId, RecordSchema};
use std::fmt;

/// The declared type of a record field.
///
/// This is the input of [`decompose`](super::decompose). Only the primitive
/// variants and `Record` can become columns; collections are populated from
/// subtables.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    Integer,
    Text,
    Boolean,
    Float,

    /// The null type. Only meaningful as a member of a union.
    Null,

    /// Another record type, stored as a foreign key to its identity
    Record(RecordType),

    /// A value that may be absent; the same as a union with `Null`
    Optional(Box<FieldType>),

    Union(Vec<FieldType>),

    List(Box<FieldType>),

    Map(Box<FieldType>, Box<FieldType>),

    /// A declared type the ORM does not understand
    Other(String),
}

/// A reference to a record type and the function describing its fields.
///
/// Describing a record never compiles it, so record types may refer to
/// themselves or to each other.
#[derive(Clone, Copy)]
pub struct RecordType {
    pub id: ModelId,
    schema: fn() -> RecordSchema,
}

impl FieldType {
    pub fn optional(ty: FieldType) -> FieldType {
        FieldType::Optional(Box::new(ty))
    }

    pub fn list(ty: FieldType) -> FieldType {
        FieldType::List(Box::new(ty))
    }

    pub fn map(key: FieldType, value: FieldType) -> FieldType {
        FieldType::Map(Box::new(key), Box::new(value))
    }

    pub fn union(members: impl IntoIterator<Item = FieldType>) -> FieldType {
        FieldType::Union(members.into_iter().collect())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldType::Null)
    }

    /// The type with any `Optional` wrapper removed.
    pub fn strip_optional(&self) -> &FieldType {
        match self {
            FieldType::Optional(inner) => inner.strip_optional(),
            ty => ty,
        }
    }
}

impl RecordType {
    pub fn new(id: ModelId, schema: fn() -> RecordSchema) -> RecordType {
        RecordType { id, schema }
    }

    /// Describes the record's fields.
    pub fn schema(&self) -> RecordSchema {
        (self.schema)()
    }

    pub fn name(&self) -> String {
        self.schema().name
    }
}

impl PartialEq for RecordType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Debug for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.id, f)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Integer => f.write_str("Integer"),
            FieldType::Text => f.write_str("Text"),
            FieldType::Boolean => f.write_str("Boolean"),
            FieldType::Float => f.write_str("Float"),
            FieldType::Null => f.write_str("Null"),
            FieldType::Record(ty) => write!(f, "Record({})", ty.name()),
            FieldType::Optional(ty) => write!(f, "Optional({ty})"),
            FieldType::Union(members) => {
                f.write_str("Union(")?;
                let mut s = "";
                for member in members {
                    write!(f, "{s}{member}")?;
                    s = ", ";
                }
                f.write_str(")")
            }
            FieldType::List(ty) => write!(f, "List({ty})"),
            FieldType::Map(key, value) => write!(f, "Map({key}, {value})"),
            FieldType::Other(name) => f.write_str(name),
        }
    }
}
