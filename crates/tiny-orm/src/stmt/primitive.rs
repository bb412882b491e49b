use crate::{stmt::Id, Record, Result};

use indexmap::IndexMap;
use std::hash::Hash;
use tiny_orm_core::{schema::FieldType, stmt::Value};

/// A field value that can be declared in a [`RecordSchema`] and loaded back
/// from a column or subtable.
///
/// [`RecordSchema`]: tiny_orm_core::schema::RecordSchema
pub trait Primitive: Sized {
    /// The declared type of a field holding this value.
    fn field_type() -> FieldType;

    fn load(value: Value) -> Result<Self>;
}

impl Primitive for bool {
    fn field_type() -> FieldType {
        FieldType::Boolean
    }

    fn load(value: Value) -> Result<Self> {
        value.try_into()
    }
}

impl Primitive for i32 {
    fn field_type() -> FieldType {
        FieldType::Integer
    }

    fn load(value: Value) -> Result<Self> {
        value.try_into()
    }
}

impl Primitive for i64 {
    fn field_type() -> FieldType {
        FieldType::Integer
    }

    fn load(value: Value) -> Result<Self> {
        value.try_into()
    }
}

impl Primitive for f64 {
    fn field_type() -> FieldType {
        FieldType::Float
    }

    fn load(value: Value) -> Result<Self> {
        value.try_into()
    }
}

impl Primitive for String {
    fn field_type() -> FieldType {
        FieldType::Text
    }

    fn load(value: Value) -> Result<Self> {
        value.try_into()
    }
}

impl<R: Record> Primitive for Id<R> {
    fn field_type() -> FieldType {
        R::field_type()
    }

    fn load(value: Value) -> Result<Self> {
        Ok(Id::new(value.try_into()?))
    }
}

impl<T: Primitive> Primitive for Option<T> {
    fn field_type() -> FieldType {
        FieldType::optional(T::field_type())
    }

    fn load(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }
}

/// Subtable fields without a pivot.
impl<T: Primitive> Primitive for Vec<T> {
    fn field_type() -> FieldType {
        FieldType::list(T::field_type())
    }

    fn load(value: Value) -> Result<Self> {
        if value.is_null() {
            return Ok(vec![]);
        }

        value.to_list()?.into_iter().map(T::load).collect()
    }
}

/// Subtable fields with a pivot.
impl<K, V> Primitive for IndexMap<K, V>
where
    K: Primitive + Hash + Eq,
    V: Primitive,
{
    fn field_type() -> FieldType {
        FieldType::map(K::field_type(), V::field_type())
    }

    fn load(value: Value) -> Result<Self> {
        if value.is_null() {
            return Ok(IndexMap::new());
        }

        value
            .to_map()?
            .into_iter()
            .map(|(key, value)| Ok((K::load(key)?, V::load(value)?)))
            .collect()
    }
}
