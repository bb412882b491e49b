use super::ValueMap;
use crate::{Error, Result};

use indexmap::IndexMap;

/// A value read from or written to the database, or held in a record field.
///
/// Scalars map onto SQLite storage classes. `List` and `Map` only appear in
/// record fields that are expanded from subtables; they are never bound as
/// statement parameters.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Null value
    #[default]
    Null,

    /// Boolean value, stored as `0` / `1`
    Bool(bool),

    /// Signed 64-bit integer
    I64(i64),

    /// 64-bit floating point number
    F64(f64),

    /// String value
    String(String),

    /// An ordered sequence of values
    List(Vec<Value>),

    /// An insertion-ordered key/value mapping
    Map(ValueMap),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::I64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// Short name of the variant, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::I64(_) => "i64",
            Self::F64(_) => "f64",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }

    pub fn to_list(self) -> Result<Vec<Value>> {
        match self {
            Self::List(items) => Ok(items),
            _ => Err(Error::type_conversion(self, "list")),
        }
    }

    pub fn to_map(self) -> Result<ValueMap> {
        match self {
            Self::Map(map) => Ok(map),
            _ => Err(Error::type_conversion(self, "map")),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::I64(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::I64(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::F64(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<ValueMap> for Value {
    fn from(value: ValueMap) -> Self {
        Self::Map(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<Value>, V: Into<Value>> From<IndexMap<K, V>> for Value {
    fn from(value: IndexMap<K, V>) -> Self {
        Self::Map(value.into_iter().collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            // Boolean columns come back from the engine as integers
            Value::I64(0) => Ok(false),
            Value::I64(1) => Ok(true),
            _ => Err(Error::type_conversion(value, "bool")),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::I64(v) => Ok(v),
            _ => Err(Error::type_conversion(value, "i64")),
        }
    }
}

impl TryFrom<Value> for i32 {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::I64(v) => i32::try_from(v).map_err(|_| Error::type_conversion(value, "i32")),
            _ => Err(Error::type_conversion(value, "i32")),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::F64(v) => Ok(v),
            Value::I64(v) => Ok(v as f64),
            _ => Err(Error::type_conversion(value, "f64")),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            _ => Err(Error::type_conversion(value, "String")),
        }
    }
}
