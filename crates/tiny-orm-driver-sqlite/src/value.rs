use rusqlite::{
    types::{ToSql, ToSqlOutput, Type, Value as SqlValue, ValueRef},
    Row,
};
use tiny_orm_core::stmt::Value as CoreValue;

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    /// Converts this SQLite driver value into the core value.
    pub fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Converts a SQLite value within a row to a core value.
    ///
    /// Integers, including booleans, come back as `I64`.
    pub fn from_sql(row: &Row<'_>, index: usize) -> rusqlite::Result<Self> {
        let core_value = match row.get_ref(index)? {
            ValueRef::Null => CoreValue::Null,
            ValueRef::Integer(value) => CoreValue::I64(value),
            ValueRef::Real(value) => CoreValue::F64(value),
            value @ ValueRef::Text(_) => match value.as_str() {
                Ok(value) => CoreValue::String(value.to_string()),
                Err(err) => {
                    return Err(rusqlite::Error::FromSqlConversionFailure(
                        index,
                        Type::Text,
                        Box::new(err),
                    ))
                }
            },
            ValueRef::Blob(_) => {
                return Err(rusqlite::Error::FromSqlConversionFailure(
                    index,
                    Type::Blob,
                    "blob columns are not supported".into(),
                ))
            }
        };

        Ok(Value(core_value))
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        use CoreValue::*;

        match &self.0 {
            Bool(true) => Ok(ToSqlOutput::Owned(SqlValue::Integer(1))),
            Bool(false) => Ok(ToSqlOutput::Owned(SqlValue::Integer(0))),
            I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            F64(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v))),
            String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
            List(_) | Map(_) => Err(rusqlite::Error::ToSqlConversionFailure(
                format!("cannot bind a {} as a parameter", self.0.kind_name()).into(),
            )),
        }
    }
}
