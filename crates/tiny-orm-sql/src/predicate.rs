use tiny_orm_core::{
    schema::ForeignKey,
    stmt::{Filters, Operand, Params, RecordRef, Value},
    Error, Result,
};

use indexmap::IndexMap;

/// A parameterized boolean SQL expression built from column filters.
///
/// Each filter becomes one clause; clauses are joined with `AND` in filter
/// order. Parameters are named after the column they compare, with a `__{n}`
/// suffix for membership lists.
///
/// | filter                | clause                                        |
/// |-----------------------|-----------------------------------------------|
/// | `null`                | `[c] IS NULL`                                 |
/// | `1`                   | `[c] = :c`                                    |
/// | `[1]`                 | `[c] = :c`                                    |
/// | `[1, 2]`              | `([c] IN (:c__0, :c__1))`                     |
/// | `[1, null, 3]`        | `([c] IN (:c__0, :c__1) OR [c] IS NULL)`      |
/// | `[null]`, `[]` + null | `[c] IS NULL`                                 |
/// | `[]`                  | `([c] IN ())`                                 |
///
/// Columns listed in the foreign keys take records instead of values. The
/// records are replaced by their identity and the clause is emitted against
/// the foreign key's column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predicate {
    /// The expression, empty when there are no filters
    pub sql: String,

    /// Values for the named parameters used by `sql`
    pub params: Params,
}

/// A filter reduced to plain values.
enum Filter {
    Null,
    Scalar(Value),
    List(Vec<Value>),
}

impl Predicate {
    pub fn build(foreign_keys: &IndexMap<String, ForeignKey>, filters: &Filters) -> Result<Predicate> {
        let mut params = Params::new();
        let mut sql = String::new();

        for (column, operand) in filters {
            let clause = Predicate::clause(foreign_keys, column, operand, &mut params)?;

            if !sql.is_empty() {
                sql.push_str(" AND ");
            }
            sql.push_str(&clause);
        }

        Ok(Predicate { sql, params })
    }

    /// Builds the clause for a single column, adding its parameters to
    /// `params`.
    pub fn clause(
        foreign_keys: &IndexMap<String, ForeignKey>,
        column: &str,
        operand: &Operand,
        params: &mut Params,
    ) -> Result<String> {
        match foreign_keys.get(column) {
            Some(foreign_key) => {
                let filter = foreign_filter(foreign_key, column, operand)?;
                Ok(emit(&foreign_key.column, filter, params))
            }
            None => {
                let filter = value_filter(column, operand)?;
                Ok(emit(column, filter, params))
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }
}

fn value_filter(column: &str, operand: &Operand) -> Result<Filter> {
    let value = match operand {
        Operand::Value(value) => value,
        Operand::Record(_) | Operand::Records(_) => {
            return Err(Error::invalid_foreign_key_value(
                column,
                "records can only be compared on foreign key columns",
            ))
        }
    };

    match value {
        Value::Null => Ok(Filter::Null),
        Value::List(items) => {
            if let Some(item) = items.iter().find(|item| item.is_list() || item.is_map()) {
                return Err(Error::invalid_statement(format!(
                    "filter on `{column}` can not contain a {}",
                    item.kind_name()
                )));
            }
            Ok(Filter::List(items.clone()))
        }
        Value::Map(_) => Err(Error::invalid_statement(format!(
            "filter on `{column}` can not be a map"
        ))),
        value => Ok(Filter::Scalar(value.clone())),
    }
}

fn foreign_filter(foreign_key: &ForeignKey, column: &str, operand: &Operand) -> Result<Filter> {
    match operand {
        Operand::Value(Value::Null) => Ok(Filter::Null),
        Operand::Record(record) => Ok(Filter::Scalar(Value::I64(identity(
            foreign_key,
            column,
            record,
        )?))),
        Operand::Records(records) => records
            .iter()
            .map(|record| identity(foreign_key, column, record).map(Value::I64))
            .collect::<Result<_>>()
            .map(Filter::List),
        Operand::Value(value) => Err(Error::invalid_foreign_key_value(
            column,
            format!(
                "expected a record of `{}`, got a {}",
                foreign_key.table,
                value.kind_name()
            ),
        )),
    }
}

fn identity(foreign_key: &ForeignKey, column: &str, record: &RecordRef) -> Result<i64> {
    if record.model != foreign_key.target {
        return Err(Error::invalid_foreign_key_value(
            column,
            format!("expected a record of `{}`", foreign_key.table),
        ));
    }

    record.identity.ok_or_else(|| {
        Error::invalid_foreign_key_value(
            column,
            format!("the `{}` record has not been stored", foreign_key.table),
        )
    })
}

fn emit(column: &str, filter: Filter, params: &mut Params) -> String {
    let values = match filter {
        Filter::Null => return format!("[{column}] IS NULL"),
        Filter::Scalar(value) => {
            params.insert(column.to_string(), value);
            return format!("[{column}] = :{column}");
        }
        Filter::List(values) => values,
    };

    let has_null = values.iter().any(Value::is_null);
    let mut values: Vec<_> = values.into_iter().filter(|v| !v.is_null()).collect();

    match (values.len(), has_null) {
        (0, true) => format!("[{column}] IS NULL"),
        (1, false) => {
            params.insert(column.to_string(), values.remove(0));
            format!("[{column}] = :{column}")
        }
        _ => {
            let mut sql = format!("([{column}] IN (");
            for (i, value) in values.into_iter().enumerate() {
                let name = format!("{column}__{i}");
                if i > 0 {
                    sql.push_str(", ");
                }
                sql.push(':');
                sql.push_str(&name);
                params.insert(name, value);
            }
            sql.push(')');
            if has_null {
                sql.push_str(&format!(" OR [{column}] IS NULL"));
            }
            sql.push(')');
            sql
        }
    }
}
