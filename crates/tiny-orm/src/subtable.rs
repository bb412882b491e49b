//! Loading and storing subtable fields.
//!
//! A subtable field lives in the rows of a child table that point back at
//! the parent through the connector column. Without a pivot the field is a
//! list of the value column in row order; with a pivot it is a map from the
//! pivot column to the value column.

use crate::{atomic, exec, Error, Result};

use indexmap::IndexMap;
use tiny_orm_core::{
    schema::SubtableModel,
    stmt::{Filters, Operand, Value, ValueMap},
    Cursor,
};
use tiny_orm_sql::{
    stmt::{Delete, Insert, Select},
    Predicate,
};
use tracing::debug;

/// Loads the subtable field of every parent in `parent_ids` with a single
/// query.
///
/// Every requested parent has an entry in the result, holding an empty list
/// or map when it has no rows. When a pivot value appears more than once,
/// the last row wins.
pub fn select<C: Cursor + ?Sized>(
    cursor: &mut C,
    subtable: &SubtableModel,
    parent_ids: &[i64],
) -> Result<IndexMap<i64, Value>> {
    let connector = subtable.connector()?;

    let mut ret: IndexMap<i64, Value> = parent_ids
        .iter()
        .map(|id| (*id, empty(subtable)))
        .collect();

    if parent_ids.is_empty() {
        return Ok(ret);
    }

    let mut columns = vec![connector.to_string()];
    columns.extend(subtable.pivot.clone());
    columns.push(subtable.value_field.clone());

    let mut filters = selectors(subtable);
    filters.insert(
        connector.to_string(),
        Operand::Value(parent_ids.to_vec().into()),
    );

    // The connector is a foreign key of the child, but it is matched by
    // identity here, so foreign keys are not consulted.
    let filter = Predicate::build(&IndexMap::new(), &filters)?;
    let stmt = Select::new(&subtable.model.table_name, columns).filter(filter);

    let rows = exec::query(cursor, &stmt.into())?;

    debug!(
        table = %subtable.model.table_name,
        field = %subtable.field,
        parents = parent_ids.len(),
        rows = rows.len(),
        "loaded subtable rows"
    );

    for row in rows {
        let mut row = row.into_iter();
        let mut column = |name: &str| {
            row.next().ok_or_else(|| {
                Error::invalid_statement(format!(
                    "row from `{}` is missing column `{name}`",
                    subtable.model.table_name
                ))
            })
        };

        let parent_id = i64::try_from(column(connector)?)?;

        let entry = ret
            .entry(parent_id)
            .or_insert_with(|| empty(subtable));

        match entry {
            Value::Map(map) => {
                let key = column(subtable.pivot.as_deref().unwrap_or_default())?;
                map.insert(key, column(&subtable.value_field)?);
            }
            Value::List(items) => items.push(column(&subtable.value_field)?),
            _ => unreachable!("subtable fields are lists or maps"),
        }
    }

    Ok(ret)
}

/// Replaces the subtable rows of one parent with `value`.
///
/// `value` is a list for subtables without a pivot and a map for subtables
/// with one; `Null` stores no rows. The existing rows are deleted and the new
/// ones inserted inside a single savepoint.
pub fn store<C: Cursor + ?Sized>(
    cursor: &mut C,
    subtable: &SubtableModel,
    parent_id: i64,
    value: Value,
) -> Result<()> {
    let connector = subtable.connector()?;
    let table = &subtable.model.table_name;

    let rows: Vec<(Option<Value>, Value)> = match (&subtable.pivot, value) {
        (_, Value::Null) => vec![],
        (None, Value::List(items)) => items.into_iter().map(|item| (None, item)).collect(),
        (Some(_), Value::Map(map)) => map
            .into_iter()
            .map(|(key, value)| (Some(key), value))
            .collect(),
        (pivot, value) => {
            return Err(Error::invalid_statement(format!(
                "subtable field `{}` expects a {}, got a {}",
                subtable.field,
                if pivot.is_some() { "map" } else { "list" },
                value.kind_name()
            )))
        }
    };

    let mut filters = selectors(subtable);
    filters.insert(connector.to_string(), parent_id.into());
    let filter = Predicate::build(&IndexMap::new(), &filters)?;

    atomic(cursor, |cursor| {
        let delete = Delete {
            table: table.clone(),
            filter,
        };
        exec::execute(cursor, &delete.into())?;

        for (key, value) in rows {
            let mut insert = Insert::new(table).value(connector, parent_id);

            for (column, selector) in &subtable.selectors {
                insert = insert.value(column, selector.clone());
            }

            if let (Some(pivot), Some(key)) = (&subtable.pivot, key) {
                insert = insert.value(pivot, key);
            }

            insert = insert.value(&subtable.value_field, value);
            exec::execute(cursor, &insert.into())?;
        }

        Ok(())
    })
}

fn empty(subtable: &SubtableModel) -> Value {
    match subtable.pivot {
        Some(_) => Value::Map(ValueMap::new()),
        None => Value::List(vec![]),
    }
}

fn selectors(subtable: &SubtableModel) -> Filters {
    subtable
        .selectors
        .iter()
        .map(|(column, value)| (column.clone(), Operand::Value(value.clone())))
        .collect()
}
