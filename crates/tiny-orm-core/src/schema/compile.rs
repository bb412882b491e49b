use super::{
    decompose, is_valid, name::is_identity_field, Column, ColumnKind, FieldType, ForeignKey, Name,
    RecordType, Registry, SubtableModel, TableModel,
};
use crate::{Error, Result};

use indexmap::IndexMap;

/// Compiles a record type into its table model.
///
/// Subtable children are compiled (or fetched) through `registry` and
/// connected to the new model before it is returned. No child is touched
/// unless every subtable is valid.
pub(super) fn compile(registry: &Registry, ty: &RecordType) -> Result<TableModel> {
    let schema = ty.schema();
    let table = &schema.name;

    if let Some(field) = schema.duplicates.first() {
        return Err(Error::invalid_schema(format!(
            "field `{field}` declared more than once in `{table}`"
        )));
    }

    let mut columns = IndexMap::new();
    let mut foreign_keys = IndexMap::new();
    let mut identity_field = None;

    for (field, declared) in &schema.fields {
        if schema.is_subtable_field(field) {
            continue;
        }

        let (base, required) = decompose(declared);

        if !is_valid(&base) {
            return Err(Error::invalid_field_type(table, field, base.to_string()));
        }

        let kind = match &base {
            FieldType::Integer => ColumnKind::Integer,
            FieldType::Text => ColumnKind::Text,
            FieldType::Boolean => ColumnKind::Boolean,
            FieldType::Float => ColumnKind::Float,
            FieldType::Record(target) => {
                foreign_keys.insert(field.clone(), foreign_key(field, target)?);
                ColumnKind::Record(target.id)
            }
            _ => return Err(Error::invalid_field_type(table, field, base.to_string())),
        };

        let primary_key = is_identity_field(table, field);

        if primary_key {
            if kind != ColumnKind::Integer {
                return Err(Error::invalid_field_type(table, field, base.to_string()));
            }

            if let Some(existing) = identity_field.replace(field.clone()) {
                return Err(Error::invalid_schema(format!(
                    "`{table}` has two identity fields, `{existing}` and `{field}`"
                )));
            }
        }

        columns.insert(
            field.clone(),
            Column {
                name: field.clone(),
                ty: declared.clone(),
                kind,
                storage_ty: kind.storage_ty(),
                required: required || primary_key,
                primary_key,
            },
        );
    }

    let Some(identity_field) = identity_field else {
        return Err(Error::missing_identity_field(
            table,
            Name::new(table).identity_column(),
        ));
    };

    for constraint in &schema.unique {
        if constraint.is_empty() {
            return Err(Error::invalid_schema(format!(
                "empty uniqueness constraint on `{table}`"
            )));
        }

        if let Some(column) = constraint.iter().find(|c| !columns.contains_key(*c)) {
            return Err(Error::invalid_schema(format!(
                "uniqueness constraint on `{table}` names unknown column `{column}`"
            )));
        }
    }

    let mut model = TableModel::new(
        ty.id,
        table.clone(),
        identity_field,
        columns,
        foreign_keys,
        schema.unique.clone(),
    );

    let mut subtables = IndexMap::new();

    for decl in &schema.subtables {
        let child = registry.get_or_compile(&decl.child)?;
        let subtable = SubtableModel::new(decl, child)?;

        let Some(declared) = schema.fields.get(&decl.field) else {
            return Err(Error::invalid_subtable_field("parent", &decl.field, table));
        };

        let expected = subtable.expected_type();
        if *declared.strip_optional() != expected {
            return Err(Error::invalid_subtable_field_type(
                table,
                &decl.field,
                expected,
                declared,
            ));
        }

        subtable.check_connect(&model)?;
        subtables.insert(decl.field.clone(), subtable);
    }

    // Children only learn about the parent once every subtable checked out.
    for subtable in subtables.values() {
        subtable.connect(&model)?;
    }

    model.subtables = subtables;

    Ok(model)
}

/// The foreign key for a field holding a record of `target`.
///
/// Only the target's declaration is inspected, never its compiled model, so
/// records may refer to themselves.
fn foreign_key(field: &str, target: &RecordType) -> Result<ForeignKey> {
    let schema = target.schema();

    let Some(references) = schema
        .fields
        .keys()
        .find(|name| is_identity_field(&schema.name, name))
    else {
        return Err(Error::missing_identity_field(
            &schema.name,
            Name::new(&schema.name).identity_column(),
        ));
    };

    Ok(ForeignKey {
        column: field.to_string(),
        references: references.clone(),
        table: schema.name.clone(),
        target: target.id,
    })
}
