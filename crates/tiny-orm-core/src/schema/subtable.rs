use super::{FieldType, RecordType, TableModel};
use crate::{stmt::Value, Error, Result};

use indexmap::IndexMap;
use std::sync::{Arc, OnceLock};

/// Declares that a field of a parent record is populated from the rows of a
/// child table.
///
/// Without a pivot the parent field is a list of the child's value field.
/// With a pivot it is a map from the pivot field to the value field.
/// Selectors are extra equality filters, so several subtables can share one
/// child table.
///
/// ```ignore
/// RecordSchema::new("MainTable")
///     .field("main_table_id", FieldType::Integer)
///     .field("data", FieldType::list(FieldType::Text))
///     .field("datadict", FieldType::map(FieldType::Text, FieldType::Text))
///     .subtable(Subtable::new("data", SubList::record_type()))
///     .subtable(
///         Subtable::new("datadict", SubDict::record_type())
///             .value_field("value")
///             .pivot("key"),
///     )
/// ```
#[derive(Debug, Clone)]
pub struct Subtable {
    /// Field of the parent record
    pub field: String,

    /// The child record type
    pub child: RecordType,

    /// Child column holding the value; defaults to the parent field name
    pub value_field: Option<String>,

    /// Child column used as the map key
    pub pivot: Option<String>,

    pub selectors: IndexMap<String, Value>,
}

/// A subtable declaration compiled against its child's table model.
#[derive(Debug)]
pub struct SubtableModel {
    /// Field of the parent record
    pub field: String,

    /// The child table model
    pub model: Arc<TableModel>,

    pub value_field: String,

    pub pivot: Option<String>,

    pub selectors: IndexMap<String, Value>,

    /// The parent's identity column, set once when connected
    connector: OnceLock<String>,
}

impl Subtable {
    pub fn new(field: impl Into<String>, child: RecordType) -> Subtable {
        Subtable {
            field: field.into(),
            child,
            value_field: None,
            pivot: None,
            selectors: IndexMap::new(),
        }
    }

    pub fn value_field(mut self, field: impl Into<String>) -> Subtable {
        self.value_field = Some(field.into());
        self
    }

    pub fn pivot(mut self, field: impl Into<String>) -> Subtable {
        self.pivot = Some(field.into());
        self
    }

    pub fn selector(mut self, column: impl Into<String>, value: impl Into<Value>) -> Subtable {
        self.selectors.insert(column.into(), value.into());
        self
    }
}

impl SubtableModel {
    /// Builds the subtable against the compiled child model and validates
    /// the fields it names.
    pub fn new(decl: &Subtable, model: Arc<TableModel>) -> Result<SubtableModel> {
        let subtable = SubtableModel {
            field: decl.field.clone(),
            model,
            value_field: decl
                .value_field
                .clone()
                .unwrap_or_else(|| decl.field.clone()),
            pivot: decl.pivot.clone(),
            selectors: decl.selectors.clone(),
            connector: OnceLock::new(),
        };

        subtable.validate()?;
        Ok(subtable)
    }

    /// Checks that every field the subtable uses is a column of the child.
    pub fn validate(&self) -> Result<()> {
        let table = &self.model.table_name;

        if !self.model.has_column(&self.value_field) {
            return Err(Error::invalid_subtable_field(
                "value",
                &self.value_field,
                table,
            ));
        }

        if let Some(pivot) = &self.pivot {
            if !self.model.has_column(pivot) {
                return Err(Error::invalid_subtable_field("pivot", pivot, table));
            }
        }

        if let Some(connector) = self.connector.get() {
            if !self.model.has_column(connector) {
                return Err(Error::invalid_subtable_field("connector", connector, table));
            }
        }

        for column in self.selectors.keys() {
            if !self.model.has_column(column) {
                return Err(Error::invalid_subtable_field("selector", column, table));
            }
        }

        self.check_roles(self.connector.get().map(String::as_str))
    }

    /// Every child column written on store may only have one role.
    fn check_roles(&self, connector: Option<&str>) -> Result<()> {
        let mut roles: Vec<(&str, &str)> = vec![("value", self.value_field.as_str())];
        roles.extend(self.pivot.as_deref().map(|pivot| ("pivot", pivot)));
        roles.extend(connector.map(|connector| ("connector", connector)));
        roles.extend(self.selectors.keys().map(|column| ("selector", column.as_str())));

        for (i, (role, column)) in roles.iter().enumerate() {
            if let Some((other, _)) = roles[..i].iter().find(|(_, c)| c == column) {
                return Err(Error::overlapping_subtable_field(
                    &self.model.table_name,
                    column,
                    other,
                    role,
                ));
            }
        }

        Ok(())
    }

    /// Checks that the subtable can be connected to `parent` without
    /// changing anything.
    pub fn check_connect(&self, parent: &TableModel) -> Result<()> {
        if let Some(connector) = self.connector.get() {
            return Err(Error::already_connected(
                &self.model.table_name,
                connector,
            ));
        }

        let connector = &parent.identity_field;

        if !self.model.has_column(connector) {
            return Err(Error::no_foreign_key_path(
                &self.model.table_name,
                &parent.table_name,
                connector,
            ));
        }

        self.check_roles(Some(connector))
    }

    /// Connects the subtable to its parent.
    ///
    /// The child must have a column named after the parent's identity
    /// column; it becomes the connector and is registered as a foreign key
    /// of the child. A subtable can only be connected once.
    pub fn connect(&self, parent: &TableModel) -> Result<()> {
        self.check_connect(parent)?;

        let connector = &parent.identity_field;

        if let Err(connector) = self.connector.set(connector.clone()) {
            return Err(Error::already_connected(
                &self.model.table_name,
                connector,
            ));
        }

        self.model.add_foreign_key(super::ForeignKey {
            column: connector.clone(),
            references: connector.clone(),
            table: parent.table_name.clone(),
            target: parent.id,
        });

        self.validate()
    }

    pub fn is_connected(&self) -> bool {
        self.connector.get().is_some()
    }

    /// The child column referencing the parent.
    pub fn connector(&self) -> Result<&str> {
        self.connector
            .get()
            .map(String::as_str)
            .ok_or_else(|| Error::subtable_not_attached(&self.model.table_name))
    }

    /// The type the parent must declare for the subtable field:
    /// `Map(pivot, value)` with a pivot, `List(value)` otherwise.
    pub fn expected_type(&self) -> FieldType {
        let value = self.declared_type(&self.value_field);

        match &self.pivot {
            Some(pivot) => FieldType::map(self.declared_type(pivot), value),
            None => FieldType::list(value),
        }
    }

    fn declared_type(&self, column: &str) -> FieldType {
        self.model
            .column(column)
            .map(|column| column.ty.clone())
            .unwrap_or(FieldType::Null)
    }
}
