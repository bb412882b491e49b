use super::{Comma, Formatter, Ident, ToSql};

use crate::stmt::{ColumnDef, CreateTable, ForeignKeyDef};

impl ToSql for &CreateTable {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = Ident(&self.name);

        fmt!(f, "CREATE TABLE IF NOT EXISTS " name " (");

        let mut s = "";
        for column in &self.columns {
            fmt!(f, s column);
            s = ", ";
        }

        for foreign_key in &self.foreign_keys {
            fmt!(f, s foreign_key);
            s = ", ";
        }

        for columns in &self.unique {
            let columns = Comma(columns.iter().map(Ident));
            fmt!(f, s "UNIQUE (" columns ")");
            s = ", ";
        }

        fmt!(f, ")");
    }
}

impl ToSql for &ColumnDef {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = Ident(&self.name);
        let definition = &self.definition;

        fmt!(f, name " " definition);
    }
}

impl ToSql for &ForeignKeyDef {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let column = Ident(&self.column);
        let table = Ident(&self.table);
        let references = Ident(&self.references);

        fmt!(f, "FOREIGN KEY (" column ") REFERENCES " table " (" references ")");
    }
}
