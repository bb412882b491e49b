use super::{Comma, Formatter, Ident, Placeholder, ToSql};

use crate::stmt::Insert;

impl ToSql for &Insert {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = Ident(&self.table);

        if self.values.is_empty() {
            fmt!(f, "INSERT INTO " table " DEFAULT VALUES");
            return;
        }

        let columns = Comma(self.values.iter().map(|(column, _)| Ident(column)));
        let values = Comma(
            self.values
                .iter()
                .map(|(name, value)| Placeholder { name, value }),
        );

        fmt!(f, "INSERT INTO " table " (" columns ") VALUES (" values ")");

        let Some(target) = &self.on_conflict else {
            return;
        };

        fmt!(f, " ON CONFLICT (" Ident(target) ")");

        let mut updates = self
            .values
            .iter()
            .map(|(column, _)| column)
            .filter(|column| *column != target)
            .peekable();

        if updates.peek().is_none() {
            fmt!(f, " DO NOTHING");
            return;
        }

        fmt!(f, " DO UPDATE SET ");

        let mut s = "";
        for column in updates {
            fmt!(f, s Ident(column) " = excluded." Ident(column));
            s = ", ";
        }
    }
}
