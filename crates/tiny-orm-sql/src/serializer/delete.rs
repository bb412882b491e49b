use super::{Formatter, Ident, ToSql};

use crate::stmt::Delete;

impl ToSql for &Delete {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = Ident(&self.table);

        fmt!(f, "DELETE FROM " table);

        let filter = &self.filter;

        if !filter.is_empty() {
            fmt!(f, " WHERE " filter);
        }
    }
}
