use super::{Comma, Formatter, Ident, ToSql};

use crate::stmt::Select;

impl ToSql for &Select {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let columns = Comma(self.columns.iter().map(Ident));
        let table = Ident(&self.table);

        fmt!(f, "SELECT " columns " FROM " table);

        let filter = &self.filter;

        if !filter.is_empty() {
            fmt!(f, " WHERE " filter);
        }
    }
}
