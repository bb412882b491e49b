use super::{Formatter, ToSql};

use tiny_orm_core::stmt::Value;

/// A named placeholder, `:name`, bound to `value`.
pub(super) struct Placeholder<'a> {
    pub(super) name: &'a str,
    pub(super) value: &'a Value,
}

impl ToSql for Placeholder<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push(':');
        f.dst.push_str(self.name);
        f.params.insert(self.name.to_string(), self.value.clone());
    }
}
