use crate::Predicate;

/// `SELECT <columns> FROM <table> [WHERE <filter>]`
#[derive(Debug, Clone)]
pub struct Select {
    pub table: String,

    pub columns: Vec<String>,

    pub filter: Predicate,
}

impl Select {
    pub fn new<I>(table: impl Into<String>, columns: I) -> Select
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Select {
            table: table.into(),
            columns: columns.into_iter().map(Into::into).collect(),
            filter: Predicate::default(),
        }
    }

    pub fn filter(mut self, filter: Predicate) -> Select {
        self.filter = filter;
        self
    }
}
