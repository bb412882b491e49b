use heck::ToSnakeCase;

/// A record name split into its snake case parts.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Name {
    pub parts: Vec<String>,
}

impl Name {
    pub fn new(src: &str) -> Self {
        let snake = src.to_snake_case();
        let parts = snake.split('_').map(String::from).collect();
        Self { parts }
    }

    pub fn snake_case(&self) -> String {
        self.parts.join("_")
    }

    /// Name of the identity column of the table: `MainTable` → `main_table_id`.
    pub fn identity_column(&self) -> String {
        format!("{}_id", self.snake_case())
    }
}

/// Returns `true` if `field` is the identity field of the record `table`.
///
/// Both the snake cased form (`main_table_id`) and the plain lowercased form
/// (`maintable_id`) are accepted, ignoring case.
pub(crate) fn is_identity_field(table: &str, field: &str) -> bool {
    let snake = Name::new(table).identity_column();
    let flat = format!("{}_id", table.to_lowercase());

    field.eq_ignore_ascii_case(&snake) || field.eq_ignore_ascii_case(&flat)
}
