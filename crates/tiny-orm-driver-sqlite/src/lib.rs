mod value;
pub(crate) use value::Value;

use rusqlite::Connection as RusqliteConnection;
use std::path::{Path, PathBuf};
use tiny_orm_core::{
    stmt::{self, Params},
    Cursor, Error, Result,
};
use tracing::{debug, trace};
use url::Url;

/// SQLite configuration.
///
/// ```ignore
/// let sqlite = Sqlite::new("sqlite::memory:")?.foreign_keys(true);
/// let mut connection = sqlite.connect()?;
/// ```
#[derive(Debug, Clone)]
pub struct Sqlite {
    location: Location,

    /// Value of `PRAGMA foreign_keys` on new connections
    foreign_keys: bool,
}

#[derive(Debug, Clone)]
enum Location {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver from a connection URL, either
    /// `sqlite::memory:` or `sqlite:<path>`.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(|err| {
            Error::invalid_connection_url(format!("{err}; url={url_str}"))
        })?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        match url.path() {
            "" => Err(Error::invalid_connection_url(format!(
                "connection URL does not name a database; url={url_str}"
            ))),
            ":memory:" => Ok(Self::in_memory()),
            path => Ok(Self::open(path)),
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self {
            location: Location::InMemory,
            foreign_keys: false,
        }
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            location: Location::File(path.as_ref().to_path_buf()),
            foreign_keys: false,
        }
    }

    /// Enforce foreign key constraints on new connections. Off by default,
    /// as in SQLite itself.
    pub fn foreign_keys(mut self, enabled: bool) -> Self {
        self.foreign_keys = enabled;
        self
    }

    pub fn url(&self) -> String {
        match &self.location {
            Location::InMemory => "sqlite::memory:".to_string(),
            Location::File(path) => format!("sqlite:{}", path.display()),
        }
    }

    /// Opens a connection. Every in-memory connection is a fresh database.
    pub fn connect(&self) -> Result<Connection> {
        let connection = match &self.location {
            Location::File(path) => RusqliteConnection::open(path),
            Location::InMemory => RusqliteConnection::open_in_memory(),
        }
        .map_err(Error::driver_operation_failed)?;

        let pragma = if self.foreign_keys {
            "PRAGMA foreign_keys = ON"
        } else {
            "PRAGMA foreign_keys = OFF"
        };
        connection
            .execute_batch(pragma)
            .map_err(Error::driver_operation_failed)?;

        debug!(url = %self.url(), foreign_keys = self.foreign_keys, "connected to SQLite");

        Ok(Connection::new(connection))
    }
}

/// A SQLite connection, used as the ORM's cursor.
///
/// Rows produced by a statement are buffered until the next statement runs.
#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,

    /// Rows returned by the last statement
    rows: Vec<Vec<stmt::Value>>,

    last_insert_id: Option<i64>,
}

impl Connection {
    pub fn new(connection: RusqliteConnection) -> Self {
        Self {
            connection,
            rows: vec![],
            last_insert_id: None,
        }
    }

    pub fn in_memory() -> Result<Self> {
        Sqlite::in_memory().connect()
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Sqlite::open(path).connect()
    }

    /// The underlying `rusqlite` connection.
    pub fn inner(&self) -> &RusqliteConnection {
        &self.connection
    }
}

impl Cursor for Connection {
    fn execute(&mut self, sql: &str, params: &Params) -> Result<()> {
        self.rows.clear();

        let mut stmt = self
            .connection
            .prepare_cached(sql)
            .map_err(Error::driver_operation_failed)?;

        for (name, value) in params {
            let index = stmt
                .parameter_index(&format!(":{name}"))
                .map_err(Error::driver_operation_failed)?;

            // Parameters the statement does not use are ignored
            let Some(index) = index else {
                continue;
            };

            stmt.raw_bind_parameter(index, Value::from(value.clone()))
                .map_err(Error::driver_operation_failed)?;
        }

        let width = stmt.column_count();

        if width == 0 {
            let count = stmt.raw_execute().map_err(Error::driver_operation_failed)?;
            self.last_insert_id = Some(self.connection.last_insert_rowid()).filter(|id| *id != 0);

            trace!(sql, count, "executed statement");
            return Ok(());
        }

        let mut rows = stmt.raw_query();

        while let Some(row) = rows.next().map_err(Error::driver_operation_failed)? {
            let mut items = Vec::with_capacity(width);

            for index in 0..width {
                let value = Value::from_sql(row, index).map_err(Error::driver_operation_failed)?;
                items.push(value.into_inner());
            }

            self.rows.push(items);
        }

        trace!(sql, rows = self.rows.len(), "executed query");
        Ok(())
    }

    fn fetch_all(&mut self) -> Result<Vec<Vec<stmt::Value>>> {
        Ok(std::mem::take(&mut self.rows))
    }

    fn last_insert_id(&self) -> Option<i64> {
        self.last_insert_id
    }
}
