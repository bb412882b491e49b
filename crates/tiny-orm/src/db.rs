use crate::{Model, Record, Result};

use std::sync::Arc;
use tiny_orm_core::schema::Registry;

/// Entry point for typed models.
///
/// A `Db` looks table models up in a [`Registry`], compiling each record
/// type the first time it is used. [`Db::global`] shares the process-wide
/// registry; [`Db::new`] starts from an empty one, which is what tests that
/// each open a fresh database want, since a table model remembers whether
/// its table was created.
#[derive(Debug, Clone)]
pub struct Db {
    /// `None` for the process-wide registry
    registry: Option<Arc<Registry>>,
}

impl Db {
    pub fn new() -> Db {
        Db::with_registry(Arc::new(Registry::new()))
    }

    pub fn global() -> Db {
        Db { registry: None }
    }

    pub fn with_registry(registry: Arc<Registry>) -> Db {
        Db {
            registry: Some(registry),
        }
    }

    pub fn registry(&self) -> &Registry {
        match &self.registry {
            Some(registry) => registry,
            None => Registry::global(),
        }
    }

    /// The model of record type `R`.
    pub fn model<R: Record>(&self) -> Result<Model<R>> {
        let table = self.registry().get_or_compile(&R::record_type())?;
        Ok(Model::new(table))
    }

    /// Drops every compiled model.
    pub fn clear(&self) {
        self.registry().clear();
    }
}

impl Default for Db {
    fn default() -> Self {
        Db::new()
    }
}
