use super::{compile::compile, FieldType, ModelId, RecordType, TableModel};
use crate::{Error, Result};

use std::{
    cell::RefCell,
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError},
};
use tracing::{debug, trace};

/// Caches compiled table models, one per record type.
///
/// Compiling the same record type twice returns the same `Arc`. When several
/// threads ask for a type that has not been compiled yet, one compiles it
/// while the others wait for the result.
#[derive(Debug, Default)]
pub struct Registry {
    slots: Mutex<HashMap<ModelId, Arc<Slot>>>,
}

#[derive(Debug, Default)]
struct Slot {
    model: Mutex<Option<Arc<TableModel>>>,
}

thread_local! {
    /// Types being compiled on this thread, innermost last.
    static COMPILING: RefCell<Vec<ModelId>> = const { RefCell::new(Vec::new()) };
}

struct CompileGuard(ModelId);

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    /// The process-wide registry.
    pub fn global() -> &'static Registry {
        static GLOBAL: OnceLock<Registry> = OnceLock::new();
        GLOBAL.get_or_init(Registry::new)
    }

    /// Returns the table model of a record type, compiling it on first use.
    pub fn get_or_compile(&self, ty: &RecordType) -> Result<Arc<TableModel>> {
        let slot = lock(&self.slots).entry(ty.id).or_default().clone();

        // The slot lock is held while compiling, so compiling the same type
        // again on this thread would never return.
        if COMPILING.with(|compiling| compiling.borrow().contains(&ty.id)) {
            return Err(Error::invalid_schema(format!(
                "`{}` is used as a subtable of itself",
                ty.name()
            )));
        }

        let mut model = lock(&slot.model);

        if let Some(model) = &*model {
            trace!(table = %model.table_name, "table model cache hit");
            return Ok(model.clone());
        }

        let compiled = {
            let _guard = CompileGuard::enter(ty.id);
            Arc::new(compile(self, ty)?)
        };

        debug!(
            table = %compiled.table_name,
            columns = ?compiled.table_fields(),
            subtables = compiled.subtables.len(),
            "compiled table model"
        );

        *model = Some(compiled.clone());
        Ok(compiled)
    }

    /// Returns the table model of a declared field type, which must be a
    /// record type.
    pub fn model_of(&self, ty: &FieldType) -> Result<Arc<TableModel>> {
        match ty {
            FieldType::Record(record) => self.get_or_compile(record),
            _ => Err(Error::not_a_record_type(ty.to_string())),
        }
    }

    /// Returns the table model of a record type if it has been compiled.
    pub fn get(&self, id: ModelId) -> Option<Arc<TableModel>> {
        let slot = lock(&self.slots).get(&id)?.clone();
        let model = lock(&slot.model).clone();
        model
    }

    /// Drops every cached model.
    pub fn clear(&self) {
        lock(&self.slots).clear();
        debug!("table model registry cleared");
    }
}

impl CompileGuard {
    fn enter(id: ModelId) -> CompileGuard {
        COMPILING.with(|compiling| compiling.borrow_mut().push(id));
        CompileGuard(id)
    }
}

impl Drop for CompileGuard {
    fn drop(&mut self) {
        COMPILING.with(|compiling| {
            let mut compiling = compiling.borrow_mut();
            if let Some(pos) = compiling.iter().rposition(|id| *id == self.0) {
                compiling.remove(pos);
            }
        });
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
