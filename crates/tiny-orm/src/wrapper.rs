use crate::{ModelOps, Result};

/// A model bound to a cursor.
///
/// The wrapper holds no state of its own. Every call is forwarded to the
/// model unchanged, with the bound cursor as its first argument.
#[derive(Debug)]
pub struct ModelWrapper<'c, M, C: ?Sized> {
    model: &'c M,
    cursor: &'c mut C,
}

impl<'c, M, C> ModelWrapper<'c, M, C>
where
    M: ModelOps<C>,
    C: ?Sized,
{
    pub fn new(model: &'c M, cursor: &'c mut C) -> Self {
        ModelWrapper { model, cursor }
    }

    pub fn model(&self) -> &'c M {
        self.model
    }

    pub fn all(&mut self) -> Result<Vec<M::Record>> {
        self.model.all(self.cursor)
    }

    pub fn get(&mut self, id: i64) -> Result<Option<M::Record>> {
        self.model.get(self.cursor, id)
    }

    pub fn get_many(&mut self, ids: &[i64]) -> Result<Vec<M::Record>> {
        self.model.get_many(self.cursor, ids)
    }

    pub fn store(&mut self, record: &mut M::Record) -> Result<bool> {
        self.model.store(self.cursor, record)
    }
}
