use super::{Projection, Query};
use crate::{Base, Table};

/// A query that has not been pointed at a table yet.
#[derive(Debug, Clone)]
pub struct Select {
    base: Base,
    projection: Option<Projection>,
}

impl Select {
    pub(crate) fn new(base: Base, projection: Option<Projection>) -> Self {
        Self { base, projection }
    }

    /// Binds the query to a table.
    #[allow(clippy::should_implement_trait)]
    pub fn from(self, table: &Table) -> Query {
        Query::new(self.base, table.clone(), self.projection)
    }
}
