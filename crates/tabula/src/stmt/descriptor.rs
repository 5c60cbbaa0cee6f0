use super::Projection;
use tabula_core::driver::{ListOptions, ListRecords};

/// Everything needed to run a query once: the request for the record store
/// and the projection used to decode its response.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryDescriptor {
    /// Remote table name
    pub table: String,

    pub options: ListOptions,

    /// Logical fields decoded into each row
    pub projection: Projection,
}

impl QueryDescriptor {
    pub fn to_operation(&self) -> ListRecords {
        ListRecords {
            table: self.table.clone(),
            options: self.options.clone(),
        }
    }
}
