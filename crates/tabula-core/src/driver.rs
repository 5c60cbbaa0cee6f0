pub mod operation;
pub use operation::{ListOptions, ListRecords, SortSpec};

mod record;
pub use record::RawRecord;

use crate::async_trait;

use std::fmt::Debug;

/// The record-store client.
///
/// Implementations own the transport: HTTP calls, credentials, paging and any
/// retry policy. Tabula only hands them a fully assembled request and decodes
/// whatever they return.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// List the records of a table, in the order the remote service returns
    /// them.
    async fn list_records(&self, op: ListRecords) -> crate::Result<Vec<RawRecord>>;
}
