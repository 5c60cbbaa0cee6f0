pub use tabula_core::{
    async_trait,
    driver::{operation, Driver, ListOptions, ListRecords, RawRecord, SortSpec},
};
