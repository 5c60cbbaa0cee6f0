mod builder;
pub use builder::Builder;

use crate::{stmt::Select, Projection, QueryDescriptor, Result, Row};

use std::sync::Arc;
use tabula_core::driver::Driver;
use tracing::Instrument;

/// Handle to one remote base, the set of tables behind a record-store client.
///
/// Cloning is cheap; clones share the driver.
#[derive(Debug, Clone)]
pub struct Base {
    shared: Arc<Shared>,
}

#[derive(Debug)]
struct Shared {
    driver: Box<dyn Driver>,

    /// Label used in log spans
    base_id: Option<String>,
}

impl Base {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// A base with default configuration.
    pub fn new(driver: impl Driver) -> Self {
        Self::from_parts(Box::new(driver), None)
    }

    fn from_parts(driver: Box<dyn Driver>, base_id: Option<String>) -> Self {
        Self {
            shared: Arc::new(Shared { driver, base_id }),
        }
    }

    pub fn base_id(&self) -> Option<&str> {
        self.shared.base_id.as_deref()
    }

    pub fn driver(&self) -> &dyn Driver {
        &*self.shared.driver
    }

    /// Starts a query. `None` selects every field of the target table;
    /// `Some(projection)` fetches and decodes exactly the projected fields.
    pub fn select(&self, fields: Option<Projection>) -> Select {
        Select::new(self.clone(), fields)
    }

    /// Sends one request to the record store and decodes the response.
    ///
    /// Errors from the driver are returned exactly as the driver produced
    /// them.
    pub async fn execute(&self, descriptor: &QueryDescriptor) -> Result<Vec<Row>> {
        let span = tracing::debug_span!(
            "list_records",
            table = %descriptor.table,
            base = self.base_id().unwrap_or_default(),
        );

        async {
            let options = &descriptor.options;
            tracing::debug!(
                filter = options.filter_by_formula.as_deref(),
                sorts = options.sort.as_ref().map_or(0, Vec::len),
                fields = options.fields.as_ref().map_or(0, Vec::len),
                view = options.view.as_deref(),
                "listing records"
            );

            let records = self
                .shared
                .driver
                .list_records(descriptor.to_operation())
                .await?;

            let rows: Vec<_> = records
                .iter()
                .map(|record| {
                    tracing::trace!(id = %record.id, "decoding record");
                    Row::decode(record, &descriptor.projection)
                })
                .collect();

            tracing::debug!(records = rows.len(), "decoded records");
            Ok(rows)
        }
        .instrument(span)
        .await
    }
}
