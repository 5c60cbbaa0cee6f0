use super::{Filter, Projection, QueryDescriptor, Sort};
use crate::{Base, Result, Row, Table};

use serde::de::DeserializeOwned;
use tabula_core::driver::{ListOptions, SortSpec};

/// A query bound to a table.
///
/// Configuration methods consume and return the query so calls can be chained.
/// Nothing is sent until [`exec`](Query::exec) (or [`build`](Query::build) +
/// [`Base::execute`]) runs; the same query can be executed any number of
/// times and each run reads the configuration afresh.
#[derive(Debug, Clone)]
pub struct Query {
    base: Base,
    table: Table,

    /// `None` selects every field of `table`
    projection: Option<Projection>,

    filter: Option<Filter>,
    sorts: Vec<Sort>,
    view: Option<String>,
}

impl Query {
    pub(crate) fn new(base: Base, table: Table, projection: Option<Projection>) -> Self {
        Self {
            base,
            table,
            projection,
            filter: None,
            sorts: vec![],
            view: None,
        }
    }

    /// Sets the filter formula, replacing any previous one.
    pub fn filter(mut self, filter: impl Into<Filter>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Appends sort keys after the ones already configured.
    pub fn order_by(mut self, sorts: impl IntoIterator<Item = Sort>) -> Self {
        self.sorts.extend(sorts);
        self
    }

    /// Sets the view to read from, replacing any previous one.
    pub fn view(mut self, name: impl Into<String>) -> Self {
        self.view = Some(name.into());
        self
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// The projection rows are decoded with: the selected subset, or every
    /// field of the table.
    pub fn projection(&self) -> Projection {
        match &self.projection {
            Some(projection) => projection.clone(),
            None => self.table.projection(),
        }
    }

    /// Assembles the request from the current configuration.
    ///
    /// Options that were never configured stay `None`, so they are left out
    /// of the request. A field list is sent only for an explicit, non-empty
    /// projection; otherwise the record store returns every field and rows
    /// are decoded with the whole table.
    pub fn build(&self) -> QueryDescriptor {
        let projection = self.projection();

        let sort = if self.sorts.is_empty() {
            None
        } else {
            Some(
                self.sorts
                    .iter()
                    .map(|sort| SortSpec {
                        field: sort.field.remote_name().to_string(),
                        direction: sort.direction,
                    })
                    .collect(),
            )
        };

        let fields = self
            .projection
            .as_ref()
            .filter(|projection| !projection.is_empty())
            .map(Projection::remote_names);

        QueryDescriptor {
            table: self.table.remote_name().to_string(),
            options: ListOptions {
                filter_by_formula: self.filter.as_ref().map(|f| f.as_str().to_string()),
                sort,
                fields,
                view: self.view.clone(),
            },
            projection,
        }
    }

    /// Runs the query and decodes every returned record.
    pub async fn exec(&self) -> Result<Vec<Row>> {
        self.base.execute(&self.build()).await
    }

    /// Runs the query and deserializes every row into `T`.
    ///
    /// `T` sees an object with `id` plus one key per projected logical field
    /// that has a value.
    pub async fn exec_as<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        self.exec()
            .await?
            .iter()
            .map(Row::deserialize::<T>)
            .collect()
    }
}
