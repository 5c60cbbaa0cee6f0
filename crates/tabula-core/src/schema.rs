mod field;
pub use field::Field;

mod table;
pub use table::Table;

mod ty;
pub use ty::FieldTy;

use indexmap::IndexMap;

/// A set of table definitions, keyed by remote table name.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    tables: IndexMap<String, Table>,
}

impl Schema {
    pub fn from_tables(tables: impl IntoIterator<Item = Table>) -> Self {
        Self {
            tables: tables
                .into_iter()
                .map(|table| (table.remote_name().to_string(), table))
                .collect(),
        }
    }

    /// Looks up a table by its remote name.
    pub fn table(&self, remote_name: &str) -> Option<&Table> {
        self.tables.get(remote_name)
    }

    pub fn tables(&self) -> impl ExactSizeIterator<Item = &Table> + '_ {
        self.tables.values()
    }
}
