use super::Field;
use crate::{stmt::Projection, Error, Result};

use indexmap::IndexMap;

/// A remote table and the logical fields declared on it.
///
/// The remote table name is kept next to the field map, never inside it, so
/// walking the fields only ever yields fields.
#[derive(Debug, Clone)]
pub struct Table {
    remote_name: String,
    fields: IndexMap<String, Field>,
}

impl Table {
    /// Declares a table. Later entries replace earlier ones with the same
    /// logical name.
    pub fn new<K>(remote_name: impl Into<String>, fields: impl IntoIterator<Item = (K, Field)>) -> Self
    where
        K: Into<String>,
    {
        Self {
            remote_name: remote_name.into(),
            fields: fields
                .into_iter()
                .map(|(name, field)| (name.into(), field))
                .collect(),
        }
    }

    pub fn remote_name(&self) -> &str {
        &self.remote_name
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Iterates `(logical name, field)` pairs in declaration order.
    pub fn fields(&self) -> impl ExactSizeIterator<Item = (&str, &Field)> + '_ {
        self.fields.iter().map(|(name, field)| (name.as_str(), field))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Projection over every field of the table.
    pub fn projection(&self) -> Projection {
        self.fields
            .iter()
            .map(|(name, field)| (name.clone(), field.clone()))
            .collect()
    }

    /// Builds a projection from logical field names of this table.
    pub fn project<I, S>(&self, names: I) -> Result<Projection>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut projection = Projection::new();

        for name in names {
            let name = name.as_ref();
            let Some(field) = self.fields.get(name) else {
                return Err(Error::invalid_statement(format!(
                    "unknown field `{name}` in table `{}`",
                    self.remote_name
                )));
            };
            projection = projection.field(name, field);
        }

        Ok(projection)
    }
}
