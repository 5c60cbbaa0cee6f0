use crate::schema::Field;

use indexmap::IndexMap;

/// The logical fields a query fetches and decodes, in order.
///
/// A projection is not tied to a table: it maps logical names to whichever
/// field handles the caller hands it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Projection {
    fields: IndexMap<String, Field>,
}

impl Projection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field under the given logical name, replacing any previous
    /// field with that name.
    pub fn field(mut self, name: impl Into<String>, field: &Field) -> Self {
        self.insert(name, field.clone());
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, field: Field) {
        self.fields.insert(name.into(), field);
    }

    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Field)> + '_ {
        self.fields.iter().map(|(name, field)| (name.as_str(), field))
    }

    /// Remote names to request from the record store.
    pub fn remote_names(&self) -> Vec<String> {
        self.fields
            .values()
            .map(|field| field.remote_name().to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Field)> for Projection {
    fn from_iter<T: IntoIterator<Item = (K, Field)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, field)| (name.into(), field))
                .collect(),
        }
    }
}
