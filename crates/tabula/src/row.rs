mod attachment;
pub use attachment::{Attachment, Thumbnail, Thumbnails};

use crate::{Error, Result};

use indexmap::IndexMap;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tabula_core::{driver::RawRecord, err, stmt::Projection};

/// A decoded record: the record id plus one entry per projected logical
/// field.
///
/// Values are passed through as the record store returned them. Every
/// projected field has an entry; it is `None` when the record has no value for
/// it. Fields outside the projection have no entry and read as absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub id: String,

    #[serde(flatten)]
    fields: IndexMap<String, Option<Value>>,
}

impl Row {
    pub fn new<K>(id: impl Into<String>, fields: impl IntoIterator<Item = (K, Option<Value>)>) -> Self
    where
        K: Into<String>,
    {
        Self {
            id: id.into(),
            fields: fields
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }

    pub(crate) fn decode(record: &RawRecord, projection: &Projection) -> Self {
        let fields = projection
            .iter()
            .map(|(name, field)| (name.to_string(), record.get(field.remote_name()).cloned()))
            .collect();

        Self {
            id: record.id.clone(),
            fields,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns `true` if `name` was part of the projection.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// The raw value of a logical field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name).and_then(Option::as_ref)
    }

    /// Iterates `(logical name, value)` in projection order.
    pub fn fields(&self) -> impl ExactSizeIterator<Item = (&str, Option<&Value>)> + '_ {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_ref()))
    }

    pub fn text(&self, name: &str) -> Result<Option<&str>> {
        self.read(name, |value| match value {
            Value::String(text) => Ok(Some(text.as_str())),
            _ => Err(Error::type_conversion(value, "String")),
        })
    }

    pub fn number(&self, name: &str) -> Result<Option<f64>> {
        self.read(name, |value| match value.as_f64() {
            Some(number) => Ok(Some(number)),
            None => Err(Error::type_conversion(value, "f64")),
        })
    }

    pub fn boolean(&self, name: &str) -> Result<Option<bool>> {
        self.read(name, |value| match value {
            Value::Bool(flag) => Ok(Some(*flag)),
            _ => Err(Error::type_conversion(value, "bool")),
        })
    }

    /// Reads a single attachment. The record store reports attachment fields
    /// as arrays, so a one-element array is accepted as well as a bare object.
    pub fn attachment(&self, name: &str) -> Result<Option<Attachment>> {
        self.read(name, |value| match value {
            Value::Object(_) => Attachment::from_value(value).map(Some),
            Value::Array(items) => match &items[..] {
                [] => Ok(None),
                [item] => Attachment::from_value(item).map(Some),
                _ => Err(Error::type_conversion(value, "Attachment")),
            },
            _ => Err(Error::type_conversion(value, "Attachment")),
        })
    }

    pub fn attachments(&self, name: &str) -> Result<Option<Vec<Attachment>>> {
        self.read(name, |value| match value {
            Value::Array(items) => items
                .iter()
                .map(Attachment::from_value)
                .collect::<Result<Vec<_>>>()
                .map(Some),
            _ => Err(Error::type_conversion(value, "Vec<Attachment>")),
        })
    }

    /// Deserializes the whole row, `id` included, into `T`.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        let mut object = serde_json::Map::with_capacity(self.fields.len() + 1);
        object.insert("id".to_string(), Value::String(self.id.clone()));

        for (name, value) in &self.fields {
            if let Some(value) = value {
                object.insert(name.clone(), value.clone());
            }
        }

        Ok(serde_json::from_value(Value::Object(object))?)
    }

    /// Runs `read` on a present value. A failure names the field it came
    /// from; an absent or `null` value reads as `None`.
    fn read<'a, T>(
        &'a self,
        name: &str,
        read: impl FnOnce(&'a Value) -> Result<Option<T>>,
    ) -> Result<Option<T>> {
        match self.get(name).filter(|value| !value.is_null()) {
            None => Ok(None),
            Some(value) => read(value).map_err(|e| e.context(err!("field `{name}`"))),
        }
    }
}
