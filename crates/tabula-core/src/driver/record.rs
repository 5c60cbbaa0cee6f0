use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A record as returned by the record store, keyed by remote field names.
///
/// The remote service leaves empty fields out of a record entirely, so a
/// missing key is the normal representation of "no value".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub id: String,

    #[serde(default)]
    pub fields: Map<String, Value>,

    #[serde(
        rename = "createdTime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_time: Option<String>,
}

impl RawRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Sets a field value, builder style.
    pub fn with(mut self, remote_name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(remote_name.into(), value.into());
        self
    }

    pub fn get(&self, remote_name: &str) -> Option<&Value> {
        self.fields.get(remote_name)
    }
}
