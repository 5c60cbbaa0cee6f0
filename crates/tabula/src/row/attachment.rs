use crate::{Error, Result};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A file attached to a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: String,
    pub url: String,
    pub filename: String,

    /// Size in bytes
    pub size: u64,

    /// MIME type
    #[serde(rename = "type")]
    pub mime_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnails: Option<Thumbnails>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thumbnails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small: Option<Thumbnail>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large: Option<Thumbnail>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full: Option<Thumbnail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

impl Attachment {
    pub(super) fn from_value(value: &Value) -> Result<Self> {
        Attachment::deserialize(value).map_err(|_| Error::type_conversion(value, "Attachment"))
    }
}
