use crate::stmt::Direction;

use serde::{Deserialize, Serialize};

/// List the records of one table.
#[derive(Debug, Clone, PartialEq)]
pub struct ListRecords {
    /// Remote table name
    pub table: String,

    pub options: ListOptions,
}

/// Request options for [`ListRecords`].
///
/// Unset options are left out of the serialized form entirely; they are never
/// sent as empty or null placeholders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOptions {
    /// Formula records must satisfy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_by_formula: Option<String>,

    /// Sort order, most significant key first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<Vec<SortSpec>>,

    /// Remote field names to return
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,

    /// Named view to read from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Remote field name
    pub field: String,
    pub direction: Direction,
}
