//! Schema declaration.
//!
//! ```
//! use tabula::{number, table, text};
//!
//! let users = table(
//!     "Users",
//!     [("name", text("Full Name")), ("age", number("Years Old"))],
//! );
//!
//! assert_eq!(users.remote_name(), "Users");
//! assert_eq!(users.len(), 2);
//! ```

pub use tabula_core::schema::{Field, FieldTy, Schema, Table};

pub fn text(remote_name: impl Into<String>) -> Field {
    Field::new(FieldTy::Text, remote_name)
}

pub fn number(remote_name: impl Into<String>) -> Field {
    Field::new(FieldTy::Number, remote_name)
}

pub fn boolean(remote_name: impl Into<String>) -> Field {
    Field::new(FieldTy::Boolean, remote_name)
}

pub fn attachment(remote_name: impl Into<String>) -> Field {
    Field::new(FieldTy::Attachment, remote_name)
}

pub fn multiple_attachments(remote_name: impl Into<String>) -> Field {
    Field::new(FieldTy::MultipleAttachments, remote_name)
}

/// Attaches a remote table name to a set of logical fields.
pub fn table<K>(remote_name: impl Into<String>, fields: impl IntoIterator<Item = (K, Field)>) -> Table
where
    K: Into<String>,
{
    Table::new(remote_name, fields)
}
