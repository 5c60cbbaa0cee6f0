use super::Error;

/// Error when a decoded field value does not have the shape its field type
/// promises.
#[derive(Debug)]
pub(super) struct TypeConversionError {
    pub(super) found: &'static str,
    pub(super) to_type: &'static str,
}

impl std::error::Error for TypeConversionError {}

impl core::fmt::Display for TypeConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot convert {} to {}", self.found, self.to_type)
    }
}

impl Error {
    /// Creates a type conversion error for a remote value that could not be
    /// read as `to_type`.
    pub fn type_conversion(value: &serde_json::Value, to_type: &'static str) -> Error {
        use serde_json::Value::*;

        let found = match value {
            Null => "null",
            Bool(_) => "boolean",
            Number(_) => "number",
            String(_) => "string",
            Array(_) => "array",
            Object(_) => "object",
        };

        Error::from(super::ErrorKind::TypeConversion(TypeConversionError {
            found,
            to_type,
        }))
    }

    /// Returns `true` if this error is a type conversion error, or was caused by one.
    pub fn is_type_conversion(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::TypeConversion(_)))
    }
}
