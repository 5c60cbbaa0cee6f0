use std::fmt;

/// The type tag of a remote field.
///
/// The tag decides how a decoded value is read back: `Text` as a string,
/// `Number` as a float, `Boolean` as a bool, `Attachment` as a single
/// attachment record and `MultipleAttachments` as an ordered list of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldTy {
    Text,
    Number,
    Boolean,
    Attachment,
    MultipleAttachments,
}

impl fmt::Display for FieldTy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use FieldTy::*;

        f.write_str(match self {
            Text => "text",
            Number => "number",
            Boolean => "boolean",
            Attachment => "attachment",
            MultipleAttachments => "multipleAttachments",
        })
    }
}
