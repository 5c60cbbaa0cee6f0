pub mod base;
pub use base::Base;

pub mod driver;

pub mod formula;
pub use formula::compile;

mod row;
pub use row::{Attachment, Row, Thumbnail, Thumbnails};

pub mod schema;
pub use schema::{
    attachment, boolean, multiple_attachments, number, table, text, Field, FieldTy, Schema, Table,
};

pub mod stmt;
pub use stmt::{asc, desc, Filter, Projection, Query, QueryDescriptor, Select, Sort};

pub use tabula_core::{exprs, Error, Result};
