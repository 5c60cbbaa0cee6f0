mod descriptor;
pub use descriptor::QueryDescriptor;

mod filter;
pub use filter::Filter;

mod query;
pub use query::Query;

mod select;
pub use select::Select;

pub use tabula_core::stmt::{Direction, Expr, Formula, Projection, Sort};

use tabula_core::schema::Field;

/// Sort ascending by `field`.
pub fn asc(field: &Field) -> Sort {
    Sort::asc(field)
}

/// Sort descending by `field`.
pub fn desc(field: &Field) -> Sort {
    Sort::desc(field)
}
