use super::Direction;
use crate::schema::Field;

/// Orders query results by one field.
#[derive(Debug, Clone, PartialEq)]
pub struct Sort {
    pub field: Field,
    pub direction: Direction,
}

impl Sort {
    pub fn asc(field: &Field) -> Self {
        Self {
            field: field.clone(),
            direction: Direction::Asc,
        }
    }

    pub fn desc(field: &Field) -> Self {
        Self {
            field: field.clone(),
            direction: Direction::Desc,
        }
    }
}
