use tabula_core::stmt::{Expr, Formula};

/// A rendered filter formula.
///
/// Built from an expression tree (compiled on conversion) or from formula text
/// the caller wrote by hand (used as is).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter(String);

impl Filter {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<Expr> for Filter {
    fn from(value: Expr) -> Self {
        Self::from(&value)
    }
}

impl From<&Expr> for Filter {
    fn from(value: &Expr) -> Self {
        Self(crate::compile(value).into_string())
    }
}

impl From<Formula> for Filter {
    fn from(value: Formula) -> Self {
        Self(value.into_string())
    }
}

impl From<String> for Filter {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Filter {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
