use super::{ExprBinaryOp, ExprFunc, Formula, Value};
use crate::schema::Field;

/// A node of the formula expression tree.
///
/// Expressions are plain values. They may reference fields of any table; no
/// check is made that the fields belong together.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Comparison, `(lhs OP rhs)`
    BinaryOp(ExprBinaryOp),

    /// Reference to a field, `{Remote Name}`
    Field(Field),

    /// Pre-rendered formula text
    Formula(Formula),

    /// Function call
    Func(ExprFunc),

    /// Literal
    Value(Value),
}

impl Expr {
    pub fn field(field: &Field) -> Self {
        Self::Field(field.clone())
    }

    pub fn is_field(&self) -> bool {
        matches!(self, Self::Field(_))
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }
}

impl From<Field> for Expr {
    fn from(value: Field) -> Self {
        Self::Field(value)
    }
}

impl From<&Field> for Expr {
    fn from(value: &Field) -> Self {
        Self::Field(value.clone())
    }
}

impl From<Formula> for Expr {
    fn from(value: Formula) -> Self {
        Self::Formula(value)
    }
}

impl From<&Expr> for Expr {
    fn from(value: &Expr) -> Self {
        value.clone()
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

macro_rules! impl_from_literal {
    ( $( $t:ty ),* ) => {
        $(
            impl From<$t> for Expr {
                fn from(value: $t) -> Self {
                    Self::Value(Value::from(value))
                }
            }
        )*
    };
}

impl_from_literal!(&str, String, &String, i8, i16, i32, i64, u8, u16, u32, f32, f64);
