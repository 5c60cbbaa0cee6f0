#[macro_use]
mod fmt;
use fmt::ToFormula;

mod delim;
use delim::Comma;

// Fragment serializers
mod expr;
mod value;

use tabula_core::stmt::{Expr, Formula};

/// Serialize an expression tree to formula text.
///
/// Rendering is purely syntactic. Field references are not checked against
/// any table and nothing is sent to the record store.
#[derive(Debug, Default, Clone, Copy)]
pub struct Serializer {
    _p: (),
}

struct Formatter<'a> {
    /// Where to write the serialized formula
    dst: &'a mut String,
}

impl Serializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Panics
    ///
    /// Panics on malformed trees: a non-finite number literal, or a function
    /// node built by hand with the wrong number of arguments.
    pub fn serialize(&self, expr: &Expr) -> Formula {
        let mut ret = String::new();

        let mut f = Formatter { dst: &mut ret };
        expr.to_formula(&mut f);

        Formula::new(ret)
    }
}

/// Serialize `expr` with the default serializer.
pub fn serialize(expr: &Expr) -> Formula {
    Serializer::new().serialize(expr)
}
