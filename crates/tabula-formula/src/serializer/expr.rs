use super::{Comma, Formatter, ToFormula};

use tabula_core::stmt;

impl ToFormula for &stmt::Expr {
    fn to_formula(self, f: &mut Formatter<'_>) {
        use stmt::Expr::*;

        match self {
            BinaryOp(expr) => {
                fmt!(f, "(", &*expr.lhs, " ", expr.op, " ", &*expr.rhs, ")");
            }
            Field(field) => {
                fmt!(f, "{", field.remote_name(), "}");
            }
            Formula(formula) => {
                fmt!(f, formula.as_str());
            }
            Func(expr) => expr.to_formula(f),
            Value(value) => value.to_formula(f),
        }
    }
}

impl ToFormula for &stmt::ExprFunc {
    fn to_formula(self, f: &mut Formatter<'_>) {
        assert!(
            self.func.accepts(self.args.len()),
            "{} does not accept {} argument(s); arity={:?}",
            self.func,
            self.args.len(),
            self.func.arity()
        );

        fmt!(f, self.func.name(), "(", Comma(&self.args), ")");
    }
}

impl ToFormula for stmt::BinaryOp {
    fn to_formula(self, f: &mut Formatter<'_>) {
        f.dst.push_str(self.symbol());
    }
}
