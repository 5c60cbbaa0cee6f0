use super::Formatter;

macro_rules! fmt {
    ($f:expr, $( $fragments:expr ),* $(,)?) => {{
        $(
            $fragments.to_formula($f);
        )*
    }};
}

pub(super) trait ToFormula {
    fn to_formula(self, f: &mut Formatter<'_>);
}

impl ToFormula for &str {
    fn to_formula(self, f: &mut Formatter<'_>) {
        f.dst.push_str(self);
    }
}
