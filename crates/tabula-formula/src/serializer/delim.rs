use super::{Formatter, ToFormula};

/// Comma delimited, with a single space after each comma
pub(super) struct Comma<L>(pub(super) L);

impl<L> ToFormula for Comma<L>
where
    L: IntoIterator,
    L::Item: ToFormula,
{
    fn to_formula(self, f: &mut Formatter<'_>) {
        let mut s = "";
        for i in self.0 {
            fmt!(f, s, i);
            s = ", ";
        }
    }
}
