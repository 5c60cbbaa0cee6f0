use super::{Formatter, ToFormula};

use std::fmt::Write;
use tabula_core::stmt;

impl ToFormula for &stmt::Value {
    fn to_formula(self, f: &mut Formatter<'_>) {
        use stmt::Value::*;

        match self {
            String(value) => {
                // Quotes are not escaped; a `'` in the literal ends the string
                // early in the rendered formula.
                if value.contains('\'') {
                    tracing::warn!(
                        literal = %value,
                        "string literal contains a single quote and is rendered unescaped"
                    );
                }

                f.dst.push('\'');
                f.dst.push_str(value);
                f.dst.push('\'');
            }
            I64(value) => {
                write!(f.dst, "{value}").unwrap();
            }
            F64(value) => {
                assert!(
                    value.is_finite(),
                    "number literal must be finite; value={value}"
                );
                f.dst.push_str(&canonical_f64(*value));
            }
        }
    }
}

/// Shortest decimal form that reads back as the same number, using exponent
/// notation outside `[1e-6, 1e21)` (`1e+21`, `1e-7`).
fn canonical_f64(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let abs = value.abs();

    if (1e-6..1e21).contains(&abs) {
        return value.to_string();
    }

    let rendered = format!("{value:e}");
    match rendered.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => rendered,
    }
}
