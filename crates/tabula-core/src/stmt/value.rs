/// A literal operand.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Rendered between single quotes, verbatim.
    String(String),

    /// Signed 64-bit integer
    I64(i64),

    /// Must be finite to be rendered.
    F64(f64),
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

macro_rules! impl_from_int {
    ( $( $t:ty ),* ) => {
        $(
            impl From<$t> for Value {
                fn from(src: $t) -> Self {
                    Self::I64(src.into())
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    /// Goes through the shortest decimal form of the `f32`, so `1.1f32`
    /// stays `1.1`.
    fn from(src: f32) -> Self {
        Self::F64(src.to_string().parse().unwrap_or(f64::from(src)))
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}
