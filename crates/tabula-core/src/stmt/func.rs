use std::fmt;

/// Functions of the remote formula language.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Func {
    And,
    Or,
    Not,
    Concatenate,
    Sum,
    Average,
    Min,
    Max,
    If,
    Lower,
    Upper,
    Trim,
    Len,
    Blank,
    Error,
}

/// How many arguments a function takes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    Variadic,
}

impl Func {
    /// The function name as written in a formula.
    pub fn name(self) -> &'static str {
        use Func::*;

        match self {
            And => "AND",
            Or => "OR",
            Not => "NOT",
            Concatenate => "CONCATENATE",
            Sum => "SUM",
            Average => "AVERAGE",
            Min => "MIN",
            Max => "MAX",
            If => "IF",
            Lower => "LOWER",
            Upper => "UPPER",
            Trim => "TRIM",
            Len => "LEN",
            Blank => "BLANK",
            Error => "ERROR",
        }
    }

    pub fn arity(self) -> Arity {
        use Func::*;

        match self {
            And | Or | Concatenate | Sum | Average | Min | Max => Arity::Variadic,
            Not | Lower | Upper | Trim | Len => Arity::Exactly(1),
            If => Arity::Exactly(3),
            Blank | Error => Arity::Exactly(0),
        }
    }

    /// Returns `true` if `len` arguments are acceptable for this function.
    pub fn accepts(self, len: usize) -> bool {
        match self.arity() {
            Arity::Exactly(n) => n == len,
            Arity::Variadic => true,
        }
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
