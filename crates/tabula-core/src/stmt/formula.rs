use std::fmt;

/// Formula text that has already been rendered.
///
/// When used as an operand it is inserted into the enclosing formula as is,
/// without quoting or extra parentheses.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Formula(String);

impl Formula {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Formula {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Formula> for String {
    fn from(value: Formula) -> Self {
        value.0
    }
}

impl PartialEq<str> for Formula {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Formula {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
