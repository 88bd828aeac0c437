//! Typed default values and their textual form.

use core::fmt;

/// A typed default value accepted at registration time.
///
/// Its rendering seeds the definition's stored text and is what the help
/// output displays until a matching token overwrites it.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    /// A string default, stored verbatim.
    Str(String),

    /// An integer default.
    Int(i64),

    /// A float default.
    Float(f64),

    /// A boolean default. Rendered as `true`/`false` so that retrieval
    /// through [`str::parse`] round-trips.
    Bool(bool),
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::Str(v) => f.write_str(v),
            DefaultValue::Int(v) => write!(f, "{v}"),
            DefaultValue::Float(v) => write!(f, "{v}"),
            DefaultValue::Bool(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for DefaultValue {
    fn from(v: &str) -> Self {
        DefaultValue::Str(v.to_string())
    }
}

impl From<String> for DefaultValue {
    fn from(v: String) -> Self {
        DefaultValue::Str(v)
    }
}

impl From<i64> for DefaultValue {
    fn from(v: i64) -> Self {
        DefaultValue::Int(v)
    }
}

impl From<f64> for DefaultValue {
    fn from(v: f64) -> Self {
        DefaultValue::Float(v)
    }
}

impl From<bool> for DefaultValue {
    fn from(v: bool) -> Self {
        DefaultValue::Bool(v)
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    #[test]
    fn it_should_render_bools_as_words() {
        assert_that!(DefaultValue::from(false).to_string(), eq("false"));
        assert_that!(DefaultValue::from(true).to_string(), eq("true"));
    }

    #[test]
    fn it_should_render_numbers() {
        assert_that!(DefaultValue::from(42i64).to_string(), eq("42"));
        assert_that!(DefaultValue::from(2.5f64).to_string(), eq("2.5"));
    }

    #[test]
    fn it_should_render_strings_verbatim() {
        assert_that!(DefaultValue::from("x").to_string(), eq("x"));
        assert_that!(DefaultValue::from(String::new()).to_string(), eq(""));
    }
}
