use std::fmt;

/// A constant written in a column default, a type parameter or a table
/// option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Null,
    Bool(bool),

    /// Numeric text exactly as written.
    Number(String),

    String(String),

    /// A bare keyword or function call such as `CURRENT_TIMESTAMP(3)`.
    Expr(String),
}

impl Literal {
    pub fn number(value: impl ToString) -> Literal {
        Literal::Number(value.to_string())
    }

    pub fn string(value: impl Into<String>) -> Literal {
        Literal::String(value.into())
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Null => f.write_str("NULL"),
            Literal::Bool(true) => f.write_str("TRUE"),
            Literal::Bool(false) => f.write_str("FALSE"),
            Literal::Number(value) | Literal::Expr(value) => f.write_str(value),
            Literal::String(value) => {
                f.write_str("'")?;
                for ch in value.chars() {
                    match ch {
                        '\'' => f.write_str("''")?,
                        '\\' => f.write_str("\\\\")?,
                        '\n' => f.write_str("\\n")?,
                        '\t' => f.write_str("\\t")?,
                        '\r' => f.write_str("\\r")?,
                        '\0' => f.write_str("\\0")?,
                        ch => write!(f, "{ch}")?,
                    }
                }
                f.write_str("'")
            }
        }
    }
}
