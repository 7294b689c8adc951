use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    NumberLiteral(i64),
    StringLiteral(String),
    Identifier(String),

    List(Vec<Expr>),

    /// A malformed subtree, replaced by the message describing what went wrong.
    Error(String),
}

impl Expr {
    /// The text a `set` or `get` name slot refers to, read from the unevaluated node.
    pub fn literal_text(&self) -> Option<String> {
        match self {
            Expr::Identifier(name) => Some(name.clone()),
            Expr::StringLiteral(value) => Some(value.clone()),
            Expr::NumberLiteral(value) => Some(value.to_string()),
            Expr::List(_) | Expr::Error(_) => None,
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::NumberLiteral(value) => write!(f, "{}", value),
            Expr::StringLiteral(value) => write!(f, "\"{}\"", value),
            Expr::Identifier(name) => f.write_str(name),
            Expr::List(elements) => {
                f.write_str("(")?;

                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }

                    write!(f, "{}", element)?;
                }

                f.write_str(")")
            },
            Expr::Error(message) => write!(f, "<error: {}>", message),
        }
    }
}
