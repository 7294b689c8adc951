use std::fmt::{Display, Formatter};

/// A runtime value. `List` doubles as the multi-value result of commands.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
}

impl Value {
    pub fn empty() -> Value {
        Value::List(Vec::new())
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// A single-element list stands for its element wherever it is used as an argument.
    pub fn unwrap_single(self) -> Value {
        match self {
            Value::List(mut values) if values.len() == 1 => values.remove(0),
            other => other,
        }
    }

    fn as_float(&self) -> Option<f64> {
        match self {
            Value::Int(value) => Some(*value as f64),
            Value::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn to_float(&self) -> Option<Value> {
        self.as_float().map(Value::Float)
    }

    /// `+` on numbers, concatenation as soon as either side is text.
    pub fn add(&self, other: &Value) -> Option<Value> {
        match (self, other) {
            (Value::String(_), Value::String(_) | Value::Int(_) | Value::Float(_))
            | (Value::Int(_) | Value::Float(_), Value::String(_)) => Some(Value::String(format!("{}{}", self, other))),
            _ => self.numeric(other, i64::checked_add, |a, b| a + b),
        }
    }

    pub fn subtract(&self, other: &Value) -> Option<Value> {
        self.numeric(other, i64::checked_sub, |a, b| a - b)
    }

    pub fn multiply(&self, other: &Value) -> Option<Value> {
        self.numeric(other, i64::checked_mul, |a, b| a * b)
    }

    /// Always a floating-point quotient, even for two integers.
    pub fn divide(&self, other: &Value) -> Option<Value> {
        Some(Value::Float(self.as_float()? / other.as_float()?))
    }

    // Integer results that overflow are recomputed in floating point
    fn numeric(&self, other: &Value, int_op: fn(i64, i64) -> Option<i64>, float_op: fn(f64, f64) -> f64) -> Option<Value> {
        if let (Value::Int(a), Value::Int(b)) = (self, other) {
            if let Some(result) = int_op(*a, *b) {
                return Some(Value::Int(result));
            }
        }

        Some(Value::Float(float_op(self.as_float()?, other.as_float()?)))
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{}", value),
            Value::Float(value) =>
                if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 { write!(f, "{}", *value as i64) }
                else { write!(f, "{}", value) },
            Value::String(value) => f.write_str(value),
            Value::List(values) => {
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }

                    write!(f, "{}", value)?;
                }

                Ok(())
            },
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn add_mixes_numbers_and_text() {
        assert_eq!(Some(Value::Int(3)), Value::Int(1).add(&Value::Int(2)));
        assert_eq!(Some(Value::from("ab")), Value::from("a").add(&Value::from("b")));
        assert_eq!(Some(Value::from("1a")), Value::Int(1).add(&Value::from("a")));
        assert_eq!(None, Value::Int(1).add(&Value::List(vec![])));
    }

    #[test]
    fn integer_overflow_falls_back_to_float() {
        assert_eq!(Some(Value::Float(i64::MAX as f64 * 2.0)), Value::Int(i64::MAX).multiply(&Value::Int(2)));
    }

    #[test]
    fn divide_is_always_float() {
        assert_eq!(Some(Value::Float(2.0)), Value::Int(4).divide(&Value::Int(2)));
        assert_eq!(None, Value::Int(4).divide(&Value::from("x")));
    }

    #[test]
    fn display_joins_lists_with_spaces() {
        let value = Value::List(vec![Value::Int(1), Value::from("a"), Value::List(vec![Value::Float(2.5), Value::Float(3.0)])]);
        assert_eq!("1 a 2.5 3", value.to_string());
        assert_eq!("", Value::empty().to_string());
    }

    #[test]
    fn unwrap_single_only_touches_one_element_lists() {
        assert_eq!(Value::Int(1), Value::List(vec![Value::Int(1)]).unwrap_single());
        assert_eq!(Value::empty(), Value::empty().unwrap_single());
        assert_eq!(Value::List(vec![Value::Int(1), Value::Int(2)]), Value::List(vec![Value::Int(1), Value::Int(2)]).unwrap_single());
    }
}
