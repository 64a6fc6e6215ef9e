use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A list element of the mixed kind user input produces: an integer, a
/// float or free text.
///
/// Numbers of either kind compare with each other numerically and text
/// compares lexicographically with text; a number and a text are not
/// comparable, which is what keeps
/// [`insertion_sort`](fn.insertion_sort.html) from inventing an order
/// between them.
///
/// ## Examples
///
/// ```
/// use lazygen::sort::Value;
///
/// assert_eq!("12".parse::<Value>().unwrap(), Value::Int(12));
/// assert_eq!("2.5".parse::<Value>().unwrap(), Value::Float(2.5));
/// assert_eq!(
///     "two".parse::<Value>().unwrap(),
///     Value::Text(String::from("two")),
/// );
/// assert!(Value::Int(2) < Value::Float(2.5));
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
}

// Kept consistent with `PartialOrd` below: an integer and a float
// holding the same quantity are equal.
impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl Value {
    /// Check whether this value is a number of either kind.
    pub fn is_number(&self) -> bool {
        !matches!(self, Value::Text(_))
    }

    /// Get this value as a float, or `None` for text.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Text(_) => None,
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a.partial_cmp(b),
            (Value::Text(a), Value::Text(b)) => a.partial_cmp(b),
            _ => match (self.as_number(), other.as_number()) {
                (Some(a), Some(b)) => a.partial_cmp(&b),
                _ => None,
            },
        }
    }
}

impl FromStr for Value {
    type Err = std::convert::Infallible;

    /// Parse a token the way the interactive demos read user input:
    /// an integer if it parses as one, else a float, else text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(i) = s.parse::<i64>() {
            return Ok(Value::Int(i));
        }
        if let Ok(f) = s.parse::<f64>() {
            return Ok(Value::Float(f));
        }
        Ok(Value::Text(String::from(s)))
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}
