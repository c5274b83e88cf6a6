use std::fmt;

use rust_decimal::{Decimal, prelude::ToPrimitive};

/// A literal call argument.
///
/// Numbers are kept as exact decimals so that the canonical form of a zone
/// prints back exactly what the author wrote (`0.10` stays `0.10`), and are
/// only converted to floating point when a predicate is bound.
///
/// # Examples
///
/// ```
/// use zonespec::Literal;
/// use rust_decimal::Decimal;
///
/// let name = Literal::String("END_BARRENS".to_string());
/// let radius = Literal::Number(Decimal::new(200, 0));
///
/// assert_eq!(name.as_str(), Some("END_BARRENS"));
/// assert_eq!(radius.as_f64(), Some(200.0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// Double-quoted string, verbatim
    String(String),

    /// Signed integer or decimal number
    Number(Decimal),
}

impl Literal {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::String(s) => Some(s),
            Literal::Number(_) => None,
        }
    }

    /// Get as float
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Literal::Number(n) => n.to_f64(),
            Literal::String(_) => None,
        }
    }

    /// True for numbers written without a fractional part.
    pub fn is_integer(&self) -> bool {
        matches!(self, Literal::Number(n) if n.scale() == 0)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => write!(f, "\"{}\"", s),
            Literal::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::String(s.to_string())
    }
}

impl From<i64> for Literal {
    fn from(n: i64) -> Self {
        Literal::Number(Decimal::from(n))
    }
}
