use std::fmt;

/// Binary region combinators.
///
/// Listed from tightest to loosest binding; all are left-associative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    /// Intersection (`&`), short-circuits
    And,
    /// Symmetric difference (`^`)
    Xor,
    /// Union (`|`), short-circuits
    Or,
}

impl BinOp {
    pub fn symbol(self) -> char {
        match self {
            BinOp::And => '&',
            BinOp::Xor => '^',
            BinOp::Or => '|',
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
