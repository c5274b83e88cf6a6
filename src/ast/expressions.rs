use std::fmt;

use crate::ast::{BinOp, Literal};

/// Abstract Syntax Tree node of a zone specification.
///
/// The parser accepts any `name(args)` shape; whether `name` is a known
/// predicate and the arguments fit it is decided later, when the tree is
/// bound into a [`Condition`](crate::predicate::Condition).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Predicate invocation
    ///
    /// # Examples
    /// ```text
    /// biome("END_BARRENS")
    /// circle(1000, 1000, 200)
    /// ```
    Call {
        name: String,
        args: Vec<Literal>,
        /// 1-based column of the predicate name
        column: usize,
    },

    /// Complement (`!`)
    Not(Box<Expr>),

    /// Binary combinator (`&`, `^`, `|`)
    BinaryOp {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn call(name: impl Into<String>, args: Vec<Literal>, column: usize) -> Self {
        Expr::Call {
            name: name.into(),
            args,
            column,
        }
    }

    pub fn not(operand: Expr) -> Self {
        Expr::Not(Box::new(operand))
    }

    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Self {
        Expr::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn and(left: Expr, right: Expr) -> Self {
        Self::binary(BinOp::And, left, right)
    }

    pub fn or(left: Expr, right: Expr) -> Self {
        Self::binary(BinOp::Or, left, right)
    }

    pub fn xor(left: Expr, right: Expr) -> Self {
        Self::binary(BinOp::Xor, left, right)
    }
}

/// Writes `name(arg, arg, ...)`.
pub(crate) fn write_call(f: &mut fmt::Formatter<'_>, name: &str, args: &[Literal]) -> fmt::Result {
    write!(f, "{}(", name)?;
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", arg)?;
    }
    write!(f, ")")
}

/// Canonical form: every binary node is parenthesised, so the output parses
/// back to the same tree regardless of precedence.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Call { name, args, .. } => write_call(f, name, args),
            Expr::Not(operand) => write!(f, "!{}", operand),
            Expr::BinaryOp { op, left, right } => write!(f, "({} {} {})", left, op, right),
        }
    }
}
