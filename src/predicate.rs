//! Predicate binding.
//!
//! The parser only checks shape; this module turns every `name(args)` call in
//! a parsed [`Expr`] into a typed [`Predicate`], rejecting unknown names and
//! bad arguments. The result, a [`Condition`], can be evaluated without any
//! further checks.

use std::fmt;

use crate::{
    ast::{BinOp, Expr, Literal},
    error::{BindError, CompileError},
    parser,
};

/// A bound leaf test on a location.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// `all()` - every location
    All,

    /// `biome("A", "B", ...)` - biome is one of the names, ignoring ASCII case
    Biome(Vec<String>),

    /// `world("A", "B", ...)` - world is one of the names, exactly
    World(Vec<String>),

    /// `circle(x, z, r)` - horizontal distance from the centre at most `r`
    Circle { x: f64, z: f64, radius: f64 },

    /// `donut(x, z, inner, outer)` - horizontal distance from the centre
    /// between `inner` and `outer`, inclusive
    Donut {
        x: f64,
        z: f64,
        inner: f64,
        outer: f64,
    },

    /// `rect(x1, z1, x2, z2)` - inside the rectangle with those corners, in
    /// any order, edges included
    Rect { x1: f64, z1: f64, x2: f64, z2: f64 },

    /// `y(min, max)` - height between the two bounds, in any order
    Y { min: f64, max: f64 },
}

/// Argument shape a predicate accepts.
enum Arity {
    Exactly(usize),
    AtLeastOne,
}

/// Names of all predicates, as accepted in zone specifications.
pub const PREDICATE_NAMES: &[&str] = &["all", "biome", "world", "circle", "donut", "rect", "y"];

impl Predicate {
    /// Bind a call to a predicate.
    pub fn bind(name: &str, args: &[Literal], column: usize) -> Result<Self, BindError> {
        let arity = match name {
            "all" => Arity::Exactly(0),
            "biome" | "world" => Arity::AtLeastOne,
            "circle" => Arity::Exactly(3),
            "donut" | "rect" => Arity::Exactly(4),
            "y" => Arity::Exactly(2),
            _ => {
                return Err(BindError::new(
                    format!("unknown predicate '{}'", name),
                    column,
                ));
            }
        };

        match arity {
            Arity::Exactly(n) if args.len() != n => {
                return Err(BindError::new(
                    format!(
                        "{} expects {} argument{}, got {}",
                        name,
                        n,
                        if n == 1 { "" } else { "s" },
                        args.len()
                    ),
                    column,
                ));
            }
            Arity::AtLeastOne if args.is_empty() => {
                return Err(BindError::new(
                    format!("{} expects at least one argument", name),
                    column,
                ));
            }
            _ => {}
        }

        let predicate = match name {
            "all" => Predicate::All,
            "biome" => Predicate::Biome(strings(name, args, column)?),
            "world" => Predicate::World(strings(name, args, column)?),
            "circle" => {
                let [x, z, radius] = numbers::<3>(name, args, column)?;
                if radius < 0.0 {
                    return Err(BindError::new("circle radius must not be negative", column));
                }
                Predicate::Circle { x, z, radius }
            }
            "donut" => {
                let [x, z, inner, outer] = numbers::<4>(name, args, column)?;
                if !(0.0 <= inner && inner <= outer) {
                    return Err(BindError::new(
                        "donut radii must satisfy 0 <= inner <= outer",
                        column,
                    ));
                }
                Predicate::Donut { x, z, inner, outer }
            }
            "rect" => {
                let [x1, z1, x2, z2] = numbers::<4>(name, args, column)?;
                Predicate::Rect { x1, z1, x2, z2 }
            }
            _ => {
                let [min, max] = numbers::<2>(name, args, column)?;
                Predicate::Y { min, max }
            }
        };
        Ok(predicate)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Predicate::All => "all",
            Predicate::Biome(_) => "biome",
            Predicate::World(_) => "world",
            Predicate::Circle { .. } => "circle",
            Predicate::Donut { .. } => "donut",
            Predicate::Rect { .. } => "rect",
            Predicate::Y { .. } => "y",
        }
    }
}

fn strings(name: &str, args: &[Literal], column: usize) -> Result<Vec<String>, BindError> {
    args.iter()
        .enumerate()
        .map(|(i, arg)| match arg.as_str() {
            Some("") => Err(BindError::new(
                format!("argument {} of {} must not be empty", i + 1, name),
                column,
            )),
            Some(s) => Ok(s.to_string()),
            None => Err(BindError::new(
                format!("argument {} of {} must be a string", i + 1, name),
                column,
            )),
        })
        .collect()
}

fn numbers<const N: usize>(
    name: &str,
    args: &[Literal],
    column: usize,
) -> Result<[f64; N], BindError> {
    let mut values = [0.0; N];
    for (i, (slot, arg)) in values.iter_mut().zip(args).enumerate() {
        *slot = arg.as_f64().ok_or_else(|| {
            BindError::new(
                format!("argument {} of {} must be a number", i + 1, name),
                column,
            )
        })?;
    }
    Ok(values)
}

/// A compiled zone specification: bound predicates joined by combinators.
///
/// Conditions are never mutated after compilation, so one condition may be
/// evaluated from many threads at once.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Test(Predicate),
    Not(Box<Condition>),
    Binary {
        op: BinOp,
        left: Box<Condition>,
        right: Box<Condition>,
    },
}

impl Condition {
    /// Tokenize, parse and bind zone specification text.
    ///
    /// # Examples
    ///
    /// ```
    /// use zonespec::{Condition, EvalContext};
    ///
    /// let condition = Condition::compile(r#"world("world") & circle(0, 0, 100)"#).unwrap();
    /// let spawn = EvalContext::new("world", "PLAINS", 10.0, 64.0, -20.0);
    /// assert!(condition.evaluate(&spawn));
    /// ```
    pub fn compile(text: &str) -> Result<Condition, CompileError> {
        let expr = parser::parse(text)?;
        Ok(Condition::bind(&expr)?)
    }

    /// Bind every call in a parsed expression.
    pub fn bind(expr: &Expr) -> Result<Condition, BindError> {
        match expr {
            Expr::Call { name, args, column } => {
                Ok(Condition::Test(Predicate::bind(name, args, *column)?))
            }
            Expr::Not(operand) => Ok(Condition::Not(Box::new(Condition::bind(operand)?))),
            Expr::BinaryOp { op, left, right } => Ok(Condition::Binary {
                op: *op,
                left: Box::new(Condition::bind(left)?),
                right: Box::new(Condition::bind(right)?),
            }),
        }
    }

    /// The condition that matches every location.
    pub fn always() -> Condition {
        Condition::Test(Predicate::All)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name())?;
        match self {
            Predicate::All => {}
            Predicate::Biome(names) | Predicate::World(names) => {
                let quoted: Vec<String> = names.iter().map(|n| format!("\"{}\"", n)).collect();
                write!(f, "{}", quoted.join(", "))?;
            }
            Predicate::Circle { x, z, radius } => write!(f, "{}, {}, {}", x, z, radius)?,
            Predicate::Donut { x, z, inner, outer } => {
                write!(f, "{}, {}, {}, {}", x, z, inner, outer)?
            }
            Predicate::Rect { x1, z1, x2, z2 } => write!(f, "{}, {}, {}, {}", x1, z1, x2, z2)?,
            Predicate::Y { min, max } => write!(f, "{}, {}", min, max)?,
        }
        write!(f, ")")
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Test(predicate) => write!(f, "{}", predicate),
            Condition::Not(operand) => write!(f, "!{}", operand),
            Condition::Binary { op, left, right } => write!(f, "({} {} {})", left, op, right),
        }
    }
}
