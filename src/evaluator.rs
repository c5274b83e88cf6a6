use crate::{
    ast::BinOp,
    predicate::{Condition, Predicate},
};

/// The location a condition is evaluated against.
///
/// Borrows its strings so that building a context per block-break or
/// per spawn allocates nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalContext<'a> {
    /// World the location is in
    pub world: &'a str,
    /// Biome at the location; empty when unknown
    pub biome: &'a str,
    pub x: f64,
    /// Height, only consulted by `y(...)`
    pub y: f64,
    pub z: f64,
}

impl<'a> EvalContext<'a> {
    pub fn new(world: &'a str, biome: &'a str, x: f64, y: f64, z: f64) -> Self {
        EvalContext {
            world,
            biome,
            x,
            y,
            z,
        }
    }

    /// A context whose biome could not be looked up. Biome tests are false
    /// for it; every other predicate still applies.
    pub fn without_biome(world: &'a str, x: f64, y: f64, z: f64) -> Self {
        Self::new(world, "", x, y, z)
    }

    pub fn from_block(block: &'a BlockInfo, x: f64, y: f64, z: f64) -> Self {
        Self::new(&block.world, &block.biome, x, y, z)
    }
}

/// What the host world model reports about a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockInfo {
    pub world: String,
    pub biome: String,
}

/// Read-only view of the host world.
pub trait LocationSource {
    /// Describe the location, or `None` if the world is not loaded.
    fn lookup(&self, world: &str, x: f64, y: f64, z: f64) -> Option<BlockInfo>;
}

/// Evaluate a compiled condition at a location.
///
/// `&` and `|` short-circuit left to right; `^` and `!` always evaluate
/// their operands. Evaluation never fails.
pub fn evaluate(condition: &Condition, ctx: &EvalContext<'_>) -> bool {
    match condition {
        Condition::Test(predicate) => test(predicate, ctx),
        Condition::Not(operand) => !evaluate(operand, ctx),
        Condition::Binary { op, left, right } => match op {
            BinOp::And => evaluate(left, ctx) && evaluate(right, ctx),
            BinOp::Or => evaluate(left, ctx) || evaluate(right, ctx),
            BinOp::Xor => evaluate(left, ctx) ^ evaluate(right, ctx),
        },
    }
}

impl Condition {
    pub fn evaluate(&self, ctx: &EvalContext<'_>) -> bool {
        evaluate(self, ctx)
    }
}

fn test(predicate: &Predicate, ctx: &EvalContext<'_>) -> bool {
    match predicate {
        Predicate::All => true,
        Predicate::Biome(names) => names.iter().any(|n| n.eq_ignore_ascii_case(ctx.biome)),
        Predicate::World(names) => names.iter().any(|n| n == ctx.world),
        Predicate::Circle { x, z, radius } => distance_sq(ctx, *x, *z) <= radius * radius,
        Predicate::Donut { x, z, inner, outer } => {
            let d = distance_sq(ctx, *x, *z);
            inner * inner <= d && d <= outer * outer
        }
        Predicate::Rect { x1, z1, x2, z2 } => {
            between(ctx.x, *x1, *x2) && between(ctx.z, *z1, *z2)
        }
        Predicate::Y { min, max } => between(ctx.y, *min, *max),
    }
}

fn distance_sq(ctx: &EvalContext<'_>, x: f64, z: f64) -> f64 {
    let dx = ctx.x - x;
    let dz = ctx.z - z;
    dx * dx + dz * dz
}

/// True if `v` lies between `a` and `b` inclusive, whichever is larger.
fn between(v: f64, a: f64, b: f64) -> bool {
    if a < b {
        a <= v && v <= b
    } else {
        b <= v && v <= a
    }
}
