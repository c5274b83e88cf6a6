//! # Zone Specification Language - Abstract Syntax Tree
//!
//! This module defines the tokens and syntax tree of the zone specification
//! language, a small boolean algebra over regions of a game world.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[expressions]** - Expression nodes (predicate calls and combinators)
//! - **[operators]** - Binary combinators (`&`, `^`, `|`)
//! - **[literal]** - Call arguments (strings and exact decimals)
//!
//! ## Quick Start
//!
//! ```text
//! biome("END_BARRENS") & (circle(1000,1000,200) | circle(500,-500,200))
//! ```
//!
//! This zone covers the End Barrens biome, but only inside either of two
//! circles of radius 200.
//!
//! ## Core Concepts
//!
//! ### Predicates
//!
//! A predicate call `name(arg, ...)` tests one attribute of a location: its
//! world, its biome, or where it lies horizontally or vertically. Arguments
//! are literals only; there are no variables.
//!
//! ### Combinators
//!
//! From tightest to loosest binding:
//!
//! - **Not** `!a` - everywhere `a` is not
//! - **And** `a & b` - where both hold
//! - **Xor** `a ^ b` - where exactly one holds
//! - **Or** `a | b` - where either holds
//!
//! Binary combinators are left-associative; parentheses group.
//!
//! ## Examples
//!
//! ### Everything outside spawn
//!
//! ```text
//! world("world") & !circle(0, 0, 1000)
//! ```
//!
//! ### A ring around a point, underground only
//!
//! ```text
//! donut(0, 0, 500, 800) & y(0, 40)
//! ```
pub mod expressions;
pub mod literal;
pub mod operators;
pub mod tokens;

pub use expressions::Expr;
pub use literal::Literal;
pub use operators::BinOp;
pub use tokens::{Token, TokenKind};
