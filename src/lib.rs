pub mod ast;
pub mod cli;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod predicate;
pub mod store;
pub mod zone;

pub use ast::{BinOp, Expr, Literal, Token, TokenKind};
pub use error::{BindError, CompileError, LexError, ParseError, Stage};
pub use evaluator::{BlockInfo, EvalContext, LocationSource, evaluate};
pub use lexer::Lexer;
pub use parser::{Parser, parse};
pub use predicate::{Condition, Predicate};
pub use store::{LoadReport, StoreError, ZoneFile, ZoneRecord};
pub use zone::{Zone, ZoneError, ZoneRegistry};
