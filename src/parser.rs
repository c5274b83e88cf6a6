use std::str::FromStr;

use rust_decimal::Decimal;

use crate::{
    ast::{BinOp, Expr, Literal, Token, TokenKind},
    error::{CompileError, LexError, ParseError},
    lexer::Lexer,
};

/// Deepest allowed nesting of parentheses and `!`.
pub const MAX_NESTING: usize = 64;

/// Most combinator nodes allowed in one expression.
pub const MAX_COMBINATORS: usize = 1024;

type ParseResult<T> = Result<T, CompileError>;

/// Recursive-descent parser for zone specifications.
///
/// ```text
/// expr    := orExpr
/// orExpr  := xorExpr ( '|' xorExpr )*
/// xorExpr := andExpr ( '^' andExpr )*
/// andExpr := notExpr ( '&' notExpr )*
/// notExpr := '!' notExpr | atom
/// atom    := '(' expr ')' | IDENT '(' argList? ')'
/// argList := literal ( ',' literal )*
/// literal := STRING | NUMBER
/// ```
pub struct Parser {
    lexer: Lexer,
    current_token: Token,
    depth: usize,
    combinators: usize,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Result<Self, LexError> {
        let current_token = lexer.current_token()?.clone();
        Ok(Parser {
            lexer,
            current_token,
            depth: 0,
            combinators: 0,
        })
    }

    /// Parse a complete specification: one expression followed by the end
    /// of input.
    pub fn parse(&mut self) -> ParseResult<Expr> {
        let expr = self.parse_expression()?;
        if !self.check(TokenKind::End) {
            return Err(self.error(format!(
                "unexpected {} after end of expression",
                self.current_token
            )));
        }
        Ok(expr)
    }

    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.parse_or()
    }

    fn advance(&mut self) -> ParseResult<()> {
        self.current_token = self.lexer.next_token()?;
        Ok(())
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current_token.is(kind)
    }

    /// Consume a token of the given kind, or fail describing what was found.
    fn expect(&mut self, kind: TokenKind, context: &str) -> ParseResult<Token> {
        if !self.check(kind) {
            return Err(self.error(format!(
                "expected {}{}, found {}",
                kind, context, self.current_token
            )));
        }
        let token = self.current_token.clone();
        self.advance()?;
        Ok(token)
    }

    fn error(&self, message: String) -> CompileError {
        ParseError::new(message, self.current_token.column).into()
    }

    fn enter(&mut self) -> ParseResult<()> {
        self.depth += 1;
        if self.depth > MAX_NESTING {
            return Err(self.error("expression is too deeply nested".to_string()));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn count_combinator(&mut self) -> ParseResult<()> {
        self.combinators += 1;
        if self.combinators > MAX_COMBINATORS {
            return Err(self.error("expression is too complex".to_string()));
        }
        Ok(())
    }

    /// Parse one left-associative binary level.
    fn parse_binary(
        &mut self,
        kind: TokenKind,
        op: BinOp,
        operand: fn(&mut Self) -> ParseResult<Expr>,
    ) -> ParseResult<Expr> {
        let mut left = operand(self)?;

        while self.check(kind) {
            self.count_combinator()?;
            self.advance()?;
            let right = operand(self)?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_or(&mut self) -> ParseResult<Expr> {
        self.parse_binary(TokenKind::Or, BinOp::Or, Self::parse_xor)
    }

    fn parse_xor(&mut self) -> ParseResult<Expr> {
        self.parse_binary(TokenKind::Xor, BinOp::Xor, Self::parse_and)
    }

    fn parse_and(&mut self) -> ParseResult<Expr> {
        self.parse_binary(TokenKind::And, BinOp::And, Self::parse_not)
    }

    fn parse_not(&mut self) -> ParseResult<Expr> {
        if !self.check(TokenKind::Not) {
            return self.parse_primary();
        }

        self.count_combinator()?;
        self.enter()?;
        self.advance()?; // consume '!'
        let operand = self.parse_not()?;
        self.leave();
        Ok(Expr::not(operand))
    }

    /// Parse a parenthesised expression or a predicate call
    fn parse_primary(&mut self) -> ParseResult<Expr> {
        match self.current_token.kind {
            TokenKind::LParen => {
                self.enter()?;
                self.advance()?; // consume '('
                let expr = self.parse_expression()?;
                self.expect(TokenKind::RParen, "")?;
                self.leave();
                Ok(expr)
            }
            TokenKind::Ident => self.parse_call(),
            _ => Err(self.error(format!(
                "expected predicate or '(', found {}",
                self.current_token
            ))),
        }
    }

    fn parse_call(&mut self) -> ParseResult<Expr> {
        let Token { text, column, .. } = self.expect(TokenKind::Ident, "")?;
        let name = text.unwrap_or_default();

        self.expect(TokenKind::LParen, &format!(" after '{}'", name))?;

        let mut args = vec![];
        if !self.check(TokenKind::RParen) {
            args.push(self.parse_literal()?);
            while self.check(TokenKind::Comma) {
                self.advance()?;
                args.push(self.parse_literal()?);
            }
        }

        self.expect(TokenKind::RParen, &format!(" to close '{}('", name))?;
        Ok(Expr::call(name, args, column))
    }

    fn parse_literal(&mut self) -> ParseResult<Literal> {
        let literal = match (&self.current_token.kind, &self.current_token.text) {
            (TokenKind::String, Some(text)) => Literal::String(text.clone()),
            (TokenKind::Number, Some(text)) => Decimal::from_str(text.trim_end_matches('.'))
                .map(Literal::Number)
                .map_err(|_| self.error("number out of range".to_string()))?,
            _ => {
                return Err(self.error(format!(
                    "expected string or number, found {}",
                    self.current_token
                )));
            }
        };
        self.advance()?;
        Ok(literal)
    }
}

/// Parse zone specification text into an unbound expression tree.
pub fn parse(text: &str) -> ParseResult<Expr> {
    let mut parser = Parser::new(Lexer::new(text))?;
    parser.parse()
}
