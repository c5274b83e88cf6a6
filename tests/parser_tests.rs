// tests/parser_tests.rs

use rust_decimal::Decimal;
use zonespec::ast::{BinOp, Expr, Literal};
use zonespec::error::{CompileError, Stage};
use zonespec::lexer::Lexer;
use zonespec::parser::{MAX_COMBINATORS, MAX_NESTING, Parser, parse};

fn parse_ok(input: &str) -> Expr {
    parse(input).unwrap_or_else(|e| panic!("failed to parse {:?}: {}", input, e))
}

fn parse_err(input: &str) -> CompileError {
    match parse(input) {
        Ok(expr) => panic!("expected {:?} to fail, got {}", input, expr),
        Err(e) => e,
    }
}

fn num(n: i64) -> Literal {
    Literal::from(n)
}

/// Strip columns so trees can be compared by shape.
fn shape(expr: &Expr) -> String {
    expr.to_string()
}

// ============================================================================
// Simple tests
// ============================================================================

#[test]
fn test_call_without_arguments() {
    assert_eq!(parse_ok("all()"), Expr::call("all", vec![], 1));
}

#[test]
fn test_call_with_string() {
    assert_eq!(
        parse_ok(r#"world("world")"#),
        Expr::call("world", vec![Literal::from("world")], 1)
    );
}

#[test]
fn test_call_with_numbers() {
    assert_eq!(
        parse_ok("circle(1000, -1000, 0.5)"),
        Expr::call(
            "circle",
            vec![num(1000), num(-1000), Literal::Number(Decimal::new(5, 1))],
            1
        )
    );
}

#[test]
fn test_call_column_after_whitespace() {
    match parse_ok("   y(0, 10)") {
        Expr::Call { column, .. } => assert_eq!(column, 4),
        other => panic!("expected call, got {:?}", other),
    }
}

#[test]
fn test_parser_accepts_unknown_names() {
    // Names are checked when binding, not when parsing
    assert_eq!(
        parse_ok(r#"wg("spawn")"#),
        Expr::call("wg", vec![Literal::from("spawn")], 1)
    );
}

#[test]
fn test_signed_literals() {
    match parse_ok("rect(+5, -0.25, 0, 7)") {
        Expr::Call { args, .. } => {
            assert_eq!(args[0], num(5));
            assert_eq!(args[1], Literal::Number(Decimal::new(-25, 2)));
            assert!(args[2].is_integer());
            assert!(!args[1].is_integer());
        }
        other => panic!("expected call, got {:?}", other),
    }
}

#[test]
fn test_trailing_dot_literal() {
    match parse_ok("circle(0, 5., 10.)") {
        Expr::Call { args, .. } => {
            assert_eq!(args[1], num(5));
            assert_eq!(args[2], num(10));
            assert!(args[2].is_integer());
        }
        other => panic!("expected call, got {:?}", other),
    }
}

// ============================================================================
// The reference example
// ============================================================================

#[test]
fn test_reference_example() {
    let expr = parse_ok(r#"biome("END_BARRENS") & (circle(1000,1000,200) | circle(500,-500,200))"#);

    let expected = Expr::and(
        Expr::call("biome", vec![Literal::from("END_BARRENS")], 1),
        Expr::or(
            Expr::call("circle", vec![num(1000), num(1000), num(200)], 25),
            Expr::call("circle", vec![num(500), num(-500), num(200)], 49),
        ),
    );
    assert_eq!(expr, expected);
}

// ============================================================================
// Precedence and associativity
// ============================================================================

#[test]
fn test_and_binds_tighter_than_or() {
    assert_eq!(shape(&parse_ok("a() | b() & c()")), "(a() | (b() & c()))");
    assert_eq!(shape(&parse_ok("a() & b() | c()")), "((a() & b()) | c())");
}

#[test]
fn test_and_binds_tighter_than_xor() {
    assert_eq!(shape(&parse_ok("a() ^ b() & c()")), "(a() ^ (b() & c()))");
}

#[test]
fn test_xor_binds_tighter_than_or() {
    assert_eq!(shape(&parse_ok("a() | b() ^ c()")), "(a() | (b() ^ c()))");
    assert_eq!(shape(&parse_ok("a() ^ b() | c()")), "((a() ^ b()) | c())");
}

#[test]
fn test_not_binds_tightest() {
    assert_eq!(shape(&parse_ok("!a() & b()")), "(!a() & b())");
    assert_eq!(shape(&parse_ok("!(a() & b())")), "!(a() & b())");
    assert_eq!(shape(&parse_ok("!!a()")), "!!a()");
}

#[test]
fn test_left_associative() {
    assert_eq!(shape(&parse_ok("a() & b() & c()")), "((a() & b()) & c())");
    assert_eq!(shape(&parse_ok("a() | b() | c()")), "((a() | b()) | c())");
    assert_eq!(shape(&parse_ok("a() ^ b() ^ c()")), "((a() ^ b()) ^ c())");
}

#[test]
fn test_parentheses_override_precedence() {
    let expr = parse_ok("(a() | b()) & c()");
    match expr {
        Expr::BinaryOp {
            op: BinOp::And,
            left,
            ..
        } => assert!(matches!(*left, Expr::BinaryOp { op: BinOp::Or, .. })),
        _ => panic!("Expected conjunction"),
    }
}

#[test]
fn test_redundant_parentheses() {
    assert_eq!(parse_ok("((all()))"), parse_ok("all()"));
}

#[test]
fn test_canonical_form_parses_back() {
    let inputs = [
        r#"biome("END_BARRENS") & (circle(1000,1000,200) | circle(500,-500,200))"#,
        "!a(1) ^ b(\"x\", 2.50) | c() & !!d()",
    ];
    for input in inputs {
        let expr = parse_ok(input);
        let reparsed = parse_ok(&expr.to_string());
        assert_eq!(expr.to_string(), reparsed.to_string());
    }
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_missing_closing_paren() {
    let err = parse_err("(all()");
    assert_eq!(err.stage(), Stage::Parse);
    assert_eq!(err.message(), "expected ')', found end of input");
    assert_eq!(err.column(), 7);
}

#[test]
fn test_unclosed_argument_list() {
    let err = parse_err("circle(1, 2, 3");
    assert_eq!(err.message(), "expected ')' to close 'circle(', found end of input");
    assert_eq!(err.column(), 15);
}

#[test]
fn test_missing_argument_list() {
    let err = parse_err("biome & world()");
    assert_eq!(err.message(), "expected '(' after 'biome', found '&'");
    assert_eq!(err.column(), 7);
}

#[test]
fn test_trailing_tokens() {
    let err = parse_err("all() all()");
    assert_eq!(err.message(), "unexpected identifier 'all' after end of expression");
    assert_eq!(err.column(), 7);

    let err = parse_err("all())");
    assert_eq!(err.message(), "unexpected ')' after end of expression");
    assert_eq!(err.column(), 6);
}

#[test]
fn test_empty_argument() {
    let err = parse_err("circle(1,,2)");
    assert_eq!(err.message(), "expected string or number, found ','");
    assert_eq!(err.column(), 10);

    let err = parse_err("circle(1,2,)");
    assert_eq!(err.message(), "expected string or number, found ')'");
    assert_eq!(err.column(), 12);
}

#[test]
fn test_nested_call_is_not_an_argument() {
    let err = parse_err("circle(all(), 1, 2)");
    assert_eq!(err.message(), "expected string or number, found identifier 'all'");
}

#[test]
fn test_dangling_operator() {
    let err = parse_err("all() &");
    assert_eq!(err.message(), "expected predicate or '(', found end of input");
    assert_eq!(err.column(), 8);

    let err = parse_err("| all()");
    assert_eq!(err.message(), "expected predicate or '(', found '|'");
    assert_eq!(err.column(), 1);
}

#[test]
fn test_empty_input() {
    let err = parse_err("");
    assert_eq!(err.message(), "expected predicate or '(', found end of input");
    assert_eq!(err.column(), 1);

    let err = parse_err("()");
    assert_eq!(err.column(), 2);
}

#[test]
fn test_bare_literal_is_not_an_expression() {
    let err = parse_err("\"world\"");
    assert_eq!(err.message(), "expected predicate or '(', found string \"world\"");
}

#[test]
fn test_lex_errors_surface_with_lex_stage() {
    let err = parse_err("circle(007, 0, 1)");
    assert_eq!(err.stage(), Stage::Lex);
    assert_eq!(err.message(), "number has too many leading zeroes");
    assert_eq!(err.column(), 9);

    let err = parse_err("biome(\"END");
    assert_eq!(err.stage(), Stage::Lex);
    assert_eq!(err.message(), "unterminated string");
}

#[test]
fn test_lex_error_on_first_token() {
    assert!(Parser::new(Lexer::new("#")).is_err());
}

#[test]
fn test_number_out_of_range() {
    let err = parse_err("circle(1, 1, 99999999999999999999999999999999)");
    assert_eq!(err.stage(), Stage::Parse);
    assert_eq!(err.message(), "number out of range");
    assert_eq!(err.column(), 14);
}

// ============================================================================
// Resource limits
// ============================================================================

#[test]
fn test_nesting_limit() {
    let ok = format!("{}all(){}", "(".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
    parse_ok(&ok);

    let deep = format!("{}all(){}", "(".repeat(MAX_NESTING + 1), ")".repeat(MAX_NESTING + 1));
    let err = parse_err(&deep);
    assert_eq!(err.message(), "expression is too deeply nested");

    let nots = format!("{}all()", "!".repeat(MAX_NESTING + 1));
    assert_eq!(parse_err(&nots).message(), "expression is too deeply nested");
}

#[test]
fn test_combinator_limit() {
    let ok = vec!["all()"; MAX_COMBINATORS + 1].join(" | ");
    parse_ok(&ok);

    let long = vec!["all()"; MAX_COMBINATORS + 2].join(" | ");
    assert_eq!(parse_err(&long).message(), "expression is too complex");
}
