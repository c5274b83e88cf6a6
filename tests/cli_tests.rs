// tests/cli_tests.rs

use zonespec::cli::{
    CheckOptions, CheckResult, CliError, DocCategory, ResolveOptions, execute_check,
    execute_resolve, get_doc_category, get_docs_overview, render_diagnostic,
};
use zonespec::Condition;

const ZONES: &str = r#"{
    "zones": [
        { "id": "barrens", "priority": 10,
          "spec": "biome(\"END_BARRENS\") & (circle(1000,1000,200) | circle(500,-500,200))" },
        { "id": "end", "priority": 1, "spec": "world(\"world_the_end\")" },
        { "id": "broken", "spec": "circle(" }
    ]
}"#;

fn resolve(biome: &str, x: f64, z: f64, all: bool) -> Vec<String> {
    let options = ResolveOptions {
        zones: Some(ZONES.to_string()),
        world: "world_the_end".to_string(),
        biome: biome.to_string(),
        x,
        y: 60.0,
        z,
        all,
    };
    execute_resolve(&options).unwrap()
}

// ============================================================================
// check
// ============================================================================

#[test]
fn test_check_valid() {
    let options = CheckOptions {
        spec: "circle(0, 0, 10)".to_string(),
        show_ast: false,
    };
    assert!(matches!(execute_check(&options), Ok(CheckResult::Valid)));
}

#[test]
fn test_check_prints_canonical_form() {
    let options = CheckOptions {
        spec: "all() | y(0,1) & !all()".to_string(),
        show_ast: true,
    };
    match execute_check(&options) {
        Ok(CheckResult::Compiled(text)) => assert_eq!(text, "(all() | (y(0, 1) & !all()))"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_check_reports_compile_error() {
    let options = CheckOptions {
        spec: "circel(0, 0, 10)".to_string(),
        show_ast: false,
    };
    match execute_check(&options) {
        Err(CliError::Compile(e)) => assert_eq!(e.message(), "unknown predicate 'circel'"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_render_diagnostic() {
    let spec = "all() & circel(0, 0, 10)";
    let err = Condition::compile(spec).unwrap_err();
    assert_eq!(
        render_diagnostic(spec, &err),
        "bind error at column 9: unknown predicate 'circel'\n  all() & circel(0, 0, 10)\n          ^"
    );
}

#[test]
fn test_render_diagnostic_multiline_and_end_of_input() {
    let spec = "all() &\n  \"abc";
    let err = Condition::compile(spec).unwrap_err();
    assert_eq!(err.column(), 15);
    assert_eq!(
        render_diagnostic(spec, &err),
        "lex error at column 15: unterminated string\n    \"abc\n        ^"
    );
}

// ============================================================================
// resolve
// ============================================================================

#[test]
fn test_resolve_winner() {
    assert_eq!(resolve("END_BARRENS", 1000.0, 1000.0, false), vec!["barrens"]);
    assert_eq!(resolve("END_BARRENS", 0.0, 0.0, false), vec!["end"]);
    assert_eq!(resolve("END_HIGHLANDS", 1000.0, 1000.0, false), vec!["end"]);
}

#[test]
fn test_resolve_all() {
    assert_eq!(
        resolve("END_BARRENS", 500.0, -500.0, true),
        vec!["barrens", "end", "default"]
    );
}

#[test]
fn test_resolve_without_zones() {
    let options = ResolveOptions {
        world: "world".to_string(),
        ..Default::default()
    };
    assert!(matches!(execute_resolve(&options), Err(CliError::NoInput)));
}

#[test]
fn test_resolve_with_invalid_file() {
    let options = ResolveOptions {
        zones: Some("not json".to_string()),
        world: "world".to_string(),
        ..Default::default()
    };
    assert!(matches!(execute_resolve(&options), Err(CliError::Store(_))));
}

// ============================================================================
// docs
// ============================================================================

#[test]
fn test_doc_categories() {
    assert_eq!(DocCategory::from_name("Predicates"), Some(DocCategory::Predicates));
    assert_eq!(DocCategory::from_name("ops"), Some(DocCategory::Operators));
    assert_eq!(DocCategory::from_name("nope"), None);

    for name in ["syntax", "operators", "predicates", "zones"] {
        assert!(get_doc_category(name).is_ok(), "{}", name);
        assert!(get_docs_overview().contains(name), "{}", name);
    }
    assert!(matches!(
        get_doc_category("nope"),
        Err(CliError::UnknownCategory(_))
    ));
}

#[test]
fn test_predicate_docs_cover_every_predicate() {
    let docs = get_doc_category("predicates").unwrap();
    for name in zonespec::predicate::PREDICATE_NAMES {
        assert!(docs.contains(&format!("{}(", name)), "{} is undocumented", name);
    }
}

#[test]
fn test_docs_name_the_docs_command() {
    assert!(get_docs_overview().contains("'zonespec docs <category>'"));
    let syntax = get_doc_category("syntax").unwrap();
    assert!(syntax.contains("zonespec docs operators"));
    assert!(!syntax.contains("zonespec doc "));
}
