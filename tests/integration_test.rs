use parstty::parser::lexer::Lexer;
use parstty::parser::parse::{Parser, Rule, SyntaxError, END_OF_INPUT};
use parstty::parser::{analyze, Analysis};
use parstty::trace::{TraceEvent, TraceLog};
use std::fs;
use std::path::PathBuf;

fn demo(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("demos")
        .join(name);
    fs::read_to_string(&path).expect("Failed to read demo file")
}

fn parse(source: &str) -> Result<(), SyntaxError> {
    let tokens = Lexer::new().tokenize_str(source);
    Parser::new(&tokens).parse_program()
}

fn error_of(source: &str) -> SyntaxError {
    parse(source).expect_err("expected a syntax error")
}

#[test]
fn test_demo_block() {
    let analysis = analyze(&demo("block.txt"));
    assert_eq!(analysis.outcome, Ok(()));

    let rules = analysis.trace.rules();
    for rule in [
        Rule::While,
        Rule::If,
        Rule::DoWhile,
        Rule::For,
        Rule::Switch,
        Rule::CallMethod,
    ] {
        assert!(rules.contains(&rule), "missing {}", rule);
    }
}

#[test]
fn test_demo_class() {
    let analysis = analyze(&demo("class.txt"));
    assert_eq!(analysis.outcome, Ok(()));

    let methods = analysis
        .trace
        .rules()
        .into_iter()
        .filter(|r| *r == Rule::Methods)
        .count();
    assert_eq!(methods, 3);
}

#[test]
fn test_demo_error() {
    let analysis = analyze(&demo("error.txt"));
    let err = analysis.outcome.expect_err("demo program is invalid");

    assert_eq!(err.code, 60);
    assert_eq!(err.line, 4);
    assert_eq!(err.found, ";");
}

#[test]
fn test_scenario_block_trace() {
    let analysis = analyze("{ int x = 5 ; }");
    assert!(analysis.is_accepted());
    assert_eq!(
        analysis.trace.parse_lines(),
        vec![
            "- RULE_PROGRAM",
            "- {",
            "-- RULE_BODY",
            "--- RULE_VARIABLE",
            "----- RULE_TYPE",
            "----- TYPE: int",
            "--- IDENTIFIER: x",
            "--- =",
            "--- RULE_EXPRESSION",
            "---- RULE_X",
            "----- RULE_Y",
            "------ RULE_R",
            "------- RULE_E",
            "-------- RULE_A",
            "--------- RULE_B",
            "---------- RULE_C",
            "---------- LITERAL: 5",
            "-- ;",
            "- }",
        ]
    );
}

#[test]
fn test_scenario_class_with_empty_params() {
    let analysis = analyze("class Foo { int bar ( ) { return 1 ; } }");
    assert!(analysis.is_accepted());

    let rules = analysis.trace.rules();
    assert_eq!(
        &rules[..4],
        &[Rule::Program, Rule::Methods, Rule::Type, Rule::Params]
    );
    assert!(rules.contains(&Rule::Return));
}

#[test]
fn test_missing_terminators_abort() {
    assert_eq!(error_of("{ x = 1 ; ").code, 1);
    assert_eq!(error_of("{ x = 1 }").code, 17);
    assert_eq!(error_of("{ f ( 1 }").code, 25);
    assert_eq!(error_of("{ while ( a { } }").code, 29);
    assert_eq!(error_of("{ } x").code, 99);
}

#[test]
fn test_nothing_traced_after_error() {
    let analysis = analyze("{ x = ; y = 1 ; }");
    assert_eq!(analysis.outcome.as_ref().map_err(|e| e.code), Err(60));

    let lines = analysis.trace.parse_lines();
    assert_eq!(lines.last().map(String::as_str), Some("---------- RULE_C"));
    assert!(!lines.iter().any(|l| l.contains("IDENTIFIER: y")));
}

#[test]
fn test_end_of_input_uses_last_line() {
    let err = error_of("{\n  int x = 1 ;\n  if ( x ) {\n");
    assert_eq!(err.code, 53);
    assert_eq!(err.found, END_OF_INPUT);
    assert_eq!(err.line, 3);
}

#[test]
fn test_lexical_errors_fail_in_parser() {
    let analysis = analyze("{ x = 0b102 ; }");
    let err = analysis.outcome.expect_err("ERROR token is not an operand");
    assert_eq!(err.code, 60);
    assert_eq!(err.found, "0b102");
}

#[test]
fn test_equality_is_not_assignment() {
    assert_eq!(parse("{ a==b ; }"), Ok(()));
    assert_eq!(parse("{ a = b == c ; }"), Ok(()));
    assert_eq!(error_of("{ x = ; }").code, 60);
}

#[test]
fn test_switch_cases() {
    let ok = "{ switch ( n ) {
        case 1 : x = 1 ; break ;
        case 2 : break
        default : x = 0 ; break ;
    } }";
    assert_eq!(parse(ok), Ok(()));

    assert_eq!(error_of("{ switch ( n ) { case 1 x = 1 ; break ; } }").code, 45);
    assert_eq!(error_of("{ switch ( n ) { default x = 1 ; } }").code, 46);
    assert_eq!(error_of("{ switch ( n ) { x = 1 ; } }").code, 47);
    assert_eq!(error_of("{ switch ( n ) { case 1 : x = 1 ; }").code, 62);
}

#[test]
fn test_single_statement_blocks() {
    assert_eq!(parse("{ if ( a ) x = 1 ; else y = 2 ; }"), Ok(()));
    assert_eq!(parse("{ while ( a ) return ; }"), Ok(()));
    assert_eq!(error_of("{ if ( a ) x = 1 }").code, 55);
    assert_eq!(error_of("{ if ( a ) int x }").code, 54);
}

#[test]
fn test_tracing_does_not_change_outcome() {
    for source in [
        "{ int x = 5 ; }",
        "{ x = ; }",
        "class A { int f ( ) { } }",
        "class A { int f ( { } }",
    ] {
        let tokens = Lexer::new().tokenize_str(source);
        let plain = Parser::new(&tokens).parse_program();

        let mut log = TraceLog::new();
        let traced = Parser::with_trace(&tokens, &mut log).parse_program();

        assert_eq!(plain, traced, "source: {}", source);
        assert!(!log.is_empty());
    }
}

#[test]
fn test_analysis_tokens_match_lexer() {
    let source = demo("class.txt");
    let Analysis { tokens, trace, .. } = analyze(&source);

    assert_eq!(tokens, Lexer::new().tokenize_str(&source));
    let traced: Vec<_> = trace.tokens().cloned().collect();
    assert_eq!(traced, tokens);
    assert!(matches!(trace.events.first(), Some(TraceEvent::Token(_))));
}
