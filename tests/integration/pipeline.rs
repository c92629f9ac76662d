//! 端到端编译流水线测试

use teddy::{
    compile, parse, tokenize, CompileConfig, CompileError, Compiler, LexError, LexPolicy, Node,
    ParseError, Target,
};

fn squash(code: &str) -> String {
    code.chars().filter(|c| !c.is_whitespace()).collect()
}

#[test]
fn test_empty_source() {
    assert!(tokenize("").unwrap().is_empty());
    assert!(parse(&[]).unwrap().is_empty());

    let code = compile("", Target::C).unwrap();
    assert!(code.lines().all(|line| line.starts_with("#include")));
}

#[test]
fn test_add_scenario() {
    let source = "func add(a: Int, b: Int) -> Int { return a + b; }";

    let ast = parse(&tokenize(source).unwrap()).unwrap();
    assert_eq!(ast.len(), 1);
    let Node::Function(func) = &ast[0] else {
        panic!("Expected function");
    };
    assert_eq!(func.prototype.name, "add");
    assert_eq!(func.prototype.formals.len(), 2);

    let code = compile(source, Target::C).unwrap();
    assert!(squash(&code).ends_with(&squash(
        "int add(const int a, const int b) {return a + b;}"
    )));
}

#[test]
fn test_comments_are_stripped_by_default() {
    let source = "// adds numbers\nfunc add(a: Int, b: Int) -> Int { return a + b; // sum\n}";
    let code = compile(source, Target::C).unwrap();
    assert!(code.contains("int add(const int a, const int b)"));
}

#[test]
fn test_comments_fail_without_stripping() {
    let config = CompileConfig::new()
        .with_strip_comments(false)
        .with_emit_header(false);
    let err = Compiler::with_config(config)
        .compile("// note\nlet x: Int;")
        .unwrap_err();
    assert_eq!(err, CompileError::Parse(ParseError::ExpectedExpression));
}

#[test]
fn test_lex_policy_from_config() {
    let source = "let x: Int = 1 % 2;";

    let strict = Compiler::new().compile(source).unwrap_err();
    assert!(matches!(
        strict,
        CompileError::Lex(LexError::UnexpectedChar { ch: '%', .. })
    ));

    let skip = Compiler::with_config(CompileConfig::new().with_lex_policy(LexPolicy::Skip));
    // `%` is dropped, leaving `1 2` which is not a valid expression
    assert_eq!(
        skip.compile(source).unwrap_err(),
        CompileError::Parse(ParseError::ExpectedCharacter(";".to_string()))
    );
    assert!(skip.compile("let x: Int = 1 @ + 2;").is_ok());
}

#[test]
fn test_header_banner() {
    let code = Compiler::new().compile("let x: Int;").unwrap();
    assert!(code.starts_with("/*\n"));
    assert!(code.contains(&format!("Generated by {} {}", teddy::NAME, teddy::VERSION)));
    assert!(code.contains("*/\n#include <stdio.h>"));

    let plain = compile("let x: Int;", Target::C).unwrap();
    assert!(plain.starts_with("#include <stdio.h>"));
}

#[test]
fn test_cpp_target() {
    let code = compile(
        "func main() -> Int { let s: String = \"hi\"; print(s); return 0; }",
        Target::Cpp,
    )
    .unwrap();
    assert!(code.contains("using namespace std;"));
    assert!(code.contains("string s = \"hi\";"));
    assert!(code.contains("cout << s << endl;"));
}

#[test]
fn test_error_display_chains_stage() {
    let err = compile("func f( -> Int { }", Target::C).unwrap_err();
    assert_eq!(err.to_string(), "Parse error: Expected identifier");
}

#[test]
fn test_no_partial_output_on_codegen_error() {
    let result = compile(
        "enum E { case a; } func f(x: E) -> Void { if let x: E = .b { } }",
        Target::C,
    );
    assert!(matches!(result, Err(CompileError::Codegen(_))));
}
