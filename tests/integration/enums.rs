//! 枚举端到端测试

use teddy::{compile, Target};

const SOURCE: &str = r#"
enum Shape {
    case circle(r: Float);
    case square(s: Float);
}

let x: Shape = .circle(5.0);
"#;

#[test]
fn test_shape_lowering() {
    let code = compile(SOURCE, Target::C).unwrap();

    assert!(code.contains("typedef struct Shape {"));
    assert!(code.contains("typedef struct _ShapeCircle {\n\tfloat r;\n} _ShapeCircle;"));
    assert!(code.contains("typedef struct _ShapeSquare {\n\tfloat s;\n} _ShapeSquare;"));
    assert!(code.contains("Shape _ShapeCreateCircleCase(const float r)"));
    assert!(code.contains("Shape _ShapeCreateSquareCase(const float s)"));
    assert!(code.contains("Shape x = _ShapeCreateCircleCase(5.0);"));
}

#[test]
fn test_definition_order_is_preserved() {
    let code = compile(SOURCE, Target::C).unwrap();
    let circle = code.find("typedef struct _ShapeCircle").unwrap();
    let square = code.find("typedef struct _ShapeSquare").unwrap();
    let tag = code.find("typedef enum _ShapeTag").unwrap();
    let outer = code.find("typedef struct Shape {").unwrap();
    let construction = code.find("Shape x =").unwrap();
    assert!(circle < square && square < tag && tag < outer && outer < construction);
}

#[test]
fn test_if_let_matches_case() {
    let source = format!(
        "{}\nfunc radius(s: Shape) -> Float {{ if let s: Shape = .circle(radius: Float) {{ return radius; }} return 0.0; }}",
        SOURCE
    );
    let code = compile(&source, Target::C).unwrap();
    assert!(code.contains("if (s.tag == _ShapeCircleTag) {"));
    assert!(code.contains("const float radius = s.circle.r;"));
}
