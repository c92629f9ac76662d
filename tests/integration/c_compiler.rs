//! 用系统 C/C++ 编译器检查生成代码
//!
//! 找不到编译器时跳过。

use std::fs;
use std::path::Path;
use std::process::Command;
use teddy::{compile, Target};

const PROGRAM: &str = r#"
// shapes and arithmetic
enum Shape {
    case circle(r: Float);
    case square(s: Float);
    case label(text: String);
    case empty;
}

func area(s: Shape) -> Float {
    if let s: Shape = .circle(r: Float) {
        return r * r * 3.14;
    }
    if let s: Shape = .square(side: Float) {
        return side * side;
    }
    return 0.0;
}

func add(a: Int, b: Int) -> Int {
    return a + b;
}

func main() -> Int {
    let x: Shape = .circle(5.0);
    let nothing: Shape = .empty;
    let tagged: Shape = .label("hi");
    var total: Int = (add(1, 2) - 1) * 3;
    let name: String = "teddy // not a comment";
    let ok: Bool = true;
    print(name, total, area(x), area(nothing), area(tagged), ok);
    if total {
        print("positive");
    }
    return 0;
}
"#;

/// 只有全局声明、字面量与二元运算的程序
const GLOBALS: &str = r#"
let a: Int = 1 + 2 * 3;
a * 2 + 1;
42;
var b: Float = 2.5 / 0.5;
let c: Bool = true;
let s: String = "x";

func main() -> Int {
    print(a, b, c, s);
    return 0;
}
"#;

fn compiler_available(compiler: &str) -> bool {
    Command::new(compiler)
        .arg("--version")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}

fn check_syntax(
    compiler: &str,
    std_flag: &str,
    path: &Path,
) {
    let output = Command::new(compiler)
        .arg(std_flag)
        .args(["-fsyntax-only", "-Wall", "-Werror"])
        .arg(path)
        .output()
        .expect("compiler should run");
    assert!(
        output.status.success(),
        "{} rejected generated code:\n{}\n{}",
        compiler,
        String::from_utf8_lossy(&output.stderr),
        fs::read_to_string(path).unwrap_or_default()
    );
}

fn check_program(
    source: &str,
    target: Target,
) {
    let (compiler, std_flag, file) = match target {
        Target::C => ("cc", "-std=c99", "program.c"),
        Target::Cpp => ("c++", "-std=c++11", "program.cpp"),
    };
    if !compiler_available(compiler) {
        eprintln!("{} not found, skipping", compiler);
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(file);
    fs::write(&path, compile(source, target).unwrap()).unwrap();
    check_syntax(compiler, std_flag, &path);
}

#[test]
fn test_generated_c_compiles() {
    check_program(PROGRAM, Target::C);
}

#[test]
fn test_generated_cpp_compiles() {
    check_program(PROGRAM, Target::Cpp);
}

#[test]
fn test_globals_compile() {
    check_program(GLOBALS, Target::C);
    check_program(GLOBALS, Target::Cpp);
}
