//! 文件读写测试

use std::fs;
use teddy::{build_file, compile_file, output_path_for, read_source, CompileConfig, Compiler, Target};

const SOURCE: &str = "func main() -> Int { print(\"hello\"); return 0; }";

#[test]
fn test_build_writes_next_to_source() {
    let dir = tempfile::tempdir().unwrap();
    let source_path = dir.path().join("hello.teddy");
    fs::write(&source_path, SOURCE).unwrap();

    let written = build_file(&Compiler::new(), &source_path, None).unwrap();
    assert_eq!(written, dir.path().join("hello.c"));

    let code = fs::read_to_string(&written).unwrap();
    assert!(code.contains("printf(\"%s\\n\", \"hello\");"));
}

#[test]
fn test_build_cpp_with_explicit_output() {
    let dir = tempfile::tempdir().unwrap();
    let source_path = dir.path().join("hello.teddy");
    let output_path = dir.path().join("out.cc");
    fs::write(&source_path, SOURCE).unwrap();

    let compiler = Compiler::with_config(CompileConfig::new().with_target(Target::Cpp));
    let written = build_file(&compiler, &source_path, Some(&output_path)).unwrap();
    assert_eq!(written, output_path);
    assert!(fs::read_to_string(&output_path)
        .unwrap()
        .contains("cout << \"hello\" << endl;"));
}

#[test]
fn test_output_path_extension() {
    let path = std::path::Path::new("dir/prog.teddy");
    assert_eq!(output_path_for(path, Target::C), std::path::PathBuf::from("dir/prog.c"));
    assert_eq!(output_path_for(path, Target::Cpp), std::path::PathBuf::from("dir/prog.cpp"));
}

#[test]
fn test_missing_file_has_context() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.teddy");

    let err = compile_file(&Compiler::new(), &missing).unwrap_err();
    assert!(err.to_string().starts_with("Failed to read file:"));
    assert!(read_source(&missing).is_none());
}

#[test]
fn test_compile_error_has_file_context() {
    let dir = tempfile::tempdir().unwrap();
    let source_path = dir.path().join("bad.teddy");
    fs::write(&source_path, "func main( -> Int { }").unwrap();

    let err = compile_file(&Compiler::new(), &source_path).unwrap_err();
    let chain = format!("{:#}", err);
    assert!(chain.starts_with("Failed to compile:"));
    assert!(chain.contains("Expected identifier"));
}

#[test]
fn test_config_file_drives_compiler() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("teddy.toml");
    fs::write(&config_path, "target = \"cpp\"\nemit_header = false\n").unwrap();

    let config = CompileConfig::resolve(Some(&config_path)).unwrap();
    let code = Compiler::with_config(config).compile(SOURCE).unwrap();
    assert!(code.starts_with("#include <iostream>"));
}
