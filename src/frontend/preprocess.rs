//! 源码预处理
//!
//! 在分词前剥离 `//` 行注释；字符串字面量内的 `//` 原样保留，换行不变。

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// 依次匹配字符串字面量或行注释，先匹配到字符串时整体跳过
static COMMENT_OR_STRING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""(?:[^"\\\n]|\\.)*"|//[^\n]*"#).expect("comment pattern is valid")
});

/// 剥离 `//` 注释
pub fn strip_comments(source: &str) -> String {
    COMMENT_OR_STRING
        .replace_all(source, |caps: &Captures<'_>| {
            let matched = &caps[0];
            if matched.starts_with('"') {
                matched.to_string()
            } else {
                String::new()
            }
        })
        .into_owned()
}
