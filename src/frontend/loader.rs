//! 源文件加载

use std::fs;
use std::path::Path;

/// 读取源文件；失败时记录日志并返回 `None`
pub fn read_source(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(source) => {
            tracing::debug!("Loaded {} ({} bytes)", path.display(), source.len());
            Some(source)
        }
        Err(err) => {
            tracing::error!("Cannot read {}: {}", path.display(), err);
            None
        }
    }
}
