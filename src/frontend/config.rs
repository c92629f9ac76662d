//! 编译配置
//!
//! 管理目标方言、词法错误策略、注释剥离和输出选项。
//!
//! 查找顺序：
//!
//! ```text
//! 1. --config <PATH>
//! 2. 当前目录下的 teddy.toml
//! 3. 默认值
//! ```

use crate::frontend::core::lexer::LexPolicy;
use crate::middle::codegen::Target;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 项目级配置文件名
pub const CONFIG_FILE_NAME: &str = "teddy.toml";

/// 编译配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileConfig {
    /// 输出方言
    #[serde(default)]
    pub target: Target,

    /// 无法识别字符的处理方式
    #[serde(default)]
    pub lex_policy: LexPolicy,

    /// 分词前剥离 `//` 注释
    #[serde(default = "default_true")]
    pub strip_comments: bool,

    /// 在输出开头加生成标记注释
    #[serde(default = "default_true")]
    pub emit_header: bool,

    /// 默认输出路径
    #[serde(default)]
    pub output: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            target: Target::default(),
            lex_policy: LexPolicy::default(),
            strip_comments: true,
            emit_header: true,
            output: None,
        }
    }
}

impl CompileConfig {
    /// 创建默认配置
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置输出方言
    #[inline]
    pub fn with_target(
        mut self,
        target: Target,
    ) -> Self {
        self.target = target;
        self
    }

    /// 设置词法错误策略
    #[inline]
    pub fn with_lex_policy(
        mut self,
        policy: LexPolicy,
    ) -> Self {
        self.lex_policy = policy;
        self
    }

    #[inline]
    pub fn with_strip_comments(
        mut self,
        strip: bool,
    ) -> Self {
        self.strip_comments = strip;
        self
    }

    #[inline]
    pub fn with_emit_header(
        mut self,
        emit: bool,
    ) -> Self {
        self.emit_header = emit;
        self
    }

    /// 从 TOML 文本解析
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// 从文件加载
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// 按查找顺序加载：显式路径、当前目录的 `teddy.toml`、默认值
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            tracing::debug!("Loading config from {}", path.display());
            return Self::load(path);
        }

        let local = Path::new(CONFIG_FILE_NAME);
        if local.is_file() {
            tracing::debug!("Loading config from {}", CONFIG_FILE_NAME);
            return Self::load(local);
        }

        Ok(Self::default())
    }

    /// 保存为 TOML
    pub fn save(
        &self,
        path: &Path,
    ) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// 配置错误
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CompileConfig::default();
        assert_eq!(config.target, Target::C);
        assert_eq!(config.lex_policy, LexPolicy::Strict);
        assert!(config.strip_comments);
        assert!(config.emit_header);
        assert!(config.output.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = CompileConfig::from_toml("target = \"cpp\"\nlex_policy = \"skip\"\n").unwrap();
        assert_eq!(config.target, Target::Cpp);
        assert_eq!(config.lex_policy, LexPolicy::Skip);
        assert!(config.strip_comments);
        assert!(config.emit_header);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(CompileConfig::from_toml("").unwrap(), CompileConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            CompileConfig::from_toml("target = \"java\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let config = CompileConfig::new()
            .with_target(Target::Cpp)
            .with_emit_header(false);

        config.save(&path).unwrap();
        assert_eq!(CompileConfig::load(&path).unwrap(), config);
        assert_eq!(CompileConfig::resolve(Some(&path)).unwrap(), config);
    }

    #[test]
    fn test_missing_explicit_config() {
        let err = CompileConfig::resolve(Some(Path::new("/nonexistent/teddy.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
