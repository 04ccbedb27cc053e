//! 注册表配置绑定器实现

use infrastructure_common::{BuildEnvironment, ConfigError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// 默认环境变量前缀
pub const DEFAULT_ENV_PREFIX: &str = "QS";

/// 注册表配置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// 是否为可调试环境，未配置时根据编译配置推断
    pub debuggable: Option<bool>,
    /// 未知标识符警告使用的日志标签
    pub log_tag: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            debuggable: None,
            log_tag: "QSFactory".to_string(),
        }
    }
}

impl RegistryConfig {
    /// 解析构建环境
    pub fn build_environment(&self) -> BuildEnvironment {
        self.debuggable
            .map_or_else(BuildEnvironment::from_build, BuildEnvironment::new)
    }

    /// 验证配置
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_tag.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "log_tag 不能为空".to_string(),
            });
        }
        Ok(())
    }
}

/// 注册表配置绑定器
///
/// 依次合并配置文件和环境变量，后加入的来源优先。
#[derive(Debug, Clone)]
pub struct RegistryConfigBinder {
    files: Vec<PathBuf>,
    env_prefix: String,
}

impl RegistryConfigBinder {
    /// 创建新的配置绑定器
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
        }
    }

    /// 添加可选的 TOML 配置文件
    pub fn add_file(mut self, path: impl AsRef<Path>) -> Self {
        self.files.push(path.as_ref().to_path_buf());
        self
    }

    /// 设置环境变量前缀
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// 加载并验证配置
    pub fn load(&self) -> Result<RegistryConfig, ConfigError> {
        debug!("加载注册表配置: files={:?}, env_prefix={}", self.files, self.env_prefix);

        let mut builder = config::Config::builder();
        for path in &self.files {
            builder = builder.add_source(
                config::File::from(path.as_path())
                    .format(config::FileFormat::Toml)
                    .required(false),
            );
        }
        builder = builder.add_source(
            config::Environment::with_prefix(&self.env_prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder.build().map_err(|e| {
            error!("配置构建失败: {}", e);
            ConfigError::LoadError {
                source: Box::new(e),
            }
        })?;

        let config: RegistryConfig = settings.try_deserialize().map_err(|e| {
            error!("配置绑定失败: {}", e);
            ConfigError::LoadError {
                source: Box::new(e),
            }
        })?;

        config.validate()?;
        debug!("注册表配置加载完成: {:?}", config);
        Ok(config)
    }
}

impl Default for RegistryConfigBinder {
    fn default() -> Self {
        Self::new()
    }
}
