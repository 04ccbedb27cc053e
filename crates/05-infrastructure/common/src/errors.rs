//! 错误类型定义

use thiserror::Error;

/// 扩展组件构建错误类型
///
/// 只有扩展命名空间的解析会向调用方返回错误；
/// 未知标识符不是错误，而是记录警告后返回空结果。
#[derive(Error, Debug)]
pub enum ExtensionError {
    #[error("自定义磁贴标识缺少动作: {spec}")]
    EmptyAction { spec: String },

    #[error("自定义磁贴标识格式错误: {spec}")]
    BadSpec { spec: String },

    #[error("宿主未提供用户上下文: {spec}")]
    MissingUserContext { spec: String },

    #[error("扩展组件构建失败: {spec}, 原因: {message}")]
    BuilderFailed { spec: String, message: String },
}

impl ExtensionError {
    /// 出错的标识符
    pub fn spec(&self) -> &str {
        match self {
            Self::EmptyAction { spec }
            | Self::BadSpec { spec }
            | Self::MissingUserContext { spec }
            | Self::BuilderFailed { spec, .. } => spec,
        }
    }
}

/// 注册表构建错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("组件标识重复注册: {spec}")]
    DuplicateSpec { spec: String },

    #[error("缺少必需的协作组件: {name}")]
    MissingCollaborator { name: &'static str },

    #[error("扩展命名空间前缀不能为空")]
    EmptyExtensionPrefix,

    #[error("组件标识占用了扩展命名空间前缀: {spec}")]
    ReservedPrefix { spec: String },
}

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置加载失败: {source}")]
    LoadError {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("配置验证失败: {message}")]
    ValidationError { message: String },
}
