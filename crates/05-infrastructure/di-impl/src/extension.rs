//! 扩展命名空间解析器
//!
//! 识别带保留前缀的标识符，并把构建委托给外部构建器。

use di_abstractions::{ExtensionBuilderProvider, LazyHost};
use infrastructure_common::{Component, ExtensionError};
use std::sync::Arc;
use tracing::debug;

/// 扩展命名空间解析器
pub struct ExtensionResolver {
    prefix: String,
    builders: Arc<dyn ExtensionBuilderProvider>,
    host: LazyHost,
}

impl ExtensionResolver {
    /// 创建新的扩展解析器
    pub fn new(
        prefix: impl Into<String>,
        builders: Arc<dyn ExtensionBuilderProvider>,
        host: LazyHost,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            builders,
            host,
        }
    }

    /// 保留前缀
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// 标识符是否属于扩展命名空间
    pub fn matches(&self, spec: &str) -> bool {
        spec.starts_with(&self.prefix)
    }

    /// 宿主是否已经被访问过
    pub fn host_initialized(&self) -> bool {
        self.host.is_initialized()
    }

    /// 尝试解析扩展标识符
    ///
    /// 不带前缀时立即返回 `None`，不会访问宿主也不会创建构建器。
    pub fn try_resolve_extension(
        &self,
        spec: &str,
    ) -> Option<Result<Box<dyn Component>, ExtensionError>> {
        if !self.matches(spec) {
            return None;
        }

        debug!("解析扩展组件: {}", spec);
        Some(self.build(spec))
    }

    fn build(&self, spec: &str) -> Result<Box<dyn Component>, ExtensionError> {
        let user_context =
            self.host
                .get()
                .user_context()
                .ok_or_else(|| ExtensionError::MissingUserContext {
                    spec: spec.to_string(),
                })?;

        self.builders.builder().build(spec, &user_context)
    }
}

impl std::fmt::Debug for ExtensionResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtensionResolver")
            .field("prefix", &self.prefix)
            .field("host", &self.host)
            .finish()
    }
}
