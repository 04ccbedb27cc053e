//! 环境门控
//!
//! 调试专用组件的解析器，只有在可调试环境中才会查询调试目录。

use crate::catalog::ComponentCatalog;
use di_abstractions::ComponentProvider;
use infrastructure_common::BuildEnvironment;
use std::sync::Arc;

/// 环境门控
#[derive(Debug, Clone)]
pub struct EnvironmentGate {
    environment: BuildEnvironment,
    debug_catalog: ComponentCatalog,
}

impl EnvironmentGate {
    /// 创建新的环境门控
    pub fn new(environment: BuildEnvironment, debug_catalog: ComponentCatalog) -> Self {
        Self {
            environment,
            debug_catalog,
        }
    }

    /// 当前构建环境
    pub fn environment(&self) -> BuildEnvironment {
        self.environment
    }

    /// 尝试解析调试组件
    ///
    /// 非调试环境下无论标识符是什么都返回 `None`，调试目录不会被访问。
    pub fn try_resolve_debug(&self, spec: &str) -> Option<Arc<dyn ComponentProvider>> {
        if !self.environment.is_debuggable() {
            return None;
        }
        self.debug_catalog.resolve_builtin(spec)
    }
}
