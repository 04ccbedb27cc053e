//! 构建环境标志
//!
//! 调试专用组件只有在可调试环境中才能被解析。该标志在进程启动时确定一次，
//! 之后只读。

use once_cell::sync::OnceCell;
use tracing::{debug, warn};

static CURRENT_ENVIRONMENT: OnceCell<BuildEnvironment> = OnceCell::new();

/// 构建环境
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BuildEnvironment {
    debuggable: bool,
}

impl BuildEnvironment {
    /// 可调试环境
    pub const DEBUGGABLE: Self = Self { debuggable: true };

    /// 生产环境
    pub const PRODUCTION: Self = Self { debuggable: false };

    /// 创建构建环境
    pub const fn new(debuggable: bool) -> Self {
        Self { debuggable }
    }

    /// 根据编译配置推断构建环境
    pub const fn from_build() -> Self {
        Self::new(cfg!(debug_assertions))
    }

    /// 是否为可调试环境
    pub const fn is_debuggable(self) -> bool {
        self.debuggable
    }

    /// 设置进程级构建环境
    ///
    /// 只有第一次调用生效，返回实际生效的环境。
    pub fn install(environment: Self) -> Self {
        let current = *CURRENT_ENVIRONMENT.get_or_init(|| environment);
        if current == environment {
            debug!("构建环境: debuggable={}", current.debuggable);
        } else {
            warn!(
                "构建环境已确定，忽略新的设置: current={}, requested={}",
                current.debuggable, environment.debuggable
            );
        }
        current
    }

    /// 获取进程级构建环境，未设置时根据编译配置推断
    pub fn current() -> Self {
        *CURRENT_ENVIRONMENT.get_or_init(Self::from_build)
    }
}

impl Default for BuildEnvironment {
    fn default() -> Self {
        Self::from_build()
    }
}
