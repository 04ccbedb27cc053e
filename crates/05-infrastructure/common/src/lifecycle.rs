//! 组件生命周期管理

use tracing::warn;

/// 组件生命周期状态
///
/// 注册表返回的实例一定处于 [`LifecycleState::Stale`]：
/// `Uninitialized -> Initialized -> Stale`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LifecycleState {
    /// 未初始化
    #[default]
    Uninitialized,
    /// 已初始化
    Initialized,
    /// 已初始化且等待首次刷新
    Stale,
}

impl LifecycleState {
    /// 状态迁移
    ///
    /// 非预期的迁移只记录警告，状态仍然更新为目标状态。
    pub fn transition(self, next: Self) -> Self {
        if !self.can_transition_to(next) {
            warn!("非预期的生命周期迁移: {:?} -> {:?}", self, next);
        }
        next
    }

    /// 是否允许迁移到目标状态
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Uninitialized, Self::Initialized)
                | (Self::Initialized | Self::Stale, Self::Stale)
        )
    }
}

/// 组件来源
///
/// 记录一次解析命中了哪一条解析路径。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionPath {
    /// 静态目录
    Catalog,
    /// 扩展命名空间
    Extension,
    /// 调试目录
    Debug,
}
