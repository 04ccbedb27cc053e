//! 组件提供者抽象接口
//!
//! 提供组件实例创建的工厂模式支持

use infrastructure_common::{Component, ExtensionError};
use std::sync::Arc;

/// 组件提供者 trait
///
/// 每次调用都返回一个新的、已构造但未初始化的实例。
/// 注册表不会串行化对提供者的调用，提供者自身的共享状态由其自行保护。
pub trait ComponentProvider: Send + Sync {
    /// 创建组件实例
    fn provide(&self) -> Box<dyn Component>;
}

/// Lambda 提供者包装器
pub struct FnProvider<F>
where
    F: Fn() -> Box<dyn Component> + Send + Sync + 'static,
{
    provider_fn: F,
}

impl<F> FnProvider<F>
where
    F: Fn() -> Box<dyn Component> + Send + Sync + 'static,
{
    /// 包装一个闭包
    pub fn new(provider_fn: F) -> Self {
        Self { provider_fn }
    }

    /// 包装一个闭包并转换为共享提供者
    pub fn shared(provider_fn: F) -> Arc<dyn ComponentProvider> {
        Arc::new(Self::new(provider_fn))
    }
}

impl<F> ComponentProvider for FnProvider<F>
where
    F: Fn() -> Box<dyn Component> + Send + Sync + 'static,
{
    fn provide(&self) -> Box<dyn Component> {
        (self.provider_fn)()
    }
}

impl<F> std::fmt::Debug for FnProvider<F>
where
    F: Fn() -> Box<dyn Component> + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnProvider")
            .field("provider_fn", &"<function>")
            .finish()
    }
}

/// 扩展组件构建器 trait
///
/// 构建器可能在一次构建中积累状态，因此每次构建都使用新的构建器，
/// `build` 消耗构建器本身。
pub trait ExtensionBuilder: Send {
    /// 根据原始标识符和用户上下文构建组件
    fn build(
        self: Box<Self>,
        spec: &str,
        user_context: &crate::host::UserContext,
    ) -> Result<Box<dyn Component>, ExtensionError>;
}

/// 扩展构建器提供者 trait
pub trait ExtensionBuilderProvider: Send + Sync {
    /// 获取一个新的构建器
    fn builder(&self) -> Box<dyn ExtensionBuilder>;
}

/// Lambda 构建器提供者包装器
pub struct FnBuilderProvider<F>
where
    F: Fn() -> Box<dyn ExtensionBuilder> + Send + Sync + 'static,
{
    builder_fn: F,
}

impl<F> FnBuilderProvider<F>
where
    F: Fn() -> Box<dyn ExtensionBuilder> + Send + Sync + 'static,
{
    /// 包装一个闭包
    pub fn new(builder_fn: F) -> Self {
        Self { builder_fn }
    }
}

impl<F> ExtensionBuilderProvider for FnBuilderProvider<F>
where
    F: Fn() -> Box<dyn ExtensionBuilder> + Send + Sync + 'static,
{
    fn builder(&self) -> Box<dyn ExtensionBuilder> {
        (self.builder_fn)()
    }
}
