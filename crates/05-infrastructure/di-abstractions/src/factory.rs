//! 组件工厂抽象接口

use infrastructure_common::{Component, ExtensionError, TileView, ViewContext};

/// 自定义磁贴命名空间的保留前缀
pub const CUSTOM_TILE_PREFIX: &str = "custom(";

/// 组件工厂 trait
///
/// 注册表对外暴露的全部接口。
pub trait ComponentFactory: Send + Sync {
    /// 根据标识符创建组件
    ///
    /// 未知标识符返回 `Ok(None)`，只有扩展组件构建失败时返回错误。
    fn create_component(&self, spec: &str) -> Result<Option<Box<dyn Component>>, ExtensionError>;

    /// 为已创建的组件生成视图
    fn create_view(
        &self,
        context: &ViewContext,
        component: &dyn Component,
        collapsed: bool,
    ) -> TileView;
}
