//! 视图配对

use infrastructure_common::{Component, TileView, ViewContext};

/// 为组件生成视图包装
///
/// 由组件自己创建图标视图，再与布局标志组合。
pub fn pair_view(context: &ViewContext, component: &dyn Component, collapsed: bool) -> TileView {
    let icon = component.create_icon_view(context);
    TileView::new(icon, collapsed)
}
