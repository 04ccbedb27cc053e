//! 视图相关类型
//!
//! 这里只描述视图的组合结构，不负责渲染。

/// 创建视图时使用的上下文
#[derive(Debug, Clone, PartialEq)]
pub struct ViewContext {
    /// 显示密度
    pub density: f32,
    /// 是否为夜间主题
    pub dark_theme: bool,
}

impl ViewContext {
    /// 创建新的视图上下文
    pub fn new(density: f32) -> Self {
        Self {
            density,
            dark_theme: false,
        }
    }

    /// 设置夜间主题
    pub fn with_dark_theme(mut self, dark_theme: bool) -> Self {
        self.dark_theme = dark_theme;
        self
    }
}

impl Default for ViewContext {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// 组件提供的图标视图
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconView {
    /// 所属组件标识
    pub spec: String,
    /// 图标资源名称
    pub icon: String,
}

impl IconView {
    /// 创建新的图标视图
    pub fn new(spec: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            spec: spec.into(),
            icon: icon.into(),
        }
    }
}

/// 组件视图包装
///
/// 由组件的图标视图和布局密度标志组合而成。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileView {
    /// 图标视图
    pub icon: IconView,
    /// 是否为折叠布局
    pub collapsed: bool,
}

impl TileView {
    /// 组合图标视图与布局标志
    pub fn new(icon: IconView, collapsed: bool) -> Self {
        Self { icon, collapsed }
    }
}
