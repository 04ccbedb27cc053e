//! 自定义磁贴
//!
//! 第三方声明的磁贴使用 `custom(<package>/<class>)` 形式的标识符，
//! 由 [`CustomTileBuilder`] 结合宿主提供的用户上下文构建。

use di_abstractions::{ExtensionBuilder, ExtensionBuilderProvider, UserContext, CUSTOM_TILE_PREFIX};
use infrastructure_common::{
    Component, ComponentBase, ExtensionError, IconView, LifecycleState, ViewContext,
};
use std::any::Any;
use tracing::debug;

/// 自定义磁贴所属的组件名称
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentName {
    /// 包名
    pub package: String,
    /// 类名（已展开为完整类名）
    pub class: String,
}

impl ComponentName {
    /// 创建新的组件名称
    pub fn new(package: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            class: class.into(),
        }
    }

    /// 解析 `package/class` 形式的字符串
    ///
    /// 以 `.` 开头的类名相对于包名展开。
    pub fn unflatten(flat: &str) -> Option<Self> {
        let (package, class) = flat.split_once('/')?;
        if package.is_empty() || class.is_empty() || class.contains('/') {
            return None;
        }

        let class = if class.starts_with('.') {
            format!("{package}{class}")
        } else {
            class.to_string()
        };
        Some(Self::new(package, class))
    }

    /// 转换为 `package/class` 形式
    pub fn flatten(&self) -> String {
        format!("{}/{}", self.package, self.class)
    }
}

impl std::fmt::Display for ComponentName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.package, self.class)
    }
}

/// 自定义磁贴
#[derive(Debug)]
pub struct CustomTile {
    base: ComponentBase,
    component: ComponentName,
    user_context: UserContext,
}

impl CustomTile {
    /// 根据组件名称生成标识符
    pub fn to_spec(component: &ComponentName) -> String {
        format!("{CUSTOM_TILE_PREFIX}{})", component.flatten())
    }

    /// 从标识符中解析组件名称
    pub fn component_from_spec(spec: &str) -> Result<ComponentName, ExtensionError> {
        let action = spec
            .strip_prefix(CUSTOM_TILE_PREFIX)
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| ExtensionError::BadSpec {
                spec: spec.to_string(),
            })?;

        if action.is_empty() {
            return Err(ExtensionError::EmptyAction {
                spec: spec.to_string(),
            });
        }

        ComponentName::unflatten(action).ok_or_else(|| ExtensionError::BadSpec {
            spec: spec.to_string(),
        })
    }

    /// 磁贴所属的组件
    pub fn component(&self) -> &ComponentName {
        &self.component
    }

    /// 创建磁贴时的用户上下文
    pub fn user_context(&self) -> &UserContext {
        &self.user_context
    }

    /// initialize 被调用的次数
    pub fn initialize_count(&self) -> usize {
        self.base.initialize_count()
    }

    /// mark_stale 被调用的次数
    pub fn stale_count(&self) -> usize {
        self.base.stale_count()
    }
}

impl Component for CustomTile {
    fn spec(&self) -> &str {
        self.base.spec()
    }

    fn initialize(&mut self) {
        self.base.initialize();
    }

    fn mark_stale(&mut self) {
        self.base.mark_stale();
    }

    fn lifecycle_state(&self) -> LifecycleState {
        self.base.state()
    }

    fn create_icon_view(&self, _context: &ViewContext) -> IconView {
        IconView::new(self.base.spec(), format!("package:{}", self.component.package))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// 自定义磁贴构建器
///
/// 每次构建都应使用新的构建器。
#[derive(Debug, Default)]
pub struct CustomTileBuilder {
    spec: Option<String>,
    user_context: Option<UserContext>,
}

impl CustomTileBuilder {
    /// 创建新的构建器
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置标识符
    pub fn spec(mut self, spec: impl Into<String>) -> Self {
        self.spec = Some(spec.into());
        self
    }

    /// 设置用户上下文
    pub fn user_context(mut self, user_context: UserContext) -> Self {
        self.user_context = Some(user_context);
        self
    }

    /// 完成构建
    pub fn finish(self) -> Result<CustomTile, ExtensionError> {
        let spec = self.spec.ok_or_else(|| ExtensionError::BuilderFailed {
            spec: String::new(),
            message: "未设置标识符".to_string(),
        })?;
        let component = CustomTile::component_from_spec(&spec)?;
        let user_context = self
            .user_context
            .ok_or_else(|| ExtensionError::MissingUserContext { spec: spec.clone() })?;

        debug!("构建自定义磁贴: {} (user={})", component, user_context.user_id);
        Ok(CustomTile {
            base: ComponentBase::new(spec),
            component,
            user_context,
        })
    }
}

impl ExtensionBuilder for CustomTileBuilder {
    fn build(
        self: Box<Self>,
        spec: &str,
        user_context: &UserContext,
    ) -> Result<Box<dyn Component>, ExtensionError> {
        let tile = self.spec(spec).user_context(user_context.clone()).finish()?;
        Ok(Box::new(tile))
    }
}

/// 自定义磁贴构建器提供者
#[derive(Debug, Default, Clone, Copy)]
pub struct CustomTileBuilderProvider;

impl ExtensionBuilderProvider for CustomTileBuilderProvider {
    fn builder(&self) -> Box<dyn ExtensionBuilder> {
        Box::new(CustomTileBuilder::new())
    }
}
