//! 组件基础接口定义
//!
//! 提供所有快捷设置磁贴组件必须实现的基础 trait

use crate::lifecycle::LifecycleState;
use crate::view::{IconView, ViewContext};
use std::any::Any;
use std::fmt::Debug;
use uuid::Uuid;

/// 组件基础 trait
///
/// 所有由注册表创建的组件都必须实现此 trait。注册表在返回实例之前
/// 依次调用 [`Component::initialize`] 和 [`Component::mark_stale`]。
pub trait Component: Send + Sync + Debug + 'static {
    /// 创建该组件时使用的标识符
    fn spec(&self) -> &str;

    /// 组件初始化
    fn initialize(&mut self);

    /// 标记组件状态为过期，首次展示前需要刷新
    fn mark_stale(&mut self);

    /// 获取生命周期状态
    fn lifecycle_state(&self) -> LifecycleState;

    /// 创建组件的图标视图
    fn create_icon_view(&self, context: &ViewContext) -> IconView;

    /// 用于向下转型到具体组件类型
    fn as_any(&self) -> &dyn Any;
}

/// 组件基础实现
///
/// 记录生命周期状态以及 initialize / mark_stale 的调用次数，
/// 具体组件通过组合该结构体获得统一的生命周期语义。
#[derive(Debug, Clone)]
pub struct ComponentBase {
    spec: String,
    instance_id: Uuid,
    state: LifecycleState,
    initialize_count: usize,
    stale_count: usize,
}

impl ComponentBase {
    /// 创建新的组件基础实例
    pub fn new(spec: impl Into<String>) -> Self {
        Self {
            spec: spec.into(),
            instance_id: Uuid::new_v4(),
            state: LifecycleState::Uninitialized,
            initialize_count: 0,
            stale_count: 0,
        }
    }

    /// 组件标识符
    pub fn spec(&self) -> &str {
        &self.spec
    }

    /// 实例ID，每次构造都不同
    pub fn instance_id(&self) -> Uuid {
        self.instance_id
    }

    /// 当前生命周期状态
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// initialize 被调用的次数
    pub fn initialize_count(&self) -> usize {
        self.initialize_count
    }

    /// mark_stale 被调用的次数
    pub fn stale_count(&self) -> usize {
        self.stale_count
    }

    /// 执行初始化
    pub fn initialize(&mut self) {
        self.initialize_count += 1;
        self.state = self.state.transition(LifecycleState::Initialized);
    }

    /// 标记为过期
    pub fn mark_stale(&mut self) {
        self.stale_count += 1;
        self.state = self.state.transition(LifecycleState::Stale);
    }
}
