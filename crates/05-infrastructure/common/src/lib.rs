//! # Infrastructure Common
//!
//! 这个 crate 提供了快捷设置磁贴注册表的公共 traits 和类型。
//!
//! ## 核心组件
//!
//! - [`Component`] - 组件基础 trait
//! - [`ComponentBase`] - 统一的生命周期记录
//! - [`LifecycleState`] - 组件生命周期状态
//! - [`BuildEnvironment`] - 构建环境标志
//!
//! ## 设计原则
//!
//! - 每个返回给调用方的组件都已初始化并标记为过期
//! - 注册表构建完成后不可变
//! - 调试专用组件在生产环境中不可达

pub mod component;
pub mod environment;
pub mod errors;
pub mod lifecycle;
pub mod view;

pub use component::*;
pub use environment::*;
pub use errors::*;
pub use lifecycle::*;
pub use view::*;
