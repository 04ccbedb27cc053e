//! # Dependency Injection Abstractions
//!
//! 磁贴注册表的抽象层，定义组件提供者、宿主和工厂的核心接口。
//!
//! ## 核心接口
//!
//! - [`ComponentProvider`] - 组件提供者接口
//! - [`ExtensionBuilder`] - 扩展组件构建器接口
//! - [`TileHost`] / [`LazyHost`] - 宿主及其延迟获取
//! - [`LogSink`] - 日志接收者接口
//! - [`ComponentFactory`] - 组件工厂接口

pub mod factory;
pub mod host;
pub mod logging;
pub mod provider;

pub use factory::*;
pub use host::*;
pub use logging::*;
pub use provider::*;
