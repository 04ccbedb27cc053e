//! # Configuration Implementation
//!
//! 注册表配置的具体实现。
//!
//! ## 主要组件
//!
//! - [`RegistryConfig`] - 注册表配置
//! - [`RegistryConfigBinder`] - 从配置文件和环境变量绑定配置

pub mod binder;

pub use binder::*;
