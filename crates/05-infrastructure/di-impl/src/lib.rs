//! # 组件注册表具体实现
//!
//! 提供静态组件目录、扩展命名空间解析器、环境门控以及组织它们的组件工厂。
//!
//! ## 解析顺序
//!
//! 1. 静态目录 [`ComponentCatalog`]
//! 2. 扩展命名空间 [`ExtensionResolver`]
//! 3. 调试目录 [`EnvironmentGate`]
//! 4. 未解析：记录警告并返回空结果

pub mod catalog;
pub mod extension;
pub mod factory;
pub mod gate;
pub mod view;

#[cfg(test)]
mod test_support;

pub use catalog::*;
pub use extension::*;
pub use factory::*;
pub use gate::*;
pub use view::*;
