//! 磁贴模块装配
//!
//! 把内置、调试和自定义磁贴注册到组件工厂构建器。

use crate::custom::CustomTileBuilderProvider;
use crate::stock::{debug_providers, stock_providers};
use di_abstractions::LazyHost;
use di_impl::{ComponentFactoryBuilder, ComponentFactoryImpl};
use infrastructure_common::{BuildEnvironment, RegistryError};
use std::sync::Arc;

/// 注册全部磁贴
pub fn install(mut builder: ComponentFactoryBuilder) -> ComponentFactoryBuilder {
    for (spec, provider) in stock_providers() {
        builder = builder.register_stock(spec, provider);
    }
    for (spec, provider) in debug_providers() {
        builder = builder.register_debug(spec, provider);
    }
    builder.with_extension_builders(Arc::new(CustomTileBuilderProvider))
}

/// 使用默认装配构建组件工厂
pub fn qs_factory(
    host: LazyHost,
    environment: BuildEnvironment,
) -> Result<ComponentFactoryImpl, RegistryError> {
    install(ComponentFactoryImpl::builder())
        .with_host(host)
        .with_environment(environment)
        .build()
}
