//! 组件工厂实现
//!
//! 按固定优先级解析标识符：静态目录 → 扩展命名空间 → 调试目录。
//! 命中后统一执行 initialize、mark_stale 生命周期。

use crate::catalog::{CatalogEntry, ComponentCatalog};
use crate::extension::ExtensionResolver;
use crate::gate::EnvironmentGate;
use crate::view::pair_view;
use di_abstractions::{
    ComponentFactory, ComponentProvider, ExtensionBuilderProvider, LazyHost, LogSink,
    TracingLogSink, CUSTOM_TILE_PREFIX,
};
use infrastructure_common::{
    BuildEnvironment, Component, ExtensionError, RegistryError, ResolutionPath, TileView,
    ViewContext,
};
use std::sync::Arc;
use tracing::{debug, info};

/// 默认日志标签
pub const DEFAULT_LOG_TAG: &str = "QSFactory";

/// 一次成功解析的结果
enum Resolved {
    Provider(ResolutionPath, Arc<dyn ComponentProvider>),
    Extension(Box<dyn Component>),
}

/// 组件工厂实现
pub struct ComponentFactoryImpl {
    catalog: ComponentCatalog,
    extensions: ExtensionResolver,
    gate: EnvironmentGate,
    log_sink: Arc<dyn LogSink>,
    log_tag: String,
}

impl ComponentFactoryImpl {
    /// 创建构建器
    pub fn builder() -> ComponentFactoryBuilder {
        ComponentFactoryBuilder::new()
    }

    /// 静态目录
    pub fn catalog(&self) -> &ComponentCatalog {
        &self.catalog
    }

    /// 扩展解析器
    pub fn extensions(&self) -> &ExtensionResolver {
        &self.extensions
    }

    /// 环境门控
    pub fn gate(&self) -> &EnvironmentGate {
        &self.gate
    }

    fn resolve(&self, spec: &str) -> Option<Result<Resolved, ExtensionError>> {
        if let Some(provider) = self.catalog.resolve_builtin(spec) {
            return Some(Ok(Resolved::Provider(ResolutionPath::Catalog, provider)));
        }

        if let Some(result) = self.extensions.try_resolve_extension(spec) {
            return Some(result.map(Resolved::Extension));
        }

        self.gate
            .try_resolve_debug(spec)
            .map(|provider| Ok(Resolved::Provider(ResolutionPath::Debug, provider)))
    }
}

impl ComponentFactory for ComponentFactoryImpl {
    fn create_component(&self, spec: &str) -> Result<Option<Box<dyn Component>>, ExtensionError> {
        let Some(resolved) = self.resolve(spec) else {
            self.log_sink
                .warn(&self.log_tag, &format!("No stock tile spec: {spec}"));
            return Ok(None);
        };

        let (path, mut component) = match resolved? {
            Resolved::Provider(path, provider) => (path, provider.provide()),
            Resolved::Extension(component) => (ResolutionPath::Extension, component),
        };

        component.initialize();
        // 刚创建的组件必须处于过期状态
        component.mark_stale();

        debug!("创建组件: {} ({:?})", spec, path);
        Ok(Some(component))
    }

    fn create_view(
        &self,
        context: &ViewContext,
        component: &dyn Component,
        collapsed: bool,
    ) -> TileView {
        pair_view(context, component, collapsed)
    }
}

impl std::fmt::Debug for ComponentFactoryImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentFactoryImpl")
            .field("catalog", &self.catalog)
            .field("extensions", &self.extensions)
            .field("gate", &self.gate)
            .field("log_tag", &self.log_tag)
            .finish()
    }
}

/// 组件工厂构建器
pub struct ComponentFactoryBuilder {
    stock: Vec<CatalogEntry>,
    debug: Vec<CatalogEntry>,
    extension_prefix: String,
    extension_builders: Option<Arc<dyn ExtensionBuilderProvider>>,
    host: Option<LazyHost>,
    environment: Option<BuildEnvironment>,
    log_sink: Arc<dyn LogSink>,
    log_tag: String,
}

impl ComponentFactoryBuilder {
    /// 创建新的构建器
    pub fn new() -> Self {
        Self {
            stock: Vec::new(),
            debug: Vec::new(),
            extension_prefix: CUSTOM_TILE_PREFIX.to_string(),
            extension_builders: None,
            host: None,
            environment: None,
            log_sink: Arc::new(TracingLogSink),
            log_tag: DEFAULT_LOG_TAG.to_string(),
        }
    }

    /// 注册内置组件提供者
    pub fn register_stock(
        mut self,
        spec: impl Into<String>,
        provider: Arc<dyn ComponentProvider>,
    ) -> Self {
        self.stock.push((spec.into(), provider));
        self
    }

    /// 注册调试专用组件提供者
    pub fn register_debug(
        mut self,
        spec: impl Into<String>,
        provider: Arc<dyn ComponentProvider>,
    ) -> Self {
        self.debug.push((spec.into(), provider));
        self
    }

    /// 设置扩展构建器提供者
    pub fn with_extension_builders(mut self, builders: Arc<dyn ExtensionBuilderProvider>) -> Self {
        self.extension_builders = Some(builders);
        self
    }

    /// 设置扩展命名空间前缀
    pub fn with_extension_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.extension_prefix = prefix.into();
        self
    }

    /// 设置延迟宿主
    pub fn with_host(mut self, host: LazyHost) -> Self {
        self.host = Some(host);
        self
    }

    /// 设置构建环境，未设置时使用 [`BuildEnvironment::current`]
    pub fn with_environment(mut self, environment: BuildEnvironment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// 设置日志接收者
    pub fn with_log_sink(mut self, log_sink: Arc<dyn LogSink>) -> Self {
        self.log_sink = log_sink;
        self
    }

    /// 设置日志标签
    pub fn with_log_tag(mut self, tag: impl Into<String>) -> Self {
        self.log_tag = tag.into();
        self
    }

    /// 构建组件工厂
    pub fn build(self) -> Result<ComponentFactoryImpl, RegistryError> {
        let builders = self
            .extension_builders
            .ok_or(RegistryError::MissingCollaborator {
                name: "extension_builders",
            })?;
        let host = self
            .host
            .ok_or(RegistryError::MissingCollaborator { name: "host" })?;
        let environment = self.environment.unwrap_or_else(BuildEnvironment::current);

        // 目录条目不能落入扩展命名空间，否则会遮蔽扩展解析
        if self.extension_prefix.is_empty() {
            return Err(RegistryError::EmptyExtensionPrefix);
        }
        if let Some((spec, _)) = self
            .stock
            .iter()
            .chain(&self.debug)
            .find(|(spec, _)| spec.starts_with(&self.extension_prefix))
        {
            return Err(RegistryError::ReservedPrefix { spec: spec.clone() });
        }

        let catalog = ComponentCatalog::new(self.stock)?;
        let debug_catalog = ComponentCatalog::new(self.debug)?;

        info!(
            "构建组件工厂完成: {} 个内置组件, {} 个调试组件, debuggable={}",
            catalog.len(),
            debug_catalog.len(),
            environment.is_debuggable()
        );

        Ok(ComponentFactoryImpl {
            catalog,
            extensions: ExtensionResolver::new(self.extension_prefix, builders, host),
            gate: EnvironmentGate::new(environment, debug_catalog),
            log_sink: self.log_sink,
            log_tag: self.log_tag,
        })
    }
}

impl Default for ComponentFactoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
