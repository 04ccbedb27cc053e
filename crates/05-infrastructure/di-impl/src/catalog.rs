//! 组件目录
//!
//! 标识符到提供者的不可变映射，构建完成后不再提供任何注册或注销接口。

use di_abstractions::ComponentProvider;
use infrastructure_common::RegistryError;
use std::collections::HashMap;
use std::sync::Arc;

/// 目录条目
pub type CatalogEntry = (String, Arc<dyn ComponentProvider>);

/// 组件目录
#[derive(Clone, Default)]
pub struct ComponentCatalog {
    providers: HashMap<String, Arc<dyn ComponentProvider>>,
    /// 按注册顺序保存的标识符
    specs: Vec<String>,
}

impl ComponentCatalog {
    /// 从有序条目列表构建目录
    ///
    /// 标识符重复时返回 [`RegistryError::DuplicateSpec`]。
    pub fn new<I>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = CatalogEntry>,
    {
        let mut providers = HashMap::new();
        let mut specs = Vec::new();

        for (spec, provider) in entries {
            if providers.contains_key(&spec) {
                return Err(RegistryError::DuplicateSpec { spec });
            }
            specs.push(spec.clone());
            providers.insert(spec, provider);
        }

        Ok(Self { providers, specs })
    }

    /// 空目录
    pub fn empty() -> Self {
        Self::default()
    }

    /// 查找内置组件的提供者
    pub fn resolve_builtin(&self, spec: &str) -> Option<Arc<dyn ComponentProvider>> {
        self.providers.get(spec).cloned()
    }

    /// 是否包含指定标识符
    pub fn contains(&self, spec: &str) -> bool {
        self.providers.contains_key(spec)
    }

    /// 按注册顺序返回所有标识符
    pub fn specs(&self) -> &[String] {
        &self.specs
    }

    /// 条目数量
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl std::fmt::Debug for ComponentCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentCatalog")
            .field("specs", &self.specs)
            .finish()
    }
}
