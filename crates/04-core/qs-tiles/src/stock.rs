//! 内置磁贴及其提供者

use crate::kind::TileKind;
use di_abstractions::ComponentProvider;
use infrastructure_common::{Component, ComponentBase, IconView, LifecycleState, ViewContext};
use std::any::Any;
use std::sync::Arc;
use uuid::Uuid;

/// 内置磁贴
#[derive(Debug)]
pub struct StockTile {
    kind: TileKind,
    base: ComponentBase,
}

impl StockTile {
    /// 创建未初始化的磁贴
    pub fn new(kind: TileKind) -> Self {
        Self {
            kind,
            base: ComponentBase::new(kind.spec()),
        }
    }

    /// 磁贴种类
    pub fn kind(&self) -> TileKind {
        self.kind
    }

    /// 显示名称
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    /// 实例ID
    pub fn instance_id(&self) -> Uuid {
        self.base.instance_id()
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

impl Component for StockTile {
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

    fn create_icon_view(&self, context: &ViewContext) -> IconView {
        let icon = if context.dark_theme {
            format!("{}_dark", self.kind.icon())
        } else {
            self.kind.icon().to_string()
        };
        IconView::new(self.kind.spec(), icon)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// 内置磁贴提供者
#[derive(Debug, Clone, Copy)]
pub struct StockTileProvider {
    kind: TileKind,
}

impl StockTileProvider {
    /// 创建指定种类的提供者
    pub fn new(kind: TileKind) -> Self {
        Self { kind }
    }

    /// 提供者负责的种类
    pub fn kind(&self) -> TileKind {
        self.kind
    }
}

impl ComponentProvider for StockTileProvider {
    fn provide(&self) -> Box<dyn Component> {
        Box::new(StockTile::new(self.kind))
    }
}

fn providers(kinds: &[TileKind]) -> Vec<(&'static str, Arc<dyn ComponentProvider>)> {
    kinds
        .iter()
        .map(|&kind| {
            (
                kind.spec(),
                Arc::new(StockTileProvider::new(kind)) as Arc<dyn ComponentProvider>,
            )
        })
        .collect()
}

/// 所有内置磁贴的提供者，按注册顺序排列
pub fn stock_providers() -> Vec<(&'static str, Arc<dyn ComponentProvider>)> {
    providers(TileKind::STOCK)
}

/// 所有调试专用磁贴的提供者
pub fn debug_providers() -> Vec<(&'static str, Arc<dyn ComponentProvider>)> {
    providers(TileKind::DEBUG)
}
