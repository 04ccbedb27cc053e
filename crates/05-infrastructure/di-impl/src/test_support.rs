//! 单元测试使用的替身组件

use di_abstractions::{ExtensionBuilder, ExtensionBuilderProvider, LogSink, TileHost, UserContext};
use infrastructure_common::{
    Component, ComponentBase, ExtensionError, IconView, LifecycleState, ViewContext,
};
use parking_lot::Mutex;
use std::any::Any;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// 记录生命周期调用次数的组件
#[derive(Debug)]
pub struct CountingTile {
    pub base: ComponentBase,
}

impl CountingTile {
    pub fn new(spec: &str) -> Self {
        Self {
            base: ComponentBase::new(spec),
        }
    }
}

impl Component for CountingTile {
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
        IconView::new(self.base.spec(), "ic_test")
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// 记录所有警告的日志接收者
#[derive(Default)]
pub struct RecordingLogSink {
    entries: Mutex<Vec<(String, String)>>,
}

impl RecordingLogSink {
    pub fn entries(&self) -> Vec<(String, String)> {
        self.entries.lock().clone()
    }
}

impl LogSink for RecordingLogSink {
    fn warn(&self, tag: &str, message: &str) {
        self.entries
            .lock()
            .push((tag.to_string(), message.to_string()));
    }
}

/// 返回固定用户上下文的宿主
pub struct FixedHost {
    context: Option<UserContext>,
}

impl FixedHost {
    pub fn with_user(user_id: u32) -> Self {
        Self {
            context: Some(UserContext::new(user_id, "com.android.systemui")),
        }
    }

    pub fn without_user() -> Self {
        Self { context: None }
    }
}

impl TileHost for FixedHost {
    fn user_context(&self) -> Option<UserContext> {
        self.context.clone()
    }
}

/// 统计构建器创建次数的构建器提供者
#[derive(Default)]
pub struct CountingBuilders {
    created: AtomicUsize,
    last_user: Arc<Mutex<Option<u32>>>,
    failing: bool,
}

impl CountingBuilders {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    pub fn last_user_id(&self) -> Option<u32> {
        *self.last_user.lock()
    }
}

impl ExtensionBuilderProvider for CountingBuilders {
    fn builder(&self) -> Box<dyn ExtensionBuilder> {
        self.created.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            Box::new(FailingBuilder)
        } else {
            Box::new(RecordingBuilder {
                last_user: Arc::clone(&self.last_user),
            })
        }
    }
}

struct RecordingBuilder {
    last_user: Arc<Mutex<Option<u32>>>,
}

impl ExtensionBuilder for RecordingBuilder {
    fn build(
        self: Box<Self>,
        spec: &str,
        user_context: &UserContext,
    ) -> Result<Box<dyn Component>, ExtensionError> {
        *self.last_user.lock() = Some(user_context.user_id);
        Ok(Box::new(CountingTile::new(spec)))
    }
}

struct FailingBuilder;

impl ExtensionBuilder for FailingBuilder {
    fn build(
        self: Box<Self>,
        spec: &str,
        _user_context: &UserContext,
    ) -> Result<Box<dyn Component>, ExtensionError> {
        Err(ExtensionError::BuilderFailed {
            spec: spec.to_string(),
            message: "builder rejected spec".to_string(),
        })
    }
}
