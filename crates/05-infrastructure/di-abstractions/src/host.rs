//! 宿主抽象接口
//!
//! 扩展组件构建时需要宿主提供的用户上下文。宿主通过 [`LazyHost`] 延迟获取，
//! 只有真正解析扩展标识符时才会触发初始化。

use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::debug;

/// 用户上下文
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserContext {
    /// 当前用户ID
    pub user_id: u32,
    /// 上下文所属的包名
    pub package_name: String,
}

impl UserContext {
    /// 创建新的用户上下文
    pub fn new(user_id: u32, package_name: impl Into<String>) -> Self {
        Self {
            user_id,
            package_name: package_name.into(),
        }
    }
}

/// 磁贴宿主 trait
pub trait TileHost: Send + Sync {
    /// 获取当前用户上下文
    fn user_context(&self) -> Option<UserContext>;
}

type HostInit = Box<dyn Fn() -> Arc<dyn TileHost> + Send + Sync>;

/// 延迟解析的宿主
pub struct LazyHost {
    cell: OnceCell<Arc<dyn TileHost>>,
    init: HostInit,
}

impl LazyHost {
    /// 使用初始化函数创建延迟宿主
    pub fn new<F>(init: F) -> Self
    where
        F: Fn() -> Arc<dyn TileHost> + Send + Sync + 'static,
    {
        Self {
            cell: OnceCell::new(),
            init: Box::new(init),
        }
    }

    /// 使用已存在的宿主实例创建
    pub fn ready(host: Arc<dyn TileHost>) -> Self {
        let cell = OnceCell::new();
        // 新建的 cell 一定为空
        let _ = cell.set(Arc::clone(&host));
        Self {
            cell,
            init: Box::new(move || Arc::clone(&host)),
        }
    }

    /// 获取宿主，首次访问时初始化
    pub fn get(&self) -> &Arc<dyn TileHost> {
        self.cell.get_or_init(|| {
            debug!("初始化磁贴宿主");
            (self.init)()
        })
    }

    /// 宿主是否已经初始化
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl std::fmt::Debug for LazyHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyHost")
            .field("initialized", &self.is_initialized())
            .finish()
    }
}
