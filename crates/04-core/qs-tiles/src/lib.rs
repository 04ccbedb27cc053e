//! # 快捷设置磁贴
//!
//! 内置磁贴、调试专用磁贴以及自定义磁贴的实现，
//! 并提供把它们装配到组件工厂的入口。
//!
//! ```rust,no_run
//! use di_abstractions::{ComponentFactory, LazyHost, TileHost, UserContext};
//! use infrastructure_common::BuildEnvironment;
//! use std::sync::Arc;
//!
//! struct Host;
//!
//! impl TileHost for Host {
//!     fn user_context(&self) -> Option<UserContext> {
//!         Some(UserContext::new(0, "com.android.systemui"))
//!     }
//! }
//!
//! let factory = qs_tiles::qs_factory(
//!     LazyHost::new(|| Arc::new(Host) as Arc<dyn TileHost>),
//!     BuildEnvironment::current(),
//! )?;
//! let tile = factory.create_component("wifi")?;
//! assert!(tile.is_some());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod custom;
pub mod kind;
pub mod module;
pub mod stock;

pub use custom::*;
pub use kind::*;
pub use module::*;
pub use stock::*;
