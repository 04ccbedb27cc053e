//! # 示例应用程序
//!
//! 演示如何通过组件工厂解析快捷设置磁贴标识符

use clap::Parser;
use config_impl::RegistryConfigBinder;
use di_abstractions::{ComponentFactory, LazyHost, TileHost, UserContext};
use di_impl::ComponentFactoryImpl;
use infrastructure_common::{BuildEnvironment, ViewContext};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "example-app")]
#[command(about = "解析快捷设置磁贴标识符")]
struct Args {
    /// 要解析的磁贴标识符
    #[arg(required = true)]
    specs: Vec<String>,

    /// 配置文件路径
    #[arg(short, long, default_value = "config/registry.toml")]
    config: String,

    /// 覆盖配置中的可调试标志
    #[arg(long)]
    debuggable: Option<bool>,

    /// 以折叠布局生成视图
    #[arg(long)]
    collapsed: bool,

    /// 当前用户ID
    #[arg(long, default_value_t = 0)]
    user: u32,

    /// 日志级别
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// 示例宿主
struct DemoHost {
    user_id: u32,
}

impl TileHost for DemoHost {
    fn user_context(&self) -> Option<UserContext> {
        Some(UserContext::new(self.user_id, "com.android.systemui"))
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    info!("启动磁贴解析示例");

    let factory = build_factory(&args)?;
    let context = ViewContext::default();

    for spec in &args.specs {
        match factory.create_component(spec) {
            Ok(Some(tile)) => {
                let view = factory.create_view(&context, tile.as_ref(), args.collapsed);
                println!(
                    "{spec}: {:?}, icon={}, collapsed={}",
                    tile.lifecycle_state(),
                    view.icon.icon,
                    view.collapsed
                );
            }
            Ok(None) => println!("{spec}: <未解析>"),
            Err(e) => {
                error!("扩展磁贴构建失败: {}", e);
                println!("{spec}: <错误> {e}");
            }
        }
    }

    Ok(())
}

/// 构建组件工厂
fn build_factory(args: &Args) -> anyhow::Result<ComponentFactoryImpl> {
    let mut config = RegistryConfigBinder::new().add_file(&args.config).load()?;
    if args.debuggable.is_some() {
        config.debuggable = args.debuggable;
    }

    let environment = BuildEnvironment::install(config.build_environment());
    info!("构建环境: debuggable={}", environment.is_debuggable());

    let user_id = args.user;
    let host = LazyHost::new(move || Arc::new(DemoHost { user_id }) as Arc<dyn TileHost>);

    let factory = qs_tiles::install(ComponentFactoryImpl::builder())
        .with_host(host)
        .with_environment(environment)
        .with_log_tag(config.log_tag)
        .build()?;

    Ok(factory)
}
