//! 组件工厂与真实磁贴的集成测试

use di_abstractions::{ComponentFactory, LazyHost, LogSink, TileHost, UserContext};
use di_impl::ComponentFactoryImpl;
use infrastructure_common::{
    BuildEnvironment, ExtensionError, LifecycleState, RegistryError, ViewContext,
};
use parking_lot::Mutex;
use qs_tiles::{CustomTile, StockTile, StockTileProvider, TileKind};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// 记录所有警告的日志接收者
#[derive(Default)]
struct RecordingLogSink {
    entries: Mutex<Vec<(String, String)>>,
}

impl RecordingLogSink {
    fn messages(&self) -> Vec<String> {
        self.entries.lock().iter().map(|(_, m)| m.clone()).collect()
    }

    fn count_mentioning(&self, spec: &str) -> usize {
        self.entries
            .lock()
            .iter()
            .filter(|(_, m)| m == &format!("No stock tile spec: {spec}"))
            .count()
    }
}

impl LogSink for RecordingLogSink {
    fn warn(&self, tag: &str, message: &str) {
        self.entries
            .lock()
            .push((tag.to_string(), message.to_string()));
    }
}

/// 测试宿主
struct TestHost {
    user_id: u32,
}

impl TileHost for TestHost {
    fn user_context(&self) -> Option<UserContext> {
        Some(UserContext::new(self.user_id, "com.android.systemui"))
    }
}

struct Harness {
    factory: ComponentFactoryImpl,
    log: Arc<RecordingLogSink>,
    host_inits: Arc<AtomicUsize>,
}

fn harness(environment: BuildEnvironment) -> Harness {
    let log = Arc::new(RecordingLogSink::default());
    let host_inits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&host_inits);

    let factory = qs_tiles::install(ComponentFactoryImpl::builder())
        .with_host(LazyHost::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Arc::new(TestHost { user_id: 10 }) as Arc<dyn TileHost>
        }))
        .with_environment(environment)
        .with_log_sink(Arc::clone(&log) as Arc<dyn LogSink>)
        .build()
        .expect("默认装配应该成功");

    Harness {
        factory,
        log,
        host_inits,
    }
}

#[test]
fn test_every_stock_spec_resolves_initialized_and_stale() {
    let h = harness(BuildEnvironment::PRODUCTION);

    for kind in TileKind::STOCK {
        let tile = h
            .factory
            .create_component(kind.spec())
            .unwrap()
            .unwrap_or_else(|| panic!("{} 应该可以解析", kind.spec()));

        assert_eq!(tile.spec(), kind.spec());
        assert_eq!(tile.lifecycle_state(), LifecycleState::Stale);

        let stock = tile.as_any().downcast_ref::<StockTile>().unwrap();
        assert_eq!(stock.kind(), *kind);
        assert_eq!(stock.initialize_count(), 1);
        assert_eq!(stock.stale_count(), 1);
    }

    assert!(h.log.messages().is_empty());
    assert_eq!(h.host_inits.load(Ordering::SeqCst), 0, "内置磁贴不应触发宿主初始化");
}

#[test]
fn test_wifi_scenario() {
    let h = harness(BuildEnvironment::PRODUCTION);

    let tile = h.factory.create_component("wifi").unwrap().unwrap();
    let wifi = tile.as_any().downcast_ref::<StockTile>().unwrap();

    assert_eq!(wifi.kind(), TileKind::Wifi);
    assert_eq!(tile.lifecycle_state(), LifecycleState::Stale);
}

#[test]
fn test_unknown_specs_log_exactly_once() {
    let h = harness(BuildEnvironment::DEBUGGABLE);

    for spec in ["not_a_real_tile", "", "WIFI", "wifi ", "custom", "dbg:mem"] {
        assert!(h.factory.create_component(spec).unwrap().is_none());
        assert_eq!(h.log.count_mentioning(spec), 1, "{spec:?} 应该只记录一次");
    }

    assert_eq!(
        h.log.entries.lock()[0],
        (
            "QSFactory".to_string(),
            "No stock tile spec: not_a_real_tile".to_string()
        )
    );
}

#[test]
fn test_custom_spec_bypasses_catalog() {
    let h = harness(BuildEnvironment::DEBUGGABLE);

    let tile = h
        .factory
        .create_component("custom(com.example/.WifiTile)")
        .unwrap()
        .unwrap();

    let custom = tile.as_any().downcast_ref::<CustomTile>().unwrap();
    assert_eq!(custom.component().class, "com.example.WifiTile");
    assert_eq!(custom.user_context().user_id, 10);
    assert_eq!(custom.initialize_count(), 1);
    assert_eq!(custom.stale_count(), 1);
    assert_eq!(tile.lifecycle_state(), LifecycleState::Stale);
    assert_eq!(h.host_inits.load(Ordering::SeqCst), 1);
}

#[test]
fn test_custom_spec_with_colliding_suffix_is_not_a_stock_tile() {
    let h = harness(BuildEnvironment::DEBUGGABLE);

    // 后缀与内置/调试标识相同也不会命中目录
    for spec in ["custom(wifi)", "custom(memorytile)"] {
        let err = h.factory.create_component(spec).unwrap_err();
        assert!(matches!(err, ExtensionError::BadSpec { .. }));
    }
    assert!(h.log.messages().is_empty());
}

#[test]
fn test_malformed_custom_specs_fail() {
    let h = harness(BuildEnvironment::PRODUCTION);

    let err = h.factory.create_component("custom()").unwrap_err();
    assert!(matches!(err, ExtensionError::EmptyAction { .. }));

    let err = h.factory.create_component("custom(nopackage)").unwrap_err();
    assert!(matches!(err, ExtensionError::BadSpec { .. }));
    assert_eq!(err.spec(), "custom(nopackage)");
}

#[test]
fn test_debug_tile_is_unreachable_in_production() {
    let production = harness(BuildEnvironment::PRODUCTION);
    let unknown = harness(BuildEnvironment::PRODUCTION);

    assert!(production.factory.create_component("memorytile").unwrap().is_none());
    assert!(unknown.factory.create_component("not_a_real_tile").unwrap().is_none());

    // 与真正未知的标识符表现一致
    assert_eq!(production.log.messages(), ["No stock tile spec: memorytile"]);
    assert_eq!(unknown.log.messages(), ["No stock tile spec: not_a_real_tile"]);
}

#[test]
fn test_debug_tile_resolves_when_debuggable() {
    let h = harness(BuildEnvironment::DEBUGGABLE);

    for kind in TileKind::DEBUG {
        let tile = h.factory.create_component(kind.spec()).unwrap().unwrap();
        let stock = tile.as_any().downcast_ref::<StockTile>().unwrap();

        assert_eq!(stock.kind(), TileKind::Memory);
        assert_eq!(stock.initialize_count(), 1);
        assert_eq!(stock.stale_count(), 1);
    }
    assert!(h.log.messages().is_empty());
}

#[test]
fn test_sequential_calls_return_distinct_instances() {
    let h = harness(BuildEnvironment::PRODUCTION);

    let first = h.factory.create_component("bt").unwrap().unwrap();
    let second = h.factory.create_component("bt").unwrap().unwrap();

    let first = first.as_any().downcast_ref::<StockTile>().unwrap();
    let second = second.as_any().downcast_ref::<StockTile>().unwrap();

    assert!(!std::ptr::eq(first, second));
    assert_ne!(first.instance_id(), second.instance_id());
    assert_eq!(first.initialize_count(), 1);
    assert_eq!(second.initialize_count(), 1);
}

#[test]
fn test_create_view_pairs_icon_and_density() {
    let h = harness(BuildEnvironment::PRODUCTION);
    let tile = h.factory.create_component("dnd").unwrap().unwrap();

    let view = h
        .factory
        .create_view(&ViewContext::new(2.0), tile.as_ref(), true);

    assert_eq!(view.icon.spec, "dnd");
    assert_eq!(view.icon.icon, "ic_qs_dnd");
    assert!(view.collapsed);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_resolution() {
    let h = harness(BuildEnvironment::DEBUGGABLE);
    let factory = Arc::new(h.factory);
    let specs = ["wifi", "memorytile", "custom(com.example/.Tile)", "not_a_real_tile"];

    let handles: Vec<_> = (0..32)
        .map(|i| {
            let factory = Arc::clone(&factory);
            let spec = specs[i % specs.len()];
            tokio::task::spawn_blocking(move || {
                factory
                    .create_component(spec)
                    .unwrap()
                    .map(|tile| (tile.spec().to_string(), tile.lifecycle_state()))
            })
        })
        .collect();

    let mut resolved = 0;
    for handle in handles {
        if let Some((_, state)) = handle.await.unwrap() {
            assert_eq!(state, LifecycleState::Stale);
            resolved += 1;
        }
    }

    assert_eq!(resolved, 24);
    assert_eq!(h.log.messages().len(), 8);
    assert_eq!(h.host_inits.load(Ordering::SeqCst), 1);
}

#[test]
fn test_qs_factory_helper() {
    let factory = qs_tiles::qs_factory(
        LazyHost::ready(Arc::new(TestHost { user_id: 0 })),
        BuildEnvironment::PRODUCTION,
    )
    .unwrap();

    let specs: HashSet<&str> = factory.catalog().specs().iter().map(String::as_str).collect();
    assert_eq!(specs.len(), TileKind::STOCK.len());
    assert!(!specs.contains("memorytile"));
    assert!(!factory.gate().environment().is_debuggable());
}

#[test]
fn test_stock_tile_cannot_shadow_custom_spec() {
    let err = qs_tiles::install(ComponentFactoryImpl::builder())
        .register_stock(
            "custom(com.example/.Tile)",
            Arc::new(StockTileProvider::new(TileKind::Wifi)),
        )
        .with_host(LazyHost::ready(Arc::new(TestHost { user_id: 0 })))
        .with_environment(BuildEnvironment::PRODUCTION)
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        RegistryError::ReservedPrefix {
            spec: "custom(com.example/.Tile)".to_string()
        }
    );
}

#[test]
fn test_empty_prefix_cannot_swallow_unknown_specs() {
    let err = qs_tiles::install(ComponentFactoryImpl::builder())
        .with_extension_prefix("")
        .with_host(LazyHost::ready(Arc::new(TestHost { user_id: 0 })))
        .with_environment(BuildEnvironment::DEBUGGABLE)
        .build()
        .unwrap_err();

    assert_eq!(err, RegistryError::EmptyExtensionPrefix);
}
