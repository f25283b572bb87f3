//! Benchmarks for calls crossing the script/native boundary.
//!
//! Every benchmark goes through [`ScriptFunction::invoke`], so the numbers
//! include scratch checkout, argument decoding, the native call and result
//! encoding.
//!
//! ## Profiling with Puffin
//!
//! ```bash
//! cargo bench --features profile-with-puffin -- --profile-time 5
//! ```

use std::hint::black_box;

use bumpalo::Bump;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use jsbridge::capi::WorldCApi;
use jsbridge::{Bridge, BridgeConfig, ModuleSet, ScriptApi, ScriptFunction, ScriptValue, handle};
use jsbridge_core::DynamicScriptDataItem;
use jsbridge_core::native::{CApiWorld, UnitRef};
use jsbridge_modules::testing;

#[cfg(feature = "profile-with-puffin")]
static FRAME_VIEW: std::sync::OnceLock<puffin::GlobalFrameView> = std::sync::OnceLock::new();

#[cfg(feature = "profile-with-puffin")]
fn setup_profiler() {
    puffin::set_scopes_on(true);
    FRAME_VIEW.get_or_init(puffin::GlobalFrameView::default);
}

#[cfg(not(feature = "profile-with-puffin"))]
fn setup_profiler() {}

#[cfg(feature = "profile-with-puffin")]
fn end_profiling_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}

#[cfg(not(feature = "profile-with-puffin"))]
fn end_profiling_frame() {}

extern "C" fn unit_by_name(_world: *mut CApiWorld, name_id: u32) -> UnitRef {
    name_id & 0xff
}

fn bridge() -> Bridge {
    let api = ScriptApi {
        world: WorldCApi {
            unit_by_name,
            ..testing::world()
        },
        ..testing::script_api()
    };
    let config =
        BridgeConfig::default().with_modules(ModuleSet::WORLD | ModuleSet::MATH | ModuleSet::FS);
    let mut bridge = Bridge::with_config(config);
    bridge.install_default_modules(&api).unwrap();
    bridge.seal();
    bridge
}

fn function(bridge: &Bridge, namespace: &str, name: &str) -> ScriptFunction {
    bridge.function(namespace, name).unwrap()
}

/// Whole calls through the dispatch boundary.
fn dispatch_benchmarks(c: &mut Criterion) {
    setup_profiler();
    let bridge = bridge();
    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));

    let add = function(&bridge, "Vector3", "add");
    let args = [
        ScriptValue::from([1.0, 2.0, 3.0]),
        ScriptValue::from([4.0, 5.0, 6.0]),
    ];
    group.bench_function("vector3_add", |b| {
        b.iter(|| {
            let sum = add.invoke(black_box(&args));
            end_profiling_frame();
            black_box(sum)
        });
    });

    let transform = function(&bridge, "Matrix4x4", "transform");
    let args = [
        ScriptValue::from([
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            5.0, 6.0, 7.0, 1.0,
        ]),
        ScriptValue::from([1.0, 1.0, 1.0]),
    ];
    group.bench_function("matrix4x4_transform", |b| {
        b.iter(|| black_box(transform.invoke(black_box(&args))));
    });

    let by_name = function(&bridge, "World", "unit_by_name");
    let args = [
        handle::wrap_pointer(0x1000usize as *mut CApiWorld),
        ScriptValue::from("units/characters/knight"),
    ];
    group.bench_function("unit_by_name_hashed", |b| {
        b.iter(|| black_box(by_name.invoke(black_box(&args))));
    });

    let read = function(&bridge, "fs", "read");
    let args = [ScriptValue::from("save.dat")];
    group.bench_function("failed_call", |b| {
        b.iter(|| black_box(read.invoke(black_box(&args)).is_err()));
    });

    group.finish();
}

/// Script value to tagged dynamic item and back.
fn dynamic_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("dynamic");
    let values = [
        ("number", ScriptValue::from(12.5)),
        ("string", ScriptValue::from("spawn_point_01")),
        ("vector3", ScriptValue::from([1.0, 2.0, 3.0])),
        ("id64", handle::wrap_id(0xdead_beef)),
    ];

    for (name, value) in &values {
        group.bench_function(*name, |b| {
            let mut arena = Bump::new();
            b.iter(|| {
                let item = DynamicScriptDataItem::from_script(black_box(value), &arena).unwrap();
                let back = item.to_script().unwrap();
                arena.reset();
                black_box(back)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, dispatch_benchmarks, dynamic_benchmarks);
criterion_main!(benches);
