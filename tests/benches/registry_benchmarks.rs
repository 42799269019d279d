//! # Doctrine Registry Benchmarks
//!
//! | Operation | Expectation |
//! |-----------|-------------|
//! | register_component | constant per call |
//! | get_hierarchy | linear in component count |
//! | generate_id_from_path | linear in path length |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use doctrine_registry::{
    id_from_path, ComponentRegistration, ComponentType, DoctrineRegistry, DoctrineRegistryApi,
    DEFAULT_SUBMODULE_MARKER,
};

fn populated(n: u32) -> DoctrineRegistry {
    let registry = DoctrineRegistry::new();
    let _ = registry.register_component(ComponentRegistration::new(
        "root",
        "Root",
        ComponentType::Module,
        1,
        1,
        1,
    ));
    for i in 0..n {
        let _ = registry.register_component(
            ComponentRegistration::new(
                format!("c{}", i),
                "child",
                ComponentType::File,
                1,
                i % 99 + 1,
                i % 97 + 1,
            )
            .with_parent("root"),
        );
    }
    registry
}

fn bench_registration(c: &mut Criterion) {
    let mut group = c.benchmark_group("doctrine-registry-register");

    for size in [100u32, 1_000] {
        group.throughput(Throughput::Elements(u64::from(size)));
        group.bench_with_input(BenchmarkId::new("register_children", size), &size, |b, &n| {
            b.iter(|| black_box(populated(n)))
        });
    }

    group.finish();
}

fn bench_hierarchy(c: &mut Criterion) {
    let mut group = c.benchmark_group("doctrine-registry-hierarchy");

    for size in [100u32, 1_000] {
        let registry = populated(size);
        group.bench_with_input(BenchmarkId::new("get_hierarchy", size), &registry, |b, r| {
            b.iter(|| black_box(r.get_hierarchy()))
        });
        group.bench_with_input(BenchmarkId::new("export_report", size), &registry, |b, r| {
            b.iter(|| black_box(r.export_compliance_report()))
        });
    }

    group.finish();
}

fn bench_path_hash(c: &mut Criterion) {
    let path = "03-diagnostics/submodules/02-errors/components/ErrorLogTable.tsx";
    c.bench_function("id_from_path", |b| {
        b.iter(|| black_box(id_from_path(black_box(path), DEFAULT_SUBMODULE_MARKER)))
    });
}

criterion_group!(benches, bench_registration, bench_hierarchy, bench_path_hash);
criterion_main!(benches);
