use apimeter::{ApiSchema, PathClassifier};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Benchmark classification of paths that match the route tree at various
/// depths.
fn bench_known_paths(c: &mut Criterion) {
    let classifier = PathClassifier::from_schema(&ApiSchema::ocm()).unwrap();
    let mut group = c.benchmark_group("classify_known");

    for (name, path) in [
        ("root", "/api"),
        ("service", "/api/clusters_mgmt/v1"),
        ("collection_item", "/api/clusters_mgmt/v1/clusters/1a2b3c"),
        (
            "subcollection_item",
            "/api/clusters_mgmt/v1/clusters/1a2b3c/groups/dedicated-admins",
        ),
    ] {
        group.bench_function(name, |b| b.iter(|| classifier.classify(black_box(path))));
    }

    group.finish();
}

/// Benchmark the fallback path: walks that fail early and walks that fail at
/// the last segment cost differently.
fn bench_unknown_paths(c: &mut Criterion) {
    let classifier = PathClassifier::from_schema(&ApiSchema::ocm()).unwrap();
    let mut group = c.benchmark_group("classify_unknown");

    for (name, path) in [
        ("no_api_root", "/junk/clusters_mgmt/v1"),
        ("unknown_service", "/api/junk/v1/clusters"),
        ("too_deep", "/api/clusters_mgmt/v1/clusters/123/groups/456/junk"),
    ] {
        group.bench_function(name, |b| b.iter(|| classifier.classify(black_box(path))));
    }

    group.finish();
}

criterion_group!(benches, bench_known_paths, bench_unknown_paths);
criterion_main!(benches);
