use astrocarto::lines::{generate_lines, BirthData};
use astrocarto::map::{MapLayerReconciler, MemorySurface};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn birth() -> BirthData {
    BirthData {
        date: "1990-01-01".to_string(),
        time: "12:00".to_string(),
        latitude: 40.7128,
        longitude: -74.0060,
    }
}

fn bench_generate_lines(c: &mut Criterion) {
    let birth = birth();
    c.bench_function("generate_lines", |b| b.iter(|| generate_lines(black_box(&birth))));
}

fn bench_reconcile_fresh_surface(c: &mut Criterion) {
    let lines = generate_lines(&birth());
    c.bench_function("reconcile_fresh_surface", |b| {
        b.iter(|| {
            let mut surface = MemorySurface::loaded();
            let mut reconciler = MapLayerReconciler::new();
            reconciler.mark_ready();
            reconciler.reconcile(black_box(&lines), &mut surface)
        })
    });
}

criterion_group!(benches, bench_generate_lines, bench_reconcile_fresh_surface);
criterion_main!(benches);
