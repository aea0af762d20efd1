use circuit_calc::circuits::aggregate::{equivalent, ConnectionKind, ElementKind};
use circuit_calc::circuits::ComponentRegistry;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");
    for n in [16usize, 1_024, 65_536] {
        let values: Vec<f64> = (1..=n).map(|i| i as f64 * 10.0).collect();
        for connection in [ConnectionKind::Series, ConnectionKind::Parallel] {
            group.bench_with_input(
                BenchmarkId::new(connection.to_string(), n),
                &values,
                |b, values| {
                    b.iter(|| equivalent(ElementKind::Resistor, connection, black_box(values)))
                },
            );
        }
    }
    group.finish();
}

fn bench_values_by_type(c: &mut Criterion) {
    let mut registry = ComponentRegistry::new();
    for i in 0..10_000 {
        let kind = ["resistor", "capacitor", "inductor"][i % 3];
        registry.add(format!("X{i}"), kind, i as f64);
    }
    c.bench_function("values_by_type", |b| {
        b.iter(|| registry.values_by_type(black_box("capacitor")))
    });
}

criterion_group!(benches, bench_aggregate, bench_values_by_type);
criterion_main!(benches);
