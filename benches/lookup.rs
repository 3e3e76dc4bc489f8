use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use relazioni::mode::DatasetMode;
use relazioni::registry::DatasetRegistry;
use relazioni::source::EmbeddedSource;

fn bench_lookup(c: &mut Criterion) {
    let reg = match DatasetRegistry::embedded() {
        Ok(r) => r,
        Err(e) => panic!("embedded registry failed to load: {}", e),
    };

    let mut group = c.benchmark_group("registry");
    group.bench_function("load_embedded", |b| {
        b.iter(|| criterion::black_box(DatasetRegistry::load(&EmbeddedSource).ok()));
    });

    for mode in DatasetMode::ALL {
        let table = reg.get(mode);
        let names: Vec<String> = table.entities().map(str::to_string).collect();
        group.throughput(Throughput::Elements(names.len() as u64));
        group.bench_with_input(BenchmarkId::new("get_entity", mode.as_str()), &names, |b, names| {
            b.iter(|| {
                let mut total = 0usize;
                for n in names {
                    if let Some(v) = reg.get(mode).get(n) { total += v.len(); }
                }
                criterion::black_box(total);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_lookup);
criterion_main!(benches);
