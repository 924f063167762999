use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use joyeria_catalog::{Joya, JoyaFilter, OrderBy, Pagination};
use joyeria_infra::{InMemoryInventoryStore, InventoryStore};

const CATEGORIAS: [&str; 4] = ["Anillos", "Collares", "Pulseras", "Aros"];
const METALES: [&str; 3] = ["Oro", "Plata", "Acero"];

/// Seed `n` rows with roughly 25% duplicated nombres so de-duplication has
/// real work to do.
fn seed_rows(n: usize) -> Vec<Joya> {
    (0..n)
        .map(|i| Joya {
            id: i as i64 + 1,
            nombre: format!("Joya {}", i - (i % 4) / 3),
            stock: (i % 20) as i64,
            precio: ((i * 37) % 1_000) as i64,
            categoria: CATEGORIAS[i % CATEGORIAS.len()].to_string(),
            metal: METALES[i % METALES.len()].to_string(),
        })
        .collect()
}

fn bench_list(c: &mut Criterion) {
    let rt = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("failed to build tokio runtime");

    let mut group = c.benchmark_group("list");
    for size in [100usize, 1_000, 10_000] {
        let store = InMemoryInventoryStore::seeded(seed_rows(size));
        let order: OrderBy = "precio_desc".parse().unwrap();
        let page = Pagination { limit: 6, offset: 0 };

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("first_page", size), &size, |b, _| {
            b.iter(|| {
                let rows = rt
                    .block_on(store.list(Some(&order), black_box(&page)))
                    .unwrap();
                black_box(rows)
            })
        });
    }
    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let rt = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("failed to build tokio runtime");

    let mut group = c.benchmark_group("filter");
    for size in [100usize, 1_000, 10_000] {
        let store = InMemoryInventoryStore::seeded(seed_rows(size));
        let filter = JoyaFilter {
            precio_min: Some(200),
            precio_max: Some(800),
            categoria: Some("Anillos".to_string()),
            metal: None,
        };

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("three_criteria", size), &size, |b, _| {
            b.iter(|| {
                let rows = rt.block_on(store.filter(black_box(&filter))).unwrap();
                black_box(rows)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_list, bench_filter);
criterion_main!(benches);
