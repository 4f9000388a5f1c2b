//! Performance benchmarks for a3s-alerts
//!
//! Run with: cargo bench

use a3s_alerts::{AlertFields, AlertService, AlertStore, AlertType, MemoryAlertStore};
use criterion::{criterion_group, criterion_main, Criterion};

fn fields(i: usize) -> AlertFields {
    AlertFields {
        name: format!("Notice {}", i),
        alert_type: AlertType::Info,
        content: "Scheduled maintenance window".to_string(),
        active: i % 3 == 0,
        allow_dismiss: true,
        registered_only: false,
    }
}

fn bench_create(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("AlertService create + refresh", |b| {
        b.to_async(&rt).iter(|| async {
            let service = AlertService::new(MemoryAlertStore::new());
            service.create(fields(0)).await.unwrap()
        });
    });

    let mut group = c.benchmark_group("create_throughput");
    for count in [10, 100, 1000] {
        group.bench_function(format!("{} alerts", count), |b| {
            b.to_async(&rt).iter(|| async {
                let service = AlertService::new(MemoryAlertStore::new());
                for i in 0..count {
                    service.create(fields(i)).await.unwrap();
                }
            });
        });
    }
    group.finish();
}

fn bench_list(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    // Pre-populate
    let store = rt.block_on(async {
        let store = MemoryAlertStore::new();
        for i in 0..1000 {
            store.create(fields(i)).await.unwrap();
        }
        store
    });

    c.bench_function("list (limit 20, offset 0)", |b| {
        b.to_async(&rt)
            .iter(|| async { store.list(20, 0).await.unwrap() });
    });

    c.bench_function("list (limit 20, offset 980)", |b| {
        b.to_async(&rt)
            .iter(|| async { store.list(20, 980).await.unwrap() });
    });

    c.bench_function("active_alerts (1000 stored)", |b| {
        b.to_async(&rt)
            .iter(|| async { store.active_alerts().await.unwrap() });
    });
}

fn bench_serialization(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let alerts = rt.block_on(async {
        let store = MemoryAlertStore::new();
        for i in 0..100 {
            store.create(fields(i)).await.unwrap();
        }
        store.list(100, 0).await.unwrap().alerts
    });

    c.bench_function("serialize 100 alerts", |b| {
        b.iter(|| serde_json::to_vec(&alerts).unwrap());
    });
}

criterion_group!(benches, bench_create, bench_list, bench_serialization);
criterion_main!(benches);
