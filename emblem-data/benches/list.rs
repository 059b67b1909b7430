//! List benchmarks over fixed-capacity storage.
//!
//! Run with: cargo bench -p emblem-data

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use emblem_data::{BoxedListStorage, List, Payload, Storage};

const LEN: usize = 10_000;

// ============================================================================
// Append / Remove
// ============================================================================

fn bench_push_and_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_remove");
    group.throughput(Throughput::Elements(LEN as u64));

    // Storage allocated once, emptied by destroy each iteration
    let mut storage: BoxedListStorage<usize> = BoxedListStorage::with_capacity(LEN);

    group.bench_function("try_push_back/destroy", |b| {
        b.iter(|| {
            let mut list: List<usize, BoxedListStorage<usize>> = List::new();
            for i in 0..LEN {
                black_box(list.try_push_back(&mut storage, i).unwrap());
            }
            list.destroy(&mut storage, true, None);
        });
    });

    let mut list = List::try_from_iter(&mut storage, 0..LEN).unwrap();

    group.bench_function("rotate", |b| {
        b.iter(|| {
            // Detach the head and relink it at the back
            for _ in 0..LEN {
                let head = list.front_key().unwrap();
                black_box(list.remove(&mut storage, head).unwrap());
                list.append(&mut storage, head).unwrap();
            }
        });
    });

    list.destroy(&mut storage, true, None);

    group.finish();
    assert!(storage.is_empty());
}

// ============================================================================
// Search
// ============================================================================

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    let mut sizes: BoxedListStorage<usize> = BoxedListStorage::with_capacity(LEN);
    let size_list = List::try_from_iter(&mut sizes, 0..LEN).unwrap();

    group.bench_function("usize/last", |b| {
        b.iter(|| black_box(size_list.search(&sizes, black_box(&(LEN - 1)))));
    });

    let mut payloads: BoxedListStorage<Payload> = BoxedListStorage::with_capacity(LEN);
    let payload_list =
        List::try_from_iter(&mut payloads, (0..LEN).map(|i| Payload::from(i.to_string())))
            .unwrap();
    let probe = Payload::from((LEN - 1).to_string());

    group.bench_function("payload_str/last", |b| {
        b.iter(|| black_box(payload_list.search(&payloads, black_box(&probe))));
    });

    group.finish();
}

criterion_group!(benches, bench_push_and_remove, bench_search);
criterion_main!(benches);
