use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fusion_index::{BatchedBitsetIndex, BitsetIndex, FusionNode, ListIndex, Octrie};

/// Deterministic key stream inside the 40-bit index universe.
fn make_keys(size: usize, modulus: u64) -> Vec<u64> {
    let mut v: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..size)
        .map(|_| {
            v = v.wrapping_mul(0x9E37_79B9_7F4A_7C15).wrapping_add(1);
            v % modulus
        })
        .collect()
}

fn bench_predecessor_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("predecessor");

    for size in [1_000usize, 100_000].iter() {
        let keys = make_keys(*size, 1 << 38);
        let probes = make_keys(4096, 1 << 38);

        let mut trie = Octrie::new();
        let mut bitset = BitsetIndex::new(12).unwrap();
        let mut list = ListIndex::new(12).unwrap();
        for &k in &keys {
            trie.insert(k);
            bitset.insert(k);
            list.insert(k);
        }

        let mut probe_idx = 0;
        group.bench_with_input(BenchmarkId::new("octrie", size), size, |b, _| {
            b.iter(|| {
                let x = probes[probe_idx % probes.len()];
                probe_idx = probe_idx.wrapping_add(1);
                black_box(trie.predecessor(black_box(x)))
            })
        });

        let mut probe_idx = 0;
        group.bench_with_input(BenchmarkId::new("bitset_index", size), size, |b, _| {
            b.iter(|| {
                let x = probes[probe_idx % probes.len()];
                probe_idx = probe_idx.wrapping_add(1);
                black_box(bitset.predecessor(black_box(x)))
            })
        });

        let mut probe_idx = 0;
        group.bench_with_input(BenchmarkId::new("list_index", size), size, |b, _| {
            b.iter(|| {
                let x = probes[probe_idx % probes.len()];
                probe_idx = probe_idx.wrapping_add(1);
                black_box(list.predecessor(black_box(x)))
            })
        });
    }

    group.finish();
}

fn bench_insert_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    let keys = make_keys(50_000, 1 << 38);

    group.bench_function("octrie", |b| {
        b.iter(|| {
            let mut trie = Octrie::new();
            for &k in &keys {
                trie.insert(black_box(k));
            }
            black_box(trie.len())
        })
    });

    group.bench_function("bitset_index", |b| {
        b.iter(|| {
            let mut index = BitsetIndex::new(12).unwrap();
            for &k in &keys {
                index.insert(black_box(k));
            }
            black_box(index.len())
        })
    });

    group.bench_function("batched_bitset_index", |b| {
        b.iter(|| {
            let mut index = BatchedBitsetIndex::new(12).unwrap();
            for &k in &keys {
                index.insert(black_box(k));
            }
            index.flush();
            black_box(index.len())
        })
    });

    group.finish();
}

fn bench_fusion_node(c: &mut Criterion) {
    let mut group = c.benchmark_group("fusion_node");

    let keys = [3u64, 17, 255, 90_000, 1 << 30, 1 << 44, (1 << 44) | 9, u64::MAX - 4];
    let node = FusionNode::from_sorted(&keys);
    let probes = make_keys(4096, u64::MAX);

    let mut probe_idx = 0;
    group.bench_function("pred_index", |b| {
        b.iter(|| {
            let x = probes[probe_idx % probes.len()];
            probe_idx = probe_idx.wrapping_add(1);
            black_box(node.pred_index(black_box(x)))
        })
    });

    group.bench_function("rebuild", |b| {
        b.iter(|| black_box(FusionNode::from_sorted(black_box(&keys))))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_predecessor_queries,
    bench_insert_throughput,
    bench_fusion_node
);
criterion_main!(benches);
