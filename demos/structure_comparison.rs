//! Side-by-side timing of every predecessor structure on one workload.

use fusion_index::{BatchedBitsetIndex, BitsetIndex, ListIndex, Octrie, PredecessorSet};
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("STRUCTURE COMPARISON - one workload, four structures");
    println!("====================================================");

    let num_keys = 500_000;
    let num_queries = 200_000;
    let universe = 1u64 << 38;

    let mut v: u64 = 0x2545_F491_4F6C_DD1D;
    let mut stream = move || {
        v = v.wrapping_mul(0x9E37_79B9_7F4A_7C15).wrapping_add(1);
        v % universe
    };
    let keys: Vec<u64> = (0..num_keys).map(|_| stream()).collect();
    let probes: Vec<u64> = (0..num_queries).map(|_| stream()).collect();
    println!("Dataset: {num_keys} keys, {num_queries} queries, 38-bit universe\n");

    let structures: Vec<(&str, Box<dyn PredecessorSet>)> = vec![
        ("octrie", Box::new(Octrie::new())),
        ("bitset index (s=12)", Box::new(BitsetIndex::new(12)?)),
        ("list index (s=12)", Box::new(ListIndex::new(12)?)),
        ("batched bitset (s=12)", Box::new(BatchedBitsetIndex::new(12)?)),
    ];

    let mut answers: Vec<u64> = Vec::new();
    for (name, mut s) in structures {
        let start = Instant::now();
        for &k in &keys {
            s.insert(k);
        }
        let build = start.elapsed();

        let start = Instant::now();
        let mut checksum = 0u64;
        for &x in &probes {
            checksum = checksum.wrapping_add(s.predecessor(x).pos);
        }
        let query = start.elapsed();

        println!(
            "{name:<22} build {:>7.1} ms   query {:>5} ns/op",
            build.as_secs_f64() * 1e3,
            query.as_nanos() / probes.len() as u128
        );
        answers.push(checksum);
    }

    assert!(
        answers.windows(2).all(|w| w[0] == w[1]),
        "structures disagreed on the workload"
    );
    println!("\nAll structures returned identical answers.");

    Ok(())
}
