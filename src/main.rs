use fusion_index::{BitsetIndex, Octrie};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("Fusion Index Demo");
    println!("=================");

    let mut keys: Vec<u64> = Vec::with_capacity(100_000);
    let mut v: u64 = 0x9E37_79B9_7F4A_7C15;
    for _ in 0..100_000 {
        v = v.wrapping_mul(0x9E37_79B9_7F4A_7C15).wrapping_add(1);
        keys.push(v & ((1 << 38) - 1));
    }
    println!("Generated {} keys in a 38-bit universe", keys.len());

    let mut trie = Octrie::new();
    let mut index = BitsetIndex::new(10)?;
    for &k in &keys {
        trie.insert(k);
        index.insert(k);
    }
    println!("Octrie holds {} distinct keys", trie.len());
    println!("Sampling index (s = 10) holds {} keys", index.len());

    println!("\nSpot queries:");
    for x in [0u64, keys[0], keys[0] + 1, 1 << 37, u64::MAX] {
        let a = trie.predecessor(x);
        let b = index.predecessor(x);
        assert_eq!(a, b, "structures disagree at {x}");
        match a.key() {
            Some(k) => println!("  pred({x:>22}) = {k}"),
            None => println!("  pred({x:>22}) = none"),
        }
    }

    let removed = trie.remove(keys[0]);
    println!("\nRemoved {} from the octrie: {removed}", keys[0]);
    println!("  pred now: {:?}", trie.predecessor(keys[0]).key());

    Ok(())
}
