//! Deterministic pseudo-random terrains for benchmarks and soak tests.

/// Build `n` heights in `0..n` from a fixed multiplicative hash of the
/// column index and `seed`. Identical inputs always give identical terrain.
pub fn hashed_terrain(n: usize, seed: u64) -> Vec<i64> {
    let modulus = n.max(1) as u64;
    (0..n as u64)
        .map(|i| {
            let x = (i ^ seed).wrapping_mul(6364136223846793007);
            let x = x ^ (x >> 29);
            (x.wrapping_mul(1442695040888963407) >> 11) as i64 % modulus as i64
        })
        .collect()
}
