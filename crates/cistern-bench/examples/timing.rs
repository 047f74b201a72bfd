//! Wall-clock comparison of the kernel against the brute-force oracle.
//!
//! ```sh
//! cargo run --release -p cistern-bench --example timing
//! ```

use std::time::Instant;

use cistern_bench::stress_terrain;
use cistern_core::rain_collected;
use cistern_test_utils::oracle::brute_force_volume;

fn main() {
    let terrain = stress_terrain(0x5eed);
    println!("terrain: {} columns", terrain.len());

    let start = Instant::now();
    let fast = rain_collected(&terrain);
    println!(
        "two-pointer: {} in {} us",
        fast,
        start.elapsed().as_micros()
    );

    let start = Instant::now();
    let slow = brute_force_volume(&terrain);
    println!(
        "brute force: {} in {} us",
        slow,
        start.elapsed().as_micros()
    );

    if fast != slow {
        eprintln!("results differ: two-pointer {fast}, brute force {slow}");
        std::process::exit(1);
    }
}
