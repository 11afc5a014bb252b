//! Generates a dungeon layout and prints it as ASCII.
//!
//! Usage: `cargo run --example layout_demo -- [seed]`

use mazewright_bsp::{BspLayout, BspParams};
use mazewright_random::Rng;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .map(|arg| arg.parse().expect("seed must be an unsigned integer"))
        .unwrap_or(1984);

    let mut rng = Rng::with_seed(seed);
    let mut layout = BspLayout::new(BspParams::default());
    let map = layout.generate(&mut rng);

    print!("{map}");
    println!(
        "seed {seed}: {} rooms in {} regions",
        layout.rooms().len(),
        layout.regions().len()
    );
}
