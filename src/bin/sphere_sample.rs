//! Sample renderer: prints uniformly distributed points on the unit sphere,
//! one `x y z` line each. Point `scatter3d` at this binary to try the viewer.

use std::f64::consts::PI;
use std::io::{self, BufWriter, Write};

const POINTS: usize = 200;
const DEFAULT_SEED: u64 = 42;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Map two uniforms onto the unit sphere (Archimedes' hat-box projection).
fn sphere_point(r1: f64, r2: f64) -> [f64; 3] {
    let ring = 2.0 * (r2 * (1.0 - r2)).sqrt();
    let phi = 2.0 * PI * r1;
    [ring * phi.cos(), ring * phi.sin(), 1.0 - 2.0 * r2]
}

fn main() -> io::Result<()> {
    let seed = std::env::var("SPHERE_SAMPLE_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SEED);
    let mut rng = SimpleRng::new(seed);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for _ in 0..POINTS {
        let r1 = rng.next_f64();
        let r2 = rng.next_f64();
        let [x, y, z] = sphere_point(r1, r2);
        writeln!(out, "{x} {y} {z}")?;
    }
    out.flush()
}
