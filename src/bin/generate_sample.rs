use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

/// Write a synthetic linear-regression table: `x1,...,xk,y` per line, no header.
#[derive(Parser, Debug)]
#[command(name = "generate_sample", about)]
struct Args {
    /// Output file
    #[arg(long, short, default_value = "sample_data.txt")]
    output: PathBuf,

    /// Number of rows
    #[arg(long, short, default_value_t = 97)]
    rows: usize,

    /// Number of feature columns (the target is appended after them)
    #[arg(long, short, default_value_t = 1)]
    features: usize,

    /// Standard deviation of the noise added to y
    #[arg(long, default_value_t = 0.5)]
    noise: f64,

    #[arg(long, default_value_t = 42)]
    seed: u64,
}

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
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    anyhow::ensure!(args.features > 0, "need at least one feature column");

    let mut rng = SimpleRng::new(args.seed);

    // theta[0] is the bias, the rest are per-feature weights.
    let theta: Vec<f64> = (0..=args.features).map(|_| rng.uniform(-4.0, 4.0)).collect();
    log::info!("true theta = {theta:?}");

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;

    for _ in 0..args.rows {
        let x: Vec<f64> = (0..args.features).map(|_| rng.uniform(5.0, 25.0)).collect();
        let y = theta[0]
            + x.iter().zip(&theta[1..]).map(|(xi, w)| xi * w).sum::<f64>()
            + rng.gauss(0.0, args.noise);

        let record: Vec<String> = x
            .iter()
            .chain(std::iter::once(&y))
            .map(|v| format!("{v:.4}"))
            .collect();
        writer.write_record(&record).context("writing row")?;
    }
    writer.flush().context("flushing output")?;

    println!(
        "Wrote {} rows ({} features + target) to {}",
        args.rows,
        args.features,
        args.output.display()
    );
    Ok(())
}
