#![allow(clippy::all)] // Clippy will attempt to remove black_box() internals

use criterion::*;
use gridgen::*;
use tabulated::linearisation::ToleranceConvergence;
use tabulated::{Function1D, InterpolationTable, InterpolationType};

fn bench_evaluate(c: &mut Criterion) {
    for law in [
        InterpolationType::Histogram,
        InterpolationType::LinearLinear,
        InterpolationType::LogLog,
    ] {
        let mut group = c.benchmark_group(format!("Evaluate_{law:?}"));
        for gridsize in [10, 1000] {
            for size in [1, 100, 1_000_000].iter() {
                group.throughput(Throughput::Elements(*size as u64));
                group.bench_with_input(
                    BenchmarkId::new(format!("{gridsize}-grid, Shuffled Order"), size),
                    size,
                    |b, &size| {
                        let (x, y) = gen_table(gridsize, 0.5);
                        let table = InterpolationTable::with_interpolant(x, y, law).unwrap();
                        let obs = gen_obs(table.x(), size);
                        let mut out = vec![0.0; size];

                        b.iter(|| black_box(table.evaluate_into(&obs, &mut out).unwrap()));
                    },
                );
            }
        }
        group.finish();
    }
}

fn bench_linearise(c: &mut Criterion) {
    let mut group = c.benchmark_group("Linearise_LogLog");
    for gridsize in [10, 100] {
        for tolerance in [1e-3, 1e-6] {
            group.bench_with_input(
                BenchmarkId::new(format!("{gridsize}-grid"), tolerance),
                &tolerance,
                |b, &tolerance| {
                    let (x, y) = gen_table(gridsize, 0.5);
                    let table =
                        InterpolationTable::with_interpolant(x, y, InterpolationType::LogLog)
                            .unwrap();
                    let convergence = ToleranceConvergence::new(tolerance, 1e-12);

                    b.iter(|| black_box(table.linearise(&convergence).unwrap()));
                },
            );
        }
    }
    group.finish();
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("Add_Tables");
    for gridsize in [10, 1000, 100_000].iter() {
        group.throughput(Throughput::Elements(*gridsize as u64));
        group.bench_with_input(
            BenchmarkId::new("Different Grids", gridsize),
            gridsize,
            |b, &gridsize| {
                let (xa, ya) = gen_table(gridsize, 0.5);
                let (xb, yb) = gen_table(gridsize, 0.9);
                let a = InterpolationTable::new(xa, ya).unwrap();
                let b_ = InterpolationTable::new(xb, yb).unwrap();

                b.iter(|| black_box((&a + &b_).unwrap()));
            },
        );
    }
    group.finish();
}

criterion_group!(benches_evaluate, bench_evaluate);
criterion_group!(benches_linearise, bench_linearise);
criterion_group!(benches_add, bench_add);
criterion_main!(benches_evaluate, benches_linearise, benches_add,);

mod randn {
    use rand::distributions::{Distribution, Standard};
    use rand::rngs::StdRng;
    use rand::Rng;
    use rand::SeedableRng;

    /// Fixed random seed to support repeatable testing
    const SEED: [u8; 32] = [
        0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7,
        6, 5, 4, 3, 2, 1,
    ];

    /// Get a random number generator with a const seed for repeatable testing
    pub fn rng_fixed_seed() -> StdRng {
        StdRng::from_seed(SEED)
    }

    /// Generate `n` random numbers using provided generator
    pub fn randn<T>(rng: &mut StdRng, n: usize) -> Vec<T>
    where
        Standard: Distribution<T>,
    {
        let out: Vec<T> = (0..n).map(|_| rng.gen::<T>()).collect();
        out
    }
}

mod gridgen {
    use super::randn::*;
    use rand::seq::SliceRandom;
    use tabulated::utils::*;

    // Generate a strictly positive, irregular grid on [1, 1000] and some
    // strictly positive data values, valid for every interpolation law.
    pub fn gen_table(size: usize, noise: f64) -> (Vec<f64>, Vec<f64>) {
        let mut rng = rng_fixed_seed();
        let mut x: Vec<f64> = logspace(1.0, 1000.0, size);
        let dx = randn::<f64>(&mut rng, size);
        for i in 1..size - 1 {
            let spacing = (x[i + 1] - x[i]).min(x[i] - x[i - 1]);
            x[i] = x[i] + (dx[i] - 0.5) * noise * spacing;
        }
        let y = randn::<f64>(&mut rng, size)
            .into_iter()
            .map(|v| v + 0.1)
            .collect();

        (x, y)
    }

    // Generate shuffled observation points that cover the grid and a margin
    // outside it on both sides.
    pub fn gen_obs(grid: &[f64], size: usize) -> Vec<f64> {
        let mut rng = rng_fixed_seed();
        let lower = grid[0] * 0.9;
        let upper = grid[grid.len() - 1] * 1.1;
        let mut obs = linspace(lower, upper, size);
        obs.shuffle(&mut rng);
        obs
    }
}
