use rand::distributions::{Distribution, Standard};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fixed random seed to support repeatable testing
const SEED: [u8; 32] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6,
    5, 4, 3, 2, 1,
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
    std::iter::repeat_with(|| rng.gen::<T>()).take(n).collect()
}

/// Nodes and weights of the 8-point Gauss-Legendre rule on [-1, 1]
const GAUSS_LEGENDRE_8: [(f64, f64); 4] = [
    (0.183_434_642_495_649_8, 0.362_683_783_378_361_98),
    (0.525_532_409_916_329, 0.313_706_645_877_887_3),
    (0.796_666_477_413_626_7, 0.222_381_034_453_374_47),
    (0.960_289_856_497_536_2, 0.101_228_536_290_376_26),
];

/// Composite 8-point Gauss-Legendre quadrature of `f` on `[a, b]` split into
/// `intervals` equal sub-intervals, as an independent check of closed forms
pub fn gauss_legendre<F>(f: &F, a: f64, b: f64, intervals: usize) -> f64
where
    F: Fn(f64) -> f64 + ?Sized,
{
    let h = (b - a) / intervals as f64;
    (0..intervals)
        .map(|k| {
            let centre = a + (k as f64 + 0.5) * h;
            let half = 0.5 * h;
            GAUSS_LEGENDRE_8
                .iter()
                .map(|&(node, weight)| {
                    weight * (f(centre - half * node) + f(centre + half * node))
                })
                .sum::<f64>()
                * half
        })
        .sum()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_gauss_legendre() {
        // Exact for polynomials up to degree 15
        let f = |x: f64| x.powi(7) - 3.0 * x.powi(2) + 1.0;
        let exact = |x: f64| x.powi(8) / 8.0 - x.powi(3) + x;
        let q = gauss_legendre(&f, -1.0, 2.0, 1);
        assert!((q - (exact(2.0) - exact(-1.0))).abs() < 1e-12);

        let q = gauss_legendre(&|x: f64| x.exp(), 0.0, 1.0, 4);
        assert!((q - (1.0_f64.exp() - 1.0)).abs() < 1e-14);
    }

    #[test]
    fn test_randn() {
        let mut rng = rng_fixed_seed();
        let x: Vec<f64> = randn(&mut rng, 10);
        assert_eq!(x.len(), 10);
        assert!(x.iter().all(|v| (0.0..1.0).contains(v)));
        assert_eq!(x, randn::<f64>(&mut rng_fixed_seed(), 10));
    }
}
