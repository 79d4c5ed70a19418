//! Normal and truncated-normal sampling.
//!
//! Gaussian draws use the Box-Muller transform over uniform samples, which
//! keeps the dependency set to `rand` alone.

use rand::Rng;

/// Upper bound on rejection attempts for any resampling loop.
///
/// A pathological parameter set (a mean far outside the admissible
/// interval) would otherwise never terminate. Hitting the cap returns a
/// fallback value from inside the interval; for physical parameters the
/// acceptance rate is high enough that the cap is never reached.
pub const MAX_RESAMPLE_ATTEMPTS: usize = 10_000;

/// One draw from N(0, 1).
pub fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let u1: f64 = rng.random::<f64>().max(1e-300); // avoid ln(0)
    let u2: f64 = rng.random();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

/// One draw from N(mean, sigma²).
pub fn sample_normal<R: Rng + ?Sized>(rng: &mut R, mean: f64, sigma: f64) -> f64 {
    mean + sigma * standard_normal(rng)
}

/// Draw from N(mean, sigma²) restricted to `(lower, upper]`.
///
/// Resamples until the draw is admissible, at most
/// [`MAX_RESAMPLE_ATTEMPTS`] times. On exhaustion returns `mean` if it is
/// admissible, otherwise the midpoint of the interval (or `lower + sigma`
/// for an unbounded interval).
pub fn sample_truncated_normal<R: Rng + ?Sized>(
    rng: &mut R,
    mean: f64,
    sigma: f64,
    lower: f64,
    upper: f64,
) -> f64 {
    for _ in 0..MAX_RESAMPLE_ATTEMPTS {
        let x = sample_normal(rng, mean, sigma);
        if x > lower && x <= upper {
            return x;
        }
    }
    fallback(mean, sigma, lower, upper)
}

fn fallback(mean: f64, sigma: f64, lower: f64, upper: f64) -> f64 {
    if mean > lower && mean <= upper {
        mean
    } else if upper.is_finite() {
        0.5 * (lower + upper)
    } else {
        lower + sigma.abs().max(f64::EPSILON)
    }
}
