//! # Uniform Source
//!
//! The single external collaborator of the sampler: "produce a uniformly
//! distributed `f64` in `[0, 1)`".

use rand::Rng;

/// A uniform random source producing `f64` values in `[0, 1)`.
///
/// Every [`rand::Rng`] is a `UniformSource`, so production callers pass
/// `rand::rng()` while tests inject `StdRng::seed_from_u64(..)` or a fixed
/// fake for deterministic draws.
pub trait UniformSource {
  /// The next uniformly distributed value in `[0, 1)`.
  fn next_unit(&mut self) -> f64;
}

impl<R: Rng> UniformSource for R {
  fn next_unit(&mut self) -> f64 {
    self.random_range(0.0..1.0)
  }
}
