//! # Risk
//!
//! $$
//! \mathrm{VaR}_c=\sigma\,\Phi^{-1}(c)-\mu
//! $$
//!
//! Parametric risk measures under a normal return assumption.

use anyhow::{bail, Result};
use statrs::distribution::{Continuous, ContinuousCDF, Normal};

fn check_params(std_dev: f64, confidence: f64) -> Result<()> {
  if !(std_dev >= 0.0) {
    bail!("std_dev must be non-negative, got {std_dev}");
  }
  if !(confidence > 0.0 && confidence < 1.0) {
    bail!("confidence must lie in (0, 1), got {confidence}");
  }
  Ok(())
}

/// Value at risk of a normally distributed per-period return with the given
/// mean and standard deviation, at confidence `c` (e.g. 0.99).
///
/// Reported as a positive number when it is a loss: `σ·Φ⁻¹(c) − μ`.
pub fn normal_var(mean: f64, std_dev: f64, confidence: f64) -> Result<f64> {
  check_params(std_dev, confidence)?;
  let n = Normal::default();
  Ok(std_dev * n.inverse_cdf(confidence) - mean)
}

/// Expected shortfall (CVaR) under the same normal assumption:
/// `σ·φ(Φ⁻¹(α))/α − μ` with tail mass `α = 1 − c`.
pub fn normal_expected_shortfall(mean: f64, std_dev: f64, confidence: f64) -> Result<f64> {
  check_params(std_dev, confidence)?;
  let n = Normal::default();
  let alpha = 1.0 - confidence;
  let z = n.inverse_cdf(alpha);
  Ok(std_dev * n.pdf(z) / alpha - mean)
}
