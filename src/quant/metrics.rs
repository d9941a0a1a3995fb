//! # Metrics
//!
//! $$
//! \beta=\frac{\mathrm{Cov}(r_a,r_m)}{\mathrm{Var}(r_m)}
//! $$
//!
//! Return, volatility, drawdown, correlation and beta calculations, each a
//! direct transcription of its textbook definition. Degenerate input (too
//! short, zero variance) yields 0.0 rather than an error.

use linreg::linear_regression;

/// Convert a price series to simple returns, `p_i / p_{i-1} - 1`.
///
/// Consecutive pairs containing a non-positive price are skipped.
pub fn simple_returns(prices: &[f64]) -> Vec<f64> {
  let mut out = Vec::with_capacity(prices.len().saturating_sub(1));
  for i in 1..prices.len() {
    if prices[i - 1] > 0.0 && prices[i] > 0.0 {
      out.push(prices[i] / prices[i - 1] - 1.0);
    }
  }
  out
}

/// Convert a price series to log returns, `ln(p_i / p_{i-1})`.
pub fn log_returns(prices: &[f64]) -> Vec<f64> {
  let mut out = Vec::with_capacity(prices.len().saturating_sub(1));
  for i in 1..prices.len() {
    if prices[i - 1] > 0.0 && prices[i] > 0.0 {
      out.push((prices[i] / prices[i - 1]).ln());
    }
  }
  out
}

/// Arithmetic mean; 0.0 for an empty slice.
pub fn mean(xs: &[f64]) -> f64 {
  if xs.is_empty() {
    0.0
  } else {
    xs.iter().sum::<f64>() / xs.len() as f64
  }
}

/// Sample variance (n − 1 denominator); 0.0 below two observations.
pub fn variance(xs: &[f64]) -> f64 {
  if xs.len() < 2 {
    return 0.0;
  }
  let m = mean(xs);
  xs.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / (xs.len() - 1) as f64
}

/// Sample standard deviation.
pub fn std_dev(xs: &[f64]) -> f64 {
  variance(xs).sqrt()
}

/// Annualized volatility of a per-period return series.
///
/// `periods_per_year` is the sampling frequency, e.g. 252 for daily data.
pub fn volatility(returns: &[f64], periods_per_year: f64) -> f64 {
  std_dev(returns) * periods_per_year.sqrt()
}

/// Largest peak-to-trough decline of a price series, as a positive
/// fraction of the peak. 0.0 for monotone non-decreasing or short input.
pub fn max_drawdown(prices: &[f64]) -> f64 {
  let mut peak = f64::NEG_INFINITY;
  let mut worst: f64 = 0.0;
  for &p in prices {
    if p > peak {
      peak = p;
    }
    if peak > 0.0 {
      worst = worst.max((peak - p) / peak);
    }
  }
  worst
}

/// Pearson correlation of two series, clamped to [−1, 1]; 0.0 when either
/// side is degenerate or shorter than 2.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
  let n = x.len().min(y.len());
  if n < 2 {
    return 0.0;
  }

  let mx = mean(&x[..n]);
  let my = mean(&y[..n]);

  let mut cov = 0.0;
  let mut sx = 0.0;
  let mut sy = 0.0;
  for i in 0..n {
    let dx = x[i] - mx;
    let dy = y[i] - my;
    cov += dx * dy;
    sx += dx * dx;
    sy += dy * dy;
  }

  let denom = (sx * sy).sqrt();
  if denom < 1e-15 {
    0.0
  } else {
    (cov / denom).clamp(-1.0, 1.0)
  }
}

/// Beta of an asset against the market: the regression slope of asset
/// returns on market returns. 0.0 on degenerate input.
pub fn beta(asset_returns: &[f64], market_returns: &[f64]) -> f64 {
  let n = asset_returns.len().min(market_returns.len());
  if n < 2 {
    return 0.0;
  }
  match linear_regression::<f64, f64, f64>(&market_returns[..n], &asset_returns[..n]) {
    Ok((slope, _intercept)) => slope,
    Err(_) => 0.0,
  }
}

/// Annualized Sharpe ratio of a per-period return series against a
/// per-period risk-free rate. 0.0 when volatility is degenerate.
pub fn sharpe(returns: &[f64], risk_free_per_period: f64, periods_per_year: f64) -> f64 {
  let sd = std_dev(returns);
  if sd < 1e-15 {
    return 0.0;
  }
  (mean(returns) - risk_free_per_period) / sd * periods_per_year.sqrt()
}

#[cfg(test)]
mod tests {
  use approx::assert_relative_eq;

  use super::*;

  #[test]
  fn simple_returns_skip_non_positive_prices() {
    let r = simple_returns(&[100.0, 110.0, 0.0, 121.0, 133.1]);
    assert_eq!(r.len(), 2);
    assert_relative_eq!(r[0], 0.1, epsilon = 1e-12);
    assert_relative_eq!(r[1], 0.1, epsilon = 1e-12);
  }

  #[test]
  fn log_returns_match_ln_ratio() {
    let r = log_returns(&[100.0, 110.0, 99.0]);
    assert_eq!(r.len(), 2);
    assert_relative_eq!(r[0], (1.1f64).ln(), epsilon = 1e-12);
    assert_relative_eq!(r[1], (0.9f64).ln(), epsilon = 1e-12);
  }

  #[test]
  fn variance_and_std_dev_use_sample_denominator() {
    let xs = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    // Population variance of this classic series is 4; sample is 32/7.
    assert_relative_eq!(variance(&xs), 32.0 / 7.0, epsilon = 1e-12);
    assert_relative_eq!(std_dev(&xs), (32.0f64 / 7.0).sqrt(), epsilon = 1e-12);
    assert_relative_eq!(variance(&[1.0]), 0.0);
  }

  #[test]
  fn volatility_annualizes_by_sqrt_periods() {
    let returns = [0.01, -0.02, 0.015, 0.0, -0.005];
    assert_relative_eq!(
      volatility(&returns, 252.0),
      std_dev(&returns) * 252.0f64.sqrt(),
      epsilon = 1e-12
    );
  }

  #[test]
  fn max_drawdown_finds_worst_peak_to_trough() {
    let prices = [100.0, 120.0, 90.0, 110.0, 80.0, 95.0];
    // Peak 120 to trough 80.
    assert_relative_eq!(max_drawdown(&prices), 40.0 / 120.0, epsilon = 1e-12);
    assert_relative_eq!(max_drawdown(&[1.0, 2.0, 3.0]), 0.0);
    assert_relative_eq!(max_drawdown(&[]), 0.0);
  }

  #[test]
  fn pearson_detects_perfect_correlation() {
    let x = [1.0, 2.0, 3.0, 4.0];
    let up: Vec<f64> = x.iter().map(|v| 2.0 * v + 1.0).collect();
    let down: Vec<f64> = x.iter().map(|v| -v + 10.0).collect();
    assert_relative_eq!(pearson(&x, &up), 1.0, epsilon = 1e-12);
    assert_relative_eq!(pearson(&x, &down), -1.0, epsilon = 1e-12);
    assert_relative_eq!(pearson(&x, &[5.0, 5.0, 5.0, 5.0]), 0.0);
  }

  #[test]
  fn beta_recovers_regression_slope() {
    let market = [0.01, -0.02, 0.03, 0.005, -0.01];
    let asset: Vec<f64> = market.iter().map(|r| 1.5 * r).collect();
    assert_relative_eq!(beta(&asset, &market), 1.5, epsilon = 1e-9);
    assert_relative_eq!(beta(&[0.01], &[0.02]), 0.0);
  }

  #[test]
  fn sharpe_is_zero_for_flat_series() {
    assert_relative_eq!(sharpe(&[0.01, 0.01, 0.01], 0.0, 252.0), 0.0);
    let returns = [0.02, -0.01, 0.03, 0.0];
    let expected = (mean(&returns) - 0.001) / std_dev(&returns) * 252.0f64.sqrt();
    assert_relative_eq!(sharpe(&returns, 0.001, 252.0), expected, epsilon = 1e-12);
  }
}
