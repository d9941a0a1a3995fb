//! # Similarity
//!
//! Vector similarity helpers.

use ndarray::ArrayView1;

/// Cosine similarity of two vectors, clamped to [−1, 1].
///
/// Operates on the common prefix when lengths differ; returns 0.0 when
/// either norm is degenerate.
pub fn cosine(a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
  let mut dot = 0.0;
  let mut na = 0.0;
  let mut nb = 0.0;
  for (x, y) in a.iter().zip(b.iter()) {
    dot += x * y;
    na += x * x;
    nb += y * y;
  }

  let denom = (na * nb).sqrt();
  if denom < 1e-15 {
    0.0
  } else {
    (dot / denom).clamp(-1.0, 1.0)
  }
}
