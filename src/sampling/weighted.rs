//! # Weighted Selector
//!
//! Prefix-sum weighted sampling with replacement: each accepted weight
//! extends a running cumulative total, and a draw maps a uniform value onto
//! an entry by binary search over the cumulative weights.

use crate::sampling::source::UniformSource;
use crate::sampling::EmptyCollectionError;

/// A stored payload together with the running cumulative weight at the time
/// it was inserted. Immutable once stored.
#[derive(Clone, Copy, Debug)]
pub struct WeightedEntry<T> {
  item: T,
  cum_weight: f64,
}

impl<T> WeightedEntry<T> {
  /// The stored payload.
  pub fn item(&self) -> &T {
    &self.item
  }

  /// Sum of all accepted weights up to and including this entry.
  pub fn cum_weight(&self) -> f64 {
    self.cum_weight
  }
}

/// Weighted sampling with replacement over a dynamic, append-only set of
/// weighted items.
///
/// Entries are kept in insertion order; each holds the prefix sum of all
/// accepted weights so far, so cumulative weights are non-decreasing by
/// construction and a draw is a single `partition_point` over them.
///
/// Not internally synchronized: concurrent insertion requires external
/// serialization, and draws may run in parallel only while no insertion is
/// in flight.
#[derive(Clone, Debug)]
pub struct WeightedSelector<T> {
  entries: Vec<WeightedEntry<T>>,
  total_weight: f64,
}

impl<T> Default for WeightedSelector<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> WeightedSelector<T> {
  /// Create an empty selector.
  pub fn new() -> Self {
    Self {
      entries: Vec::new(),
      total_weight: 0.0,
    }
  }

  /// Append `item` with the given `weight`.
  ///
  /// Weights for which `weight > 0.0` does not hold — zero, negative, NaN —
  /// are silently ignored so callers can feed computed weights without
  /// pre-filtering. `+∞` is accepted as-is: the total becomes infinite and
  /// every later draw lands on the first infinite-width entry.
  pub fn add(&mut self, item: T, weight: f64) {
    if !(weight > 0.0) {
      return;
    }
    self.total_weight += weight;
    self.entries.push(WeightedEntry {
      item,
      cum_weight: self.total_weight,
    });
  }

  /// Draw one item with probability proportional to its weight.
  ///
  /// Returns [`EmptyCollectionError`] when no positive-weight entry was
  /// ever added. The draw itself never mutates the selector; only the
  /// random source advances.
  ///
  /// The canonical placement rule is "first entry whose cumulative weight
  /// is strictly greater than `r`", so an entry's own weight spans the
  /// half-open interval `(prev_cum, cum]`. A draw that rounds up to the
  /// total weight clamps to the last entry.
  pub fn pick<S: UniformSource + ?Sized>(&self, source: &mut S) -> Result<&T, EmptyCollectionError> {
    if self.entries.is_empty() {
      return Err(EmptyCollectionError);
    }
    let r = source.next_unit() * self.total_weight;
    let idx = self.entries.partition_point(|e| e.cum_weight <= r);
    // idx == len only when r hit total_weight through rounding.
    let idx = idx.min(self.entries.len() - 1);
    Ok(&self.entries[idx].item)
  }

  /// Number of accepted entries.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Whether no positive-weight entry was ever added.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Sum of all accepted weights; 0.0 while empty.
  pub fn total_weight(&self) -> f64 {
    self.total_weight
  }

  /// Accepted entries in insertion order.
  pub fn entries(&self) -> &[WeightedEntry<T>] {
    &self.entries
  }
}
