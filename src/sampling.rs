//! # Sampling
//!
//! $$
//! \mathbb{P}(\text{entry } i)=\frac{w_i}{\sum_j w_j}
//! $$
//!
//! Weighted random selection with replacement over an append-only sequence
//! of weighted items.

pub mod source;
pub mod weighted;

pub use source::UniformSource;
pub use weighted::{WeightedEntry, WeightedSelector};

use thiserror::Error;

/// Drawing from a selector that holds no positive-weight entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot draw from a selector with no positive-weight entries")]
pub struct EmptyCollectionError;
