//! # Quant Utils
//!
//! Weighted random sampling with replacement over append-only weighted
//! collections, plus small closed-form financial metrics (returns,
//! volatility, drawdown, beta, correlation) and vector similarity helpers.

pub mod quant;
pub mod sampling;
pub mod similarity;
