//! # Quant
//!
//! Closed-form financial metrics over return/price series and parametric
//! normal risk measures.

pub mod metrics;
pub mod risk;
