//! Sample statistics over simulated prices.

mod histogram;

pub use histogram::{Histogram, DEFAULT_BINS, MAX_BINS};
