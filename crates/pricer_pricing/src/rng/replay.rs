//! Finite normal source replaying a fixed sequence of draws.

use super::NormalSource;
use crate::error::PricerError;

/// A [`NormalSource`] that hands out caller-supplied draws in order.
///
/// Useful for pinning a pricing run to an exact random sequence, e.g. draws
/// exported from another system or a hand-written scenario.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::rng::{NormalSource, ReplaySource};
///
/// let mut source = ReplaySource::new(vec![0.5, -1.0, 2.0]);
/// let mut buffer = [0.0; 2];
/// source.fill_normal(&mut buffer).unwrap();
/// assert_eq!(buffer, [0.5, -1.0]);
/// assert_eq!(source.remaining(), 1);
///
/// // Asking for more than is left fails without consuming anything
/// assert!(source.fill_normal(&mut buffer).is_err());
/// assert_eq!(source.remaining(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ReplaySource {
    draws: Vec<f64>,
    cursor: usize,
}

impl ReplaySource {
    /// Creates a source over `draws`.
    pub fn new(draws: Vec<f64>) -> Self {
        Self { draws, cursor: 0 }
    }

    /// Number of draws not yet handed out.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.draws.len() - self.cursor
    }

    /// Rewinds to the first draw.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }
}

impl NormalSource for ReplaySource {
    fn fill_normal(&mut self, buffer: &mut [f64]) -> Result<(), PricerError> {
        let available = self.remaining();
        if buffer.len() > available {
            return Err(PricerError::RandomSourceExhausted {
                requested: buffer.len(),
                available,
            });
        }

        let end = self.cursor + buffer.len();
        buffer.copy_from_slice(&self.draws[self.cursor..end]);
        self.cursor = end;
        Ok(())
    }
}
