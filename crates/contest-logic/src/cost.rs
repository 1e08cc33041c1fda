//! Bid-cost inputs and their validation

use serde::Serialize;
use thiserror::Error;

/// Rejected bid-cost input.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum DomainError {
    #[error("bid cost k_{player} must be strictly positive and finite, got {value}")]
    InvalidCost { player: usize, value: f64 },
}

/// Bid costs (k_1, k_2, k_3) of the three players.
///
/// Construction rejects non-positive and non-finite components, so every
/// denominator in the regime formulas (the k_i themselves and their sums)
/// is guaranteed nonzero. Invalid input fails here with [`DomainError`]
/// instead of propagating NaN or infinity through the solution.
///
/// The closed form assumes k_1 <= k_2 <= k_3. The type does not re-sort;
/// callers with unordered costs sort before constructing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BidCosts([f64; 3]);

impl BidCosts {
    /// Validate and wrap a bid-cost triple.
    pub fn new(k1: f64, k2: f64, k3: f64) -> Result<Self, DomainError> {
        let k = [k1, k2, k3];
        for (i, ki) in k.iter().enumerate() {
            if !ki.is_finite() || *ki <= 0.0 {
                return Err(DomainError::InvalidCost {
                    player: i + 1,
                    value: *ki,
                });
            }
        }
        Ok(Self(k))
    }

    pub fn k1(&self) -> f64 {
        self.0[0]
    }

    pub fn k2(&self) -> f64 {
        self.0[1]
    }

    pub fn k3(&self) -> f64 {
        self.0[2]
    }

    pub fn as_array(&self) -> [f64; 3] {
        self.0
    }
}

impl TryFrom<[f64; 3]> for BidCosts {
    type Error = DomainError;

    fn try_from(k: [f64; 3]) -> Result<Self, DomainError> {
        Self::new(k[0], k[1], k[2])
    }
}
