//! Parameter sweeps over the third player's bid cost

use crate::cost::{BidCosts, DomainError};
use crate::regime::{solve_analytical, RegimeSolution};
use serde::Serialize;

/// One evaluated point of a k_3 sweep.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SweepPoint {
    pub k3: f64,
    pub solution: RegimeSolution,
}

/// Solve the contest at `samples` evenly spaced k_3 values in
/// `[lo, hi]` (both endpoints included), holding k_1 and k_2 fixed.
///
/// Fails on the first invalid triple; sweeps over a valid range never
/// fail, since validity does not depend on k_3 once k_1, k_2 and the
/// endpoints pass validation.
pub fn sweep_k3(
    k1: f64,
    k2: f64,
    lo: f64,
    hi: f64,
    samples: usize,
) -> Result<Vec<SweepPoint>, DomainError> {
    (0..samples)
        .map(|i| {
            let t = if samples <= 1 {
                0.0
            } else {
                i as f64 / (samples - 1) as f64
            };
            let k3 = lo + t * (hi - lo);
            let costs = BidCosts::new(k1, k2, k3)?;
            Ok(SweepPoint {
                k3,
                solution: solve_analytical(costs),
            })
        })
        .collect()
}
