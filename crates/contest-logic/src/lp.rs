//! Linear-program formulation of the contest
//!
//! Builds the 6-variable LP whose optimum coincides with the closed form.
//! The decision vector is x = (s_1, s_2, s_3, p_1, p_2, p_3): maximize
//! s_1 + s_2 + s_3 subject to pairwise incentive-compatibility rows,
//! per-player individual-rationality rows, the prize-mass equality
//! p_1 + p_2 + p_3 = 2, and box bounds. This module only describes the
//! problem; solving it is the caller's job.

use crate::cost::BidCosts;
use crate::PRIZE_MASS;
use serde::{Deserialize, Serialize};

/// Number of decision variables: three scores, then three prizes.
pub const N_VARS: usize = 6;

/// Identifies an LP row for reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowLabel {
    /// IC(i, j): player i must not prefer to mimic player j's effort.
    Mimic { player: usize, target: usize },
    /// IR(i): player i's payoff from participating is non-negative.
    Participation { player: usize },
    /// Prize shares sum to the fixed prize mass.
    PrizeMass,
}

/// One linear row, `coefficients . x <= rhs` or `== rhs` depending on
/// which side of [`LinearProgram`] it sits on.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearConstraint {
    pub label: RowLabel,
    pub coefficients: [f64; N_VARS],
    pub rhs: f64,
}

/// Declarative linear program over (s_1, s_2, s_3, p_1, p_2, p_3).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearProgram {
    /// Maximize `objective . x`.
    pub objective: [f64; N_VARS],
    /// `<=` rows: the six IC rows, then the three IR rows.
    pub inequalities: [LinearConstraint; 9],
    /// `==` rows: the prize-mass constraint.
    pub equalities: [LinearConstraint; 1],
    /// Inclusive (lower, upper) bounds per variable.
    pub bounds: [(f64, f64); N_VARS],
}

/// Formulate the contest LP for a validated bid-cost triple.
///
/// Row order is fixed: IC(1,2), IC(1,3), IC(2,1), IC(2,3), IC(3,1),
/// IC(3,2), IR(1), IR(2), IR(3). The prize mass stays at its raw value of
/// 2; it is never renormalized here.
pub fn build_lp(costs: BidCosts) -> LinearProgram {
    let k = costs.as_array();

    // IC(i, j): k_i s_i - k_i s_j - p_i <= -1/2 (players are 1-based).
    let ic = |i: usize, j: usize| {
        let mut coefficients = [0.0; N_VARS];
        coefficients[i - 1] = k[i - 1];
        coefficients[j - 1] = -k[i - 1];
        coefficients[i + 2] = -1.0;
        LinearConstraint {
            label: RowLabel::Mimic { player: i, target: j },
            coefficients,
            rhs: -0.5,
        }
    };

    // IR(i): k_i s_i - p_i <= 0.
    let ir = |i: usize| {
        let mut coefficients = [0.0; N_VARS];
        coefficients[i - 1] = k[i - 1];
        coefficients[i + 2] = -1.0;
        LinearConstraint {
            label: RowLabel::Participation { player: i },
            coefficients,
            rhs: 0.0,
        }
    };

    LinearProgram {
        objective: [1.0, 1.0, 1.0, 0.0, 0.0, 0.0],
        inequalities: [
            ic(1, 2),
            ic(1, 3),
            ic(2, 1),
            ic(2, 3),
            ic(3, 1),
            ic(3, 2),
            ir(1),
            ir(2),
            ir(3),
        ],
        equalities: [LinearConstraint {
            label: RowLabel::PrizeMass,
            coefficients: [0.0, 0.0, 0.0, 1.0, 1.0, 1.0],
            rhs: PRIZE_MASS,
        }],
        bounds: [
            (0.0, 1.0 / k[0]),
            (0.0, 1.0 / k[1]),
            (0.0, 1.0 / k[2]),
            (0.0, 1.0),
            (0.0, 1.0),
            (0.0, 1.0),
        ],
    }
}
