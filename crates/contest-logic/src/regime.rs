//! Closed-form solution of the three-player contest, by regime
//!
//! The principal's optimal mechanism falls into five mutually exclusive
//! regimes, selected by the cost ratios k_3/k_2, k_3/k_1 and
//! (k_2 + k_3)/k_1. The regimes are evaluated as an ordered chain of
//! (predicate, builder) pairs; on a shared boundary the earlier regime
//! wins, and the final predicate is unconditional so the chain is
//! exhaustive.

use crate::cost::BidCosts;
use crate::PRIZE_MASS;
use serde::{Deserialize, Serialize};

/// Which closed-form branch applies, indexed 1..=5.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Regime {
    /// k_3/k_2 >= 3: the principal runs a two-player contest.
    ThirdPlayerExcluded = 1,
    /// k_3/k_1 >= 3: half of Player 2's prize moves to Player 3.
    SecondPrizeShared = 2,
    /// k_3/k_2 >= 2: half of Player 1's and Player 2's prizes move to Player 3.
    BothPrizesShared = 3,
    /// (k_2 + k_3)/k_1 >= 3: partial transfer from Player 1, Player 2's
    /// individual rationality binds.
    SecondRationalityBinds = 4,
    /// Remaining region: every player's individual rationality binds.
    AllRationalityBinds = 5,
}

impl Regime {
    /// Position of this regime in the priority chain.
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Economic mechanism active in this regime.
    pub fn narrative(&self) -> &'static str {
        match self {
            Self::ThirdPlayerExcluded => {
                "It is not worthwhile for the principal to demand effort from Player 3."
            }
            Self::SecondPrizeShared => {
                "The principal transfers half of Player 2's prize to Player 3."
            }
            Self::BothPrizesShared => {
                "The principal transfers half of Player 1's and Player 2's prize to Player 3."
            }
            Self::SecondRationalityBinds => {
                "The principal transfers half of Player 2's and some of Player 1's prize to \
                 Player 3. Player 2's individual rationality constraint is binding."
            }
            Self::AllRationalityBinds => {
                "The principal transfers some of Player 1's and Player 2's prize to Player 3. \
                 Every player's individual rationality constraint is binding."
            }
        }
    }
}

/// Equilibrium outcome for one bid-cost triple.
///
/// Constructed fresh per call and never mutated. `prizes` are on the raw
/// scale where shares sum to [`PRIZE_MASS`], matching the LP's equality
/// constraint; use [`RegimeSolution::normalized_prizes`] for the
/// sum-to-one view.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegimeSolution {
    /// Equilibrium effort of each player.
    pub scores: [f64; 3],
    /// Prize share of each player, raw scale.
    pub prizes: [f64; 3],
    /// Principal's payoff; equals the sum of the scores by construction.
    pub revenue: f64,
    /// Closed-form branch that produced this solution.
    pub regime: Regime,
}

impl RegimeSolution {
    /// Prize shares rescaled to sum to one.
    pub fn normalized_prizes(&self) -> [f64; 3] {
        self.prizes.map(|p| p / PRIZE_MASS)
    }

    /// Economic mechanism active in this solution's regime.
    pub fn narrative(&self) -> &'static str {
        self.regime.narrative()
    }
}

type Predicate = fn(&BidCosts) -> bool;
type Builder = fn(&BidCosts) -> RegimeSolution;

/// Priority chain of the five regimes. First matching predicate wins; the
/// last predicate always fires.
const REGIMES: [(Predicate, Builder); 5] = [
    (|k| k.k3() / k.k2() >= 3.0, third_player_excluded),
    (|k| k.k3() / k.k1() >= 3.0, second_prize_shared),
    (|k| k.k3() / k.k2() >= 2.0, both_prizes_shared),
    (|k| (k.k2() + k.k3()) / k.k1() >= 3.0, second_rationality_binds),
    (|_| true, all_rationality_binds),
];

/// Closed-form equilibrium for a validated bid-cost triple.
///
/// Total: [`BidCosts`] construction already rejected every input the
/// formulas are undefined on. Assumes the economically meaningful ordering
/// k_1 <= k_2 <= k_3.
pub fn solve_analytical(costs: BidCosts) -> RegimeSolution {
    let (_, build) = REGIMES
        .iter()
        .find(|(applies, _)| applies(&costs))
        .expect("regime chain ends in a catch-all");
    build(&costs)
}

fn third_player_excluded(k: &BidCosts) -> RegimeSolution {
    RegimeSolution {
        scores: [1.0 / (2.0 * k.k1()), 1.0 / (2.0 * k.k2()), 0.0],
        prizes: [1.0, 1.0, 0.0],
        revenue: 1.0 / (2.0 * k.k1()) + 1.0 / (2.0 * k.k2()),
        regime: Regime::ThirdPlayerExcluded,
    }
}

fn second_prize_shared(k: &BidCosts) -> RegimeSolution {
    RegimeSolution {
        scores: [
            1.0 / (2.0 * k.k1()) + 1.0 / (2.0 * k.k3()),
            1.0 / (2.0 * k.k3()),
            1.0 / (2.0 * k.k3()),
        ],
        prizes: [1.0, 0.5, 0.5],
        revenue: 1.0 / (2.0 * k.k1()) + 3.0 / (2.0 * k.k3()),
        regime: Regime::SecondPrizeShared,
    }
}

fn both_prizes_shared(k: &BidCosts) -> RegimeSolution {
    RegimeSolution {
        scores: [1.0 / k.k3(); 3],
        prizes: [0.5, 0.5, 1.0],
        revenue: 3.0 / k.k3(),
        regime: Regime::BothPrizesShared,
    }
}

fn second_rationality_binds(k: &BidCosts) -> RegimeSolution {
    RegimeSolution {
        scores: [
            1.0 / k.k1() - (k.k3() / k.k1() - 1.0) / (2.0 * k.k2()),
            1.0 / (2.0 * k.k2()),
            1.0 / (2.0 * k.k2()),
        ],
        prizes: [1.5 - k.k3() / (2.0 * k.k2()), 0.5, k.k3() / (2.0 * k.k2())],
        revenue: 1.0 / k.k1() + (3.0 - k.k3() / k.k1()) / (2.0 * k.k2()),
        regime: Regime::SecondRationalityBinds,
    }
}

fn all_rationality_binds(k: &BidCosts) -> RegimeSolution {
    let pooled = (k.k2() + k.k3()) / k.k1();
    RegimeSolution {
        scores: [
            (4.0 - pooled) / (2.0 * k.k1()),
            1.0 / (2.0 * k.k1()),
            1.0 / (2.0 * k.k1()),
        ],
        prizes: [
            2.0 - pooled / 2.0,
            k.k2() / (2.0 * k.k1()),
            k.k3() / (2.0 * k.k1()),
        ],
        revenue: (6.0 - pooled) / (2.0 * k.k1()),
        regime: Regime::AllRationalityBinds,
    }
}
