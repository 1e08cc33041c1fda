//! Contest Logic for the Three-Player Contest Game
//!
//! Equilibrium of a contest-design game: a principal allocates prize shares
//! to three players with bid costs (k_1, k_2, k_3) and collects their
//! equilibrium effort as revenue. Two independent formulations:
//! - `regime`: the five-case closed-form solution
//! - `lp`: the equivalent linear program, handed to an external solver
//!
//! This crate is pure computation. No I/O, no logging, no solver calls.

mod cost;
mod lp;
mod regime;
mod sweep;

pub use cost::{BidCosts, DomainError};
pub use lp::{build_lp, LinearConstraint, LinearProgram, RowLabel, N_VARS};
pub use regime::{solve_analytical, Regime, RegimeSolution};
pub use sweep::{sweep_k3, SweepPoint};

/// Total prize mass the principal distributes, on the raw scale shared by
/// the closed form and the LP's equality constraint. Prize shares summing
/// to one are a rescaled view, never the stored representation.
pub const PRIZE_MASS: f64 = 2.0;
