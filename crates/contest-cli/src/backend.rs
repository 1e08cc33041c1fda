//! Bridge from the declarative LP to the good_lp solver
//!
//! `contest-logic` only describes the problem; this module translates it
//! into a good_lp model and runs the pure-Rust microlp simplex backend.

use contest_logic::{LinearProgram, N_VARS};
use good_lp::{
    default_solver, variable, Expression, ProblemVariables, ResolutionError, Solution,
    SolverModel, Variable,
};
use serde::Serialize;
use thiserror::Error;

/// Failure reported by the LP backend. For valid positive costs the
/// contest LP is always feasible and bounded, so `Infeasible` and
/// `Unbounded` indicate a formulation bug rather than a user error.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("linear program is infeasible")]
    Infeasible,
    #[error("linear program is unbounded")]
    Unbounded,
    #[error("solver failure: {0}")]
    Backend(String),
}

/// Optimal point and value reported by the backend, split back into the
/// score and prize halves of the decision vector.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LpSolution {
    pub scores: [f64; 3],
    pub prizes: [f64; 3],
    pub objective: f64,
}

/// Solve a contest LP to optimality.
pub fn solve_lp(lp: &LinearProgram) -> Result<LpSolution, SolveError> {
    let mut problem = ProblemVariables::new();
    let xs: Vec<Variable> = lp
        .bounds
        .iter()
        .map(|&(lo, hi)| problem.add(variable().min(lo).max(hi)))
        .collect();

    let objective = row_expression(&xs, &lp.objective);
    let mut model = problem.maximise(objective.clone()).using(default_solver);
    for row in &lp.inequalities {
        model = model.with(row_expression(&xs, &row.coefficients).leq(row.rhs));
    }
    for row in &lp.equalities {
        model = model.with(row_expression(&xs, &row.coefficients).eq(row.rhs));
    }
    log::debug!(
        "solving LP: {} variables, {} inequality rows, {} equality rows",
        N_VARS,
        lp.inequalities.len(),
        lp.equalities.len()
    );

    let solution = model.solve().map_err(|err| match err {
        ResolutionError::Infeasible => SolveError::Infeasible,
        ResolutionError::Unbounded => SolveError::Unbounded,
        other => SolveError::Backend(other.to_string()),
    })?;

    let x = |i: usize| solution.value(xs[i]);
    Ok(LpSolution {
        scores: [x(0), x(1), x(2)],
        prizes: [x(3), x(4), x(5)],
        objective: solution.eval(&objective),
    })
}

fn row_expression(xs: &[Variable], coefficients: &[f64; N_VARS]) -> Expression {
    coefficients
        .iter()
        .zip(xs)
        .map(|(c, x)| *c * *x)
        .sum()
}
