//! Consumer-side plumbing for the contest solver
//!
//! Everything the pure `contest-logic` crate deliberately leaves out:
//! - `backend`: hands the declarative LP to an actual solver
//! - `report`: console and JSON formatting of the two solutions
//! - `tsv`: tab-separated export of a k_3 sweep

pub mod backend;
pub mod report;
pub mod tsv;
