//! Small dense linear programs.
//!
//! Just enough LP for the per-count minimax problem: non-negative variables
//! with optional upper bounds, `≥`/`≤`/`=` rows, minimization, and both primal
//! and dual values at the optimum. Solved with a two-phase tableau simplex
//! under Bland's rule, so degenerate programs still terminate.

mod optimum;
mod program;
mod tableau;

pub use optimum::*;
pub use program::*;
use tableau::*;
