//! Terminal outcome probabilities under a solved strategy pair.
//!
//! Counts only ever gain balls or strikes, except a foul with two strikes,
//! which stays put. The count graph is therefore a DAG plus self-loops, and
//! each count resolves once its successors have, with the self-loop mass
//! divided out geometrically.

mod absorption;
mod propagator;
mod resolution;

pub use absorption::*;
pub use propagator::*;
pub use resolution::*;
