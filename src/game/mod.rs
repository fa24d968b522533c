//! Value iteration over the count graph.
//!
//! Each sweep freezes the previous values in a [`Snapshot`], builds a
//! [`QTable`] per count from it, and solves that count's [`Minimax`]
//! program. New values are only published to the [`History`] once every
//! count of the sweep is done.

mod config;
mod equilibrium;
mod history;
mod minimax;
mod policy;
mod qvalues;
mod response;
mod rewards;
mod solution;
mod solver;

pub use config::*;
pub use equilibrium::*;
pub use history::*;
pub use minimax::*;
pub use policy::*;
pub use qvalues::*;
pub use response::*;
pub use rewards::*;
pub use solution::*;
pub use solver::*;

#[cfg(test)]
mod tests;
