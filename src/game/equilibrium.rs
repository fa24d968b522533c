use crate::*;
use serde::Serialize;

/// Solved stage game at one count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Equilibrium {
    /// Game value: the batter's expected reward from this count.
    pub value: Utility,
    pub policy: Policy,
    pub response: Response,
}
