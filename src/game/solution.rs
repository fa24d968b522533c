use crate::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// How value iteration stopped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Convergence {
    /// Every count moved less than theta in the last sweep.
    Converged { sweeps: usize },
    /// The sweep budget ran out; values are the best effort so far.
    Exhausted { sweeps: usize, residual: Utility },
}

impl Convergence {
    pub fn is_converged(&self) -> bool {
        matches!(self, Self::Converged { .. })
    }
    pub fn sweeps(&self) -> usize {
        match self {
            Self::Converged { sweeps } | Self::Exhausted { sweeps, .. } => *sweeps,
        }
    }
}

impl std::fmt::Display for Convergence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Converged { sweeps } => write!(f, "converged after {} sweeps", sweeps),
            Self::Exhausted { sweeps, residual } => write!(
                f,
                "not converged after {} sweeps (residual {:.6})",
                sweeps, residual
            ),
        }
    }
}

/// Result of [`Game::solve`]: values and strategies of the last sweep,
/// terminal outcome probabilities under them, and the full value history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    rules: Rules,
    convergence: Convergence,
    equilibria: BTreeMap<Count, Equilibrium>,
    absorption: Absorption,
    history: History,
}

impl Solution {
    pub fn rules(&self) -> Rules {
        self.rules
    }
    pub fn convergence(&self) -> Convergence {
        self.convergence
    }
    pub fn is_converged(&self) -> bool {
        self.convergence.is_converged()
    }
    pub fn equilibrium(&self, count: Count) -> Option<&Equilibrium> {
        self.equilibria.get(&count)
    }
    pub fn value(&self, count: Count) -> Option<Utility> {
        self.equilibrium(count).map(|e| e.value)
    }
    pub fn policy(&self, count: Count) -> Option<&Policy> {
        self.equilibrium(count).map(|e| &e.policy)
    }
    pub fn response(&self, count: Count) -> Option<Response> {
        self.equilibrium(count).map(|e| e.response)
    }
    pub fn resolution(&self, count: Count) -> Option<&Resolution> {
        self.absorption.get(count)
    }
    pub fn absorption(&self) -> &Absorption {
        &self.absorption
    }
    pub fn history(&self) -> &History {
        &self.history
    }
    /// Converged values, usable as the seed of a related game.
    pub fn snapshot(&self) -> Snapshot {
        self.equilibria.iter().map(|(c, e)| (*c, e.value)).collect()
    }
    pub fn iter(&self) -> impl Iterator<Item = (Count, &Equilibrium)> + '_ {
        self.equilibria.iter().map(|(c, e)| (*c, e))
    }
}

impl From<(Rules, Convergence, BTreeMap<Count, Equilibrium>, Absorption, History)> for Solution {
    fn from(
        (rules, convergence, equilibria, absorption, history): (
            Rules,
            Convergence,
            BTreeMap<Count, Equilibrium>,
            Absorption,
            History,
        ),
    ) -> Self {
        Self {
            rules,
            convergence,
            equilibria,
            absorption,
            history,
        }
    }
}

/// Per count: value, batter mix, terminal probabilities, then every
/// choice the pitcher uses.
impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} rules, {}", self.rules, self.convergence)?;
        for (count, eq) in self.iter() {
            writeln!(f)?;
            writeln!(f, "count {}  value {:.4}  {}", count, eq.value, eq.response)?;
            match self.resolution(count) {
                Some(resolution) => writeln!(f, "  {}", resolution)?,
                None => writeln!(f, "  never resolves")?,
            }
            for (choice, usage) in eq.policy.iter() {
                writeln!(f, "  {:<3} {:>2}  {:.4}", choice.pitch, choice.zone, usage)?;
            }
        }
        Ok(())
    }
}
