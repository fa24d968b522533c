use crate::*;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// Value iteration driver for one at-bat game.
///
/// Construction validates everything the loop will touch: the config,
/// the rewards against the rules, every transition distribution, and that
/// the chosen counts are closed under [`Count::successor`]. After that the
/// only failures left are simplex failures at a single count.
pub struct Game<'a, T: TransitionProvider + ?Sized> {
    transitions: &'a T,
    rewards: Rewards,
    config: Config,
    counts: Vec<Count>,
    seed: Snapshot,
}

impl<'a, T: TransitionProvider + ?Sized> Game<'a, T> {
    /// Game over all twelve counts.
    pub fn new(transitions: &'a T, rewards: Rewards, config: Config) -> Result<Self, Error> {
        Self::with_counts(transitions, rewards, config, Count::all())
    }

    /// Game over a subset of counts, which must not lead outside itself.
    pub fn with_counts(
        transitions: &'a T,
        rewards: Rewards,
        config: Config,
        counts: impl IntoIterator<Item = Count>,
    ) -> Result<Self, Error> {
        config.validate()?;
        rewards.validate(config.rules)?;
        let counts = counts
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect::<Vec<_>>();
        if counts.is_empty() {
            return Err(Error::InvalidConfig("no counts to solve".to_string()));
        }
        transitions.validate(&counts, config.rules)?;
        let game = Self {
            transitions,
            rewards,
            config,
            counts,
            seed: Snapshot::default(),
        };
        game.closure()?;
        Ok(game)
    }

    /// Replaces the zero seed with provisional values for the first sweep.
    pub fn seeded(self, seed: Snapshot) -> Self {
        Self { seed, ..self }
    }

    pub fn counts(&self) -> &[Count] {
        &self.counts
    }
    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn rewards(&self) -> &Rewards {
        &self.rewards
    }

    /// Iterates until every count moves less than theta in one sweep, or
    /// the sweep budget runs out. Either way the last sweep's strategies are
    /// propagated to terminal outcome probabilities. Counts those strategies
    /// never leave come back unresolved in the [`Absorption`].
    pub fn solve(&self) -> Result<Solution, Error> {
        log::info!(
            "{:<32}{:<16}{:<16}",
            "solving at-bat",
            self.config.rules,
            self.counts.len()
        );
        let mut history = History::seeded(&self.counts, &self.seed);
        let mut equilibria = BTreeMap::new();
        let mut convergence = Convergence::Exhausted {
            sweeps: 0,
            residual: Utility::INFINITY,
        };
        for sweep in 1..=self.config.max_sweeps {
            equilibria = self.sweep(&history.latest())?;
            history.push(equilibria.iter().map(|(c, e)| (*c, e.value)));
            let residual = history.residual();
            log::debug!("{:<32}{:<16}{:<16.8}", "completed sweep", sweep, residual);
            if residual < self.config.theta {
                convergence = Convergence::Converged { sweeps: sweep };
                break;
            }
            convergence = Convergence::Exhausted {
                sweeps: sweep,
                residual,
            };
        }
        match convergence {
            Convergence::Converged { sweeps } => {
                log::info!("{:<32}{:<16}", "converged after sweeps", sweeps)
            }
            Convergence::Exhausted { sweeps, residual } => log::warn!(
                "{:<32}{:<16}{:<16.8}",
                "sweep budget exhausted",
                sweeps,
                residual
            ),
        }
        let absorption = Propagator::new(&equilibria, self.transitions, self.config.rules)
            .absorb(&self.counts)?;
        Ok(Solution::from((
            self.config.rules,
            convergence,
            equilibria,
            absorption,
            history,
        )))
    }

    /// One synchronous sweep. Every count reads the same frozen values;
    /// nothing is published until all counts are solved.
    pub fn sweep(&self, values: &Snapshot) -> Result<BTreeMap<Count, Equilibrium>, Error> {
        #[cfg(feature = "native")]
        {
            use rayon::prelude::*;
            self.counts
                .par_iter()
                .map(|count| self.stage(*count, values).map(|e| (*count, e)))
                .collect()
        }
        #[cfg(not(feature = "native"))]
        {
            self.counts
                .iter()
                .map(|count| self.stage(*count, values).map(|e| (*count, e)))
                .collect()
        }
    }

    /// Q-table and minimax solve for one count.
    pub fn stage(&self, count: Count, values: &Snapshot) -> Result<Equilibrium, Error> {
        let ref qtable = QTable::build(
            count,
            values,
            self.transitions,
            &self.rewards,
            self.config.rules,
        )?;
        Minimax::new(count, qtable, self.config.max_usage).solve()
    }

    fn closure(&self) -> Result<(), Error> {
        for &count in self.counts.iter() {
            for choice in self.transitions.choices(count) {
                for action in Action::all() {
                    let open = self
                        .transitions
                        .lookup(choice, count, action)?
                        .support()
                        .filter_map(|(outcome, _)| count.successor(outcome, self.config.rules).count())
                        .any(|next| self.counts.binary_search(&next).is_err());
                    if open {
                        return Err(Error::OpenStateSpace(count));
                    }
                }
            }
        }
        Ok(())
    }
}
