use crate::*;
use std::collections::BTreeMap;

/// Walks the count graph under fixed strategies and resolves every count
/// into terminal outcome probabilities.
///
/// Each branch weighs pitcher usage, batter mix, and outcome probability.
/// Branches back into the same count are pooled as self-loop mass `ℓ`
/// rather than followed, and the count's accumulated probabilities are
/// divided by `1 - ℓ` at the end.
///
/// When `ℓ` is one the at-bat never leaves the count. That count is left
/// unresolved, and counts upstream of it lose the branches that reach it.
pub struct Propagator<'a, T: TransitionProvider + ?Sized> {
    equilibria: &'a BTreeMap<Count, Equilibrium>,
    transitions: &'a T,
    rules: Rules,
}

#[derive(Clone, Default)]
enum Status {
    #[default]
    Pending,
    Open,
    Resolved(Resolution),
    Perpetual,
}

impl<'a, T: TransitionProvider + ?Sized> Propagator<'a, T> {
    pub fn new(
        equilibria: &'a BTreeMap<Count, Equilibrium>,
        transitions: &'a T,
        rules: Rules,
    ) -> Self {
        Self {
            equilibria,
            transitions,
            rules,
        }
    }

    pub fn absorb(&self, counts: &[Count]) -> Result<Absorption, Error> {
        let ref mut memo = vec![Status::default(); Count::N];
        counts
            .iter()
            .map(|count| self.resolve(*count, memo).map(|r| (*count, r)))
            .collect()
    }

    fn resolve(&self, count: Count, memo: &mut [Status]) -> Result<Option<Resolution>, Error> {
        let index = count.index();
        match memo[index] {
            Status::Resolved(ref done) => return Ok(Some(done.clone())),
            Status::Perpetual => return Ok(None),
            // counts only loop back onto themselves
            Status::Open => return Err(Error::Perpetual(count)),
            Status::Pending => {}
        }
        memo[index] = Status::Open;
        let equilibrium = self
            .equilibria
            .get(&count)
            .ok_or(Error::OpenStateSpace(count))?;
        let mut resolution = Resolution::default();
        let mut looped = 0.0;
        for (choice, usage) in equilibrium.policy.iter() {
            for action in Action::all() {
                let mix = equilibrium.response.get(action);
                if mix <= 0.0 {
                    continue;
                }
                let distribution = self.transitions.lookup(choice, count, action)?;
                for (outcome, p) in distribution.support() {
                    let weight = usage * mix * p;
                    match count.successor(outcome, self.rules) {
                        Successor::Terminal(terminal) => resolution.add(terminal, weight),
                        Successor::Continuing(next) if next == count => looped += weight,
                        Successor::Continuing(next) => {
                            if let Some(ref downstream) = self.resolve(next, memo)? {
                                resolution.absorb(downstream, weight);
                            }
                        }
                    }
                }
            }
        }
        let exit = 1.0 - looped;
        if exit <= POLICY_EPSILON {
            log::warn!("{:<32}{:<8}{:<16.6}", "count never resolves", count, looped);
            memo[index] = Status::Perpetual;
            return Ok(None);
        }
        resolution.scale(1.0 / exit);
        if !resolution.is_complete() {
            log::warn!(
                "{:<32}{:<8}{:<16.6}",
                "incomplete resolution at",
                count,
                resolution.mass()
            );
        }
        memo[index] = Status::Resolved(resolution.clone());
        Ok(Some(resolution))
    }
}
