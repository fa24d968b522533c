use crate::*;
use rand::Rng;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// Probability of each raw outcome for one (choice, count, action).
///
/// Distributions arrive from upstream models and are checked, not trusted:
/// see [`Distribution::validate`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distribution(BTreeMap<Outcome, Probability>);

impl Distribution {
    /// All mass on one outcome.
    pub fn certain(outcome: Outcome) -> Self {
        Self(BTreeMap::from([(outcome, 1.0)]))
    }
    pub fn get(&self, outcome: Outcome) -> Probability {
        self.0.get(&outcome).copied().unwrap_or_default()
    }
    pub fn iter(&self) -> impl Iterator<Item = (Outcome, Probability)> + '_ {
        self.0.iter().map(|(o, p)| (*o, *p))
    }
    /// Outcomes with strictly positive probability.
    pub fn support(&self) -> impl Iterator<Item = (Outcome, Probability)> + '_ {
        self.iter().filter(|(_, p)| *p > 0.0)
    }
    pub fn mass(&self) -> Probability {
        self.0.values().sum()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Rejects labels the rules don't produce, probabilities outside [0, 1],
    /// and total mass further than [`DISTRIBUTION_TOLERANCE`] from one.
    pub fn validate(
        &self,
        rules: Rules,
        choice: Choice,
        count: Count,
        action: Action,
    ) -> Result<(), Error> {
        if let Some(outcome) = self.0.keys().find(|o| !rules.admits(**o)) {
            return Err(Error::InadmissibleOutcome(*outcome, rules));
        }
        let mass = self.mass();
        let ranged = self.0.values().all(|p| (0.0..=1.0).contains(p));
        if ranged && (mass - 1.0).abs() <= DISTRIBUTION_TOLERANCE {
            Ok(())
        } else {
            Err(Error::MalformedDistribution {
                choice,
                count,
                action,
                mass,
            })
        }
    }

    /// Random distribution over the given outcomes.
    pub fn sample<R: Rng>(outcomes: &[Outcome], rng: &mut R) -> Self {
        let weights = outcomes
            .iter()
            .map(|o| (*o, rng.random::<Probability>()))
            .collect::<Vec<_>>();
        Self::normalized(weights)
    }

    /// Scales arbitrary non-negative weights to unit mass.
    pub fn normalized(weights: impl IntoIterator<Item = (Outcome, Probability)>) -> Self {
        let raw = weights.into_iter().collect::<Self>();
        let mass = raw.mass();
        match mass > 0.0 {
            true => Self(raw.0.into_iter().map(|(o, p)| (o, p / mass)).collect()),
            false => raw,
        }
    }
}

impl FromIterator<(Outcome, Probability)> for Distribution {
    fn from_iter<I: IntoIterator<Item = (Outcome, Probability)>>(iter: I) -> Self {
        let mut map = BTreeMap::new();
        for (outcome, p) in iter {
            *map.entry(outcome).or_insert(0.0) += p;
        }
        Self(map)
    }
}

impl<const K: usize> From<[(Outcome, Probability); K]> for Distribution {
    fn from(pairs: [(Outcome, Probability); K]) -> Self {
        pairs.into_iter().collect()
    }
}
