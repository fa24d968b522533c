use crate::*;
use anyhow::Context;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// Batter reward for each way an at-bat can end.
///
/// An out is always worth zero. Hit categories carry whatever the
/// deployment measures: on-base probability, bases, run values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rewards(BTreeMap<Terminal, Utility>);

impl Rewards {
    /// Total bases: single 1 through homerun 4.
    pub fn bases() -> Self {
        Self::from([
            (Terminal::Single, 1.0),
            (Terminal::Double, 2.0),
            (Terminal::Triple, 3.0),
            (Terminal::Homerun, 4.0),
        ])
    }
    /// Reaching base at all.
    pub fn onbase() -> Self {
        Self::from([(Terminal::Hit, 1.0)])
    }

    pub fn get(&self, terminal: Terminal) -> Utility {
        match terminal {
            Terminal::Out => 0.0,
            _ => self.0.get(&terminal).copied().unwrap_or_default(),
        }
    }
    pub fn iter(&self) -> impl Iterator<Item = (Terminal, Utility)> + '_ {
        self.0.iter().map(|(t, u)| (*t, *u))
    }

    /// Every hit category of the rules needs a finite, non-negative reward.
    pub fn validate(&self, rules: Rules) -> Result<(), Error> {
        if let Some((terminal, reward)) = self
            .iter()
            .find(|(t, u)| !u.is_finite() || *u < 0.0 || (t.is_out() && *u != 0.0))
        {
            return Err(Error::InvalidReward(terminal, reward));
        }
        match rules.hits().find(|t| !self.0.contains_key(t)) {
            Some(terminal) => Err(Error::MissingReward(terminal)),
            None => Ok(()),
        }
    }
}

/// The natural preset for each outcome model.
impl From<Rules> for Rewards {
    fn from(rules: Rules) -> Self {
        match rules {
            Rules::Binary => Self::onbase(),
            Rules::Expanded => Self::bases(),
        }
    }
}

impl<const K: usize> From<[(Terminal, Utility); K]> for Rewards {
    fn from(pairs: [(Terminal, Utility); K]) -> Self {
        Self(pairs.into_iter().collect())
    }
}

impl FromIterator<(Terminal, Utility)> for Rewards {
    fn from_iter<I: IntoIterator<Item = (Terminal, Utility)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Parses `single=1,double=2,triple=3,homerun=4`.
impl std::str::FromStr for Rewards {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|pair| !pair.is_empty())
            .map(|pair| -> anyhow::Result<(Terminal, Utility)> {
                let (label, value) = pair
                    .split_once('=')
                    .ok_or_else(|| anyhow::anyhow!("expected label=value, got {}", pair))?;
                let terminal = Outcome::try_from(label.trim())?
                    .terminal()
                    .ok_or_else(|| anyhow::anyhow!("{} does not end an at-bat", label.trim()))?;
                let value = value
                    .trim()
                    .parse::<Utility>()
                    .with_context(|| format!("reward for {}", terminal))?;
                Ok((terminal, value))
            })
            .collect::<anyhow::Result<Self>>()
    }
}

impl std::fmt::Display for Rewards {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pairs = self
            .iter()
            .map(|(t, u)| format!("{}={}", t, u))
            .collect::<Vec<_>>();
        write!(f, "{}", pairs.join(","))
    }
}
