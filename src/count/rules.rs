use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Which outcome model a deployment plays under.
///
/// Both models share the count regimes of [`Count::successor`]. They differ
/// in the raw labels a transition table may carry and in where a walk lands.
///
/// - `Binary`: out or hit; a walk is a hit.
/// - `Expanded`: out or single/double/triple/homerun; a walk is a single.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Rules {
    Binary,
    #[default]
    Expanded,
}

impl Rules {
    pub const fn walk(&self) -> Terminal {
        match self {
            Self::Binary => Terminal::Hit,
            Self::Expanded => Terminal::Single,
        }
    }
    /// Raw outcome labels a transition table may use.
    pub const fn outcomes(&self) -> &'static [Outcome] {
        match self {
            Self::Binary => &[
                Outcome::Strike,
                Outcome::Ball,
                Outcome::Foul,
                Outcome::Out,
                Outcome::Hit,
            ],
            Self::Expanded => &[
                Outcome::Strike,
                Outcome::Ball,
                Outcome::Foul,
                Outcome::Out,
                Outcome::Single,
                Outcome::Double,
                Outcome::Triple,
                Outcome::Homerun,
            ],
        }
    }
    /// Every way an at-bat can end.
    pub const fn terminals(&self) -> &'static [Terminal] {
        match self {
            Self::Binary => &[Terminal::Out, Terminal::Hit],
            Self::Expanded => &[
                Terminal::Out,
                Terminal::Single,
                Terminal::Double,
                Terminal::Triple,
                Terminal::Homerun,
            ],
        }
    }
    /// Terminals that reward the batter.
    pub fn hits(&self) -> impl Iterator<Item = Terminal> {
        self.terminals().iter().copied().filter(|t| !t.is_out())
    }
    pub fn admits(&self, outcome: Outcome) -> bool {
        self.outcomes().contains(&outcome)
    }
}

impl std::fmt::Display for Rules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Binary => write!(f, "binary"),
            Self::Expanded => write!(f, "expanded"),
        }
    }
}
