use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// A ball-strike count: one non-terminal state of the at-bat.
///
/// Counts are small integers under the hood. [`Count::index`] maps each of
/// the twelve counts to a dense slot so per-count tables can live in arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Count {
    balls: u8,
    strikes: u8,
}

impl Count {
    /// Distinct ball tallies (0..=3).
    pub const BALLS: u8 = 4;
    /// Distinct strike tallies (0..=2).
    pub const STRIKES: u8 = 3;
    /// Number of counts in the game.
    pub const N: usize = (Self::BALLS * Self::STRIKES) as usize;

    pub fn new(balls: u8, strikes: u8) -> Result<Self, Error> {
        if balls < Self::BALLS && strikes < Self::STRIKES {
            Ok(Self { balls, strikes })
        } else {
            Err(Error::InvalidCount { balls, strikes })
        }
    }
    /// The 0-0 count every at-bat starts from.
    pub const fn root() -> Self {
        Self {
            balls: 0,
            strikes: 0,
        }
    }
    pub const fn balls(&self) -> u8 {
        self.balls
    }
    pub const fn strikes(&self) -> u8 {
        self.strikes
    }
    /// Dense slot in 0..12, ordered 00, 01, 02, 10, .., 32.
    pub const fn index(&self) -> usize {
        (self.balls * Self::STRIKES + self.strikes) as usize
    }
    pub fn from_index(index: usize) -> Option<Self> {
        (index < Self::N).then(|| Self {
            balls: index as u8 / Self::STRIKES,
            strikes: index as u8 % Self::STRIKES,
        })
    }
    /// All twelve counts in index order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::N).filter_map(Self::from_index)
    }
    pub const fn is_full(&self) -> bool {
        self.balls == Self::BALLS - 1 && self.strikes == Self::STRIKES - 1
    }

    /// Where a raw outcome leads from this count.
    ///
    /// Terminal outcomes resolve to themselves. Otherwise one of four regimes
    /// applies, depending on whether the count has three balls, two strikes,
    /// both, or neither. A foul never adds a third strike, and on a three-ball
    /// count it still adds a strike.
    pub fn successor(&self, outcome: Outcome, rules: Rules) -> Successor {
        if let Some(terminal) = outcome.terminal() {
            return Successor::Terminal(terminal);
        }
        let three = self.balls == Self::BALLS - 1;
        let two = self.strikes == Self::STRIKES - 1;
        match (three, two, outcome) {
            (_, true, Outcome::Strike) => Successor::Terminal(Terminal::Out),
            (_, true, Outcome::Foul) => Successor::Continuing(*self),
            (true, _, Outcome::Ball) => Successor::Terminal(rules.walk()),
            (_, _, Outcome::Ball) => Successor::Continuing(self.ball()),
            (_, _, _) => Successor::Continuing(self.strike()),
        }
    }
    fn ball(&self) -> Self {
        Self {
            balls: self.balls + 1,
            strikes: self.strikes,
        }
    }
    fn strike(&self) -> Self {
        Self {
            balls: self.balls,
            strikes: self.strikes + 1,
        }
    }
}

impl std::fmt::Display for Count {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.balls, self.strikes)
    }
}

impl TryFrom<&str> for Count {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let invalid = || Error::InvalidCountLabel(s.to_string());
        let mut digits = s.trim().chars().map(|c| c.to_digit(10));
        match (digits.next(), digits.next(), digits.next()) {
            (Some(Some(b)), Some(Some(s)), None) => Self::new(b as u8, s as u8).map_err(|_| invalid()),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Count {
    type Error = Error;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}

impl std::str::FromStr for Count {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl From<Count> for String {
    fn from(count: Count) -> Self {
        count.to_string()
    }
}

impl Arbitrary for Count {
    fn random() -> Self {
        use rand::Rng;
        Self::from_index(rand::rng().random_range(0..Self::N)).unwrap_or_default()
    }
}

impl Default for Count {
    fn default() -> Self {
        Self::root()
    }
}
