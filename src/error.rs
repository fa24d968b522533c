use crate::*;

/// Errors raised while building or solving an at-bat game.
///
/// Construction and validation errors fail fast at the boundary.
/// Running out of sweeps is not an error; see [`Convergence`].
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Balls outside 0..=3 or strikes outside 0..=2.
    InvalidCount { balls: u8, strikes: u8 },
    InvalidCountLabel(String),
    InvalidOutcomeLabel(String),
    InvalidPitchLabel(String),
    InvalidConfig(String),
    /// Rewards must be finite and non-negative.
    InvalidReward(Terminal, Utility),
    /// A hit category of the active rules has no reward.
    MissingReward(Terminal),
    /// A raw outcome label that the active rules do not produce.
    InadmissibleOutcome(Outcome, Rules),
    /// Outcome probabilities out of range or not summing to one.
    MalformedDistribution {
        choice: Choice,
        count: Count,
        action: Action,
        mass: Probability,
    },
    MissingTransition {
        choice: Choice,
        count: Count,
        action: Action,
    },
    /// The pitcher has nothing to throw at this count.
    NoChoices(Count),
    /// A count in the state space leads to a count outside of it.
    OpenStateSpace(Count),
    Infeasible,
    Unbounded,
    /// The simplex pivot budget ran out.
    Stalled,
    /// The stage game at this count failed in the simplex.
    Unsolvable { count: Count, cause: Box<Error> },
    /// This count is reached again through another count while resolving it.
    Perpetual(Count),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCount { balls, strikes } => {
                write!(f, "invalid count: {} balls, {} strikes", balls, strikes)
            }
            Self::InvalidCountLabel(s) => write!(f, "invalid count label: {}", s),
            Self::InvalidOutcomeLabel(s) => write!(f, "invalid outcome label: {}", s),
            Self::InvalidPitchLabel(s) => write!(f, "invalid pitch label: {}", s),
            Self::InvalidConfig(s) => write!(f, "invalid config: {}", s),
            Self::InvalidReward(t, v) => write!(f, "invalid reward for {}: {}", t, v),
            Self::MissingReward(t) => write!(f, "missing reward for {}", t),
            Self::InadmissibleOutcome(o, r) => write!(f, "{} is not an outcome under {} rules", o, r),
            Self::MalformedDistribution {
                choice,
                count,
                action,
                mass,
            } => write!(
                f,
                "malformed distribution at {} {} {}: mass {:.6}",
                choice, count, action, mass
            ),
            Self::MissingTransition {
                choice,
                count,
                action,
            } => write!(f, "missing transition at {} {} {}", choice, count, action),
            Self::NoChoices(c) => write!(f, "no pitch choices at count {}", c),
            Self::OpenStateSpace(c) => write!(f, "count {} leads outside the state space", c),
            Self::Infeasible => write!(f, "linear program is infeasible"),
            Self::Unbounded => write!(f, "linear program is unbounded"),
            Self::Stalled => write!(f, "simplex exceeded its pivot budget"),
            Self::Unsolvable { count, cause } => write!(f, "count {}: {}", count, cause),
            Self::Perpetual(c) => write!(f, "count {} is part of a cycle", c),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unsolvable { cause, .. } => Some(cause.as_ref()),
            _ => None,
        }
    }
}
