use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// The immediate physical result of one pitch.
///
/// `Strike`, `Ball`, and `Foul` move the count; the rest end the at-bat.
/// Which labels may appear depends on the [`Rules`] in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Strike,
    Ball,
    Foul,
    Out,
    Hit,
    Single,
    Double,
    Triple,
    Homerun,
}

impl Outcome {
    /// The terminal this outcome ends in, if it ends the at-bat outright.
    pub const fn terminal(&self) -> Option<Terminal> {
        match self {
            Self::Out => Some(Terminal::Out),
            Self::Hit => Some(Terminal::Hit),
            Self::Single => Some(Terminal::Single),
            Self::Double => Some(Terminal::Double),
            Self::Triple => Some(Terminal::Triple),
            Self::Homerun => Some(Terminal::Homerun),
            Self::Strike | Self::Ball | Self::Foul => None,
        }
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Strike => "strike",
            Self::Ball => "ball",
            Self::Foul => "foul",
            Self::Out => "out",
            Self::Hit => "hit",
            Self::Single => "single",
            Self::Double => "double",
            Self::Triple => "triple",
            Self::Homerun => "homerun",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<&str> for Outcome {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "strike" => Ok(Self::Strike),
            "ball" => Ok(Self::Ball),
            "foul" => Ok(Self::Foul),
            "out" => Ok(Self::Out),
            "hit" => Ok(Self::Hit),
            "single" => Ok(Self::Single),
            "double" => Ok(Self::Double),
            "triple" => Ok(Self::Triple),
            "homerun" => Ok(Self::Homerun),
            _ => Err(Error::InvalidOutcomeLabel(s.to_string())),
        }
    }
}

impl From<Terminal> for Outcome {
    fn from(terminal: Terminal) -> Self {
        match terminal {
            Terminal::Out => Self::Out,
            Terminal::Hit => Self::Hit,
            Terminal::Single => Self::Single,
            Terminal::Double => Self::Double,
            Terminal::Triple => Self::Triple,
            Terminal::Homerun => Self::Homerun,
        }
    }
}
