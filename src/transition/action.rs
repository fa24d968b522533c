use serde::Deserialize;
use serde::Serialize;

/// The batter's decision on a pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Swing,
    Take,
}

impl Action {
    pub const fn all() -> [Self; 2] {
        [Self::Swing, Self::Take]
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Swing => write!(f, "swing"),
            Self::Take => write!(f, "take"),
        }
    }
}
