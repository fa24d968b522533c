use serde::Deserialize;
use serde::Serialize;

/// A discretized pitch-location target.
///
/// Ids follow the Statcast grid: 1..=9 tile the strike zone,
/// 11..=14 are the four quadrants outside it. Other ids are allowed;
/// the solver treats zones as opaque keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Zone(u8);

impl Zone {
    pub const fn id(&self) -> u8 {
        self.0
    }
    pub const fn is_strike(&self) -> bool {
        matches!(self.0, 1..=9)
    }
    pub fn strikes() -> impl Iterator<Item = Self> {
        (1..=9).map(Self)
    }
    pub fn balls() -> impl Iterator<Item = Self> {
        (11..=14).map(Self)
    }
    /// The standard thirteen-cell grid.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::strikes().chain(Self::balls())
    }
}

impl From<u8> for Zone {
    fn from(id: u8) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}
