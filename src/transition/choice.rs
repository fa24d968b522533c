use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// One pitcher action: a pitch type aimed at a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Choice {
    pub pitch: Pitch,
    pub zone: Zone,
}

impl From<(Pitch, Zone)> for Choice {
    fn from((pitch, zone): (Pitch, Zone)) -> Self {
        Self { pitch, zone }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.pitch, self.zone)
    }
}
