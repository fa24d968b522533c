use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Pitch type, labelled by its Statcast code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Pitch {
    #[serde(rename = "FF")]
    FourSeam,
    #[serde(rename = "FT")]
    TwoSeam,
    #[serde(rename = "FC")]
    Cutter,
    #[serde(rename = "SL")]
    Slider,
    #[serde(rename = "CU")]
    Curve,
    #[serde(rename = "CH")]
    Changeup,
}

impl Pitch {
    pub const fn all() -> [Self; 6] {
        [
            Self::FourSeam,
            Self::TwoSeam,
            Self::Cutter,
            Self::Slider,
            Self::Curve,
            Self::Changeup,
        ]
    }
    pub const fn code(&self) -> &'static str {
        match self {
            Self::FourSeam => "FF",
            Self::TwoSeam => "FT",
            Self::Cutter => "FC",
            Self::Slider => "SL",
            Self::Curve => "CU",
            Self::Changeup => "CH",
        }
    }
}

impl std::fmt::Display for Pitch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.code())
    }
}

impl TryFrom<&str> for Pitch {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|p| p.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidPitchLabel(s.to_string()))
    }
}

impl Arbitrary for Pitch {
    fn random() -> Self {
        use rand::seq::IndexedRandom;
        *Self::all()
            .choose(&mut rand::rng())
            .unwrap_or(&Self::FourSeam)
    }
}
