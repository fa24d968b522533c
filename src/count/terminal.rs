use serde::Deserialize;
use serde::Serialize;

/// How an at-bat ends.
///
/// `Hit` is the single on-base category of the binary model; the expanded
/// model splits it into bases. A walk lands on whichever category the
/// rules designate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Terminal {
    Out,
    Hit,
    Single,
    Double,
    Triple,
    Homerun,
}

impl Terminal {
    pub const fn is_out(&self) -> bool {
        matches!(self, Self::Out)
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Out => "out",
            Self::Hit => "hit",
            Self::Single => "single",
            Self::Double => "double",
            Self::Triple => "triple",
            Self::Homerun => "homerun",
        }
    }
}

impl std::fmt::Display for Terminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
