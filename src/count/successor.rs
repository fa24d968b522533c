use crate::*;

/// Where one pitch leaves the at-bat: still live at some count, or over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Successor {
    Continuing(Count),
    Terminal(Terminal),
}

impl Successor {
    pub fn count(&self) -> Option<Count> {
        match self {
            Self::Continuing(count) => Some(*count),
            Self::Terminal(_) => None,
        }
    }
    pub fn terminal(&self) -> Option<Terminal> {
        match self {
            Self::Continuing(_) => None,
            Self::Terminal(terminal) => Some(*terminal),
        }
    }
}

impl std::fmt::Display for Successor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Continuing(count) => write!(f, "{}", count),
            Self::Terminal(terminal) => write!(f, "{}", terminal),
        }
    }
}
