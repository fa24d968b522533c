use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Outcome distributions for both batter actions at one (choice, count).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Cell {
    pub swing: Distribution,
    pub take: Distribution,
}

impl Cell {
    pub fn get(&self, action: Action) -> &Distribution {
        match action {
            Action::Swing => &self.swing,
            Action::Take => &self.take,
        }
    }
}

impl From<(Distribution, Distribution)> for Cell {
    fn from((swing, take): (Distribution, Distribution)) -> Self {
        Self { swing, take }
    }
}
