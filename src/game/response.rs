use crate::*;
use serde::Serialize;

/// The batter's swing/take mix at one count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Response {
    pub swing: Probability,
    pub take: Probability,
}

impl Response {
    pub fn get(&self, action: Action) -> Probability {
        match action {
            Action::Swing => self.swing,
            Action::Take => self.take,
        }
    }
    /// Normalizes non-negative weights. `None` when they carry no mass.
    pub fn weighted(swing: f64, take: f64) -> Option<Self> {
        let swing = if swing > 0.0 { swing } else { 0.0 };
        let take = if take > 0.0 { take } else { 0.0 };
        let mass = swing + take;
        (mass > POLICY_EPSILON).then(|| Self {
            swing: swing / mass,
            take: take / mass,
        })
    }
}

/// Even odds.
impl Default for Response {
    fn default() -> Self {
        Self {
            swing: 0.5,
            take: 0.5,
        }
    }
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "swing {:.3} take {:.3}", self.swing, self.take)
    }
}
