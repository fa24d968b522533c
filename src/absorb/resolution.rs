use crate::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// Probability of each way the at-bat ends, from one count.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Resolution(BTreeMap<Terminal, Probability>);

impl Resolution {
    pub fn get(&self, terminal: Terminal) -> Probability {
        self.0.get(&terminal).copied().unwrap_or_default()
    }
    pub fn iter(&self) -> impl Iterator<Item = (Terminal, Probability)> + '_ {
        self.0.iter().map(|(t, p)| (*t, *p))
    }
    pub fn mass(&self) -> Probability {
        self.0.values().sum()
    }
    /// Mass sums to one within [`RESOLUTION_TOLERANCE`].
    pub fn is_complete(&self) -> bool {
        (self.mass() - 1.0).abs() <= RESOLUTION_TOLERANCE
    }
    pub fn add(&mut self, terminal: Terminal, p: Probability) {
        *self.0.entry(terminal).or_default() += p;
    }
    /// Folds in another resolution reached with probability `weight`.
    pub fn absorb(&mut self, other: &Self, weight: Probability) {
        other.iter().for_each(|(t, p)| self.add(t, p * weight));
    }
    pub fn scale(&mut self, factor: f64) {
        self.0.values_mut().for_each(|p| *p *= factor);
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries = self
            .iter()
            .map(|(t, p)| format!("{} {:.4}", t, p))
            .collect::<Vec<_>>();
        write!(f, "{}", entries.join("  "))
    }
}
