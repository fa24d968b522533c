use crate::*;
use rand::Rng;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// In-memory transition table: pitch → zone → count → [`Cell`].
///
/// This is the shape the upstream pipeline hands over, deserialized as-is
/// from JSON. A (pitch, zone) is offered at a count exactly when the table
/// has a cell for it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transitions(BTreeMap<Pitch, BTreeMap<Zone, BTreeMap<Count, Cell>>>);

impl Transitions {
    pub fn insert(&mut self, choice: Choice, count: Count, cell: Cell) {
        self.0
            .entry(choice.pitch)
            .or_default()
            .entry(choice.zone)
            .or_default()
            .insert(count, cell);
    }
    pub fn cell(&self, choice: Choice, count: Count) -> Option<&Cell> {
        self.0
            .get(&choice.pitch)
            .and_then(|zones| zones.get(&choice.zone))
            .and_then(|counts| counts.get(&count))
    }
    /// Every (pitch, zone) with at least one cell.
    pub fn offered(&self) -> impl Iterator<Item = Choice> + '_ {
        self.0
            .iter()
            .flat_map(|(p, zones)| zones.keys().map(move |z| Choice::from((*p, *z))))
    }

    /// The same cell for every count and every listed choice.
    pub fn constant(choices: impl IntoIterator<Item = Choice>, cell: Cell) -> Self {
        let mut table = Self::default();
        for choice in choices {
            for count in Count::all() {
                table.insert(choice, count, cell.clone());
            }
        }
        table
    }

    /// Random but plausible table over the full pitch/zone grid.
    ///
    /// Swings spread their mass over every non-ball outcome. Takes in the
    /// strike zone are mostly called strikes; takes outside it mostly balls.
    pub fn synthetic<R: Rng>(rules: Rules, rng: &mut R) -> Self {
        let swings = rules
            .outcomes()
            .iter()
            .copied()
            .filter(|o| *o != Outcome::Ball)
            .collect::<Vec<_>>();
        let mut table = Self::default();
        for pitch in Pitch::all() {
            for zone in Zone::all() {
                for count in Count::all() {
                    let called = match zone.is_strike() {
                        true => rng.random_range(0.70..0.98),
                        false => rng.random_range(0.02..0.20),
                    };
                    let swing = Distribution::sample(&swings, rng);
                    let take = Distribution::from([
                        (Outcome::Strike, called),
                        (Outcome::Ball, 1.0 - called),
                    ]);
                    table.insert(Choice::from((pitch, zone)), count, Cell::from((swing, take)));
                }
            }
        }
        table
    }
}

impl TransitionProvider for Transitions {
    fn choices(&self, count: Count) -> Vec<Choice> {
        self.offered()
            .filter(|choice| self.cell(*choice, count).is_some())
            .collect()
    }
    fn distribution(&self, choice: Choice, count: Count, action: Action) -> Option<&Distribution> {
        self.cell(choice, count).map(|cell| cell.get(action))
    }
}

impl Arbitrary for Transitions {
    fn random() -> Self {
        Self::synthetic(Rules::default(), &mut rand::rng())
    }
}
