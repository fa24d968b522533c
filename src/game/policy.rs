use crate::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// The pitcher's mixed strategy at one count.
///
/// Only choices with positive usage are kept. Serializes nested as
/// pitch → zone → usage, which is also what [`Policy::nested`] returns.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(into = "BTreeMap<Pitch, BTreeMap<Zone, Probability>>")]
pub struct Policy(BTreeMap<Choice, Probability>);

impl Policy {
    pub fn get(&self, choice: Choice) -> Probability {
        self.0.get(&choice).copied().unwrap_or_default()
    }
    pub fn iter(&self) -> impl Iterator<Item = (Choice, Probability)> + '_ {
        self.0.iter().map(|(c, p)| (*c, *p))
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn mass(&self) -> Probability {
        self.0.values().sum()
    }
    /// Largest usage of any one choice.
    pub fn peak(&self) -> Probability {
        self.0.values().copied().fold(0.0, Probability::max)
    }
    pub fn nested(&self) -> BTreeMap<Pitch, BTreeMap<Zone, Probability>> {
        let mut nested = BTreeMap::<Pitch, BTreeMap<Zone, Probability>>::new();
        for (choice, p) in self.iter() {
            nested.entry(choice.pitch).or_default().insert(choice.zone, p);
        }
        nested
    }
    /// Rescales to unit mass.
    pub fn normalized(self) -> Self {
        let mass = self.mass();
        match mass > 0.0 {
            true => Self(self.0.into_iter().map(|(c, p)| (c, p / mass)).collect()),
            false => self,
        }
    }
}

/// Drops usage at or below [`POLICY_EPSILON`].
impl FromIterator<(Choice, Probability)> for Policy {
    fn from_iter<I: IntoIterator<Item = (Choice, Probability)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .filter(|(_, p)| *p > POLICY_EPSILON)
                .collect(),
        )
    }
}

impl From<Policy> for BTreeMap<Pitch, BTreeMap<Zone, Probability>> {
    fn from(policy: Policy) -> Self {
        policy.nested()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negligible_usage_is_dropped() {
        let ff = Choice::from((Pitch::FourSeam, Zone::from(1)));
        let sl = Choice::from((Pitch::Slider, Zone::from(14)));
        let policy = Policy::from_iter([(ff, 0.6), (sl, 0.4), (Choice::from((Pitch::Curve, Zone::from(5))), 1e-12)]);
        assert_eq!(policy.len(), 2);
        assert_eq!(policy.peak(), 0.6);
        assert_eq!(policy.nested()[&Pitch::Slider][&Zone::from(14)], 0.4);
    }

    #[test]
    fn serializes_nested() {
        let policy = Policy::from_iter([
            (Choice::from((Pitch::FourSeam, Zone::from(1))), 0.5),
            (Choice::from((Pitch::FourSeam, Zone::from(2))), 0.25),
            (Choice::from((Pitch::Cutter, Zone::from(11))), 0.25),
        ]);
        let json = serde_json::to_value(&policy).unwrap();
        assert_eq!(json["FF"]["1"], 0.5);
        assert_eq!(json["FF"]["2"], 0.25);
        assert_eq!(json["FC"]["11"], 0.25);
    }

    #[test]
    fn normalized_has_unit_mass() {
        let policy = Policy::from_iter([
            (Choice::from((Pitch::TwoSeam, Zone::from(3))), 2.0),
            (Choice::from((Pitch::TwoSeam, Zone::from(4))), 6.0),
        ])
        .normalized();
        assert_eq!(policy.mass(), 1.0);
        assert_eq!(policy.get(Choice::from((Pitch::TwoSeam, Zone::from(4)))), 0.75);
    }
}
