use crate::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// One value per count, read-only for the length of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Snapshot([Utility; Count::N]);

impl Snapshot {
    pub fn get(&self, count: Count) -> Utility {
        self.0[count.index()]
    }
    pub fn set(&mut self, count: Count, value: Utility) {
        self.0[count.index()] = value;
    }
    pub fn iter(&self) -> impl Iterator<Item = (Count, Utility)> + '_ {
        Count::all().map(|c| (c, self.get(c)))
    }
}

/// Counts left out are seeded at zero.
impl FromIterator<(Count, Utility)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (Count, Utility)>>(iter: I) -> Self {
        let mut snapshot = Self::default();
        iter.into_iter().for_each(|(c, v)| snapshot.set(c, v));
        snapshot
    }
}

/// Every value each count has taken, starting from its seed.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct History(BTreeMap<Count, Vec<Utility>>);

impl History {
    pub fn seeded(counts: &[Count], seed: &Snapshot) -> Self {
        Self(counts.iter().map(|c| (*c, vec![seed.get(*c)])).collect())
    }
    /// Most recent value of every count.
    pub fn latest(&self) -> Snapshot {
        self.0
            .iter()
            .filter_map(|(c, vs)| vs.last().map(|v| (*c, *v)))
            .collect()
    }
    pub fn push(&mut self, values: impl IntoIterator<Item = (Count, Utility)>) {
        for (count, value) in values {
            self.0.entry(count).or_default().push(value);
        }
    }
    /// Largest change any count saw in the last sweep.
    /// Infinite until a sweep has completed.
    pub fn residual(&self) -> Utility {
        self.0
            .values()
            .map(|vs| match vs.as_slice() {
                [.., prev, last] => (last - prev).abs(),
                _ => Utility::INFINITY,
            })
            .fold(0.0, Utility::max)
    }
    pub fn values(&self, count: Count) -> &[Utility] {
        self.0.get(&count).map(Vec::as_slice).unwrap_or_default()
    }
    pub fn sweeps(&self) -> usize {
        self.0.values().map(Vec::len).max().unwrap_or(1).saturating_sub(1)
    }
}
