use crate::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// A [`Resolution`] for every count of a solved game.
///
/// A count whose strategies loop back to it with certainty never ends the
/// at-bat. It stays in the map without a resolution and serializes as
/// `null`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Absorption(BTreeMap<Count, Option<Resolution>>);

impl Absorption {
    pub fn get(&self, count: Count) -> Option<&Resolution> {
        self.0.get(&count).and_then(Option::as_ref)
    }
    /// Resolved counts only.
    pub fn iter(&self) -> impl Iterator<Item = (Count, &Resolution)> + '_ {
        self.0
            .iter()
            .filter_map(|(c, r)| r.as_ref().map(|r| (*c, r)))
    }
    /// Counts the at-bat can get stuck in forever.
    pub fn unresolved(&self) -> impl Iterator<Item = Count> + '_ {
        self.0
            .iter()
            .filter(|(_, r)| r.is_none())
            .map(|(c, _)| *c)
    }
    pub fn is_resolved(&self, count: Count) -> bool {
        self.get(count).is_some()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Count, Option<Resolution>)> for Absorption {
    fn from_iter<I: IntoIterator<Item = (Count, Option<Resolution>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromIterator<(Count, Resolution)> for Absorption {
    fn from_iter<I: IntoIterator<Item = (Count, Resolution)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(c, r)| (c, Some(r))).collect())
    }
}
