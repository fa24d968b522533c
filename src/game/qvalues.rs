use crate::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// Expected batter reward of one pitcher choice, per batter action.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct QValue {
    pub swing: Utility,
    pub take: Utility,
}

impl QValue {
    pub fn get(&self, action: Action) -> Utility {
        match action {
            Action::Swing => self.swing,
            Action::Take => self.take,
        }
    }
}

/// Q-values of every choice offered at one count.
///
/// Rebuilt from scratch each sweep since it reads the successor values of
/// the previous one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QTable(BTreeMap<Choice, QValue>);

impl QTable {
    pub fn build<T>(
        count: Count,
        values: &Snapshot,
        transitions: &T,
        rewards: &Rewards,
        rules: Rules,
    ) -> Result<Self, Error>
    where
        T: TransitionProvider + ?Sized,
    {
        let expected = |choice: Choice, action: Action| -> Result<Utility, Error> {
            Ok(transitions
                .lookup(choice, count, action)?
                .support()
                .map(|(outcome, p)| {
                    p * match count.successor(outcome, rules) {
                        Successor::Terminal(terminal) => rewards.get(terminal),
                        Successor::Continuing(next) => values.get(next),
                    }
                })
                .sum())
        };
        transitions
            .choices(count)
            .into_iter()
            .map(|choice| {
                let swing = expected(choice, Action::Swing)?;
                let take = expected(choice, Action::Take)?;
                Ok((choice, QValue { swing, take }))
            })
            .collect::<Result<BTreeMap<_, _>, Error>>()
            .map(Self)
    }

    pub fn get(&self, choice: Choice) -> Option<QValue> {
        self.0.get(&choice).copied()
    }
    pub fn iter(&self) -> impl Iterator<Item = (Choice, QValue)> + '_ {
        self.0.iter().map(|(c, q)| (*c, *q))
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Choice, QValue)> for QTable {
    fn from_iter<I: IntoIterator<Item = (Choice, QValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
