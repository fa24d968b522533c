use crate::*;

/// Source of transition probabilities for the solver.
///
/// Implementors decide which (pitch, zone) choices exist at a count and
/// what each batter action leads to. [`Transitions`] is the in-memory table;
/// anything that can answer these two questions can stand in for it.
pub trait TransitionProvider: Sync {
    /// Choices the pitcher may make at this count, in a stable order.
    fn choices(&self, count: Count) -> Vec<Choice>;
    /// Raw outcome distribution for one (choice, count, action).
    fn distribution(&self, choice: Choice, count: Count, action: Action) -> Option<&Distribution>;

    /// Like [`distribution`](Self::distribution), but a gap is an error.
    fn lookup(&self, choice: Choice, count: Count, action: Action) -> Result<&Distribution, Error> {
        self.distribution(choice, count, action)
            .ok_or(Error::MissingTransition {
                choice,
                count,
                action,
            })
    }

    /// Checks every distribution reachable from the given counts.
    ///
    /// Each count needs at least one choice, each choice both actions,
    /// and each distribution must pass [`Distribution::validate`].
    fn validate(&self, counts: &[Count], rules: Rules) -> Result<(), Error> {
        for &count in counts {
            let choices = self.choices(count);
            if choices.is_empty() {
                return Err(Error::NoChoices(count));
            }
            for choice in choices {
                for action in Action::all() {
                    self.lookup(choice, count, action)?
                        .validate(rules, choice, count, action)?;
                }
            }
        }
        Ok(())
    }
}
