use crate::*;

/// The stage game at one count as a linear program.
///
/// ```text
/// minimize    v
/// subject to  v ≥ Σ x[c] · Q[c].swing      (swing)
///             v ≥ Σ x[c] · Q[c].take       (take)
///             Σ x[c] = 1
///             0 ≤ x[c] ≤ max_usage,  v ≥ 0
/// ```
///
/// The pitcher picks `x` to hold down the batter's better action. Duals of
/// the swing and take rows are the batter's mix.
pub struct Minimax<'a> {
    count: Count,
    qtable: &'a QTable,
    max_usage: Probability,
}

impl<'a> Minimax<'a> {
    pub fn new(count: Count, qtable: &'a QTable, max_usage: Probability) -> Self {
        Self {
            count,
            qtable,
            max_usage,
        }
    }

    pub fn solve(&self) -> Result<Equilibrium, Error> {
        if self.qtable.is_empty() {
            return Err(Error::NoChoices(self.count));
        }
        let upper = (self.max_usage < 1.0).then_some(self.max_usage);
        let mut lp = Program::default();
        let v = lp.variable(1.0, None);
        let xs = self
            .qtable
            .iter()
            .map(|(choice, q)| (choice, q, lp.variable(0.0, upper)))
            .collect::<Vec<_>>();
        let row = |action: Action| {
            std::iter::once((v, 1.0)).chain(xs.iter().map(move |(_, q, x)| (*x, -q.get(action))))
        };
        let swing = lp.constrain(row(Action::Swing), Sense::Geq, 0.0);
        let take = lp.constrain(row(Action::Take), Sense::Geq, 0.0);
        lp.constrain(xs.iter().map(|(_, _, x)| (*x, 1.0)), Sense::Eq, 1.0);
        let optimum = lp.solve().map_err(|cause| Error::Unsolvable {
            count: self.count,
            cause: Box::new(cause),
        })?;
        let policy = xs
            .iter()
            .map(|(choice, _, x)| (*choice, optimum.value(*x)))
            .collect::<Policy>()
            .normalized();
        let response = Response::weighted(optimum.dual(swing), optimum.dual(take))
            .unwrap_or_else(|| {
                log::warn!("{:<32}{:<32}", "degenerate batter response at", self.count);
                Response::default()
            });
        log::trace!(
            "{:<32}{:<8}{:<16.6}{}",
            "solved count",
            self.count,
            optimum.objective(),
            response
        );
        let value = optimum.objective();
        Ok(Equilibrium {
            value: if value > 0.0 { value } else { 0.0 },
            policy,
            response,
        })
    }
}
