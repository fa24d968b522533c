use super::*;
use crate::*;

/// Handle to a decision variable of a [`Program`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Variable(pub(super) usize);

/// Handle to a row of a [`Program`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Constraint(pub(super) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    Geq,
    Leq,
    Eq,
}

#[derive(Debug, Clone)]
pub(super) struct Row {
    pub(super) terms: Vec<(usize, f64)>,
    pub(super) sense: Sense,
    pub(super) rhs: f64,
}

/// A minimization program over variables in `[0, upper]`.
///
/// ```text
/// minimize    Σ cost[j] · x[j]
/// subject to  Σ a[i][j] · x[j]  (≥ | ≤ | =)  b[i]
///             0 ≤ x[j] ≤ upper[j]
/// ```
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub(super) costs: Vec<f64>,
    pub(super) uppers: Vec<Option<f64>>,
    pub(super) rows: Vec<Row>,
}

impl Program {
    /// Adds a variable with objective coefficient `cost`.
    /// `None` leaves it unbounded above.
    pub fn variable(&mut self, cost: f64, upper: Option<f64>) -> Variable {
        self.costs.push(cost);
        self.uppers.push(upper);
        Variable(self.costs.len() - 1)
    }
    pub fn constrain(
        &mut self,
        terms: impl IntoIterator<Item = (Variable, f64)>,
        sense: Sense,
        rhs: f64,
    ) -> Constraint {
        let terms = terms
            .into_iter()
            .map(|(v, a)| (v.0, a))
            .filter(|(_, a)| *a != 0.0)
            .collect();
        self.rows.push(Row { terms, sense, rhs });
        Constraint(self.rows.len() - 1)
    }
    pub fn n_variables(&self) -> usize {
        self.costs.len()
    }
    pub fn n_constraints(&self) -> usize {
        self.rows.len()
    }

    pub fn solve(&self) -> Result<Optimum, Error> {
        Tableau::from(self).optimize(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn single_lower_bound() {
        let mut lp = Program::default();
        let v = lp.variable(1.0, None);
        let row = lp.constrain([(v, 1.0)], Sense::Geq, 0.3);
        let optimum = lp.solve().unwrap();
        assert!(close(optimum.objective(), 0.3));
        assert!(close(optimum.value(v), 0.3));
        assert!(close(optimum.dual(row), 1.0));
    }

    #[test]
    fn textbook_maximization() {
        // max x + y  s.t.  x + 2y ≤ 4,  3x + y ≤ 6
        let mut lp = Program::default();
        let x = lp.variable(-1.0, None);
        let y = lp.variable(-1.0, None);
        let a = lp.constrain([(x, 1.0), (y, 2.0)], Sense::Leq, 4.0);
        let b = lp.constrain([(x, 3.0), (y, 1.0)], Sense::Leq, 6.0);
        let optimum = lp.solve().unwrap();
        assert!(close(optimum.objective(), -2.8));
        assert!(close(optimum.value(x), 1.6));
        assert!(close(optimum.value(y), 1.2));
        assert!(close(optimum.dual(a), -0.4));
        assert!(close(optimum.dual(b), -0.2));
    }

    #[test]
    fn two_by_two_matrix_game() {
        // column player picks the worse of two rows for the row player
        let mut lp = Program::default();
        let v = lp.variable(1.0, None);
        let x1 = lp.variable(0.0, Some(1.0));
        let x2 = lp.variable(0.0, Some(1.0));
        let swing = lp.constrain([(v, 1.0), (x1, -0.5), (x2, -0.1)], Sense::Geq, 0.0);
        let take = lp.constrain([(v, 1.0), (x1, -0.2), (x2, -0.4)], Sense::Geq, 0.0);
        let mass = lp.constrain([(x1, 1.0), (x2, 1.0)], Sense::Eq, 1.0);
        let optimum = lp.solve().unwrap();
        assert!(close(optimum.objective(), 0.3));
        assert!(close(optimum.value(x1), 0.5));
        assert!(close(optimum.value(x2), 0.5));
        assert!(close(optimum.dual(swing), 1.0 / 3.0));
        assert!(close(optimum.dual(take), 2.0 / 3.0));
        assert!(close(optimum.dual(mass), 0.3));
    }

    #[test]
    fn negative_rhs_keeps_dual_orientation() {
        // -x - y = -2 with y ≤ 0.5 forces x = 1.5
        let mut lp = Program::default();
        let x = lp.variable(1.0, None);
        let y = lp.variable(0.0, Some(0.5));
        let row = lp.constrain([(x, -1.0), (y, -1.0)], Sense::Eq, -2.0);
        let optimum = lp.solve().unwrap();
        assert!(close(optimum.value(x), 1.5));
        assert!(close(optimum.value(y), 0.5));
        assert!(close(optimum.dual(row), -1.0));
    }

    #[test]
    fn slack_rows_have_zero_dual() {
        let mut lp = Program::default();
        let x = lp.variable(1.0, None);
        let tight = lp.constrain([(x, 1.0)], Sense::Geq, 2.0);
        let loose = lp.constrain([(x, 1.0)], Sense::Geq, 1.0);
        let optimum = lp.solve().unwrap();
        assert!(close(optimum.value(x), 2.0));
        assert!(close(optimum.dual(tight), 1.0));
        assert!(close(optimum.dual(loose), 0.0));
    }

    #[test]
    fn upper_bounds_can_make_a_program_infeasible() {
        let mut lp = Program::default();
        let x = lp.variable(1.0, Some(1.0));
        lp.constrain([(x, 1.0)], Sense::Geq, 2.0);
        assert_eq!(lp.solve(), Err(Error::Infeasible));
    }

    #[test]
    fn capped_simplex_needs_enough_variables() {
        let mut lp = Program::default();
        let x1 = lp.variable(0.0, Some(0.4));
        let x2 = lp.variable(0.0, Some(0.4));
        lp.constrain([(x1, 1.0), (x2, 1.0)], Sense::Eq, 1.0);
        assert_eq!(lp.solve(), Err(Error::Infeasible));
    }

    #[test]
    fn unbounded_objective() {
        let mut lp = Program::default();
        let x = lp.variable(-1.0, None);
        lp.constrain([(x, 1.0)], Sense::Geq, 1.0);
        assert_eq!(lp.solve(), Err(Error::Unbounded));
    }

    #[test]
    fn redundant_equalities_are_tolerated() {
        let mut lp = Program::default();
        let x = lp.variable(1.0, None);
        let y = lp.variable(2.0, None);
        lp.constrain([(x, 1.0), (y, 1.0)], Sense::Eq, 1.0);
        lp.constrain([(x, 2.0), (y, 2.0)], Sense::Eq, 2.0);
        let optimum = lp.solve().unwrap();
        assert!(close(optimum.objective(), 1.0));
        assert!(close(optimum.value(x), 1.0));
    }
}
