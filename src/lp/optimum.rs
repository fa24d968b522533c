use super::*;

/// Primal and dual solution of a [`Program`].
///
/// Duals are sensitivities of the optimal objective to each row's
/// right-hand side. In a minimization a binding `≥` row has a non-negative
/// dual, a binding `≤` row a non-positive one, and a slack row zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Optimum {
    objective: f64,
    primal: Vec<f64>,
    dual: Vec<f64>,
}

impl Optimum {
    pub fn objective(&self) -> f64 {
        self.objective
    }
    pub fn value(&self, variable: Variable) -> f64 {
        self.primal[variable.0]
    }
    pub fn dual(&self, constraint: Constraint) -> f64 {
        self.dual[constraint.0]
    }
}

impl From<(f64, Vec<f64>, Vec<f64>)> for Optimum {
    fn from((objective, primal, dual): (f64, Vec<f64>, Vec<f64>)) -> Self {
        Self {
            objective,
            primal,
            dual,
        }
    }
}
