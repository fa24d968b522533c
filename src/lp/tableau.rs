use super::*;
use crate::*;

/// Dense simplex tableau in standard equality form.
///
/// Columns are the structural variables, then one slack per `≤` row, one
/// surplus plus one artificial per `≥` row, and one artificial per `=` row.
/// Upper bounds enter as extra `≤` rows after the program's own rows.
/// The last entry of every row is its right-hand side, kept non-negative.
pub(super) struct Tableau {
    cells: Vec<Vec<f64>>,
    basis: Vec<usize>,
    width: usize,
    artificial: Vec<bool>,
    /// Column that started as the unit vector of each row.
    identity: Vec<usize>,
    /// -1 where a row was negated to make its right-hand side non-negative.
    signs: Vec<f64>,
}

impl From<&Program> for Tableau {
    fn from(program: &Program) -> Self {
        let n = program.n_variables();
        let rows = program
            .rows
            .iter()
            .map(|row| {
                let mut dense = vec![0.0; n];
                row.terms.iter().for_each(|(j, a)| dense[*j] += a);
                (dense, row.sense, row.rhs)
            })
            .chain(program.uppers.iter().enumerate().filter_map(|(j, upper)| {
                upper.map(|u| {
                    let mut dense = vec![0.0; n];
                    dense[j] = 1.0;
                    (dense, Sense::Leq, u)
                })
            }))
            .map(|(dense, sense, rhs)| match rhs < 0.0 {
                false => (dense, sense, rhs, 1.0),
                true => (
                    dense.into_iter().map(|a| -a).collect(),
                    match sense {
                        Sense::Geq => Sense::Leq,
                        Sense::Leq => Sense::Geq,
                        Sense::Eq => Sense::Eq,
                    },
                    -rhs,
                    -1.0,
                ),
            })
            .collect::<Vec<_>>();
        let extra = rows
            .iter()
            .map(|(_, sense, _, _)| match sense {
                Sense::Geq => 2,
                Sense::Leq | Sense::Eq => 1,
            })
            .sum::<usize>();
        let m = rows.len();
        let width = n + extra;
        let mut cells = vec![vec![0.0; width + 1]; m];
        let mut artificial = vec![false; width];
        let mut basis = vec![0; m];
        let mut signs = vec![1.0; m];
        let mut next = n;
        for (i, (dense, sense, rhs, sign)) in rows.into_iter().enumerate() {
            cells[i][..n].copy_from_slice(&dense);
            cells[i][width] = rhs;
            signs[i] = sign;
            match sense {
                Sense::Leq => {
                    cells[i][next] = 1.0;
                    basis[i] = next;
                    next += 1;
                }
                Sense::Geq => {
                    cells[i][next] = -1.0;
                    cells[i][next + 1] = 1.0;
                    artificial[next + 1] = true;
                    basis[i] = next + 1;
                    next += 2;
                }
                Sense::Eq => {
                    cells[i][next] = 1.0;
                    artificial[next] = true;
                    basis[i] = next;
                    next += 1;
                }
            }
        }
        Self {
            identity: basis.clone(),
            cells,
            basis,
            width,
            artificial,
            signs,
        }
    }
}

impl Tableau {
    /// Phase one drives the artificials to zero, phase two minimizes the
    /// real objective with artificials barred from re-entering.
    pub(super) fn optimize(mut self, program: &Program) -> Result<Optimum, Error> {
        if self.artificial.iter().any(|a| *a) {
            let costs = self
                .artificial
                .iter()
                .map(|a| if *a { 1.0 } else { 0.0 })
                .collect::<Vec<_>>();
            self.run(&costs, |_| true)?;
            if self.objective(&costs) > SIMPLEX_FEASIBILITY {
                return Err(Error::Infeasible);
            }
            self.evict();
        }
        let mut costs = program.costs.clone();
        costs.resize(self.width, 0.0);
        let artificial = self.artificial.clone();
        self.run(&costs, |j| !artificial[j])?;
        let primal = (0..program.n_variables())
            .map(|j| self.value(j))
            .collect::<Vec<_>>();
        let dual = (0..program.n_constraints())
            .map(|i| -self.signs[i] * self.reduced(&costs, self.identity[i]))
            .collect::<Vec<_>>();
        let objective = primal
            .iter()
            .zip(program.costs.iter())
            .map(|(x, c)| x * c)
            .sum::<f64>();
        Ok(Optimum::from((objective, primal, dual)))
    }

    fn run(&mut self, costs: &[f64], allowed: impl Fn(usize) -> bool) -> Result<(), Error> {
        for _ in 0..SIMPLEX_PIVOTS {
            let Some(c) = self.entering(costs, &allowed) else {
                return Ok(());
            };
            let Some(r) = self.leaving(c) else {
                return Err(Error::Unbounded);
            };
            self.pivot(r, c);
        }
        Err(Error::Stalled)
    }

    /// Bland: lowest-index column with negative reduced cost.
    fn entering(&self, costs: &[f64], allowed: &impl Fn(usize) -> bool) -> Option<usize> {
        (0..self.width)
            .filter(|j| allowed(*j))
            .filter(|j| !self.basis.contains(j))
            .find(|j| self.reduced(costs, *j) < -SIMPLEX_EPSILON)
    }

    /// Minimum ratio, ties to the lowest-index basic column.
    fn leaving(&self, c: usize) -> Option<usize> {
        let ratios = (0..self.cells.len())
            .filter(|i| self.cells[*i][c] > SIMPLEX_EPSILON)
            .map(|i| (i, self.rhs(i) / self.cells[i][c]))
            .collect::<Vec<_>>();
        let least = ratios
            .iter()
            .map(|(_, ratio)| *ratio)
            .fold(f64::INFINITY, f64::min);
        ratios
            .into_iter()
            .filter(|(_, ratio)| *ratio <= least + SIMPLEX_EPSILON)
            .min_by_key(|(i, _)| self.basis[*i])
            .map(|(i, _)| i)
    }

    fn pivot(&mut self, r: usize, c: usize) {
        let p = self.cells[r][c];
        self.cells[r].iter_mut().for_each(|x| *x /= p);
        let ref pivot = self.cells[r].clone();
        for (i, row) in self.cells.iter_mut().enumerate() {
            let f = row[c];
            if i != r && f != 0.0 {
                row.iter_mut().zip(pivot.iter()).for_each(|(x, p)| *x -= f * p);
            }
        }
        self.basis[r] = c;
    }

    /// Swaps artificials left in the basis (at zero) for real columns.
    /// Rows with no real column left are redundant and keep their artificial.
    fn evict(&mut self) {
        for r in 0..self.cells.len() {
            if !self.artificial[self.basis[r]] {
                continue;
            }
            let column = (0..self.width)
                .filter(|j| !self.artificial[*j])
                .filter(|j| self.cells[r][*j].abs() > SIMPLEX_EPSILON)
                .max_by(|a, b| self.cells[r][*a].abs().total_cmp(&self.cells[r][*b].abs()));
            if let Some(c) = column {
                self.cells[r][self.width] = 0.0;
                self.pivot(r, c);
            }
        }
    }

    fn reduced(&self, costs: &[f64], j: usize) -> f64 {
        costs[j]
            - self
                .basis
                .iter()
                .zip(self.cells.iter())
                .map(|(b, row)| costs[*b] * row[j])
                .sum::<f64>()
    }
    fn objective(&self, costs: &[f64]) -> f64 {
        self.basis
            .iter()
            .enumerate()
            .map(|(i, b)| costs[*b] * self.rhs(i))
            .sum()
    }
    fn value(&self, j: usize) -> f64 {
        self.basis
            .iter()
            .position(|b| *b == j)
            .map(|i| self.rhs(i))
            .unwrap_or(0.0)
    }
    fn rhs(&self, i: usize) -> f64 {
        self.cells[i][self.width]
    }
}
