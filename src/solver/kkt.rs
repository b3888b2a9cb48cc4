#![allow(non_snake_case)]

use super::*;
use crate::algebra::*;

/// The linear system defining a Newton step.
#[derive(Debug, Clone, Copy)]
pub enum NewtonSystem<'a, T> {
    /// `H*dx = -g`
    Unconstrained,
    /// ```text
    /// [ H   A' ] [dx ]   [   -g   ]
    /// [ A   0  ] [dnu] = [residual]
    /// ```
    EqualityConstrained { A: &'a Matrix<T>, residual: &'a [T] },
}

/// Newton step for the variables and, with equality
/// constraints, for the equality multipliers.
#[derive(Debug, Clone, PartialEq)]
pub struct NewtonStep<T> {
    pub dx: Vec<T>,
    pub dnu: Vec<T>,
}

/// Dense KKT solver for Newton steps.
#[derive(Debug, Clone)]
pub struct KKTSolver<T> {
    lu: LuSolver<T>,
}

impl<T> KKTSolver<T>
where
    T: FloatT,
{
    pub fn new(pivot_tol: T) -> Self {
        Self {
            lu: LuSolver::new(pivot_tol),
        }
    }

    /// Solve for the Newton step at a point with Hessian `H`
    /// and gradient `g`.  A system that cannot be factored is
    /// reported as [`SolverError::SingularSystem`].
    pub fn solve(
        &mut self,
        H: &Matrix<T>,
        g: &[T],
        system: NewtonSystem<'_, T>,
    ) -> Result<NewtonStep<T>, SolverError> {
        let n = g.len();
        if H.size() != (n, n) {
            return Err(MatrixConcatenationError::IncompatibleDimension.into());
        }

        match system {
            NewtonSystem::Unconstrained => {
                let mut K = H.clone();
                let mut dx = g.to_vec();
                dx.negate();
                self.lu.lusolve_vec(&mut K, &mut dx)?;
                Ok(NewtonStep { dx, dnu: vec![] })
            }

            NewtonSystem::EqualityConstrained { A, residual } => {
                let p = A.nrows();
                if residual.len() != p {
                    return Err(MatrixConcatenationError::IncompatibleDimension.into());
                }

                let At = A.transpose();
                let Z = Matrix::zeros((p, p));
                let mut K = Matrix::hvcat(&[&[H, &At], &[A, &Z]])?;

                let mut rhs = Vec::with_capacity(n + p);
                rhs.extend(g.iter().map(|&gi| -gi));
                rhs.extend_from_slice(residual);
                self.lu.lusolve_vec(&mut K, &mut rhs)?;

                let dnu = rhs.split_off(n);
                Ok(NewtonStep { dx: rhs, dnu })
            }
        }
    }
}
