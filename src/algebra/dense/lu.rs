#![allow(non_snake_case)]
use crate::algebra::*;

/// Solve AX = B.  A is overwritten with its LU factors, and B will
/// be overwritten with the solution X.
pub trait SolveLU<T> {
    fn lusolve(&mut self, A: &mut Matrix<T>, B: &mut Matrix<T>)
        -> Result<(), DenseFactorizationError>;
}

/// Dense LU solver with partial (row) pivoting.
///
/// A pivot whose magnitude is at or below `pivot_tol` is treated
/// as a structural zero and the system is reported as singular.
#[derive(Debug, Clone)]
pub struct LuSolver<T> {
    // row permutation, one entry per factored column
    ipiv: Vec<usize>,
    pivot_tol: T,
}

impl<T> LuSolver<T>
where
    T: FloatT,
{
    pub fn new(pivot_tol: T) -> Self {
        let ipiv = vec![];
        Self { ipiv, pivot_tol }
    }

    /// Solve `A*x = b` for a single right hand side, overwriting `b`.
    pub fn lusolve_vec(
        &mut self,
        A: &mut Matrix<T>,
        b: &mut [T],
    ) -> Result<(), DenseFactorizationError> {
        let mut B = Matrix::new((b.len(), 1), b.to_vec());
        self.lusolve(A, &mut B)?;
        b.copy_from(&B.data);
        Ok(())
    }

    fn factor(&mut self, A: &mut Matrix<T>) -> Result<(), DenseFactorizationError> {
        let n = A.nrows();
        self.ipiv.resize(n, 0);

        for k in 0..n {
            // largest remaining entry in column k
            let mut p = k;
            let mut pmax = T::abs(A[(k, k)]);
            for r in (k + 1)..n {
                let v = T::abs(A[(r, k)]);
                if v > pmax {
                    pmax = v;
                    p = r;
                }
            }
            self.ipiv[k] = p;

            if !pmax.is_finite() || pmax <= self.pivot_tol {
                return Err(DenseFactorizationError::Singular(k));
            }

            if p != k {
                for c in 0..n {
                    let (i, j) = (A.index_linear((k, c)), A.index_linear((p, c)));
                    A.data.swap(i, j);
                }
            }

            let pivot = A[(k, k)];
            for r in (k + 1)..n {
                A[(r, k)] /= pivot;
            }
            for c in (k + 1)..n {
                let akc = A[(k, c)];
                if akc == T::zero() {
                    continue;
                }
                for r in (k + 1)..n {
                    let lrk = A[(r, k)];
                    A[(r, c)] -= lrk * akc;
                }
            }
        }
        Ok(())
    }

    fn substitute(&self, LU: &Matrix<T>, B: &mut Matrix<T>) {
        let n = LU.nrows();

        for col in 0..B.ncols() {
            let x = B.col_slice_mut(col);

            for (k, &p) in self.ipiv.iter().enumerate() {
                x.swap(k, p);
            }

            // forward solve with unit lower triangle
            for c in 0..n {
                let xc = x[c];
                for r in (c + 1)..n {
                    x[r] -= LU[(r, c)] * xc;
                }
            }

            // backward solve with upper triangle
            for c in (0..n).rev() {
                x[c] /= LU[(c, c)];
                let xc = x[c];
                for r in 0..c {
                    x[r] -= LU[(r, c)] * xc;
                }
            }
        }
    }
}

impl<T> SolveLU<T> for LuSolver<T>
where
    T: FloatT,
{
    fn lusolve(
        &mut self,
        A: &mut Matrix<T>,
        B: &mut Matrix<T>,
    ) -> Result<(), DenseFactorizationError> {
        if !A.is_square() || A.ncols() != B.nrows() {
            return Err(DenseFactorizationError::IncompatibleDimension);
        }

        self.factor(A)?;
        self.substitute(A, B);

        if !B.is_finite() {
            return Err(DenseFactorizationError::NonFinite);
        }
        Ok(())
    }
}

macro_rules! generate_test_lu {
    ($fxx:ty, $test_name:ident) => {
        #[test]
        fn $test_name() {
            let mut A = Matrix::<$fxx>::from(&[
                [3., 2., 4.], //
                [2., 0., 2.], //
                [4., 2., 3.], //
            ]);

            let mut B = Matrix::<$fxx>::from(&[
                [-5., 13.], //
                [-2., 4.],  //
                [-2., 9.],  //
            ]);

            let X = Matrix::<$fxx>::from(&[
                [1., -1.], //
                [0., 2.],  //
                [-2., 3.], //
            ]);

            let mut lu = LuSolver::new(0.);
            lu.lusolve(&mut A, &mut B).unwrap();
            assert!(B.data.norm_inf_diff(&X.data) < 1e-5);
        }
    };
}

generate_test_lu!(f32, test_lu_f32);
generate_test_lu!(f64, test_lu_f64);

#[test]
fn test_lu_needs_pivoting() {
    // zero in the leading position
    let mut A = Matrix::from(&[
        [0., 1.], //
        [1., 0.], //
    ]);
    let mut b = [2., 3.];
    LuSolver::new(0.).lusolve_vec(&mut A, &mut b).unwrap();
    assert_eq!(b, [3., 2.]);
}

#[test]
fn test_lu_singular() {
    let mut A = Matrix::from(&[
        [1., 2.], //
        [2., 4.], //
    ]);
    let mut b = [1., 1.];
    let err = LuSolver::new(0.).lusolve_vec(&mut A, &mut b).unwrap_err();
    assert_eq!(err, DenseFactorizationError::Singular(1));

    let mut Z = Matrix::<f64>::zeros((3, 3));
    let mut b = [1., 1., 1.];
    let err = LuSolver::new(0.).lusolve_vec(&mut Z, &mut b).unwrap_err();
    assert_eq!(err, DenseFactorizationError::Singular(0));
}

#[test]
fn test_lu_bad_dims() {
    let mut A = Matrix::<f64>::zeros((2, 3));
    let mut b = [1., 1.];
    let err = LuSolver::new(0.).lusolve_vec(&mut A, &mut b).unwrap_err();
    assert_eq!(err, DenseFactorizationError::IncompatibleDimension);
}
