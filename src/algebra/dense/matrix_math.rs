#![allow(non_snake_case)]
use crate::algebra::{FloatT, Matrix, MatrixMath, MatrixVectorMultiply, VectorMath};
use itertools::izip;

impl<T: FloatT> MatrixMath for Matrix<T> {
    type T = T;

    //scalar mut operations
    fn scale(&mut self, c: T) {
        self.data.scale(c);
    }

    fn negate(&mut self) {
        self.data.negate();
    }

    fn axpby(&mut self, a: T, X: &Self, b: T) {
        assert_eq!((self.m, self.n), (X.m, X.n));
        self.data.axpby(a, &X.data, b);
    }

    fn ger(&mut self, a: T, x: &[T], y: &[T]) {
        assert_eq!(self.m, x.len());
        assert_eq!(self.n, y.len());
        for (c, &yc) in y.iter().enumerate() {
            let ayc = a * yc;
            for (mrc, &xr) in self.col_slice_mut(c).iter_mut().zip(x) {
                *mrc += ayc * xr;
            }
        }
    }

    fn quad_form(&self, y: &[T], x: &[T]) -> T {
        assert_eq!(self.m, y.len());
        assert_eq!(self.n, x.len());
        let mut out = T::zero();
        for (c, &xc) in x.iter().enumerate() {
            out += xc * self.col_slice(c).dot(y);
        }
        out
    }

    fn is_finite(&self) -> bool {
        self.data.is_finite()
    }
}

impl<T: FloatT> MatrixVectorMultiply for Matrix<T> {
    type T = T;

    // implements y = a*A*x + b*y
    fn gemv(&self, y: &mut [T], x: &[T], a: T, b: T) {
        assert!(self.n == x.len() && self.m == y.len());

        y.scale(b);
        for (c, &xc) in x.iter().enumerate() {
            let axc = a * xc;
            for (yr, &arc) in izip!(y.iter_mut(), self.col_slice(c)) {
                *yr += axc * arc;
            }
        }
    }
}
