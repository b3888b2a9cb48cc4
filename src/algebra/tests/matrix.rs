#![allow(non_snake_case)]
use crate::algebra::*;

fn test_matrix_3x2() -> Matrix<f64> {
    Matrix::from(&[
        [1., 4.], //
        [2., 5.], //
        [3., 6.], //
    ])
}

#[test]
fn test_column_major_layout() {
    let A = test_matrix_3x2();
    assert_eq!(A.size(), (3, 2));
    assert!(!A.is_square());
    assert_eq!(A.data, vec![1., 2., 3., 4., 5., 6.]);
    assert_eq!(A.col_slice(1), &[4., 5., 6.]);
    assert_eq!(A[(2, 0)], 3.);
}

#[test]
fn test_transpose() {
    let A = test_matrix_3x2();
    let At = A.transpose();
    assert_eq!(At.size(), (2, 3));
    assert_eq!(At, Matrix::from(&[[1., 2., 3.], [4., 5., 6.]]));
}

#[test]
fn test_identity() {
    let I = Matrix::<f64>::identity(3);
    assert_eq!(I[(1, 1)], 1.);
    assert_eq!(I[(0, 1)], 0.);
    assert_eq!(I.data.sum(), 3.);
}

#[test]
fn test_gemv() {
    let A = test_matrix_3x2();
    let x = [1., -1.];
    let mut y = [1., 1., 1.];
    A.gemv(&mut y, &x, 2., 1.);
    assert_eq!(y, [-5., -5., -5.]);

    let At = A.transpose();
    let mut z = [0., 0.];
    At.gemv(&mut z, &[1., 1., 1.], 1., 0.);
    assert_eq!(z, [6., 15.]);
}

#[test]
fn test_ger() {
    let mut M = Matrix::<f64>::zeros((2, 2));
    M.ger(2., &[1., 2.], &[3., 4.]);
    assert_eq!(M, Matrix::from(&[[6., 8.], [12., 16.]]));
}

#[test]
fn test_quad_form() {
    let M = Matrix::from(&[
        [2., 1.], //
        [1., 3.], //
    ]);
    let x = [1., 2.];
    let y = [3., -1.];
    // y'Mx = [3 -1] * [4; 7] = 5
    assert_eq!(M.quad_form(&y, &x), 5.);
}

#[test]
fn test_matrix_axpby_scale() {
    let mut M = Matrix::<f64>::identity(2);
    let X = Matrix::from(&[[1., 2.], [3., 4.]]);
    M.axpby(2., &X, -1.);
    assert_eq!(M, Matrix::from(&[[1., 4.], [6., 7.]]));
    M.scale(0.5);
    assert_eq!(M, Matrix::from(&[[0.5, 2.], [3., 3.5]]));
    M.negate();
    assert_eq!(M[(1, 1)], -3.5);
    assert!(M.is_finite());
}
