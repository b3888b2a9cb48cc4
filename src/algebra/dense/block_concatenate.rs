#![allow(non_snake_case)]

use crate::algebra::{
    hvcat_dim_check, BlockConcatenate, FloatT, Matrix, MatrixConcatenationError, ShapedMatrix,
};

impl<T> BlockConcatenate for Matrix<T>
where
    T: FloatT,
{
    fn hcat(A: &Self, B: &Self) -> Self {
        //first check for compatible row dimensions
        assert_eq!(A.m, B.m);

        //dimensions for C = [A B];
        let m = A.m;
        let n = A.n + B.n;
        let mut data = A.data.clone();
        data.extend(&B.data);
        Self { m, n, data }
    }

    fn vcat(A: &Self, B: &Self) -> Self {
        //first check for compatible column dimensions
        assert_eq!(A.n, B.n);

        //dimensions for C = [A; B];
        let m = A.m + B.m;
        let n = A.n;
        let mut data = Vec::with_capacity(m * n);

        for col in 0..A.ncols() {
            data.extend(A.col_slice(col));
            data.extend(B.col_slice(col));
        }
        Self { m, n, data }
    }

    fn hvcat(mats: &[&[&Self]]) -> Result<Self, MatrixConcatenationError> {
        // check for consistent block dimensions
        hvcat_dim_check(mats)?;

        // dimensions are consistent, so count total rows
        // and columns by counting along the border
        let nrows = mats.iter().map(|blockrow| blockrow[0].nrows()).sum();
        let ncols = mats[0].iter().map(|topblock| topblock.ncols()).sum();

        let mut data = Vec::with_capacity(nrows * ncols);

        // every matrix in a block column has the same number
        // of columns, so walk the output one column at a time
        for blockcol in 0..mats[0].len() {
            for col in 0..mats[0][blockcol].ncols() {
                for blockrow in mats {
                    data.extend(blockrow[blockcol].col_slice(col));
                }
            }
        }
        Ok(Self::new((nrows, ncols), data))
    }
}

#[test]
fn test_dense_concatenate() {
    let A = Matrix::from(&[
        [1., 3.], //
        [2., 4.], //
    ]);
    let B = Matrix::from(&[
        [5., 7.], //
        [6., 8.], //
    ]);

    let C = Matrix::hcat(&A, &B);

    let Ctest = Matrix::from(&[
        [1., 3., 5., 7.], //
        [2., 4., 6., 8.], //
    ]);

    assert_eq!(C, Ctest);

    let C = Matrix::vcat(&A, &B);

    let Ctest = Matrix::from(&[
        [1., 3.], //
        [2., 4.], //
        [5., 7.], //
        [6., 8.], //
    ]);

    assert_eq!(C, Ctest);
}

#[test]
fn test_dense_hvcat() {
    let H = Matrix::from(&[
        [2., 0.], //
        [0., 2.], //
    ]);
    let A = Matrix::from(&[[1., 1.]]);
    let At = A.transpose();
    let Z = Matrix::zeros((1, 1));

    let K = Matrix::hvcat(&[&[&H, &At], &[&A, &Z]]).unwrap();

    let Ktest = Matrix::from(&[
        [2., 0., 1.], //
        [0., 2., 1.], //
        [1., 1., 0.], //
    ]);
    assert_eq!(K, Ktest);

    // mismatched block rows
    let bad = Matrix::hvcat(&[&[&H, &A], &[&A, &Z]]);
    assert!(bad.is_err());
}
