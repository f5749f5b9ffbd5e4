#![allow(non_snake_case)]

use crate::algebra::{BlockConcatenate, FloatT, Matrix, ShapedMatrix};

impl<T> BlockConcatenate for Matrix<T>
where
    T: FloatT,
{
    fn vcat_padded(A: &Self, B: &Self) -> Self {
        //dimensions for C = [A; B], padded to the widest block
        let m = A.nrows() + B.nrows(); //rows C
        let n = usize::max(A.ncols(), B.ncols()); //cols C
        let mut C = Self::zeros((m, n));

        for (offset, block) in [(0, A), (A.nrows(), B)] {
            for row in 0..block.nrows() {
                let src = block.row_slice(row);
                C.row_slice_mut(offset + row)[..src.len()].copy_from_slice(src);
            }
        }
        C
    }
}

#[test]
fn test_dense_vcat_padded() {
    let A = Matrix::from(&[
        [1., 2.], //
        [3., 4.], //
    ]);
    let B = Matrix::from(&[
        [5., 6., 7.], //
    ]);

    let C = Matrix::vcat_padded(&A, &B);

    let Ctest = Matrix::from(&[
        [1., 2., 0.], //
        [3., 4., 0.], //
        [5., 6., 7.], //
    ]);

    assert_eq!(C, Ctest);

    // an empty block contributes no rows
    let E = Matrix::<f64>::zeros((0, 0));
    assert_eq!(Matrix::vcat_padded(&E, &A), A);
    assert_eq!(Matrix::vcat_padded(&A, &E), A);
    assert_eq!(Matrix::vcat_padded(&E, &E).size(), (0, 0));
}
