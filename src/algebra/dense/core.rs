use crate::algebra::{DenseFormatError, FloatT, Matrix, ShapedMatrix, Vector};
use std::ops::{Deref, DerefMut, Index, IndexMut};

// ------------------------------------------------
// Vector

impl<T> Vector<T>
where
    T: FloatT,
{
    pub fn zeros(len: usize) -> Self {
        Self {
            data: vec![T::zero(); len],
        }
    }

    pub fn get(&self, i: usize) -> T {
        self.data[i]
    }

    pub fn set(&mut self, i: usize, v: T) {
        self.data[i] = v;
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(data: &[T]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(data: [T; N]) -> Self {
        Self {
            data: Vec::from(data),
        }
    }
}

// a Vector is a fixed length slice: deref to slice but
// never to the underlying Vec, so that it can't be resized
impl<T> Deref for Vector<T> {
    type Target = [T];
    fn deref(&self) -> &[T] {
        &self.data
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

// ------------------------------------------------
// Matrix

impl<T> Matrix<T>
where
    T: FloatT,
{
    pub fn zeros(size: (usize, usize)) -> Self {
        let (m, n) = size;
        let data = vec![T::zero(); m * n];
        Self { m, n, data }
    }

    pub fn identity(n: usize) -> Self {
        let mut mat = Matrix::zeros((n, n));
        for i in 0..n {
            mat[(i, i)] = T::one();
        }
        mat
    }

    /// Create a matrix from data in row-major order.
    pub fn new(size: (usize, usize), data: Vec<T>) -> Result<Self, DenseFormatError> {
        let (m, n) = size;
        if m * n != data.len() {
            return Err(DenseFormatError::IncompatibleDimension {
                m,
                n,
                len: data.len(),
            });
        }
        Ok(Self { m, n, data })
    }

    /// Create a matrix from a sequence of rows of possibly different
    /// lengths.  The column count is the longest row length, and shorter
    /// rows are padded with trailing zeros.
    pub fn from_rows<R>(rows: &[R]) -> Self
    where
        R: AsRef<[T]>,
    {
        let m = rows.len();
        let n = rows.iter().map(|r| r.as_ref().len()).max().unwrap_or(0);
        let mut mat = Self::zeros((m, n));
        for (dst, src) in mat.data.chunks_exact_mut(n.max(1)).zip(rows) {
            let src = src.as_ref();
            dst[..src.len()].copy_from_slice(src);
        }
        mat
    }

    pub fn get(&self, row: usize, col: usize) -> T {
        self[(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, v: T) {
        self[(row, col)] = v;
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        assert!(row < self.m);
        &self.data[(row * self.n)..(row + 1) * self.n]
    }

    pub fn row_slice_mut(&mut self, row: usize) -> &mut [T] {
        assert!(row < self.m);
        &mut self.data[(row * self.n)..(row + 1) * self.n]
    }

    /// Copy of a single row
    pub fn row(&self, row: usize) -> Vector<T> {
        Vector::from(self.row_slice(row))
    }

    /// Copy of a single column
    pub fn col(&self, col: usize) -> Vector<T> {
        assert!(col < self.n);
        (0..self.m)
            .map(|row| self[(row, col)])
            .collect::<Vec<T>>()
            .into()
    }

    /// true if `|M[i,j] - M[j,i]| <= tol` everywhere.  Always
    /// false for a non-square matrix.
    pub fn is_symmetric(&self, tol: T) -> bool {
        if !self.is_square() {
            return false;
        }
        for r in 0..self.m {
            for c in (r + 1)..self.n {
                if T::abs(self[(r, c)] - self[(c, r)]) > tol {
                    return false;
                }
            }
        }
        true
    }

    pub(crate) fn index_linear(&self, idx: (usize, usize)) -> usize {
        assert!(idx.0 < self.m && idx.1 < self.n);
        idx.0 * self.n + idx.1
    }
}

impl<T> ShapedMatrix for Matrix<T> {
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
}

impl<T> Index<(usize, usize)> for Matrix<T>
where
    T: FloatT,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        &self.data[self.index_linear(idx)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T>
where
    T: FloatT,
{
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        let lidx = self.index_linear(idx);
        &mut self.data[lidx]
    }
}

impl<T, const M: usize, const N: usize> From<&[[T; N]; M]> for Matrix<T>
where
    T: FloatT,
{
    fn from(rows: &[[T; N]; M]) -> Self {
        Self::from_rows(rows)
    }
}

impl<T> From<Vec<Vec<T>>> for Matrix<T>
where
    T: FloatT,
{
    fn from(rows: Vec<Vec<T>>) -> Self {
        Self::from_rows(&rows)
    }
}

impl<T> From<Matrix<T>> for Vec<Vec<T>>
where
    T: FloatT,
{
    fn from(mat: Matrix<T>) -> Self {
        if mat.n == 0 {
            return vec![Vec::new(); mat.m];
        }
        mat.data.chunks_exact(mat.n).map(|r| r.to_vec()).collect()
    }
}

impl<T> std::fmt::Display for Matrix<T>
where
    T: FloatT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f)?;
        for i in 0..self.nrows() {
            write!(f, "[ ")?;
            for j in 0..self.ncols() {
                write!(f, " {:?}", self[(i, j)])?;
            }
            writeln!(f, "]")?;
        }
        writeln!(f)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_indexing_matrix() -> Matrix<f64> {
        // [ 1.0  2.0  3.0 ]
        // [ 4.0  5.0  6.0 ]
        Matrix::from(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])
    }

    #[test]
    fn test_matrix_indexing() {
        let matrix = create_indexing_matrix();

        assert_eq!(matrix.size(), (2, 3));
        assert_eq!(matrix[(0, 0)], 1.0);
        assert_eq!(matrix[(0, 2)], 3.0);
        assert_eq!(matrix[(1, 0)], 4.0);
        assert_eq!(matrix.get(1, 2), 6.0);

        // row major storage
        assert_eq!(matrix.index_linear((0, 1)), 1);
        assert_eq!(matrix.index_linear((1, 0)), 3);
        assert_eq!(matrix.data(), &[1., 2., 3., 4., 5., 6.]);
    }

    #[test]
    #[should_panic]
    fn test_matrix_index_out_of_bounds() {
        let matrix = create_indexing_matrix();
        let _ = matrix[(0, 3)];
    }

    #[test]
    fn test_row_col_extraction() {
        let mut matrix = create_indexing_matrix();
        let row = matrix.row(1);
        let col = matrix.col(2);
        assert_eq!(*row, [4., 5., 6.]);
        assert_eq!(*col, [3., 6.]);

        // extracted vectors are copies, not views
        matrix.set(1, 2, -1.);
        assert_eq!(row[2], 6.);
        assert_eq!(col[1], 6.);
    }

    #[test]
    fn test_from_ragged_rows() {
        let rows = vec![vec![1.], vec![2., 3., 4.], vec![]];
        let matrix = Matrix::from(rows);
        assert_eq!(matrix.size(), (3, 3));
        assert_eq!(matrix.row_slice(0), &[1., 0., 0.]);
        assert_eq!(matrix.row_slice(1), &[2., 3., 4.]);
        assert_eq!(matrix.row_slice(2), &[0., 0., 0.]);
    }

    #[test]
    fn test_from_empty_rows() {
        let rows: Vec<Vec<f64>> = vec![vec![], vec![]];
        let matrix = Matrix::from(rows);
        assert_eq!(matrix.size(), (2, 0));
        let rows: Vec<Vec<f64>> = matrix.into();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_new_checks_dimensions() {
        assert!(Matrix::new((2, 2), vec![1., 2., 3., 4.]).is_ok());
        assert_eq!(
            Matrix::new((2, 2), vec![1., 2., 3.]),
            Err(DenseFormatError::IncompatibleDimension { m: 2, n: 2, len: 3 })
        );
    }

    #[test]
    fn test_is_symmetric() {
        let mut matrix = Matrix::from(&[[2., 1.], [1., 3.]]);
        assert!(matrix.is_symmetric(0.));
        matrix[(0, 1)] = 1. + 1e-12;
        assert!(!matrix.is_symmetric(0.));
        assert!(matrix.is_symmetric(1e-10));
        assert!(!create_indexing_matrix().is_symmetric(1.));
    }

    #[test]
    fn test_vector_access() {
        let mut v = Vector::<f64>::zeros(3);
        v.set(1, 2.);
        v[2] = 3.;
        assert_eq!(v.get(1), 2.);
        assert_eq!(v.len(), 3);
        assert_eq!(v.into_vec(), vec![0., 2., 3.]);
    }
}
