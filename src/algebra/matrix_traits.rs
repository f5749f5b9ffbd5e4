#![allow(non_snake_case)]

/// Matrices with fixed row and column extents
pub trait ShapedMatrix {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn size(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
}

/// Blockwise matrix concatenation
pub trait BlockConcatenate: Sized {
    /// vertical matrix concatenation with zero padding
    ///
    /// ```text
    /// C = [ A 0 ]
    ///     [ B 0 ]
    /// ```
    ///
    /// The result has `A.nrows() + B.nrows()` rows and
    /// `max(A.ncols(), B.ncols())` columns.  Rows of the narrower
    /// block are padded with trailing zeros.
    fn vcat_padded(A: &Self, B: &Self) -> Self;
}
