/*++

Licensed under the Apache-2.0 license.

File Name:

    matrix.rs

Abstract:

    File contains the deterministic 4x4 integer matrix fixture.

--*/

use zerocopy::{AsBytes, FromBytes};

/// Number of rows
pub const NROWS: usize = 4;

/// Number of columns
pub const NCOLS: usize = NROWS;

/// Number of elements in a matrix
pub const MATRIX_LEN: usize = NROWS * NCOLS;

/// Size of a matrix in bytes
pub const MATRIX_SIZE: usize = MATRIX_LEN * core::mem::size_of::<i32>();

/// Row-major 4x4 grid of 32-bit signed integers
#[repr(transparent)]
#[derive(AsBytes, FromBytes, Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Matrix(pub [i32; MATRIX_LEN]);

impl Matrix {
    /// Matrix with every element set to zero
    pub const fn zeroed() -> Self {
        Self([0; MATRIX_LEN])
    }

    /// Element at `row`, `col`
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> i32 {
        self.0[NROWS * row + col]
    }

    /// Set the element at `row`, `col`
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, val: i32) {
        self.0[NROWS * row + col] = val;
    }

    /// Row `row` as a slice
    pub fn row(&self, row: usize) -> &[i32] {
        &self.0[NROWS * row..NROWS * row + NCOLS]
    }

    /// Overwrite every element with the fixture pattern
    pub fn fill(&mut self) {
        for i in 0..NROWS {
            for j in 0..NCOLS {
                self.set(i, j, fill(i, j));
            }
        }
    }

    /// Reset every element to zero
    pub fn clear(&mut self) {
        self.0.fill(0);
    }

    /// Accumulate `a * b` into `self` using the textbook triple loop.
    ///
    /// `self` is not cleared first. Arithmetic wraps on overflow.
    pub fn multiply_accumulate(&mut self, a: &Matrix, b: &Matrix) {
        for i in 0..NROWS {
            for j in 0..NCOLS {
                for k in 0..NCOLS {
                    let acc = self
                        .get(i, j)
                        .wrapping_add(a.get(i, k).wrapping_mul(b.get(k, j)));
                    self.set(i, j, acc);
                }
            }
        }
    }
}

/// Fixture pattern: the row index times the column index
#[inline]
pub fn fill(row: usize, col: usize) -> i32 {
    (row as i32).wrapping_mul(col as i32)
}

/// Return `a * b`
pub fn multiply(a: &Matrix, b: &Matrix) -> Matrix {
    let mut c = Matrix::zeroed();
    c.multiply_accumulate(a, b);
    c
}

/// The three matrices of the self-test
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Fixture {
    pub a: Matrix,
    pub b: Matrix,
    pub c: Matrix,
}

impl Fixture {
    /// Run every phase: fill A, fill B, zero C, multiply.
    pub fn new() -> Self {
        let mut fixture = Self::default();
        fixture.fill_inputs();
        fixture.clear_output();
        fixture.multiply();
        fixture
    }

    /// Fill A then B with the fixture pattern
    pub fn fill_inputs(&mut self) {
        self.a.fill();
        self.b.fill();
    }

    /// Zero C ahead of the product
    pub fn clear_output(&mut self) {
        self.c.clear();
    }

    /// Accumulate `A * B` into C
    pub fn multiply(&mut self) {
        self.c.multiply_accumulate(&self.a, &self.b);
    }

    /// Matrices in checksum order
    pub fn matrices(&self) -> [&Matrix; 3] {
        [&self.a, &self.b, &self.c]
    }
}
