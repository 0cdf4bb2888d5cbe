use crate::{dot, LinalgError, Result};
use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt};

/// Dense, row-major matrix of `f64`.
///
/// Element `(row, col)` is stored at `row * cols + col` and the backing storage
/// always holds exactly `rows * cols` values.
///
/// Accessors come in two flavours. [`Matrix::get_element`] is a forgiving read
/// that returns `0.0` outside the matrix. Everything that writes, or combines
/// two matrices, validates its inputs and returns a [`LinalgError`] without
/// touching either operand.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MatrixData")]
pub struct Matrix {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) data: Vec<f64>,
}

#[derive(Deserialize)]
struct MatrixData {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl TryFrom<MatrixData> for Matrix {
    type Error = LinalgError;

    fn try_from(raw: MatrixData) -> Result<Self> {
        Matrix::from_vec(raw.rows, raw.cols, raw.data)
    }
}

impl Matrix {
    #[inline]
    pub const fn new() -> Self {
        Matrix {
            rows: 0,
            cols: 0,
            data: Vec::new(),
        }
    }

    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    pub fn zero(rows: usize, cols: usize) -> Self {
        let len = match element_count(rows, cols) {
            Ok(len) => len,
            Err(err) => panic!("{}", err),
        };
        Matrix {
            rows,
            cols,
            data: vec![0.0; len],
        }
    }

    pub fn identity(dimension: usize) -> Self {
        let mut mat = Matrix::zero(dimension, dimension);
        for i in 0..dimension {
            mat.data[i * dimension + i] = 1.0;
        }
        mat
    }

    /// Builds a `rows x cols` matrix from row-major `data`.
    ///
    /// The values are copied, so the matrix never shares storage with the
    /// caller. `data` must hold exactly `rows * cols` values.
    pub fn from_data(rows: usize, cols: usize, data: &[f64]) -> Result<Self> {
        Self::from_vec(rows, cols, data.to_vec())
    }

    fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        let expected = element_count(rows, cols)?;
        if data.len() != expected {
            log::debug!(
                "cannot build {}x{} matrix from {} values",
                rows,
                cols,
                data.len()
            );
            return Err(LinalgError::LengthMismatch {
                expected,
                found: data.len(),
            });
        }
        Ok(Matrix { rows, cols, data })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of elements, `rows * cols`.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Replaces the storage with a zero-filled `rows x cols` block. Previous
    /// contents are dropped.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        *self = Matrix::zero(rows, cols);
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    fn transpose(&self) -> Matrix {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                data.push(self.data[row * self.cols + col]);
            }
        }
        Matrix {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }

    /// Returns the element at `(row, col)`, or `0.0` if either index is
    /// outside the matrix.
    #[inline]
    pub fn get_element(&self, row: usize, col: usize) -> f64 {
        self.offset(row, col).map_or(0.0, |i| self.data[i])
    }

    /// Writes `value` at `(row, col)`. Out of range indices leave the matrix
    /// unchanged and return [`LinalgError::OutOfBounds`].
    pub fn set_element(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        match self.offset(row, col) {
            Some(i) => {
                self.data[i] = value;
                Ok(())
            }
            None => {
                log::debug!(
                    "set_element: ({}, {}) outside {}x{} matrix",
                    row,
                    col,
                    self.rows,
                    self.cols
                );
                Err(self.out_of_bounds(row, col))
            }
        }
    }

    fn out_of_bounds(&self, row: usize, col: usize) -> LinalgError {
        LinalgError::OutOfBounds {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Overwrites a square matrix with the identity. Non-square matrices are
    /// left as they are.
    pub fn set_to_identity(&mut self) {
        if !self.is_square() {
            log::debug!(
                "set_to_identity: {}x{} matrix is not square",
                self.rows,
                self.cols
            );
            return;
        }
        let n = self.cols;
        for (i, v) in self.data.iter_mut().enumerate() {
            *v = if i / n == i % n { 1.0 } else { 0.0 };
        }
    }

    /// Approximate equality by root-mean-square difference.
    ///
    /// Returns `false` for different shapes. Otherwise returns whether
    /// `sqrt(sum((a - b)^2) / (len - 1))` is strictly below `tolerance`.
    ///
    /// The divisor is one less than the element count. A 1x1 comparison
    /// divides by zero and is therefore always `false`, and a 0x0 comparison
    /// is `true` for any positive tolerance.
    pub fn approx_eq(&self, other: &Matrix, tolerance: f64) -> bool {
        if self.rows != other.rows || self.cols != other.cols {
            return false;
        }
        let sum_sq = self
            .data
            .iter()
            .zip(other.data.iter())
            .fold(0.0, |acc, (&lhs, &rhs)| acc + (lhs - rhs) * (lhs - rhs));
        let rms = (sum_sq / (self.data.len() as f64 - 1.0)).sqrt();
        rms < tolerance
    }

    /// Copy of this matrix with one row and one column removed. The remaining
    /// rows and columns keep their relative order.
    pub fn sub_matrix(&self, row_to_remove: usize, col_to_remove: usize) -> Result<Matrix> {
        if row_to_remove >= self.rows || col_to_remove >= self.cols {
            log::debug!(
                "sub_matrix: cannot remove ({}, {}) from {}x{} matrix",
                row_to_remove,
                col_to_remove,
                self.rows,
                self.cols
            );
            return Err(self.out_of_bounds(row_to_remove, col_to_remove));
        }

        let rows = self.rows - 1;
        let cols = self.cols - 1;
        let mut data = Vec::with_capacity(rows * cols);
        for (r, row) in self.data.chunks_exact(self.cols).enumerate() {
            if r == row_to_remove {
                continue;
            }
            for (c, &value) in row.iter().enumerate() {
                if c != col_to_remove {
                    data.push(value);
                }
            }
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Determinant by cofactor expansion along the first row.
    ///
    /// This is O(n!) and only meant for small matrices. A 0x0 matrix has
    /// determinant `1.0` and a 1x1 matrix its single element.
    pub fn determinant(&self) -> Result<f64> {
        if !self.is_square() {
            log::debug!(
                "determinant: {}x{} matrix is not square",
                self.rows,
                self.cols
            );
            return Err(LinalgError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }

        log::trace!("determinant: expanding {}x{}", self.rows, self.cols);
        let det = match self.rows {
            0 => 1.0,
            1 => self.data[0],
            2 => self.data[0] * self.data[3] - self.data[1] * self.data[2],
            n => {
                let mut sum = 0.0;
                for i in 0..n {
                    let minor = self.sub_matrix(0, i)?;
                    let sign = i32::pow(-1, i as u32) as f64;
                    sum += sign * self.data[i] * minor.determinant()?;
                }
                sum
            }
        };
        Ok(det)
    }

    fn check_same_shape(&self, other: &Matrix) -> Result<()> {
        if self.rows == other.rows && self.cols == other.cols {
            Ok(())
        } else {
            log::debug!(
                "elementwise op on {}x{} and {}x{} matrices",
                self.rows,
                self.cols,
                other.rows,
                other.cols
            );
            Err(LinalgError::DimensionMismatch {
                left: (self.rows, self.cols),
                right: (other.rows, other.cols),
            })
        }
    }

    fn zip_map<F>(&self, other: &Matrix, op: F) -> Result<Matrix>
    where
        F: Fn(f64, f64) -> f64,
    {
        self.check_same_shape(other)?;
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&lhs, &rhs)| op(lhs, rhs))
            .collect();
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// Elementwise sum. Both matrices must have the same shape.
    pub fn sum(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_map(other, |lhs, rhs| lhs + rhs)
    }

    /// Elementwise difference `self - other`. Both matrices must have the
    /// same shape.
    pub fn subtract(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_map(other, |lhs, rhs| lhs - rhs)
    }

    /// Elementwise product. Both matrices must have the same shape.
    pub fn hadamard_product(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_map(other, |lhs, rhs| lhs * rhs)
    }

    /// Matrix product `self * other`, requiring `self.cols() == other.rows()`.
    /// The result is `self.rows() x other.cols()`.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            log::debug!(
                "multiply: {}x{} by {}x{} is undefined",
                self.rows,
                self.cols,
                other.rows,
                other.cols
            );
            return Err(LinalgError::DimensionMismatch {
                left: (self.rows, self.cols),
                right: (other.rows, other.cols),
            });
        }

        let len = element_count(self.rows, other.cols)?;
        let rhs_transpose = other.transpose();
        let mut data = Vec::with_capacity(len);
        for m in 0..self.rows {
            for n in 0..other.cols {
                data.push(dot(self.row(m), rhs_transpose.row(n)));
            }
        }
        Ok(Matrix {
            rows: self.rows,
            cols: other.cols,
            data,
        })
    }

    /// Writes the [`Display`](fmt::Display) rendering to stdout.
    pub fn print(&self) {
        print!("{}", self);
    }
}

fn element_count(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols).ok_or_else(|| {
        log::debug!("{}x{} matrix overflows usize", rows, cols);
        LinalgError::SizeOverflow { rows, cols }
    })
}

/// One bracketed, comma separated line per row. Meant for debugging only.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            f.write_str("[")?;
            for (c, value) in self.row(r).iter().enumerate() {
                if c != 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", value)?;
            }
            f.write_str("]\n")?;
        }
        Ok(())
    }
}
