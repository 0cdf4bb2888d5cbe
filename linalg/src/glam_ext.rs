//! Conversions between the dynamic [`Matrix`]/[`Vector`] types and glam's
//! fixed-size `f64` types.
//!
//! glam matrices are column-major, so conversions transpose on the way in and
//! out to keep [`Matrix`] row-major.

use crate::{LinalgError, Matrix, Vector};
use glam::{DMat2, DMat3, DMat4, DVec2, DVec3, DVec4};
use std::convert::TryFrom;

macro_rules! impl_mat_conversions {
    ($mat:ty, $n:literal) => {
        impl From<$mat> for Matrix {
            fn from(m: $mat) -> Self {
                Matrix {
                    rows: $n,
                    cols: $n,
                    data: m.transpose().to_cols_array().to_vec(),
                }
            }
        }

        impl TryFrom<&Matrix> for $mat {
            type Error = LinalgError;

            fn try_from(m: &Matrix) -> Result<Self, Self::Error> {
                if m.rows != $n || m.cols != $n {
                    return Err(LinalgError::DimensionMismatch {
                        left: (m.rows, m.cols),
                        right: ($n, $n),
                    });
                }
                Ok(<$mat>::from_cols_slice(&m.data).transpose())
            }
        }
    };
}

macro_rules! impl_vec_conversions {
    ($vec:ty, $n:literal) => {
        impl From<$vec> for Vector {
            fn from(v: $vec) -> Self {
                Vector(v.to_array().to_vec())
            }
        }

        impl TryFrom<&Vector> for $vec {
            type Error = LinalgError;

            fn try_from(v: &Vector) -> Result<Self, Self::Error> {
                if v.dim() != $n {
                    return Err(LinalgError::LengthMismatch {
                        expected: $n,
                        found: v.dim(),
                    });
                }
                Ok(<$vec>::from_slice(&v.0))
            }
        }
    };
}

impl_mat_conversions!(DMat2, 2);
impl_mat_conversions!(DMat3, 3);
impl_mat_conversions!(DMat4, 4);

impl_vec_conversions!(DVec2, 2);
impl_vec_conversions!(DVec3, 3);
impl_vec_conversions!(DVec4, 4);
