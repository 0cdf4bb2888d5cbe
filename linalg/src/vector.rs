use crate::{dot, LinalgError, Result};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    ops::{Add, Sub},
};

/// Decimal places used by [`Vector::print`].
const PRINT_PRECISION: usize = 2;

/// Dense vector of `f64`. The dimension is the number of elements.
///
/// Unlike [`Matrix`](crate::Matrix), vector operations never return errors
/// unless asked to. Out of range reads give `0.0` and mismatched arithmetic
/// gives an empty vector. Use [`Vector::checked_add`] and
/// [`Vector::checked_subtract`] to get a [`LinalgError`] instead.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector(pub(crate) Vec<f64>);

impl Vector {
    #[inline]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn zero(dimension: usize) -> Self {
        Self(vec![0.0; dimension])
    }

    pub fn from_slice(data: &[f64]) -> Self {
        Self(data.to_vec())
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Replaces the contents with `dimension` zeros.
    pub fn set_dim(&mut self, dimension: usize) {
        self.0 = vec![0.0; dimension];
    }

    /// Replaces elements and dimension in one step.
    ///
    /// Takes ownership of `data` without copying. Since the caller hands the
    /// buffer over, nothing else can mutate it afterwards.
    pub fn set_data(&mut self, data: Vec<f64>) {
        self.0 = data;
    }

    /// Returns the element at `index`, or `0.0` past the end.
    #[inline]
    pub fn get_element(&self, index: usize) -> f64 {
        self.0.get(index).copied().unwrap_or(0.0)
    }

    pub fn euclidean_norm(&self) -> f64 {
        dot(&self.0, &self.0).sqrt()
    }

    /// Unit length copy of this vector. A zero vector yields an empty vector.
    pub fn normalized(&self) -> Vector {
        let norm = self.euclidean_norm();
        if norm == 0.0 {
            log::debug!("normalized: zero norm, returning empty vector");
            return Vector::new();
        }
        Self(self.0.iter().map(|v| v / norm).collect())
    }

    /// Scales this vector to unit length in place. A zero vector is left
    /// unchanged, which differs from [`Vector::normalized`].
    pub fn normalize(&mut self) {
        let norm = self.euclidean_norm();
        if norm == 0.0 {
            log::debug!("normalize: zero norm, leaving vector unchanged");
            return;
        }
        for v in self.0.iter_mut() {
            *v /= norm;
        }
    }

    fn zip_map<F>(&self, rhs: &Vector, op: F) -> Result<Vector>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.dim() != rhs.dim() {
            log::debug!(
                "elementwise op on vectors of dimension {} and {}",
                self.dim(),
                rhs.dim()
            );
            return Err(LinalgError::LengthMismatch {
                expected: self.dim(),
                found: rhs.dim(),
            });
        }
        Ok(Self(
            self.0
                .iter()
                .zip(rhs.0.iter())
                .map(|(&lhs, &rhs)| op(lhs, rhs))
                .collect(),
        ))
    }

    pub fn checked_add(&self, rhs: &Vector) -> Result<Vector> {
        self.zip_map(rhs, |lhs, rhs| lhs + rhs)
    }

    pub fn checked_subtract(&self, rhs: &Vector) -> Result<Vector> {
        self.zip_map(rhs, |lhs, rhs| lhs - rhs)
    }

    /// Elementwise difference `self - rhs`. Returns an empty vector if the
    /// dimensions differ.
    #[inline]
    pub fn subtract(&self, rhs: &Vector) -> Vector {
        self - rhs
    }

    /// Renders as `[v0, v1, ...]` with two decimal places.
    pub fn print(&self) -> String {
        self.to_string()
    }
}

impl From<Vec<f64>> for Vector {
    /// Takes ownership of `data` without copying.
    #[inline]
    fn from(data: Vec<f64>) -> Self {
        Self(data)
    }
}

/// Elementwise sum. Mismatched dimensions give an empty vector.
impl Add<&Vector> for &Vector {
    type Output = Vector;
    #[inline]
    fn add(self, rhs: &Vector) -> Self::Output {
        self.checked_add(rhs).unwrap_or_default()
    }
}

impl Sub<&Vector> for &Vector {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: &Vector) -> Self::Output {
        self.checked_subtract(rhs).unwrap_or_default()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:.*}", PRINT_PRECISION, value)?;
        }
        f.write_str("]")
    }
}

/// Dot product of `a` and `b`, or `0.0` if their dimensions differ.
pub fn dot_product(a: &Vector, b: &Vector) -> f64 {
    if a.dim() != b.dim() {
        log::debug!(
            "dot_product: dimensions {} and {} differ",
            a.dim(),
            b.dim()
        );
        return 0.0;
    }
    dot(&a.0, &b.0)
}

/// Cross product of two 3-dimensional vectors. Any other dimension yields an
/// empty vector.
pub fn cross_product(a: &Vector, b: &Vector) -> Vector {
    if a.dim() != 3 || b.dim() != 3 {
        log::debug!(
            "cross_product: needs two 3d vectors, got {} and {}",
            a.dim(),
            b.dim()
        );
        return Vector::new();
    }
    let (a, b) = (&a.0, &b.0);
    Vector(vec![
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ])
}

#[cfg(test)]
mod test {
    use super::{cross_product, dot_product, Vector};
    use crate::LinalgError;

    fn assert_close(a: &Vector, b: &[f64]) {
        assert_eq!(a.dim(), b.len());
        for (lhs, rhs) in a.as_slice().iter().zip(b) {
            assert!((lhs - rhs).abs() < 1e-12, "{} != {:?}", a, b);
        }
    }

    #[test]
    fn test_construction() {
        assert_eq!(Vector::new().dim(), 0);
        assert_eq!(Vector::zero(3).as_slice(), &[0.0, 0.0, 0.0]);

        let mut source = vec![1.0, 2.0];
        let v = Vector::from_slice(&source);
        source[0] = 5.0;
        assert_eq!(v.as_slice(), &[1.0, 2.0]);

        let v = Vector::from(vec![4.0, 5.0, 6.0]);
        assert_eq!(v.dim(), 3);
    }

    #[test]
    fn test_set_dim_and_data() {
        let mut v = Vector::from(vec![1.0, 2.0]);
        v.set_dim(4);
        assert_eq!(v.as_slice(), &[0.0; 4]);

        v.set_data(vec![7.0, 8.0, 9.0]);
        assert_eq!(v.dim(), 3);
        assert_eq!(v.get_element(2), 9.0);

        v.set_dim(0);
        assert!(v.is_empty());
    }

    #[test]
    fn test_get_out_of_range_reads_zero() {
        let v = Vector::from(vec![1.0, 2.0]);
        assert_eq!(v.get_element(1), 2.0);
        assert_eq!(v.get_element(2), 0.0);
        assert_eq!(Vector::new().get_element(0), 0.0);
    }

    #[test]
    fn test_norm() {
        let v = Vector::from(vec![3.0, 4.0]);
        assert_eq!(v.euclidean_norm(), 5.0);
        assert_eq!(Vector::new().euclidean_norm(), 0.0);

        let unit = v.normalized();
        assert_close(&unit, &[0.6, 0.8]);
        assert!((unit.euclidean_norm() - 1.0).abs() < 1e-12);

        let mut v = v;
        v.normalize();
        assert_close(&v, &[0.6, 0.8]);
    }

    #[test]
    fn test_normalize_zero_vector() {
        let _ = env_logger::builder().is_test(true).try_init();
        let zero = Vector::zero(3);
        assert!(zero.normalized().is_empty());

        let mut v = zero.clone();
        v.normalize();
        assert_eq!(v, zero);
    }

    #[test]
    fn test_add_subtract() {
        let a = Vector::from(vec![1.0, 2.0, 3.0]);
        let b = Vector::from(vec![4.0, 5.0, 6.0]);
        assert_eq!((&a + &b).as_slice(), &[5.0, 7.0, 9.0]);
        assert_eq!((&a - &b).as_slice(), &[-3.0, -3.0, -3.0]);
        assert_eq!(a.subtract(&b), &a - &b);
        assert_eq!(a.checked_add(&b), Ok(&a + &b));
    }

    #[test]
    fn test_add_subtract_mismatch() {
        let a = Vector::from(vec![1.0, 2.0, 3.0]);
        let b = Vector::from(vec![1.0, 2.0]);
        assert!((&a + &b).is_empty());
        assert!((&a - &b).is_empty());
        assert!(a.subtract(&b).is_empty());
        assert_eq!(
            a.checked_subtract(&b),
            Err(LinalgError::LengthMismatch {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_dot_product() {
        let a = Vector::from(vec![1.0, 2.0, 3.0]);
        let b = Vector::from(vec![4.0, 5.0, 6.0]);
        assert_eq!(dot_product(&a, &b), 32.0);
        assert_eq!(dot_product(&a, &Vector::zero(2)), 0.0);
    }

    #[test]
    fn test_cross_product() {
        let x = Vector::from(vec![1.0, 0.0, 0.0]);
        let y = Vector::from(vec![0.0, 1.0, 0.0]);
        assert_eq!(cross_product(&x, &y).as_slice(), &[0.0, 0.0, 1.0]);
        assert_eq!(cross_product(&y, &x).as_slice(), &[0.0, 0.0, -1.0]);

        let a = Vector::from(vec![2.0, -1.0, 3.0]);
        let b = Vector::from(vec![0.5, 4.0, -2.0]);
        let c = cross_product(&a, &b);
        assert_eq!(dot_product(&c, &a), 0.0);
        assert_eq!(dot_product(&c, &b), 0.0);
    }

    #[test]
    fn test_cross_product_requires_3d() {
        let a = Vector::from(vec![1.0, 0.0]);
        let b = Vector::from(vec![0.0, 1.0]);
        assert_eq!(cross_product(&a, &b).dim(), 0);
        assert_eq!(cross_product(&Vector::zero(4), &Vector::zero(4)).dim(), 0);
        assert_eq!(cross_product(&Vector::zero(3), &b).dim(), 0);
    }

    #[test]
    fn test_print() {
        let v = Vector::from(vec![1.0, 2.5, -7.3333]);
        assert_eq!(v.print(), "[1.00, 2.50, -7.33]");
        assert_eq!(Vector::new().print(), "[]");
    }

    #[test]
    fn test_serde() {
        let v = Vector::from(vec![1.0, 2.0]);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[1.0,2.0]");
        let back: Vector = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
