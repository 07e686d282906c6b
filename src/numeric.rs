//! Compile-time numeric capability shared by the scalar kinds a container
//! of numbers may hold: `i64`, `f64` and [`Complex`].

use crate::complex::Complex;
use crate::error::LossyCastError;
use num_traits::{One, Zero};
use serde::Serialize;
use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

mod sealed {
    use super::*;

    pub trait Sealed:
        Copy
        + Clone
        + Default
        + Display
        + Debug
        + Sized
        + Serialize
        + One
        + Zero
        + Add<Output = Self>
        + AddAssign
        + Sub<Output = Self>
        + SubAssign
        + Mul<Output = Self>
        + MulAssign
        + Neg<Output = Self>
        + PartialEq
    {
    }

    impl Sealed for i64 {}
    impl Sealed for f64 {}
    impl Sealed for Complex {}
}

pub trait Scalar: sealed::Sealed {
    /// Widen into the complex plane. Exact for `f64` and `Complex`.
    fn to_complex(self) -> Complex;

    /// Narrow a complex value into this kind.
    fn try_from_complex(value: Complex) -> Result<Self, LossyCastError>;

    /// Componentwise comparison within an absolute `tolerance`.
    fn approx_eq_tol(&self, other: &Self, tolerance: f64) -> bool;
}

impl Scalar for i64 {
    fn to_complex(self) -> Complex {
        Complex::from(self)
    }

    fn try_from_complex(value: Complex) -> Result<Self, LossyCastError> {
        i64::try_from(value)
    }

    fn approx_eq_tol(&self, other: &Self, tolerance: f64) -> bool {
        ((*self as f64) - (*other as f64)).abs() <= tolerance
    }
}

impl Scalar for f64 {
    fn to_complex(self) -> Complex {
        Complex::from_real(self)
    }

    fn try_from_complex(value: Complex) -> Result<Self, LossyCastError> {
        f64::try_from(value)
    }

    fn approx_eq_tol(&self, other: &Self, tolerance: f64) -> bool {
        (self - other).abs() <= tolerance
    }
}

impl Scalar for Complex {
    fn to_complex(self) -> Complex {
        self
    }

    fn try_from_complex(value: Complex) -> Result<Self, LossyCastError> {
        Ok(value)
    }

    fn approx_eq_tol(&self, other: &Self, tolerance: f64) -> bool {
        self.equals(other, tolerance)
    }
}

/// Elementwise tolerance equality of two equally long slices.
pub fn slices_approx_eq<T: Scalar>(a: &[T], b: &[T], tolerance: f64) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.approx_eq_tol(y, tolerance))
}

/// Inner product `Σ aᵢ·bᵢ` of two slices, truncated to the shorter one.
pub fn dot<T: Scalar>(a: &[T], b: &[T]) -> T {
    a.iter().zip(b).fold(T::zero(), |mut acc, (x, y)| {
        acc += *x * *y;
        acc
    })
}

/// Narrow every element of `values` into `T`, stopping at the first loss.
pub fn narrow_all<T: Scalar>(values: &[Complex]) -> Result<Vec<T>, LossyCastError> {
    values.iter().map(|z| T::try_from_complex(*z)).collect()
}

#[cfg(test)]
mod numeric_tests {
    use super::*;

    #[test]
    fn test_to_complex() {
        assert_eq!(3i64.to_complex(), Complex::new(3.0, 0.0));
        assert_eq!((-1.5f64).to_complex(), Complex::new(-1.5, 0.0));
        let z = Complex::new(1.0, 2.0);
        assert_eq!(z.to_complex(), z);
    }

    #[test]
    fn test_try_from_complex() {
        assert_eq!(i64::try_from_complex(Complex::new(4.0, 0.0)), Ok(4));
        assert!(i64::try_from_complex(Complex::new(4.5, 0.0)).is_err());
        assert_eq!(f64::try_from_complex(Complex::new(4.5, 0.0)), Ok(4.5));
        assert!(f64::try_from_complex(Complex::new(4.5, 1.0)).is_err());
        assert!(Complex::try_from_complex(Complex::new(4.5, 1.0)).is_ok());
    }

    #[test]
    fn test_slices_approx_eq() {
        let a = [Complex::new(1.0, 2.0), Complex::new(-0.5, 0.25)];
        let b = [Complex::new(1.0 + 1e-8, 2.0), Complex::new(-0.5, 0.25 - 1e-8)];
        assert!(slices_approx_eq(&a, &b, 1e-6));
        assert!(!slices_approx_eq(&a, &b, 1e-10));
        assert!(!slices_approx_eq(&a, &b[..1], 1e-6));

        assert!(slices_approx_eq(&[1.0, 2.0], &[1.0, 2.0 + 1e-9], 1e-6));
        assert!(slices_approx_eq(&[1i64, 2], &[1, 2], 0.0));
        assert!(!slices_approx_eq(&[1i64, 2], &[1, 3], 0.5));
    }

    #[test]
    fn test_dot_is_generic() {
        assert_eq!(dot(&[1i64, 2, 3], &[4, 5, 6]), 32);
        assert_eq!(dot(&[0.5, 2.0], &[4.0, 0.25]), 2.5);

        let a = [Complex::new(1.0, 1.0), Complex::new(0.0, 2.0)];
        let b = [Complex::new(1.0, -1.0), Complex::new(0.0, 1.0)];
        // (1+i)(1-i) + (2i)(i) = 2 - 2
        let d = dot(&a, &b);
        assert_eq!((d.re, d.im), (0.0, 0.0));
    }

    #[test]
    fn test_narrow_all() {
        let values = [Complex::new(1.0, 0.0), Complex::new(-2.0, 0.0)];
        assert_eq!(narrow_all::<i64>(&values), Ok(vec![1, -2]));

        let values = [Complex::new(1.0, 0.0), Complex::new(-2.0, 0.5)];
        let err = narrow_all::<f64>(&values).unwrap_err();
        assert_eq!(err.value().re, -2.0);
    }
}
