use crate::complex::Complex;
use crate::error::LossyCastError;
use log::debug;
use num_complex::Complex64;

// Conversion from f64 (real number)
impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Complex::from_real(re)
    }
}

impl From<&f64> for Complex {
    fn from(re: &f64) -> Self {
        Complex::from_real(*re)
    }
}

impl From<i32> for Complex {
    fn from(re: i32) -> Self {
        Complex::from_real(re as f64)
    }
}

// Values beyond 2^53 round to the nearest representable f64
impl From<i64> for Complex {
    fn from(re: i64) -> Self {
        Complex::from_real(re as f64)
    }
}

// Conversion from (re, im) tuple
impl From<(f64, f64)> for Complex {
    fn from(num: (f64, f64)) -> Self {
        Complex::from_tuple(num)
    }
}

impl From<Complex64> for Complex {
    fn from(num: Complex64) -> Self {
        Complex::new(num.re, num.im)
    }
}

impl From<&Complex64> for Complex {
    fn from(num: &Complex64) -> Self {
        Complex::new(num.re, num.im)
    }
}

impl From<Complex> for Complex64 {
    fn from(value: Complex) -> Complex64 {
        Complex64::new(value.re, value.im)
    }
}

impl From<&Complex> for Complex64 {
    fn from(value: &Complex) -> Complex64 {
        Complex64::new(value.re, value.im)
    }
}

fn reject(err: LossyCastError) -> LossyCastError {
    debug!("rejected cast: {}", err);
    err
}

/// Narrow to the real part, failing unless the imaginary part is exactly zero.
impl TryFrom<Complex> for f64 {
    type Error = LossyCastError;

    fn try_from(value: Complex) -> Result<Self, Self::Error> {
        if value.im != 0.0 {
            return Err(reject(LossyCastError::ImaginaryPart {
                value,
                target: "f64",
            }));
        }
        Ok(value.re)
    }
}

impl TryFrom<&Complex> for f64 {
    type Error = LossyCastError;

    fn try_from(value: &Complex) -> Result<Self, Self::Error> {
        f64::try_from(*value)
    }
}

macro_rules! impl_try_from_complex_int(
    ($int:ident, $lower:expr, $upper:expr) => (
        impl TryFrom<Complex> for $int {
            type Error = LossyCastError;

            fn try_from(value: Complex) -> Result<Self, Self::Error> {
                let target = stringify!($int);
                let re = value.re;

                if value.im != 0.0 {
                    return Err(reject(LossyCastError::ImaginaryPart { value, target }));
                }
                if !re.is_finite() {
                    return Err(reject(LossyCastError::OutOfRange { value, target }));
                }
                if re.fract() != 0.0 {
                    return Err(reject(LossyCastError::FractionalPart { value, target }));
                }
                if re < $lower || re >= $upper {
                    return Err(reject(LossyCastError::OutOfRange { value, target }));
                }
                Ok(re as $int)
            }
        }

        impl TryFrom<&Complex> for $int {
            type Error = LossyCastError;

            fn try_from(value: &Complex) -> Result<Self, Self::Error> {
                $int::try_from(*value)
            }
        }
    );
);

// Bounds are [MIN, MAX + 1) as exact f64 values.
impl_try_from_complex_int!(i64, -9_223_372_036_854_775_808.0, 9_223_372_036_854_775_808.0);
impl_try_from_complex_int!(i32, -2_147_483_648.0, 2_147_483_648.0);
