use crate::complex::Complex;
use std::fmt;

/// Error returned when a [`Complex`] cannot be narrowed to a real or integer
/// type without discarding information.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LossyCastError {
    /// The imaginary part is non-zero.
    ImaginaryPart { value: Complex, target: &'static str },
    /// The real part has a non-zero fractional remainder.
    FractionalPart { value: Complex, target: &'static str },
    /// The real part is NaN, infinite, or outside the target's range.
    OutOfRange { value: Complex, target: &'static str },
}

impl LossyCastError {
    /// The value that failed to convert.
    pub fn value(&self) -> Complex {
        match self {
            LossyCastError::ImaginaryPart { value, .. }
            | LossyCastError::FractionalPart { value, .. }
            | LossyCastError::OutOfRange { value, .. } => *value,
        }
    }

    /// Name of the type the conversion targeted.
    pub fn target(&self) -> &'static str {
        match self {
            LossyCastError::ImaginaryPart { target, .. }
            | LossyCastError::FractionalPart { target, .. }
            | LossyCastError::OutOfRange { target, .. } => target,
        }
    }
}

impl fmt::Display for LossyCastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LossyCastError::ImaginaryPart { value, target } => write!(
                f,
                "Cannot cast complex {} to {}: non-zero imaginary part",
                value, target
            ),
            LossyCastError::FractionalPart { value, target } => write!(
                f,
                "Cannot cast complex {} to {}: non-integral real part",
                value, target
            ),
            LossyCastError::OutOfRange { value, target } => write!(
                f,
                "Cannot cast complex {} to {}: real part out of range",
                value, target
            ),
        }
    }
}

impl std::error::Error for LossyCastError {}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = LossyCastError::ImaginaryPart {
            value: Complex::new(3.0, 1e-9),
            target: "f64",
        };
        assert_eq!(
            err.to_string(),
            "Cannot cast complex 3 + 0.000000001i to f64: non-zero imaginary part"
        );

        let err = LossyCastError::FractionalPart {
            value: Complex::new(2.5, 0.0),
            target: "i64",
        };
        assert_eq!(
            err.to_string(),
            "Cannot cast complex 2.5 to i64: non-integral real part"
        );
    }

    #[test]
    fn test_accessors() {
        let err = LossyCastError::OutOfRange {
            value: Complex::new(f64::INFINITY, 0.0),
            target: "i32",
        };
        assert_eq!(err.target(), "i32");
        assert!(err.value().re.is_infinite());
    }
}
