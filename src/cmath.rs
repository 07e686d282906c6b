//! Free-function forms of the [`Complex`] function suite.
//!
//! These live in their own namespace so that `cmath::sin(z)` never competes
//! with `f64::sin` during method or import resolution. Each function forwards
//! to the method of the same name; `log` is the natural logarithm.

use crate::complex::Complex;

pub fn abs(z: Complex) -> f64 {
    z.modulus()
}

pub fn arg(z: Complex) -> f64 {
    z.argument()
}

pub fn conj(z: Complex) -> Complex {
    z.conjugate()
}

pub fn sqrt(z: Complex) -> Complex {
    z.sqrt()
}

pub fn exp(z: Complex) -> Complex {
    z.exp()
}

/// Natural logarithm, principal branch
pub fn log(z: Complex) -> Complex {
    z.ln()
}

pub fn log10(z: Complex) -> Complex {
    z.log10()
}

/// `base` raised to `exp`; see [`Complex::pow`] for the zero-base rule
pub fn pow(base: Complex, exp: Complex) -> Complex {
    base.pow(exp)
}

pub fn sin(z: Complex) -> Complex {
    z.sin()
}

pub fn cos(z: Complex) -> Complex {
    z.cos()
}

pub fn tan(z: Complex) -> Complex {
    z.tan()
}

pub fn sec(z: Complex) -> Complex {
    z.sec()
}

pub fn csc(z: Complex) -> Complex {
    z.csc()
}

pub fn cot(z: Complex) -> Complex {
    z.cot()
}

pub fn asin(z: Complex) -> Complex {
    z.asin()
}

pub fn acos(z: Complex) -> Complex {
    z.acos()
}

pub fn atan(z: Complex) -> Complex {
    z.atan()
}

pub fn asec(z: Complex) -> Complex {
    z.asec()
}

pub fn acsc(z: Complex) -> Complex {
    z.acsc()
}

pub fn acot(z: Complex) -> Complex {
    z.acot()
}

pub fn sinh(z: Complex) -> Complex {
    z.sinh()
}

pub fn cosh(z: Complex) -> Complex {
    z.cosh()
}

pub fn tanh(z: Complex) -> Complex {
    z.tanh()
}

pub fn sech(z: Complex) -> Complex {
    z.sech()
}

pub fn csch(z: Complex) -> Complex {
    z.csch()
}

pub fn coth(z: Complex) -> Complex {
    z.coth()
}

pub fn asinh(z: Complex) -> Complex {
    z.asinh()
}

pub fn acosh(z: Complex) -> Complex {
    z.acosh()
}

pub fn atanh(z: Complex) -> Complex {
    z.atanh()
}

pub fn asech(z: Complex) -> Complex {
    z.asech()
}

pub fn acsch(z: Complex) -> Complex {
    z.acsch()
}

pub fn acoth(z: Complex) -> Complex {
    z.acoth()
}
