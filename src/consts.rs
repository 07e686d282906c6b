use crate::complex::Complex;

/// Absolute tolerance used by `PartialEq` for [`Complex`].
///
/// Both components must agree to within this value. Callers that need a
/// different bound should use [`Complex::equals`] directly.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Crossover on `a` in the Hull, Fairgrieve & Tang arcsine/arccosine.
///
/// Below it the imaginary part is computed through `log1p`.
pub const A_CROSSOVER: f64 = 1.5;

/// Crossover on `b = x / a` in the Hull, Fairgrieve & Tang arcsine/arccosine.
///
/// Above it the real part is computed through `atan` instead of `asin`/`acos`.
pub const B_CROSSOVER: f64 = 0.6417;

/// `|im|` below which `tan` uses the direct `cos² + sinh²` denominator.
pub const TAN_IM_SPLIT: f64 = 1.0;

/// `|u|` below which `atan` takes the `log1p` difference for its imaginary part.
pub const ATAN_LOG1P_LIMIT: f64 = 0.1;

/// Mathematical constants usable interchangeably as `f64` and [`Complex`].
///
/// For [`Complex`] the constants are real valued (imaginary part = 0).
///
/// ```
/// use cplxkit::consts::MathConst;
/// use cplxkit::Complex;
///
/// let pi_f64: f64 = f64::PI_C;
/// let pi_c: Complex = Complex::PI_C;
/// assert_eq!(pi_c.re, pi_f64);
/// ```
pub trait MathConst {
    /// Archimedes' constant (pi)
    const PI_C: Self;
    /// pi / 2
    const FRAC_PI_2_C: Self;
    /// ln(10)
    const LN_10_C: Self;
}

impl MathConst for f64 {
    const PI_C: Self = std::f64::consts::PI;
    const FRAC_PI_2_C: Self = std::f64::consts::FRAC_PI_2;
    const LN_10_C: Self = std::f64::consts::LN_10;
}

impl MathConst for Complex {
    const PI_C: Self = Complex::new(f64::PI_C, 0.0);
    const FRAC_PI_2_C: Self = Complex::new(f64::FRAC_PI_2_C, 0.0);
    const LN_10_C: Self = Complex::new(f64::LN_10_C, 0.0);
}
