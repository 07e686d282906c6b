//! Inverse circular functions.
//!
//! `asin` and `acos` follow T. E. Hull, T. F. Fairgrieve and P. T. P. Tang,
//! "Implementing the Complex Arcsine and Arccosine Functions using Exception
//! Handling", ACM TOMS 23(3), 1997. The over/underflow handling of Figure 6
//! in that paper is not implemented, so inputs with components near the
//! limits of `f64` can lose accuracy.

use super::Complex;
use crate::consts::{MathConst, ATAN_LOG1P_LIMIT, A_CROSSOVER, B_CROSSOVER};

/// Shared intermediate values of the Hull et al. algorithm for `|re|`, `|im|`.
struct HullTerms {
    x: f64,
    y: f64,
    r: f64,
    s: f64,
    a: f64,
    b: f64,
}

impl HullTerms {
    fn new(x: f64, y: f64) -> Self {
        let r = ((x + 1.0) * (x + 1.0) + y * y).sqrt();
        let s = ((x - 1.0) * (x - 1.0) + y * y).sqrt();
        let a = (r + s) * 0.5;
        let b = x / a;
        HullTerms { x, y, r, s, a, b }
    }

    /// Real-part denominator above `B_CROSSOVER` for `x <= 1`.
    fn d_inside(&self) -> f64 {
        let HullTerms { x, y, r, s, a, .. } = *self;
        0.5 * (a + x) * (y * y / (r + x + 1.0) + (s + (1.0 - x)))
    }

    /// Real-part denominator above `B_CROSSOVER` for `x > 1`.
    fn d_outside(&self) -> f64 {
        let HullTerms { x, r, s, a, .. } = *self;
        let apx = a + x;
        0.5 * (apx / (r + x + 1.0) + apx / (s + (x - 1.0)))
    }

    /// Imaginary magnitude `ln(a + sqrt(a² - 1))`, computed through `log1p`
    /// near `a = 1`.
    fn imag(&self) -> f64 {
        let HullTerms { x, y, r, s, a, .. } = *self;
        if a <= A_CROSSOVER {
            let am1 = if x < 1.0 {
                0.5 * (y * y / (r + x + 1.0) + y * y / (s + (1.0 - x)))
            } else {
                0.5 * (y * y / (r + x + 1.0) + (s + (x - 1.0)))
            };
            (am1 + (am1 * (a + 1.0)).sqrt()).ln_1p()
        } else {
            (a + (a * a - 1.0).sqrt()).ln()
        }
    }
}

/// `acosh(x)` for real `x >= 1`, the imaginary magnitude on the real axis
/// outside `[-1, 1]`.
fn real_axis_imag(x: f64) -> f64 {
    (x + (x * x - 1.0).sqrt()).ln()
}

impl Complex {
    /// Calculate arcsine (principal value, real part in [-pi/2, pi/2])
    pub fn asin(&self) -> Self {
        let x = self.re.abs();
        let y = self.im.abs();

        let (real, imag) = if y == 0.0 {
            if x <= 1.0 {
                (x.asin(), 0.0)
            } else {
                (f64::FRAC_PI_2_C, real_axis_imag(x))
            }
        } else {
            let h = HullTerms::new(x, y);
            let real = if h.b <= B_CROSSOVER {
                h.b.asin()
            } else if x <= 1.0 {
                (x / h.d_inside().sqrt()).atan()
            } else {
                (x / (y * h.d_outside().sqrt())).atan()
            };
            (real, h.imag())
        };

        let real = if self.re.is_sign_negative() { -real } else { real };
        let imag = if self.im.is_sign_negative() { -imag } else { imag };
        Complex::new(real, imag)
    }

    /// Calculate arccosine (principal value, real part in [0, pi])
    pub fn acos(&self) -> Self {
        let x = self.re.abs();
        let y = self.im.abs();

        let (real, imag) = if y == 0.0 {
            if x <= 1.0 {
                (x.acos(), 0.0)
            } else {
                (0.0, real_axis_imag(x))
            }
        } else {
            let h = HullTerms::new(x, y);
            let real = if h.b <= B_CROSSOVER {
                h.b.acos()
            } else if x <= 1.0 {
                (h.d_inside().sqrt() / x).atan()
            } else {
                (y * h.d_outside().sqrt() / x).atan()
            };
            (real, h.imag())
        };

        let real = if self.re < 0.0 { f64::PI_C - real } else { real };
        let imag = if self.im.is_sign_negative() { imag } else { -imag };
        Complex::new(real, imag)
    }

    /// Calculate arctangent (principal value, real part in [-pi/2, pi/2])
    pub fn atan(&self) -> Self {
        let (re, im) = (self.re, self.im);
        if im == 0.0 {
            return Complex::new(re.atan(), 0.0);
        }

        let r = re.hypot(im);
        let u = 2.0 * im / (1.0 + r * r);

        let imag = if u.abs() < ATAN_LOG1P_LIMIT {
            0.25 * (u.ln_1p() - (-u).ln_1p())
        } else {
            let a = re.hypot(im + 1.0);
            let b = re.hypot(im - 1.0);
            0.5 * (a / b).ln()
        };

        if re == 0.0 {
            let real = if im > 1.0 {
                f64::FRAC_PI_2_C
            } else if im < -1.0 {
                -f64::FRAC_PI_2_C
            } else {
                0.0
            };
            Complex::new(real, imag)
        } else {
            Complex::new(0.5 * (2.0 * re).atan2((1.0 + r) * (1.0 - r)), imag)
        }
    }

    /// Calculate arcsecant, acos(1 / z)
    pub fn asec(&self) -> Self {
        self.recip().acos()
    }

    /// Calculate arccosecant, asin(1 / z)
    pub fn acsc(&self) -> Self {
        self.recip().asin()
    }

    /// Calculate arccotangent, atan(1 / z)
    pub fn acot(&self) -> Self {
        self.recip().atan()
    }
}
