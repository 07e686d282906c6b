use super::Complex;
use crate::consts::MathConst;

impl Complex {
    /// Calculate inverse hyperbolic sine, `i·asin(-i·z)`
    pub fn asinh(&self) -> Self {
        self.mul_neg_i().asin().mul_i()
    }

    /// Calculate inverse hyperbolic cosine (principal value, real part >= 0)
    pub fn acosh(&self) -> Self {
        let w = self.acos();
        if !w.im.is_nan() && w.im.is_sign_negative() {
            w.mul_i()
        } else {
            w.mul_neg_i()
        }
    }

    /// Calculate inverse hyperbolic tangent.
    ///
    /// Non-finite inputs follow C99 Annex G: `atanh(NaN ± i∞) = ±0 ± iπ/2`,
    /// `atanh(±∞ + iy) = ±0 ± iπ/2`, and `atanh(±0 + iNaN) = ±0 + iNaN`.
    /// The imaginary part for `NaN ± i∞` is therefore `±π/2`, not the `±π`
    /// some older complex libraries return.
    pub fn atanh(&self) -> Self {
        let (re, im) = (self.re, self.im);
        let x = re.abs();
        let y = im.abs();

        if x.is_nan() {
            return if y.is_infinite() {
                Complex::new(0.0, f64::FRAC_PI_2_C.copysign(im))
            } else {
                Complex::nan()
            };
        }
        if y.is_nan() {
            return if x == 0.0 || x.is_infinite() {
                Complex::new(0.0f64.copysign(re), f64::NAN)
            } else {
                Complex::nan()
            };
        }
        if x.is_infinite() || y.is_infinite() {
            return Complex::new(0.0f64.copysign(re), f64::FRAC_PI_2_C.copysign(im));
        }

        let real = 0.25 * (4.0 * x / ((1.0 - x) * (1.0 - x) + y * y)).ln_1p();
        let imag = 0.5 * (2.0 * y).atan2((1.0 - x) * (1.0 + x) - y * y);
        Complex::new(real.copysign(re), imag.copysign(im))
    }

    /// Calculate inverse hyperbolic secant, acosh(1 / z)
    pub fn asech(&self) -> Self {
        self.recip().acosh()
    }

    /// Calculate inverse hyperbolic cosecant, asinh(1 / z)
    pub fn acsch(&self) -> Self {
        self.recip().asinh()
    }

    /// Calculate inverse hyperbolic cotangent, atanh(1 / z)
    pub fn acoth(&self) -> Self {
        self.recip().atanh()
    }
}
