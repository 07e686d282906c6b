use super::Complex;
use crate::consts::MathConst;
use num_traits::Pow;

impl Complex {
    /// Get 1 / self
    pub fn recip(&self) -> Self {
        Complex::ONE / self
    }

    /// Calculate the principal square root.
    ///
    /// On the real axis this is the real square root of `re`, so a negative
    /// real input yields a NaN real part. Elsewhere only the larger component
    /// comes from the half-angle form, `t = sqrt((|re| + |z|) / 2)`, and the
    /// smaller one is `|im| / 2t`. This keeps the small component accurate
    /// when `|im|` is tiny next to `|re|`.
    pub fn sqrt(&self) -> Self {
        if self.im == 0.0 {
            return Complex::new(self.re.sqrt(), 0.0);
        }

        let m = self.modulus();
        let t = ((self.re.abs() + m) * 0.5).sqrt();
        let small = self.im.abs() / (2.0 * t);
        if self.re >= 0.0 {
            Complex::new(t, small.copysign(self.im))
        } else {
            Complex::new(small, t.copysign(self.im))
        }
    }

    /// Calculate the exponential function
    pub fn exp(&self) -> Self {
        let e = self.re.exp();
        Complex::new(e * self.im.cos(), e * self.im.sin())
    }

    /// Calculate the natural logarithm (principal branch).
    ///
    /// The branch cut lies along the negative real axis, where the imaginary
    /// part jumps between `-pi` and `pi` following the sign of `im`.
    pub fn ln(&self) -> Self {
        Complex::new(self.modulus().ln(), self.argument())
    }

    /// Calculate the logarithm with an arbitrary real base
    pub fn log(&self, base: f64) -> Self {
        self.ln() / base.ln()
    }

    /// Calculate the base 10 logarithm
    pub fn log10(&self) -> Self {
        self.ln() / f64::LN_10_C
    }

    /// Raise to a complex power, `exp(exp · ln(self))`.
    ///
    /// A base of exactly zero gives 1 for an exponent of exactly zero and 0
    /// for any other exponent.
    pub fn pow(&self, exp: Complex) -> Self {
        if self.re == 0.0 && self.im == 0.0 {
            return if exp.re == 0.0 && exp.im == 0.0 {
                Complex::ONE
            } else {
                Complex::ZERO
            };
        }
        (exp * self.ln()).exp()
    }

    /// Raise to a real power
    pub fn powf(&self, exp: f64) -> Self {
        self.pow(Complex::from_real(exp))
    }

    /// Raise to an integer power by repeated squaring.
    ///
    /// A zero base follows the same convention as [`Complex::pow`].
    pub fn powi(&self, n: i32) -> Self {
        if self.re == 0.0 && self.im == 0.0 {
            return if n == 0 { Complex::ONE } else { Complex::ZERO };
        }

        let mut base = *self;
        let mut k = n.unsigned_abs();
        let mut acc = Complex::ONE;
        while k > 0 {
            if k & 1 == 1 {
                acc *= base;
            }
            base *= base;
            k >>= 1;
        }

        if n < 0 {
            acc.recip()
        } else {
            acc
        }
    }
}

impl Pow<Complex> for Complex {
    type Output = Complex;

    fn pow(self, exp: Complex) -> Complex {
        Complex::pow(&self, exp)
    }
}

impl Pow<&Complex> for Complex {
    type Output = Complex;

    fn pow(self, exp: &Complex) -> Complex {
        Complex::pow(&self, *exp)
    }
}

impl Pow<Complex> for &Complex {
    type Output = Complex;

    fn pow(self, exp: Complex) -> Complex {
        Complex::pow(self, exp)
    }
}

impl Pow<&Complex> for &Complex {
    type Output = Complex;

    fn pow(self, exp: &Complex) -> Complex {
        Complex::pow(self, *exp)
    }
}

impl Pow<f64> for Complex {
    type Output = Complex;

    fn pow(self, exp: f64) -> Complex {
        self.powf(exp)
    }
}

impl Pow<f64> for &Complex {
    type Output = Complex;

    fn pow(self, exp: f64) -> Complex {
        self.powf(exp)
    }
}

impl Pow<i32> for Complex {
    type Output = Complex;

    fn pow(self, exp: i32) -> Complex {
        self.powi(exp)
    }
}

impl Pow<i32> for &Complex {
    type Output = Complex;

    fn pow(self, exp: i32) -> Complex {
        self.powi(exp)
    }
}
