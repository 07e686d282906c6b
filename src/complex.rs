use crate::consts::DEFAULT_TOLERANCE;
use float_cmp::{ApproxEq, F64Margin};
use log::debug;
use num_traits::{ConstOne, ConstZero, One, Zero};
use regex::Regex;
use serde::{Deserialize, Serialize};
use simple_error::{bail, SimpleError};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

mod arith;
mod exp;
mod hyperbolic;
mod inverse;
mod inverse_hyperbolic;
mod trig;

/// A double precision complex number.
///
/// Values are immutable in the sense that every operation returns a new
/// `Complex`; the type is `Copy` and carries no shared state.
///
/// Equality through `==` is tolerance based (see [`DEFAULT_TOLERANCE`]) and is
/// therefore not transitive. Use [`Complex::equals`] to pick a tolerance, or
/// compare the `re`/`im` fields for bit-exact checks.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize)]
pub struct Complex {
    /// Real part
    pub re: f64,
    /// Imaginary part
    pub im: f64,
}

impl Complex {
    /// A constant `Complex` 0.
    pub const ZERO: Self = Complex::new(0.0, 0.0);

    /// A constant `Complex` 1.
    pub const ONE: Self = Complex::new(1.0, 0.0);

    /// A constant `Complex` _i_, the imaginary unit.
    pub const I: Self = Complex::new(0.0, 1.0);

    /// Create a new complex number from real and imaginary parts
    pub const fn new(re: f64, im: f64) -> Self {
        Complex { re, im }
    }

    /// Create a new complex number from a real number (imaginary part = 0)
    pub const fn from_real(re: f64) -> Self {
        Complex::new(re, 0.0)
    }

    /// Create a new complex number from an imaginary number (real part = 0)
    pub const fn from_imag(im: f64) -> Self {
        Complex::new(0.0, im)
    }

    /// Create a new complex number from a modulus and argument in radians
    pub fn from_polar(modulus: f64, argument: f64) -> Self {
        Complex::new(modulus * argument.cos(), modulus * argument.sin())
    }

    /// Create a new complex number from real and imaginary parts
    pub fn from_tuple(num: (f64, f64)) -> Self {
        Complex::new(num.0, num.1)
    }

    /// Get the real part
    pub fn real(&self) -> f64 {
        self.re
    }

    /// Get the imaginary part
    pub fn imag(&self) -> f64 {
        self.im
    }

    /// Get the modulus, `sqrt(re² + im²)`, without intermediate overflow
    pub fn modulus(&self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Alias of [`Complex::modulus`]
    pub fn abs(&self) -> f64 {
        self.modulus()
    }

    /// Alias of [`Complex::modulus`] (the Euclidean norm)
    pub fn norm(&self) -> f64 {
        self.modulus()
    }

    /// Calculate the square of the modulus
    pub fn norm_sqr(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Get the argument (phase angle) `atan2(im, re)`, in (-pi, pi].
    ///
    /// On the negative real axis the sign of a zero imaginary part decides the
    /// result, as it does for `f64::atan2`: `+0.0` gives `pi`, `-0.0` gives `-pi`.
    pub fn argument(&self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Alias of [`Complex::argument`]
    pub fn arg(&self) -> f64 {
        self.argument()
    }

    /// Get the complex conjugate
    pub fn conjugate(&self) -> Self {
        Complex::new(self.re, -self.im)
    }

    /// Alias of [`Complex::conjugate`]
    pub fn conj(&self) -> Self {
        self.conjugate()
    }

    /// Convert to polar form `(modulus, argument)`
    pub fn to_polar(&self) -> (f64, f64) {
        (self.modulus(), self.argument())
    }

    /// True when both components are within `tolerance` of `other`'s.
    pub fn equals(&self, other: &Complex, tolerance: f64) -> bool {
        (self.re - other.re).abs() <= tolerance && (self.im - other.im).abs() <= tolerance
    }

    /// Create a NaN complex number
    pub fn nan() -> Self {
        Complex::new(f64::NAN, f64::NAN)
    }

    /// Check if the complex number contains NaN
    pub fn is_nan(&self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    /// Create an infinite complex number
    pub fn infinity() -> Self {
        Complex::new(f64::INFINITY, f64::INFINITY)
    }

    /// Check if the complex number is infinite
    pub fn is_infinite(&self) -> bool {
        self.re.is_infinite() || self.im.is_infinite()
    }

    /// Check if the complex number is finite
    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// True when the imaginary part is exactly zero
    pub fn is_real(&self) -> bool {
        self.im == 0.0
    }
}

impl PartialEq for Complex {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other, DEFAULT_TOLERANCE)
    }
}

impl ApproxEq for Complex {
    type Margin = F64Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        let margin = margin.into();
        self.re.approx_eq(other.re, margin) && self.im.approx_eq(other.im, margin)
    }
}

impl Zero for Complex {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

impl ConstZero for Complex {
    const ZERO: Self = Self::ZERO;
}

impl One for Complex {
    fn one() -> Self {
        Self::ONE
    }
}

impl ConstOne for Complex {
    const ONE: Self = Self::ONE;
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let real = self.re;
        let imag = self.im;

        if imag == 0.0 {
            write!(f, "{}", real)
        } else if real == 0.0 {
            if imag == 1.0 {
                write!(f, "i")
            } else if imag == -1.0 {
                write!(f, "-i")
            } else {
                write!(f, "{}i", imag)
            }
        } else if imag == 1.0 {
            write!(f, "{} + i", real)
        } else if imag == -1.0 {
            write!(f, "{} - i", real)
        } else if imag > 0.0 || imag.is_nan() {
            write!(f, "{} + {}i", real, imag)
        } else {
            write!(f, "{} - {}i", real, -imag)
        }
    }
}

const NUMBER: &str = r"(?:(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?|inf|NaN)";

fn re_real() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"^(?<sign>[+-]?)\s*(?<val>{})$", NUMBER)).expect("Invalid regex!")
    })
}

fn re_imag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(
            r"^(?<sign>[+-]?)\s*(?<val>{})?\s*\*?\s*[ij]$",
            NUMBER
        ))
        .expect("Invalid regex!")
    })
}

fn re_full() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(
            r"^(?<re_sign>[+-]?)\s*(?<re>{n})\s*(?<im_sign>[+-])\s*(?<im>{n})?\s*\*?\s*[ij]$",
            n = NUMBER
        ))
        .expect("Invalid regex!")
    })
}

fn signed(sign: Option<regex::Match>, val: Option<regex::Match>) -> Result<f64, SimpleError> {
    let magnitude = match val {
        Some(v) => match v.as_str().parse::<f64>() {
            Ok(x) => x,
            Err(_) => bail!("invalid number '{}'", v.as_str()),
        },
        None => 1.0,
    };
    match sign.map(|s| s.as_str()) {
        Some("-") => Ok(-magnitude),
        _ => Ok(magnitude),
    }
}

fn parse_complex(text: &str) -> Result<Complex, SimpleError> {
    let text = text.trim();
    if text.is_empty() {
        bail!("cannot parse complex number from empty string");
    }

    if let Some(caps) = re_real().captures(text) {
        return Ok(Complex::from_real(signed(caps.name("sign"), caps.name("val"))?));
    }
    if let Some(caps) = re_imag().captures(text) {
        return Ok(Complex::from_imag(signed(caps.name("sign"), caps.name("val"))?));
    }
    if let Some(caps) = re_full().captures(text) {
        let re = signed(caps.name("re_sign"), caps.name("re"))?;
        let im = signed(caps.name("im_sign"), caps.name("im"))?;
        return Ok(Complex::new(re, im));
    }
    bail!("string '{}' is not a complex number", text)
}

impl FromStr for Complex {
    type Err = SimpleError;

    /// Parse text of the forms `a`, `bi`, `a + bi`, `a - bi`, `a + i`
    /// (`j` is accepted in place of `i`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_complex(s).map_err(|e| {
            debug!("failed to parse complex number from {:?}: {}", s, e);
            e
        })
    }
}

#[cfg(test)]
mod complex_tests {
    use super::*;
    use float_cmp::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_creation() {
        let z1 = Complex::new(1.1, 2.0);
        assert_eq!(z1.real(), 1.1);
        assert_eq!(z1.imag(), 2.0);

        let z2 = Complex::from_real(5.0);
        assert_eq!(z2.re, 5.0);
        assert_eq!(z2.im, 0.0);

        let z3 = Complex::from_imag(2.0);
        assert_eq!(z3.re, 0.0);
        assert_eq!(z3.im, 2.0);

        let z4 = Complex::from_polar(1.0, FRAC_PI_2);
        assert!(approx_eq!(f64, z4.re, 0.0, epsilon = 1e-15));
        assert!(approx_eq!(f64, z4.im, 1.0, F64Margin::default()));

        let z5 = Complex::from_tuple((2.3, -0.4));
        assert_eq!(z5.re, 2.3);
        assert_eq!(z5.im, -0.4);
    }

    #[test]
    fn test_queries() {
        let z2 = Complex::new(2.3, -0.4);
        let conj = z2.conjugate();
        assert_eq!(conj.re, 2.3);
        assert_eq!(conj.im, 0.4);

        assert!(approx_eq!(f64, z2.modulus(), 2.334523505985752, epsilon = 1e-12));
        assert_eq!(z2.modulus(), z2.abs());
        assert_eq!(z2.modulus(), z2.norm());
        assert!(approx_eq!(f64, z2.argument(), -0.172190814522939, epsilon = 1e-4));

        let z = Complex::new(3.0, 4.0);
        assert_eq!(z.modulus(), 5.0);
        assert_eq!(z.norm_sqr(), 25.0);
        let (m, a) = z.to_polar();
        assert!(approx_eq!(f64, Complex::new(3e200, 4e200).modulus() / 5e200, 1.0, epsilon = 1e-15));
        assert_eq!(m, 5.0);
        assert_eq!(a, 4.0f64.atan2(3.0));
    }

    #[test]
    fn test_argument_branch_point() {
        assert_eq!(Complex::new(-1.0, 0.0).argument(), PI);
        assert_eq!(Complex::new(-1.0, -0.0).argument(), -PI);
        assert_eq!(Complex::new(0.0, 1.0).argument(), FRAC_PI_2);
    }

    #[test]
    fn test_double_conjugate_is_bit_identical() {
        for z in [
            Complex::new(1.1, 2.0),
            Complex::new(-0.0, 0.0),
            Complex::new(f64::NAN, -3.5),
            Complex::new(f64::INFINITY, f64::NEG_INFINITY),
        ] {
            let back = z.conjugate().conjugate();
            assert_eq!(back.re.to_bits(), z.re.to_bits());
            assert_eq!(back.im.to_bits(), z.im.to_bits());
        }
    }

    #[test]
    fn test_equality_is_tolerance_based() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(1.0 + 5e-7, 2.0 - 5e-7);
        let c = Complex::new(1.0 + 5e-6, 2.0);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.equals(&c, 1e-5));
        assert!(!a.equals(&c, 1e-6));
        assert_ne!(Complex::nan(), Complex::nan());
    }

    #[test]
    fn test_approx_eq_margin() {
        let a = Complex::new(0.1 + 0.2, 1.0);
        let b = Complex::new(0.3, 1.0);
        assert!(approx_eq!(Complex, a, b, ulps = 2));
        assert!(!approx_eq!(Complex, a, Complex::new(0.3001, 1.0), ulps = 2));
    }

    #[test]
    fn test_zero_one_traits() {
        let zero = Complex::zero();
        assert!(zero.is_zero());
        assert!(!Complex::new(0.0, 1e-300).is_zero());

        let one = Complex::one();
        assert_eq!(one.re, 1.0);
        assert_eq!(one.im, 0.0);
        assert!(one.is_one());
        assert!(!Complex::from_real(2.0).is_one());
    }

    #[test]
    fn test_nan_and_infinity() {
        let nan = Complex::nan();
        assert!(nan.is_nan());
        assert!(!nan.is_finite());

        let inf = Complex::infinity();
        assert!(inf.is_infinite());
        assert!(!inf.is_finite());

        let normal = Complex::new(1.0, 2.0);
        assert!(!normal.is_nan());
        assert!(!normal.is_infinite());
        assert!(normal.is_finite());
        assert!(!normal.is_real());
        assert!(Complex::from_real(3.0).is_real());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Complex::new(3.0, 4.0)), "3 + 4i");
        assert_eq!(format!("{}", Complex::new(3.0, -4.0)), "3 - 4i");
        assert_eq!(format!("{}", Complex::from_real(5.0)), "5");
        assert_eq!(format!("{}", Complex::from_imag(2.0)), "2i");
        assert_eq!(format!("{}", Complex::I), "i");
        assert_eq!(format!("{}", -Complex::I), "-i");
        assert_eq!(format!("{}", Complex::new(1.5, 1.0)), "1.5 + i");
        assert_eq!(format!("{}", Complex::new(1.5, -1.0)), "1.5 - i");
    }

    #[test]
    fn test_parse() {
        assert_eq!("3 + 4i".parse::<Complex>().unwrap(), Complex::new(3.0, 4.0));
        assert_eq!("3-4i".parse::<Complex>().unwrap(), Complex::new(3.0, -4.0));
        assert_eq!("-2.5".parse::<Complex>().unwrap(), Complex::new(-2.5, 0.0));
        assert_eq!("-i".parse::<Complex>().unwrap(), Complex::new(0.0, -1.0));
        assert_eq!("2.5e-3j".parse::<Complex>().unwrap(), Complex::new(0.0, 2.5e-3));
        assert_eq!(" 1.5 + i ".parse::<Complex>().unwrap(), Complex::new(1.5, 1.0));
        assert_eq!("1e2 - 2*i".parse::<Complex>().unwrap(), Complex::new(100.0, -2.0));

        assert!("".parse::<Complex>().is_err());
        assert!("abc".parse::<Complex>().is_err());
        assert!("1 + 2".parse::<Complex>().is_err());
        assert!("1 + 2i + 3".parse::<Complex>().is_err());
    }

    #[test]
    fn test_display_parse_agree() {
        for z in [
            Complex::new(1.1, 2.0),
            Complex::new(2.3, -0.4),
            Complex::new(0.0, -7.25),
            Complex::new(-0.5, 1.0),
            Complex::from_real(42.0),
        ] {
            let back: Complex = z.to_string().parse().unwrap();
            assert_eq!(back.re, z.re);
            assert_eq!(back.im, z.im);
        }
    }

    #[test]
    fn test_serde() {
        let z = Complex::new(1.1, -2.0);
        let json = serde_json::to_string(&z).unwrap();
        assert_eq!(json, r#"{"re":1.1,"im":-2.0}"#);
        let back: Complex = serde_json::from_str(&json).unwrap();
        assert_eq!(back.re, 1.1);
        assert_eq!(back.im, -2.0);
    }
}
