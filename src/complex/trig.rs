use super::Complex;
use crate::consts::TAN_IM_SPLIT;

impl Complex {
    /// Calculate sine from self in radians
    pub fn sin(&self) -> Self {
        let (r, i) = (self.re, self.im);
        if i == 0.0 {
            Complex::new(r.sin(), 0.0)
        } else {
            Complex::new(r.sin() * i.cosh(), r.cos() * i.sinh())
        }
    }

    /// Calculate cosine from self in radians
    pub fn cos(&self) -> Self {
        let (r, i) = (self.re, self.im);
        if i == 0.0 {
            Complex::new(r.cos(), 0.0)
        } else {
            Complex::new(r.cos() * i.cosh(), r.sin() * (-i).sinh())
        }
    }

    /// Calculate sine & cosine from self in radians
    pub fn sin_cos(&self) -> (Self, Self) {
        (self.sin(), self.cos())
    }

    /// Calculate tangent from self in radians.
    ///
    /// For `|im| >= 1` the result is assembled from `e^-|im|` and `coth(im)`
    /// so that no intermediate grows with `sinh(im)`.
    pub fn tan(&self) -> Self {
        let (r, i) = (self.re, self.im);

        if i.abs() < TAN_IM_SPLIT {
            let d = r.cos().powi(2) + i.sinh().powi(2);
            Complex::new(0.5 * (2.0 * r).sin() / d, 0.5 * (2.0 * i).sinh() / d)
        } else {
            let u = (-i.abs()).exp();
            let c = 2.0 * u / (1.0 - u.powi(2));
            let s = c.powi(2);
            let d = 1.0 + r.cos().powi(2) * s;
            let t = 1.0 / i.tanh();
            Complex::new(0.5 * (2.0 * r).sin() * s / d, t / d)
        }
    }

    /// Calculate secant, 1 / cos
    pub fn sec(&self) -> Self {
        self.cos().recip()
    }

    /// Calculate cosecant, 1 / sin
    pub fn csc(&self) -> Self {
        self.sin().recip()
    }

    /// Calculate cotangent, cos / sin
    pub fn cot(&self) -> Self {
        self.cos() / self.sin()
    }
}
