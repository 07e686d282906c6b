use super::Complex;

// The hyperbolic functions are rotations of the circular ones:
// sinh(z) = -i sin(iz), cosh(z) = cos(iz), tanh(z) = -i tan(iz).

impl Complex {
    /// Multiply by `i` (a quarter turn), exact for finite values.
    #[inline]
    pub(crate) fn mul_i(&self) -> Self {
        Complex::new(-self.im, self.re)
    }

    /// Multiply by `-i`, exact for finite values.
    #[inline]
    pub(crate) fn mul_neg_i(&self) -> Self {
        Complex::new(self.im, -self.re)
    }

    /// Calculate hyperbolic sine
    pub fn sinh(&self) -> Self {
        self.mul_i().sin().mul_neg_i()
    }

    /// Calculate hyperbolic cosine
    pub fn cosh(&self) -> Self {
        self.mul_i().cos()
    }

    /// Calculate hyperbolic tangent
    pub fn tanh(&self) -> Self {
        self.mul_i().tan().mul_neg_i()
    }

    /// Calculate hyperbolic secant, 1 / cosh
    pub fn sech(&self) -> Self {
        self.cosh().recip()
    }

    /// Calculate hyperbolic cosecant, 1 / sinh
    pub fn csch(&self) -> Self {
        self.sinh().recip()
    }

    /// Calculate hyperbolic cotangent, cosh / sinh
    pub fn coth(&self) -> Self {
        self.cosh() / self.sinh()
    }
}
