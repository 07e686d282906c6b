use super::Complex;
use num_traits::Inv;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[inline]
fn add(a: Complex, b: Complex) -> Complex {
    Complex::new(a.re + b.re, a.im + b.im)
}

#[inline]
fn sub(a: Complex, b: Complex) -> Complex {
    Complex::new(a.re - b.re, a.im - b.im)
}

#[inline]
fn mul(a: Complex, b: Complex) -> Complex {
    Complex::new(a.re * b.re - a.im * b.im, a.re * b.im + a.im * b.re)
}

// No scaling: |b| near the overflow/underflow limits loses precision.
#[inline]
fn div(a: Complex, b: Complex) -> Complex {
    let den = b.re * b.re + b.im * b.im;
    let num = mul(a, b.conjugate());
    Complex::new(num.re / den, num.im / den)
}

#[inline]
fn add_real(a: Complex, b: f64) -> Complex {
    Complex::new(a.re + b, a.im)
}

#[inline]
fn sub_real(a: Complex, b: f64) -> Complex {
    Complex::new(a.re - b, a.im)
}

#[inline]
fn mul_real(a: Complex, b: f64) -> Complex {
    Complex::new(a.re * b, a.im * b)
}

#[inline]
fn div_real(a: Complex, b: f64) -> Complex {
    Complex::new(a.re / b, a.im / b)
}

macro_rules! impl_self_math_op(
    ($trt:ident, $mth:ident, $kernel:ident) => (
        impl $trt for Complex {
            type Output = Complex;

            #[inline]
            fn $mth(self, other: Complex) -> Complex {
                $kernel(self, other)
            }
        }

        impl $trt<&Complex> for Complex {
            type Output = Complex;

            #[inline]
            fn $mth(self, other: &Complex) -> Complex {
                $kernel(self, *other)
            }
        }

        impl $trt<Complex> for &Complex {
            type Output = Complex;

            #[inline]
            fn $mth(self, other: Complex) -> Complex {
                $kernel(*self, other)
            }
        }

        impl $trt<&Complex> for &Complex {
            type Output = Complex;

            #[inline]
            fn $mth(self, other: &Complex) -> Complex {
                $kernel(*self, *other)
            }
        }
    );
);

macro_rules! impl_real_math_op(
    ($trt:ident, $mth:ident, $kernel:ident, $lhs_kernel:ident) => (
        impl $trt<f64> for Complex {
            type Output = Complex;

            #[inline]
            fn $mth(self, other: f64) -> Complex {
                $kernel(self, other)
            }
        }

        impl $trt<&f64> for Complex {
            type Output = Complex;

            #[inline]
            fn $mth(self, other: &f64) -> Complex {
                $kernel(self, *other)
            }
        }

        impl $trt<f64> for &Complex {
            type Output = Complex;

            #[inline]
            fn $mth(self, other: f64) -> Complex {
                $kernel(*self, other)
            }
        }

        impl $trt<&f64> for &Complex {
            type Output = Complex;

            #[inline]
            fn $mth(self, other: &f64) -> Complex {
                $kernel(*self, *other)
            }
        }

        impl $trt<Complex> for f64 {
            type Output = Complex;

            #[inline]
            fn $mth(self, other: Complex) -> Complex {
                $lhs_kernel(Complex::from_real(self), other)
            }
        }

        impl $trt<&Complex> for f64 {
            type Output = Complex;

            #[inline]
            fn $mth(self, other: &Complex) -> Complex {
                $lhs_kernel(Complex::from_real(self), *other)
            }
        }

        impl $trt<Complex> for &f64 {
            type Output = Complex;

            #[inline]
            fn $mth(self, other: Complex) -> Complex {
                $lhs_kernel(Complex::from_real(*self), other)
            }
        }

        impl $trt<&Complex> for &f64 {
            type Output = Complex;

            #[inline]
            fn $mth(self, other: &Complex) -> Complex {
                $lhs_kernel(Complex::from_real(*self), *other)
            }
        }
    );
);

macro_rules! impl_math_assign_op(
    ($trt:ident, $mth:ident, $operator:tt) => (
        impl $trt for Complex {
            #[inline]
            fn $mth(&mut self, other: Complex) {
                *self = *self $operator other;
            }
        }

        impl $trt<&Complex> for Complex {
            #[inline]
            fn $mth(&mut self, other: &Complex) {
                *self = *self $operator *other;
            }
        }

        impl $trt<f64> for Complex {
            #[inline]
            fn $mth(&mut self, other: f64) {
                *self = *self $operator other;
            }
        }

        impl $trt<&f64> for Complex {
            #[inline]
            fn $mth(&mut self, other: &f64) {
                *self = *self $operator *other;
            }
        }
    );
);

impl_self_math_op!(Add, add, add);
impl_self_math_op!(Sub, sub, sub);
impl_self_math_op!(Mul, mul, mul);
impl_self_math_op!(Div, div, div);

impl_real_math_op!(Add, add, add_real, add);
impl_real_math_op!(Sub, sub, sub_real, sub);
impl_real_math_op!(Mul, mul, mul_real, mul);
impl_real_math_op!(Div, div, div_real, div);

impl_math_assign_op!(AddAssign, add_assign, +);
impl_math_assign_op!(SubAssign, sub_assign, -);
impl_math_assign_op!(MulAssign, mul_assign, *);
impl_math_assign_op!(DivAssign, div_assign, /);

impl Neg for Complex {
    type Output = Complex;

    #[inline]
    fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

impl Neg for &Complex {
    type Output = Complex;

    #[inline]
    fn neg(self) -> Complex {
        -*self
    }
}

impl Inv for Complex {
    type Output = Complex;

    fn inv(self) -> Complex {
        self.recip()
    }
}

impl Inv for &Complex {
    type Output = Complex;

    fn inv(self) -> Complex {
        self.recip()
    }
}

impl Sum for Complex {
    fn sum<I: Iterator<Item = Complex>>(iter: I) -> Self {
        iter.fold(Complex::ZERO, |acc, z| acc + z)
    }
}

impl<'a> Sum<&'a Complex> for Complex {
    fn sum<I: Iterator<Item = &'a Complex>>(iter: I) -> Self {
        iter.fold(Complex::ZERO, |acc, z| acc + z)
    }
}

impl Product for Complex {
    fn product<I: Iterator<Item = Complex>>(iter: I) -> Self {
        iter.fold(Complex::ONE, |acc, z| acc * z)
    }
}

impl<'a> Product<&'a Complex> for Complex {
    fn product<I: Iterator<Item = &'a Complex>>(iter: I) -> Self {
        iter.fold(Complex::ONE, |acc, z| acc * z)
    }
}
