//! Double-precision complex numbers and the elementary function suite over
//! them: arithmetic, exponentials and logarithms, circular and hyperbolic
//! functions, and their inverses on principal branches.
//!
//! ```
//! use cplxkit::prelude::*;
//!
//! let z = Complex::new(1.1, 2.0);
//! let w = z.asin().sin();
//! assert!(w.equals(&z, 1e-12));
//! assert_eq!(cmath::cos(z), z.cos());
//! ```

pub mod cmath;
pub mod complex;
pub mod consts;
pub mod convert;
pub mod error;
pub mod numeric;
pub mod prelude;
pub mod util;

pub use complex::Complex;
pub use error::LossyCastError;

/// Create a **[`Complex`]** from its real and (optional) imaginary parts.
///
/// ```
/// use cplxkit::cplx;
/// let z = cplx!(3.0, -4.0);
/// assert_eq!(z.modulus(), 5.0);
///
/// let r = cplx!(2.5);
/// assert_eq!(r.im, 0.0);
/// ```
///
/// A bracketed list builds a `Vec<Complex>` from `(re, im)` pairs.
///
/// ```
/// use cplxkit::cplx;
/// let v = cplx![(1.0, 2.0), (3.0, 4.0)];
/// assert_eq!(v.len(), 2);
/// ```
#[macro_export]
macro_rules! cplx {
    ($(($re:expr, $im:expr)),+ $(,)?) => {
        vec![$($crate::complex::Complex::new($re, $im),)+]
    };
    ($re:expr, $im:expr $(,)?) => {
        $crate::complex::Complex::new($re, $im)
    };
    ($re:expr $(,)?) => {
        $crate::complex::Complex::from_real($re)
    };
}
