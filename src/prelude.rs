//! cplxkit prelude.
//!
//! This module contains the most used types, traits, functions, and macros
//! that you can import easily as a group.
//!
//! ```
//! use cplxkit::prelude::*;
//!
//! let z: Complex = cplx!(0.5, -1.5);
//! assert_eq!(f64::try_from(z.conj() * z), Ok(2.5));
//! ```

#[doc(no_inline)]
pub use crate::complex::Complex;

#[doc(no_inline)]
pub use crate::cmath;

#[doc(no_inline)]
pub use crate::consts::{MathConst, DEFAULT_TOLERANCE};

#[doc(no_inline)]
pub use crate::error::LossyCastError;

#[doc(no_inline)]
pub use crate::numeric::Scalar;

#[doc(no_inline)]
pub use crate::cplx;

#[doc(no_inline)]
pub use num_traits::{Inv, One, Pow, Zero};
