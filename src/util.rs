use crate::complex::Complex;
use float_cmp::{approx_eq, F64Margin};

pub fn comp_f64(exemplar: &f64, calc: &f64, precision: F64Margin, test: &str, idx: &str) {
    assert!(
        approx_eq!(f64, *calc, *exemplar, precision),
        " Failed test {} at location {}\n  exemplar: {}\n      calc: {}",
        test,
        idx,
        exemplar,
        calc
    );
}

pub fn comp_complex(
    exemplar: &Complex,
    calc: &Complex,
    precision: F64Margin,
    test: &str,
    idx: &str,
) {
    comp_f64(
        &(exemplar.re),
        &(calc.re),
        precision,
        test,
        &(idx.to_owned() + ".re"),
    );
    comp_f64(
        &(exemplar.im),
        &(calc.im),
        precision,
        test,
        &(idx.to_owned() + ".im"),
    );
}

pub fn comp_vec_complex(exemplar: &[Complex], calc: &[Complex], precision: F64Margin, test: &str) {
    assert_eq!(
        exemplar.len(),
        calc.len(),
        " Failed test {}: length mismatch",
        test
    );
    for k in 0..calc.len() {
        comp_complex(
            &exemplar[k],
            &calc[k],
            precision,
            test,
            &format!("({})", k),
        );
    }
}

/// Compare two values with a margin relative to the exemplar's modulus,
/// for checks where absolute error grows with magnitude.
pub fn comp_complex_rel(exemplar: &Complex, calc: &Complex, rel: f64, test: &str) {
    let scale = exemplar.modulus().max(1.0);
    let err = (exemplar - calc).modulus();
    assert!(
        err <= rel * scale,
        " Failed test {}\n  exemplar: {}\n      calc: {}\n relative error: {:e}",
        test,
        exemplar,
        calc,
        err / scale
    );
}

#[cfg(test)]
mod util_tests {
    use super::*;

    const MARGIN: F64Margin = F64Margin {
        epsilon: 1e-12,
        ulps: 4,
    };

    #[test]
    fn test_comp_passes_within_margin() {
        comp_f64(&1.0, &(1.0 + 1e-14), MARGIN, "f64", "0");
        comp_complex(
            &Complex::new(1.0, -2.0),
            &Complex::new(1.0, -2.0 + 1e-14),
            MARGIN,
            "complex",
            "0",
        );
        comp_vec_complex(
            &[Complex::ONE, Complex::I],
            &[Complex::ONE, Complex::I],
            MARGIN,
            "vec",
        );
        comp_complex_rel(&Complex::new(1e6, 0.0), &Complex::new(1e6 + 1e-5, 0.0), 1e-9, "rel");
    }

    #[test]
    #[should_panic(expected = "location 3.im")]
    fn test_comp_reports_location() {
        comp_complex(
            &Complex::new(1.0, 1.0),
            &Complex::new(1.0, 1.1),
            MARGIN,
            "complex",
            "3",
        );
    }
}
