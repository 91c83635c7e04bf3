//! Standard normal distribution functions.
//!
//! Generic over `T: Float` so the closed-form reference works for any
//! floating-point type.

use num_traits::Float;

/// Abramowitz and Stegun 7.1.26 coefficients a₁..a₅, lowest order first.
const ERFC_COEFFS: [f64; 5] = [
    0.254_829_592,
    -0.284_496_736,
    1.421_413_741,
    -1.453_152_027,
    1.061_405_429,
];
const ERFC_P: f64 = 0.327_591_1;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

#[inline]
pub(crate) fn constant<T: Float>(value: f64) -> T {
    // f64 literals always convert into a Float
    T::from(value).unwrap_or_else(T::nan)
}

/// Complementary error function, Abramowitz and Stegun formula 7.1.26.
///
/// Maximum absolute error 1.5e-7 for all x.
#[inline]
fn erfc_approx<T: Float>(x: T) -> T {
    let abs_x = x.abs();
    let t = T::one() / (T::one() + constant::<T>(ERFC_P) * abs_x);

    // Horner, highest order first
    let poly = ERFC_COEFFS
        .iter()
        .rev()
        .fold(T::zero(), |acc, &a| constant::<T>(a) + t * acc);
    let tail = t * poly * (-abs_x * abs_x).exp();

    if x < T::zero() {
        constant::<T>(2.0) - tail
    } else {
        tail
    }
}

/// Standard normal cumulative distribution function Φ(x) = ½·erfc(-x/√2).
///
/// # Examples
/// ```
/// use pricer_pricing::analytical::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// assert!(norm_cdf(3.0_f64) > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    constant::<T>(0.5) * erfc_approx(-x / constant::<T>(std::f64::consts::SQRT_2))
}

/// Standard normal probability density φ(x) = exp(-x²/2) / √(2π).
///
/// # Examples
/// ```
/// use pricer_pricing::analytical::norm_pdf;
///
/// assert!((norm_pdf(0.0_f64) - 0.3989422804).abs() < 1e-9);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    constant::<T>(FRAC_1_SQRT_2PI) * (-constant::<T>(0.5) * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_norm_cdf_reference_values() {
        // Tabulated Φ values
        assert_abs_diff_eq!(norm_cdf(1.0_f64), 0.841_344_746, epsilon = 2e-7);
        assert_abs_diff_eq!(norm_cdf(-1.0_f64), 0.158_655_254, epsilon = 2e-7);
        assert_abs_diff_eq!(norm_cdf(1.959_963_985_f64), 0.975, epsilon = 2e-7);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        for &x in &[0.1_f64, 0.5, 1.3, 2.7, 4.0] {
            assert_abs_diff_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_norm_pdf_values() {
        assert_abs_diff_eq!(norm_pdf(1.0_f64), 0.241_970_724_5, epsilon = 1e-9);
        assert_abs_diff_eq!(norm_pdf(2.0_f64), norm_pdf(-2.0_f64), epsilon = 1e-15);
    }

    #[test]
    fn test_f32_support() {
        assert!((norm_cdf(0.0_f32) - 0.5).abs() < 1e-6);
    }
}
