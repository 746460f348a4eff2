//! f(x) = cos(e^x) / sin(ln x), the function whose maximum the genetic search looks for.
//!
//! No guarding against the singular points: x <= 0 gives NaN (ln undefined), x = 1 and the
//! zeros of sin(ln x) divide by zero. Whatever IEEE-754 arithmetic yields is returned as is.
use nalgebra::DVector;

pub const X_MIN: f64 = 2.0;
pub const X_MAX: f64 = 4.0;
/// number of points on the reference curve
pub const N_CURVE_POINTS: usize = 400;

/// scalar evaluation
pub fn target_function(x: f64) -> f64 {
    let numerator = x.exp().cos();
    let denominator = x.ln().sin();
    numerator / denominator
}

/// vectorized evaluation, same order and length as `xs`
pub fn target_function_vec(xs: &DVector<f64>) -> DVector<f64> {
    xs.map(target_function)
}

/// `n` evenly spaced values from `start` to `end`, both endpoints included exactly
pub fn linspace(start: f64, end: f64, n: usize) -> DVector<f64> {
    match n {
        0 => DVector::zeros(0),
        1 => DVector::from_element(1, start),
        _ => {
            let step = (end - start) / (n - 1) as f64;
            DVector::from_fn(n, |i, _| {
                if i == n - 1 {
                    end
                } else {
                    start + step * i as f64
                }
            })
        }
    }
}

/// x-range over which the function is plotted and searched
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Default for Domain {
    fn default() -> Self {
        Domain {
            min: X_MIN,
            max: X_MAX,
        }
    }
}

impl Domain {
    pub fn new(min: f64, max: f64) -> Self {
        Domain { min, max }
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// nearest point of the domain; NaN goes to `min`
    pub fn clamp(&self, x: f64) -> f64 {
        if x.is_nan() || x < self.min {
            self.min
        } else if x > self.max {
            self.max
        } else {
            x
        }
    }

    /// uniform sampling of the domain and f at every sample: (x, f(x))
    pub fn reference_curve(&self, n_points: usize) -> (DVector<f64>, DVector<f64>) {
        let x = linspace(self.min, self.max, n_points);
        let y = target_function_vec(&x);
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_matches_closed_form() {
        for &x in &[2.0, 2.5, 3.0, 3.14, 3.9, 4.0, 0.5, 10.0] {
            let expected = f64::cos(f64::exp(x)) / f64::sin(f64::ln(x));
            assert_relative_eq!(target_function(x), expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_known_value() {
        // e^2 = 7.389056..., ln 2 = 0.693147...
        let expected = 7.38905609893065_f64.cos() / 0.6931471805599453_f64.sin();
        assert_relative_eq!(target_function(2.0), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_deterministic() {
        let a = target_function(3.3);
        let b = target_function(3.3);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_singular_points_propagate() {
        assert!(target_function(0.0).is_nan() || target_function(0.0).is_infinite());
        assert!(target_function(-1.0).is_nan());
        // ln(1) = 0, sin(0) = 0
        assert!(!target_function(1.0).is_finite());
    }

    #[test]
    fn test_vectorized_matches_scalar() {
        let xs = DVector::from_vec(vec![2.0, 2.75, 3.5, 4.0]);
        let ys = target_function_vec(&xs);
        assert_eq!(ys.len(), xs.len());
        for i in 0..xs.len() {
            assert_eq!(ys[i], target_function(xs[i]));
        }
    }

    #[test]
    fn test_linspace_endpoints() {
        let x = linspace(2.0, 4.0, 400);
        assert_eq!(x.len(), 400);
        assert_eq!(x[0], 2.0);
        assert_eq!(x[399], 4.0);
        for i in 1..x.len() {
            assert!(x[i] > x[i - 1]);
        }
        assert_relative_eq!(x[1] - x[0], 2.0 / 399.0, epsilon = 1e-12);
    }

    #[test]
    fn test_linspace_degenerate() {
        assert_eq!(linspace(2.0, 4.0, 0).len(), 0);
        assert_eq!(linspace(2.0, 4.0, 1)[0], 2.0);
    }

    #[test]
    fn test_reference_curve() {
        let domain = Domain::default();
        let (x, y) = domain.reference_curve(N_CURVE_POINTS);
        assert_eq!(x.len(), 400);
        assert_eq!(y.len(), 400);
        assert_eq!(x[0], X_MIN);
        assert_eq!(x[399], X_MAX);
        // sin(ln x) stays in [0.63, 0.99] on [2, 4], so the curve is finite everywhere
        assert!(y.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_domain_clamp() {
        let domain = Domain::default();
        assert_eq!(domain.clamp(1.0), 2.0);
        assert_eq!(domain.clamp(5.0), 4.0);
        assert_eq!(domain.clamp(3.0), 3.0);
        assert_eq!(domain.clamp(f64::NAN), 2.0);
        assert_eq!(domain.clamp(f64::INFINITY), 4.0);
        assert_eq!(domain.width(), 2.0);
    }
}
