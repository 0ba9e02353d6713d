use num_traits::Float;
use crate::solver::CutStatus;
use crate::EllCalcCore;

/// Cut classification
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// Classifies a cut offset against the volume proxy \\(\tau^2\\) and, when the
/// cut is usable, derives the update coefficients through [`EllCalcCore`]:
/// * an offset beyond \\(+\tau\\) misses the space entirely ([`CutStatus::NoSoln`]),
/// * an offset too shallow to support a smaller ellipsoid leaves the space
///   untouched ([`CutStatus::NoEffect`]),
/// * anything else shrinks ([`CutStatus::Success`]).
#[derive(Debug, Clone)]
pub struct EllCalc<F: Float>
{
    /// Whether parallel cut pairs are honored; when `false` any parallel cut
    /// degrades to the single cut on its first offset.
    pub use_parallel_cut: bool,

    n_f: F,
    helper: EllCalcCore<F>,
}

impl<F: Float> EllCalc<F>
{
    /// Creates an instance for dimension `ndim`, which shall be at least 2.
    pub fn new(ndim: usize) -> Self
    {
        EllCalc {
            use_parallel_cut: true,
            n_f: F::from(ndim).unwrap(),
            helper: EllCalcCore::new(ndim),
        }
    }

    /// Classifies the single cut \\(g^T (x - x_c) + \beta \le 0\\)
    /// and calculates \\((\varrho, \sigma, \delta)\\).
    ///
    /// \\(\beta = 0\\) flows through the same expressions and reproduces the
    /// central-cut coefficients exactly.
    pub fn calc_single_cut(&self, beta: F, tsq: F) -> (CutStatus, (F, F, F))
    {
        let f0 = F::zero();
        let f1 = F::one();

        let tau = tsq.sqrt();
        if tau < beta {
            return (CutStatus::NoSoln, (f0, f0, f0)); // no sol'n
        }
        let eta = tau + self.n_f * beta;
        if eta <= f0 {
            return (CutStatus::NoEffect, (f0, f0, f1)); // no effect
        }
        (CutStatus::Success, self.helper.calc_bias_cut(beta, tau, eta))
    }

    /// Classifies the parallel cut pair
    ///
    /// \\[
    /// g^T (x - x_c) + \beta_0 \le 0, \qquad
    /// g^T (x - x_c) + \beta_1 \ge 0,
    /// \\]
    ///
    /// and calculates \\((\varrho, \sigma, \delta)\\).
    ///
    /// The pair degrades to the single cut on \\(\beta_0\\) when the second
    /// half-space carries no information (\\(\beta_1 \ge \tau\\) or
    /// \\(\beta_1 \le 0\\)), when the slab has zero width
    /// (\\(\beta_0 = \beta_1\\), where the general formula is singular), or
    /// when parallel cuts are disabled.
    pub fn calc_parallel(&self, beta0: F, beta1: F, tsq: F) -> (CutStatus, (F, F, F))
    {
        let f0 = F::zero();
        let f1 = F::one();

        if beta1 < beta0 {
            return (CutStatus::NoSoln, (f0, f0, f0)); // no sol'n
        }
        if beta0 == beta1 || beta1 <= f0 || !self.use_parallel_cut || tsq <= beta1 * beta1 {
            return self.calc_single_cut(beta0, tsq);
        }
        let b0b1 = beta0 * beta1;
        let eta = tsq + self.n_f * b0b1;
        if eta <= f0 {
            return (CutStatus::NoEffect, (f0, f0, f1)); // no effect
        }
        (CutStatus::Success, self.helper.calc_parallel_cut(beta0, beta1, tsq, b0b1, eta))
    }
}

//

#[cfg(test)]
use float_eq::assert_float_eq;

#[test]
fn test_single_cut_status()
{
    let calc = EllCalc::<f64>::new(4);
    let (status, _) = calc.calc_single_cut(0.11, 0.01);
    assert_eq!(status, CutStatus::NoSoln);
    let (status, _) = calc.calc_single_cut(0.01, 0.01);
    assert_eq!(status, CutStatus::Success);
    let (status, _) = calc.calc_single_cut(-0.05, 0.01);
    assert_eq!(status, CutStatus::NoEffect);

    let (status, (rho, sigma, delta)) = calc.calc_single_cut(0.05, 0.01);
    assert_eq!(status, CutStatus::Success);
    assert_float_eq!(rho, 0.06, abs <= 1e-14);
    assert_float_eq!(sigma, 0.8, abs <= 1e-14);
    assert_float_eq!(delta, 0.8, abs <= 1e-14);
}

#[test]
fn test_parallel_status()
{
    let calc = EllCalc::<f64>::new(4);
    let (status, _) = calc.calc_parallel(0.07, 0.03, 0.01);
    assert_eq!(status, CutStatus::NoSoln);
    let (status, _) = calc.calc_parallel(-0.04, 0.0625, 0.01);
    assert_eq!(status, CutStatus::NoEffect);

    let (status, (rho, sigma, delta)) = calc.calc_parallel(0.01, 0.04, 0.01);
    assert_eq!(status, CutStatus::Success);
    assert_float_eq!(rho, 0.0232, abs <= 1e-14);
    assert_float_eq!(sigma, 0.928, abs <= 1e-14);
    assert_float_eq!(delta, 1.232, abs <= 1e-14);
}

#[test]
fn test_parallel_beyond_radius()
{
    // a far-side second offset degrades to the single cut on beta0
    let calc = EllCalc::<f64>::new(4);
    let (status, coeffs) = calc.calc_parallel(0.05, 0.11, 0.01);
    let (status_s, coeffs_s) = calc.calc_single_cut(0.05, 0.01);
    assert_eq!(status, status_s);
    assert_eq!(coeffs, coeffs_s);
    assert_eq!(status, CutStatus::Success);
}

#[test]
fn test_parallel_zero_width()
{
    // a zero-width slab produces the same update as the single cut
    let calc = EllCalc::<f64>::new(4);
    let (status, coeffs) = calc.calc_parallel(0.05, 0.05, 0.01);
    let (status_s, coeffs_s) = calc.calc_single_cut(0.05, 0.01);
    assert_eq!(status, status_s);
    assert_eq!(coeffs, coeffs_s);
}

#[test]
fn test_parallel_disabled()
{
    let mut calc = EllCalc::<f64>::new(4);
    calc.use_parallel_cut = false;
    let (status, coeffs) = calc.calc_parallel(0.01, 0.04, 0.01);
    let (status_s, coeffs_s) = calc.calc_single_cut(0.01, 0.01);
    assert_eq!(status, status_s);
    assert_eq!(coeffs, coeffs_s);
}
