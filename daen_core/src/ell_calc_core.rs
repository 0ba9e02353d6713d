use num_traits::Float;

/// Cut-update algebra
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// The pure arithmetic mapping a cut offset and the volume proxy
/// \\(\tau^2 = g^T (\kappa Q) g\\) to the update coefficients
/// \\((\varrho, \sigma, \delta)\\): center-shift scale, rank-one coefficient
/// and volume-shrink factor of the minimum-volume ellipsoid containing the
/// intersection of the current one with the cut's half-space.
/// Dimension-only constants are precomputed at construction;
/// classification of invalid offsets is the caller's concern
/// (see [`crate::EllCalc`]).
#[derive(Debug, Clone)]
pub struct EllCalcCore<F: Float>
{
    n_f: F,
    n_plus_1: F,
    half_n: F,
    inv_n: F,
    cst1: F,
    cst2: F,
}

impl<F: Float> EllCalcCore<F>
{
    /// Creates an instance for dimension `ndim`, which shall be at least 2.
    pub fn new(ndim: usize) -> Self
    {
        assert!(ndim >= 2);

        let f1 = F::one();
        let f2 = f1 + f1;
        let n_f = F::from(ndim).unwrap();
        let n_plus_1 = n_f + f1;
        let n_sq = n_f * n_f;

        EllCalcCore {
            n_f,
            n_plus_1,
            half_n: n_f / f2,
            inv_n: f1 / n_f,
            cst1: n_sq / (n_sq - f1),
            cst2: f2 / n_plus_1,
        }
    }

    /// Calculates \\((\varrho, \sigma, \delta)\\) under the parallel cuts
    ///
    /// \\[
    /// g^T (x - x_c) + \beta_0 \le 0, \qquad
    /// g^T (x - x_c) + \beta_1 \ge 0.
    /// \\]
    ///
    /// With \\(\bar\beta = (\beta_0 + \beta_1)/2\\),
    /// \\(h = (\tau^2 + \beta_0\beta_1)/2 + n \bar\beta^2\\) and
    /// \\(k = h + \sqrt{h^2 - (n+1)\eta\bar\beta^2}\\):
    /// \\(\sigma = \eta/k\\), \\(\varrho = \bar\beta\sigma\\),
    /// \\(\delta\tau^2 = \tau^2 + \frac{\eta}{k-\eta}(\bar\beta^2\sigma - \beta_0\beta_1)\\).
    ///
    /// * `b0b1` shall be \\(\beta_0 \beta_1\\) and
    ///   `eta` shall be \\(\eta = \tau^2 + n \beta_0 \beta_1\\),
    ///   both already computed by the caller's classification.
    pub fn calc_parallel_cut(&self, beta0: F, beta1: F, tsq: F, b0b1: F, eta: F) -> (F, F, F)
    {
        let f1 = F::one();
        let f2 = f1 + f1;

        let bavg = (beta0 + beta1) / f2;
        let bavgsq = bavg * bavg;
        let h = (tsq + b0b1) / f2 + self.n_f * bavgsq;
        let k = h + (h * h - self.n_plus_1 * eta * bavgsq).sqrt();
        let inv_mu_plus_1 = eta / k;
        let inv_mu = eta / (k - eta);
        let rho = bavg * inv_mu_plus_1;
        let sigma = inv_mu_plus_1;
        let delta = (tsq + inv_mu * (bavgsq * inv_mu_plus_1 - b0b1)) / tsq;
        (rho, sigma, delta)
    }

    /// Calculates \\((\varrho, \sigma, \delta)\\) under the parallel cuts with
    /// \\(\beta_0 = 0\\)
    ///
    /// \\[
    /// g^T (x - x_c) \le 0, \qquad
    /// g^T (x - x_c) + \beta_1 \ge 0.
    /// \\]
    ///
    /// This is the \\(\beta_0 \to 0\\) limit of [`EllCalcCore::calc_parallel_cut`],
    /// kept in closed form: with \\(\alpha_1^2 = \beta_1^2/\tau^2\\),
    /// \\(k = \frac{n}{2}\alpha_1^2\\) and \\(r = k + \sqrt{k^2 + 1 - \alpha_1^2}\\):
    /// \\(\varrho = \beta_1/(r+1)\\), \\(\sigma = 2/(r+1)\\),
    /// \\(\delta = r/(r - \frac1n)\\).
    pub fn calc_parallel_central_cut(&self, beta1: F, tsq: F) -> (F, F, F)
    {
        let f1 = F::one();
        let f2 = f1 + f1;

        let b1sq = beta1 * beta1;
        let a1sq = b1sq / tsq;
        let k = self.half_n * a1sq;
        let r = k + (f1 - a1sq + k * k).sqrt();
        let r_plus_1 = r + f1;
        (beta1 / r_plus_1, f2 / r_plus_1, r / (r - self.inv_n))
    }

    /// Calculates \\((\varrho, \sigma, \delta)\\) under the deep cut
    ///
    /// \\[
    /// g^T (x - x_c) + \beta \le 0.
    /// \\]
    ///
    /// \\(\varrho = \frac{\eta}{n+1}\\),
    /// \\(\sigma = \frac{2\varrho}{\tau+\beta}\\),
    /// \\(\delta = \frac{n^2}{n^2-1}\frac{\tau^2-\beta^2}{\tau^2}\\).
    ///
    /// * `eta` shall be \\(\eta = \tau + n \beta\\),
    ///   already computed by the caller's classification.
    pub fn calc_bias_cut(&self, beta: F, tau: F, eta: F) -> (F, F, F)
    {
        let alpha = beta / tau;
        let sigma = self.cst2 * eta / (tau + beta);
        let rho = eta / self.n_plus_1;
        let delta = self.cst1 * (F::one() - alpha * alpha);
        (rho, sigma, delta)
    }

    /// Calculates \\((\varrho, \sigma, \delta)\\) under the central cut
    ///
    /// \\[
    /// g^T (x - x_c) \le 0.
    /// \\]
    ///
    /// \\(\varrho = \frac{\tau}{n+1}\\), \\(\sigma = \frac{2}{n+1}\\),
    /// \\(\delta = \frac{n^2}{n^2-1}\\).
    /// Identical to [`EllCalcCore::calc_bias_cut`] evaluated at \\(\beta = 0\\).
    pub fn calc_central_cut(&self, tau: F) -> (F, F, F)
    {
        (tau / self.n_plus_1, self.cst2, self.cst1)
    }
}

//

#[cfg(test)]
use float_eq::assert_float_eq;

#[test]
fn test_calc_central_cut()
{
    let helper = EllCalcCore::<f64>::new(4);
    let (rho, sigma, delta) = helper.calc_central_cut(0.1);
    assert_float_eq!(rho, 0.02, abs <= 1e-14);
    assert_float_eq!(sigma, 0.4, abs <= 1e-14);
    assert_float_eq!(delta, 16. / 15., abs <= 1e-14);
}

#[test]
fn test_calc_bias_cut()
{
    let helper = EllCalcCore::<f64>::new(4);
    let (rho, sigma, delta) = helper.calc_bias_cut(0.05, 0.1, 0.1 + 4. * 0.05);
    assert_float_eq!(rho, 0.06, abs <= 1e-14);
    assert_float_eq!(sigma, 0.8, abs <= 1e-14);
    assert_float_eq!(delta, 0.8, abs <= 1e-14);
}

#[test]
fn test_calc_bias_cut_central_limit()
{
    // beta = 0 reproduces the central cut exactly
    let helper = EllCalcCore::<f64>::new(4);
    let (rho, sigma, delta) = helper.calc_bias_cut(0.0, 0.1, 0.1);
    let (rho_c, sigma_c, delta_c) = helper.calc_central_cut(0.1);
    assert_eq!(rho, rho_c);
    assert_eq!(sigma, sigma_c);
    assert_eq!(delta, delta_c);
}

#[test]
fn test_calc_parallel_cut()
{
    let helper = EllCalcCore::<f64>::new(4);
    let b0b1 = 0.01 * 0.04;
    let eta = 0.01 + 4. * b0b1;
    let (rho, sigma, delta) = helper.calc_parallel_cut(0.01, 0.04, 0.01, b0b1, eta);
    assert_float_eq!(rho, 0.0232, abs <= 1e-14);
    assert_float_eq!(sigma, 0.928, abs <= 1e-14);
    assert_float_eq!(delta, 1.232, abs <= 1e-14);
}

#[test]
fn test_calc_parallel_central_cut()
{
    let helper = EllCalcCore::<f64>::new(4);
    let (rho, sigma, delta) = helper.calc_parallel_central_cut(0.05, 0.01);
    assert_float_eq!(rho, 0.02, abs <= 1e-14);
    assert_float_eq!(sigma, 0.8, abs <= 1e-14);
    assert_float_eq!(delta, 1.2, abs <= 1e-14);
}

#[test]
fn test_calc_parallel_cut_central_limit()
{
    // the general formula at beta0 = 0 agrees with the closed-form limit
    let helper = EllCalcCore::<f64>::new(4);
    let (rho, sigma, delta) = helper.calc_parallel_cut(0.0, 0.05, 0.01, 0.0, 0.01);
    let (rho_c, sigma_c, delta_c) = helper.calc_parallel_central_cut(0.05, 0.01);
    assert_float_eq!(rho, rho_c, abs <= 1e-14);
    assert_float_eq!(sigma, sigma_c, abs <= 1e-14);
    assert_float_eq!(delta, delta_c, abs <= 1e-14);
}
