use num_traits::Float;
use daen_core::solver::{Cut, OracleOptim, OracleQ};

/// Oracle for a profit maximization problem
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// This example is taken from [Aliabadi and Salahi, 2013]:
///
/// \\[
/// \begin{array}{ll}
/// {\rm maximize} & p (A x_1^{\alpha} x_2^{\beta}) - v_1 x_1 - v_2 x_2 \\\\
/// {\rm subject \ to} & x_1 \le k
/// \end{array}
/// \\]
///
/// where \\(p (A x_1^{\alpha} x_2^{\beta})\\) is the Cobb-Douglas production
/// function: \\(p\\) the market price per unit, \\(A\\) the scale of
/// production, \\(\alpha, \beta\\) the output elasticities, \\(x\\) the input
/// quantity, \\(v\\) the output price and \\(k\\) a constant restricting the
/// quantity of \\(x_1\\). The oracle assesses in the log-scaled variables
/// \\(y = \log x\\), where the problem is convex.
pub struct ProfitOracle<F: Float>
{
    log_p_scale: F,
    log_limit: F,
    price_out: Vec<F>,
    elasticities: Vec<F>,
}

impl<F: Float> ProfitOracle<F>
{
    /// Creates an instance.
    ///
    /// * `params` is the triple of market unit price, production scale and
    ///   \\(x_1\\)-limit \\((p, A, k)\\).
    /// * `elasticities` is the pair of output elasticities \\((\alpha, \beta)\\).
    /// * `price_out` is the pair of output prices \\((v_1, v_2)\\).
    pub fn new(params: (F, F, F), elasticities: &[F], price_out: &[F]) -> Self
    {
        let (unit_price, scale, limit) = params;

        ProfitOracle {
            log_p_scale: (unit_price * scale).ln(),
            log_limit: limit.ln(),
            price_out: price_out.to_vec(),
            elasticities: elasticities.to_vec(),
        }
    }
}

impl<F: Float> OracleOptim<F> for ProfitOracle<F>
{
    type CutChoice = F;

    fn assess_optim(&mut self, y: &[F], gamma: &mut F) -> (Cut<F, F>, bool)
    {
        let f0 = F::zero();
        let f1 = F::one();

        let fj = y[0] - self.log_limit;
        if fj > f0 {
            return ((vec![f1, f0], fj), false);
        }

        let mut log_cobb = self.log_p_scale;
        for i in 0.. self.elasticities.len() {
            log_cobb = log_cobb + self.elasticities[i] * y[i];
        }
        let q: Vec<F> = (0.. self.price_out.len())
            .map(|i| self.price_out[i] * y[i].exp())
            .collect();
        let mut vx = f0;
        for qi in &q {
            vx = vx + *qi;
        }

        let fj = (*gamma + vx).ln() - log_cobb;
        if fj >= f0 {
            let te = *gamma + vx;
            let g = (0.. q.len()).map(|i| q[i] / te - self.elasticities[i]).collect();
            return ((g, fj), false);
        }

        *gamma = log_cobb.exp() - vx;
        let te = *gamma + vx;
        let g = (0.. q.len()).map(|i| q[i] / te - self.elasticities[i]).collect();
        ((g, f0), true)
    }
}

/// Oracle for the profit maximization problem, robust variant
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// As [`ProfitOracle`], but the elasticities, price, limit and output prices
/// carry interval uncertainties \\(\pm e\\); each assessment evaluates the
/// worst-case elasticities for the sign of the query point.
pub struct ProfitOracleRb<F: Float>
{
    uie: Vec<F>,
    elasticities: Vec<F>,
    omega: ProfitOracle<F>,
}

impl<F: Float> ProfitOracleRb<F>
{
    /// Creates an instance.
    ///
    /// * `params` and `price_out` as [`ProfitOracle::new`].
    /// * `e` is the elasticity uncertainty, `e3` the price/limit uncertainty.
    pub fn new(params: (F, F, F), elasticities: &[F], price_out: &[F], e: &[F], e3: F) -> Self
    {
        let (unit_price, scale, limit) = params;
        let price_out_rb: Vec<F> = price_out.iter().map(|&v| v + e3).collect();

        ProfitOracleRb {
            uie: e.to_vec(),
            elasticities: elasticities.to_vec(),
            omega: ProfitOracle::new((unit_price - e3, scale, limit - e3), elasticities, &price_out_rb),
        }
    }
}

impl<F: Float> OracleOptim<F> for ProfitOracleRb<F>
{
    type CutChoice = F;

    fn assess_optim(&mut self, y: &[F], gamma: &mut F) -> (Cut<F, F>, bool)
    {
        let f0 = F::zero();

        for i in 0.. self.uie.len() {
            let delta = if y[i] > f0 {-self.uie[i]} else {self.uie[i]};
            self.omega.elasticities[i] = self.elasticities[i] + delta;
        }
        self.omega.assess_optim(y, gamma)
    }
}

/// Oracle for the profit maximization problem, discrete variant
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// As [`ProfitOracle`], but the input quantities must be integers. Each
/// assessment rounds the query point onto the integer lattice (in the
/// original scale), evaluates the continuous oracle there and translates the
/// cut back to the query point.
pub struct ProfitOracleQ<F: Float>
{
    omega: ProfitOracle<F>,
    yd: Vec<F>,
}

impl<F: Float> ProfitOracleQ<F>
{
    /// Creates an instance; arguments as [`ProfitOracle::new`].
    pub fn new(params: (F, F, F), elasticities: &[F], price_out: &[F]) -> Self
    {
        ProfitOracleQ {
            omega: ProfitOracle::new(params, elasticities, price_out),
            yd: vec![F::zero(); elasticities.len()],
        }
    }
}

impl<F: Float> OracleQ<F> for ProfitOracleQ<F>
{
    type CutChoice = F;

    fn assess_q(&mut self, y: &[F], gamma: &mut F, retry: bool) -> (Cut<F, F>, bool, Vec<F>, bool)
    {
        if !retry {
            for i in 0.. y.len() {
                let mut x = y[i].exp().round();
                if x == F::zero() {
                    x = F::one(); // nearest integer above zero
                }
                self.yd[i] = x.ln();
            }
        }
        let ((g, mut h), shrunk) = self.omega.assess_optim(&self.yd, gamma);
        for i in 0.. y.len() {
            h = h + g[i] * (self.yd[i] - y[i]);
        }
        ((g, h), shrunk, self.yd.clone(), false)
    }
}
