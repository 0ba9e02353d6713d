use alloc::vec;
use alloc::vec::Vec;
use num_traits::Float;
use crate::solver::{Cut, CutStatus, Space, SpaceUpdate};
use crate::{EllCalc, MatSq};

/// Ellipsoid search space, factored representation
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// Same contract as [`crate::Ell`], but the shape matrix is held through the
/// square-root-free Cholesky factorization of its inverse,
/// \\(Q^{-1} = L D L^T\\) (\\(L\\) unit lower triangular, \\(D\\) positive
/// diagonal), and never formed explicitly: products with \\(Q\\) become
/// triangular solves. The rank-one subtraction of an update becomes a
/// column-by-column modification of the factors, which keeps \\(L\\)
/// triangular and \\(D\\) positive over long runs where the plain
/// representation slowly loses symmetry.
///
/// Storage layout of `mq`: \\(L\\) is mirrored into the strict upper triangle
/// (`mq[(j, i)]` holds \\(L_{ij}\\) for \\(j < i\\)), \\(D^{-1}\\) sits on the
/// diagonal, and the strict lower triangle is scratch for the forward solve.
#[derive(Debug, Clone)]
pub struct EllStable<F: Float>
{
    mq: MatSq<F>,
    xc: Vec<F>,
    kappa: F,
    n: usize,
    tsq: F,
    helper: EllCalc<F>,
    inv_lg: Vec<F>,
    inv_d_inv_lg: Vec<F>,
    gg_t: Vec<F>,
    g_t: Vec<F>,
}

impl<F: Float> EllStable<F>
{
    fn from_parts(kappa: F, mq: MatSq<F>, xc: Vec<F>) -> Self
    {
        let n = xc.len();

        EllStable {
            mq,
            xc,
            kappa,
            n,
            tsq: F::zero(),
            helper: EllCalc::new(n),
            inv_lg: vec![F::zero(); n],
            inv_d_inv_lg: vec![F::zero(); n],
            gg_t: vec![F::zero(); n],
            g_t: vec![F::zero(); n],
        }
    }

    /// Creates an ellipsoid with shape \\(Q = {\bf diag}(val)\\), \\(\kappa = 1\\),
    /// centered at `xc` (\\(L = I\\), \\(D^{-1} = {\bf diag}(val)\\)).
    pub fn new(val: &[F], xc: Vec<F>) -> Self
    {
        assert_eq!(val.len(), xc.len());

        Self::from_parts(F::one(), MatSq::diag(val), xc)
    }

    /// Creates a ball of squared radius `alpha` (\\(Q = I\\), \\(\kappa = \alpha\\))
    /// centered at `xc`.
    pub fn new_with_scalar(alpha: F, xc: Vec<F>) -> Self
    {
        let n = xc.len();

        Self::from_parts(alpha, MatSq::eye(n), xc)
    }

    /// Enables or disables the parallel-cut update.
    pub fn set_use_parallel_cut(&mut self, value: bool)
    {
        self.helper.use_parallel_cut = value;
    }

    fn update_core<T>(&mut self, grad: &[F], strategy: T) -> CutStatus
    where T: FnOnce(&EllCalc<F>, F) -> (CutStatus, (F, F, F))
    {
        assert_eq!(grad.len(), self.n);

        let f0 = F::zero();
        let f1 = F::one();
        let n = self.n;

        // inv_lg = inv(L)*grad: (n-1)*n/2
        self.inv_lg.copy_from_slice(grad);
        for i in 1.. n {
            for j in 0.. i {
                // scratch kept for the rank-one downdate
                self.mq[(i, j)] = self.mq[(j, i)] * self.inv_lg[j];
                self.inv_lg[i] = self.inv_lg[i] - self.mq[(i, j)];
            }
        }

        // inv_d_inv_lg = inv(D)*inv(L)*grad: n
        for i in 0.. n {
            self.inv_d_inv_lg[i] = self.inv_lg[i] * self.mq[(i, i)];
        }

        // omega = grad'*Q*grad: n
        let mut omega = f0;
        for i in 0.. n {
            self.gg_t[i] = self.inv_lg[i] * self.inv_d_inv_lg[i];
            omega = omega + self.gg_t[i];
        }

        if omega <= f0 {
            return CutStatus::NoEffect;
        }

        let tsq = self.kappa * omega;
        let (status, (rho, sigma, delta)) = strategy(&self.helper, tsq);
        if status != CutStatus::Success {
            return status;
        }

        // center direction by the backward sweep over the factor rows,
        // damped through inv(D) on its way up: (n-1)*n/2
        self.g_t.copy_from_slice(&self.inv_d_inv_lg);
        for i in (1.. n).rev() {
            for j in i.. n {
                self.g_t[i - 1] = self.g_t[i - 1] - self.mq[(i, j)] * self.g_t[j];
            }
        }

        // rank-one downdate of the factors: 3*n + (n-1)*n/2
        let mu = sigma / (f1 - sigma);
        let mut oldt = omega / mu;
        let m = n - 1;
        for j in 0.. m {
            let t = oldt + self.gg_t[j];
            let beta2 = self.inv_d_inv_lg[j] / t;
            self.mq[(j, j)] = self.mq[(j, j)] * (oldt / t); // update inv(D)
            for l in j + 1.. n {
                self.mq[(j, l)] = self.mq[(j, l)] + beta2 * self.mq[(l, j)];
            }
            oldt = t;
        }
        let t = oldt + self.gg_t[m];
        self.mq[(m, m)] = self.mq[(m, m)] * (oldt / t); // update inv(D)

        self.kappa = self.kappa * delta;

        let r = rho / omega;
        for i in 0.. n {
            self.xc[i] = self.xc[i] - r * self.g_t[i];
        }

        self.tsq = tsq;
        CutStatus::Success
    }
}

impl<F: Float> Space<F> for EllStable<F>
{
    fn xc(&self) -> &[F]
    {
        &self.xc
    }

    fn set_xc(&mut self, xc: &[F])
    {
        self.xc.copy_from_slice(xc);
    }

    fn tsq(&self) -> F
    {
        self.tsq
    }
}

impl<F: Float> SpaceUpdate<F, F> for EllStable<F>
{
    fn update(&mut self, cut: &Cut<F, F>) -> CutStatus
    {
        let (grad, beta) = cut;
        let beta = *beta;

        self.update_core(grad, |calc, tsq| calc.calc_single_cut(beta, tsq))
    }
}

impl<F: Float> SpaceUpdate<F, (F, Option<F>)> for EllStable<F>
{
    fn update(&mut self, cut: &Cut<F, (F, Option<F>)>) -> CutStatus
    {
        let (grad, beta) = cut;
        let (beta0, beta1) = *beta;

        self.update_core(grad, |calc, tsq| match beta1 {
            Some(beta1) => calc.calc_parallel(beta0, beta1, tsq),
            None => calc.calc_single_cut(beta0, tsq),
        })
    }
}

//

#[cfg(test)]
use float_eq::assert_float_eq;

#[test]
fn test_central_cut_stable()
{
    let mut ellip = EllStable::new_with_scalar(0.01, vec![0.; 4]);
    let cut = (vec![0.5; 4], 0.0);
    assert_eq!(ellip.update(&cut), CutStatus::Success);
    assert_float_eq!(ellip.tsq(), 0.01, abs <= 1e-15);
    assert_float_eq!(ellip.xc()[1], -0.01, abs <= 1e-15);

    // the center steps into the cut half-space
    let mut g_dxc = 0.0;
    for v in ellip.xc() {
        g_dxc += 0.5 * v;
    }
    assert!(g_dxc < 0.0);
}

#[test]
fn test_bias_cut_stable()
{
    let mut ellip = EllStable::new_with_scalar(0.01, vec![0.; 4]);
    let cut = (vec![0.5; 4], 0.05);
    assert_eq!(ellip.update(&cut), CutStatus::Success);
    assert_float_eq!(ellip.tsq(), 0.01, abs <= 1e-15);
    assert_float_eq!(ellip.xc()[1], -0.03, abs <= 1e-15);
}

#[test]
fn test_shape_matches_plain_representation()
{
    // the factored shape walks the same volume-proxy trajectory as the
    // explicit one when fed the same cuts
    let mut plain = crate::Ell::new_with_scalar(100., vec![0.; 3]);
    let mut stable = EllStable::new_with_scalar(100., vec![0.; 3]);
    let cuts = [
        (vec![1., 0.5, -1.], 0.5),
        (vec![0., 1., 1.], 0.0),
        (vec![-1., 2., 0.5], 1.5),
        (vec![0.5, -0.5, 1.], 0.25),
    ];
    for cut in &cuts {
        assert_eq!(plain.update(cut), CutStatus::Success);
        assert_eq!(stable.update(cut), CutStatus::Success);
        assert_float_eq!(plain.tsq(), stable.tsq(), abs <= 1e-9);
    }
}

#[test]
fn test_zero_grad_stable()
{
    let mut ellip = EllStable::new_with_scalar(0.01, vec![1., 2., 3., 4.]);
    let cut = (vec![0.; 4], 0.05);
    assert_eq!(ellip.update(&cut), CutStatus::NoEffect);
    assert_eq!(ellip.tsq(), 0.0);
    assert_eq!(ellip.xc(), [1., 2., 3., 4.].as_ref());
}

#[test]
fn test_tsq_monotone_stable()
{
    let mut ellip = EllStable::new_with_scalar(100., vec![0.; 4]);
    let cut = (vec![1., 0.5, -0.25, 0.125], 0.01);
    assert_eq!(ellip.update(&cut), CutStatus::Success);
    let mut tsq_old = ellip.tsq();
    for _ in 0.. 20 {
        assert_eq!(ellip.update(&cut), CutStatus::Success);
        assert!(ellip.tsq() <= tsq_old + 1e-9);
        tsq_old = ellip.tsq();
    }
}
