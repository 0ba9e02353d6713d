use alloc::vec;
use alloc::vec::Vec;
use num_traits::Float;
use crate::solver::{Cut, CutStatus, Space, SpaceUpdate};
use crate::{EllCalc, MatSq};

/// Ellipsoid search space
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// \\[
/// E(x_c, Q, \kappa) = \left\lbrace x \ \middle|\ (x - x_c)^T (\kappa Q)^{-1} (x - x_c) \le 1 \right\rbrace
/// \\]
///
/// \\(Q\\) is kept symmetric but there is no promise of positive definiteness.
/// The scalar \\(\kappa\\) is factored out of \\(Q\\) so that the volume-shrink
/// factor of an update scales a single scalar instead of rewriting the matrix;
/// setting [`Ell::no_defer_trick`] folds \\(\kappa\\) back into \\(Q\\) after
/// every update instead.
#[derive(Debug, Clone)]
pub struct Ell<F: Float>
{
    /// Fold \\(\kappa\\) into \\(Q\\) eagerly rather than deferring it.
    pub no_defer_trick: bool,

    mq: MatSq<F>,
    xc: Vec<F>,
    kappa: F,
    n: usize,
    tsq: F,
    helper: EllCalc<F>,
    grad_t: Vec<F>,
}

impl<F: Float> Ell<F>
{
    fn from_parts(kappa: F, mq: MatSq<F>, xc: Vec<F>) -> Self
    {
        let n = xc.len();

        Ell {
            no_defer_trick: false,
            mq,
            xc,
            kappa,
            n,
            tsq: F::zero(),
            helper: EllCalc::new(n),
            grad_t: vec![F::zero(); n],
        }
    }

    /// Creates an ellipsoid with shape \\(Q = {\bf diag}(val)\\), \\(\kappa = 1\\),
    /// centered at `xc`.
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
        let n = self.n;

        // grad_t = Q*grad and omega = grad'*Q*grad: n^2
        let mut omega = f0;
        for i in 0.. n {
            let mut s = f0;
            for j in 0.. n {
                s = s + self.mq[(i, j)] * grad[j];
            }
            self.grad_t[i] = s;
            omega = omega + s * grad[i];
        }

        if omega <= f0 {
            return CutStatus::NoEffect;
        }

        let tsq = self.kappa * omega;
        let (status, (rho, sigma, delta)) = strategy(&self.helper, tsq);
        if status != CutStatus::Success {
            return status;
        }

        let r = rho / omega;
        for i in 0.. n {
            self.xc[i] = self.xc[i] - r * self.grad_t[i];
        }

        // rank-one update, lower triangle computed and mirrored: n*(n+1)/2
        let s_o = sigma / omega;
        for i in 0.. n {
            let sg = s_o * self.grad_t[i];
            for j in 0.. i {
                self.mq[(i, j)] = self.mq[(i, j)] - sg * self.grad_t[j];
                self.mq[(j, i)] = self.mq[(i, j)];
            }
            self.mq[(i, i)] = self.mq[(i, i)] - sg * self.grad_t[i];
        }

        self.kappa = self.kappa * delta;

        if self.no_defer_trick {
            self.mq.scale(self.kappa);
            self.kappa = F::one();
        }

        self.tsq = tsq;
        CutStatus::Success
    }
}

impl<F: Float> Space<F> for Ell<F>
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

impl<F: Float> SpaceUpdate<F, F> for Ell<F>
{
    fn update(&mut self, cut: &Cut<F, F>) -> CutStatus
    {
        let (grad, beta) = cut;
        let beta = *beta;

        self.update_core(grad, |calc, tsq| calc.calc_single_cut(beta, tsq))
    }
}

impl<F: Float> SpaceUpdate<F, (F, Option<F>)> for Ell<F>
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
fn test_central_cut()
{
    let mut ellip = Ell::new_with_scalar(0.01, vec![0.; 4]);
    assert!(!ellip.no_defer_trick);
    let cut = (vec![0.5; 4], 0.0);
    assert_eq!(ellip.update(&cut), CutStatus::Success);
    assert_float_eq!(ellip.tsq(), 0.01, abs <= 1e-15);
    assert_float_eq!(ellip.xc()[0], -0.01, abs <= 1e-15);
}

#[test]
fn test_bias_cut()
{
    let mut ellip = Ell::new_with_scalar(0.01, vec![0.; 4]);
    let cut = (vec![0.5; 4], 0.05);
    assert_eq!(ellip.update(&cut), CutStatus::Success);
    assert_float_eq!(ellip.tsq(), 0.01, abs <= 1e-15);
    assert_float_eq!(ellip.xc()[0], -0.03, abs <= 1e-15);
}

#[test]
fn test_no_soln()
{
    let mut ellip = Ell::new_with_scalar(0.01, vec![0.; 4]);
    let cut = (vec![0.5; 4], 0.11);
    assert_eq!(ellip.update(&cut), CutStatus::NoSoln);
    assert_eq!(ellip.tsq(), 0.0);
    assert_eq!(ellip.xc(), [0.; 4].as_ref());
}

#[test]
fn test_zero_grad()
{
    // a vanishing gradient leaves the state bit-identical
    let mut ellip = Ell::new_with_scalar(0.01, vec![1., 2., 3., 4.]);
    let cut = (vec![0.5; 4], 0.05);
    ellip.update(&cut);
    let tsq = ellip.tsq();
    let xc = ellip.xc().to_vec();

    let cut = (vec![0.; 4], 0.05);
    assert_eq!(ellip.update(&cut), CutStatus::NoEffect);
    assert_eq!(ellip.tsq(), tsq);
    assert_eq!(ellip.xc(), xc.as_slice());
}

#[test]
fn test_tsq_monotone()
{
    // repeated cuts along one direction contract the volume proxy
    let mut ellip = Ell::new_with_scalar(100., vec![0.; 4]);
    let cut = (vec![1., 0.5, -0.25, 0.125], 0.01);
    assert_eq!(ellip.update(&cut), CutStatus::Success);
    let mut tsq_old = ellip.tsq();
    for _ in 0.. 20 {
        assert_eq!(ellip.update(&cut), CutStatus::Success);
        assert!(ellip.tsq() <= tsq_old + 1e-9);
        tsq_old = ellip.tsq();
    }
}

#[test]
fn test_center_inside_halfspace()
{
    let mut ellip = Ell::new_with_scalar(100., vec![1., -2.]);
    let grad = vec![0.8, -0.6];
    let beta = 0.3;
    let xc_old = ellip.xc().to_vec();
    assert_eq!(ellip.update(&(grad.clone(), beta)), CutStatus::Success);
    let mut lhs = beta;
    for i in 0.. 2 {
        lhs += grad[i] * (ellip.xc()[i] - xc_old[i]);
    }
    assert!(lhs < 0.0);
}

#[test]
fn test_clone_replays()
{
    let mut ellip = Ell::new_with_scalar(100., vec![0.; 3]);
    let mut twin = ellip.clone();
    let cuts = [
        (vec![1., 0., -1.], 0.5),
        (vec![0., 1., 1.], 0.0),
        (vec![-1., 2., 0.], 1.5),
    ];
    for cut in &cuts {
        assert_eq!(ellip.update(cut), twin.update(cut));
    }
    assert_eq!(ellip.xc(), twin.xc());
    assert_eq!(ellip.tsq(), twin.tsq());
}

#[test]
fn test_parallel_cut_update()
{
    // a two-sided cut shrinks harder than its single-sided half
    let mut ellip = Ell::new_with_scalar(100., vec![0.; 4]);
    let mut single = ellip.clone();
    let pair: (Vec<f64>, (f64, Option<f64>)) = (vec![1., 0., 0., 0.], (0.1, Some(0.5)));
    assert_eq!(ellip.update(&pair), CutStatus::Success);
    assert_eq!(single.update(&(vec![1., 0., 0., 0.], 0.1)), CutStatus::Success);
    assert!(ellip.tsq() <= single.tsq());

    // and a pair holding no second-side information degrades to it
    let mut ellip = single.clone();
    let pair: (Vec<f64>, (f64, Option<f64>)) = (vec![0., 1., 0., 0.], (0.1, None));
    assert_eq!(ellip.update(&pair), CutStatus::Success);
    assert_eq!(single.update(&(vec![0., 1., 0., 0.], 0.1)), CutStatus::Success);
    assert_eq!(ellip.xc(), single.xc());
    assert_eq!(ellip.tsq(), single.tsq());
}
