//! Cutting-plane drivers

use alloc::vec::Vec;
use num_traits::Float;
use crate::solver::{CutStatus, OracleBS, OracleFeas, OracleFeas2, OracleOptim, OracleQ, SpaceUpdate};

/// Driver parameters
#[derive(Debug, Clone, Copy)]
pub struct Options<F>
{
    /// Maximum number of iterations.
    pub max_iters: usize,
    /// Error tolerance on the volume proxy \\(\tau^2\\)
    /// (resp. on the interval half-width for [`bsearch`]).
    pub tol: F,
}

impl<F: Float> Default for Options<F>
{
    fn default() -> Self
    {
        Options {
            max_iters: 2000,
            tol: F::from(1e-8).unwrap(),
        }
    }
}

/// Information returned by the boolean drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CInfo
{
    /// Whether a feasible solution was obtained.
    pub feasible: bool,
    /// Number of iterations performed.
    pub num_iters: usize,
}

/// Finds a point in a convex set described by a separation oracle.
///
/// Returns a [`CInfo`]; on success the feasible point is left as the center of
/// `space`.
/// * `omega` performs assessment on the center of `space`.
/// * `space` is a search space containing the feasible set.
/// * `options` caps the iterations and sets the termination tolerance.
pub fn cutting_plane_feas<F, O, S>(omega: &mut O, space: &mut S, options: &Options<F>) -> CInfo
where F: Float, O: OracleFeas<F>, S: SpaceUpdate<F, O::CutChoice>
{
    for niter in 0.. options.max_iters {
        let cut = match omega.assess_feas(space.xc()) {
            None => { // feasible sol'n obtained
                log::debug!("cutting_plane_feas: feasible after {} iterations", niter);
                return CInfo {feasible: true, num_iters: niter};
            }
            Some(cut) => cut,
        };
        let status = space.update(&cut);
        log::trace!("cutting_plane_feas: niter {} {:?}", niter, status);
        if status != CutStatus::Success || space.tsq() < options.tol {
            return CInfo {feasible: false, num_iters: niter};
        }
    }
    CInfo {feasible: false, num_iters: options.max_iters}
}

/// Cutting-plane driver for solving a convex optimization problem.
///
/// Returns the best-so-far solution (`None` if no improving assessment was
/// ever obtained) and the number of iterations performed; the caller
/// distinguishes convergence by the count staying below `options.max_iters`.
/// * `omega` performs assessment on the center of `space`.
/// * `space` is a search space containing an optimal solution.
/// * `gamma` is the best-so-far objective value, updated in place.
/// * `options` caps the iterations and sets the termination tolerance.
pub fn cutting_plane_optim<F, O, S>(
    omega: &mut O, space: &mut S, gamma: &mut F, options: &Options<F>
) -> (Option<Vec<F>>, usize)
where F: Float, O: OracleOptim<F>, S: SpaceUpdate<F, O::CutChoice>
{
    let mut x_best = None;
    for niter in 0.. options.max_iters {
        let (cut, shrunk) = omega.assess_optim(space.xc(), gamma);
        if shrunk { // better gamma obtained
            x_best = Some(space.xc().to_vec());
        }
        let status = space.update(&cut);
        log::trace!("cutting_plane_optim: niter {} {:?}", niter, status);
        if status != CutStatus::Success || space.tsq() < options.tol {
            log::debug!("cutting_plane_optim: terminated after {} iterations ({:?})", niter, status);
            return (x_best, niter);
        }
    }
    (x_best, options.max_iters)
}

/// Cutting-plane driver for solving a convex discrete optimization problem.
///
/// The oracle assesses rounded lattice points; when a cut has no effect on the
/// space and the oracle still holds an alternative cut for the same lattice
/// point, the driver retries with `retry` raised instead of terminating.
///
/// Returns as [`cutting_plane_optim`], with the lattice-point convention for
/// the best-so-far solution.
pub fn cutting_plane_q<F, O, S>(
    omega: &mut O, space: &mut S, gamma: &mut F, options: &Options<F>
) -> (Option<Vec<F>>, usize)
where F: Float, O: OracleQ<F>, S: SpaceUpdate<F, O::CutChoice>
{
    let mut x_best = None;
    let mut retry = false;
    for niter in 0.. options.max_iters {
        let (cut, shrunk, x_alt, more_alt) = omega.assess_q(space.xc(), gamma, retry);
        if shrunk { // better gamma obtained
            x_best = Some(x_alt);
        }
        let status = space.update(&cut);
        log::trace!("cutting_plane_q: niter {} {:?}", niter, status);
        match status {
            CutStatus::Success => {
                retry = false;
            }
            CutStatus::NoEffect => {
                if !more_alt { // no more alternative cut
                    return (x_best, niter);
                }
                retry = true;
            }
            CutStatus::NoSoln | CutStatus::SmallEnough => {
                return (x_best, niter);
            }
        }
        if space.tsq() < options.tol { // no more
            return (x_best, niter);
        }
    }
    (x_best, options.max_iters)
}

/// Bisection over an ordered scalar interval.
///
/// Assumes the oracle is monotone: once feasible at some \\(\gamma\\), feasible
/// at every larger one. The interval is narrowed in place; `intrvl.1` holds
/// the best achievable target on return.
/// * `omega` assesses the feasibility of a target value.
/// * `intrvl` is the `(lower, upper)` search interval.
/// * `options` caps the iterations and sets the half-width tolerance.
pub fn bsearch<F, O>(omega: &mut O, intrvl: &mut (F, F), options: &Options<F>) -> CInfo
where F: Float, O: OracleBS<F>
{
    let f2 = F::one() + F::one();
    let u_orig = intrvl.1;

    for niter in 0.. options.max_iters {
        let tau = (intrvl.1 - intrvl.0) / f2;
        if tau < options.tol { // no more
            return CInfo {feasible: intrvl.1 != u_orig, num_iters: niter};
        }
        let gamma = intrvl.0 + tau;
        if omega.assess_bs(gamma) { // feasible sol'n obtained
            intrvl.1 = gamma;
        } else {
            intrvl.0 = gamma;
        }
    }
    CInfo {feasible: intrvl.1 != u_orig, num_iters: options.max_iters}
}

/// Adaptor making a (feasibility oracle, search space) pair drivable by
/// [`bsearch`].
///
/// Each assessment re-targets the oracle, solves the inner feasibility
/// problem on a clone of the space, and copies the feasible center back into
/// the outer space on success, so the outer space tracks the best solution
/// found so far.
pub struct BsearchAdaptor<'a, F, O, S>
{
    omega: &'a mut O,
    space: &'a mut S,
    options: Options<F>,
}

impl<'a, F, O, S> BsearchAdaptor<'a, F, O, S>
where F: Float, O: OracleFeas2<F>, S: SpaceUpdate<F, O::CutChoice> + Clone
{
    /// Creates an adaptor.
    ///
    /// * `omega` assesses the inner feasibility problem.
    /// * `space` is the outer search space containing the solution.
    /// * `options` is handed to the inner [`cutting_plane_feas`] drives.
    pub fn new(omega: &'a mut O, space: &'a mut S, options: Options<F>) -> Self
    {
        BsearchAdaptor {
            omega,
            space,
            options,
        }
    }

    /// Returns the best solution found so far.
    pub fn x_best(&self) -> &[F]
    {
        self.space.xc()
    }
}

impl<'a, F, O, S> OracleBS<F> for BsearchAdaptor<'a, F, O, S>
where F: Float, O: OracleFeas2<F>, S: SpaceUpdate<F, O::CutChoice> + Clone
{
    fn assess_bs(&mut self, gamma: F) -> bool
    {
        let mut space = self.space.clone();
        self.omega.update(gamma);
        let info = cutting_plane_feas(&mut *self.omega, &mut space, &self.options);
        if info.feasible {
            self.space.set_xc(space.xc());
        }
        info.feasible
    }
}
