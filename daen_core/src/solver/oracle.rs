//! Assessment oracles

use alloc::vec::Vec;
use num_traits::Float;
use crate::solver::Cut;

/// Separation oracle trait for feasibility problems
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// A function \\(f(x)\\) is *convex* if there always exists a \\(g(x)\\) such that
/// \\(f(z) \ge f(x) + g(x)^T (z - x)\\) for all \\(z, x \in {\bf dom} f\\).
/// A separation oracle either asserts that an evaluation point is feasible,
/// or provides a cut that separates the feasible region from it.
pub trait OracleFeas<F: Float>
{
    /// Offset shape of the cuts this oracle produces
    /// (see [`crate::solver::Cut`]).
    type CutChoice;

    /// Assesses the feasibility of `xc`.
    ///
    /// Returns `None` when `xc` is feasible, or a separating cut.
    /// * `xc` is an evaluation point.
    fn assess_feas(&mut self, xc: &[F]) -> Option<Cut<F, Self::CutChoice>>;
}

/// Feasibility oracle with an adjustable target, for use with
/// [`crate::solver::BsearchAdaptor`].
pub trait OracleFeas2<F: Float>: OracleFeas<F>
{
    /// Re-targets the oracle at a new best-so-far value \\(\gamma\\).
    fn update(&mut self, gamma: F);
}

/// Assessment oracle trait for optimization problems
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
pub trait OracleOptim<F: Float>
{
    /// Offset shape of the cuts this oracle produces
    /// (see [`crate::solver::Cut`]).
    type CutChoice;

    /// Assesses the optimality of `xc` against the best-so-far \\(\gamma\\).
    ///
    /// Returns a cut and a flag telling whether \\(\gamma\\) was improved.
    /// * `xc` is an evaluation point.
    /// * `gamma` is the best-so-far objective value before entry.
    ///   When the returned flag is `true`, the oracle has overwritten it with a
    ///   new, better achievable value and the cut is central;
    ///   otherwise `gamma` is untouched and the cut is deep.
    fn assess_optim(&mut self, xc: &[F], gamma: &mut F) -> (Cut<F, Self::CutChoice>, bool);
}

/// Assessment oracle trait for discrete optimization problems
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// The oracle rounds the query point onto its lattice before assessing it,
/// and can produce *alternative* cuts for the same lattice point when the
/// previous one had no effect on the search space.
pub trait OracleQ<F: Float>
{
    /// Offset shape of the cuts this oracle produces
    /// (see [`crate::solver::Cut`]).
    type CutChoice;

    /// Assesses the optimality of the lattice point nearest to `xc`.
    ///
    /// Returns a cut, the \\(\gamma\\)-improved flag (as
    /// [`OracleOptim::assess_optim`]), the lattice point actually evaluated,
    /// and whether an alternative cut remains for it.
    /// * `retry` is `true` when the previous cut had no effect and the driver
    ///   asks for an alternative one at the same lattice point.
    fn assess_q(&mut self, xc: &[F], gamma: &mut F, retry: bool)
        -> (Cut<F, Self::CutChoice>, bool, Vec<F>, bool);
}

/// Assessment oracle trait for the one-dimensional bisection driver
pub trait OracleBS<F: Float>
{
    /// Returns `true` iff the inner problem with target \\(\gamma\\) is feasible.
    fn assess_bs(&mut self, gamma: F) -> bool;
}
