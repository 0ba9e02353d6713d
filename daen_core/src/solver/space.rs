//! Search space

use num_traits::Float;
use crate::solver::{Cut, CutStatus};

/// Search space trait
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// A bounded region guaranteed to contain the solution set,
/// shrunk step by step by the cuts a driver feeds back into it.
pub trait Space<F: Float>
{
    /// Returns a read-only view of the center \\(x_c\\).
    fn xc(&self) -> &[F];

    /// Overwrites the center, used by [`crate::solver::BsearchAdaptor`].
    ///
    /// * `xc` shall have the same length as [`Space::xc`].
    fn set_xc(&mut self, xc: &[F]);

    /// Returns \\(\tau^2 = g^T (\kappa Q) g\\) cached by the last successful
    /// update, zero before the first one. Drives the drivers' termination.
    fn tsq(&self) -> F;
}

/// Search space update by a cut of offset shape `B`
/// (see [`crate::solver::Cut`]).
pub trait SpaceUpdate<F: Float, B>: Space<F>
{
    /// Applies `cut` and shrinks the space to the minimum-volume region
    /// containing the intersection of the previous one with the cut's
    /// half-space.
    ///
    /// Returns the classification of the cut; the space is mutated only on
    /// [`CutStatus::Success`].
    fn update(&mut self, cut: &Cut<F, B>) -> CutStatus;
}
