//! Cutting-plane primitives

use alloc::vec::Vec;

/// Cutting-plane
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// A pair of a gradient vector \\(g\\) and an offset expressing the half-space
/// \\(\lbrace x \mid g^T (x - x_c) + \beta \le 0 \rbrace\\)
/// known to contain the solution set.
/// The offset type `B` is either
/// * a scalar \\(\beta\\) — a single deep cut (central when \\(\beta = 0\\)), or
/// * a pair \\((\beta_0, {\rm Option}\langle\beta_1\rangle)\\) — a parallel cut
///   \\(-\beta_1 \le g^T (x - x_c) \le -\beta_0\\) when the second bound is present,
///   degrading to the single cut on \\(\beta_0\\) when it is absent.
pub type Cut<F, B> = (Vec<F>, B);

/// Status reported by a search space when a cut is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutStatus
{
    /// The space was shrunk by the cut.
    Success,
    /// The cut misses the space entirely, which proves infeasibility.
    NoSoln,
    /// The cut cannot reduce the space. Drives the retry path of
    /// [`crate::solver::cutting_plane_q`].
    NoEffect,
    /// The space has degenerated below the resolution of the cut.
    SmallEnough,
}

impl core::fmt::Display for CutStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", match &self {
            CutStatus::Success     => "Success: the space was shrunk",
            CutStatus::NoSoln      => "NoSoln: the cut proves infeasibility",
            CutStatus::NoEffect    => "NoEffect: the cut cannot reduce the space",
            CutStatus::SmallEnough => "SmallEnough: the space has degenerated",
        })
    }
}
