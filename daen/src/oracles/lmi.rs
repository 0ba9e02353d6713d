use num_traits::Float;
use daen_core::solver::{Cut, OracleFeas};
use daen_core::{LdltMgr, MatSq};

/// Oracle for a linear matrix inequality
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// This oracle solves the feasibility problem
///
/// \\[
/// {\rm find} \ x \quad {\rm s.t.} \ B - \sum_k x_k F_k \succeq 0.
/// \\]
///
/// The candidate matrix is handed to the LDL\\(^T\\) manager element by
/// element and never materialized; on a failed factorization, the witness
/// \\(v\\) with \\(v^T A v < 0\\) yields the separating cut
/// \\(g_k = v^T F_k v\\), \\(\beta = -v^T A v\\).
pub struct LmiOracle<F: Float>
{
    ldlt: LdltMgr<F>,
    f: Vec<MatSq<F>>,
    f0: MatSq<F>,
}

impl<F: Float> LmiOracle<F>
{
    /// Creates an instance.
    ///
    /// * `f` is the coefficient matrices \\(F_k\\), one per variable.
    /// * `b` is the constant matrix \\(B\\).
    pub fn new(f: Vec<MatSq<F>>, b: MatSq<F>) -> Self
    {
        LmiOracle {
            ldlt: LdltMgr::new(b.size()),
            f,
            f0: b,
        }
    }
}

impl<F: Float> OracleFeas<F> for LmiOracle<F>
{
    type CutChoice = F;

    fn assess_feas(&mut self, x: &[F]) -> Option<Cut<F, F>>
    {
        let LmiOracle {ldlt, f, f0} = self;

        if ldlt.factor(|i, j| {
            let mut a = f0[(i, j)];
            for k in 0.. x.len() {
                a = a - f[k][(i, j)] * x[k];
            }
            a
        }) {
            return None;
        }

        let ep = ldlt.witness(); // builds the witness, call before sym_quad()
        let g = (0.. x.len()).map(|k| ldlt.sym_quad(&f[k])).collect();
        Some((g, ep))
    }
}
