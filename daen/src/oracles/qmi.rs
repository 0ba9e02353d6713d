use num_traits::Float;
use daen_core::solver::{Cut, OracleFeas, OracleFeas2};
use daen_core::{LdltMgr, MatSq};

/// Oracle for a quadratic matrix inequality
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// This oracle solves the feasibility problem
///
/// \\[
/// {\rm find} \ x \quad {\rm s.t.} \
/// \gamma I - F(x)^T F(x) \succeq 0, \qquad
/// F(x) = F_0 - \sum_k x_k F_k.
/// \\]
///
/// The candidate matrix is again consumed element by element; since every
/// element is an inner product of two rows of \\(F(x)\\), the rows are
/// computed lazily behind a high-water mark as the factorization first
/// touches them, so a factorization failing at pivot \\(p\\) costs
/// \\(O(p^2)\\) regardless of the matrix size. The target \\(\gamma\\) is
/// adjustable, which makes the oracle drivable by
/// [`daen_core::solver::BsearchAdaptor`].
pub struct QmiOracle<F: Float>
{
    ldlt: LdltMgr<F>,
    f: Vec<MatSq<F>>,
    f0: MatSq<F>,
    fx: MatSq<F>,
    gamma: F,
    count: usize,
}

impl<F: Float> QmiOracle<F>
{
    /// Creates an instance.
    ///
    /// * `f` is the coefficient matrices \\(F_k\\), one per variable.
    /// * `f0` is the constant matrix \\(F_0\\).
    pub fn new(f: Vec<MatSq<F>>, f0: MatSq<F>) -> Self
    {
        let mdim = f0.size();

        QmiOracle {
            ldlt: LdltMgr::new(mdim),
            f,
            f0,
            fx: MatSq::new(mdim),
            gamma: F::zero(),
            count: 0,
        }
    }
}

impl<F: Float> OracleFeas<F> for QmiOracle<F>
{
    type CutChoice = F;

    fn assess_feas(&mut self, x: &[F]) -> Option<Cut<F, F>>
    {
        self.count = 0;
        let mdim = self.f0.size();
        let QmiOracle {ldlt, f, f0, fx, gamma, count} = self;

        if ldlt.factor(|i, j| {
            if *count < i + 1 {
                *count = i + 1;
                // fx row i = (F0 - sum_k x_k F_k) column i
                for c in 0.. mdim {
                    let mut v = f0[(c, i)];
                    for k in 0.. x.len() {
                        v = v - f[k][(c, i)] * x[k];
                    }
                    fx[(i, c)] = v;
                }
            }
            let mut a = F::zero();
            for c in 0.. mdim {
                a = a - fx[(i, c)] * fx[(j, c)];
            }
            if i == j {
                a = a + *gamma;
            }
            a
        }) {
            return None;
        }

        let ep = ldlt.witness(); // builds the witness, call before the reads below
        let (start, stop) = ldlt.pos();
        let v = ldlt.witness_vec();

        // av = v' * F(x) over the failed range
        let mut av = vec![F::zero(); mdim];
        for c in 0.. mdim {
            for i in start.. stop {
                av[c] = av[c] + v[i] * fx[(i, c)];
            }
        }

        let f2 = F::one() + F::one();
        let mut g = vec![F::zero(); x.len()];
        for k in 0.. x.len() {
            // vfk = v' * F_k over the failed range, then g_k = -2 (vfk . av)
            let mut s = F::zero();
            for c in 0.. mdim {
                let mut vfk = F::zero();
                for i in start.. stop {
                    vfk = vfk + v[i] * f[k][(i, c)];
                }
                s = s + vfk * av[c];
            }
            g[k] = -f2 * s;
        }
        Some((g, ep))
    }
}

impl<F: Float> OracleFeas2<F> for QmiOracle<F>
{
    fn update(&mut self, gamma: F)
    {
        self.gamma = gamma;
    }
}
