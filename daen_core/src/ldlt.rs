use alloc::vec;
use alloc::vec::Vec;
use num_traits::Float;
use crate::MatSq;

/// Incremental LDL\\(^T\\) factorization manager
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// Square-root-free Cholesky factorization \\(A = L D L^T\\) of a symmetric
/// matrix supplied through an element accessor, consumed in column-major
/// triangular order so the matrix is never materialized. Factorization stops
/// at the first non-positive pivot; a *witness* vector \\(v\\) with
/// \\(v^T A v < 0\\) is then available, certifying that \\(A\\) is not
/// positive definite. \\(O(p^2)\\) work per failure at pivot \\(p\\),
/// independent of the number of accessible elements.
///
/// Matrix-inequality oracles use the witness to construct separating cuts.
#[derive(Debug, Clone)]
pub struct LdltMgr<F: Float>
{
    pos: (usize, usize),
    witness_vec: Vec<F>,
    n: usize,
    storage: MatSq<F>,
}

impl<F: Float> LdltMgr<F>
{
    /// Creates a manager for matrices of dimension `n`.
    pub fn new(n: usize) -> Self
    {
        LdltMgr {
            pos: (0, 0),
            witness_vec: vec![F::zero(); n],
            n,
            storage: MatSq::new(n),
        }
    }

    /// Performs the factorization on an explicit matrix.
    ///
    /// Returns `true` iff `a` is symmetric positive definite.
    pub fn factorize(&mut self, a: &MatSq<F>) -> bool
    {
        self.factor(|i, j| a[(i, j)])
    }

    /// Performs the factorization through an element accessor (lazy
    /// evaluation), stopping at the first pivot \\(d_i \le 0\\).
    ///
    /// Returns `true` iff the accessed matrix is symmetric positive definite.
    /// * `get_matrix_elem` returns the element \\(A_{ij}\\); elements are
    ///   requested with \\(j \le i\\), column-major within each row, each rise
    ///   of \\(i\\) before the next.
    pub fn factor<G>(&mut self, get_matrix_elem: G) -> bool
    where G: FnMut(usize, usize) -> F
    {
        self.do_factor(get_matrix_elem, false)
    }

    /// Performs the factorization as [`LdltMgr::factor`], but a pivot
    /// \\(d_i = 0\\) restarts the process at the next diagonal instead of
    /// failing, accepting block positive-semidefinite matrices.
    /// A strict \\(d_i < 0\\) still fails.
    pub fn factor_with_allow_semidefinite<G>(&mut self, get_matrix_elem: G) -> bool
    where G: FnMut(usize, usize) -> F
    {
        self.do_factor(get_matrix_elem, true)
    }

    fn do_factor<G>(&mut self, mut get_matrix_elem: G, allow_semidefinite: bool) -> bool
    where G: FnMut(usize, usize) -> F
    {
        let f0 = F::zero();

        self.pos = (0, 0);
        for i in 0.. self.n {
            let start = self.pos.0;
            let mut d = get_matrix_elem(i, start);
            for j in start.. i {
                self.storage[(j, i)] = d;
                self.storage[(i, j)] = d / self.storage[(j, j)]; // L(i, j)
                let s = j + 1;
                d = get_matrix_elem(i, s);
                for k in start.. s {
                    d = d - self.storage[(i, k)] * self.storage[(k, s)];
                }
            }
            self.storage[(i, i)] = d;

            if d < f0 || (!allow_semidefinite && d == f0) {
                self.pos.1 = i + 1;
                break;
            }
            if d == f0 {
                // restart past the zero pivot, block-psd input
                self.pos.0 = i + 1;
            }
        }
        self.is_spd()
    }

    /// Whether the last factorization succeeded.
    pub fn is_spd(&self) -> bool
    {
        self.pos.1 == 0
    }

    /// The pivot range `(start, stop)` that triggered the last failure.
    pub fn pos(&self) -> (usize, usize)
    {
        self.pos
    }

    /// Builds the witness vector and returns \\(-d_{stop-1} = -v^T A v > 0\\).
    ///
    /// Shall be called only after a failed factorization. The vector has
    /// \\(v_{stop-1} = 1\\), back-substituted entries on
    /// \\([start, stop-1)\\) and zeros elsewhere.
    pub fn witness(&mut self) -> F
    {
        assert!(!self.is_spd());

        let (start, stop) = self.pos;
        let m = stop - 1;

        for v in self.witness_vec.iter_mut() {
            *v = F::zero();
        }
        self.witness_vec[m] = F::one();
        for i in (start + 1..= m).rev() {
            let mut s = F::zero();
            for k in i.. stop {
                s = s + self.storage[(k, i - 1)] * self.witness_vec[k];
            }
            self.witness_vec[i - 1] = -s;
        }
        -self.storage[(m, m)]
    }

    /// A read-only view of the witness vector built by [`LdltMgr::witness`].
    pub fn witness_vec(&self) -> &[F]
    {
        &self.witness_vec
    }

    /// Calculates \\(v^T M v\\) over the failed pivot range, for oracle
    /// subgradient construction.
    pub fn sym_quad(&self, m: &MatSq<F>) -> F
    {
        let (start, stop) = self.pos;
        let v = &self.witness_vec;

        let mut res = F::zero();
        for i in start.. stop {
            let mut s = F::zero();
            for j in i + 1.. stop {
                s = s + m[(i, j)] * v[j];
            }
            res = res + v[i] * (m[(i, i)] * v[i] + (s + s));
        }
        res
    }
}

//

#[cfg(test)]
use float_eq::assert_float_eq;

#[cfg(test)]
fn mat3(r0: [f64; 3], r1: [f64; 3], r2: [f64; 3]) -> MatSq<f64>
{
    let mut m = MatSq::new(3);
    m.set_row(0, &r0);
    m.set_row(1, &r1);
    m.set_row(2, &r2);
    m
}

#[test]
fn test_spd()
{
    let m1 = mat3([25., 15., -5.], [15., 18., 0.], [-5., 0., 11.]);
    let mut ldlt = LdltMgr::new(3);
    assert!(ldlt.factorize(&m1));
}

#[test]
fn test_indefinite()
{
    let mut m2 = MatSq::new(4);
    m2.set_row(0, &[18., 22., 54., 42.]);
    m2.set_row(1, &[22., -70., 86., 62.]);
    m2.set_row(2, &[54., 86., -174., 134.]);
    m2.set_row(3, &[42., 62., 134., -106.]);

    let mut ldlt = LdltMgr::new(4);
    assert!(!ldlt.factorize(&m2));

    let ep = ldlt.witness();
    assert!(ep > 0.0);

    // the witness certifies v'*A*v < 0 on the failed range
    let quad = ldlt.sym_quad(&m2);
    assert!(quad < 0.0);
    assert_float_eq!(quad, -ep, abs <= 1e-9);

    let (start, stop) = ldlt.pos();
    assert_eq!(start, 0);
    assert_eq!(stop, 2);
    assert_eq!(ldlt.witness_vec()[stop - 1], 1.0);
}

#[test]
fn test_zero_pivot()
{
    let m3 = mat3([0., 15., -5.], [15., 18., 0.], [-5., 0., 11.]);
    let mut ldlt = LdltMgr::new(3);
    assert!(!ldlt.factorize(&m3));
    let ep = ldlt.witness();
    assert_eq!(ep, 0.0);
    assert_eq!(ldlt.witness_vec()[0], 1.0);
}

#[test]
fn test_allow_semidefinite()
{
    // the zero pivot restarts the factorization at the next diagonal
    let m3 = mat3([0., 15., -5.], [15., 18., 0.], [-5., 0., 11.]);
    let mut ldlt = LdltMgr::new(3);
    assert!(ldlt.factor_with_allow_semidefinite(|i, j| m3[(i, j)]));
    assert_eq!(ldlt.pos().0, 1);

    // but a strictly negative pivot still fails
    let m4 = mat3([0., 15., -5.], [15., -18., 0.], [-5., 0., 11.]);
    let mut ldlt = LdltMgr::new(3);
    assert!(!ldlt.factor_with_allow_semidefinite(|i, j| m4[(i, j)]));
    assert!(ldlt.witness() > 0.0);
}
