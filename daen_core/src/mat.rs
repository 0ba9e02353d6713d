use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};
use num_traits::Float;

/// Dense square matrix, stored row-major and indexed by `(row, col)`.
#[derive(Debug, Clone)]
pub struct MatSq<F>
{
    n: usize,
    mat: Vec<F>,
}

impl<F: Float> MatSq<F>
{
    /// Creates a zero matrix of size `n`.
    pub fn new(n: usize) -> Self
    {
        MatSq {
            n,
            mat: vec![F::zero(); n * n],
        }
    }

    /// Creates an identity matrix of size `n`.
    pub fn eye(n: usize) -> Self
    {
        let mut m = Self::new(n);
        for i in 0.. n {
            m[(i, i)] = F::one();
        }
        m
    }

    /// Creates a diagonal matrix from `val`.
    pub fn diag(val: &[F]) -> Self
    {
        let mut m = Self::new(val.len());
        for i in 0.. val.len() {
            m[(i, i)] = val[i];
        }
        m
    }

    /// Number of rows and columns.
    pub fn size(&self) -> usize
    {
        self.n
    }

    /// Overwrites a row.
    pub fn set_row(&mut self, r: usize, vals: &[F])
    {
        assert_eq!(vals.len(), self.n);

        for c in 0.. self.n {
            self[(r, c)] = vals[c];
        }
    }

    /// Multiplies every element by `alpha`.
    pub fn scale(&mut self, alpha: F)
    {
        for a in self.mat.iter_mut() {
            *a = alpha * *a;
        }
    }
}

impl<F: Float> Index<(usize, usize)> for MatSq<F>
{
    type Output = F;

    fn index(&self, (r, c): (usize, usize)) -> &F
    {
        assert!(r < self.n);
        assert!(c < self.n);

        &self.mat[r * self.n + c]
    }
}

impl<F: Float> IndexMut<(usize, usize)> for MatSq<F>
{
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut F
    {
        assert!(r < self.n);
        assert!(c < self.n);

        &mut self.mat[r * self.n + c]
    }
}

//

#[test]
fn test_mat_sq()
{
    let mut m = MatSq::<f64>::eye(3);
    m[(0, 2)] = 5.;
    m.set_row(1, &[4., 1., 0.]);
    assert_eq!(m[(0, 0)], 1.);
    assert_eq!(m[(0, 2)], 5.);
    assert_eq!(m[(1, 0)], 4.);
    assert_eq!(m[(2, 0)], 0.);
}
