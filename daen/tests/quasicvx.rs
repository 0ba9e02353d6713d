use float_eq::assert_float_eq;
use daen::prelude::*;

/// A quasi-convex toy problem:
///
///     minimize   -sqrtx / y
///     subject to exp(x) <= y
///
/// assessed in the variables (sqrtx, log y), with a round-robin constraint
/// index carried across calls.
struct MyQuasicvxOracle
{
    idx: usize,
}

impl OracleOptim<f64> for MyQuasicvxOracle
{
    type CutChoice = f64;

    fn assess_optim(&mut self, xc: &[f64], gamma: &mut f64) -> (Cut<f64, f64>, bool)
    {
        let sqrtx = xc[0];
        let logy = xc[1];
        let y = logy.exp();

        for _ in 0.. 2 {
            self.idx += 1;
            if self.idx == 2 {
                self.idx = 0; // round robin
            }
            match self.idx {
                0 => { // constraint 1: exp(x) <= y, or sqrtx^2 <= logy
                    let fj = sqrtx * sqrtx - logy;
                    if fj > 0.0 {
                        return ((vec![2.0 * sqrtx, -1.0], fj), false);
                    }
                }
                _ => { // constraint 2: gamma * y <= sqrtx
                    let tmp3 = *gamma * y;
                    let fj = -sqrtx + tmp3;
                    if fj > 0.0 {
                        return ((vec![-1.0, tmp3], fj), false);
                    }
                }
            }
        }
        *gamma = sqrtx / y;
        ((vec![-1.0, sqrtx], 0.0), true)
    }
}

//

#[test]
fn test_quasicvx()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let mut omega = MyQuasicvxOracle {idx: 1};
    let mut ellip = Ell::new_with_scalar(10.0, vec![0.0, 0.0]);
    let mut gamma = 0.0;
    let options = Options {max_iters: 2000, tol: 1e-8};
    let (x, niter) = cutting_plane_optim(&mut omega, &mut ellip, &mut gamma, &options);
    let x = x.unwrap();
    assert_eq!(x.len(), 2);
    assert_eq!(niter, 35);
    assert_float_eq!(gamma, 0.4288673397, abs <= 1e-6);
    assert_float_eq!(x[0] * x[0], 0.4965, abs <= 1e-4);
    assert_float_eq!(x[1].exp(), 1.6431, abs <= 1e-4);
}

#[test]
fn test_quasicvx_stable()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let mut omega = MyQuasicvxOracle {idx: 1};
    let mut ellip = EllStable::new_with_scalar(10.0, vec![0.0, 0.0]);
    let mut gamma = 0.0;
    let options = Options {max_iters: 2000, tol: 1e-8};
    let (x, niter) = cutting_plane_optim(&mut omega, &mut ellip, &mut gamma, &options);
    let x = x.unwrap();
    assert_eq!(x.len(), 2);
    assert!(niter < 100);
    assert_float_eq!(gamma, 0.4288673397, abs <= 1e-6);
}
