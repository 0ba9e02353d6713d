use daen::prelude::*;

/// Maximizes x + y subject to x + y <= 3 and x - y >= 1, with a round-robin
/// constraint index carried across calls.
struct MyOracle
{
    idx: usize,
}

impl OracleOptim<f64> for MyOracle
{
    type CutChoice = f64;

    fn assess_optim(&mut self, xc: &[f64], gamma: &mut f64) -> (Cut<f64, f64>, bool)
    {
        let x = xc[0];
        let y = xc[1];
        let f0 = x + y;

        for _ in 0.. 3 {
            self.idx += 1;
            if self.idx == 3 {
                self.idx = 0; // round robin
            }
            let fj = match self.idx {
                0 => f0 - 3.0,        // constraint 1: x + y <= 3
                1 => -x + y + 1.0,    // constraint 2: x - y >= 1
                _ => *gamma - f0,     // objective: maximize x + y
            };
            if fj > 0.0 {
                let g = match self.idx {
                    0 => vec![1.0, 1.0],
                    1 => vec![-1.0, 1.0],
                    _ => vec![-1.0, -1.0],
                };
                return ((g, fj), false);
            }
        }
        *gamma = f0;
        ((vec![-1.0, -1.0], 0.0), true)
    }
}

//

#[test]
fn test_feasible()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let mut omega = MyOracle {idx: 0};
    let mut ellip = Ell::new(&[10.0, 10.0], vec![0.0, 0.0]);
    let mut gamma = -1e100;
    let options = Options {max_iters: 2000, tol: 1e-10};
    let (x, _niter) = cutting_plane_optim(&mut omega, &mut ellip, &mut gamma, &options);
    let x = x.unwrap();
    assert!(x[0] >= 0.0);
    assert!(gamma <= 3.0);
}

#[test]
fn test_feasible_stable()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let mut omega = MyOracle {idx: 0};
    let mut ellip = EllStable::new(&[10.0, 10.0], vec![0.0, 0.0]);
    let mut gamma = -1e100;
    let options = Options {max_iters: 2000, tol: 1e-10};
    let (x, _niter) = cutting_plane_optim(&mut omega, &mut ellip, &mut gamma, &options);
    let x = x.unwrap();
    assert!(x[0] >= 0.0);
    assert!(gamma <= 3.0);
}

#[test]
fn test_infeasible_wrong_guess()
{
    let _ = env_logger::builder().is_test(true).try_init();

    // the initial region misses the feasible set entirely
    let mut omega = MyOracle {idx: 0};
    let mut ellip = Ell::new(&[10.0, 10.0], vec![100.0, 100.0]);
    let mut gamma = -1e100;
    let options = Options {max_iters: 2000, tol: 1e-12};
    let (x, _niter) = cutting_plane_optim(&mut omega, &mut ellip, &mut gamma, &options);
    assert!(x.is_none());
}

#[test]
fn test_infeasible_wrong_target()
{
    let _ = env_logger::builder().is_test(true).try_init();

    // no point reaches the demanded objective value
    let mut omega = MyOracle {idx: 0};
    let mut ellip = Ell::new(&[10.0, 10.0], vec![0.0, 0.0]);
    let mut gamma = 100.0;
    let options = Options {max_iters: 2000, tol: 1e-12};
    let (x, _niter) = cutting_plane_optim(&mut omega, &mut ellip, &mut gamma, &options);
    assert!(x.is_none());
}
