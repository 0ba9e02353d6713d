use daen::prelude::*;

/// Finds a point with x + y <= 3 and x - y >= 1.
struct MyOracle;

impl OracleFeas<f64> for MyOracle
{
    type CutChoice = f64;

    fn assess_feas(&mut self, z: &[f64]) -> Option<Cut<f64, f64>>
    {
        let x = z[0];
        let y = z[1];

        // constraint 1: x + y <= 3
        let fj = x + y - 3.0;
        if fj > 0.0 {
            return Some((vec![1.0, 1.0], fj));
        }
        // constraint 2: x - y >= 1
        let fj = -x + y + 1.0;
        if fj > 0.0 {
            return Some((vec![-1.0, 1.0], fj));
        }
        None
    }
}

//

#[test]
fn test_feasible()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let mut omega = MyOracle {};
    let mut ellip = Ell::new(&[10.0, 10.0], vec![0.0, 0.0]);
    let options = Options {max_iters: 2000, tol: 1e-12};
    let info = cutting_plane_feas(&mut omega, &mut ellip, &options);
    assert!(info.feasible);

    // the center is left at the feasible point
    let xc = ellip.xc();
    assert!(xc[0] + xc[1] <= 3.0);
    assert!(xc[0] - xc[1] >= 1.0);
}

#[test]
fn test_infeasible()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let mut omega = MyOracle {};
    let mut ellip = Ell::new(&[10.0, 10.0], vec![100.0, 100.0]);
    let options = Options {max_iters: 2000, tol: 1e-12};
    let info = cutting_plane_feas(&mut omega, &mut ellip, &options);
    assert!(!info.feasible);
}
