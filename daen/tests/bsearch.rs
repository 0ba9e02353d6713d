use float_eq::assert_float_eq;
use daen::prelude::*;
use daen::QmiOracle;

fn mat(n: usize, rows: &[&[f64]]) -> MatSq<f64>
{
    let mut m = MatSq::new(n);
    for (r, vals) in rows.iter().enumerate() {
        m.set_row(r, vals);
    }
    m
}

//

#[test]
fn test_bsearch_qmi()
{
    let _ = env_logger::builder().is_test(true).try_init();

    // minimize the largest squared singular value of F(x) = F0 - x1*F1 - x2*F2;
    // F(x) = diag(1 - x1, 2 - x2), so the optimum is 0 at x = (1, 2)
    let f = vec![
        mat(2, &[&[1., 0.], &[0., 0.]]),
        mat(2, &[&[0., 0.], &[0., 1.]]),
    ];
    let f0 = mat(2, &[&[1., 0.], &[0., 2.]]);

    let mut omega = QmiOracle::new(f, f0);
    let mut space = Ell::new_with_scalar(10.0, vec![0.0, 0.0]);
    let inner = Options {max_iters: 2000, tol: 1e-10};
    let mut adaptor = BsearchAdaptor::new(&mut omega, &mut space, inner);

    let mut intrvl = (0.0, 10.0);
    let options = Options {max_iters: 2000, tol: 1e-4};
    let info = bsearch(&mut adaptor, &mut intrvl, &options);
    assert!(info.feasible);
    assert!(info.num_iters < 2000);

    // the interval has collapsed onto the optimum
    assert!(intrvl.1 - intrvl.0 < 2.0 * options.tol);
    assert!(intrvl.1 < 1e-2);

    // and the outer space tracks the minimizer
    let x = adaptor.x_best();
    assert_float_eq!(x[0], 1.0, abs <= 0.1);
    assert_float_eq!(x[1], 2.0, abs <= 0.1);
}

#[test]
fn test_bsearch_interval_bound()
{
    // a monotone scalar predicate alone drives the interval down to tolerance
    struct Threshold;

    impl OracleBS<f64> for Threshold
    {
        fn assess_bs(&mut self, gamma: f64) -> bool
        {
            gamma * gamma >= 2.0
        }
    }

    let mut omega = Threshold {};
    let mut intrvl = (0.0, 4.0);
    let options = Options {max_iters: 2000, tol: 1e-8};
    let info = bsearch(&mut omega, &mut intrvl, &options);
    assert!(info.feasible);
    assert!(intrvl.1 - intrvl.0 < 2.0 * options.tol);
    assert_float_eq!(intrvl.1, 2.0_f64.sqrt(), abs <= 1e-7);
}
