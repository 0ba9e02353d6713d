use float_eq::assert_float_eq;
use daen::prelude::*;
use daen::{ProfitOracle, ProfitOracleQ, ProfitOracleRb};

//

#[test]
fn test_profit()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let params = (20.0, 40.0, 30.5);
    let elasticities = [0.1, 0.4];
    let price_out = [10.0, 35.0];

    let mut omega = ProfitOracle::new(params, &elasticities, &price_out);
    let mut ellip = Ell::new_with_scalar(100.0, vec![0.0, 0.0]);
    let mut gamma = 0.0;
    let (y, niter) = cutting_plane_optim(&mut omega, &mut ellip, &mut gamma, &Options::default());
    let y = y.unwrap();
    assert!(y[0] <= 30.5_f64.ln());
    assert_eq!(niter, 36);

    let mut omega = ProfitOracle::new(params, &elasticities, &price_out);
    let mut ellip = EllStable::new_with_scalar(100.0, vec![0.0, 0.0]);
    let mut gamma_stable = 0.0;
    let (y, niter) = cutting_plane_optim(&mut omega, &mut ellip, &mut gamma_stable, &Options::default());
    assert!(y.is_some());
    assert_eq!(niter, 41);

    // both representations land on the same optimum
    assert_float_eq!(gamma, gamma_stable, abs <= 1e-6);
}

#[test]
fn test_profit_rb()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let params = (20.0, 40.0, 30.5);
    let elasticities = [0.1, 0.4];
    let price_out = [10.0, 35.0];

    let mut omega = ProfitOracleRb::new(params, &elasticities, &price_out, &[0.003, 0.007], 1.0);
    let mut ellip = Ell::new_with_scalar(100.0, vec![0.0, 0.0]);
    let mut gamma = 0.0;
    let (y, niter) = cutting_plane_optim(&mut omega, &mut ellip, &mut gamma, &Options::default());
    let y = y.unwrap();
    assert!(y[0] <= 30.5_f64.ln());
    assert!(niter < 2000);
    assert!(gamma > 0.0);
}

#[test]
fn test_profit_q()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let params = (20.0, 40.0, 30.5);
    let elasticities = [0.1, 0.4];
    let price_out = [10.0, 35.0];

    let mut omega = ProfitOracleQ::new(params, &elasticities, &price_out);
    let mut ellip = Ell::new_with_scalar(100.0, vec![0.0, 0.0]);
    let mut gamma = 0.0;
    let (y, niter) = cutting_plane_q(&mut omega, &mut ellip, &mut gamma, &Options::default());
    let y = y.unwrap();
    assert!(y[0] <= 30.5_f64.ln());
    assert_eq!(niter, 36);

    // the answer is a lattice point in the original scale
    for yi in &y {
        let xi = yi.exp();
        assert_float_eq!(xi, xi.round(), abs <= 1e-9);
    }
}
