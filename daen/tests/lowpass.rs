use daen::create_lowpass_case;
use daen::prelude::*;

//

#[test]
fn test_lowpass()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let nfilt = 32;
    let (mut omega, mut gamma) = create_lowpass_case::<f64>(nfilt);
    let mut ellip = Ell::new_with_scalar(40.0, vec![0.0; nfilt]);
    let options = Options {max_iters: 50_000, tol: 1e-8};
    let (r, niter) = cutting_plane_optim(&mut omega, &mut ellip, &mut gamma, &options);
    assert!(r.is_some());
    assert!(niter <= 634);
    assert!(gamma > 0.0);
}

#[test]
fn test_lowpass_single_cut_only()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let nfilt = 32;

    let (mut omega, mut gamma) = create_lowpass_case::<f64>(nfilt);
    let mut ellip = Ell::new_with_scalar(40.0, vec![0.0; nfilt]);
    let options = Options {max_iters: 50_000, tol: 1e-8};
    let (_, niter_parallel) = cutting_plane_optim(&mut omega, &mut ellip, &mut gamma, &options);

    // degrading every pair to its first cut still converges, only slower
    let (mut omega, mut gamma) = create_lowpass_case::<f64>(nfilt);
    let mut ellip = Ell::new_with_scalar(40.0, vec![0.0; nfilt]);
    ellip.set_use_parallel_cut(false);
    let (r, niter_single) = cutting_plane_optim(&mut omega, &mut ellip, &mut gamma, &options);
    assert!(r.is_some());
    assert!(niter_single > niter_parallel);
}
