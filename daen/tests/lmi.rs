use float_eq::assert_float_eq;
use daen::prelude::*;
use daen::LmiOracle;

fn mat(n: usize, rows: &[&[f64]]) -> MatSq<f64>
{
    let mut m = MatSq::new(n);
    for (r, vals) in rows.iter().enumerate() {
        m.set_row(r, vals);
    }
    m
}

/// Minimizes c'*x subject to two linear matrix inequalities.
struct MyLmiOracle
{
    lmi1: LmiOracle<f64>,
    lmi2: LmiOracle<f64>,
    c: Vec<f64>,
}

impl OracleOptim<f64> for MyLmiOracle
{
    type CutChoice = f64;

    fn assess_optim(&mut self, x: &[f64], gamma: &mut f64) -> (Cut<f64, f64>, bool)
    {
        if let Some(cut) = self.lmi1.assess_feas(x) {
            return (cut, false);
        }
        if let Some(cut) = self.lmi2.assess_feas(x) {
            return (cut, false);
        }
        let mut f0 = 0.0;
        for i in 0.. x.len() {
            f0 += self.c[i] * x[i];
        }
        let f1 = f0 - *gamma;
        if f1 > 0.0 {
            return ((self.c.clone(), f1), false);
        }
        *gamma = f0;
        ((self.c.clone(), 0.0), true)
    }
}

fn build_oracle() -> MyLmiOracle
{
    let f1 = vec![
        mat(2, &[&[-7., -11.], &[-11., 3.]]),
        mat(2, &[&[7., -18.], &[-18., 8.]]),
        mat(2, &[&[-2., -8.], &[-8., 1.]]),
    ];
    let b1 = mat(2, &[&[33., -9.], &[-9., 26.]]);

    let f2 = vec![
        mat(3, &[&[-21., -11., 0.], &[-11., 10., 8.], &[0., 8., 5.]]),
        mat(3, &[&[0., 10., 16.], &[10., -10., -10.], &[16., -10., 3.]]),
        mat(3, &[&[-5., 2., -17.], &[2., -6., 8.], &[-17., 8., 6.]]),
    ];
    let b2 = mat(3, &[&[14., 9., 40.], &[9., 91., 10.], &[40., 10., 15.]]);

    MyLmiOracle {
        lmi1: LmiOracle::new(f1, b1),
        lmi2: LmiOracle::new(f2, b2),
        c: vec![1., -1., 1.],
    }
}

//

#[test]
fn test_lmi()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let mut omega = build_oracle();
    let mut ellip = Ell::new_with_scalar(10.0, vec![0.0; 3]);
    let mut gamma = 1e100;
    let (x, niter) = cutting_plane_optim(&mut omega, &mut ellip, &mut gamma, &Options::default());
    let x = x.unwrap();
    assert!(niter < 2000);

    // the reported objective belongs to the reported point
    let mut f0 = 0.0;
    for i in 0.. 3 {
        f0 += omega.c[i] * x[i];
    }
    assert_float_eq!(gamma, f0, abs <= 1e-9);

    // and both inequalities hold there, up to a small slack
    let check = |f: &[MatSq<f64>], b: &MatSq<f64>, n: usize| {
        let mut a = MatSq::new(n);
        for r in 0.. n {
            for c in 0.. n {
                let mut v = b[(r, c)];
                for k in 0.. 3 {
                    v -= f[k][(r, c)] * x[k];
                }
                a[(r, c)] = v;
            }
        }
        for i in 0.. n {
            a[(i, i)] += 1e-4;
        }
        let mut ldlt = LdltMgr::new(n);
        assert!(ldlt.factorize(&a));
    };
    let f1 = vec![
        mat(2, &[&[-7., -11.], &[-11., 3.]]),
        mat(2, &[&[7., -18.], &[-18., 8.]]),
        mat(2, &[&[-2., -8.], &[-8., 1.]]),
    ];
    let b1 = mat(2, &[&[33., -9.], &[-9., 26.]]);
    check(&f1, &b1, 2);
    let f2 = vec![
        mat(3, &[&[-21., -11., 0.], &[-11., 10., 8.], &[0., 8., 5.]]),
        mat(3, &[&[0., 10., 16.], &[10., -10., -10.], &[16., -10., 3.]]),
        mat(3, &[&[-5., 2., -17.], &[2., -6., 8.], &[-17., 8., 6.]]),
    ];
    let b2 = mat(3, &[&[14., 9., 40.], &[9., 91., 10.], &[40., 10., 15.]]);
    check(&f2, &b2, 3);
}

#[test]
fn test_lmi_stable()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let mut omega = build_oracle();
    let mut ellip = EllStable::new_with_scalar(10.0, vec![0.0; 3]);
    let mut gamma = 1e100;
    let (x, niter) = cutting_plane_optim(&mut omega, &mut ellip, &mut gamma, &Options::default());
    assert!(x.is_some());
    assert!(niter < 2000);
}

#[test]
fn test_lmi_witness_cut()
{
    // an indefinite constant matrix must yield a strictly deep cut at the origin
    let f = vec![
        mat(2, &[&[1., 0.], &[0., 0.]]),
        mat(2, &[&[0., 0.], &[0., 1.]]),
    ];
    let b = mat(2, &[&[1., 2.], &[2., 1.]]);
    let mut omega = LmiOracle::new(f, b.clone());
    let (g, beta) = omega.assess_feas(&[0.0, 0.0]).unwrap();
    assert_eq!(g.len(), 2);
    assert!(beta > 0.0);

    // the witness certifies v'*B*v = -beta < 0
    let mut ldlt = LdltMgr::new(2);
    assert!(!ldlt.factorize(&b));
    let ep = ldlt.witness();
    let v = ldlt.witness_vec();
    let mut quad = 0.0;
    for i in 0.. 2 {
        for j in 0.. 2 {
            quad += v[i] * b[(i, j)] * v[j];
        }
    }
    assert!(quad < 0.0);
    assert_float_eq!(quad, -ep, abs <= 1e-12);
}

#[test]
fn test_lmi_infeasible()
{
    // with vanishing coefficients no cut can help: the driver reports NoEffect
    let f = vec![
        MatSq::new(2),
        MatSq::new(2),
    ];
    let b = mat(2, &[&[1., 2.], &[2., 1.]]);
    let mut omega = LmiOracle::new(f, b);
    let mut ellip = Ell::new_with_scalar(10.0, vec![0.0, 0.0]);
    let info = cutting_plane_feas(&mut omega, &mut ellip, &Options::default());
    assert!(!info.feasible);
}
