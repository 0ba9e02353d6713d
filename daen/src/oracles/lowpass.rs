use num_traits::{Float, FloatConst};
use daen_core::solver::{Cut, OracleOptim};

// Modified from CVX code by Almir Mutapcic in 2006.
// Adapted in 2010 for impulse response peak-minimization by convex iteration
// by Christine Law.
//
// "FIR Filter Design via Spectral Factorization and Convex Optimization"
// by S.-P. Wu, S. Boyd, and L. Vandenberghe

/// Oracle for FIR lowpass filter design
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// Designs an FIR lowpass filter by the spectral factorization method, with a
/// constraint on maximum passband ripple and stopband attenuation:
///
/// \\[
/// \begin{array}{ll}
/// {\rm minimize} & \max \ R(\omega), \quad \omega \in \omega_{\rm stop} \\\\
/// {\rm subject \ to} & L^2 \le R(\omega) \le U^2, \quad \omega \in \omega_{\rm pass} \\\\
/// & R(\omega) \ge 0, \quad \forall \omega
/// \end{array}
/// \\]
///
/// where \\(R(\omega)\\) is the squared magnitude frequency response, the
/// Fourier transform of the autocorrelation coefficients \\(r\\) which are
/// the variables. The two-sided band constraints make this oracle the
/// natural producer of *parallel* cuts.
pub struct LowpassOracle<F: Float>
{
    spectrum: Vec<Vec<F>>,
    lpsq: F,
    upsq: F,
    nwpass: usize,
    nwstop: usize,
}

impl<F: Float + FloatConst> LowpassOracle<F>
{
    /// Creates an instance.
    ///
    /// * `nfilt` is the number of FIR coefficients (including the zeroth).
    /// * `lpsq` and `upsq` are the squared passband magnitude bounds.
    /// * `wpass` and `wstop` are the passband and stopband edges as fractions
    ///   of \\(\pi\\).
    pub fn new(nfilt: usize, lpsq: F, upsq: F, wpass: F, wstop: F) -> Self
    {
        // rule-of-thumb discretization (from Cheney's Approximation Theory)
        let mdim = 15 * nfilt;
        let f1 = F::one();
        let f2 = f1 + f1;
        let mdim_m1 = F::from(mdim - 1).unwrap();

        // spectrum[w] = [1, 2*cos(w), 2*cos(2*w), ..., 2*cos((nfilt-1)*w)]
        let mut spectrum = Vec::with_capacity(mdim);
        for i in 0.. mdim {
            let w = F::from(i).unwrap() * F::PI() / mdim_m1;
            let mut row = Vec::with_capacity(nfilt);
            row.push(f1);
            for j in 1.. nfilt {
                row.push(f2 * (w * F::from(j).unwrap()).cos());
            }
            spectrum.push(row);
        }

        LowpassOracle {
            spectrum,
            lpsq,
            upsq,
            nwpass: (wpass * mdim_m1).floor().to_usize().unwrap() + 1,
            nwstop: (wstop * mdim_m1).floor().to_usize().unwrap() + 1,
        }
    }
}

impl<F: Float + FloatConst> OracleOptim<F> for LowpassOracle<F>
{
    type CutChoice = (F, Option<F>);

    fn assess_optim(&mut self, x: &[F], spsq: &mut F) -> (Cut<F, (F, Option<F>)>, bool)
    {
        let f0 = F::zero();
        let f1 = F::one();
        let n = x.len();

        let matrix_vector = |k: usize| {
            let mut sum = f0;
            for j in 0.. n {
                sum = sum + self.spectrum[k][j] * x[j];
            }
            sum
        };

        // 1. nonnegative-real constraint on the zeroth coefficient
        if x[0] < f0 {
            let mut g = vec![f0; n];
            g[0] = -f1;
            return ((g, (-x[0], None)), false);
        }

        // 2. passband constraints
        for k in 0.. self.nwpass {
            let v = matrix_vector(k);
            if v > self.upsq {
                return ((self.spectrum[k].clone(), (v - self.upsq, Some(v - self.lpsq))), false);
            }
            if v < self.lpsq {
                let g = self.spectrum[k].iter().map(|&a| -a).collect();
                return ((g, (-v + self.lpsq, Some(-v + self.upsq))), false);
            }
        }

        // 3. stopband constraints, tracking the worst response
        let mut fmax = F::neg_infinity();
        let mut kmax = 0;
        for k in self.nwstop.. self.spectrum.len() {
            let v = matrix_vector(k);
            if v > *spsq {
                return ((self.spectrum[k].clone(), (v - *spsq, Some(v))), false);
            }
            if v < f0 {
                return ((self.spectrum[k].iter().map(|&a| -a).collect(), (-v, Some(-v + *spsq))), false);
            }
            if v > fmax {
                fmax = v;
                kmax = k;
            }
        }

        // 4. nonnegative-real constraint in the transition band
        for k in self.nwpass.. self.nwstop {
            let v = matrix_vector(k);
            if v < f0 {
                let g = self.spectrum[k].iter().map(|&a| -a).collect();
                return ((g, (-v, None)), false);
            }
        }

        // all constraints hold: the worst stopband response is the objective
        *spsq = fmax;
        ((self.spectrum[kmax].clone(), (f0, Some(fmax))), true)
    }
}

/// Builds a [`LowpassOracle`] for the standard filter specs (0.125 ripple,
/// passband edge \\(0.12\pi\\), stopband edge \\(0.20\pi\\)) and returns it
/// with the initial stopband target \\(S_p^2\\).
pub fn create_lowpass_case<F: Float + FloatConst>(nfilt: usize) -> (LowpassOracle<F>, F)
{
    let f10 = F::from(10.).unwrap();
    let f20 = F::from(20.).unwrap();
    let delta0_wpass = F::from(0.125).unwrap();
    let delta0_wstop = F::from(0.125).unwrap();
    // maximum passband ripple in dB (+/- around 0 dB)
    let delta1 = f20 * (F::one() + delta0_wpass).log10();
    // stopband attenuation desired in dB
    let delta2 = f20 * delta0_wstop.log10();

    let lp = f10.powf(-delta1 / f20);
    let up = f10.powf(delta1 / f20);
    let sp = f10.powf(delta2 / f20);

    let omega = LowpassOracle::new(
        nfilt, lp * lp, up * up, F::from(0.12).unwrap(), F::from(0.20).unwrap());
    (omega, sp * sp)
}
