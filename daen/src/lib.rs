/*!
Daen ([楕円](http://www.decodeunicode.org/en/u+6955) in Japanese) means ellipse.

<script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
<script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>

This crate for Rust provides **assessment oracles for convex feasibility and
(quasi-)convex optimization problems** that can be solved by the cutting-plane
drivers of [`daen_core`].

# General usage

1. An optimization problem you want to solve is assumed to be expressed through
   a *separation oracle*: a callable that, queried at a point, either certifies
   feasibility/optimality or returns a cutting-plane
   \\(g^T (x - x_c) + \beta \le 0\\) known to contain the solution set.
   Implement one of the [`prelude::OracleFeas`], [`prelude::OracleOptim`],
   [`prelude::OracleQ`] or [`prelude::OracleBS`] traits — or use a ready-made
   oracle of this crate ([`ProfitOracle`], [`LowpassOracle`], [`LmiOracle`],
   [`QmiOracle`]).
1. Choose a search space holding your solution set:
   * [`prelude::Ell`] — the plain ellipsoid, fastest contraction.
   * [`prelude::EllStable`] — the Cholesky-factored ellipsoid, slightly less
     aggressive cuts but far better numerical robustness on long runs.
1. Feed both to a driver ([`prelude::cutting_plane_feas`],
   [`prelude::cutting_plane_optim`], [`prelude::cutting_plane_q`] or
   [`prelude::bsearch`]) with [`prelude::Options`] of your choice.

# Examples

A profit maximization problem over a Cobb-Douglas production function:

```
use daen::prelude::*;
use daen::ProfitOracle;

//env_logger::init(); // Use any logger crate as `daen` uses `log` crate.

let params = (20.0, 40.0, 30.5); // unit price, scale, limit
let elasticities = [0.1, 0.4];
let price_out = [10.0, 35.0];

let mut omega = ProfitOracle::new(params, &elasticities, &price_out);
let mut ellip = Ell::new_with_scalar(100.0, vec![0.0, 0.0]);
let mut gamma = 0.0;

let (y, niter) = cutting_plane_optim(&mut omega, &mut ellip, &mut gamma, &Options::default());

let y = y.unwrap();
assert!(y[0] <= 30.5_f64.ln());
assert!(niter < 2000);
```

## Other examples

You can find other [tests](https://github.com/convexbrain/daen/tree/master/daen/tests) of the problems.
*/

mod oracles;

pub use oracles::*;

//

/// Prelude
pub mod prelude
{
    pub use daen_core::solver::{
        bsearch, cutting_plane_feas, cutting_plane_optim, cutting_plane_q,
        BsearchAdaptor, CInfo, Cut, CutStatus, Options,
        OracleBS, OracleFeas, OracleFeas2, OracleOptim, OracleQ,
        Space, SpaceUpdate,
    };
    pub use daen_core::{Ell, EllStable, LdltMgr, MatSq};
}
