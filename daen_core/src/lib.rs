#![no_std]

extern crate alloc;

pub mod solver;

//

mod mat;

pub use mat::*;

//

mod ell_calc_core;

pub use ell_calc_core::*;

//

mod ell_calc;

pub use ell_calc::*;

//

mod ell;

pub use ell::*;

//

mod ell_stable;

pub use ell_stable::*;

//

mod ldlt;

pub use ldlt::*;
