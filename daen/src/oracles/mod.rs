
mod profit;
mod lowpass;
mod lmi;
mod qmi;

pub use profit::*;
pub use lowpass::*;
pub use lmi::*;
pub use qmi::*;
