
mod cut;
mod oracle;
mod space;
mod cutting_plane;

pub use cut::*;
pub use oracle::*;
pub use space::*;
pub use cutting_plane::*;
