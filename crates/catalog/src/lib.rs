mod filter;
mod offering;

pub use filter::*;
pub use offering::*;
