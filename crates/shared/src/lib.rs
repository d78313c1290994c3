mod error;
pub mod share;

pub use error::*;
