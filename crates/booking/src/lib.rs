mod flow;
mod form;
mod kind;

pub use flow::*;
pub use form::*;
pub use kind::*;
