pub mod error;
pub mod field;
pub mod phase;

pub use error::*;
pub use field::*;
pub use phase::*;
