//! GMP Core - error type and the vocabulary machinery shared by every protocol dialect

mod error;
mod vocabulary;

pub use error::*;
pub use vocabulary::*;

#[doc(hidden)]
pub use serde;
