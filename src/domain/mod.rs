mod account;
mod error;
mod money;

pub use account::*;
pub use error::*;
pub use money::*;
