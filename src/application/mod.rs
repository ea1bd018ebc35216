// Application layer - the untyped boundary in front of the account.
// Callers that hold raw input (CLI tokens, JSON) go through commands here
// instead of the typed `Account` methods.

pub mod command;
pub mod error;

pub use command::*;
pub use error::*;
