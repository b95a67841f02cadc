/*!
# Rust Language Module

Errors shared by the loader and the virtual machine.

*/

#[macro_use]
mod error;

pub use error::Error;
pub use error::ErrorCode;
