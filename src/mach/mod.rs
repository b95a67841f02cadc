/*!
## Rust Machine Module

This Rust module is the loader and virtual machine for Brainfuck.

*/

/// Position in the program or on the tape.
pub type Address = u16;

/// Maximum program size in bytes.
pub const CODE_SIZE: usize = 1 << 15;
/// Number of cells on the data tape.
pub const DATA_SIZE: usize = 1 << 15;

mod link;
mod opcode;
mod program;
mod runtime;
mod stack;
mod tape;

pub use link::Link;
pub use opcode::Opcode;
pub use program::Program;
pub use runtime::Event;
pub use runtime::Runtime;
pub use stack::Stack;
pub use tape::Tape;

#[cfg(test)]
mod tests;
