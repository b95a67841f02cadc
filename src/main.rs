//! # Brainfuck
//!
//! Command line interpreter for Brainfuck programs.
//!

mod term;

fn main() {
    term::main();
}
