//! # Brainfuck
//!
//! A small virtual machine for the Brainfuck programming language.
//!
//! Run a program with `bf hello.bf`. Set `RUST_LOG=bf=debug`, or pass
//! `--debug`, to see what the loader is doing.
//!
//! ```
//! use bf::mach::{Event, Runtime};
//!
//! let mut runtime = Runtime::load("++++++++[>++++++++<-]>+.".as_bytes()).unwrap();
//! let mut output = Vec::new();
//! loop {
//!     match runtime.execute(1000) {
//!         Event::Print(byte) => output.push(byte),
//!         Event::Input => runtime.enter(None),
//!         Event::Running => {}
//!         Event::Stopped | Event::Error(_) => break,
//!     }
//! }
//! assert_eq!(output, b"A");
//! ```

#[path = "doc/instructions.rs"]
#[allow(non_snake_case)]
pub mod _Instructions;

pub mod lang;
pub mod mach;
