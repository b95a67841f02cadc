use super::{Address, Link, Opcode, Program, Tape};
use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;
use std::io::Read;
use tracing::trace;

type Result<T> = std::result::Result<T, Error>;

/// ## Execution engine
///
/// Owns everything a running program touches. Drive it by calling
/// `execute` in a loop and handling the `Event` it returns.

pub struct Runtime {
    program: Program,
    link: Link,
    tape: Tape,
    pc: Address,
    input_pending: bool,
}

impl std::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Runtime {{ pc: {}, len: {}, pointer: {}, cell: {} }}",
            self.pc,
            self.program.len(),
            self.tape.pointer(),
            self.tape.get()
        )
    }
}

/// ## Events for the user interface

#[derive(Debug)]
pub enum Event {
    /// The cycle budget ran out; call `execute` again to continue.
    Running,
    /// The program counter has reached the end of the program.
    Stopped,
    /// A write instruction emitted this byte.
    Print(u8),
    /// A read instruction is waiting for `enter`.
    Input,
    Error(Error),
}

impl Runtime {
    pub fn new(program: Program) -> Result<Runtime> {
        let link = Link::new(&program)?;
        Ok(Runtime {
            program,
            link,
            tape: Tape::new(),
            pc: 0,
            input_pending: false,
        })
    }

    pub fn load<R: Read>(source: R) -> Result<Runtime> {
        Runtime::new(Program::load(source)?)
    }

    pub fn pc(&self) -> Address {
        self.pc
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn link(&self) -> &Link {
        &self.link
    }

    /// Answer an `Event::Input`. `None` means end of input and
    /// leaves the current cell as it was.
    pub fn enter(&mut self, byte: Option<u8>) {
        if !self.input_pending {
            trace!("input {:?} with no read pending", byte);
            return;
        }
        self.input_pending = false;
        if let Some(byte) = byte {
            self.tape.set(byte);
        }
    }

    pub fn execute(&mut self, cycles: usize) -> Event {
        if self.input_pending {
            return Event::Input;
        }
        for _ in 0..cycles {
            let addr = self.pc;
            let byte = match self.program.get(addr) {
                Some(byte) => byte,
                None => return Event::Stopped,
            };
            self.pc += 1;
            let opcode = match Opcode::try_from(byte) {
                Ok(opcode) => opcode,
                Err(_) => continue,
            };
            match opcode {
                Opcode::IncValue => self.tape.increment(),
                Opcode::DecValue => self.tape.decrement(),
                Opcode::IncPointer => self.tape.move_right(),
                Opcode::DecPointer => self.tape.move_left(),
                Opcode::JumpForward => {
                    if self.tape.get() == 0 {
                        if let Err(error) = self.jump(addr) {
                            return Event::Error(error);
                        }
                    }
                }
                Opcode::JumpBackward => {
                    if self.tape.get() != 0 {
                        if let Err(error) = self.jump(addr) {
                            return Event::Error(error);
                        }
                    }
                }
                Opcode::Write => return Event::Print(self.tape.get()),
                Opcode::Read => {
                    self.input_pending = true;
                    return Event::Input;
                }
            }
        }
        if self.pc as usize >= self.program.len() {
            Event::Stopped
        } else {
            Event::Running
        }
    }

    fn jump(&mut self, addr: Address) -> Result<()> {
        match self.link.target(addr) {
            Some(target) => {
                self.pc = target;
                Ok(())
            }
            None => {
                self.halt();
                Err(error!(InternalError, addr; "NO JUMP TARGET"))
            }
        }
    }

    fn halt(&mut self) {
        self.pc = self.program.len() as Address;
    }
}
