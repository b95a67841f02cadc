use super::{Address, CODE_SIZE};
use crate::error;
use crate::lang::Error;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use tracing::{debug, warn};

type Result<T> = std::result::Result<T, Error>;

/// ## Program memory
///
/// A fixed-capacity buffer holding the bytes of the source file.
/// Anything past `CODE_SIZE` bytes is dropped.

pub struct Program {
    code: Box<[u8]>,
    len: usize,
    truncated: bool,
}

impl Default for Program {
    fn default() -> Program {
        Program {
            code: vec![0; CODE_SIZE].into_boxed_slice(),
            len: 0,
            truncated: false,
        }
    }
}

impl std::fmt::Debug for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.bytes()))
    }
}

impl Program {
    pub fn from_bytes(bytes: &[u8]) -> Program {
        let mut program = Program::default();
        let len = bytes.len().min(CODE_SIZE);
        program.code[..len].copy_from_slice(&bytes[..len]);
        program.len = len;
        program.truncated = bytes.len() > CODE_SIZE;
        program
    }

    pub fn load<R: Read>(source: R) -> Result<Program> {
        Program::read(source).map_err(|e| error!(DiskIoError; e.to_string()))
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Program> {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                let msg = format!("{}: {}", path.display(), e);
                return match e.kind() {
                    ErrorKind::NotFound => Err(error!(FileNotFound; msg)),
                    _ => Err(error!(DiskIoError; msg)),
                };
            }
        };
        Program::read(file)
            .map_err(|e| error!(DiskIoError; format!("{}: {}", path.display(), e)))
    }

    fn read<R: Read>(mut source: R) -> std::io::Result<Program> {
        let mut program = Program::default();
        while program.len < CODE_SIZE {
            match source.read(&mut program.code[program.len..]) {
                Ok(0) => break,
                Ok(n) => program.len += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        if program.len == CODE_SIZE {
            let mut extra = [0u8; 1];
            program.truncated = loop {
                match source.read(&mut extra) {
                    Ok(n) => break n > 0,
                    Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                    Err(_) => break false,
                }
            };
            if program.truncated {
                warn!("program truncated to {} bytes", CODE_SIZE);
            }
        }
        debug!("loaded {} program bytes", program.len);
        Ok(program)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The source had more than `CODE_SIZE` bytes.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn get(&self, addr: Address) -> Option<u8> {
        self.bytes().get(addr as usize).copied()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.code[..self.len]
    }
}
