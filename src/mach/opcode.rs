use std::convert::TryFrom;

/// ## Virtual machine instruction set
///
/// The Brainfuck machine has no registers, only a data pointer
/// into the tape. Every byte of the program that is not one of
/// these eight characters is a comment.

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    /// Add one to the current cell.
    IncValue,
    /// Subtract one from the current cell.
    DecValue,
    /// Move the data pointer one cell right.
    IncPointer,
    /// Move the data pointer one cell left.
    DecPointer,
    /// Branch past the matching `]` if the current cell is zero.
    JumpForward,
    /// Branch back past the matching `[` if the current cell is not zero.
    JumpBackward,
    /// Output the current cell.
    Write,
    /// Store one input byte in the current cell.
    Read,
}

impl TryFrom<u8> for Opcode {
    type Error = u8;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        use Opcode::*;
        match byte {
            b'+' => Ok(IncValue),
            b'-' => Ok(DecValue),
            b'>' => Ok(IncPointer),
            b'<' => Ok(DecPointer),
            b'[' => Ok(JumpForward),
            b']' => Ok(JumpBackward),
            b'.' => Ok(Write),
            b',' => Ok(Read),
            _ => Err(byte),
        }
    }
}

impl From<Opcode> for u8 {
    fn from(opcode: Opcode) -> u8 {
        use Opcode::*;
        match opcode {
            IncValue => b'+',
            DecValue => b'-',
            IncPointer => b'>',
            DecPointer => b'<',
            JumpForward => b'[',
            JumpBackward => b']',
            Write => b'.',
            Read => b',',
        }
    }
}

impl std::fmt::Debug for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", u8::from(*self) as char)
    }
}
