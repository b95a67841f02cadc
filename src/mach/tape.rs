use super::{Address, DATA_SIZE};

const POINTER_MASK: Address = (DATA_SIZE - 1) as Address;

/// ## Data memory
///
/// A ring of byte cells and the data pointer.
/// Neither the cells nor the pointer can go out of range.

pub struct Tape {
    cells: Box<[u8]>,
    pointer: Address,
}

impl Default for Tape {
    fn default() -> Tape {
        Tape {
            cells: vec![0; DATA_SIZE].into_boxed_slice(),
            pointer: 0,
        }
    }
}

impl Tape {
    pub fn new() -> Tape {
        Tape::default()
    }
    pub fn pointer(&self) -> Address {
        self.pointer
    }
    pub fn get(&self) -> u8 {
        self.cells[self.pointer as usize]
    }
    pub fn set(&mut self, val: u8) {
        self.cells[self.pointer as usize] = val;
    }
    pub fn cell(&self, addr: Address) -> u8 {
        self.cells[(addr & POINTER_MASK) as usize]
    }
    pub fn increment(&mut self) {
        self.set(self.get().wrapping_add(1));
    }
    pub fn decrement(&mut self) {
        self.set(self.get().wrapping_sub(1));
    }
    pub fn move_right(&mut self) {
        self.pointer = self.pointer.wrapping_add(1) & POINTER_MASK;
    }
    pub fn move_left(&mut self) {
        self.pointer = self.pointer.wrapping_sub(1) & POINTER_MASK;
    }
}
