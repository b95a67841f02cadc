use super::{Address, Opcode, Program, Stack, CODE_SIZE};
use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

/// ## Jump table
///
/// Maps the address of every bracket to the address where execution
/// resumes when its branch is taken: one past the matching `]` for a `[`,
/// one past the matching `[` for a `]`. Built once and never changed.

pub struct Link {
    targets: Box<[Option<Address>]>,
    entries: usize,
}

impl std::fmt::Debug for Link {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(
                self.targets
                    .iter()
                    .enumerate()
                    .filter_map(|(addr, target)| target.map(|t| (addr, t))),
            )
            .finish()
    }
}

impl Link {
    pub fn new(program: &Program) -> Result<Link> {
        let mut link = Link {
            targets: vec![None; CODE_SIZE].into_boxed_slice(),
            entries: 0,
        };
        let mut pending: Stack<Address> = Stack::new();
        for (addr, &byte) in program.bytes().iter().enumerate() {
            let addr = addr as Address;
            match Opcode::try_from(byte) {
                Ok(Opcode::JumpForward) => pending.push(addr),
                Ok(Opcode::JumpBackward) => {
                    if pending.is_empty() {
                        return Err(error!(UnbalancedBrackets, addr; "UNMATCHED ]"));
                    }
                    let open = pending.pop()?;
                    link.insert(open, addr + 1);
                    link.insert(addr, open + 1);
                }
                _ => {}
            }
        }
        if let Some(&open) = pending.last() {
            return Err(error!(UnbalancedBrackets, open; "UNMATCHED ["));
        }
        debug!("resolved {} jump targets", link.entries);
        Ok(link)
    }

    fn insert(&mut self, addr: Address, target: Address) {
        let slot = &mut self.targets[addr as usize];
        debug_assert!(slot.is_none());
        *slot = Some(target);
        self.entries += 1;
    }

    pub fn target(&self, addr: Address) -> Option<Address> {
        self.targets.get(addr as usize).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }
}
