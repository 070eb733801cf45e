use std::path::Path;

use crate::error::VmError;

pub const MEM_SIZE: usize = 20;
pub const OUTPUT: usize = 0x0e;
pub const INPUT1: usize = 0x10;
pub const INPUT2: usize = 0x12;

/// Main memory. Executing a program mutates it in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    bytes: [u8; MEM_SIZE],
}

impl Memory {
    pub fn new(bytes: [u8; MEM_SIZE]) -> Self {
        Self { bytes }
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, VmError> {
        let bytes: [u8; MEM_SIZE] = bytes.try_into().map_err(|_| VmError::ImageSize {
            expected: MEM_SIZE,
            actual: bytes.len(),
        })?;
        Ok(Self { bytes })
    }

    /// Reads a raw memory image from disk.
    pub fn load(path: &Path) -> Result<Self, VmError> {
        let data = std::fs::read(path).map_err(VmError::Io)?;
        tracing::debug!(target: "archtools.vm", path = %path.display(), len = data.len(), "loaded image");
        Self::from_slice(&data)
    }

    pub fn as_bytes(&self) -> &[u8; MEM_SIZE] {
        &self.bytes
    }

    pub fn byte(&self, addr: usize) -> Result<u8, VmError> {
        self.bytes
            .get(addr)
            .copied()
            .ok_or(VmError::AddressOutOfBounds {
                addr,
                size: MEM_SIZE,
            })
    }

    pub fn read_word(&self, addr: usize) -> Result<u16, VmError> {
        let lo = self.byte(addr)?;
        let hi = self.byte(Self::high_byte(addr)?)?;
        Ok(u16::from_le_bytes([lo, hi]))
    }

    pub fn write_word(&mut self, addr: usize, value: u16) -> Result<(), VmError> {
        let hi = Self::high_byte(addr)?;
        if hi >= MEM_SIZE {
            return Err(VmError::AddressOutOfBounds {
                addr: hi,
                size: MEM_SIZE,
            });
        }
        self.bytes[addr..=hi].copy_from_slice(&value.to_le_bytes());
        Ok(())
    }

    fn high_byte(addr: usize) -> Result<usize, VmError> {
        addr.checked_add(1).ok_or(VmError::AddressOutOfBounds {
            addr,
            size: MEM_SIZE,
        })
    }

    pub fn output(&self) -> u16 {
        u16::from_le_bytes([self.bytes[OUTPUT], self.bytes[OUTPUT + 1]])
    }

    pub fn input1(&self) -> u16 {
        u16::from_le_bytes([self.bytes[INPUT1], self.bytes[INPUT1 + 1]])
    }

    pub fn input2(&self) -> u16 {
        u16::from_le_bytes([self.bytes[INPUT2], self.bytes[INPUT2 + 1]])
    }

    pub fn set_input1(&mut self, value: u16) {
        self.bytes[INPUT1..INPUT1 + 2].copy_from_slice(&value.to_le_bytes());
    }

    pub fn set_input2(&mut self, value: u16) {
        self.bytes[INPUT2..INPUT2 + 2].copy_from_slice(&value.to_le_bytes());
    }
}
