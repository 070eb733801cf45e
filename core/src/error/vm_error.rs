// core/src/error/vm_error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VmError {
    #[error("illegal opcode 0x{opcode:02x} at pc={pc}")]
    IllegalOpcode { opcode: u8, pc: u16 },

    #[error("invalid register r{register} at pc={pc}")]
    InvalidRegister { register: u8, pc: u16 },

    #[error("address out of bounds: 0x{addr:02x} (memory is {size} bytes)")]
    AddressOutOfBounds { addr: usize, size: usize },

    #[error("step limit exceeded: {limit} instructions without halt")]
    StepLimitExceeded { limit: u64 },

    #[error("memory image must be exactly {expected} bytes, got {actual}")]
    ImageSize { expected: usize, actual: usize },

    #[error("failed to read memory image")]
    Io(#[source] std::io::Error),
}
