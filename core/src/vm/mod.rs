//! A toy stored-program computer.
//!
//! Twenty bytes of memory hold the program, one output word and two input
//! words. Words are 16-bit little-endian. Register 0 is the program counter,
//! registers 1 and 2 are general purpose.

mod machine;
mod memory;
mod opcode;

pub use machine::{RunSummary, Vm, REGISTER_COUNT};
pub use memory::{Memory, INPUT1, INPUT2, MEM_SIZE, OUTPUT};
pub use opcode::Opcode;
