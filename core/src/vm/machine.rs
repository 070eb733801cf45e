use super::memory::Memory;
use super::opcode::Opcode;
use crate::error::VmError;

pub const REGISTER_COUNT: usize = 3;
const PC: usize = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub steps: u64,
    pub registers: [u16; REGISTER_COUNT],
}

impl RunSummary {
    pub fn pc(&self) -> u16 {
        self.registers[PC]
    }
}

/// Register file plus a step budget. Reusable across runs; every run starts
/// from zeroed registers.
#[derive(Debug, Clone)]
pub struct Vm {
    registers: [u16; REGISTER_COUNT],
    max_steps: u64,
}

impl Vm {
    pub fn new(max_steps: u64) -> Self {
        Self {
            registers: [0; REGISTER_COUNT],
            max_steps,
        }
    }

    pub fn registers(&self) -> [u16; REGISTER_COUNT] {
        self.registers
    }

    /// Fetch, decode and execute from address 0 until `halt`.
    pub fn run(&mut self, memory: &mut Memory) -> Result<RunSummary, VmError> {
        self.registers = [0; REGISTER_COUNT];
        let mut steps: u64 = 0;

        loop {
            if steps >= self.max_steps {
                return Err(VmError::StepLimitExceeded {
                    limit: self.max_steps,
                });
            }
            steps += 1;

            let pc = self.registers[PC];
            let byte = memory.byte(usize::from(pc))?;
            let op = Opcode::try_from(byte)
                .map_err(|opcode| VmError::IllegalOpcode { opcode, pc })?;
            tracing::trace!(target: "archtools.vm", pc, op = op.mnemonic(), "execute");

            match op {
                Opcode::LoadWord => {
                    let reg = self.next_register(memory)?;
                    let addr = self.next_operand(memory)?;
                    self.registers[reg] = memory.read_word(usize::from(addr))?;
                }
                Opcode::StoreWord => {
                    let reg = self.next_register(memory)?;
                    let addr = self.next_operand(memory)?;
                    memory.write_word(usize::from(addr), self.registers[reg])?;
                }
                Opcode::Add => {
                    let r1 = self.next_register(memory)?;
                    let r2 = self.next_register(memory)?;
                    self.registers[r1] = self.registers[r1].wrapping_add(self.registers[r2]);
                }
                Opcode::Sub => {
                    let r1 = self.next_register(memory)?;
                    let r2 = self.next_register(memory)?;
                    self.registers[r1] = self.registers[r1].wrapping_sub(self.registers[r2]);
                }
                Opcode::Beq => {
                    let r1 = self.next_register(memory)?;
                    let r2 = self.next_register(memory)?;
                    let target = self.next_operand(memory)?;
                    if self.registers[r1] == self.registers[r2] {
                        self.registers[PC] = u16::from(target);
                        continue;
                    }
                }
                Opcode::Halt => {
                    let summary = RunSummary {
                        steps,
                        registers: self.registers,
                    };
                    tracing::debug!(
                        target: "archtools.vm",
                        steps,
                        pc = summary.pc(),
                        r1 = summary.registers[1],
                        r2 = summary.registers[2],
                        "halted"
                    );
                    return Ok(summary);
                }
            }

            self.registers[PC] = self.registers[PC].wrapping_add(1);
        }
    }

    fn next_operand(&mut self, memory: &Memory) -> Result<u8, VmError> {
        self.registers[PC] = self.registers[PC].wrapping_add(1);
        memory.byte(usize::from(self.registers[PC]))
    }

    fn next_register(&mut self, memory: &Memory) -> Result<usize, VmError> {
        let register = self.next_operand(memory)?;
        if usize::from(register) >= REGISTER_COUNT {
            return Err(VmError::InvalidRegister {
                register,
                pc: self.registers[PC],
            });
        }
        Ok(usize::from(register))
    }
}
