#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Opcode {
    LoadWord = 0x01,
    StoreWord = 0x02,
    Add = 0x03,
    Sub = 0x04,
    Beq = 0x05,
    Halt = 0xff,
}

impl TryFrom<u8> for Opcode {
    type Error = u8;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            0x01 => Ok(Opcode::LoadWord),
            0x02 => Ok(Opcode::StoreWord),
            0x03 => Ok(Opcode::Add),
            0x04 => Ok(Opcode::Sub),
            0x05 => Ok(Opcode::Beq),
            0xff => Ok(Opcode::Halt),
            other => Err(other),
        }
    }
}

impl Opcode {
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::LoadWord => "load_word",
            Opcode::StoreWord => "store_word",
            Opcode::Add => "add",
            Opcode::Sub => "sub",
            Opcode::Beq => "beq",
            Opcode::Halt => "halt",
        }
    }
}
