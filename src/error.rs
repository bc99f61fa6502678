use alloc::string::String;

use thiserror::Error;

/// Failure to map a value or a name onto a MAX10 instruction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The value fits in the instruction register but no opcode is assigned to it
    #[error("no MAX10 instruction has opcode 0x{0:03x}")]
    UnknownOpcode(u16),

    /// The value is wider than the instruction register
    #[error("0x{0:x} does not fit in the {len}-bit instruction register", len = crate::ir::IR_LEN)]
    OutOfRange(u16),

    /// No instruction goes by this name
    #[error("unknown MAX10 instruction name `{0}`")]
    UnknownName(String),
}
