//! Raw instruction register opcodes of the MAX10 JTAG TAP, as plain `u16` constants.
//!
//! These are the values to shift into the instruction register while in ShiftIR.  Every opcode is
//! `IR_LEN` bits wide.

/// Width of the MAX10 instruction register in bits
pub const IR_LEN: usize = 10;

/// Emulate a pulse on nCONFIG, triggering reconfiguration
pub const PULSE_NCONFIG: u16 = 0x1;
/// IEEE 1149.1 SAMPLE/PRELOAD
pub const PRELOAD_SAMPLE: u16 = 0x5;
/// Select the 32-bit device identification register
pub const IDCODE: u16 = 0x6;
/// Select the 32-bit user electronic signature register
pub const USERCODE: u16 = 0x7;
/// Hold the boundary-scan outputs while selecting the bypass register
pub const CLAMP: u16 = 0xa;
/// Tri-state all outputs while selecting the bypass register
pub const HIGHZ: u16 = 0xb;
/// Drive the pins from the boundary-scan register
pub const EXTEST: u16 = 0xf;

pub const USER0: u16 = 0xc;
pub const CONFIG_IO: u16 = 0xd;
pub const USER1: u16 = 0xe;
pub const CHANGE_EDREG: u16 = 0x15;

pub const BGP_DISABLE: u16 = 0x166;
pub const BGP_ENABLE: u16 = 0x199;

pub const ISC_DISABLE: u16 = 0x201;
pub const ISC_ADDRESS_SHIFT: u16 = 0x203;
pub const ISC_READ: u16 = 0x205;
pub const ISC_NOOP: u16 = 0x210;
pub const ISC_ENABLE: u16 = 0x2cc;
pub const ISC_ERASE: u16 = 0x2f2;
pub const ISC_PROGRAM: u16 = 0x2f4;

pub const LOCK: u16 = 0x202;
pub const UNLOCK: u16 = 0x208;

pub const PRIVATE_1: u16 = 0x240;
pub const PRIVATE_2: u16 = 0x230;
pub const PRIVATE_3: u16 = 0x2e0;
pub const PRIVATE_4: u16 = 0x231;

pub const DSM_VERIFY: u16 = 0x307;
pub const DSM_ICB_PROGRAM: u16 = 0x3f4;
pub const DSM_CLEAR: u16 = 0x3f2;
/// Select the 1-bit bypass register
pub const BYPASS: u16 = 0x3ff;

// NEW_1, NEW_2 and NEW_3 are reserved names with no known opcode yet.
