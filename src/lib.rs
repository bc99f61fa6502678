//! This crate holds the JTAG instruction register opcodes of Intel's MAX10 FPGA family.  It does
//! not talk to a device; it is the vocabulary a JTAG driver needs to select an operation on a
//! MAX10 TAP.
//!
//! At the lowest level, the `ir` module has one `u16` constant per opcode, named as in the
//! vendor's boundary-scan description, so `ir::ISC_PROGRAM` can be dropped straight into a
//! driver that shifts raw values.  All opcodes are `ir::IR_LEN` (10) bits wide.
//!
//! The `Instruction` enum wraps the same table.  It can be looked up by value or by name, grouped
//! by family (`ISC_*`, `DSM_*`, ...), and packed into the LSB-first byte buffer that TAP libraries
//! such as `jtag-taps` take for `write_ir`.  Sequencing the opcodes (unlock before erase, erase
//! before program, ...) is left to the driver.
//!
//! The `cli` feature builds the `max10-ir` host tool, which lists and decodes the table.
//!
//! # Example
//! ```
//! use max10_ir::{ir, Instruction};
//!
//! let isc = Instruction::from_name("isc_program").unwrap();
//! assert_eq!(isc.bits(), ir::ISC_PROGRAM);
//! assert_eq!(isc.bits(), 756);
//! assert_eq!(isc.ir_bytes(), [0xf4, 0x02]);
//! assert_eq!(Instruction::from_bits(0x3ff).unwrap(), Instruction::Bypass);
//! ```

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod error;
pub mod instruction;
pub mod ir;

pub use error::Error;
pub use instruction::{Group, Instruction, IR_BYTES};
pub use ir::IR_LEN;
