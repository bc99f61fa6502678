//! The MAX10 instruction set as a closed enum.
//!
//! `Instruction` carries the same values as the constants in `ir`, but lets a client go from a
//! value or a name back to the instruction, and knows how to lay itself out for a TAP library.
//! Opcodes fall into groups only by naming convention; `Group` makes that convention explicit.
use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use crate::error::Error;
use crate::ir::{self, IR_LEN};

/// Number of bytes needed to hold one opcode, LSB first
pub const IR_BYTES: usize = (IR_LEN + 7) / 8;

const IR_MASK: u16 = (1 << IR_LEN) - 1;

#[repr(u16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Instruction {
    PulseNconfig = ir::PULSE_NCONFIG,
    PreloadSample = ir::PRELOAD_SAMPLE,
    Idcode = ir::IDCODE,
    Usercode = ir::USERCODE,
    Clamp = ir::CLAMP,
    Highz = ir::HIGHZ,
    Extest = ir::EXTEST,

    User0 = ir::USER0,
    ConfigIo = ir::CONFIG_IO,
    User1 = ir::USER1,
    ChangeEdreg = ir::CHANGE_EDREG,

    BgpDisable = ir::BGP_DISABLE,
    BgpEnable = ir::BGP_ENABLE,

    IscDisable = ir::ISC_DISABLE,
    IscAddressShift = ir::ISC_ADDRESS_SHIFT,
    IscRead = ir::ISC_READ,
    IscNoop = ir::ISC_NOOP,
    IscEnable = ir::ISC_ENABLE,
    IscErase = ir::ISC_ERASE,
    IscProgram = ir::ISC_PROGRAM,

    Lock = ir::LOCK,
    Unlock = ir::UNLOCK,

    Private1 = ir::PRIVATE_1,
    Private2 = ir::PRIVATE_2,
    Private3 = ir::PRIVATE_3,
    Private4 = ir::PRIVATE_4,

    DsmVerify = ir::DSM_VERIFY,
    DsmIcbProgram = ir::DSM_ICB_PROGRAM,
    DsmClear = ir::DSM_CLEAR,
    Bypass = ir::BYPASS,
}

/// Family an instruction belongs to, going by its name
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Group {
    /// IEEE 1149.1 instructions, plus PULSE_NCONFIG
    Standard,
    /// USER0/USER1 virtual JTAG hubs and the I/O configuration registers
    User,
    Bgp,
    /// In-system configuration
    Isc,
    /// LOCK and UNLOCK
    Security,
    /// Undocumented opcodes
    Private,
    /// Data/storage module
    Dsm,
}

impl Instruction {
    /// Every instruction, in the order the vendor lists them
    pub const ALL: [Instruction; 30] = [
        Instruction::PulseNconfig,
        Instruction::PreloadSample,
        Instruction::Idcode,
        Instruction::Usercode,
        Instruction::Clamp,
        Instruction::Highz,
        Instruction::Extest,
        Instruction::User0,
        Instruction::ConfigIo,
        Instruction::User1,
        Instruction::ChangeEdreg,
        Instruction::BgpDisable,
        Instruction::BgpEnable,
        Instruction::IscDisable,
        Instruction::IscAddressShift,
        Instruction::IscRead,
        Instruction::IscNoop,
        Instruction::IscEnable,
        Instruction::IscErase,
        Instruction::IscProgram,
        Instruction::Lock,
        Instruction::Unlock,
        Instruction::Private1,
        Instruction::Private2,
        Instruction::Private3,
        Instruction::Private4,
        Instruction::DsmVerify,
        Instruction::DsmIcbProgram,
        Instruction::DsmClear,
        Instruction::Bypass,
    ];

    /// The opcode to shift into the instruction register
    pub const fn bits(self) -> u16 {
        self as u16
    }

    /// The vendor's name for this instruction, e.g. `ISC_PROGRAM`
    pub const fn name(self) -> &'static str {
        match self {
            Instruction::PulseNconfig => "PULSE_NCONFIG",
            Instruction::PreloadSample => "PRELOAD_SAMPLE",
            Instruction::Idcode => "IDCODE",
            Instruction::Usercode => "USERCODE",
            Instruction::Clamp => "CLAMP",
            Instruction::Highz => "HIGHZ",
            Instruction::Extest => "EXTEST",
            Instruction::User0 => "USER0",
            Instruction::ConfigIo => "CONFIG_IO",
            Instruction::User1 => "USER1",
            Instruction::ChangeEdreg => "CHANGE_EDREG",
            Instruction::BgpDisable => "BGP_DISABLE",
            Instruction::BgpEnable => "BGP_ENABLE",
            Instruction::IscDisable => "ISC_DISABLE",
            Instruction::IscAddressShift => "ISC_ADDRESS_SHIFT",
            Instruction::IscRead => "ISC_READ",
            Instruction::IscNoop => "ISC_NOOP",
            Instruction::IscEnable => "ISC_ENABLE",
            Instruction::IscErase => "ISC_ERASE",
            Instruction::IscProgram => "ISC_PROGRAM",
            Instruction::Lock => "LOCK",
            Instruction::Unlock => "UNLOCK",
            Instruction::Private1 => "PRIVATE_1",
            Instruction::Private2 => "PRIVATE_2",
            Instruction::Private3 => "PRIVATE_3",
            Instruction::Private4 => "PRIVATE_4",
            Instruction::DsmVerify => "DSM_VERIFY",
            Instruction::DsmIcbProgram => "DSM_ICB_PROGRAM",
            Instruction::DsmClear => "DSM_CLEAR",
            Instruction::Bypass => "BYPASS",
        }
    }

    /// The family this instruction is listed under
    pub const fn group(self) -> Group {
        match self {
            Instruction::PulseNconfig
            | Instruction::PreloadSample
            | Instruction::Idcode
            | Instruction::Usercode
            | Instruction::Clamp
            | Instruction::Highz
            | Instruction::Extest
            | Instruction::Bypass => Group::Standard,

            Instruction::User0
            | Instruction::ConfigIo
            | Instruction::User1
            | Instruction::ChangeEdreg => Group::User,

            Instruction::BgpDisable | Instruction::BgpEnable => Group::Bgp,

            Instruction::IscDisable
            | Instruction::IscAddressShift
            | Instruction::IscRead
            | Instruction::IscNoop
            | Instruction::IscEnable
            | Instruction::IscErase
            | Instruction::IscProgram => Group::Isc,

            Instruction::Lock | Instruction::Unlock => Group::Security,

            Instruction::Private1
            | Instruction::Private2
            | Instruction::Private3
            | Instruction::Private4 => Group::Private,

            Instruction::DsmVerify | Instruction::DsmIcbProgram | Instruction::DsmClear => Group::Dsm,
        }
    }

    /// Look up the instruction with opcode `bits`.  Values wider than the instruction register
    /// are rejected with `Error::OutOfRange`, unassigned ones with `Error::UnknownOpcode`.
    pub fn from_bits(bits: u16) -> Result<Self, Error> {
        if bits & !IR_MASK != 0 {
            return Err(Error::OutOfRange(bits));
        }
        Self::ALL
            .iter()
            .copied()
            .find(|i| i.bits() == bits)
            .ok_or(Error::UnknownOpcode(bits))
    }

    /// Look up an instruction by its vendor name.  Case and surrounding whitespace are ignored.
    pub fn from_name(name: &str) -> Result<Self, Error> {
        let wanted = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|i| i.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownName(wanted.to_string()))
    }

    /// The opcode packed LSB first, as `Taps::write_ir` and friends expect it.  Only the low
    /// `IR_LEN % 8` bits of the last byte are significant.
    pub const fn ir_bytes(self) -> [u8; IR_BYTES] {
        self.bits().to_le_bytes()
    }

    /// The bits to present on TDI, in shift order (LSB first).  Yields exactly `IR_LEN` values.
    pub fn tdi_bits(self) -> impl Iterator<Item = bool> {
        let bits = self.bits();
        (0..IR_LEN).map(move |i| (bits >> i) & 1 != 0)
    }
}

impl Group {
    /// Every group, in the order its first member appears
    pub const ALL: [Group; 7] = [
        Group::Standard,
        Group::User,
        Group::Bgp,
        Group::Isc,
        Group::Security,
        Group::Private,
        Group::Dsm,
    ];

    /// Members of this group, in vendor order
    pub fn instructions(self) -> impl Iterator<Item = Instruction> {
        Instruction::ALL.into_iter().filter(move |i| i.group() == self)
    }

    /// Lower-case name, as accepted by `--group`
    pub const fn name(self) -> &'static str {
        match self {
            Group::Standard => "standard",
            Group::User => "user",
            Group::Bgp => "bgp",
            Group::Isc => "isc",
            Group::Security => "security",
            Group::Private => "private",
            Group::Dsm => "dsm",
        }
    }
}

impl From<Instruction> for u16 {
    fn from(value: Instruction) -> Self {
        value.bits()
    }
}

impl TryFrom<u16> for Instruction {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Instruction::from_bits(value)
    }
}

impl FromStr for Instruction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Instruction::from_name(s)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::LowerHex for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.bits(), f)
    }
}

impl fmt::UpperHex for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.bits(), f)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
