//! Cross-checks of the opcode table against the vendor listing.

use std::collections::HashSet;

use max10_ir::{ir, Error, Group, Instruction, IR_LEN};
use proptest::prelude::*;

/// The vendor listing, transcribed as (name, hex literal)
const VENDOR_TABLE: &[(&str, u16)] = &[
    ("PULSE_NCONFIG", 0x1),
    ("PRELOAD_SAMPLE", 0x5),
    ("IDCODE", 0x6),
    ("USERCODE", 0x7),
    ("CLAMP", 0xa),
    ("HIGHZ", 0xb),
    ("EXTEST", 0xf),
    ("USER0", 0xc),
    ("CONFIG_IO", 0xd),
    ("USER1", 0xe),
    ("CHANGE_EDREG", 0x15),
    ("BGP_DISABLE", 0x166),
    ("BGP_ENABLE", 0x199),
    ("ISC_DISABLE", 0x201),
    ("ISC_ADDRESS_SHIFT", 0x203),
    ("ISC_READ", 0x205),
    ("ISC_NOOP", 0x210),
    ("ISC_ENABLE", 0x2cc),
    ("ISC_ERASE", 0x2f2),
    ("ISC_PROGRAM", 0x2f4),
    ("LOCK", 0x202),
    ("UNLOCK", 0x208),
    ("PRIVATE_1", 0x240),
    ("PRIVATE_2", 0x230),
    ("PRIVATE_3", 0x2e0),
    ("PRIVATE_4", 0x231),
    ("DSM_VERIFY", 0x307),
    ("DSM_ICB_PROGRAM", 0x3f4),
    ("DSM_CLEAR", 0x3f2),
    ("BYPASS", 0x3ff),
];

#[test]
fn enum_reproduces_vendor_table_in_order() {
    assert_eq!(Instruction::ALL.len(), VENDOR_TABLE.len());
    for (insn, &(name, bits)) in Instruction::ALL.iter().zip(VENDOR_TABLE) {
        assert_eq!(insn.name(), name);
        assert_eq!(insn.bits(), bits, "{}", name);
    }
}

#[test]
fn raw_constants_match_vendor_table() {
    let raw = [
        ir::PULSE_NCONFIG,
        ir::PRELOAD_SAMPLE,
        ir::IDCODE,
        ir::USERCODE,
        ir::CLAMP,
        ir::HIGHZ,
        ir::EXTEST,
        ir::USER0,
        ir::CONFIG_IO,
        ir::USER1,
        ir::CHANGE_EDREG,
        ir::BGP_DISABLE,
        ir::BGP_ENABLE,
        ir::ISC_DISABLE,
        ir::ISC_ADDRESS_SHIFT,
        ir::ISC_READ,
        ir::ISC_NOOP,
        ir::ISC_ENABLE,
        ir::ISC_ERASE,
        ir::ISC_PROGRAM,
        ir::LOCK,
        ir::UNLOCK,
        ir::PRIVATE_1,
        ir::PRIVATE_2,
        ir::PRIVATE_3,
        ir::PRIVATE_4,
        ir::DSM_VERIFY,
        ir::DSM_ICB_PROGRAM,
        ir::DSM_CLEAR,
        ir::BYPASS,
    ];
    let expected: Vec<u16> = VENDOR_TABLE.iter().map(|&(_, bits)| bits).collect();
    assert_eq!(raw.to_vec(), expected);
}

#[test]
fn end_to_end_decimal_values() {
    assert_eq!(ir::ISC_PROGRAM, 756);
    assert_eq!(ir::BYPASS, 1023);
    assert_eq!(ir::IDCODE, 6);
    assert_eq!("ISC_PROGRAM".parse::<Instruction>().unwrap().bits(), 756);
    assert_eq!("BYPASS".parse::<Instruction>().unwrap().bits(), 1023);
}

#[test]
fn names_and_values_are_unique() {
    let names: HashSet<_> = Instruction::ALL.iter().map(|i| i.name()).collect();
    let values: HashSet<_> = Instruction::ALL.iter().map(|i| i.bits()).collect();
    assert_eq!(names.len(), Instruction::ALL.len());
    assert_eq!(values.len(), Instruction::ALL.len());
}

#[test]
fn every_value_fits_the_register() {
    for insn in Instruction::ALL {
        assert!(insn.bits() < 1 << IR_LEN, "{} is too wide", insn);
    }
}

#[test]
fn placeholders_are_not_defined() {
    for name in ["NEW_1", "NEW_2", "NEW_3"] {
        assert_eq!(
            Instruction::from_name(name),
            Err(Error::UnknownName(name.to_string()))
        );
        assert!(Instruction::ALL.iter().all(|i| i.name() != name));
    }
}

#[test]
fn every_instruction_has_exactly_one_group() {
    let mut seen = HashSet::new();
    for group in Group::ALL {
        for insn in group.instructions() {
            assert!(seen.insert(insn), "{} listed twice", insn);
        }
    }
    assert_eq!(seen.len(), Instruction::ALL.len());
}

#[test]
fn name_round_trips_through_display() {
    for insn in Instruction::ALL {
        assert_eq!(insn.to_string().parse::<Instruction>(), Ok(insn));
        assert_eq!(insn.name().to_lowercase().parse::<Instruction>(), Ok(insn));
    }
}

proptest! {
    #[test]
    fn from_bits_agrees_with_table(bits in any::<u16>()) {
        let listed = VENDOR_TABLE.iter().find(|&&(_, b)| b == bits);
        match Instruction::from_bits(bits) {
            Ok(insn) => {
                prop_assert_eq!(insn.bits(), bits);
                prop_assert_eq!(Some(insn.name()), listed.map(|&(n, _)| n));
            }
            Err(Error::OutOfRange(v)) => {
                prop_assert_eq!(v, bits);
                prop_assert!(bits >= 1 << IR_LEN);
            }
            Err(Error::UnknownOpcode(v)) => {
                prop_assert_eq!(v, bits);
                prop_assert!(bits < 1 << IR_LEN);
                prop_assert!(listed.is_none());
            }
            Err(e) => prop_assert!(false, "unexpected error {}", e),
        }
    }

    #[test]
    fn ir_bytes_hold_the_opcode_lsb_first(idx in 0..Instruction::ALL.len()) {
        let insn = Instruction::ALL[idx];
        let bytes = insn.ir_bytes();
        prop_assert_eq!(u16::from_le_bytes(bytes), insn.bits());
        let from_bits = insn
            .tdi_bits()
            .enumerate()
            .fold(0u16, |acc, (i, b)| acc | (u16::from(b) << i));
        prop_assert_eq!(from_bits, insn.bits());
    }
}
