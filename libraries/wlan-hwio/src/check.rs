// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Consistency checks for register maps and descriptor layouts.
//!
//! Descriptor checks recompute every `_MASK` from `_LSB`/`_MSB`, require the
//! fields to tile every 32-bit word exactly, and require the field table to
//! list each word from bit 0 upwards. Together this means the field widths
//! add up to the descriptor size.
//!
//! Only the little-endian declaration order is checked. The big-endian order
//! is the same table walked backwards, so it holds whenever the little-endian
//! one does.
//!
//! Register checks require 4-byte alignment, contiguous non-empty field masks
//! inside `RMSK`, non-overlapping fields, a known `ATTR` and distinct
//! addresses inside a block. A register with an inferred address must sit
//! right after the `BASE_LSB` register of its ring.

use core::fmt;

use crate::access::Access;
use crate::chip::{BlockMap, ChipMap, Revision};
use crate::descriptor::{BitOrder, DescriptorLayout, FieldSpec};
use crate::register::HwioRegister;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// `_MASK` differs from the mask computed from `_LSB`/`_MSB`.
    MaskMismatch {
        descriptor: &'static str,
        field: &'static str,
        expected: u64,
        found: u64,
    },
    /// `_MSB` below `_LSB`, or past the end of the offset unit.
    BitRange {
        descriptor: &'static str,
        field: &'static str,
        lsb: u32,
        msb: u32,
    },
    /// `_OFFSET` is not a multiple of the offset unit.
    Misaligned {
        descriptor: &'static str,
        field: &'static str,
        offset: usize,
    },
    /// The field lies past the end of the descriptor.
    OutOfBounds {
        descriptor: &'static str,
        field: &'static str,
        offset: usize,
    },
    /// The field straddles two 32-bit words.
    CrossesDword {
        descriptor: &'static str,
        field: &'static str,
    },
    Overlap {
        descriptor: &'static str,
        field: &'static str,
        other: &'static str,
    },
    /// Bits of a word covered by no field.
    Gap {
        descriptor: &'static str,
        dword: usize,
        missing: u32,
    },
    /// The fields of a word are not listed from bit 0 upwards.
    OrderMismatch {
        descriptor: &'static str,
        dword: usize,
    },
    FieldOutsideRmsk {
        register: &'static str,
        field: &'static str,
    },
    NonContiguousMask {
        register: &'static str,
        field: &'static str,
    },
    FieldOverlap {
        register: &'static str,
        field: &'static str,
        other: &'static str,
    },
    PorOutsideRmsk {
        register: &'static str,
        por: u32,
    },
    BadAttribute {
        register: &'static str,
        attr: u32,
    },
    /// `MAXn` given without an index stride.
    BadIndex { register: &'static str },
    Unaligned {
        register: &'static str,
        offset: usize,
    },
    /// Two registers of a block claim the same address.
    AddressConflict {
        register: &'static str,
        other: &'static str,
        offset: usize,
    },
    /// An inferred address that is not 4 bytes past the matching
    /// `BASE_LSB` register.
    UnpairedInference {
        register: &'static str,
        offset: usize,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::LayoutError::*;

        match self {
            MaskMismatch {
                descriptor,
                field,
                expected,
                found,
            } => write!(
                f,
                "{}.{}: mask {:#018x}, expected {:#018x}",
                descriptor, field, found, expected
            ),
            BitRange {
                descriptor,
                field,
                lsb,
                msb,
            } => write!(f, "{}.{}: bad bit range [{}:{}]", descriptor, field, msb, lsb),
            Misaligned {
                descriptor,
                field,
                offset,
            } => write!(f, "{}.{}: misaligned offset {:#x}", descriptor, field, offset),
            OutOfBounds {
                descriptor,
                field,
                offset,
            } => write!(
                f,
                "{}.{}: offset {:#x} past end of descriptor",
                descriptor, field, offset
            ),
            CrossesDword { descriptor, field } => {
                write!(f, "{}.{}: field crosses a dword boundary", descriptor, field)
            }
            Overlap {
                descriptor,
                field,
                other,
            } => write!(f, "{}.{}: overlaps {}", descriptor, field, other),
            Gap {
                descriptor,
                dword,
                missing,
            } => write!(
                f,
                "{}: dword {} bits {:#010x} not covered",
                descriptor, dword, missing
            ),
            OrderMismatch { descriptor, dword } => write!(
                f,
                "{}: dword {} fields are not listed from bit 0 upwards",
                descriptor, dword
            ),
            FieldOutsideRmsk { register, field } => {
                write!(f, "{}.{}: field outside RMSK", register, field)
            }
            NonContiguousMask { register, field } => {
                write!(f, "{}.{}: BMSK is not contiguous at SHFT", register, field)
            }
            FieldOverlap {
                register,
                field,
                other,
            } => write!(f, "{}.{}: overlaps {}", register, field, other),
            PorOutsideRmsk { register, por } => {
                write!(f, "{}: POR {:#010x} has bits outside RMSK", register, por)
            }
            BadAttribute { register, attr } => {
                write!(f, "{}: unknown ATTR {:#x}", register, attr)
            }
            BadIndex { register } => write!(f, "{}: MAXn without stride", register),
            Unaligned { register, offset } => {
                write!(f, "{}: unaligned offset {:#x}", register, offset)
            }
            AddressConflict {
                register,
                other,
                offset,
            } => write!(f, "{}: address {:#x} also used by {}", register, offset, other),
            UnpairedInference { register, offset } => write!(
                f,
                "{}: inferred address {:#x} has no BASE_LSB register before it",
                register, offset
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LayoutError {}

pub fn check_register(reg: &HwioRegister) -> Result<(), LayoutError> {
    if reg.offset % 4 != 0 || reg.stride % 4 != 0 {
        return Err(LayoutError::Unaligned {
            register: reg.name,
            offset: reg.offset,
        });
    }
    if reg.max_index.is_some() && !reg.is_indexed() {
        return Err(LayoutError::BadIndex { register: reg.name });
    }
    if let Some(attr) = reg.attr {
        if Access::from_attr(attr).is_none() {
            return Err(LayoutError::BadAttribute {
                register: reg.name,
                attr,
            });
        }
    }
    if let (Some(por), Some(rmsk)) = (reg.por, reg.rmsk) {
        if por & !rmsk != 0 {
            return Err(LayoutError::PorOutsideRmsk {
                register: reg.name,
                por,
            });
        }
    }

    let rmsk = reg.read_mask();
    for (i, field) in reg.fields.iter().enumerate() {
        // An empty mask is not contiguous either.
        if !field.is_contiguous() {
            return Err(LayoutError::NonContiguousMask {
                register: reg.name,
                field: field.name,
            });
        }
        if field.bmsk & !rmsk != 0 {
            return Err(LayoutError::FieldOutsideRmsk {
                register: reg.name,
                field: field.name,
            });
        }
        if let Some(other) = reg.fields[..i].iter().find(|o| o.bmsk & field.bmsk != 0) {
            return Err(LayoutError::FieldOverlap {
                register: reg.name,
                field: field.name,
                other: other.name,
            });
        }
    }
    Ok(())
}

/// Offsets claimed by `reg`: every instance of a bounded indexed register,
/// otherwise just instance 0.
fn claimed(reg: &HwioRegister) -> impl Iterator<Item = usize> + '_ {
    let count = match (reg.is_indexed(), reg.max_index) {
        (true, Some(max)) => max as usize + 1,
        _ => 1,
    };
    (0..count).map(move |n| reg.offset + reg.stride * n)
}

/// True when `lsb` is the `BASE_LSB` register that `msb`'s inferred address
/// is derived from.
fn is_base_pair(lsb: &HwioRegister, msb: &HwioRegister) -> bool {
    match (
        lsb.name.strip_suffix("_BASE_LSB"),
        msb.name.strip_suffix("_BASE_MSB"),
    ) {
        (Some(ring), Some(other)) => ring == other && lsb.offset + 4 == msb.offset,
        _ => false,
    }
}

pub fn check_block(block: &BlockMap) -> Result<(), LayoutError> {
    log::debug!("check: block {} ({} registers)", block.name, block.registers.len());
    for (i, reg) in block.registers.iter().enumerate() {
        check_register(reg)?;
        if reg.inferred && !block.registers.iter().any(|lsb| is_base_pair(lsb, reg)) {
            return Err(LayoutError::UnpairedInference {
                register: reg.name,
                offset: reg.offset,
            });
        }
        for other in &block.registers[..i] {
            if let Some(offset) = claimed(reg).find(|off| claimed(other).any(|o| o == *off)) {
                return Err(LayoutError::AddressConflict {
                    register: reg.name,
                    other: other.name,
                    offset,
                });
            }
        }
    }
    Ok(())
}

fn check_field(layout: &DescriptorLayout, field: &FieldSpec) -> Result<(), LayoutError> {
    let unit = layout.unit;
    if field.msb < field.lsb || field.msb >= unit.bits() {
        return Err(LayoutError::BitRange {
            descriptor: layout.name,
            field: field.name,
            lsb: field.lsb,
            msb: field.msb,
        });
    }
    if field.mask != field.computed_mask() {
        return Err(LayoutError::MaskMismatch {
            descriptor: layout.name,
            field: field.name,
            expected: field.computed_mask(),
            found: field.mask,
        });
    }
    if field.offset % unit.bytes() != 0 {
        return Err(LayoutError::Misaligned {
            descriptor: layout.name,
            field: field.name,
            offset: field.offset,
        });
    }
    if field.dword_mask(unit).is_none() {
        return Err(LayoutError::CrossesDword {
            descriptor: layout.name,
            field: field.name,
        });
    }
    if field.dword_index(unit) >= layout.dwords {
        return Err(LayoutError::OutOfBounds {
            descriptor: layout.name,
            field: field.name,
            offset: field.offset,
        });
    }
    Ok(())
}

/// Walks the little-endian declaration order of one word and checks that
/// consecutive fields abut, from bit 0 to bit 31.
fn check_order(layout: &DescriptorLayout, dword: usize) -> Result<(), LayoutError> {
    let mismatch = LayoutError::OrderMismatch {
        descriptor: layout.name,
        dword,
    };
    let mut next = 0;
    for field in layout.declaration_order(dword, BitOrder::LittleEndian) {
        if field.dword_lsb() != next {
            return Err(mismatch);
        }
        next += field.width();
    }
    if next != 32 {
        return Err(mismatch);
    }
    Ok(())
}

pub fn check_descriptor(layout: &DescriptorLayout) -> Result<(), LayoutError> {
    log::debug!(
        "check: descriptor {} ({} dwords, {} fields)",
        layout.name,
        layout.dwords,
        layout.fields.len()
    );
    for field in layout.fields {
        check_field(layout, field)?;
    }

    let unit = layout.unit;
    for dword in 0..layout.dwords {
        let mut covered = 0u32;
        for field in layout.fields.iter().filter(|f| f.dword_index(unit) == dword) {
            let bits = field.dword_mask(unit).unwrap_or(0);
            if covered & bits != 0 {
                let other = layout
                    .fields
                    .iter()
                    .filter(|o| o.dword_index(unit) == dword && o.name != field.name)
                    .find(|o| o.dword_mask(unit).unwrap_or(0) & bits != 0)
                    .map_or("", |o| o.name);
                return Err(LayoutError::Overlap {
                    descriptor: layout.name,
                    field: field.name,
                    other,
                });
            }
            covered |= bits;
        }
        if covered != u32::MAX {
            return Err(LayoutError::Gap {
                descriptor: layout.name,
                dword,
                missing: !covered,
            });
        }
        check_order(layout, dword)?;
    }
    Ok(())
}

/// Checks every block and descriptor of one revision, passing each failure
/// to `report`. Returns the number of failures.
pub fn check_revision(rev: &Revision, mut report: impl FnMut(LayoutError)) -> usize {
    let mut failures = 0;
    for block in rev.blocks {
        if let Err(e) = check_block(block) {
            failures += 1;
            report(e);
        }
    }
    for layout in rev.descriptors {
        if let Err(e) = check_descriptor(layout) {
            failures += 1;
            report(e);
        }
    }
    failures
}

/// [`check_revision`] over all revisions of `chip`.
pub fn check_chip(chip: &ChipMap, mut report: impl FnMut(&Revision, LayoutError)) -> usize {
    chip.revisions
        .iter()
        .map(|rev| check_revision(rev, |e| report(rev, e)))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::HwioField;
    use crate::{hwio_registers, tlv_descriptor};

    tlv_descriptor! {
        mod good [2; Dword] {
            A @ 0x0 [3:0] = 0x0000000f,
            B @ 0x0 [31:4] = 0xfffffff0,
            C @ 0x4 [31:0] = 0xffffffff,
        }

        mod good_qword [4; Qword] {
            LO @ 0x0 [31:0] = 0x00000000ffffffff,
            HI @ 0x0 [63:32] = 0xffffffff00000000,
            X @ 0x8 [15:0] = 0x000000000000ffff,
            Y @ 0x8 [31:16] = 0x00000000ffff0000,
            Z @ 0x8 [63:32] = 0xffffffff00000000,
        }

        mod bad_mask [1; Dword] {
            A @ 0x0 [3:0] = 0x0000001f,
            B @ 0x0 [31:4] = 0xfffffff0,
        }

        mod gap [1; Dword] {
            A @ 0x0 [3:0] = 0x0000000f,
            B @ 0x0 [31:5] = 0xffffffe0,
        }

        mod overlap [1; Dword] {
            A @ 0x0 [4:0] = 0x0000001f,
            B @ 0x0 [31:4] = 0xfffffff0,
        }

        mod crossing [2; Qword] {
            A @ 0x0 [15:0] = 0x000000000000ffff,
            B @ 0x0 [47:16] = 0x0000ffffffff0000,
            C @ 0x0 [63:48] = 0xffff000000000000,
        }

        mod past_end [1; Dword] {
            A @ 0x0 [31:0] = 0xffffffff,
            B @ 0x4 [31:0] = 0xffffffff,
        }

        mod unsorted [1; Dword] {
            B @ 0x0 [31:4] = 0xfffffff0,
            A @ 0x0 [3:0] = 0x0000000f,
        }

        mod misaligned [2; Qword] {
            A @ 0x0 [31:0] = 0x00000000ffffffff,
            B @ 0x4 [31:0] = 0x00000000ffffffff,
        }
    }

    hwio_registers! {
        mod blk @ 0x0 {
            R0_A @ 0x0 .rmsk(0xff) .por(0x1) .attr(0x3) [
                HI(0xf0, 4),
                LO(0xf, 0),
            ],
            R0_B_n @ 0x4 .indexed(0x4, 1) [],
            R0_C @ 0x10 [],
        }

        mod clash @ 0x0 {
            R0_A_n @ 0x0 .indexed(0x4, 3) [],
            R0_B @ 0x8 [],
        }

        mod paired @ 0x0 {
            R0_SW2REO_RING_BASE_LSB @ 0x304 [],
            R0_SW2REO_RING_BASE_MSB @ 0x308 .inferred() [
                RING_SIZE(0xffff00, 8),
            ],
        }

        mod unpaired @ 0x0 {
            R0_SW2REO_RING_BASE_LSB @ 0x304 [],
            R0_REO2SW0_RING_BASE_LSB @ 0x8a4 [],
            R0_REO2SW0_RING_BASE_MSB @ 0x308 .inferred() [],
        }
    }

    #[test]
    fn good_layouts() {
        assert_eq!(check_descriptor(&good::LAYOUT), Ok(()));
        assert_eq!(check_descriptor(&good_qword::LAYOUT), Ok(()));
    }

    #[test]
    fn bad_layouts() {
        assert_eq!(
            check_descriptor(&bad_mask::LAYOUT),
            Err(LayoutError::MaskMismatch {
                descriptor: "bad_mask",
                field: "A",
                expected: 0xf,
                found: 0x1f
            })
        );
        assert_eq!(
            check_descriptor(&gap::LAYOUT),
            Err(LayoutError::Gap {
                descriptor: "gap",
                dword: 0,
                missing: 0x10
            })
        );
        assert_eq!(
            check_descriptor(&overlap::LAYOUT),
            Err(LayoutError::Overlap {
                descriptor: "overlap",
                field: "B",
                other: "A"
            })
        );
        assert_eq!(
            check_descriptor(&crossing::LAYOUT),
            Err(LayoutError::CrossesDword {
                descriptor: "crossing",
                field: "B"
            })
        );
        assert!(matches!(
            check_descriptor(&past_end::LAYOUT),
            Err(LayoutError::OutOfBounds { field: "B", .. })
        ));
        assert_eq!(
            check_descriptor(&unsorted::LAYOUT),
            Err(LayoutError::OrderMismatch {
                descriptor: "unsorted",
                dword: 0
            })
        );
        assert!(matches!(
            check_descriptor(&misaligned::LAYOUT),
            Err(LayoutError::Misaligned {
                field: "B",
                offset: 0x4,
                ..
            })
        ));
    }

    #[test]
    fn registers() {
        assert_eq!(check_block(&blk::BLOCK), Ok(()));
        assert_eq!(
            check_block(&clash::BLOCK),
            Err(LayoutError::AddressConflict {
                register: "R0_B",
                other: "R0_A_n",
                offset: 0x8
            })
        );

        const FIELDS: &[HwioField] = &[HwioField::new("A", 0xf0, 4), HwioField::new("B", 0x10, 4)];
        let reg = HwioRegister::new("R0_X", 0x0).with_fields(FIELDS);
        const EMPTY: &[HwioField] = &[HwioField::new("NONE", 0, 0)];
        assert!(matches!(
            check_register(&HwioRegister::new("R0_Z", 0x0).with_fields(EMPTY)),
            Err(LayoutError::NonContiguousMask { field: "NONE", .. })
        ));
        assert!(matches!(
            check_register(&reg),
            Err(LayoutError::FieldOverlap { field: "B", other: "A", .. })
        ));
        assert!(matches!(
            check_register(&reg.rmsk(0x70)),
            Err(LayoutError::FieldOutsideRmsk { field: "A", .. })
        ));
        assert!(matches!(
            check_register(&HwioRegister::new("R0_Y", 0x2)),
            Err(LayoutError::Unaligned { .. })
        ));
        assert!(matches!(
            check_register(&HwioRegister::new("R0_Y", 0x0).attr(0x7)),
            Err(LayoutError::BadAttribute { attr: 0x7, .. })
        ));
        assert!(matches!(
            check_register(&HwioRegister::new("R0_Y", 0x0).rmsk(0xf).por(0x10)),
            Err(LayoutError::PorOutsideRmsk { .. })
        ));
    }

    #[test]
    fn inferred_addresses() {
        assert_eq!(check_block(&paired::BLOCK), Ok(()));
        assert_eq!(
            check_block(&unpaired::BLOCK),
            Err(LayoutError::UnpairedInference {
                register: "R0_REO2SW0_RING_BASE_MSB",
                offset: 0x308
            })
        );
    }
}
