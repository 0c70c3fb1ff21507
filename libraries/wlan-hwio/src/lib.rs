// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! WLAN HWIO register maps
//!
//! Typed register and descriptor tables for Qualcomm WLAN SoCs. A chip crate
//! declares its IP blocks and TLV descriptors with the macros in this crate and
//! drives the hardware through a [`Bus`].
//!
//! ```rust
//! # fn main() {}
//! use wlan_hwio::{hwio_registers, tlv_descriptor};
//!
//! hwio_registers! {
//!     /// Example block at a fixed offset from the chip base.
//!     pub mod demo @ 0x1000 {
//!         R0_CTRL @ 0x0 .rmsk(0xff) .attr(0x3) [
//!             ENABLE(0x80, 7),
//!             MODE(0x7f, 0),
//!         ],
//!         R0_STATUS @ 0x4 .attr(0x1) [],
//!     }
//! }
//!
//! tlv_descriptor! {
//!     pub mod demo_tlv [2; Dword] {
//!         LENGTH @ 0x0 [15:0] = 0x0000ffff,
//!         FLAGS @ 0x0 [31:16] = 0xffff0000,
//!         COOKIE @ 0x4 [31:0] = 0xffffffff,
//!     }
//! }
//! ```
//!
//! Register accessors mirror the classic `HWIO_*` accessor set:
//!
//! | HWIO   | Rust                               |
//! |--------|------------------------------------|
//! | `ADDR` | [`HwioRegister::address`]          |
//! | `IN`   | [`HwioBlock::read`]                |
//! | `INM`  | [`HwioBlock::read_masked`]         |
//! | `INF`  | [`HwioBlock::read_field`]          |
//! | `OUT`  | [`HwioBlock::write`]               |
//! | `OUTM` | [`HwioBlock::write_masked`]        |
//! | `OUTF` | [`HwioBlock::write_field`]         |

#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod access;
pub mod block;
pub mod bus;
pub mod check;
pub mod chip;
pub mod descriptor;
#[cfg(feature = "std")]
pub mod emu;
pub mod field;
pub mod macros;
pub mod register;
pub mod srng;
pub mod tlv;

use core::fmt;

pub use access::Access;
pub use block::HwioBlock;
pub use bus::{Bus, Mmio};
pub use chip::{BlockMap, ChipMap, Revision};
pub use descriptor::{
    BitOrder, DescField, Descriptor, DescriptorLayout, DescriptorView, FieldSpec, OffsetUnit,
};
pub use field::HwioField;
pub use register::{HwioRegister, TypedRegister};
pub use srng::{RegGroup, RingDirection, RingLocation, RingType, SrngConfig};
pub use tlv::{CompressedTlv, TlvFormat, TlvHeader};

/// Errors returned by register and descriptor accessors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The register's access attribute forbids the operation.
    AccessDenied {
        register: &'static str,
        access: Access,
    },
    /// Index past the register's `MAXn`.
    IndexOutOfRange {
        register: &'static str,
        index: u32,
        max: u32,
    },
    /// An index was supplied for a register that is not indexed.
    NotIndexed(&'static str),
    /// The value does not fit in the field.
    ValueTooWide {
        field: &'static str,
        value: u64,
        width: u32,
    },
    /// The descriptor buffer is shorter than the layout.
    BufferTooSmall { needed: usize, got: usize },
    /// No field or register with this name.
    UnknownName,
    /// Ring number or MAC id past the ring table limits.
    RingOutOfRange { ring: &'static str, ring_num: u32 },
    /// The ring has no host-programmed registers.
    NoRingRegisters(&'static str),
    /// The register lies before the template ring's register group.
    NotRingRegister(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::Error::*;

        match self {
            AccessDenied { register, access } => {
                write!(f, "register {} is {:?}", register, access)
            }
            IndexOutOfRange {
                register,
                index,
                max,
            } => write!(f, "index {} out of range for {} (MAXn {})", index, register, max),
            NotIndexed(register) => write!(f, "register {} is not indexed", register),
            ValueTooWide {
                field,
                value,
                width,
            } => write!(
                f,
                "value {:#x} does not fit in {}-bit field {}",
                value, width, field
            ),
            BufferTooSmall { needed, got } => write!(
                f,
                "descriptor needs {} words, buffer has {}",
                needed, got
            ),
            UnknownName => write!(f, "no such field or register"),
            RingOutOfRange { ring, ring_num } => {
                write!(f, "ring {} out of range for {}", ring_num, ring)
            }
            NoRingRegisters(ring) => write!(f, "ring {} has no host registers", ring),
            NotRingRegister(register) => write!(f, "{} is not a ring register", register),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;

/// Items used by the exported macros.
#[doc(hidden)]
pub mod reexport {
    pub use tock_registers::fields::{Field, FieldValue};
    pub use tock_registers::{LocalRegisterCopy, RegisterLongName};
}
