// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Host ring (SRNG) register geometry.
//!
//! Every host-accessible ring owns two register groups: `R0` (base, size,
//! MSI and interrupt setup) and `R2` (head and tail pointers). Rings of one
//! type are laid out at a fixed stride from the first ring of that type, and
//! all rings share the register layout of a template ring: `REO2SW1` for
//! destination rings, `SW2TCL1` for source rings. A register of ring `n` is
//! therefore found as
//!
//! ```text
//! reg_start[group] + n * reg_size[group] + (template_reg - template_start[group])
//! ```
//!
//! LMAC rings are programmed by firmware and have no host registers; their
//! ring ids repeat for every MAC at a stride of [`MAX_RINGS_PER_LMAC`].

use crate::register::HwioRegister;
use crate::{Error, Result};

pub const MAX_LMACS: u32 = 3;
pub const MAX_RINGS_PER_LMAC: u32 = 12;
/// Largest ring size, in entries, of the LMAC rings.
pub const RXDMA_MAX_RING_SIZE: u32 = 0xffff;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RingType {
    ReoDst,
    ReoException,
    ReoReinject,
    ReoCmd,
    ReoStatus,
    TclData,
    TclCmdCredit,
    TclStatus,
    WbmIdleLink,
    Sw2WbmRelease,
    Wbm2SwRelease,
    RxdmaBuf,
    RxdmaDst,
    RxdmaMonitorBuf,
    RxdmaMonitorStatus,
    RxdmaMonitorDst,
    RxdmaMonitorDesc,
    DirBufRxDmaSrc,
}

impl RingType {
    pub const fn name(self) -> &'static str {
        match self {
            RingType::ReoDst => "REO_DST",
            RingType::ReoException => "REO_EXCEPTION",
            RingType::ReoReinject => "REO_REINJECT",
            RingType::ReoCmd => "REO_CMD",
            RingType::ReoStatus => "REO_STATUS",
            RingType::TclData => "TCL_DATA",
            RingType::TclCmdCredit => "TCL_CMD_CREDIT",
            RingType::TclStatus => "TCL_STATUS",
            RingType::WbmIdleLink => "WBM_IDLE_LINK",
            RingType::Sw2WbmRelease => "SW2WBM_RELEASE",
            RingType::Wbm2SwRelease => "WBM2SW_RELEASE",
            RingType::RxdmaBuf => "RXDMA_BUF",
            RingType::RxdmaDst => "RXDMA_DST",
            RingType::RxdmaMonitorBuf => "RXDMA_MONITOR_BUF",
            RingType::RxdmaMonitorStatus => "RXDMA_MONITOR_STATUS",
            RingType::RxdmaMonitorDst => "RXDMA_MONITOR_DST",
            RingType::RxdmaMonitorDesc => "RXDMA_MONITOR_DESC",
            RingType::DirBufRxDmaSrc => "DIR_BUF_RX_DMA_SRC",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RingDirection {
    /// Host produces entries.
    Src,
    /// Hardware produces entries.
    Dst,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegGroup {
    R0,
    R2,
}

impl RegGroup {
    pub const fn index(self) -> usize {
        match self {
            RegGroup::R0 => 0,
            RegGroup::R2 => 1,
        }
    }

    /// Group of a register from its `R0_` / `R2_` name prefix. Other groups
    /// (`R1_` debug and test registers) are not per ring.
    pub fn of(reg: &HwioRegister) -> Result<RegGroup> {
        match reg.name.get(..3) {
            Some("R0_") => Ok(RegGroup::R0),
            Some("R2_") => Ok(RegGroup::R2),
            _ => Err(Error::NotRingRegister(reg.name)),
        }
    }
}

/// One row of the host ring table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SrngConfig {
    pub ring_type: RingType,
    pub start_ring_id: u32,
    pub max_rings: u32,
    pub lmac_ring: bool,
    pub dir: RingDirection,
    /// Address of the first ring's `R0` and `R2` groups, relative to the
    /// chip register base.
    pub reg_start: [usize; 2],
    /// Stride between consecutive rings, per group.
    pub reg_size: [usize; 2],
    /// Offsets of the template ring's `R0` and `R2` groups inside its block.
    pub template: [usize; 2],
    /// Largest ring size field value.
    pub max_size: u32,
}

impl SrngConfig {
    /// A ring programmed by the host.
    pub const fn umac(
        ring_type: RingType,
        start_ring_id: u32,
        max_rings: u32,
        dir: RingDirection,
        reg_start: [usize; 2],
        reg_size: [usize; 2],
        template: [usize; 2],
        max_size: u32,
    ) -> SrngConfig {
        SrngConfig {
            ring_type,
            start_ring_id,
            max_rings,
            lmac_ring: false,
            dir,
            reg_start,
            reg_size,
            template,
            max_size,
        }
    }

    /// A per-MAC ring programmed by firmware.
    pub const fn lmac(
        ring_type: RingType,
        start_ring_id: u32,
        max_rings: u32,
        dir: RingDirection,
    ) -> SrngConfig {
        SrngConfig {
            ring_type,
            start_ring_id,
            max_rings,
            lmac_ring: true,
            dir,
            reg_start: [0; 2],
            reg_size: [0; 2],
            template: [0; 2],
            max_size: RXDMA_MAX_RING_SIZE,
        }
    }

    fn check_ring(&self, ring_num: u32) -> Result<()> {
        if ring_num >= self.max_rings {
            return Err(Error::RingOutOfRange {
                ring: self.ring_type.name(),
                ring_num,
            });
        }
        Ok(())
    }

    /// Global ring id of ring `ring_num` of this type on MAC `mac_id`.
    pub fn ring_id(&self, ring_num: u32, mac_id: u32) -> Result<u32> {
        self.check_ring(ring_num)?;
        if !self.lmac_ring {
            return Ok(self.start_ring_id + ring_num);
        }
        if mac_id >= MAX_LMACS {
            return Err(Error::RingOutOfRange {
                ring: self.ring_type.name(),
                ring_num,
            });
        }
        Ok(self.start_ring_id + ring_num + mac_id * MAX_RINGS_PER_LMAC)
    }

    /// Start of `group` for ring `ring_num`, relative to the chip base.
    pub fn register_base(&self, group: RegGroup, ring_num: u32) -> Result<usize> {
        if self.lmac_ring {
            return Err(Error::NoRingRegisters(self.ring_type.name()));
        }
        self.check_ring(ring_num)?;
        let g = group.index();
        Ok(self.reg_start[g] + ring_num as usize * self.reg_size[g])
    }

    /// Address of `reg` for ring `ring_num`. `reg` is the register of the
    /// template ring; its group follows from its name.
    pub fn register_address(&self, ring_num: u32, reg: &HwioRegister) -> Result<usize> {
        let group = RegGroup::of(reg)?;
        let base = self.register_base(group, ring_num)?;
        let rel = reg
            .offset
            .checked_sub(self.template[group.index()])
            .ok_or(Error::NotRingRegister(reg.name))?;
        Ok(base + rel)
    }

    /// True when a ring of `size` (in the unit of the ring size field) can be
    /// programmed.
    pub fn fits(&self, size: u32) -> bool {
        size != 0 && size <= self.max_size
    }

    fn ring_range(&self) -> core::ops::Range<u32> {
        self.start_ring_id..self.start_ring_id + self.max_rings
    }
}

/// Where a global ring id lives in a ring table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RingLocation {
    pub config: &'static SrngConfig,
    pub ring_num: u32,
    pub mac_id: u32,
}

/// Reverse of [`SrngConfig::ring_id`].
pub fn find_ring(table: &'static [SrngConfig], ring_id: u32) -> Option<RingLocation> {
    table.iter().find_map(|config| {
        let macs = if config.lmac_ring { MAX_LMACS } else { 1 };
        (0..macs).find_map(|mac_id| {
            let id = ring_id.checked_sub(mac_id * MAX_RINGS_PER_LMAC)?;
            config.ring_range().contains(&id).then_some(RingLocation {
                config,
                ring_num: id.wrapping_sub(config.start_ring_id),
                mac_id,
            })
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MISC: HwioRegister = HwioRegister::new("R0_RING_MISC", 0x118);
    const TP: HwioRegister = HwioRegister::new("R2_RING_TP", 0x2004);

    static TABLE: [SrngConfig; 2] = [
        SrngConfig::umac(
            RingType::TclData,
            24,
            5,
            RingDirection::Src,
            [0x44900, 0x46000],
            [0x78, 0x8],
            [0x100, 0x2000],
            0xfffff,
        ),
        SrngConfig::lmac(RingType::RxdmaBuf, 184, 2, RingDirection::Src),
    ];

    #[test]
    fn groups() {
        assert_eq!(RegGroup::of(&MISC), Ok(RegGroup::R0));
        assert_eq!(RegGroup::of(&TP), Ok(RegGroup::R2));
        let testbus = HwioRegister::new("R1_TESTBUS_CAPTURE_n", 0x1034);
        assert_eq!(RegGroup::of(&testbus), Err(Error::NotRingRegister("R1_TESTBUS_CAPTURE_n")));
        assert_eq!(
            TABLE[0].register_address(0, &testbus),
            Err(Error::NotRingRegister("R1_TESTBUS_CAPTURE_n"))
        );
    }

    #[test]
    fn ring_ids() {
        let tcl = &TABLE[0];
        assert_eq!(tcl.ring_id(0, 0), Ok(24));
        assert_eq!(tcl.ring_id(4, 2), Ok(28));
        assert!(tcl.ring_id(5, 0).is_err());

        let rxdma = &TABLE[1];
        assert_eq!(rxdma.ring_id(1, 0), Ok(185));
        assert_eq!(rxdma.ring_id(0, 2), Ok(184 + 24));
        assert!(rxdma.ring_id(0, 3).is_err());
    }

    #[test]
    fn register_addresses() {
        let tcl = &TABLE[0];
        assert_eq!(tcl.register_base(RegGroup::R0, 2), Ok(0x44900 + 0xf0));
        assert_eq!(tcl.register_address(2, &MISC), Ok(0x44900 + 0xf0 + 0x18));
        assert_eq!(tcl.register_address(1, &TP), Ok(0x46000 + 0x8 + 0x4));
        assert_eq!(
            TABLE[1].register_base(RegGroup::R0, 0),
            Err(Error::NoRingRegisters("RXDMA_BUF"))
        );
        assert_eq!(
            tcl.register_address(0, &HwioRegister::new("R0_GENERAL", 0x40)),
            Err(Error::NotRingRegister("R0_GENERAL"))
        );
    }

    #[test]
    fn sizes() {
        assert!(TABLE[0].fits(0xfffff));
        assert!(!TABLE[0].fits(0x100000));
        assert!(!TABLE[0].fits(0));
        assert_eq!(TABLE[1].max_size, RXDMA_MAX_RING_SIZE);
    }

    #[test]
    fn reverse_lookup() {
        let loc = find_ring(&TABLE, 26).unwrap();
        assert_eq!(loc.config.ring_type, RingType::TclData);
        assert_eq!(loc.ring_num, 2);

        let loc = find_ring(&TABLE, 184 + 12 + 1).unwrap();
        assert_eq!((loc.ring_num, loc.mac_id), (1, 1));

        assert!(find_ring(&TABLE, 29).is_none());
        assert!(find_ring(&TABLE, 186).is_none());
    }
}
