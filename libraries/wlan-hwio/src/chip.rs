// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Chip, revision and IP block tables.

use crate::descriptor::DescriptorLayout;
use crate::register::HwioRegister;
use crate::srng::SrngConfig;

/// The registers of one IP block.
#[derive(Clone, Copy, Debug)]
pub struct BlockMap {
    pub name: &'static str,
    /// Offset of the block from the chip's register base, when fixed.
    /// `None` for blocks addressed through a runtime base.
    pub base_offset: Option<usize>,
    /// Offsets of further identical instances relative to `base_offset`.
    pub instances: &'static [usize],
    pub registers: &'static [HwioRegister],
}

impl BlockMap {
    pub const fn with_instances(mut self, instances: &'static [usize]) -> BlockMap {
        self.instances = instances;
        self
    }

    pub fn register(&self, name: &str) -> Option<&'static HwioRegister> {
        self.registers.iter().find(|r| r.name == name)
    }

    /// The register whose instance 0 sits at `offset`.
    pub fn register_at(&self, offset: usize) -> Option<&'static HwioRegister> {
        self.registers.iter().find(|r| r.offset == offset)
    }

    /// Base of instance `i`; blocks without instance table have only
    /// instance 0 at `base_offset`.
    pub fn instance_base(&self, i: usize) -> Option<usize> {
        let base = self.base_offset?;
        if self.instances.is_empty() {
            (i == 0).then_some(base)
        } else {
            self.instances.get(i).map(|off| base + off)
        }
    }

    /// Number of instances of this block.
    pub fn instance_count(&self) -> usize {
        self.instances.len().max(1)
    }
}

/// One silicon revision of a chip.
#[derive(Clone, Copy, Debug)]
pub struct Revision {
    pub name: &'static str,
    pub blocks: &'static [BlockMap],
    pub descriptors: &'static [DescriptorLayout],
    pub rings: &'static [SrngConfig],
}

impl Revision {
    pub fn block(&self, name: &str) -> Option<&'static BlockMap> {
        self.blocks.iter().find(|b| b.name.eq_ignore_ascii_case(name))
    }

    pub fn descriptor(&self, name: &str) -> Option<&'static DescriptorLayout> {
        self.descriptors.iter().find(|d| d.name == name)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ChipMap {
    pub name: &'static str,
    pub revisions: &'static [Revision],
}

impl ChipMap {
    pub fn revision(&self, name: &str) -> Option<&'static Revision> {
        self.revisions.iter().find(|r| r.name == name)
    }

    /// The newest revision listed.
    pub fn latest(&self) -> Option<&'static Revision> {
        self.revisions.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CE_REGS: &[HwioRegister] = &[
        HwioRegister::new("SR_BA_LOW", 0x0),
        HwioRegister::new("SR_BA_HIGH", 0x4),
    ];

    const CE: BlockMap = BlockMap {
        name: "CE",
        base_offset: Some(0x0),
        instances: &[],
        registers: CE_REGS,
    }
    .with_instances(&[0x0, 0x1000]);

    const WRAPPER: BlockMap = BlockMap {
        name: "COMMON_WRAPPER",
        base_offset: None,
        instances: &[],
        registers: &[],
    };

    const REVS: &[Revision] = &[Revision {
        name: "v1",
        blocks: &[CE, WRAPPER],
        descriptors: &[],
        rings: &[],
    }];

    #[test]
    fn block_lookup() {
        assert_eq!(CE.register("SR_BA_HIGH").map(|r| r.offset), Some(0x4));
        assert_eq!(CE.register_at(0x0).map(|r| r.name), Some("SR_BA_LOW"));
        assert!(CE.register_at(0x8).is_none());
    }

    #[test]
    fn instances() {
        assert_eq!(CE.instance_count(), 2);
        assert_eq!(CE.instance_base(1), Some(0x1000));
        assert_eq!(CE.instance_base(2), None);
        assert_eq!(WRAPPER.instance_base(0), None);
        assert_eq!(WRAPPER.instance_count(), 1);
    }

    #[test]
    fn chip_lookup() {
        let chip = ChipMap {
            name: "wcn6450",
            revisions: REVS,
        };
        let rev = chip.revision("v1").unwrap();
        assert!(rev.block("ce").is_some());
        assert!(rev.block("tcl").is_none());
        assert_eq!(chip.latest().map(|r| r.name), Some("v1"));
    }
}
