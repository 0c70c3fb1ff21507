// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Register accessors for one IP block instance.
//!
//! [`HwioBlock`] pairs a [`Bus`] with the absolute base address of a block
//! and implements the HWIO accessor set on top of it. Non-indexed reads are
//! raw (`IN`); indexed reads apply the register's `RMSK` (`INI`).
//! Read-modify-write goes through `OUTM`, so bits outside the mask keep the
//! value the hardware returned.

use tock_registers::fields::{Field, FieldValue};
use tock_registers::{LocalRegisterCopy, RegisterLongName};

use crate::bus::Bus;
use crate::field::HwioField;
use crate::register::{HwioRegister, TypedRegister};
use crate::{Error, Result};

pub struct HwioBlock<B: Bus> {
    bus: B,
    base: usize,
}

impl<B: Bus> HwioBlock<B> {
    pub const fn new(bus: B, base: usize) -> HwioBlock<B> {
        HwioBlock { bus, base }
    }

    pub const fn base(&self) -> usize {
        self.base
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    fn check_read(reg: &HwioRegister) -> Result<()> {
        let access = reg.access();
        if access.readable() {
            Ok(())
        } else {
            Err(Error::AccessDenied {
                register: reg.name,
                access,
            })
        }
    }

    fn check_write(reg: &HwioRegister) -> Result<()> {
        let access = reg.access();
        if access.writable() {
            Ok(())
        } else {
            Err(Error::AccessDenied {
                register: reg.name,
                access,
            })
        }
    }

    fn load(&self, addr: usize, name: &str) -> u32 {
        let val = self.bus.read32(addr);
        log::trace!("hwio: {} [{:#x}] -> {:#010x}", name, addr, val);
        val
    }

    fn store(&self, addr: usize, name: &str, val: u32) {
        log::trace!("hwio: {} [{:#x}] <- {:#010x}", name, addr, val);
        self.bus.write32(addr, val);
    }

    /// `IN`
    pub fn read(&self, reg: &HwioRegister) -> Result<u32> {
        Self::check_read(reg)?;
        Ok(self.load(reg.address(self.base), reg.name))
    }

    /// `INM`
    pub fn read_masked(&self, reg: &HwioRegister, mask: u32) -> Result<u32> {
        Ok(self.read(reg)? & mask)
    }

    /// `INI`: instance `n` of an indexed register, masked with `RMSK`.
    pub fn read_indexed(&self, reg: &HwioRegister, n: u32) -> Result<u32> {
        Self::check_read(reg)?;
        let addr = reg.address_indexed(self.base, n)?;
        Ok(self.load(addr, reg.name) & reg.read_mask())
    }

    /// `INMI`
    pub fn read_indexed_masked(&self, reg: &HwioRegister, n: u32, mask: u32) -> Result<u32> {
        Self::check_read(reg)?;
        let addr = reg.address_indexed(self.base, n)?;
        Ok(self.load(addr, reg.name) & mask)
    }

    /// `INF`
    pub fn read_field(&self, reg: &HwioRegister, field: &HwioField) -> Result<u32> {
        Ok(field.extract(self.read_masked(reg, field.bmsk)?))
    }

    /// `OUT`
    pub fn write(&self, reg: &HwioRegister, val: u32) -> Result<()> {
        Self::check_write(reg)?;
        self.store(reg.address(self.base), reg.name, val);
        Ok(())
    }

    /// `OUTM`: `(current & !mask) | (val & mask)`.
    pub fn write_masked(&self, reg: &HwioRegister, mask: u32, val: u32) -> Result<()> {
        let cur = self.read(reg)?;
        self.write(reg, (cur & !mask) | (val & mask))
    }

    /// `OUTI`
    pub fn write_indexed(&self, reg: &HwioRegister, n: u32, val: u32) -> Result<()> {
        Self::check_write(reg)?;
        let addr = reg.address_indexed(self.base, n)?;
        self.store(addr, reg.name, val);
        Ok(())
    }

    /// `OUTMI`
    pub fn write_indexed_masked(
        &self,
        reg: &HwioRegister,
        n: u32,
        mask: u32,
        val: u32,
    ) -> Result<()> {
        let cur = self.read_indexed(reg, n)?;
        self.write_indexed(reg, n, (cur & !mask) | (val & mask))
    }

    /// `OUTF`. Values wider than the field are rejected rather than
    /// truncated.
    pub fn write_field(&self, reg: &HwioRegister, field: &HwioField, val: u32) -> Result<()> {
        let packed = field.insert(0, val)?;
        self.write_masked(reg, field.bmsk, packed)
    }

    /// Snapshot of a register for typed field access.
    pub fn get<R: RegisterLongName>(
        &self,
        reg: TypedRegister<R>,
    ) -> Result<LocalRegisterCopy<u32, R>> {
        Ok(LocalRegisterCopy::new(self.read(reg.reg)?))
    }

    pub fn read_typed<R: RegisterLongName>(
        &self,
        reg: TypedRegister<R>,
        field: Field<u32, R>,
    ) -> Result<u32> {
        Ok(field.read(self.read(reg.reg)?))
    }

    /// Read-modify-write of the bits covered by `fv`.
    pub fn modify<R: RegisterLongName>(
        &self,
        reg: TypedRegister<R>,
        fv: FieldValue<u32, R>,
    ) -> Result<()> {
        self.write_masked(reg.reg, fv.mask(), fv.value)
    }

    /// Writes `fv`; bits outside it are written as zero.
    pub fn set<R: RegisterLongName>(
        &self,
        reg: TypedRegister<R>,
        fv: FieldValue<u32, R>,
    ) -> Result<()> {
        self.write(reg.reg, fv.value)
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::HwioBlock;
    use crate::emu::{EmulatedBus, RegisterFile};
    use crate::{hwio_registers, Error};

    hwio_registers! {
        mod umac @ 0x34000 {
            R0_IDLE_LIST_CONTROL @ 0x10 [
                SCATTER_BUFFER_SIZE(0x7fc, 2),
                LINK_DESC_IDLE_LIST_MODE(0x2, 1),
            ],
            R1_STATUS @ 0x20 .rmsk(0xff) .por(0x5a) .attr(0x1) [
                STATE(0xff, 0),
            ],
            R0_KICK @ 0x24 .attr(0x2) [],
            R1_CAPTURE_n @ 0x40 .indexed(0x4, 3) .rmsk(0xffff) .attr(0x3) [
                VALUE(0xffff, 0),
            ],
        }
    }

    fn setup() -> (HwioBlock<EmulatedBus>, Arc<Mutex<RegisterFile>>) {
        let file = Arc::new(Mutex::new(RegisterFile::from_block(&umac::BLOCK)));
        let mut bus = EmulatedBus::new();
        bus.add_device(umac::BASE, 0x100, file.clone()).unwrap();
        (HwioBlock::new(bus, umac::BASE), file)
    }

    #[test]
    fn raw_and_masked_reads() {
        let (block, file) = setup();
        file.lock().unwrap().poke(0x10, 0xffff_0402);

        assert_eq!(block.read(&umac::R0_IDLE_LIST_CONTROL), Ok(0xffff_0402));
        assert_eq!(block.read_masked(&umac::R0_IDLE_LIST_CONTROL, 0xff), Ok(0x02));
        assert_eq!(
            block.read_field(
                &umac::R0_IDLE_LIST_CONTROL,
                &umac::R0_IDLE_LIST_CONTROL::FIELDS[0]
            ),
            Ok(0x100)
        );
        assert_eq!(block.read(&umac::R1_STATUS), Ok(0x5a));
    }

    #[test]
    fn masked_writes_preserve_other_bits() {
        let (block, file) = setup();
        file.lock().unwrap().poke(0x10, 0xf000_0003);

        block
            .write_masked(&umac::R0_IDLE_LIST_CONTROL, 0x7fc, 0xffff_ffff)
            .unwrap();
        assert_eq!(file.lock().unwrap().peek(0x10), 0xf000_07ff);

        let field = umac::R0_IDLE_LIST_CONTROL.field("LINK_DESC_IDLE_LIST_MODE").unwrap();
        block.write_field(&umac::R0_IDLE_LIST_CONTROL, field, 0).unwrap();
        assert_eq!(file.lock().unwrap().peek(0x10), 0xf000_07fd);
        assert!(matches!(
            block.write_field(&umac::R0_IDLE_LIST_CONTROL, field, 2),
            Err(Error::ValueTooWide { .. })
        ));
    }

    #[test]
    fn access_attributes() {
        let (block, file) = setup();

        assert_eq!(
            block.write(&umac::R1_STATUS, 0),
            Err(Error::AccessDenied {
                register: "R1_STATUS",
                access: crate::Access::ReadOnly
            })
        );
        assert!(block.read(&umac::R0_KICK).is_err());
        block.write(&umac::R0_KICK, 1).unwrap();
        assert!(block.write_masked(&umac::R0_KICK, 1, 1).is_err());
        assert_eq!(file.lock().unwrap().writes(), &[(0x24, 1)]);
    }

    #[test]
    fn indexed_access() {
        let (block, file) = setup();
        file.lock().unwrap().poke(0x48, 0xabcd_1234);

        assert_eq!(block.read_indexed(&umac::R1_CAPTURE_n, 2), Ok(0x1234));
        assert_eq!(
            block.read_indexed_masked(&umac::R1_CAPTURE_n, 2, 0xff00_0000),
            Ok(0xab00_0000)
        );
        block.write_indexed(&umac::R1_CAPTURE_n, 3, 0x55).unwrap();
        assert_eq!(file.lock().unwrap().peek(0x4c), 0x55);
        block
            .write_indexed_masked(&umac::R1_CAPTURE_n, 3, 0xf0, 0xa0)
            .unwrap();
        assert_eq!(file.lock().unwrap().peek(0x4c), 0xa5);
        assert!(matches!(
            block.read_indexed(&umac::R1_CAPTURE_n, 4),
            Err(Error::IndexOutOfRange { index: 4, max: 3, .. })
        ));
        assert_eq!(
            block.read_indexed(&umac::R0_KICK, 0),
            Err(Error::AccessDenied {
                register: "R0_KICK",
                access: crate::Access::WriteOnly
            })
        );
        assert_eq!(
            block.read_indexed(&umac::R0_IDLE_LIST_CONTROL, 0),
            Err(Error::NotIndexed("R0_IDLE_LIST_CONTROL"))
        );
    }

    #[test]
    fn typed_access() {
        use umac::R0_IDLE_LIST_CONTROL::{LINK_DESC_IDLE_LIST_MODE, REGISTER, SCATTER_BUFFER_SIZE};

        let (block, file) = setup();
        file.lock().unwrap().poke(0x10, 0x8000_0000);

        block
            .modify(REGISTER, SCATTER_BUFFER_SIZE.val(0x40) + LINK_DESC_IDLE_LIST_MODE.val(1))
            .unwrap();
        assert_eq!(file.lock().unwrap().peek(0x10), 0x8000_0102);

        let copy = block.get(REGISTER).unwrap();
        assert_eq!(copy.read(SCATTER_BUFFER_SIZE), 0x40);
        assert!(copy.is_set(LINK_DESC_IDLE_LIST_MODE));
        assert_eq!(block.read_typed(REGISTER, SCATTER_BUFFER_SIZE), Ok(0x40));

        block.set(REGISTER, SCATTER_BUFFER_SIZE.val(1)).unwrap();
        assert_eq!(file.lock().unwrap().peek(0x10), 0x4);
    }
}
