// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Host-side MMIO emulation.
//!
//! An [`EmulatedBus`] owns a set of non-overlapping regions, each backed by an
//! [`MmioDevice`]. Unhandled reads return 0 and unhandled writes are dropped.

// This module requires libstd.
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex};
use std::vec::Vec;

use crate::bus::Bus;
use crate::chip::BlockMap;

/// Errors that can be encountered by MMIO emulation code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmuError {
    RegionOverlaps(usize, usize),
    ZeroSizedRegion(usize),
}

impl fmt::Display for EmuError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::EmuError::*;

        match self {
            RegionOverlaps(base, size) => write!(
                f,
                "region overlaps with existing region of base {:#x} size {:#x}",
                base, size
            ),
            ZeroSizedRegion(base) => {
                write!(f, "region at base address {:#x} cannot be zero-sized", base)
            }
        }
    }
}

impl std::error::Error for EmuError {}

#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
struct Region {
    base: usize,
    size: usize,
}

impl Region {
    fn overlaps(&self, base: usize, size: usize) -> bool {
        self.base < (base + size) && base < self.base + self.size
    }
}

/// A device controlled through 32-bit registers.
pub trait MmioDevice: Send {
    /// Reads the word at `offset` from the start of the device's region.
    fn mmio_read(&mut self, offset: usize) -> u32;
    /// Writes `value` at `offset`.
    fn mmio_write(&mut self, offset: usize, value: u32);
}

#[derive(Default)]
pub struct EmulatedBus {
    devices: BTreeMap<Region, Arc<Mutex<dyn MmioDevice>>>,
}

impl EmulatedBus {
    pub fn new() -> Self {
        EmulatedBus {
            devices: BTreeMap::new(),
        }
    }

    /// Maps `device` at `base..base + size`.
    pub fn add_device(
        &mut self,
        base: usize,
        size: usize,
        device: Arc<Mutex<dyn MmioDevice>>,
    ) -> Result<(), EmuError> {
        if size == 0 {
            return Err(EmuError::ZeroSizedRegion(base));
        }
        if self
            .devices
            .keys()
            .any(|region| region.overlaps(base, size))
        {
            return Err(EmuError::RegionOverlaps(base, size));
        }
        self.devices.insert(Region { base, size }, device);
        Ok(())
    }

    /// The device whose region contains `addr` and the offset into it.
    fn get_device(&self, addr: usize) -> Option<(usize, &Arc<Mutex<dyn MmioDevice>>)> {
        let (region, dev) = self
            .devices
            .range(
                ..=Region {
                    base: addr,
                    size: usize::MAX,
                },
            )
            .next_back()?;
        let offset = addr - region.base;
        if offset < region.size {
            Some((offset, dev))
        } else {
            None
        }
    }
}

impl Bus for EmulatedBus {
    fn read32(&self, addr: usize) -> u32 {
        match self.get_device(addr) {
            Some((offset, dev)) => match dev.lock() {
                Ok(mut dev) => dev.mmio_read(offset),
                Err(poisoned) => poisoned.into_inner().mmio_read(offset),
            },
            None => {
                log::warn!("emu: read of unmapped address {:#x}", addr);
                0
            }
        }
    }

    fn write32(&self, addr: usize, value: u32) {
        match self.get_device(addr) {
            Some((offset, dev)) => match dev.lock() {
                Ok(mut dev) => dev.mmio_write(offset, value),
                Err(poisoned) => poisoned.into_inner().mmio_write(offset, value),
            },
            None => log::warn!("emu: dropped write {:#x} to unmapped address {:#x}", value, addr),
        }
    }
}

/// Plain read/write storage for a register block.
///
/// Unwritten words read as their POR value when the block was loaded with
/// [`RegisterFile::from_block`], otherwise as 0.
#[derive(Debug, Default, Clone)]
pub struct RegisterFile {
    words: BTreeMap<usize, u32>,
    writes: Vec<(usize, u32)>,
}

impl RegisterFile {
    pub fn new() -> Self {
        RegisterFile::default()
    }

    /// Preloads every register of `block` that has a `POR` value, including
    /// all instances of bounded indexed registers.
    pub fn from_block(block: &BlockMap) -> Self {
        let mut file = RegisterFile::new();
        for reg in block.registers {
            let por = match reg.por {
                Some(por) => por,
                None => continue,
            };
            let count = reg.count().unwrap_or(1);
            for n in 0..count as usize {
                file.words.insert(reg.offset + reg.stride * n, por);
            }
        }
        file
    }

    pub fn peek(&self, offset: usize) -> u32 {
        self.words.get(&offset).copied().unwrap_or(0)
    }

    /// Sets a word without recording a write.
    pub fn poke(&mut self, offset: usize, value: u32) {
        self.words.insert(offset, value);
    }

    /// Every `(offset, value)` written through the bus, oldest first.
    pub fn writes(&self) -> &[(usize, u32)] {
        &self.writes
    }
}

impl MmioDevice for RegisterFile {
    fn mmio_read(&mut self, offset: usize) -> u32 {
        self.peek(offset)
    }

    fn mmio_write(&mut self, offset: usize, value: u32) {
        self.writes.push((offset, value));
        self.words.insert(offset, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A monotonically increasing counter: reading 0x0 returns the value,
    /// writing 0x4 adds to it.
    struct CounterDevice {
        value: u32,
    }

    impl MmioDevice for CounterDevice {
        fn mmio_read(&mut self, offset: usize) -> u32 {
            match offset {
                0x0 => self.value,
                _ => panic!("CounterDevice: illegal read offset {:#x}", offset),
            }
        }

        fn mmio_write(&mut self, offset: usize, value: u32) {
            match offset {
                0x4 => self.value += value,
                _ => panic!("CounterDevice: illegal write offset {:#x}", offset),
            }
        }
    }

    #[test]
    fn counter_device() {
        let mut bus = EmulatedBus::new();
        bus.add_device(0x1000, 0x8, Arc::new(Mutex::new(CounterDevice { value: 0 })))
            .unwrap();

        assert_eq!(bus.read32(0x1000), 0);
        bus.write32(0x1004, 5);
        assert_eq!(bus.read32(0x1000), 5);
        bus.write32(0x1004, 1);
        assert_eq!(bus.read32(0x1000), 6);
    }

    #[test]
    fn regions() {
        let mut bus = EmulatedBus::new();
        let file = || Arc::new(Mutex::new(RegisterFile::new()));

        assert_eq!(
            bus.add_device(0x100, 0, file()),
            Err(EmuError::ZeroSizedRegion(0x100))
        );
        bus.add_device(0x100, 0x100, file()).unwrap();
        assert_eq!(
            bus.add_device(0x1fc, 0x10, file()),
            Err(EmuError::RegionOverlaps(0x1fc, 0x10))
        );
        assert_eq!(
            bus.add_device(0x0, 0x104, file()),
            Err(EmuError::RegionOverlaps(0x0, 0x104))
        );
        bus.add_device(0x200, 0x100, file()).unwrap();
        bus.add_device(0x0, 0x100, file()).unwrap();
    }

    #[test]
    fn unmapped_accesses() {
        let mut bus = EmulatedBus::new();
        let file = Arc::new(Mutex::new(RegisterFile::new()));
        bus.add_device(0x100, 0x10, file.clone()).unwrap();

        bus.write32(0x110, 0xdead);
        assert_eq!(bus.read32(0x110), 0);
        assert_eq!(bus.read32(0x0), 0);
        assert!(file.lock().unwrap().writes().is_empty());

        bus.write32(0x10c, 0xbeef);
        assert_eq!(bus.read32(0x10c), 0xbeef);
        assert_eq!(file.lock().unwrap().writes(), &[(0xc, 0xbeef)]);
    }
}
