// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! 32-bit register bus.
//!
//! Every HWIO access reduces to `in_dword` / `out_dword` at an absolute
//! address; [`Bus`] is that pair. [`Mmio`] performs volatile accesses on real
//! hardware, `emu::EmulatedBus` routes them to host-side devices.

pub trait Bus {
    fn read32(&self, addr: usize) -> u32;
    fn write32(&self, addr: usize, value: u32);
}

impl<B: Bus + ?Sized> Bus for &B {
    fn read32(&self, addr: usize) -> u32 {
        (**self).read32(addr)
    }

    fn write32(&self, addr: usize, value: u32) {
        (**self).write32(addr, value)
    }
}

/// Volatile MMIO at absolute addresses.
#[derive(Clone, Copy, Debug)]
pub struct Mmio {
    _private: (),
}

impl Mmio {
    /// # Safety
    ///
    /// Every address later passed to this bus must be a mapped, 4-byte
    /// aligned device register. Reads and writes may have side effects on the
    /// device.
    pub const unsafe fn new() -> Mmio {
        Mmio { _private: () }
    }
}

impl Bus for Mmio {
    fn read32(&self, addr: usize) -> u32 {
        // Safety: guaranteed by the caller of `Mmio::new`.
        unsafe { core::ptr::read_volatile(addr as *const u32) }
    }

    fn write32(&self, addr: usize, value: u32) {
        // Safety: guaranteed by the caller of `Mmio::new`.
        unsafe { core::ptr::write_volatile(addr as *mut u32, value) }
    }
}
