// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! HWIO register descriptions.
//!
//! A [`HwioRegister`] carries everything the register database lists for a
//! register: its offset inside the IP block, the index stride and `MAXn` for
//! indexed registers, and the optional `RMSK`, `POR`, `POR_RMSK` and `ATTR`
//! values. Registers are built in `const` context by [`hwio_registers!`].
//!
//! [`hwio_registers!`]: crate::hwio_registers

use core::marker::PhantomData;

use tock_registers::RegisterLongName;

use crate::access::Access;
use crate::field::HwioField;
use crate::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HwioRegister {
    pub name: &'static str,
    /// Byte offset from the block base.
    pub offset: usize,
    /// Distance between consecutive instances of an indexed register.
    pub stride: usize,
    /// Highest valid index (`MAXn`) of an indexed register.
    pub max_index: Option<u32>,
    pub rmsk: Option<u32>,
    pub por: Option<u32>,
    pub por_rmsk: Option<u32>,
    pub attr: Option<u32>,
    /// The database has no `_ADDR` for this register. `offset` is taken as
    /// 4 bytes past the `BASE_LSB` register of the same ring.
    pub inferred: bool,
    pub fields: &'static [HwioField],
}

impl HwioRegister {
    pub const fn new(name: &'static str, offset: usize) -> HwioRegister {
        HwioRegister {
            name,
            offset,
            stride: 0,
            max_index: None,
            rmsk: None,
            por: None,
            por_rmsk: None,
            attr: None,
            inferred: false,
            fields: &[],
        }
    }

    /// Indexed register, valid for `n` in `0..=maxn`.
    pub const fn indexed(mut self, stride: usize, maxn: u32) -> HwioRegister {
        self.stride = stride;
        self.max_index = Some(maxn);
        self
    }

    /// Indexed register without a declared `MAXn`.
    pub const fn strided(mut self, stride: usize) -> HwioRegister {
        self.stride = stride;
        self
    }

    pub const fn rmsk(mut self, rmsk: u32) -> HwioRegister {
        self.rmsk = Some(rmsk);
        self
    }

    pub const fn por(mut self, por: u32) -> HwioRegister {
        self.por = Some(por);
        self
    }

    pub const fn por_rmsk(mut self, por_rmsk: u32) -> HwioRegister {
        self.por_rmsk = Some(por_rmsk);
        self
    }

    pub const fn attr(mut self, attr: u32) -> HwioRegister {
        self.attr = Some(attr);
        self
    }

    pub const fn inferred(mut self) -> HwioRegister {
        self.inferred = true;
        self
    }

    pub const fn with_fields(mut self, fields: &'static [HwioField]) -> HwioRegister {
        self.fields = fields;
        self
    }

    pub const fn is_indexed(&self) -> bool {
        self.stride != 0
    }

    /// Number of instances, if the register declares a bound.
    pub fn count(&self) -> Option<u32> {
        if self.is_indexed() {
            self.max_index.map(|m| m + 1)
        } else {
            Some(1)
        }
    }

    /// `HWIO_<REG>_ADDR(base)`. For an indexed register this is instance 0.
    pub const fn address(&self, base: usize) -> usize {
        base + self.offset
    }

    /// `HWIO_<REG>_ADDR(base, n)`.
    pub fn address_indexed(&self, base: usize, n: u32) -> Result<usize> {
        if !self.is_indexed() {
            return Err(Error::NotIndexed(self.name));
        }
        if let Some(max) = self.max_index {
            if n > max {
                return Err(Error::IndexOutOfRange {
                    register: self.name,
                    index: n,
                    max,
                });
            }
        }
        Ok(base + self.offset + self.stride * n as usize)
    }

    /// Registers without an `ATTR` entry are treated as read-write.
    pub fn access(&self) -> Access {
        self.attr
            .and_then(Access::from_attr)
            .unwrap_or(Access::ReadWrite)
    }

    pub fn read_mask(&self) -> u32 {
        self.rmsk.unwrap_or(u32::MAX)
    }

    pub fn field(&self, name: &str) -> Option<&'static HwioField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// OR of every field mask.
    pub fn defined_bits(&self) -> u32 {
        self.fields.iter().fold(0, |acc, f| acc | f.bmsk)
    }
}

/// A register bound to its `tock_registers` long name `R`.
///
/// Typed accessors on [`HwioBlock`](crate::HwioBlock) only accept
/// `Field<u32, R>` and `FieldValue<u32, R>` of the same register.
pub struct TypedRegister<R: RegisterLongName> {
    pub reg: &'static HwioRegister,
    associated_register: PhantomData<R>,
}

impl<R: RegisterLongName> TypedRegister<R> {
    pub const fn new(reg: &'static HwioRegister) -> TypedRegister<R> {
        TypedRegister {
            reg,
            associated_register: PhantomData,
        }
    }
}

impl<R: RegisterLongName> Clone for TypedRegister<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: RegisterLongName> Copy for TypedRegister<R> {}

#[cfg(test)]
mod tests {
    use super::HwioRegister;
    use crate::access::Access;
    use crate::field::HwioField;
    use crate::Error;

    const FIELDS: &[HwioField] = &[HwioField::new("VALUE", 0xffff_ffff, 0)];

    // peach v1 TCL_R1_TESTBUS_CAPTURE_n.
    const CAPTURE: HwioRegister = HwioRegister::new("R1_TESTBUS_CAPTURE_n", 0x1034)
        .indexed(0x4, 511)
        .rmsk(0xffff_ffff)
        .attr(0x1)
        .with_fields(FIELDS);

    #[test]
    fn plain_address() {
        let reg = HwioRegister::new("R0_CONS_RING_CMN_CTRL_REG", 0x600);
        assert_eq!(reg.address(0x0378_0000), 0x0378_0600);
        assert_eq!(reg.address_indexed(0, 1), Err(Error::NotIndexed("R0_CONS_RING_CMN_CTRL_REG")));
        assert_eq!(reg.count(), Some(1));
        assert_eq!(reg.access(), Access::ReadWrite);
        assert_eq!(reg.read_mask(), u32::MAX);
        assert!(!reg.inferred);
        assert!(HwioRegister::new("R0_SW2REO_RING_BASE_MSB", 0x308).inferred().inferred);
    }

    #[test]
    fn indexed_address() {
        assert!(CAPTURE.is_indexed());
        assert_eq!(CAPTURE.count(), Some(512));
        assert_eq!(CAPTURE.address_indexed(0x1000, 0), Ok(0x2034));
        assert_eq!(CAPTURE.address_indexed(0x1000, 511), Ok(0x2034 + 511 * 4));
        assert_eq!(
            CAPTURE.address_indexed(0x1000, 512),
            Err(Error::IndexOutOfRange {
                register: "R1_TESTBUS_CAPTURE_n",
                index: 512,
                max: 511
            })
        );
        assert_eq!(CAPTURE.access(), Access::ReadOnly);
    }

    #[test]
    fn unbounded_index() {
        let reg = HwioRegister::new("R0_DSCP_TID_MAP_n", 0x240).strided(0x4);
        assert_eq!(reg.count(), None);
        assert_eq!(reg.address_indexed(0, 100), Ok(0x240 + 400));
    }

    #[test]
    fn field_lookup() {
        assert_eq!(CAPTURE.field("VALUE").map(|f| f.bmsk), Some(0xffff_ffff));
        assert!(CAPTURE.field("MISSING").is_none());
        assert_eq!(CAPTURE.defined_bits(), 0xffff_ffff);
    }
}
