// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! TLV descriptor layouts.
//!
//! A descriptor is a fixed number of 32-bit words in DMA memory. Its fields
//! are listed by `_OFFSET` (byte offset of the containing word), `_LSB`,
//! `_MSB` and `_MASK`. Older layouts count bits inside the 32-bit word at
//! `OFFSET`; layouts that declare `NUM_OF_QWORDS` count them inside the
//! 64-bit little-endian word made of the dwords at `OFFSET` and `OFFSET + 4`.
//!
//! The packed bitfield declaration of a descriptor differs between bit
//! orders only in the order of the fields inside each word, which
//! [`DescriptorLayout::declaration_order`] reproduces from the field table.

use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::slice;

use crate::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OffsetUnit {
    Dword,
    Qword,
}

impl OffsetUnit {
    pub const fn bits(self) -> u32 {
        match self {
            OffsetUnit::Dword => 32,
            OffsetUnit::Qword => 64,
        }
    }

    pub const fn bytes(self) -> usize {
        match self {
            OffsetUnit::Dword => 4,
            OffsetUnit::Qword => 8,
        }
    }
}

/// Bitfield declaration order (`WIFI_BIT_ORDER_BIG_ENDIAN`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitOrder {
    /// Fields declared from bit 0 upwards.
    LittleEndian,
    /// Fields declared from bit 31 downwards.
    BigEndian,
}

impl BitOrder {
    #[cfg(target_endian = "little")]
    pub const NATIVE: BitOrder = BitOrder::LittleEndian;
    #[cfg(target_endian = "big")]
    pub const NATIVE: BitOrder = BitOrder::BigEndian;
}

/// One descriptor field as given by `_OFFSET/_LSB/_MSB/_MASK`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub offset: usize,
    pub lsb: u32,
    pub msb: u32,
    pub mask: u64,
}

impl FieldSpec {
    pub const fn new(name: &'static str, offset: usize, lsb: u32, msb: u32, mask: u64) -> FieldSpec {
        FieldSpec {
            name,
            offset,
            lsb,
            msb,
            mask,
        }
    }

    /// `MSB - LSB + 1`, or 0 for an inverted range.
    pub const fn width(&self) -> u32 {
        if self.msb < self.lsb {
            0
        } else {
            self.msb - self.lsb + 1
        }
    }

    /// `((1 << width) - 1) << LSB`
    pub const fn computed_mask(&self) -> u64 {
        let width = self.width();
        if width == 0 || self.msb >= 64 {
            0
        } else if width == 64 {
            u64::MAX
        } else {
            ((1u64 << width) - 1) << self.lsb
        }
    }

    /// Index of the 32-bit word holding the field's least significant bit.
    pub const fn dword_index(&self, unit: OffsetUnit) -> usize {
        match unit {
            OffsetUnit::Dword => self.offset / 4,
            OffsetUnit::Qword => self.offset / 4 + (self.lsb / 32) as usize,
        }
    }

    /// Bit position of the field inside the word returned by
    /// [`FieldSpec::dword_index`].
    pub const fn dword_lsb(&self) -> u32 {
        self.lsb % 32
    }

    /// The 32-bit mask of the field inside its dword, when the field does not
    /// cross a dword boundary.
    pub const fn dword_mask(&self, unit: OffsetUnit) -> Option<u32> {
        match unit {
            OffsetUnit::Dword => {
                if self.mask > u32::MAX as u64 {
                    None
                } else {
                    Some(self.mask as u32)
                }
            }
            OffsetUnit::Qword => {
                if self.lsb / 32 != self.msb / 32 {
                    None
                } else {
                    Some((self.mask >> (self.lsb / 32 * 32)) as u32)
                }
            }
        }
    }

    fn load(&self, words: &[u32], unit: OffsetUnit) -> Result<u64> {
        let idx = self.offset / 4;
        let needed = idx + unit.bytes() / 4;
        if words.len() < needed {
            return Err(Error::BufferTooSmall {
                needed,
                got: words.len(),
            });
        }
        Ok(match unit {
            OffsetUnit::Dword => u64::from(words[idx]),
            OffsetUnit::Qword => u64::from(words[idx]) | (u64::from(words[idx + 1]) << 32),
        })
    }

    pub fn extract(&self, words: &[u32], unit: OffsetUnit) -> Result<u64> {
        Ok((self.load(words, unit)? & self.mask) >> self.lsb)
    }

    pub fn insert(&self, words: &mut [u32], unit: OffsetUnit, value: u64) -> Result<()> {
        let max = self.mask >> self.lsb;
        if value & !max != 0 {
            return Err(Error::ValueTooWide {
                field: self.name,
                value,
                width: self.width(),
            });
        }
        let cur = self.load(words, unit)?;
        let new = (cur & !self.mask) | ((value << self.lsb) & self.mask);
        let idx = self.offset / 4;
        words[idx] = new as u32;
        if unit == OffsetUnit::Qword {
            words[idx + 1] = (new >> 32) as u32;
        }
        Ok(())
    }
}

/// The full field table of one descriptor.
#[derive(Clone, Copy, Debug)]
pub struct DescriptorLayout {
    pub name: &'static str,
    /// Size in 32-bit words.
    pub dwords: usize,
    pub unit: OffsetUnit,
    /// Fields sorted by word, then by least significant bit.
    pub fields: &'static [FieldSpec],
}

impl DescriptorLayout {
    pub const fn bytes(&self) -> usize {
        self.dwords * 4
    }

    pub const fn bits(&self) -> usize {
        self.dwords * 32
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// The fields of dword `dword` in the order the packed bitfield
    /// declaration lists them for `order`.
    pub fn declaration_order(&self, dword: usize, order: BitOrder) -> WordFields {
        WordFields {
            iter: self.fields.iter(),
            unit: self.unit,
            dword,
            order,
        }
    }

    /// Reads the field called `name` from `words`.
    pub fn read(&self, words: &[u32], name: &str) -> Result<u64> {
        self.field(name)
            .ok_or(Error::UnknownName)?
            .extract(words, self.unit)
    }
}

/// Iterator returned by [`DescriptorLayout::declaration_order`].
#[derive(Clone, Debug)]
pub struct WordFields {
    iter: slice::Iter<'static, FieldSpec>,
    unit: OffsetUnit,
    dword: usize,
    order: BitOrder,
}

impl Iterator for WordFields {
    type Item = &'static FieldSpec;

    fn next(&mut self) -> Option<&'static FieldSpec> {
        loop {
            let f = match self.order {
                BitOrder::LittleEndian => self.iter.next()?,
                BitOrder::BigEndian => self.iter.next_back()?,
            };
            if f.dword_index(self.unit) == self.dword {
                return Some(f);
            }
        }
    }
}

impl FusedIterator for WordFields {}

/// A descriptor type declared by [`tlv_descriptor!`](crate::tlv_descriptor).
pub trait Descriptor {
    const LAYOUT: DescriptorLayout;
}

/// A field of descriptor `D`.
pub struct DescField<D> {
    pub spec: FieldSpec,
    descriptor: PhantomData<D>,
}

impl<D> DescField<D> {
    pub const fn new(spec: FieldSpec) -> DescField<D> {
        DescField {
            spec,
            descriptor: PhantomData,
        }
    }
}

impl<D> Clone for DescField<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for DescField<D> {}

/// Typed access to a descriptor held in a word buffer.
pub struct DescriptorView<D: Descriptor, S: AsRef<[u32]>> {
    words: S,
    descriptor: PhantomData<D>,
}

impl<D: Descriptor, S: AsRef<[u32]>> DescriptorView<D, S> {
    pub fn new(words: S) -> Result<Self> {
        let got = words.as_ref().len();
        if got < D::LAYOUT.dwords {
            return Err(Error::BufferTooSmall {
                needed: D::LAYOUT.dwords,
                got,
            });
        }
        Ok(DescriptorView {
            words,
            descriptor: PhantomData,
        })
    }

    pub fn get(&self, field: DescField<D>) -> Result<u64> {
        field.spec.extract(self.words(), D::LAYOUT.unit)
    }

    pub fn get_by_name(&self, name: &str) -> Result<u64> {
        D::LAYOUT.read(self.words(), name)
    }

    /// The descriptor words, without any trailing buffer space.
    pub fn words(&self) -> &[u32] {
        &self.words.as_ref()[..D::LAYOUT.dwords]
    }

    pub fn into_inner(self) -> S {
        self.words
    }
}

impl<D: Descriptor, S: AsRef<[u32]> + AsMut<[u32]>> DescriptorView<D, S> {
    pub fn set(&mut self, field: DescField<D>, value: u64) -> Result<()> {
        field
            .spec
            .insert(self.words.as_mut(), D::LAYOUT.unit, value)
    }

    pub fn clear(&mut self) {
        self.words.as_mut()[..D::LAYOUT.dwords].fill(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tlv_descriptor;

    tlv_descriptor! {
        // Two dwords addressed as one qword.
        mod msdu [2; Qword] {
            FIRST_MSDU @ 0x0 [0:0] = 0x0000000000000001,
            LAST_MSDU @ 0x0 [1:1] = 0x0000000000000002,
            RESERVED_0A @ 0x0 [7:2] = 0x00000000000000fc,
            BUF_OR_EXT_DESC_TYPE @ 0x0 [8:8] = 0x0000000000000100,
            RESERVED_0B @ 0x0 [31:9] = 0x00000000fffffe00,
            TSO_ENABLE @ 0x0 [32:32] = 0x0000000100000000,
            RESERVED_1A @ 0x0 [47:33] = 0x0000fffe00000000,
            TCP_FLAG @ 0x0 [56:48] = 0x01ff000000000000,
            RESERVED_1B @ 0x0 [63:57] = 0xfe00000000000000,
        }

        mod status [2; Dword] {
            COUNT @ 0x0 [15:0] = 0x0000ffff,
            FLAGS @ 0x0 [31:16] = 0xffff0000,
            COOKIE @ 0x4 [31:0] = 0xffffffff,
        }
    }

    #[test]
    fn qword_fields() {
        let mut words = [0u32; 2];
        let mut view = DescriptorView::<msdu::Tlv, _>::new(&mut words[..]).unwrap();

        view.set(msdu::TSO_ENABLE, 1).unwrap();
        view.set(msdu::TCP_FLAG, 0x1ff).unwrap();
        view.set(msdu::FIRST_MSDU, 1).unwrap();
        assert_eq!(view.words(), &[0x0000_0001, 0x01ff_0001]);
        assert_eq!(view.get(msdu::TCP_FLAG), Ok(0x1ff));
        assert_eq!(view.get_by_name("TSO_ENABLE"), Ok(1));
        assert_eq!(view.get_by_name("NOPE"), Err(Error::UnknownName));

        assert_eq!(
            view.set(msdu::TCP_FLAG, 0x200),
            Err(Error::ValueTooWide {
                field: "TCP_FLAG",
                value: 0x200,
                width: 9
            })
        );

        view.clear();
        assert_eq!(words, [0, 0]);
    }

    #[test]
    fn dword_fields() {
        let view = DescriptorView::<status::Tlv, _>::new([0xbeef_0010, 0x1234_5678]).unwrap();
        assert_eq!(view.get(status::COUNT), Ok(0x10));
        assert_eq!(view.get(status::FLAGS), Ok(0xbeef));
        assert_eq!(view.get(status::COOKIE), Ok(0x1234_5678));
        assert_eq!(view.into_inner(), [0xbeef_0010, 0x1234_5678]);
    }

    #[test]
    fn short_buffer() {
        assert!(matches!(
            DescriptorView::<msdu::Tlv, _>::new([0u32; 1]),
            Err(Error::BufferTooSmall { needed: 2, got: 1 })
        ));
    }

    #[test]
    fn word_geometry() {
        assert_eq!(msdu::TSO_ENABLE.spec.dword_index(OffsetUnit::Qword), 1);
        assert_eq!(msdu::TSO_ENABLE.spec.dword_lsb(), 0);
        assert_eq!(msdu::TCP_FLAG.spec.dword_mask(OffsetUnit::Qword), Some(0x01ff_0000));
        assert_eq!(status::COOKIE.spec.dword_index(OffsetUnit::Dword), 1);
        assert_eq!(msdu::RESERVED_1B.spec.computed_mask(), msdu::RESERVED_1B.spec.mask);

        let wide = FieldSpec::new("SPLIT", 0x0, 16, 47, 0x0000_ffff_ffff_0000);
        assert_eq!(wide.dword_mask(OffsetUnit::Qword), None);
        assert_eq!(FieldSpec::new("ALL", 0x0, 0, 63, u64::MAX).computed_mask(), u64::MAX);
    }

    #[test]
    fn declaration_orders() {
        let le: [&str; 5] = {
            let mut it = msdu::LAYOUT.declaration_order(0, BitOrder::LittleEndian).map(|f| f.name);
            core::array::from_fn(|_| it.next().unwrap_or(""))
        };
        assert_eq!(
            le,
            ["FIRST_MSDU", "LAST_MSDU", "RESERVED_0A", "BUF_OR_EXT_DESC_TYPE", "RESERVED_0B"]
        );

        let mut be = msdu::LAYOUT.declaration_order(1, BitOrder::BigEndian);
        assert_eq!(be.next().map(|f| f.name), Some("RESERVED_1B"));
        assert_eq!(be.next().map(|f| f.name), Some("TCP_FLAG"));
        assert_eq!(be.next().map(|f| f.name), Some("RESERVED_1A"));
        assert_eq!(be.next().map(|f| f.name), Some("TSO_ENABLE"));
        assert_eq!(be.next(), None);
        assert_eq!(be.next(), None);
    }
}
