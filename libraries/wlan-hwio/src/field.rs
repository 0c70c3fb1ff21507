// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Register bitfields described by a `_BMSK` / `_SHFT` pair.

use crate::{Error, Result};

/// One bitfield of an HWIO register.
///
/// `bmsk` is the field mask in register position and `shft` the position of
/// its least significant bit, exactly as the register database lists them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HwioField {
    pub name: &'static str,
    pub bmsk: u32,
    pub shft: usize,
}

impl HwioField {
    pub const fn new(name: &'static str, bmsk: u32, shft: usize) -> HwioField {
        HwioField { name, bmsk, shft }
    }

    pub const fn width(&self) -> u32 {
        self.bmsk.count_ones()
    }

    pub const fn lsb(&self) -> usize {
        self.shft
    }

    /// Position of the most significant bit, or `None` for an empty mask.
    pub const fn msb(&self) -> Option<usize> {
        match self.width() {
            0 => None,
            width => Some(self.shft + width as usize - 1),
        }
    }

    /// True when the mask is a single run of ones starting at `shft`.
    pub const fn is_contiguous(&self) -> bool {
        if self.bmsk == 0 || self.shft >= 32 {
            return false;
        }
        let run = self.bmsk >> self.shft;
        run.trailing_ones() == self.width() && (run << self.shft) == self.bmsk
    }

    /// Mask of the field shifted down to bit 0.
    pub const fn value_mask(&self) -> u32 {
        self.bmsk >> self.shft
    }

    /// `(word & BMSK) >> SHFT`
    pub const fn extract(&self, word: u32) -> u32 {
        (word & self.bmsk) >> self.shft
    }

    /// `(value << SHFT) & BMSK`; bits that do not fit are dropped.
    pub const fn pack_truncating(&self, value: u32) -> u32 {
        value.wrapping_shl(self.shft as u32) & self.bmsk
    }

    /// Replace the field in `word` with `value`.
    pub fn insert(&self, word: u32, value: u32) -> Result<u32> {
        if value & !self.value_mask() != 0 {
            return Err(Error::ValueTooWide {
                field: self.name,
                value: u64::from(value),
                width: self.width(),
            });
        }
        Ok((word & !self.bmsk) | self.pack_truncating(value))
    }
}

#[cfg(test)]
mod tests {
    use super::HwioField;
    use crate::Error;

    // WBM R0_IDLE_LIST_CONTROL on kiwi v2.
    const SCATTER_BUFFER_SIZE: HwioField = HwioField::new("SCATTER_BUFFER_SIZE", 0x7fc, 2);
    const LINK_DESC_IDLE_LIST_MODE: HwioField =
        HwioField::new("LINK_DESC_IDLE_LIST_MODE", 0x2, 1);

    #[test]
    fn geometry() {
        let ring_size = HwioField::new("RING_SIZE", 0x000fffff, 0);
        assert_eq!(ring_size.width(), 20);
        assert_eq!(ring_size.lsb(), 0);
        assert_eq!(ring_size.msb(), Some(19));
        assert!(ring_size.is_contiguous());

        let top = HwioField::new("TOP", 0x8000_0000, 31);
        assert_eq!(top.width(), 1);
        assert_eq!(top.msb(), Some(31));
        assert!(top.is_contiguous());
        assert_eq!(top.value_mask(), 1);
    }

    #[test]
    fn non_contiguous_masks() {
        assert!(!HwioField::new("HOLE", 0x5, 0).is_contiguous());
        assert!(!HwioField::new("SHIFTED", 0xf0, 3).is_contiguous());
        assert!(!HwioField::new("EMPTY", 0, 0).is_contiguous());
        assert_eq!(HwioField::new("EMPTY", 0, 0).msb(), None);
    }

    #[test]
    fn extract_and_pack() {
        let word = 0x0000_0402;
        assert_eq!(SCATTER_BUFFER_SIZE.extract(word), 0x100);
        assert_eq!(LINK_DESC_IDLE_LIST_MODE.extract(word), 1);
        assert_eq!(SCATTER_BUFFER_SIZE.pack_truncating(0x3ff), 0x7fc);
    }

    #[test]
    fn insert_rejects_wide_values() {
        assert_eq!(
            SCATTER_BUFFER_SIZE.insert(0xffff_ffff, 0x1),
            Ok(0xffff_f807)
        );
        assert_eq!(
            SCATTER_BUFFER_SIZE.insert(0, 0x200),
            Err(Error::ValueTooWide {
                field: "SCATTER_BUFFER_SIZE",
                value: 0x200,
                width: 9
            })
        );
    }
}
