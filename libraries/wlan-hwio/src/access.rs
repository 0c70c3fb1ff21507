// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Register access attributes (`HWIO_*_ATTR`).

/// Access permitted by a register's `ATTR` value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    ReadOnly,
    WriteOnly,
    ReadWrite,
}

impl Access {
    pub const fn from_attr(attr: u32) -> Option<Access> {
        match attr {
            0x1 => Some(Access::ReadOnly),
            0x2 => Some(Access::WriteOnly),
            0x3 => Some(Access::ReadWrite),
            _ => None,
        }
    }

    pub const fn attr(self) -> u32 {
        match self {
            Access::ReadOnly => 0x1,
            Access::WriteOnly => 0x2,
            Access::ReadWrite => 0x3,
        }
    }

    pub const fn readable(self) -> bool {
        !matches!(self, Access::WriteOnly)
    }

    pub const fn writable(self) -> bool {
        !matches!(self, Access::ReadOnly)
    }
}

#[cfg(test)]
mod tests {
    use super::Access;

    #[test]
    fn attr_codes() {
        assert_eq!(Access::from_attr(0x1), Some(Access::ReadOnly));
        assert_eq!(Access::from_attr(0x2), Some(Access::WriteOnly));
        assert_eq!(Access::from_attr(0x3), Some(Access::ReadWrite));
        assert_eq!(Access::from_attr(0x0), None);
        assert_eq!(Access::from_attr(0x4), None);

        for a in [Access::ReadOnly, Access::WriteOnly, Access::ReadWrite] {
            assert_eq!(Access::from_attr(a.attr()), Some(a));
        }
    }

    #[test]
    fn permissions() {
        assert!(Access::ReadOnly.readable());
        assert!(!Access::ReadOnly.writable());
        assert!(!Access::WriteOnly.readable());
        assert!(Access::WriteOnly.writable());
        assert!(Access::ReadWrite.readable() && Access::ReadWrite.writable());
    }
}
