// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! TLV header words.
//!
//! Every descriptor on a ring or in a status buffer is preceded by a TLV
//! header carrying its tag, its length and, depending on the format, the user
//! id and the MLO link ids. The layouts below are the little-endian bit
//! assignments of the register database; the big-endian declarations list
//! the same fields from the top bit down.

use tock_registers::{register_bitfields, LocalRegisterCopy};

use crate::{Error, Result};

register_bitfields![u16,
    Usr16 [
        CFLG OFFSET(0) NUMBITS(1) [],
        TAG OFFSET(1) NUMBITS(5) [],
        LEN OFFSET(6) NUMBITS(4) [],
        USRID OFFSET(10) NUMBITS(6) []
    ],
    Tlv16 [
        CFLG OFFSET(0) NUMBITS(1) [],
        LEN OFFSET(1) NUMBITS(4) [],
        TAG OFFSET(5) NUMBITS(5) [],
        RESERVED OFFSET(10) NUMBITS(6) []
    ]
];

register_bitfields![u32,
    // MRV disabled: 12-bit length.
    Mac32 [
        CFLG OFFSET(0) NUMBITS(1) [],
        TAG OFFSET(1) NUMBITS(9) [],
        LEN OFFSET(10) NUMBITS(12) [],
        SRC_LINKID OFFSET(22) NUMBITS(3) [],
        MRV OFFSET(25) NUMBITS(1) [],
        USRID OFFSET(26) NUMBITS(6) []
    ],
    // MRV enabled: 9-bit length and a destination link id.
    Mlo32 [
        CFLG OFFSET(0) NUMBITS(1) [],
        TAG OFFSET(1) NUMBITS(9) [],
        LEN OFFSET(10) NUMBITS(9) [],
        DST_LINKID OFFSET(19) NUMBITS(3) [],
        SRC_LINKID OFFSET(22) NUMBITS(3) [],
        MRV OFFSET(25) NUMBITS(1) [],
        USRID OFFSET(26) NUMBITS(6) []
    ]
];

register_bitfields![u64,
    UsrC44 [
        COMPRESSION OFFSET(0) NUMBITS(1) [],
        CTAG OFFSET(1) NUMBITS(5) [],
        USRID OFFSET(6) NUMBITS(6) [],
        CDATA OFFSET(12) NUMBITS(32) []
    ]
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TlvFormat {
    /// 16-bit header with user id.
    Usr16,
    /// 16-bit header.
    Tlv16,
    /// 32-bit header, MRV disabled.
    Mac32,
    /// 32-bit header with user id, MRV disabled.
    MacUsr32,
    /// 32-bit MLO header.
    Mlo32,
    /// 32-bit MLO header with user id.
    MloUsr32,
}

impl TlvFormat {
    pub const fn bits(self) -> u32 {
        match self {
            TlvFormat::Usr16 | TlvFormat::Tlv16 => 16,
            _ => 32,
        }
    }

    pub const fn has_usrid(self) -> bool {
        matches!(
            self,
            TlvFormat::Usr16 | TlvFormat::MacUsr32 | TlvFormat::MloUsr32
        )
    }
}

/// Decoded contents of a TLV header word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TlvHeader {
    pub cflg: bool,
    pub tag: u32,
    pub len: u32,
    pub usrid: u32,
    pub src_linkid: u32,
    pub dst_linkid: u32,
    pub mrv: bool,
}

fn fit(field: &'static str, value: u32, max: u64) -> Result<u32> {
    if u64::from(value) > max {
        return Err(Error::ValueTooWide {
            field,
            value: u64::from(value),
            width: max.count_ones(),
        });
    }
    Ok(value)
}

impl TlvHeader {
    pub fn encode(&self, format: TlvFormat) -> Result<u32> {
        let usrid_max = if format.has_usrid() { 0x3f } else { 0 };
        match format {
            TlvFormat::Usr16 | TlvFormat::Tlv16 => {
                fit("SRC_LINKID", self.src_linkid, 0)?;
                fit("DST_LINKID", self.dst_linkid, 0)?;
                fit("MRV", u32::from(self.mrv), 0)?;
                let tag = fit("TAG", self.tag, 0x1f)? as u16;
                let len = fit("LEN", self.len, 0xf)? as u16;
                let usrid = fit("USRID", self.usrid, usrid_max)? as u16;
                let cflg = u16::from(self.cflg);
                let word = if format == TlvFormat::Usr16 {
                    (Usr16::CFLG.val(cflg)
                        + Usr16::TAG.val(tag)
                        + Usr16::LEN.val(len)
                        + Usr16::USRID.val(usrid))
                    .value
                } else {
                    (Tlv16::CFLG.val(cflg) + Tlv16::LEN.val(len) + Tlv16::TAG.val(tag)).value
                };
                Ok(u32::from(word))
            }
            TlvFormat::Mac32 | TlvFormat::MacUsr32 => {
                fit("DST_LINKID", self.dst_linkid, 0)?;
                Ok((Mac32::CFLG.val(u32::from(self.cflg))
                    + Mac32::TAG.val(fit("TAG", self.tag, 0x1ff)?)
                    + Mac32::LEN.val(fit("LEN", self.len, 0xfff)?)
                    + Mac32::SRC_LINKID.val(fit("SRC_LINKID", self.src_linkid, 0x7)?)
                    + Mac32::MRV.val(u32::from(self.mrv))
                    + Mac32::USRID.val(fit("USRID", self.usrid, usrid_max)?))
                .value)
            }
            TlvFormat::Mlo32 | TlvFormat::MloUsr32 => Ok((Mlo32::CFLG.val(u32::from(self.cflg))
                + Mlo32::TAG.val(fit("TAG", self.tag, 0x1ff)?)
                + Mlo32::LEN.val(fit("LEN", self.len, 0x1ff)?)
                + Mlo32::DST_LINKID.val(fit("DST_LINKID", self.dst_linkid, 0x7)?)
                + Mlo32::SRC_LINKID.val(fit("SRC_LINKID", self.src_linkid, 0x7)?)
                + Mlo32::MRV.val(u32::from(self.mrv))
                + Mlo32::USRID.val(fit("USRID", self.usrid, usrid_max)?))
            .value),
        }
    }

    /// Decodes a header word. 16-bit formats use the low half of `word`;
    /// reserved bits are ignored.
    pub fn decode(format: TlvFormat, word: u32) -> TlvHeader {
        match format {
            TlvFormat::Usr16 => {
                let w = LocalRegisterCopy::<u16, Usr16::Register>::new(word as u16);
                TlvHeader {
                    cflg: w.is_set(Usr16::CFLG),
                    tag: u32::from(w.read(Usr16::TAG)),
                    len: u32::from(w.read(Usr16::LEN)),
                    usrid: u32::from(w.read(Usr16::USRID)),
                    ..TlvHeader::default()
                }
            }
            TlvFormat::Tlv16 => {
                let w = LocalRegisterCopy::<u16, Tlv16::Register>::new(word as u16);
                TlvHeader {
                    cflg: w.is_set(Tlv16::CFLG),
                    tag: u32::from(w.read(Tlv16::TAG)),
                    len: u32::from(w.read(Tlv16::LEN)),
                    ..TlvHeader::default()
                }
            }
            TlvFormat::Mac32 | TlvFormat::MacUsr32 => {
                let w = LocalRegisterCopy::<u32, Mac32::Register>::new(word);
                TlvHeader {
                    cflg: w.is_set(Mac32::CFLG),
                    tag: w.read(Mac32::TAG),
                    len: w.read(Mac32::LEN),
                    usrid: if format.has_usrid() {
                        w.read(Mac32::USRID)
                    } else {
                        0
                    },
                    src_linkid: w.read(Mac32::SRC_LINKID),
                    dst_linkid: 0,
                    mrv: w.is_set(Mac32::MRV),
                }
            }
            TlvFormat::Mlo32 | TlvFormat::MloUsr32 => {
                let w = LocalRegisterCopy::<u32, Mlo32::Register>::new(word);
                TlvHeader {
                    cflg: w.is_set(Mlo32::CFLG),
                    tag: w.read(Mlo32::TAG),
                    len: w.read(Mlo32::LEN),
                    usrid: if format.has_usrid() {
                        w.read(Mlo32::USRID)
                    } else {
                        0
                    },
                    src_linkid: w.read(Mlo32::SRC_LINKID),
                    dst_linkid: w.read(Mlo32::DST_LINKID),
                    mrv: w.is_set(Mlo32::MRV),
                }
            }
        }
    }
}

/// A compressed 44-bit TLV with user id (`usr_c_44`), carried in the low
/// bits of a 64-bit word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompressedTlv {
    pub ctag: u32,
    pub usrid: u32,
    pub cdata: u32,
}

impl CompressedTlv {
    pub fn encode(&self) -> Result<u64> {
        Ok((UsrC44::COMPRESSION::SET
            + UsrC44::CTAG.val(u64::from(fit("CTAG", self.ctag, 0x1f)?))
            + UsrC44::USRID.val(u64::from(fit("USRID", self.usrid, 0x3f)?))
            + UsrC44::CDATA.val(u64::from(self.cdata)))
        .value)
    }

    /// `None` when the compression flag is clear.
    pub fn decode(word: u64) -> Option<CompressedTlv> {
        let w = LocalRegisterCopy::<u64, UsrC44::Register>::new(word);
        if !w.is_set(UsrC44::COMPRESSION) {
            return None;
        }
        Some(CompressedTlv {
            ctag: w.read(UsrC44::CTAG) as u32,
            usrid: w.read(UsrC44::USRID) as u32,
            cdata: w.read(UsrC44::CDATA) as u32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mac_header() {
        let hdr = TlvHeader {
            tag: 0x1ff,
            len: 0x40,
            usrid: 0x25,
            src_linkid: 5,
            mrv: false,
            ..TlvHeader::default()
        };
        let word = hdr.encode(TlvFormat::MacUsr32).unwrap();
        assert_eq!(word, (0x25 << 26) | (5 << 22) | (0x40 << 10) | (0x1ff << 1));
        assert_eq!(TlvHeader::decode(TlvFormat::MacUsr32, word), hdr);

        // Without a user id field the top bits are reserved.
        let plain = TlvHeader::decode(TlvFormat::Mac32, word);
        assert_eq!(plain.usrid, 0);
        assert_eq!(plain.len, 0x40);
        assert!(matches!(
            hdr.encode(TlvFormat::Mac32),
            Err(Error::ValueTooWide { field: "USRID", .. })
        ));
    }

    #[test]
    fn mlo_header() {
        let hdr = TlvHeader {
            cflg: true,
            tag: 0x9a,
            len: 0x1ff,
            dst_linkid: 3,
            src_linkid: 6,
            mrv: true,
            ..TlvHeader::default()
        };
        let word = hdr.encode(TlvFormat::Mlo32).unwrap();
        assert_eq!(
            word,
            (1 << 25) | (6 << 22) | (3 << 19) | (0x1ff << 10) | (0x9a << 1) | 1
        );
        assert_eq!(TlvHeader::decode(TlvFormat::Mlo32, word), hdr);

        let long = TlvHeader { len: 0x200, ..hdr };
        assert!(matches!(
            long.encode(TlvFormat::Mlo32),
            Err(Error::ValueTooWide { field: "LEN", .. })
        ));
        assert_eq!(
            long.encode(TlvFormat::Mac32),
            Err(Error::ValueTooWide {
                field: "DST_LINKID",
                value: 3,
                width: 0
            })
        );
    }

    #[test]
    fn short_headers() {
        let hdr = TlvHeader {
            tag: 0x11,
            len: 0x9,
            usrid: 0x3f,
            ..TlvHeader::default()
        };
        let word = hdr.encode(TlvFormat::Usr16).unwrap();
        assert_eq!(word, (0x3f << 10) | (0x9 << 6) | (0x11 << 1));
        assert_eq!(TlvHeader::decode(TlvFormat::Usr16, word | 0xffff_0000), hdr);

        let plain = TlvHeader { usrid: 0, ..hdr };
        let word = plain.encode(TlvFormat::Tlv16).unwrap();
        assert_eq!(word, (0x11 << 5) | (0x9 << 1));
        assert_eq!(TlvHeader::decode(TlvFormat::Tlv16, word), plain);

        assert!(TlvHeader { tag: 0x20, ..plain }
            .encode(TlvFormat::Tlv16)
            .is_err());
        assert!(TlvHeader { mrv: true, ..plain }
            .encode(TlvFormat::Usr16)
            .is_err());
    }

    #[test]
    fn compressed() {
        let tlv = CompressedTlv {
            ctag: 0x1e,
            usrid: 0x2,
            cdata: 0xdead_beef,
        };
        let word = tlv.encode().unwrap();
        assert_eq!(word, (0xdead_beef << 12) | (0x2 << 6) | (0x1e << 1) | 1);
        assert_eq!(CompressedTlv::decode(word), Some(tlv));
        assert_eq!(CompressedTlv::decode(word & !1), None);
        assert!(CompressedTlv { ctag: 0x20, ..tlv }.encode().is_err());
    }
}
