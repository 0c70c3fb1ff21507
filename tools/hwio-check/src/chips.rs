// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Chip tables known to the tool.

use wlan_hwio::{ChipMap, DescriptorLayout, Revision};

use crate::error::{Error, Result};

pub const CHIPS: &[&ChipMap] = &[
    &kiwi::CHIP,
    &peach::CHIP,
    &wcn6450::CHIP,
    &qca5424::CHIP,
    &qcn6432::CHIP,
];

pub fn find_chip(name: &str) -> Result<&'static ChipMap> {
    CHIPS
        .iter()
        .copied()
        .find(|c| c.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| Error::UnknownChip(name.to_string()))
}

/// The named revision, or the newest one when `rev` is `None`.
pub fn find_revision(chip: &'static ChipMap, rev: Option<&str>) -> Result<&'static Revision> {
    match rev {
        Some(name) => chip
            .revision(name)
            .ok_or_else(|| Error::UnknownRevision(chip.name, name.to_string())),
        None => chip.latest().ok_or(Error::NoRevisions(chip.name)),
    }
}

/// Looks `name` up in `rev` first. Without an explicit revision the other
/// revisions are searched newest first, since most descriptors only exist in
/// one of them.
pub fn find_descriptor(
    chip: &'static ChipMap,
    rev: Option<&str>,
    name: &str,
) -> Result<(&'static Revision, &'static DescriptorLayout)> {
    let name = name.to_ascii_lowercase();
    if rev.is_some() {
        let rev = find_revision(chip, rev)?;
        return rev
            .descriptor(&name)
            .map(|d| (rev, d))
            .ok_or(Error::UnknownDescriptor(rev.name, name));
    }
    chip.revisions
        .iter()
        .rev()
        .find_map(|r| r.descriptor(&name).map(|d| (r, d)))
        .ok_or_else(|| Error::UnknownDescriptor(chip.name, name))
}

/// Parses `0x`-prefixed hex or decimal.
pub fn parse_number(s: &str) -> Result<u64> {
    let t = s.replace('_', "");
    let parsed = match t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => t.parse(),
    };
    parsed.map_err(|_| Error::BadNumber(s.to_string()))
}

pub fn parse_word(s: &str) -> Result<u32> {
    u32::try_from(parse_number(s)?).map_err(|_| Error::BadNumber(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chip_names() {
        assert_eq!(find_chip("KIWI").unwrap().name, "kiwi");
        assert!(matches!(find_chip("hamilton"), Err(Error::UnknownChip(_))));
    }

    #[test]
    fn default_revision_is_latest() {
        let kiwi = find_chip("kiwi").unwrap();
        assert_eq!(find_revision(kiwi, None).unwrap().name, "v2");
        assert_eq!(find_revision(kiwi, Some("v1")).unwrap().name, "v1");
        assert!(matches!(
            find_revision(kiwi, Some("v9")),
            Err(Error::UnknownRevision("kiwi", _))
        ));
    }

    #[test]
    fn descriptor_search_falls_back_to_older_revisions() {
        let kiwi = find_chip("kiwi").unwrap();
        let (rev, layout) = find_descriptor(kiwi, None, "RX_ATTENTION").unwrap();
        assert_eq!((rev.name, layout.name), ("v1", "rx_attention"));
        assert!(find_descriptor(kiwi, Some("v2"), "rx_attention").is_err());
    }

    #[test]
    fn numbers() {
        assert_eq!(parse_number("0x38000").unwrap(), 0x38000);
        assert_eq!(parse_number("0xdead_beef").unwrap(), 0xdead_beef);
        assert_eq!(parse_number("42").unwrap(), 42);
        assert!(parse_number("0xzz").is_err());
        assert!(parse_word("0x100000000").is_err());
    }
}
