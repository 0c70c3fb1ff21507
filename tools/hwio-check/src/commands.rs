// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Subcommand bodies. Each writes its report to `out`.

use std::io::Write;

use colored::Colorize;
use wlan_hwio::check::check_chip;
use wlan_hwio::{
    BitOrder, BlockMap, ChipMap, DescriptorLayout, HwioField, HwioRegister, RingDirection,
    SrngConfig,
};

use crate::chips::{self, CHIPS};
use crate::error::{Error, Result};

pub fn list(out: &mut impl Write) -> Result<()> {
    for chip in CHIPS {
        writeln!(out, "{}", chip.name.bold())?;
        for rev in chip.revisions {
            writeln!(
                out,
                "  {:<4} {} blocks, {} descriptors, {} rings",
                rev.name,
                rev.blocks.len(),
                rev.descriptors.len(),
                rev.rings.len()
            )?;
            for block in rev.blocks {
                writeln!(
                    out,
                    "       block {} ({} registers)",
                    block.name,
                    block.registers.len()
                )?;
            }
            for layout in rev.descriptors {
                writeln!(out, "       tlv   {} ({} dwords)", layout.name, layout.dwords)?;
            }
        }
    }
    Ok(())
}

fn bit_range(msb: u32, lsb: u32) -> String {
    if msb == lsb {
        format!("[{}]", lsb)
    } else {
        format!("[{}:{}]", msb, lsb)
    }
}

fn field_bits(field: &HwioField) -> String {
    match field.msb() {
        Some(msb) => bit_range(msb as u32, field.lsb() as u32),
        None => String::from("[empty]"),
    }
}

fn write_register(out: &mut impl Write, reg: &HwioRegister, base: Option<usize>) -> Result<()> {
    let addr = match base {
        Some(base) => format!("{:#010x}", reg.address(base)),
        None => format!("+{:#07x}", reg.offset),
    };
    let mut line = format!("  {} {:<48} {:?}", addr, reg.name, reg.access());
    if let Some(rmsk) = reg.rmsk {
        line += &format!("  rmsk {:#010x}", rmsk);
    }
    if let Some(por) = reg.por {
        line += &format!("  por {:#010x}", por);
    }
    if reg.is_indexed() {
        match reg.max_index {
            Some(max) => line += &format!("  n <= {} stride {:#x}", max, reg.stride),
            None => line += &format!("  n stride {:#x}", reg.stride),
        }
    }
    if reg.inferred {
        line += "  inferred";
    }
    writeln!(out, "{}", line)?;
    for field in reg.fields {
        writeln!(out, "      {:>8} {}", field_bits(field), field.name)?;
    }
    Ok(())
}

fn write_block(out: &mut impl Write, block: &BlockMap, base: Option<usize>) -> Result<()> {
    // Blocks without a fixed offset are placed at `--base` directly.
    let block_base = match (block.base_offset, base) {
        (Some(off), b) => Some(b.unwrap_or(0) + off),
        (None, b) => b,
    };
    match block_base {
        Some(addr) => writeln!(out, "{} @ {:#x}", block.name.to_uppercase().as_str().bold(), addr)?,
        None => writeln!(out, "{} @ runtime base", block.name.to_uppercase().as_str().bold())?,
    }
    if !block.instances.is_empty() {
        let bases: Vec<String> = (0..block.instance_count())
            .filter_map(|i| block.instance_base(i))
            .map(|off| format!("{:#x}", base.unwrap_or(0) + off))
            .collect();
        writeln!(out, "  instances: {}", bases.join(", "))?;
    }
    for reg in block.registers {
        write_register(out, reg, block_base)?;
    }
    Ok(())
}

pub fn regs(
    out: &mut impl Write,
    chip: &'static ChipMap,
    rev: Option<&str>,
    block: Option<&str>,
    base: Option<usize>,
) -> Result<()> {
    let rev = chips::find_revision(chip, rev)?;
    match block {
        Some(name) => {
            let block = rev
                .block(name)
                .ok_or_else(|| Error::UnknownBlock(rev.name, name.to_string()))?;
            write_block(out, block, base)
        }
        None => {
            for block in rev.blocks {
                write_block(out, block, base)?;
            }
            Ok(())
        }
    }
}

pub fn desc(
    out: &mut impl Write,
    chip: &'static ChipMap,
    rev: Option<&str>,
    name: &str,
    order: BitOrder,
) -> Result<()> {
    let (rev, layout) = chips::find_descriptor(chip, rev, name)?;
    writeln!(
        out,
        "{} ({} {}): {} dwords, {:?} offsets",
        layout.name.bold(),
        chip.name,
        rev.name,
        layout.dwords,
        layout.unit
    )?;
    for dword in 0..layout.dwords {
        writeln!(out, "  dword {}", dword)?;
        for field in layout.declaration_order(dword, order) {
            let lsb = field.dword_lsb();
            let msb = lsb + field.width() - 1;
            writeln!(out, "    {:>8} {}", bit_range(msb, lsb), field.name)?;
        }
    }
    Ok(())
}

fn decode_words(out: &mut impl Write, layout: &DescriptorLayout, words: &[u32]) -> Result<()> {
    for field in layout.fields {
        let value = field.extract(words, layout.unit)?;
        let line = format!("  {:<48} {:#x}", field.name, value);
        if field.name.starts_with("RESERVED") {
            writeln!(out, "{}", line.as_str().dimmed())?;
        } else {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}

pub fn decode(
    out: &mut impl Write,
    chip: &'static ChipMap,
    rev: Option<&str>,
    name: &str,
    words: &[u32],
) -> Result<()> {
    let (_, layout) = chips::find_descriptor(chip, rev, name)?;
    if words.len() < layout.dwords {
        return Err(wlan_hwio::Error::BufferTooSmall {
            needed: layout.dwords,
            got: words.len(),
        }
        .into());
    }
    if words.len() > layout.dwords {
        log::warn!(
            "{} is {} dwords, ignoring {} trailing words",
            layout.name,
            layout.dwords,
            words.len() - layout.dwords
        );
    }
    writeln!(out, "{}", layout.name.bold())?;
    decode_words(out, layout, &words[..layout.dwords])
}

fn ring_ids(ring: &SrngConfig) -> String {
    match ring.max_rings.checked_sub(1) {
        Some(last) => format!("{}..={}", ring.start_ring_id, ring.start_ring_id + last),
        None => String::from("none"),
    }
}

pub fn rings(out: &mut impl Write, chip: &'static ChipMap, rev: Option<&str>) -> Result<()> {
    let rev = chips::find_revision(chip, rev)?;
    if rev.rings.is_empty() {
        writeln!(out, "{} {} has no ring table", chip.name, rev.name)?;
        return Ok(());
    }
    for ring in rev.rings {
        let dir = match ring.dir {
            RingDirection::Src => "src",
            RingDirection::Dst => "dst",
        };
        let ids = ring_ids(ring);
        if ring.lmac_ring {
            writeln!(out, "  {:<22} {:<10} {}  per-MAC", ring.ring_type.name(), ids, dir)?;
        } else {
            writeln!(
                out,
                "  {:<22} {:<10} {}  R0 {:#x}/{:#x}  R2 {:#x}/{:#x}  max {:#x}",
                ring.ring_type.name(),
                ids,
                dir,
                ring.reg_start[0],
                ring.reg_size[0],
                ring.reg_start[1],
                ring.reg_size[1],
                ring.max_size
            )?;
        }
    }
    Ok(())
}

/// Validates `chips`, printing every problem. Fails with the total count.
pub fn check(out: &mut impl Write, chips: &[&'static ChipMap]) -> Result<()> {
    let mut total = 0;
    for chip in chips {
        let mut problems = Vec::new();
        let failures = check_chip(chip, |rev, e| {
            problems.push(format!("{} {}: {}", chip.name, rev.name, e))
        });
        for p in &problems {
            writeln!(out, "{} {}", "error:".red().bold(), p)?;
        }
        if failures == 0 {
            writeln!(out, "{} {}", "ok".green(), chip.name)?;
        }
        total += failures;
    }
    if total > 0 {
        return Err(Error::ChecksFailed(total));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn list_names_every_chip() {
        let text = render(|out| list(out));
        for chip in ["kiwi", "peach", "wcn6450", "qca5424", "qcn6432"] {
            assert!(text.contains(chip), "{} missing", chip);
        }
        assert!(text.contains("block reo"));
        assert!(text.contains("tlv   tcl_data_cmd (8 dwords)"));
    }

    #[test]
    fn register_addresses_include_block_offset() {
        let kiwi = chips::find_chip("kiwi").unwrap();
        let text = render(|out| regs(out, kiwi, Some("v2"), Some("REO"), None));
        assert!(text.starts_with("REO @ 0x38000"));
        assert!(text.contains("0x000384e4 R0_REO2SW1_RING_BASE_LSB"));
    }

    #[test]
    fn runtime_base_blocks() {
        let peach = chips::find_chip("peach").unwrap();
        let text = render(|out| regs(out, peach, Some("v1"), Some("umac_mxi"), None));
        assert!(text.contains("UMAC_MXI @ runtime base"));
        assert!(text.contains("n <= 63 stride 0x4"));

        let text = render(|out| regs(out, peach, Some("v1"), Some("umac_mxi"), Some(0xa0_0000)));
        assert!(text.contains("UMAC_MXI @ 0xa00000"));
    }

    #[test]
    fn ce_instances() {
        let wcn = chips::find_chip("wcn6450").unwrap();
        let text = render(|out| regs(out, wcn, None, Some("ce"), Some(0x1b_0000)));
        assert!(text.contains("instances: 0x1b0000, 0x1b1000"));
    }

    #[test]
    fn inferred_registers_are_marked() {
        let kiwi = chips::find_chip("kiwi").unwrap();
        let text = render(|out| regs(out, kiwi, Some("v2"), Some("reo"), None));
        let line = |name: &str| text.lines().find(|l| l.contains(name)).unwrap().to_string();
        assert!(line("R0_SW2REO_RING_BASE_MSB").ends_with("inferred"));
        assert!(!line("R0_REO2SW1_RING_BASE_MSB").contains("inferred"));
    }

    #[test]
    fn empty_field_mask() {
        const FIELDS: &[HwioField] = &[HwioField::new("UNUSED", 0, 4)];
        let reg = HwioRegister::new("R0_SPARE", 0x10).with_fields(FIELDS);
        let mut out = Vec::new();
        write_register(&mut out, &reg, None).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[empty] UNUSED"));
    }

    #[test]
    fn ring_without_rings() {
        let ring = SrngConfig::umac(
            wlan_hwio::RingType::TclCmdCredit,
            29,
            0,
            RingDirection::Src,
            [0; 2],
            [0; 2],
            [0; 2],
            0xffff,
        );
        assert_eq!(ring_ids(&ring), "none");
        assert_eq!(ring_ids(&SrngConfig { max_rings: 1, ..ring }), "29..=29");
    }

    #[test]
    fn unknown_block() {
        let kiwi = chips::find_chip("kiwi").unwrap();
        let err = regs(&mut Vec::new(), kiwi, None, Some("ce"), None).unwrap_err();
        assert!(matches!(err, Error::UnknownBlock("v2", _)));
    }

    #[test]
    fn declaration_order_flips() {
        let kiwi = chips::find_chip("kiwi").unwrap();
        let le = render(|out| desc(out, kiwi, Some("v1"), "rx_attention", BitOrder::LittleEndian));
        let be = render(|out| desc(out, kiwi, Some("v1"), "rx_attention", BitOrder::BigEndian));
        let word0 = |text: &str| -> Vec<String> {
            text.lines()
                .skip_while(|l| l.trim() != "dword 0")
                .skip(1)
                .take_while(|l| !l.trim().starts_with("dword"))
                .map(str::to_string)
                .collect()
        };
        let mut rev = word0(&be);
        rev.reverse();
        assert_eq!(word0(&le), rev);
        assert!(le.contains("4 dwords, Qword offsets"));
    }

    #[test]
    fn decode_needs_whole_descriptor() {
        let qcn = chips::find_chip("qcn6432").unwrap();
        let err = decode(&mut Vec::new(), qcn, None, "tx_flush_req", &[0]).unwrap_err();
        assert!(matches!(
            err,
            Error::Hwio(wlan_hwio::Error::BufferTooSmall { needed: 2, got: 1 })
        ));
    }

    #[test]
    fn decode_prints_every_field() {
        let qcn = chips::find_chip("qcn6432").unwrap();
        let (_, layout) = chips::find_descriptor(qcn, None, "tcl_data_cmd").unwrap();
        let words = [0u32; 8];
        let text = render(|out| decode(out, qcn, None, "tcl_data_cmd", &words));
        assert_eq!(text.lines().count(), layout.fields.len() + 1);
    }

    #[test]
    fn kiwi_ring_table() {
        let kiwi = chips::find_chip("kiwi").unwrap();
        let text = render(|out| rings(out, kiwi, None));
        assert!(text.contains("REO_DST"));
        assert!(text.contains("1..=8"));
        assert!(text.contains("per-MAC"));

        let peach = chips::find_chip("peach").unwrap();
        let text = render(|out| rings(out, peach, Some("v1")));
        assert!(text.contains("no ring table"));
    }

    #[test]
    fn all_chips_pass() {
        let text = render(|out| check(out, CHIPS));
        assert_eq!(text.lines().filter(|l| l.starts_with("ok")).count(), CHIPS.len());
    }
}
