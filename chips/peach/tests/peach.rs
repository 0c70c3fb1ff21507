// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

use std::sync::{Arc, Mutex};

use peach::v1::descriptors::{mactx_phy_desc, pcu_ppdu_setup_init};
use peach::v1::umac::{reo, tcl, tqm, umac_mxi};
use peach::v2::descriptors::rx_attention;
use wlan_hwio::check::check_chip;
use wlan_hwio::emu::{EmulatedBus, RegisterFile};
use wlan_hwio::{Access, BitOrder, DescriptorView, Error, HwioBlock};

/// Arbitrary runtime base for the blocks without a fixed offset.
const MXI_BASE: usize = 0x00a0_0000;

fn mxi() -> (HwioBlock<EmulatedBus>, Arc<Mutex<RegisterFile>>) {
    let file = Arc::new(Mutex::new(RegisterFile::from_block(&umac_mxi::BLOCK)));
    let mut bus = EmulatedBus::new();
    bus.add_device(MXI_BASE, 0x1000, file.clone()).unwrap();
    (HwioBlock::new(bus, MXI_BASE), file)
}

#[test]
fn all_revisions_validate() {
    let failures = check_chip(&peach::CHIP, |rev, e| eprintln!("peach {}: {}", rev.name, e));
    assert_eq!(failures, 0);
}

#[test]
fn block_bases() {
    let v1 = peach::CHIP.revision("v1").unwrap();
    assert_eq!(v1.blocks.len(), 6);
    assert_eq!(v1.block("tcl").and_then(|b| b.base_offset), Some(0x44000));
    assert_eq!(v1.block("tqm").and_then(|b| b.base_offset), None);
    assert_eq!(tqm::BASE_OFFSET, None);
    assert_eq!(tcl::BASE, 0x44000);

    let v2 = peach::CHIP.revision("v2").unwrap();
    assert!(v2.block("wbm").is_none());
    assert_eq!(v2.descriptors.len(), 2);
}

#[test]
fn ring_base_msb_addresses() {
    assert!(!reo::R0_REO2SW1_RING_BASE_MSB.inferred);
    assert_eq!(reo::R0_REO2SW1_RING_BASE_MSB.offset, 0x504);
    assert!(!tcl::R0_SW2TCL1_RING_BASE_MSB.inferred);
    assert_eq!(tcl::R0_SW2TCL1_RING_BASE_MSB.offset, 0x91c);

    assert!(reo::R0_SW2REO_RING_BASE_MSB.inferred);
    assert_eq!(
        reo::R0_SW2REO_RING_BASE_MSB.offset,
        reo::R0_SW2REO_RING_BASE_LSB.offset + 4
    );
}

#[test]
fn register_attributes() {
    let reg = &umac_mxi::R1_MXI_TESTBUS_CAPTURE_n;
    assert_eq!(reg.access(), Access::ReadOnly);
    assert_eq!(reg.count(), Some(64));
    assert_eq!(reg.address_indexed(MXI_BASE, 63), Ok(MXI_BASE + 0x508 + 63 * 4));
    assert_eq!(
        reg.address_indexed(MXI_BASE, 64),
        Err(Error::IndexOutOfRange {
            register: "R1_MXI_TESTBUS_CAPTURE_n",
            index: 64,
            max: 63
        })
    );
    assert_eq!(umac_mxi::R0_MXI_NULL_REMAP_CFG_REG.read_mask(), 0x7);
}

#[test]
fn por_values_and_masked_reads() {
    let (block, file) = mxi();
    assert_eq!(
        block.read(&umac_mxi::R0_WMAC_GXI_GXI_SS_UP_TIMEOUT_INT_CTRL),
        Ok(0x1ffe)
    );

    file.lock().unwrap().poke(0xa0, 0xffff_fffd);
    assert_eq!(block.read(&umac_mxi::R0_MXI_NULL_REMAP_CFG_REG), Ok(0xffff_fffd));
    assert_eq!(
        block.read_field(
            &umac_mxi::R0_MXI_NULL_REMAP_CFG_REG,
            &umac_mxi::R0_MXI_NULL_REMAP_CFG_REG::FIELDS[0]
        ),
        Ok(0x5)
    );

    file.lock().unwrap().poke(0x508 + 4 * 10, 0x1234_5678);
    assert_eq!(
        block.read_indexed(&umac_mxi::R1_MXI_TESTBUS_CAPTURE_n, 10),
        Ok(0x1234_5678)
    );
    assert!(block
        .write_indexed(&umac_mxi::R1_MXI_TESTBUS_CAPTURE_n, 10, 0)
        .is_err());
    assert!(file.lock().unwrap().writes().is_empty());
}

#[test]
fn descriptor_declaration_order() {
    let layout = &mactx_phy_desc::LAYOUT;
    let le: Vec<_> = layout
        .declaration_order(0, BitOrder::LittleEndian)
        .map(|f| f.name)
        .collect();
    let mut be: Vec<_> = layout
        .declaration_order(0, BitOrder::BigEndian)
        .map(|f| f.name)
        .collect();
    assert_eq!(le[..2], ["RESERVED_0A", "BF_TYPE"]);
    be.reverse();
    assert_eq!(le, be);
}

#[test]
fn descriptor_fields() {
    let mut setup = DescriptorView::<pcu_ppdu_setup_init::Tlv, _>::new(vec![0u32; 58]).unwrap();
    setup.set(pcu_ppdu_setup_init::EXPECTED_MBA_SIZE, 0x7ff).unwrap();
    setup.set(pcu_ppdu_setup_init::MEDIUM_PROT_TYPE, 3).unwrap();
    assert_eq!(setup.words()[0], 0x01ff_c003);
    assert_eq!(setup.get_by_name("EXPECTED_MBA_SIZE"), Ok(0x7ff));
    assert_eq!(setup.get_by_name("NO_SUCH_FIELD"), Err(Error::UnknownName));

    let words = [0x1234_0000, 0x1, 0x0];
    let att = DescriptorView::<rx_attention::Tlv, _>::new(words).unwrap();
    assert_eq!(att.get(rx_attention::PHY_PPDU_ID), Ok(0x1234));
    assert_eq!(att.get(rx_attention::FIRST_MPDU), Ok(1));
    assert!(DescriptorView::<rx_attention::Tlv, _>::new([0u32; 2]).is_err());
}
