// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

use std::sync::{Arc, Mutex};

use kiwi::v2::descriptors::{receive_rssi_info, tx_fes_status_1k_ba};
use kiwi::v2::srng;
use kiwi::v2::umac::{reo, tcl, wbm};
use wlan_hwio::check::check_chip;
use wlan_hwio::emu::{EmulatedBus, RegisterFile};
use wlan_hwio::srng::{find_ring, RegGroup, RingType};
use wlan_hwio::{DescriptorView, Error, HwioBlock};

#[test]
fn all_revisions_validate() {
    let failures = check_chip(&kiwi::CHIP, |rev, e| eprintln!("kiwi {}: {}", rev.name, e));
    assert_eq!(failures, 0);
}

#[test]
fn revision_lookup() {
    let v2 = kiwi::CHIP.revision("v2").unwrap();
    assert_eq!(v2.block("REO").and_then(|b| b.base_offset), Some(0x38000));
    assert_eq!(v2.block("wbm").map(|b| b.registers.len()), Some(26));
    assert!(v2.descriptor("tx_fes_status_1k_ba").is_some());
    assert_eq!(kiwi::CHIP.latest().map(|r| r.name), Some("v2"));
}

#[test]
fn umac_block_offsets() {
    assert_eq!(wbm::BASE, 0x34000);
    assert_eq!(tcl::BASE, 0x44000);
    assert_eq!(
        wbm::R0_IDLE_LIST_CONTROL.address(wbm::BASE),
        0x34000 + 0x240
    );
    assert_eq!(
        wbm::R0_IDLE_LIST_CONTROL::SCATTER_BUFFER_SIZE.mask,
        0x7fc >> 2
    );
    assert_eq!(reo::R0_REO2SW1_RING_BASE_MSB::RING_SIZE.shift, 8);
}

#[test]
fn base_msb_follows_base_lsb() {
    // The only two pairs the database lists both addresses for.
    assert!(!reo::R0_REO2SW1_RING_BASE_MSB.inferred);
    assert_eq!(reo::R0_REO2SW1_RING_BASE_LSB.offset, 0x4e4);
    assert_eq!(reo::R0_REO2SW1_RING_BASE_MSB.offset, 0x4e8);
    assert!(!tcl::R0_SW2TCL1_RING_BASE_MSB.inferred);
    assert_eq!(tcl::R0_SW2TCL1_RING_BASE_LSB.offset, 0x900);
    assert_eq!(tcl::R0_SW2TCL1_RING_BASE_MSB.offset, 0x904);

    assert!(reo::R0_SW2REO_RING_BASE_MSB.inferred);
    let mut inferred = 0;
    for rev in kiwi::CHIP.revisions {
        for block in rev.blocks {
            for reg in block.registers.iter().filter(|r| r.inferred) {
                let ring = reg.name.strip_suffix("_BASE_MSB").unwrap();
                let lsb = block.register(&format!("{}_BASE_LSB", ring)).unwrap();
                assert_eq!(reg.offset, lsb.offset + 4, "{} {}", rev.name, reg.name);
                inferred += 1;
            }
        }
    }
    assert_eq!(inferred, 18);
}

#[test]
fn ring_register_addresses() {
    // REO2SW2 is ring 1 of the REO destination rings.
    assert_eq!(
        srng::REO_DST.register_base(RegGroup::R0, 1),
        Ok(0x38000 + 0x55c)
    );
    assert_eq!(
        srng::REO_DST.register_address(1, &reo::R2_REO2SW1_RING_TP),
        Ok(0x38000 + 0x3050 + 0x4)
    );
    // WBM2SW2 reached through the REO2SW1 template.
    assert_eq!(
        srng::WBM2SW_RELEASE.register_address(2, &reo::R0_REO2SW1_RING_MISC),
        Ok(0x34000 + 0xe08 + 2 * 0x78 + 0x10)
    );
    assert_eq!(
        srng::TCL_DATA.register_address(5, &tcl::R2_SW2TCL1_RING_HP),
        Err(Error::RingOutOfRange {
            ring: "TCL_DATA",
            ring_num: 5
        })
    );
}

#[test]
fn ring_sizes_and_ids() {
    assert_eq!(srng::REO_DST.max_size, 0xfffff);
    assert_eq!(srng::REO_CMD.max_size, 0xffff);
    assert!(srng::REO_CMD.fits(0xffff));
    assert!(!srng::REO_CMD.fits(0x10000));

    let loc = find_ring(srng::RINGS, 131).unwrap();
    assert_eq!(loc.config.ring_type, RingType::Wbm2SwRelease);
    assert_eq!(loc.ring_num, 3);

    let loc = find_ring(srng::RINGS, 184 + 12).unwrap();
    assert_eq!(loc.config.ring_type, RingType::RxdmaBuf);
    assert_eq!((loc.ring_num, loc.mac_id), (0, 1));
    assert!(find_ring(srng::RINGS, 60).is_none());
}

#[test]
fn v1_rings_follow_v1_offsets() {
    use kiwi::v1::srng as v1;

    assert_eq!(v1::REO_DST.reg_start[0], 0x38000 + 0x3a4);
    assert_eq!(v1::REO_DST.reg_size, [0x74, 0x8]);
    assert_ne!(v1::REO_DST.reg_start, srng::REO_DST.reg_start);
}

#[test]
fn descriptor_access() {
    let mut words = [0u32; 34];
    words[1] = 0x1234;
    words[2] = 0xdead_beef;
    let view = DescriptorView::<tx_fes_status_1k_ba::Tlv, _>::new(&words[..]).unwrap();
    assert_eq!(view.get(tx_fes_status_1k_ba::SW_PEER_ID), Ok(0x1234));
    assert_eq!(view.get(tx_fes_status_1k_ba::BA_BITMAP_31_0), Ok(0xdead_beef));

    let mut rssi = DescriptorView::<receive_rssi_info::Tlv, _>::new([0u32; 16]).unwrap();
    rssi.set(receive_rssi_info::RSSI_EXT20_CHAIN0, 0x9c).unwrap();
    assert_eq!(rssi.words()[0], 0x9c00);
    assert!(rssi.set(receive_rssi_info::RSSI_EXT20_CHAIN0, 0x100).is_err());
}

#[test]
fn idle_list_programming() {
    let file = Arc::new(Mutex::new(RegisterFile::from_block(&wbm::BLOCK)));
    let mut bus = EmulatedBus::new();
    bus.add_device(wbm::BASE, 0x4000, file.clone()).unwrap();
    let block = HwioBlock::new(bus, wbm::BASE);

    block
        .modify(
            wbm::R0_IDLE_LIST_CONTROL::REGISTER,
            wbm::R0_IDLE_LIST_CONTROL::SCATTER_BUFFER_SIZE.val(0x1ff)
                + wbm::R0_IDLE_LIST_CONTROL::LINK_DESC_IDLE_LIST_MODE.val(1),
        )
        .unwrap();
    assert_eq!(file.lock().unwrap().peek(0x240), 0x7fe);
    assert_eq!(
        block.read_typed(
            wbm::R0_IDLE_LIST_CONTROL::REGISTER,
            wbm::R0_IDLE_LIST_CONTROL::SCATTER_BUFFER_SIZE
        ),
        Ok(0x1ff)
    );
}
