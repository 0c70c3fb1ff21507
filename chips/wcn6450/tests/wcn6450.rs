// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

use std::sync::{Arc, Mutex};

use wcn6450::v1::{ce, common_wrapper, CE};
use wlan_hwio::check::check_chip;
use wlan_hwio::emu::{EmulatedBus, RegisterFile};
use wlan_hwio::HwioBlock;

const CE_TOP: usize = 0x0180_0000;

#[test]
fn all_revisions_validate() {
    assert_eq!(check_chip(&wcn6450::CHIP, |_, e| eprintln!("wcn6450: {}", e)), 0);
}

#[test]
fn channel_instances() {
    assert_eq!(CE.instance_count(), 2);
    assert_eq!(CE.instance_base(0), Some(0x0));
    assert_eq!(CE.instance_base(1), Some(0x1000));
    assert_eq!(CE.instance_base(2), None);
    assert_eq!(CE.registers.len(), 36);
    assert_eq!(common_wrapper::BASE, 0x10000);
    assert_eq!(
        ce::TARGET_MSI_DATA.address(CE_TOP + 0x1000),
        CE_TOP + 0x108c
    );
}

#[test]
fn program_second_channel() {
    let ch0 = Arc::new(Mutex::new(RegisterFile::new()));
    let ch1 = Arc::new(Mutex::new(RegisterFile::new()));
    let mut bus = EmulatedBus::new();
    bus.add_device(CE_TOP, 0x1000, ch0.clone()).unwrap();
    bus.add_device(CE_TOP + 0x1000, 0x1000, ch1.clone()).unwrap();
    let base = CE_TOP + CE.instance_base(1).unwrap();
    let channel = HwioBlock::new(&bus, base);

    channel
        .set(
            ce::SR_SIZE::REGISTER,
            ce::SR_SIZE::START_OFFSET.val(0x10) + ce::SR_SIZE::SIZE.val(512),
        )
        .unwrap();
    channel
        .modify(ce::HOST_IE::REGISTER, ce::HOST_IE::COPY_COMPLETE.val(1))
        .unwrap();
    channel
        .modify(ce::HOST_IE::REGISTER, ce::HOST_IE::SRC_RING_HIGH_WATERMARK.val(1))
        .unwrap();

    assert_eq!(ch1.lock().unwrap().peek(0x8), 0x0010_0200);
    assert_eq!(ch1.lock().unwrap().peek(0x2c), 0x3);
    assert!(ch0.lock().unwrap().writes().is_empty());

    let ie = channel.get(ce::HOST_IE::REGISTER).unwrap();
    assert!(ie.is_set(ce::HOST_IE::COPY_COMPLETE));
    assert!(!ie.is_set(ce::HOST_IE::DST_TIMER_BATCH));
}

#[test]
fn raw_and_masked_reads() {
    let file = Arc::new(Mutex::new(RegisterFile::new()));
    file.lock().unwrap().poke(0x4, 0xabcd);
    let mut bus = EmulatedBus::new();
    bus.add_device(CE_TOP, 0x1000, file).unwrap();
    let channel = HwioBlock::new(bus, CE_TOP);

    assert_eq!(channel.read(&ce::SR_BA_HIGH), Ok(0xabcd));
    assert_eq!(
        channel.read_masked(&ce::SR_BA_HIGH, ce::SR_BA_HIGH.read_mask()),
        Ok(0xcd)
    );
}
