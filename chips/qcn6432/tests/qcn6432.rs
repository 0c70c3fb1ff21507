// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

use qcn6432::descriptors::{tcl_data_cmd, tx_flush_req, tx_msdu_start};
use wlan_hwio::check::check_chip;
use wlan_hwio::{BitOrder, DescriptorView, TlvFormat, TlvHeader};

#[test]
fn all_descriptors_validate() {
    assert_eq!(check_chip(&qcn6432::CHIP, |_, e| eprintln!("qcn6432: {}", e)), 0);
}

#[test]
fn msdu_start_fields() {
    let mut msdu = DescriptorView::<tx_msdu_start::Tlv, _>::new([0u32; 8]).unwrap();
    msdu.set(tx_msdu_start::MSDU_LEN, 1500).unwrap();
    msdu.set(tx_msdu_start::FIRST_MSDU, 1).unwrap();
    msdu.set(tx_msdu_start::LAST_MSDU, 1).unwrap();
    msdu.set(tx_msdu_start::TCP_FLAG, 0x1ff).unwrap();
    msdu.set(tx_msdu_start::L2_LENGTH, 0x5dc).unwrap();

    assert_eq!(msdu.words()[0], 0xc000 | 1500);
    assert_eq!(msdu.words()[1], 0x1ff << 7);
    assert_eq!(msdu.words()[2], 0x5dc);
    assert!(msdu.set(tx_msdu_start::MSDU_LEN, 0x4000).is_err());
}

#[test]
fn tlv_wrapped_descriptor() {
    let layout = &tcl_data_cmd::LAYOUT;
    let header = TlvHeader {
        tag: 0x44,
        len: layout.bytes() as u32,
        ..TlvHeader::default()
    };

    let mut buf = [0u32; 9];
    buf[0] = header.encode(TlvFormat::Mac32).unwrap();
    {
        let mut cmd = DescriptorView::<tcl_data_cmd::Tlv, _>::new(&mut buf[1..]).unwrap();
        cmd.set(tcl_data_cmd::BUF_ADDR_INFO_BUFFER_ADDR_31_0, 0x8000_1000).unwrap();
        cmd.set(tcl_data_cmd::BUF_ADDR_INFO_BUFFER_ADDR_39_32, 0x1).unwrap();
        cmd.set(tcl_data_cmd::DATA_LENGTH, 1514).unwrap();
    }

    let decoded = TlvHeader::decode(TlvFormat::Mac32, buf[0]);
    assert_eq!(decoded.tag, 0x44);
    assert_eq!(decoded.len, 32);
    let cmd = DescriptorView::<tcl_data_cmd::Tlv, _>::new(&buf[1..]).unwrap();
    assert_eq!(cmd.get_by_name("DATA_LENGTH"), Ok(1514));
    assert_eq!(buf[2], 0x1);
}

#[test]
fn flush_req_orders() {
    let layout = &tx_flush_req::LAYOUT;
    let first = layout
        .declaration_order(0, BitOrder::LittleEndian)
        .next()
        .map(|f| f.name);
    let last = layout
        .declaration_order(0, BitOrder::BigEndian)
        .last()
        .map(|f| f.name);
    assert_eq!(first, Some("FLUSH_REQ_REASON"));
    assert_eq!(last, Some("FLUSH_REQ_REASON"));
}
