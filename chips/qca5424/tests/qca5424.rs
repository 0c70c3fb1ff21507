// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

use qca5424::descriptors::{pcu_ppdu_setup_init, pdg_response_rate_setting, tx_fes_setup};
use wlan_hwio::check::check_chip;
use wlan_hwio::{DescriptorView, OffsetUnit};

#[test]
fn all_descriptors_validate() {
    assert_eq!(check_chip(&qca5424::CHIP, |_, e| eprintln!("qca5424: {}", e)), 0);
    assert_eq!(qca5424::REVISION.descriptors.len(), 6);
}

#[test]
fn qword_offsets_address_dword_pairs() {
    let layout = &pcu_ppdu_setup_init::LAYOUT;
    assert_eq!(layout.unit, OffsetUnit::Qword);
    assert_eq!(layout.bytes(), 58 * 4);

    let bw1 = layout.field("MPROT_REQUIRED_BW1").unwrap();
    assert_eq!(bw1.dword_index(OffsetUnit::Qword), 1);
    assert_eq!(bw1.dword_lsb(), 0);

    let mut words = [0u32; 58];
    words[1] = 1;
    words[0] = 0x7ff << 14;
    let view = DescriptorView::<pcu_ppdu_setup_init::Tlv, _>::new(&words).unwrap();
    assert_eq!(view.get(pcu_ppdu_setup_init::MPROT_REQUIRED_BW1), Ok(1));
    assert_eq!(view.get(pcu_ppdu_setup_init::EXPECTED_MBA_SIZE), Ok(0x7ff));
    assert_eq!(view.get(pcu_ppdu_setup_init::MEDIUM_PROT_TYPE), Ok(0));
}

#[test]
fn build_fes_setup() {
    let mut setup = DescriptorView::<tx_fes_setup::Tlv, _>::new([0u32; 10]).unwrap();
    setup.set(tx_fes_setup::SCHEDULE_ID, 0xcafe_f00d).unwrap();
    setup.set(tx_fes_setup::TRANSMIT_START_REASON, 5).unwrap();
    assert_eq!(setup.words()[0], 0xcafe_f00d);
    assert_eq!(setup.words()[1], 5 << 7);

    setup.clear();
    assert!(setup.words().iter().all(|w| *w == 0));
}

#[test]
fn dword_layout() {
    let mut rate = DescriptorView::<pdg_response_rate_setting::Tlv, _>::new([0u32; 7]).unwrap();
    rate.set(pdg_response_rate_setting::PKT_TYPE, 0xf).unwrap();
    rate.set(pdg_response_rate_setting::STBC, 1).unwrap();
    rate.set(pdg_response_rate_setting::ALT_NSS, 2).unwrap();
    assert_eq!(rate.words()[0], 0x9e00_0000);
    assert_eq!(rate.words()[1], 0x0002_0000);
    assert!(rate.set(pdg_response_rate_setting::ALT_NSS, 8).is_err());
}
