// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Register maps and descriptor layouts for kiwi.
//!
//! Both revisions carry the UMAC blocks (WBM, REO and TCL) at their offsets
//! from `UMAC_BASE` and the host ring table built on them.

#![no_std]
#![crate_name = "kiwi"]
#![crate_type = "rlib"]

mod srng;

pub mod v1;
pub mod v2;

use wlan_hwio::ChipMap;

pub const CHIP: ChipMap = ChipMap {
    name: "kiwi",
    revisions: &[v1::REVISION, v2::REVISION],
};
