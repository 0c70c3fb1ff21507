// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Register maps and descriptor layouts for peach.

#![no_std]
#![crate_name = "peach"]
#![crate_type = "rlib"]

pub mod v1;
pub mod v2;

use wlan_hwio::ChipMap;

pub const CHIP: ChipMap = ChipMap {
    name: "peach",
    revisions: &[v1::REVISION, v2::REVISION],
};
