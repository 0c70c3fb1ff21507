// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! TLV descriptor layouts for qca5424.

#![no_std]
#![crate_name = "qca5424"]
#![crate_type = "rlib"]

pub mod descriptors;

use wlan_hwio::{ChipMap, Revision};

pub const REVISION: Revision = Revision {
    name: "v1",
    blocks: &[],
    descriptors: descriptors::DESCRIPTORS,
    rings: &[],
};

pub const CHIP: ChipMap = ChipMap {
    name: "qca5424",
    revisions: &[REVISION],
};
