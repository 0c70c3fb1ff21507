// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Copy engine registers of wcn6450.
//!
//! All offsets are relative to the copy engine register top, whose address
//! depends on the bus the chip is attached through.

#![no_std]
#![crate_name = "wcn6450"]
#![crate_type = "rlib"]

pub mod v1;

use wlan_hwio::ChipMap;

pub const CHIP: ChipMap = ChipMap {
    name: "wcn6450",
    revisions: &[v1::REVISION],
};
