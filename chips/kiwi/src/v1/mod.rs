// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! kiwi v1 UMAC registers, descriptors and host rings.

pub mod descriptors;
pub mod srng;
pub mod umac;

use wlan_hwio::Revision;

pub const REVISION: Revision = Revision {
    name: "v1",
    blocks: &[umac::wbm::BLOCK, umac::reo::BLOCK, umac::tcl::BLOCK],
    descriptors: descriptors::DESCRIPTORS,
    rings: srng::RINGS,
};
