// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! peach v1.
//!
//! The UMAC carries six blocks. Only WBM, REO and TCL have a fixed offset
//! from `UMAC_BASE` in the register database; the others are reached through
//! a base supplied at runtime.

pub mod descriptors;
pub mod umac;

use wlan_hwio::Revision;

pub const REVISION: Revision = Revision {
    name: "v1",
    blocks: &[
        umac::umac_mxi::BLOCK,
        umac::wbm::BLOCK,
        umac::reo::BLOCK,
        umac::tqm::BLOCK,
        umac::umcmn::BLOCK,
        umac::tcl::BLOCK,
    ],
    descriptors: descriptors::DESCRIPTORS,
    rings: &[],
};
