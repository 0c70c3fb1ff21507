// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

mod regs;

pub use regs::{ce, common_wrapper};

use wlan_hwio::{BlockMap, Revision};

/// Offsets of the copy engine channels from `ce::BASE`.
pub const CE_CHANNELS: &[usize] = &[0x0, 0x1000];

/// The copy engine block with one instance per channel.
pub const CE: BlockMap = ce::BLOCK.with_instances(CE_CHANNELS);

pub const REVISION: Revision = Revision {
    name: "v1",
    blocks: &[CE, common_wrapper::BLOCK],
    descriptors: &[],
    rings: &[],
};
