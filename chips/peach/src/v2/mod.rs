// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

pub mod descriptors;

use wlan_hwio::Revision;

/// peach v2 only revises descriptor layouts.
pub const REVISION: Revision = Revision {
    name: "v2",
    blocks: &[],
    descriptors: descriptors::DESCRIPTORS,
    rings: &[],
};
