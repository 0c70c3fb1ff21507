// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Host ring table of the kiwi v1 data path.

use super::umac::{reo, tcl, wbm};

crate::srng::ring_table!();
