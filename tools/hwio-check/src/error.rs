// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

/// Errors reported by the `hwio-check` subcommands.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unknown chip {}.", .0)]
    UnknownChip(String),
    #[error("Chip {} has no revision {}.", .0, .1)]
    UnknownRevision(&'static str, String),
    #[error("Revision {} has no block {}.", .0, .1)]
    UnknownBlock(&'static str, String),
    #[error("Revision {} has no descriptor {}.", .0, .1)]
    UnknownDescriptor(&'static str, String),
    #[error("Chip {} lists no revisions.", .0)]
    NoRevisions(&'static str),
    #[error("Cannot parse {} as a number.", .0)]
    BadNumber(String),
    #[error("{} layout problem(s) found.", .0)]
    ChecksFailed(usize),
    #[error(transparent)]
    Hwio(#[from] wlan_hwio::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
