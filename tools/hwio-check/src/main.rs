// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Inspect and validate WLAN HWIO register maps and TLV descriptor layouts.
//!
//! Usage:
//!   hwio-check list
//!   hwio-check regs kiwi --block reo
//!   hwio-check desc qcn6432 tcl_data_cmd --big-endian
//!   hwio-check decode qcn6432 tx_flush_req 0x1 0x0
//!   hwio-check check

mod chips;
mod commands;
mod error;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use wlan_hwio::BitOrder;

use crate::error::Result;

#[derive(Parser)]
#[command(name = "hwio-check")]
#[command(about = "Inspect and validate WLAN HWIO register maps and descriptor layouts")]
struct Cli {
    /// Log at debug level (otherwise RUST_LOG, default warn)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List chips, revisions, blocks and descriptors
    List,

    /// Print the register table of a chip
    Regs {
        chip: String,

        /// Revision (default: newest)
        #[arg(long)]
        rev: Option<String>,

        /// Only this block
        #[arg(long)]
        block: Option<String>,

        /// Register base the block offsets are added to
        #[arg(long)]
        base: Option<String>,
    },

    /// Print a descriptor layout word by word
    Desc {
        chip: String,
        name: String,

        #[arg(long)]
        rev: Option<String>,

        /// List fields from bit 31 down
        #[arg(long)]
        big_endian: bool,
    },

    /// Decode descriptor words given as hex or decimal
    Decode {
        chip: String,
        name: String,

        #[arg(required = true)]
        words: Vec<String>,

        #[arg(long)]
        rev: Option<String>,
    },

    /// Print the SRNG ring table
    Rings {
        chip: String,

        #[arg(long)]
        rev: Option<String>,
    },

    /// Validate every block and descriptor
    Check {
        /// Only this chip
        chip: Option<String>,
    },
}

fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Commands::List => commands::list(out),
        Commands::Regs {
            chip,
            rev,
            block,
            base,
        } => {
            let base = base
                .as_deref()
                .map(chips::parse_number)
                .transpose()?
                .map(|b| b as usize);
            commands::regs(
                out,
                chips::find_chip(&chip)?,
                rev.as_deref(),
                block.as_deref(),
                base,
            )
        }
        Commands::Desc {
            chip,
            name,
            rev,
            big_endian,
        } => {
            let order = if big_endian {
                BitOrder::BigEndian
            } else {
                BitOrder::LittleEndian
            };
            commands::desc(out, chips::find_chip(&chip)?, rev.as_deref(), &name, order)
        }
        Commands::Decode {
            chip,
            name,
            words,
            rev,
        } => {
            let words = words
                .iter()
                .map(|w| chips::parse_word(w))
                .collect::<Result<Vec<u32>>>()?;
            commands::decode(out, chips::find_chip(&chip)?, rev.as_deref(), &name, &words)
        }
        Commands::Rings { chip, rev } => {
            commands::rings(out, chips::find_chip(&chip)?, rev.as_deref())
        }
        Commands::Check { chip } => match chip {
            Some(name) => commands::check(out, &[chips::find_chip(&name)?]),
            None => commands::check(out, chips::CHIPS),
        },
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    let stdout = io::stdout();
    match run(cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn run_args(args: &[&str]) -> Result<String> {
        colored::control::set_override(false);
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        run(cli, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn regs_with_base() {
        let args = ["hwio-check", "regs", "kiwi", "--block", "tcl", "--base", "0x1e00000"];
        let text = run_args(&args).unwrap();
        assert!(text.starts_with("TCL @ 0x1e44000"));
    }

    #[test]
    fn bad_base() {
        let err = run_args(&["hwio-check", "regs", "kiwi", "--base", "umac"]).unwrap_err();
        assert!(matches!(err, Error::BadNumber(_)));
    }

    #[test]
    fn decode_words() {
        let args = ["hwio-check", "decode", "qcn6432", "tx_flush_req", "0xffffffff", "0"];
        let text = run_args(&args).unwrap();
        assert!(text.starts_with("tx_flush_req"));
    }

    #[test]
    fn decode_requires_words() {
        assert!(Cli::try_parse_from(["hwio-check", "decode", "kiwi", "rx_attention"]).is_err());
    }

    #[test]
    fn check_one_chip() {
        let text = run_args(&["hwio-check", "-v", "check", "wcn6450"]).unwrap();
        assert_eq!(text.trim(), "ok wcn6450");
    }
}
