// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the stable-match command-line interface.
//!
//! Four subcommands: `match` solves an instance file, `verify` checks a
//! matching file against an instance, `generate` writes seeded random
//! instances, and `bench` times matching and verification over generated
//! instances, optionally writing one CSV row per trial.

mod bench;
mod commands;
pub mod display;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use stable_match::Side;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub use commands::run;

/// Target for every event the binary emits.
pub const LOG_TARGET: &str = "stable_match::cli";

#[derive(Parser)]
#[command(
    name = "stable-match",
    about = "Hospital/residents stable matching with an independent verifier",
    version
)]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the stable matching of an instance file
    Match {
        /// Instance file: n, then n hospital lines, then n student lines
        input: PathBuf,

        /// Where to write the matching (default: INPUT with a .out extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Which side proposes
        #[arg(long, value_enum, default_value_t = Proposer::Hospital)]
        proposer: Proposer,
    },

    /// Check that a matching file is a valid, stable matching for an instance
    Verify {
        /// Instance file
        input: PathBuf,

        /// Matching file: one "<hospital> <student>" line per hospital
        matching: PathBuf,

        /// Print the verdict as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a seeded random instance
    Generate {
        /// Participants per side
        n: usize,

        /// RNG seed; the same seed always yields the same instance
        seed: u64,

        /// Output instance file
        output: PathBuf,

        /// Everyone ranks the other side in id order (worst case for proposals)
        #[arg(long)]
        identical: bool,
    },

    /// Time matching and verification on generated instances
    Bench {
        /// Instance sizes, comma separated
        #[arg(long, value_delimiter = ',', default_values_t = [100, 200, 400, 800])]
        sizes: Vec<usize>,

        /// Trials per size
        #[arg(long, default_value = "5")]
        trials: usize,

        /// Base seed for instance generation
        #[arg(long, default_value = "1")]
        seed: u64,

        /// Write one CSV row per trial
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Proposer {
    Hospital,
    Student,
}

impl From<Proposer> for Side {
    fn from(proposer: Proposer) -> Side {
        match proposer {
            Proposer::Hospital => Side::Hospital,
            Proposer::Student => Side::Student,
        }
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `-v`.
pub fn setup_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(atty::is(atty::Stream::Stderr))
                .with_target(false)
                .compact(),
        )
        .with(filter)
        .init();
}
