// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Subcommand implementations. Only these functions touch the file system.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use stable_match::format::{parse_instance, verify_documents, write_instance, write_matching};
use stable_match::generate::{identical_instance, random_instance};
use stable_match::{Matcher, Side};
use tracing::{debug, info};

use super::display;
use super::{bench, Commands, LOG_TARGET};

/// Dispatch a parsed subcommand.
pub fn run(command: Commands) -> Result<ExitCode> {
    let succeeded = match command {
        Commands::Match {
            input,
            output,
            proposer,
        } => {
            let output = output.unwrap_or_else(|| default_output(&input));
            run_match(&input, &output, proposer.into())
        }
        Commands::Verify {
            input,
            matching,
            json,
        } => run_verify(&input, &matching, json),
        Commands::Generate {
            n,
            seed,
            output,
            identical,
        } => run_generate(n, seed, &output, identical),
        Commands::Bench {
            sizes,
            trials,
            seed,
            csv,
        } => bench::run_bench(&sizes, trials, seed, csv.as_deref()),
    }?;
    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// `INPUT` with its extension replaced by `.out`.
fn default_output(input: &Path) -> PathBuf {
    input.with_extension("out")
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

fn run_match(input: &Path, output: &Path, proposer: Side) -> Result<bool> {
    let text = read_text(input)?;
    let instance = match parse_instance(&text) {
        Ok(instance) => instance,
        Err(err) => {
            info!(target: LOG_TARGET, path = %input.display(), error = %err, "rejected instance");
            println!("{}", display::error(&format!("INVALID ({})", err)));
            return Ok(false);
        }
    };
    debug!(target: LOG_TARGET, n = instance.size(), %proposer, "loaded instance");

    let start = Instant::now();
    let (matching, stats) = Matcher::new().proposer(proposer).run_with_stats(&instance)?;
    let elapsed = start.elapsed();
    info!(
        target: LOG_TARGET,
        n = instance.size(),
        proposals = stats.proposals,
        displacements = stats.displacements,
        elapsed_us = elapsed.as_micros() as u64,
        "matching complete"
    );

    write_matching(create(output)?, &matching)
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!(
        "{} {} pairs → {} {}",
        display::success("Matched"),
        matching.size(),
        output.display(),
        display::dim(&format!("({} proposals)", stats.proposals)),
    );
    Ok(true)
}

fn run_verify(input: &Path, matching: &Path, json: bool) -> Result<bool> {
    let instance_text = read_text(input)?;
    let matching_text = read_text(matching)?;

    let start = Instant::now();
    let verdict = verify_documents(&instance_text, &matching_text);
    info!(
        target: LOG_TARGET,
        stable = verdict.is_stable(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "verification complete"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    } else {
        println!("{}", display::verdict(&verdict));
    }

    Ok(verdict.is_stable())
}

fn run_generate(n: usize, seed: u64, output: &Path, identical: bool) -> Result<bool> {
    let instance = if identical {
        identical_instance(n)?
    } else {
        random_instance(n, seed)?
    };
    write_instance(create(output)?, &instance)
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!(target: LOG_TARGET, n, seed, identical, path = %output.display(), "instance written");

    println!(
        "{} n={} → {}",
        display::success("Generated"),
        n,
        output.display()
    );
    Ok(true)
}
