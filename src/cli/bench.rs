// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The `bench` subcommand: timing over generated instances.
//!
//! Each trial owns its instance, so trials are independent and run on rayon
//! when the `parallel` feature is enabled. Wall-clock numbers are noisy by
//! nature; use the criterion benches for comparisons between builds.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use stable_match::generate::random_instance;
use stable_match::{verify, ClaimedMatching, Matcher, Verdict};
use tracing::{info, warn};

use super::display::{self, pad_left, row, section_bot, section_top, timing_us};
use super::LOG_TARGET;

/// One CSV row.
#[derive(Debug, Clone, Serialize)]
pub struct TrialRecord {
    pub n: usize,
    pub trial: usize,
    pub seed: u64,
    pub match_us: u64,
    pub verify_us: u64,
    pub proposals: u64,
    pub verdict: &'static str,
}

#[derive(Debug, Clone, Copy)]
struct Job {
    n: usize,
    trial: usize,
    seed: u64,
}

/// Per-trial seed: distinct for every `(n, trial)` under one base seed.
fn trial_seed(base: u64, n: usize, trial: usize) -> u64 {
    base.wrapping_mul(0x9E37_79B9_7F4A_7C15)
        .wrapping_add((n as u64) << 24)
        .wrapping_add(trial as u64)
}

fn verdict_label(verdict: &Verdict) -> &'static str {
    match verdict {
        Verdict::Stable => "stable",
        Verdict::Unstable(_) => "unstable",
        Verdict::Invalid(_) => "invalid",
    }
}

fn run_trial(job: Job) -> Result<TrialRecord> {
    let instance = random_instance(job.n, job.seed)?;

    let start = Instant::now();
    let (matching, stats) = Matcher::new().run_with_stats(&instance)?;
    let match_us = start.elapsed().as_micros() as u64;

    let claimed = ClaimedMatching::from(&matching);
    let start = Instant::now();
    let verdict = verify(&instance, &claimed);
    let verify_us = start.elapsed().as_micros() as u64;

    if !verdict.is_stable() {
        warn!(target: LOG_TARGET, n = job.n, seed = job.seed, %verdict, "matcher output failed verification");
    }

    Ok(TrialRecord {
        n: job.n,
        trial: job.trial,
        seed: job.seed,
        match_us,
        verify_us,
        proposals: stats.proposals,
        verdict: verdict_label(&verdict),
    })
}

#[cfg(feature = "parallel")]
fn run_trials(jobs: &[Job]) -> Result<Vec<TrialRecord>> {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    let progress = ProgressBar::new(jobs.len() as u64);
    progress.set_style(
        ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
        )?
        .progress_chars("━━╸"),
    );
    progress.set_prefix("Trials");

    let records = jobs
        .par_iter()
        .map(|&job| {
            let record = run_trial(job);
            progress.inc(1);
            record
        })
        .collect::<Result<Vec<_>>>();
    progress.finish_and_clear();
    records
}

#[cfg(not(feature = "parallel"))]
fn run_trials(jobs: &[Job]) -> Result<Vec<TrialRecord>> {
    jobs.iter().map(|&job| run_trial(job)).collect()
}

fn write_csv(path: &Path, records: &[TrialRecord]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

fn mean(values: impl Iterator<Item = u64>) -> f64 {
    let (sum, count) = values.fold((0u64, 0u64), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

fn print_summary(sizes: &[usize], records: &[TrialRecord]) {
    section_top("BENCH");
    row(&format!(
        " {:>8} {:>12} {:>12} {:>14}  {}",
        "n", "match µs", "verify µs", "proposals", "verdicts"
    ));
    for &n in sizes {
        let trials: Vec<&TrialRecord> = records.iter().filter(|r| r.n == n).collect();
        let stable = trials.iter().filter(|r| r.verdict == "stable").count();
        let verdicts = format!("{}/{} stable", stable, trials.len());
        let verdicts = if stable == trials.len() {
            display::success(&verdicts)
        } else {
            display::error(&verdicts)
        };
        row(&format!(
            " {:>8} {} {} {}  {}",
            n,
            timing_us(mean(trials.iter().map(|r| r.match_us))),
            timing_us(mean(trials.iter().map(|r| r.verify_us))),
            pad_left(&format!("{:.0}", mean(trials.iter().map(|r| r.proposals))), 14),
            verdicts,
        ));
    }
    section_bot();
}

pub fn run_bench(sizes: &[usize], trials: usize, seed: u64, csv: Option<&Path>) -> Result<bool> {
    let jobs: Vec<Job> = sizes
        .iter()
        .flat_map(|&n| {
            (0..trials).map(move |trial| Job {
                n,
                trial,
                seed: trial_seed(seed, n, trial),
            })
        })
        .collect();
    info!(target: LOG_TARGET, jobs = jobs.len(), ?sizes, trials, "starting bench");

    let records = run_trials(&jobs)?;
    print_summary(sizes, &records);

    if let Some(path) = csv {
        write_csv(path, &records)?;
        info!(target: LOG_TARGET, path = %path.display(), rows = records.len(), "wrote CSV");
    }

    Ok(records.iter().all(|r| r.verdict == "stable"))
}
