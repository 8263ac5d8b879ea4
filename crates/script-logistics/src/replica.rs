// File: crates/script-logistics/src/replica.rs
// Summary: Placeholder job that sleeps per step, standing in for real work in script templates.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crate::progress::{LoopProgress, ProgressPolicy};
use crate::timefmt::print_time_required;

pub const REPLICA_MESSAGE: &str = "replicating job, ";

#[derive(Clone, Copy, Debug)]
pub struct ReplicaOptions {
    pub print_progress: bool,
    pub print_time: bool,
    pub time_full_str: bool,
    pub step_delay: Duration,
}

impl Default for ReplicaOptions {
    fn default() -> Self {
        Self {
            print_progress: false,
            print_time: false,
            time_full_str: false,
            step_delay: Duration::from_millis(100),
        }
    }
}

/// Sleep `steps` times, reporting to `out`. Returns the elapsed time.
pub fn replica_job(steps: usize, opts: &ReplicaOptions, out: &mut impl Write) -> io::Result<Duration> {
    let start = Instant::now();
    let progress = LoopProgress::new(steps.saturating_sub(1), ProgressPolicy::Inclusive)
        .with_message(REPLICA_MESSAGE);

    for i in 0..steps {
        std::thread::sleep(opts.step_delay);
        if opts.print_progress {
            progress.print(out, i)?;
        } else {
            write!(out, "\r{REPLICA_MESSAGE}")?;
            out.flush()?;
        }
    }

    if opts.print_time {
        let buffer = if opts.print_progress { " ".repeat(REPLICA_MESSAGE.len()) } else { String::new() };
        print_time_required(out, start, &buffer, opts.time_full_str)?;
    }
    tracing::debug!(steps, elapsed_ms = start.elapsed().as_millis() as u64, "replica job done");
    Ok(start.elapsed())
}
