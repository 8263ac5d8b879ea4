// File: crates/script-logistics/src/housekeeping.rs
// Summary: Start-of-run and end-of-run console banners with version, file and timing info.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crate::script_info::ScriptInfo;
use crate::timefmt::print_total_time;

/// Separator printed under `--NEW RUN--` and above the final banner.
pub const RULE: &str = "========================================";

/// Output of `rustc --version` for the compiler that built this crate.
pub const RUSTC_VERSION: &str = env!("SCRIPT_LOGISTICS_RUSTC_VERSION");

/// Dependencies listed under the compiler version; `full` prints the whole `rustc --version` line.
#[derive(Clone, Debug, Default)]
pub struct VersionBlock {
    pub dependencies: Vec<(String, String)>,
    pub full: bool,
}

impl VersionBlock {
    pub fn new<N: Into<String>, V: Into<String>>(deps: impl IntoIterator<Item = (N, V)>) -> Self {
        Self { dependencies: deps.into_iter().map(|(n, v)| (n.into(), v.into())).collect(), full: false }
    }
}

#[derive(Clone, Debug, Default)]
pub struct InitialOptions {
    /// Install an errors-only log subscriber (no effect if one is already installed).
    pub ignore_warnings: bool,
    pub script: ScriptInfo,
    pub versions: Option<VersionBlock>,
    /// Print a local `started:` timestamp under the file info.
    pub timestamp: bool,
}

fn rustc_version(full: bool) -> &'static str {
    let v = RUSTC_VERSION.strip_prefix("rustc ").unwrap_or(RUSTC_VERSION);
    if full { v } else { v.split_whitespace().next().unwrap_or(v) }
}

pub fn print_version_info(out: &mut impl Write, block: &VersionBlock) -> io::Result<()> {
    let head = "versions:";
    let pad = " ".repeat(head.len() + 1);
    writeln!(out, "{head} rustc--{}", rustc_version(block.full))?;
    for (name, version) in &block.dependencies {
        writeln!(out, "{pad}{name}--{version}")?;
    }
    Ok(())
}

pub fn print_file_info(out: &mut impl Write, script: &ScriptInfo) -> io::Result<()> {
    if let Some(location) = &script.location {
        writeln!(out, "location: \"{location}\"")?;
    }
    if let Some(filename) = &script.filename {
        writeln!(out, "filename: \"{filename}\"")?;
    }
    Ok(())
}

/// A run bracketed by the initial and final banners.
#[derive(Clone, Debug)]
pub struct Housekeeping {
    start: Instant,
    script: ScriptInfo,
}

impl Housekeeping {
    pub fn initial(opts: &InitialOptions, out: &mut impl Write) -> io::Result<Self> {
        let start = Instant::now();
        if opts.ignore_warnings {
            crate::logging::init("error");
        }

        writeln!(out)?;
        if let Some(versions) = &opts.versions {
            print_version_info(out, versions)?;
        }
        print_file_info(out, &opts.script)?;
        if opts.timestamp {
            writeln!(out, "started: {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"))?;
        }
        writeln!(out, "--NEW RUN--")?;
        writeln!(out, "{RULE}")?;
        writeln!(out)?;
        Ok(Self { start, script: opts.script.clone() })
    }

    pub fn initial_stdout(opts: &InitialOptions) -> io::Result<Self> {
        Self::initial(opts, &mut io::stdout().lock())
    }

    pub fn start(&self) -> Instant {
        self.start
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn script(&self) -> &ScriptInfo {
        &self.script
    }

    /// Closing banner; `print_timing` adds the total runtime since `initial`.
    pub fn finish(&self, print_timing: bool, out: &mut impl Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{RULE}")?;
        print_file_info(out, &self.script)?;
        if print_timing {
            print_total_time(out, self.start, false)?;
        }
        writeln!(out, "--DONE--")?;
        writeln!(out, "\n")?;
        out.flush()
    }

    pub fn finish_stdout(&self, print_timing: bool) -> io::Result<()> {
        self.finish(print_timing, &mut io::stdout().lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_is_forty_wide() {
        assert_eq!(RULE.len(), 40);
        assert!(RULE.chars().all(|c| c == '='));
    }

    #[test]
    fn short_rustc_version_is_one_token() {
        let short = rustc_version(false);
        assert!(!short.is_empty());
        assert!(!short.contains(' '));
        assert!(rustc_version(true).starts_with(short));
    }

    #[test]
    fn version_block_aligns_dependencies() {
        let mut out = Vec::new();
        print_version_info(&mut out, &VersionBlock::new([("plot-core", "0.1.0")])).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("versions: rustc--"));
        assert_eq!(lines[1], "          plot-core--0.1.0");
    }
}
