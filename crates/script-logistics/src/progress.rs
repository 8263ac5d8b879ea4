// File: crates/script-logistics/src/progress.rs
// Summary: Single-line loop progress indicator with explicit index inclusivity.

use std::io::{self, Write};

/// How `index_max` relates to the loop's 0-based indices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProgressPolicy {
    /// `index_max` is the last index; the loop has `index_max + 1` steps.
    #[default]
    Inclusive,
    /// `index_max` is the step count.
    Exclusive,
}

#[derive(Clone, Debug)]
pub struct LoopProgress {
    index_max: usize,
    policy: ProgressPolicy,
    message: String,
    buffer: bool,
}

impl LoopProgress {
    pub fn new(index_max: usize, policy: ProgressPolicy) -> Self {
        Self { index_max, policy, message: String::new(), buffer: false }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Replace the message with blanks so the percentage lines up under a previous line.
    pub fn buffered(mut self, buffer: bool) -> Self {
        self.buffer = buffer;
        self
    }

    pub fn steps(&self) -> usize {
        match self.policy {
            ProgressPolicy::Inclusive => self.index_max + 1,
            ProgressPolicy::Exclusive => self.index_max,
        }
    }

    /// Percent complete after step `index`, clamped to 100.
    pub fn percent(&self, index: usize) -> f64 {
        let steps = self.steps();
        if steps == 0 {
            return 100.0;
        }
        (100.0 * (index + 1) as f64 / steps as f64).min(100.0)
    }

    pub fn is_last(&self, index: usize) -> bool {
        index + 1 >= self.steps()
    }

    pub fn render(&self, index: usize) -> String {
        let prefix = if self.buffer {
            " ".repeat(self.message.chars().count() + 1)
        } else {
            self.message.clone()
        };
        format!("\r{prefix}progress: {:.0}%", self.percent(index))
    }

    /// Overwrite the current line; the last step ends it.
    pub fn print(&self, out: &mut impl Write, index: usize) -> io::Result<()> {
        out.write_all(self.render(index).as_bytes())?;
        if self.is_last(index) {
            writeln!(out)?;
        }
        out.flush()
    }
}
