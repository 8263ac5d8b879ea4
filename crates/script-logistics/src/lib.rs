// File: crates/script-logistics/src/lib.rs
// Summary: Script scaffolding helpers: housekeeping banners, time strings, loop progress, replica job, logging.

pub mod housekeeping;
pub mod logging;
pub mod progress;
pub mod replica;
pub mod script_info;
pub mod timefmt;

pub use housekeeping::{print_file_info, print_version_info, Housekeeping, InitialOptions, VersionBlock, RULE};
pub use progress::{LoopProgress, ProgressPolicy};
pub use replica::{replica_job, ReplicaOptions, REPLICA_MESSAGE};
pub use script_info::ScriptInfo;
pub use timefmt::{format_duration, print_time_required, print_total_time, seconds_to_timestring};
