// File: crates/script-logistics/tests/banners.rs
// Purpose: Housekeeping banner text and replica job output, captured into byte buffers.

use std::time::Duration;

use script_logistics::{
    replica_job, Housekeeping, InitialOptions, ReplicaOptions, ScriptInfo, VersionBlock, REPLICA_MESSAGE, RULE,
};

fn script() -> ScriptInfo {
    ScriptInfo::new("template.rs", "~/scripts")
}

#[test]
fn initial_banner_layout() {
    let opts = InitialOptions { script: script(), ..InitialOptions::default() };
    let mut out = Vec::new();
    Housekeeping::initial(&opts, &mut out).expect("initial");
    let want = format!("\nlocation: \"~/scripts\"\nfilename: \"template.rs\"\n--NEW RUN--\n{RULE}\n\n");
    assert_eq!(String::from_utf8(out).unwrap(), want);
}

#[test]
fn initial_banner_with_versions_and_timestamp() {
    let opts = InitialOptions {
        script: script(),
        versions: Some(VersionBlock::new([("plot-core", "0.1.0"), ("skia-safe", "0.87.0")])),
        timestamp: true,
        ..InitialOptions::default()
    };
    let mut out = Vec::new();
    Housekeeping::initial(&opts, &mut out).expect("initial");
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "");
    assert!(lines[1].starts_with("versions: rustc--"));
    assert_eq!(lines[2], "          plot-core--0.1.0");
    assert_eq!(lines[3], "          skia-safe--0.87.0");
    assert!(lines[6].starts_with("started: "));
    assert_eq!(lines[7], "--NEW RUN--");
}

#[test]
fn final_banner_with_runtime() {
    let hk = Housekeeping::initial(&InitialOptions { script: script(), ..Default::default() }, &mut Vec::new())
        .expect("initial");
    let mut out = Vec::new();
    hk.finish(true, &mut out).expect("finish");
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with(&format!("\n{RULE}\nlocation: \"~/scripts\"\nfilename: \"template.rs\"\nruntime: 00:")));
    assert!(text.ends_with("--DONE--\n\n\n"));

    let mut quiet = Vec::new();
    hk.finish(false, &mut quiet).expect("finish");
    assert!(!String::from_utf8(quiet).unwrap().contains("runtime"));
}

#[test]
fn replica_job_with_progress_and_time() {
    let opts = ReplicaOptions {
        print_progress: true,
        print_time: true,
        step_delay: Duration::ZERO,
        ..ReplicaOptions::default()
    };
    let mut out = Vec::new();
    replica_job(4, &opts, &mut out).expect("job");
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with(&format!("\r{REPLICA_MESSAGE}progress: 25%")));
    assert!(text.contains(&format!("\r{REPLICA_MESSAGE}progress: 100%\n")));
    let last = text.lines().last().unwrap();
    assert!(last.starts_with(&format!("{}time required: 00:", " ".repeat(REPLICA_MESSAGE.len()))), "{last:?}");
}

#[test]
fn replica_job_plain_and_empty() {
    let opts = ReplicaOptions { step_delay: Duration::ZERO, ..ReplicaOptions::default() };
    let mut out = Vec::new();
    replica_job(2, &opts, &mut out).expect("job");
    assert_eq!(String::from_utf8(out).unwrap(), format!("\r{REPLICA_MESSAGE}\r{REPLICA_MESSAGE}"));

    let mut none = Vec::new();
    let elapsed = replica_job(0, &opts, &mut none).expect("job");
    assert!(none.is_empty());
    assert!(elapsed < Duration::from_secs(1));
}

#[test]
fn default_step_delay_is_100ms() {
    assert_eq!(ReplicaOptions::default().step_delay, Duration::from_millis(100));
}
