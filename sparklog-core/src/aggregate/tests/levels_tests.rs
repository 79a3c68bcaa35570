use crate::aggregate::{LevelAggregator, LevelCounts, collect_levels};
use crate::classify::{LineClassifier, LogLevel};

use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;
use std::sync::Arc;

fn lines(raw: &[&str]) -> Vec<(Arc<Path>, String)> {
    let path: Arc<Path> = Arc::from(Path::new("application_1_1/stderr.log"));
    raw.iter().map(|l| (path.clone(), l.to_string())).collect()
}

const CORPUS: &[&str] = &[
    "17/03/29 10:04:41 INFO Started",
    "17/03/29 10:04:42 WARN slow executor",
    "random text ERRORISH",
    "17/03/29 10:04:43 ERROR lost task",
    "",
    "17/03/29 10:04:44 INFO Finished",
    "\tat org.apache.spark.Foo(Foo.scala:10)",
];

#[test]
fn counts_levels_and_totals() {
    // Act
    let snap = collect_levels(
        lines(CORPUS),
        &LineClassifier::default(),
        10,
        StdRng::seed_from_u64(42),
    );

    // Assert
    let counts = &snap.counts;
    assert_eq!(counts.total_lines(), 7);
    assert_eq!(counts.level_lines(), 4);
    assert_eq!(counts.get(LogLevel::Info), 2);
    assert_eq!(counts.get(LogLevel::Warn), 1);
    assert_eq!(counts.get(LogLevel::Error), 1);
    assert_eq!(counts.get(LogLevel::Debug), 0);
    assert_eq!(counts.distinct_levels(), 3);
}

#[test]
fn level_lines_equal_sum_of_levels_and_never_exceed_total() {
    let snap = collect_levels(
        lines(CORPUS),
        &LineClassifier::default(),
        2,
        StdRng::seed_from_u64(1),
    );

    let sum: u64 = snap.counts.iter().map(|(_, c)| c).sum();
    assert_eq!(sum, snap.counts.level_lines());
    assert!(snap.counts.total_lines() >= snap.counts.level_lines());
}

#[test]
fn sample_only_holds_lines_with_a_level() {
    let snap = collect_levels(
        lines(CORPUS),
        &LineClassifier::default(),
        10,
        StdRng::seed_from_u64(42),
    );

    assert_eq!(snap.sample.len(), 4);
    assert!(snap.sample.iter().all(|r| r.level.is_some()));
    assert_eq!(
        snap.sample.iter().map(|r| r.raw_text.as_str()).collect::<Vec<_>>(),
        vec![
            "17/03/29 10:04:41 INFO Started",
            "17/03/29 10:04:42 WARN slow executor",
            "17/03/29 10:04:43 ERROR lost task",
            "17/03/29 10:04:44 INFO Finished",
        ]
    );
}

#[test]
fn sample_size_is_bounded_by_capacity() {
    let raw: Vec<String> = (0..200).map(|i| format!("DEBUG tick {i}")).collect();
    let raw: Vec<&str> = raw.iter().map(String::as_str).collect();

    let snap = collect_levels(
        lines(&raw),
        &LineClassifier::default(),
        10,
        StdRng::seed_from_u64(42),
    );

    assert_eq!(snap.sample.len(), 10);
    assert_eq!(snap.counts.get(LogLevel::Debug), 200);
}

#[test]
fn fixed_seed_reproduces_the_sample() {
    let raw: Vec<String> = (0..500).map(|i| format!("INFO line {i}")).collect();
    let raw: Vec<&str> = raw.iter().map(String::as_str).collect();
    let run = || {
        collect_levels(
            lines(&raw),
            &LineClassifier::default(),
            10,
            StdRng::seed_from_u64(42),
        )
        .sample
    };

    assert_eq!(run(), run());
}

#[test]
fn empty_stream_yields_empty_state() {
    let agg = LevelAggregator::new(10, StdRng::seed_from_u64(0));

    assert_eq!(agg.counts(), &LevelCounts::default());

    let snap = agg.snapshot();
    assert!(snap.sample.is_empty());
    assert_eq!(snap.counts.distinct_levels(), 0);
}
