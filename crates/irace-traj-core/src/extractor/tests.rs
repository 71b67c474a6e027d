//! Extractor state machine tests

use super::*;
use std::io::Cursor;

fn mapping() -> NameMapping {
    [
        ("p0".to_string(), "NEH-Priority".to_string()),
        ("p1".to_string(), "NEH-Insertion".to_string()),
        ("p2".to_string(), "-NEH.PriorityWeighted".to_string()),
    ]
    .into_iter()
    .collect()
}

fn run(log: &str) -> Extraction {
    run_with(log, ExtractOptions::default()).unwrap()
}

fn run_with(log: &str, options: ExtractOptions) -> TrajResult<Extraction> {
    let mapping = mapping();
    TrajectoryExtractor::new(&mapping, options).extract(Cursor::new(log.to_string()))
}

fn section(wc: &str, cost: &str, names: &str, values: &str) -> String {
    format!(
        "# wctimeUsed: {wc}\nBest-so-far configuration:   3   mean value:   {cost}\n\
         Description of the best-so-far configuration:\n{names}\n{values}\n"
    )
}

#[test]
fn test_reference_example() {
    let log = section("12.5", "340.0", "id 0 p0 p1 n", "id 0 ra_c1 first_best 2");
    let extraction = run(&log);

    assert_eq!(extraction.trajectory.len(), 1);
    let entry = &extraction.trajectory[0];
    assert_eq!(entry.cost, 340.0);
    assert_eq!(entry.wallclock_time, 12.5);
    assert_eq!(entry.incumbent_id, 1);
    assert_eq!(
        entry.configuration,
        vec![
            "NEHPriority=\"ra_c1\"".to_string(),
            "NEHInsertion=\"first_best\"".to_string()
        ]
    );
    assert!(extraction.warnings.is_empty());
}

#[test]
fn test_incumbent_ids_are_contiguous() {
    let mut log = String::from("irace version 3.3\n# Iteration: 1\n");
    for i in 0..5 {
        log.push_str("some noise line\n");
        log.push_str(&section(
            &format!("{}.0", i * 10),
            &format!("{}.5", 100 - i),
            "id 0 p0 p1 n",
            "id 0 a b 1",
        ));
    }

    let extraction = run(&log);
    let ids: Vec<u64> = extraction.trajectory.iter().map(|e| e.incumbent_id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(extraction.trajectory[4].cost, 96.5);
    assert_eq!(extraction.trajectory[4].wallclock_time, 40.0);
}

#[test]
fn test_na_values_are_dropped() {
    let log = section("1", "2", "id 0 p0 p1 p2 n", "id 0 <NA> first_best NA 7");
    let extraction = run(&log);
    let configuration = &extraction.trajectory[0].configuration;
    assert_eq!(configuration, &vec!["NEHInsertion=\"first_best\"".to_string()]);
}

#[test]
fn test_hyphens_removed_from_names_only() {
    let log = section("1", "2", "id 0 p2 n", "id 0 -1.5 1");
    let extraction = run(&log);
    assert_eq!(
        extraction.trajectory[0].configuration,
        vec!["NEH.PriorityWeighted=\"-1.5\"".to_string()]
    );
}

#[test]
fn test_all_na_gives_empty_configuration() {
    let log = section("3.0", "4.0", "id 0 p0 p1 n", "id 0 NA <NA> 1");
    let extraction = run(&log);
    assert_eq!(extraction.trajectory.len(), 1);
    assert!(extraction.trajectory[0].configuration.is_empty());
}

#[test]
fn test_short_rows_give_empty_configuration() {
    let log = section("3.0", "4.0", "id 0 n", "id 0 1");
    let extraction = run(&log);
    assert_eq!(extraction.trajectory.len(), 1);
    assert!(extraction.trajectory[0].configuration.is_empty());
}

#[test]
fn test_missing_prefix_emits_warning_and_keeps_counter() {
    let mut log = String::from(
        "Description of the best-so-far configuration:\nid 0 p0 n\nid 0 x 1\n",
    );
    log.push_str(&section("5", "6", "id 0 p0 n", "id 0 y 1"));

    let extraction = run(&log);
    assert_eq!(extraction.trajectory.len(), 1);
    assert_eq!(extraction.trajectory[0].incumbent_id, 1);
    assert_eq!(
        extraction.warnings,
        vec![ExtractionWarning::IncompleteRecord {
            line: 1,
            wallclock_time: None,
            cost: None,
            configuration: Some(vec!["NEHPriority=\"x\"".to_string()]),
        }]
    );
}

#[test]
fn test_cost_without_wallclock_is_incomplete() {
    let log = "Best-so-far configuration: 9.0\n\
               Description of the best-so-far configuration:\nid 0 p0 n\nid 0 x 1\n";
    let extraction = run(log);
    assert!(extraction.trajectory.is_empty());
    assert!(matches!(
        extraction.warnings[0],
        ExtractionWarning::IncompleteRecord {
            wallclock_time: None,
            cost: Some(c),
            ..
        } if c == 9.0
    ));
}

#[test]
fn test_record_resets_after_flush() {
    // second section has no markers of its own, so it must not reuse the first
    let mut log = section("1", "2", "id 0 p0 n", "id 0 x 1");
    log.push_str("Description of the best-so-far configuration:\nid 0 p0 n\nid 0 y 1\n");
    let extraction = run(&log);
    assert_eq!(extraction.trajectory.len(), 1);
    assert_eq!(extraction.warnings.len(), 1);
}

#[test]
fn test_target_time_is_tracked_not_emitted() {
    let log = format!("# timeUsed: 77\n{}", section("1", "2", "id 0 p0 n", "id 0 x 1"));
    let extraction = run(&log);
    assert_eq!(extraction.trajectory.len(), 1);
    assert!(extraction.warnings.is_empty());
}

#[test]
fn test_unmapped_identifier_skips_record_by_default() {
    let mut log = section("1", "2", "id 0 p0 zz n", "id 0 x y 1");
    log.push_str(&section("3", "4", "id 0 p0 n", "id 0 z 1"));
    let extraction = run(&log);

    assert_eq!(extraction.trajectory.len(), 1);
    assert_eq!(extraction.trajectory[0].incumbent_id, 1);
    assert_eq!(extraction.trajectory[0].cost, 4.0);
    assert_eq!(
        extraction.warnings,
        vec![ExtractionWarning::UnmappedIdentifier {
            line: 4,
            identifier: "zz".to_string()
        }]
    );
}

#[test]
fn test_unmapped_identifier_with_na_value_is_ignored() {
    let log = section("1", "2", "id 0 p0 zz n", "id 0 x NA 1");
    let extraction = run(&log);
    assert_eq!(extraction.trajectory.len(), 1);
    assert!(extraction.warnings.is_empty());
}

#[test]
fn test_unmapped_identifier_fails_when_strict() {
    let log = section("1", "2", "id 0 zz n", "id 0 x 1");
    let options = ExtractOptions::default().with_unmapped_policy(UnmappedPolicy::Fail);
    let err = run_with(&log, options).unwrap_err();
    assert_eq!(err, TrajError::unmapped_identifier(4, "zz"));
}

#[test]
fn test_bad_number_is_fatal_with_line() {
    let log = "noise\n# wctimeUsed: twelve\n";
    let err = run_with(log, ExtractOptions::default()).unwrap_err();
    assert_eq!(err, TrajError::numeric_field(2, "# wctimeUsed:", "twelve"));
}

#[test]
fn test_open_record_dropped_at_end() {
    let mut log = section("1", "2", "id 0 p0 n", "id 0 x 1");
    log.push_str("# wctimeUsed: 8\nBest-so-far configuration: 9\n");
    let extraction = run(&log);
    assert_eq!(extraction.trajectory.len(), 1);
    assert_eq!(
        extraction.warnings,
        vec![ExtractionWarning::DroppedAtEndOfLog {
            wallclock_time: Some(8.0),
            cost: Some(9.0),
            configuration: None,
        }]
    );
}

#[test]
fn test_open_record_flushed_when_enabled() {
    let mut log = section("1", "2", "id 0 p0 n", "id 0 x 1");
    log.push_str("# wctimeUsed: 8\nBest-so-far configuration: 9\n");
    let options = ExtractOptions::default().with_flush_at_eof(true);
    let extraction = run_with(&log, options).unwrap();

    assert_eq!(extraction.trajectory.len(), 2);
    assert_eq!(extraction.trajectory[1].incumbent_id, 2);
    assert!(extraction.trajectory[1].configuration.is_empty());
    assert!(extraction.warnings.is_empty());
}

#[test]
fn test_truncated_description() {
    let log = "# wctimeUsed: 1\nBest-so-far configuration: 2\n\
               Description of the best-so-far configuration:\nid 0 p0 n\n";
    let extraction = run(log);
    assert!(extraction.trajectory.is_empty());
    assert_eq!(
        extraction.warnings,
        vec![ExtractionWarning::TruncatedDescription { line: 3 }]
    );
}

#[test]
fn test_lookahead_lines_are_not_markers() {
    // the two rows after a description marker are consumed even if they look like markers
    let log = "# wctimeUsed: 1\nBest-so-far configuration: 2\n\
               Description of the best-so-far configuration:\n# wctimeUsed: 99\n# timeUsed: 98\n";
    let extraction = run(log);
    assert_eq!(extraction.trajectory.len(), 1);
    assert_eq!(extraction.trajectory[0].wallclock_time, 1.0);
    assert_eq!(extraction.lines_read, 5);
}

#[test]
fn test_idempotent() {
    let log = section("12.5", "340.0", "id 0 p0 p1 n", "id 0 ra_c1 first_best 2");
    assert_eq!(run(&log), run(&log));
}

#[test]
fn test_empty_log() {
    let extraction = run("");
    assert!(extraction.trajectory.is_empty());
    assert!(extraction.warnings.is_empty());
    assert_eq!(extraction.lines_read, 0);
}

#[test]
fn test_table_fields() {
    assert_eq!(table_fields("  1  2  a  b  c  "), vec!["a", "b"]);
    assert!(table_fields("1 2 3").is_empty());
    assert!(table_fields("").is_empty());
}

#[test]
fn test_unmapped_policy_from_str() {
    assert_eq!(UnmappedPolicy::from_str("Fail"), Some(UnmappedPolicy::Fail));
    assert_eq!(UnmappedPolicy::from_str("skip_record"), Some(UnmappedPolicy::SkipRecord));
    assert_eq!(UnmappedPolicy::from_str("maybe"), None);
}
