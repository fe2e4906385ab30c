use std::fs;

use log::Level;

use caravel_host_lib::{
    Outcome,
    Report,
};


fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}


#[test]
fn it_should_pass_without_errors() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();

    let mut report = Report::open(dir.path(), "clean").unwrap();
    report.info("All good");
    let outcome = report.finish(&Ok::<(), ()>(()));

    assert_eq!(outcome, Outcome::Passed);

    let test_dir = dir.path().join("clean");
    assert!(test_dir.join("passed").exists());
    assert!(!test_dir.join("failed").exists());

    let log = fs::read_to_string(test_dir.join("clean.log")).unwrap();
    assert!(log.contains("[INFO] All good"));
}

#[test]
fn it_should_fail_if_an_error_was_recorded() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();

    let mut report = Report::open(dir.path(), "mismatch").unwrap();
    report.error("Wrong value");

    assert_eq!(report.error_count(), 1);
    assert_eq!(report.entries()[0].level, Level::Error);

    let outcome = report.finish(&Ok::<(), ()>(()));
    assert_eq!(outcome, Outcome::Failed);
    assert!(dir.path().join("mismatch").join("failed").exists());
}

#[test]
fn it_should_fail_if_the_test_was_aborted() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();

    let report = Report::open(dir.path(), "aborted").unwrap();
    let outcome = report.finish(&Err::<(), _>("timeout"));

    assert_eq!(outcome, Outcome::Failed);

    let log = fs::read_to_string(
        dir.path().join("aborted").join("aborted.log")
    )
    .unwrap();
    assert!(log.contains("timeout"));
}

#[test]
fn it_should_mark_unfinished_reports_as_failed() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();

    {
        let mut report = Report::open(dir.path(), "dropped").unwrap();
        report.info("Started");
    }

    assert!(dir.path().join("dropped").join("failed").exists());
}

#[test]
fn it_should_remove_stale_markers() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();

    let report = Report::open(dir.path(), "rerun").unwrap();
    report.finish(&Err::<(), _>(()));

    let report = Report::open(dir.path(), "rerun").unwrap();
    assert!(!report.dir().join("failed").exists());

    report.finish(&Ok::<(), ()>(()));
    assert!(dir.path().join("rerun").join("passed").exists());
    assert!(!dir.path().join("rerun").join("failed").exists());
}
