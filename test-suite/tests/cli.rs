//! Test suite for the command-line interface


use std::fs;

use clap::Parser;
use tempfile::TempDir;

use caravel_test_suite::{
    cli::{
        run,
        Cli,
    },
    Error,
    Result,
};


/// Writes a configuration that keeps reports in `dir`
fn cli(dir: &TempDir, gpio_low: u32, args: &[&str]) -> Cli {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = dir.path().join("test-stand.toml");
    fs::write(
        &config,
        format!(
            "report_dir = {:?}\n\
            wait_timeout_cycles = 1000\n\
            \n\
            [model]\n\
            gpio_low = {}\n",
            dir.path().join("reports").display().to_string(),
            gpio_low,
        ),
    )
    .unwrap();

    let config = config.display().to_string();
    let mut argv = vec!["caravel-test-suite", "--config", config.as_str()];
    argv.extend_from_slice(args);

    Cli::try_parse_from(argv).unwrap()
}


#[test]
fn it_should_list_the_tests() -> Result {
    let dir = TempDir::new().unwrap();
    let mut out = Vec::new();

    let passed = run(cli(&dir, 0x8F, &["--list"]), &mut out)?;

    assert!(passed);
    assert_eq!(String::from_utf8(out).unwrap(), "gpio_test\n");
    assert!(!dir.path().join("reports").exists());

    Ok(())
}

#[test]
fn it_should_pass_if_all_tests_pass() -> Result {
    let dir = TempDir::new().unwrap();

    let passed = run(cli(&dir, 0x8F, &[]), &mut Vec::new())?;

    assert!(passed);
    assert!(dir.path().join("reports").join("gpio_test").join("passed").exists());

    Ok(())
}

#[test]
fn it_should_fail_if_a_test_fails() -> Result {
    let dir = TempDir::new().unwrap();

    let passed = run(cli(&dir, 0x00, &["gpio_test"]), &mut Vec::new())?;

    assert!(!passed);
    assert!(dir.path().join("reports").join("gpio_test").join("failed").exists());

    Ok(())
}

#[test]
fn it_should_reject_unknown_tests() {
    let dir = TempDir::new().unwrap();

    let result = run(cli(&dir, 0x8F, &["uart_test"]), &mut Vec::new());

    assert!(matches!(result, Err(Error::UnknownTest(name)) if name == "uart_test"));
    assert!(!dir.path().join("reports").exists());
}
