//! Successful adjustments: silent, single write, correct value.

use crate::common::cli::CliRunner;
use crate::common::fixtures::FakeSysfs;
use crate::common::init_test_logging;

fn run_on(current: u32, expr: &str) -> u32 {
    let sysfs = FakeSysfs::new().with_device("acpi_video0", 100, current);
    CliRunner::new()
        .with_sysfs(sysfs.root())
        .run(&[expr])
        .assert_success()
        .assert_stdout_is_empty()
        .assert_stderr_is_empty();
    sysfs.brightness("acpi_video0")
}

#[test]
fn absolute_and_relative_changes() {
    init_test_logging();
    assert_eq!(run_on(50, "20%"), 20);
    assert_eq!(run_on(50, "+20%"), 70);
    assert_eq!(run_on(50, "-20%"), 30);
    assert_eq!(run_on(90, "+20%"), 100);
    assert_eq!(run_on(10, "-50%"), 0);
}

#[test]
fn writes_plain_decimal_without_newline() {
    init_test_logging();
    let sysfs = FakeSysfs::new().with_device("acpi_video0", 100, 50);
    CliRunner::new()
        .with_sysfs(sysfs.root())
        .run(&["+5%"])
        .assert_success();
    assert_eq!(sysfs.raw_brightness("acpi_video0"), "55");
}

#[test]
fn no_color_env_does_not_break_parsing() {
    init_test_logging();
    for value in ["1", "", "true"] {
        let sysfs = FakeSysfs::new().with_device("acpi_video0", 100, 50);
        CliRunner::new()
            .with_sysfs(sysfs.root())
            .with_env("NO_COLOR", value)
            .run(&["+10%"])
            .assert_success()
            .assert_stdout_is_empty();
        assert_eq!(sysfs.brightness("acpi_video0"), 60, "NO_COLOR={value:?}");
    }
}

#[test]
fn device_selected_by_flag_or_env() {
    init_test_logging();
    let sysfs = FakeSysfs::new()
        .with_device("acpi_video0", 100, 50)
        .with_device("intel_backlight", 937, 0);

    CliRunner::new()
        .with_sysfs(sysfs.root())
        .run(&["-d", "intel_backlight", "50%"])
        .assert_success();
    assert_eq!(sysfs.brightness("intel_backlight"), 468);
    assert_eq!(sysfs.brightness("acpi_video0"), 50);

    CliRunner::new()
        .with_sysfs(sysfs.root())
        .with_env("BCTL_DEVICE", "intel_backlight")
        .run(&["100%"])
        .assert_success();
    assert_eq!(sysfs.brightness("intel_backlight"), 937);
    assert_eq!(sysfs.brightness("acpi_video0"), 50);
}

#[test]
fn dry_run_reports_without_writing() {
    init_test_logging();
    let sysfs = FakeSysfs::new().with_device("acpi_video0", 100, 50);
    CliRunner::new()
        .with_sysfs(sysfs.root())
        .run(&["--dry-run", "+20%"])
        .assert_success()
        .assert_stdout_contains("acpi_video0: 50 -> 70 (max 100)");
    assert_eq!(sysfs.raw_brightness("acpi_video0"), "50\n");
}

#[test]
fn missing_percentage_is_a_usage_error() {
    use assert_cmd::Command;
    use predicates::prelude::*;

    Command::new(env!("CARGO_BIN_EXE_bctl"))
        .env("RUST_LOG", "off")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("CHANGE_PERCENTAGE"));
}

#[test]
fn completions_mention_binary() {
    init_test_logging();
    CliRunner::new()
        .run(&["--completions", "bash"])
        .assert_success()
        .assert_stdout_contains("bctl");
}
