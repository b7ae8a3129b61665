//! CLI tests for the `freshclam-fixer` binary.
//!
//! Spawns the binary against temp copies of a stock freshclam.conf and
//! verifies exit codes and the written file.

use std::fs;
use std::process::{Command, Output};

use freshclam_fixer::exit_codes;
use freshclam_fixer::test_support::{SAMPLE_CONF, TestConf, write_conf};

fn fixer(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_freshclam-fixer"))
        .args(args)
        .output()
        .expect("run freshclam-fixer")
}

#[test]
fn replaces_mirrors_in_place() {
    let conf = TestConf::sample().expect("seed");

    let output = fixer(&[
        "-c",
        conf.arg(),
        "-d",
        "current.cvd.example.net",
        "-m",
        "m1.example.net",
        "-m",
        "m2.example.net",
        "-p",
        "10.0.0.5",
        "-s",
        "Checks 24",
        "-s",
        "TestDatabases no",
    ]);

    assert_eq!(output.status.code(), Some(exit_codes::OK), "{output:?}");
    assert!(output.stdout.is_empty());
    let written = conf.read().expect("read");
    assert!(written.starts_with("##\n## Example config file for freshclam\n"));
    assert!(written.contains("\n#DatabaseMirror db.XY.clamav.net\n"));
    assert!(written.contains("\nDNSDatabaseInfo current.cvd.example.net\n"));
    assert!(written.contains("\nChecks 24\n"));
    assert!(written.ends_with(
        "DatabaseMirror m1.example.net\nDatabaseMirror m2.example.net\n\n\n\
         PrivateMirror 10.0.0.5\nTestDatabases no\n"
    ));
}

#[test]
fn dry_run_prints_result_without_writing() {
    let conf = TestConf::sample().expect("seed");

    let output = fixer(&[
        "--config",
        conf.arg(),
        "--custom-value",
        "Checks 6",
        "--dry-run",
    ]);

    assert_eq!(output.status.code(), Some(exit_codes::OK), "{output:?}");
    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    assert!(stdout.contains("\nChecks 6\n"));
    assert_eq!(conf.read().expect("read"), SAMPLE_CONF);
}

#[test]
fn writes_to_result_path() {
    let conf = TestConf::new("Checks 12\n").expect("seed");
    let result = conf.dir().join("result.conf");

    let output = fixer(&[
        "-c",
        conf.arg(),
        "-r",
        result.to_str().expect("utf-8 path"),
        "-m",
        "mirror.local",
    ]);

    assert_eq!(output.status.code(), Some(exit_codes::OK), "{output:?}");
    assert_eq!(conf.read().expect("source"), "Checks 12\n");
    assert_eq!(
        fs::read_to_string(&result).expect("result"),
        "Checks 12\nDatabaseMirror mirror.local\n"
    );
}

#[test]
fn profile_fields_fill_in_missing_options() {
    let conf = TestConf::new("DatabaseMirror old\nPrivateMirror old-private\n").expect("seed");
    let profile = write_conf(
        conf.dir(),
        "profile.toml",
        "database_mirror = [\"profile-mirror\"]\nprivate_mirror = [\"profile-private\"]\n",
    )
    .expect("profile");

    let output = fixer(&[
        "-c",
        conf.arg(),
        "--profile",
        profile.to_str().expect("utf-8 path"),
        "-m",
        "cli-mirror",
    ]);

    assert_eq!(output.status.code(), Some(exit_codes::OK), "{output:?}");
    assert_eq!(
        conf.read().expect("read"),
        "DatabaseMirror cli-mirror\nPrivateMirror profile-private\n"
    );
}

#[test]
fn invalid_custom_value_exits_invalid_and_keeps_file() {
    let conf = TestConf::sample().expect("seed");

    let output = fixer(&["-c", conf.arg(), "-m", "m1.example.net", "-s", "BadEntry"]);

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let stderr = String::from_utf8(output.stderr).expect("utf-8 stderr");
    assert!(stderr.contains("BadEntry"), "{stderr}");
    assert_eq!(conf.read().expect("read"), SAMPLE_CONF);
}

#[test]
fn multiline_mirror_value_exits_invalid_and_keeps_file() {
    let conf = TestConf::sample().expect("seed");

    let output = fixer(&["-c", conf.arg(), "-m", "x\ny z"]);

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let stderr = String::from_utf8(output.stderr).expect("utf-8 stderr");
    assert!(stderr.contains("line break"), "{stderr}");
    assert_eq!(conf.read().expect("read"), SAMPLE_CONF);
}

#[test]
fn unknown_flag_exits_with_usage_code() {
    let conf = TestConf::sample().expect("seed");

    let output = fixer(&["-c", conf.arg(), "--database-mirrors", "m1"]);

    assert_eq!(output.status.code(), Some(exit_codes::USAGE));
    assert_ne!(output.status.code(), Some(exit_codes::INVALID));
    assert_eq!(conf.read().expect("read"), SAMPLE_CONF);
}

#[test]
fn missing_config_exits_failed() {
    let temp = tempfile::tempdir().expect("tempdir");
    let missing = temp.path().join("absent.conf");

    let output = fixer(&["-c", missing.to_str().expect("utf-8 path"), "-m", "m1"]);

    assert_eq!(output.status.code(), Some(exit_codes::FAILED));
    assert!(!missing.exists());
}
