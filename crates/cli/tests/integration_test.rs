use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn prime_range() -> Command {
    Command::new(env!("CARGO_BIN_EXE_prime_range"))
}

#[test]
fn shows_help() {
    prime_range()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("prime_range"))
        .stdout(predicate::str::contains("--workers"));
}

#[test]
fn prints_one_prime_per_line() {
    prime_range()
        .args(["0", "20"])
        .assert()
        .success()
        .stdout("2\n3\n5\n7\n11\n13\n17\n19\n");
}

#[test]
fn parallel_output_matches_sequential() {
    let sequential = prime_range().args(["0", "5000"]).output().unwrap();
    let parallel = prime_range()
        .args(["0", "5000", "--workers", "4"])
        .output()
        .unwrap();
    assert!(sequential.status.success());
    assert!(parallel.status.success());
    assert_eq!(sequential.stdout, parallel.stdout);
}

#[test]
fn parallel_flag_without_worker_count() {
    prime_range()
        .args(["0", "20", "--parallel"])
        .assert()
        .success()
        .stdout("2\n3\n5\n7\n11\n13\n17\n19\n");
}

#[test]
fn empty_result_prints_nothing() {
    prime_range().args(["0", "1"]).assert().success().stdout("");
}

#[test]
fn json_report() {
    let output = prime_range()
        .args(["0", "20", "-j", "4", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["count"], 8);
    assert_eq!(json["workers"], 4);
    assert_eq!(json["primes"], serde_json::json!([2, 3, 5, 7, 11, 13, 17, 19]));
}

#[test]
fn count_format() {
    prime_range()
        .args(["0", "10000", "--format", "count"])
        .assert()
        .success()
        .stdout("1229\n");
}

#[test]
fn rejects_empty_range() {
    prime_range()
        .args(["2", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid range [2, 2]"));
}

#[test]
fn rejects_negative_bound() {
    prime_range()
        .args(["-5", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid range [-5, 10]"));
}

#[test]
fn rejects_zero_workers() {
    prime_range()
        .args(["0", "20", "--workers", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn verbose_logs_to_stderr_only() {
    prime_range()
        .args(["0", "20", "-j", "2", "--verbose"])
        .assert()
        .success()
        .stdout("2\n3\n5\n7\n11\n13\n17\n19\n")
        .stderr(predicate::str::contains("worker"));
}

#[test]
fn huge_worker_count_on_small_range() {
    prime_range()
        .args(["0", "20", "-j", "5000"])
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .success()
        .stdout("2\n3\n5\n7\n11\n13\n17\n19\n");
}
