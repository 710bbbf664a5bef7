//! End-to-end runs of the `blackjack` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn blackjack() -> Command {
    Command::cargo_bin("blackjack").unwrap()
}

#[test]
fn plays_a_round_and_exits_cleanly() {
    blackjack()
        .args(["--seed", "7"])
        .write_stdin("Ada\nstay\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Welcome to blackjack!"))
        .stdout(predicate::str::contains("Ada stays..."))
        .stdout(predicate::str::ends_with(
            "Thanks for playing Blackjack! Have a good one.\n",
        ));
}

#[test]
fn dealer_threshold_is_configurable() {
    blackjack()
        .args(["--seed", "7", "--dealer-stands-on", "12"])
        .write_stdin("Ada\nstay\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dealer stays on 12."));
}

#[test]
fn seeded_runs_are_reproducible() {
    let run = || {
        blackjack()
            .args(["--seed", "1234"])
            .write_stdin("Ada\nhit\nstay\nn\n")
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn rejects_unknown_flags() {
    blackjack().arg("--split").assert().failure();
}
