use assert_cmd::prelude::*;
use std::process::Command;

fn solver() -> Command {
    let mut cmd = Command::cargo_bin("sokoban-race").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{:?}", output);
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn run_bfs_print_states() {
    let output = r"Solving levels/one-way.txt...
Solved in 3 moves (bfs)
rRR
Moves: 3
Pushes: 2

States created total: 6
Unique visited total: 4
Reached duplicates total: 1
Created but not reached total: 1

Depth          Created        Unique         Duplicates     Unknown (not reached)
0:             1              1              0              0
1:             1              1              0              0
2:             2              1              1              0
3:             2              1              0              1

#######
#@ $ .#
#######

#######
# @$ .#
#######

#######
#  @$.#
#######

#######
#   @*#
#######

";

    solver()
        .arg("--strategy")
        .arg("bfs")
        .arg("--print-states")
        .arg("levels/one-way.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_codes_race() {
    let stdout = stdout_of(solver().arg("--codes").arg("levels/corridor.txt"));
    assert!(stdout.starts_with("Solving levels/corridor.txt...\nSolved in "));
    assert!(stdout.contains("Pushes: "));
}

#[test]
fn run_best_first() {
    let stdout = stdout_of(solver().arg("-s").arg("astar").arg("levels/two-boxes.txt"));
    assert!(stdout.contains("(best-first)\n"));
    assert!(stdout.contains("Moves: "));
}

#[test]
fn run_no_solution() {
    let stdout = stdout_of(solver().arg("-s").arg("bfs").arg("levels/no-solution-wall.txt"));
    assert!(stdout.starts_with("Solving levels/no-solution-wall.txt...\nNo solution (bfs)\n"));
    assert!(!stdout.contains("Moves: "));
}

#[test]
fn run_timeout() {
    let stdout = stdout_of(
        solver()
            .arg("--timeout")
            .arg("0.02")
            .arg("--no-fallback")
            .arg("--max-states")
            .arg("1000000")
            .arg("levels/sealed-goals.txt"),
    );
    assert!(stdout.contains("\nNo solution found before the deadline\n"));
}

#[test]
fn run_bad_formatting_args() {
    // doesn't check stderr - clap's message is enough to see it fails and doesn't print to stdout
    solver()
        .arg("--codes")
        .arg("--xsb")
        .arg("levels/one-way.txt")
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn run_bad_level() {
    let output = solver()
        .arg("--codes")
        .arg("levels/one-way.txt")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Can't load level levels/one-way.txt"));
    assert!(stdout.contains("Invalid cell at pos: [0, 0]"));
}

#[test]
fn run_missing_file() {
    solver()
        .arg("levels/does-not-exist.txt")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn run_timeout_out_of_range() {
    let output = solver()
        .arg("--timeout")
        .arg("1e20")
        .arg("levels/one-way.txt")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Invalid value for --timeout: "));
}

#[test]
fn run_timeout_far_future() {
    // representable as a duration but not as a deadline
    let stdout = stdout_of(solver().arg("--timeout").arg("1e19").arg("levels/one-way.txt"));
    assert!(stdout.contains("\nSolved in 3 moves"));
}
