use assert_cmd::Command;
use std::path::Path;

/// `tally` command running inside `dir`
pub fn tally_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.current_dir(dir);
    cmd
}

/// Append a record through the CLI
#[allow(dead_code)]
pub fn add(dir: &Path, date: &str, category: &str, amount: &str, description: &str) {
    tally_cmd(dir)
        .args(["add", date, category, amount, description])
        .assert()
        .success();
}
